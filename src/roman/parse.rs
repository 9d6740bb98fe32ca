//! Roman numeral parsing
//!
//! The input is cut into four zones, highest place first. Each zone is the
//! longest run of its place's symbols starting where the previous zone
//! ended, and may be empty. Anything left after the units zone means a
//! symbol showed up after its place had already ended.
//!
//! Each zone is then read by a small state machine that only accepts the
//! canonical digit forms: `I II III IV V VI VII VIII IX` and their
//! counterparts in the other places.

use log::trace;

use super::{PLACES, Place, Role, is_roman_symbol};
use crate::error::MalformedNumber;

/// Parse a Roman numeral into its integer value
///
/// The input must already be trimmed. Only uppercase symbols are accepted.
///
/// # Examples
///
/// ```
/// assert_eq!(numeral::roman::parse("XCIX"), Ok(99));
/// assert!(numeral::roman::parse("IIV").is_err());
/// ```
pub fn parse(input: &str) -> Result<i64, MalformedNumber> {
    if input.is_empty() {
        return Err(MalformedNumber::Empty);
    }

    let symbols: Vec<char> = input.chars().collect();
    let mut start = 0;
    let mut total = 0;

    for place in PLACES {
        let len = symbols[start..].iter().take_while(|&&s| place.contains(s)).count();
        let zone = &symbols[start..start + len];
        trace!("{} zone at {start}: {:?}", place.unit, zone.iter().collect::<String>());

        total += parse_zone(place, zone, start)? * place.weight;
        start += len;
    }

    if let Some(&symbol) = symbols.get(start) {
        return Err(if is_roman_symbol(symbol) {
            MalformedNumber::OutOfOrder {
                symbol,
                position: start,
            }
        } else {
            MalformedNumber::UnexpectedCharacter {
                character: symbol,
                position: start,
            }
        });
    }

    Ok(total)
}

/// Read one zone and return its digit (0-9)
fn parse_zone(place: Place, zone: &[char], offset: usize) -> Result<i64, MalformedNumber> {
    let mut digit = Digit::Empty;

    for (i, &symbol) in zone.iter().enumerate() {
        let position = offset + i;
        let Some(role) = place.role_of(symbol) else {
            return Err(MalformedNumber::UnexpectedCharacter {
                character: symbol,
                position,
            });
        };

        digit = match digit.step(role) {
            Some(next) => next,
            None if role == Role::Unit && digit.is_full() => {
                return Err(MalformedNumber::TooManyRepeats { symbol, position });
            },
            None => {
                return Err(MalformedNumber::IllegalSequence {
                    symbol,
                    after: zone[..i].iter().collect(),
                    position,
                });
            },
        };
    }

    Ok(digit.value())
}

/// What a zone has read so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Digit {
    /// Nothing yet
    Empty,
    /// `I`, `II`, `III`
    Units(u8),
    /// `IV`
    Four,
    /// `V` followed by 0-3 units
    Half(u8),
    /// `IX`
    Nine,
}

impl Digit {
    /// Advance by one symbol, or `None` if the symbol cannot follow
    const fn step(self, role: Role) -> Option<Self> {
        match (self, role) {
            (Self::Empty, Role::Unit) => Some(Self::Units(1)),
            (Self::Units(n), Role::Unit) if n < 3 => Some(Self::Units(n + 1)),
            (Self::Half(n), Role::Unit) if n < 3 => Some(Self::Half(n + 1)),
            (Self::Empty, Role::Half) => Some(Self::Half(0)),
            (Self::Units(1), Role::Half) => Some(Self::Four),
            (Self::Units(1), Role::Next) => Some(Self::Nine),
            _ => None,
        }
    }

    /// Three units already read in a row
    const fn is_full(self) -> bool {
        matches!(self, Self::Units(3) | Self::Half(3))
    }

    fn value(self) -> i64 {
        match self {
            Self::Empty => 0,
            Self::Units(n) => i64::from(n),
            Self::Four => 4,
            Self::Half(n) => 5 + i64::from(n),
            Self::Nine => 9,
        }
    }
}

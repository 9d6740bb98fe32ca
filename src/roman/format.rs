//! Canonical Roman numeral rendering

use super::{MAX_ROMAN, MIN_ROMAN, PLACES, Place};
use crate::error::ValueOutOfBounds;

/// Render `value` as its canonical Roman numeral
///
/// # Examples
///
/// ```
/// assert_eq!(numeral::roman::format(454).unwrap(), "CDLIV");
/// assert!(numeral::roman::format(4000).is_err());
/// ```
pub fn format(value: i64) -> Result<String, ValueOutOfBounds> {
    if !(MIN_ROMAN..=MAX_ROMAN).contains(&value) {
        return Err(ValueOutOfBounds { value });
    }

    PLACES
        .iter()
        .map(|place| render_digit(*place, (value / place.weight) % 10).ok_or(ValueOutOfBounds { value }))
        .collect()
}

/// Render a single digit in `place`, or `None` if the place has no symbol for it
fn render_digit(place: Place, digit: i64) -> Option<String> {
    let mut out = String::new();
    match digit {
        0 => {},
        1..=3 => push_units(&mut out, place.unit, digit),
        4 => {
            out.push(place.unit);
            out.push(place.half?);
        },
        5..=8 => {
            out.push(place.half?);
            push_units(&mut out, place.unit, digit - 5);
        },
        9 => {
            out.push(place.unit);
            out.push(place.next?);
        },
        _ => return None,
    }
    Some(out)
}

fn push_units(out: &mut String, unit: char, count: i64) {
    for _ in 0..count {
        out.push(unit);
    }
}

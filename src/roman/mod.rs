//! Roman numeral symbol table, parsing and rendering
//!
//! A Roman numeral is written one decimal place at a time, highest place
//! first. Every place below the thousands uses three symbols:
//!
//! ```text
//! place       unit  half  next
//! thousands    M     -     -
//! hundreds     C     D     M
//! tens         X     L     C
//! units        I     V     X
//! ```
//!
//! The `next` symbol is the unit of the place above and only ever appears in
//! the subtractive nine (`IX`, `XC`, `CM`). Thousands have no half or next
//! symbol, which caps the representable range at [`MAX_ROMAN`].

mod format;
mod parse;

pub use format::format;
pub use parse::parse;

/// Smallest value with a Roman representation
pub const MIN_ROMAN: i64 = 1;

/// Largest value with a Roman representation (`MMMCMXCIX`)
pub const MAX_ROMAN: i64 = 3999;

/// Symbols used for one decimal place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Place {
    /// One of this place (`I`)
    pub unit: char,
    /// Five of this place (`V`)
    pub half: Option<char>,
    /// Unit of the place above, used for nine (`X`)
    pub next: Option<char>,
    /// Decimal weight of the place (1, 10, 100, 1000)
    pub weight: i64,
}

/// What a symbol means within a place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The place's unit
    Unit,
    /// The place's five
    Half,
    /// The next place's unit
    Next,
}

impl Place {
    /// Role of `symbol` within this place, if it belongs to it
    #[must_use]
    pub const fn role_of(self, symbol: char) -> Option<Role> {
        if symbol == self.unit {
            return Some(Role::Unit);
        }
        if matches!(self.half, Some(half) if half == symbol) {
            return Some(Role::Half);
        }
        if matches!(self.next, Some(next) if next == symbol) {
            return Some(Role::Next);
        }
        None
    }

    /// Whether `symbol` may appear in this place's zone
    #[must_use]
    pub const fn contains(self, symbol: char) -> bool {
        self.role_of(symbol).is_some()
    }
}

/// Thousands: `M` only
pub const THOUSANDS: Place = Place {
    unit: 'M',
    half: None,
    next: None,
    weight: 1000,
};

/// Hundreds: `C`, `D`, `M`
pub const HUNDREDS: Place = Place {
    unit: 'C',
    half: Some('D'),
    next: Some('M'),
    weight: 100,
};

/// Tens: `X`, `L`, `C`
pub const TENS: Place = Place {
    unit: 'X',
    half: Some('L'),
    next: Some('C'),
    weight: 10,
};

/// Units: `I`, `V`, `X`
pub const UNITS: Place = Place {
    unit: 'I',
    half: Some('V'),
    next: Some('X'),
    weight: 1,
};

/// All places, highest first
pub const PLACES: [Place; 4] = [THOUSANDS, HUNDREDS, TENS, UNITS];

/// Whether `ch` is one of the seven Roman symbols (uppercase only)
#[must_use]
pub const fn is_roman_symbol(ch: char) -> bool {
    matches!(ch, 'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M')
}

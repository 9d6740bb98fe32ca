//! Tests for error types and their messages

use numeral::{Error, ErrorCode, MalformedNumber, NumeralConverter, ValueOutOfBounds};

#[test]
fn empty_message() {
    assert_eq!(MalformedNumber::Empty.to_string(), "value must not be empty");
}

#[test]
fn out_of_bounds_message() {
    let err = ValueOutOfBounds { value: 4000 };
    assert_eq!(
        err.to_string(),
        "Roman numerals must be between 1 and 3999, inclusive (got 4000)"
    );
}

#[test]
fn repeat_message_names_symbol() {
    let err = NumeralConverter::new("XXXX").unwrap_err();
    assert_eq!(err.to_string(), "too many 'X's in a row at position 3");
}

#[test]
fn sequence_message_shows_prefix() {
    let err = NumeralConverter::new("IIX").unwrap_err();
    assert_eq!(err.to_string(), "'X' cannot follow \"II\" at position 2");
}

#[test]
fn positions() {
    assert_eq!(MalformedNumber::Empty.position(), None);
    assert_eq!(NumeralConverter::new("MIM").unwrap_err().position(), Some(2));
}

#[test]
fn combined_error_codes() {
    let malformed: Error = MalformedNumber::Empty.into();
    let bounds: Error = ValueOutOfBounds { value: 0 }.into();
    assert_eq!(malformed.code(), ErrorCode::MalformedNumber);
    assert_eq!(bounds.code(), ErrorCode::ValueOutOfBounds);
    assert_eq!(bounds.to_string(), ValueOutOfBounds { value: 0 }.to_string());
}

#[test]
fn exit_codes_are_distinct() {
    assert_eq!(ErrorCode::MalformedNumber.exit_code(), 2);
    assert_eq!(ErrorCode::ValueOutOfBounds.exit_code(), 3);
    assert_eq!(ErrorCode::MalformedNumber.to_string(), "MALFORMED_NUMBER");
}

#[test]
fn question_mark_lifts_both_kinds() {
    fn roman_of(input: &str) -> Result<String, Error> {
        Ok(NumeralConverter::new(input)?.to_roman()?)
    }

    assert_eq!(roman_of("12").unwrap(), "XII");
    assert_eq!(roman_of("x").unwrap_err().code(), ErrorCode::MalformedNumber);
    assert_eq!(roman_of("0").unwrap_err().code(), ErrorCode::ValueOutOfBounds);
}

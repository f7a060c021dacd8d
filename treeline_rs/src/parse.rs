//! Conversion from raw tokens to typed values.
//!
//! Implemented for strings, paths, floats and every integer width. Integer
//! parsing reports out-of-range tokens distinctly from malformed ones, with
//! the valid range of the target width in the message.

use std::num::IntErrorKind;
use std::path::PathBuf;

use crate::error::{CliError, Result};

/// A value that can be produced from a single token.
pub trait ParseValue: Sized {
    fn parse_value(token: &str) -> Result<Self>;
}

impl ParseValue for String {
    fn parse_value(token: &str) -> Result<Self> {
        Ok(token.to_string())
    }
}

impl ParseValue for PathBuf {
    fn parse_value(token: &str) -> Result<Self> {
        Ok(PathBuf::from(token))
    }
}

/// Absence is decided by the caller; a token that is present always goes
/// through the inner parser.
impl<T: ParseValue> ParseValue for Option<T> {
    fn parse_value(token: &str) -> Result<Self> {
        Ok(Some(T::parse_value(token)?))
    }
}

macro_rules! impl_parse_int {
    ($($ty:ty),* $(,)?) => {$(
        impl ParseValue for $ty {
            fn parse_value(token: &str) -> Result<Self> {
                token.parse::<$ty>().map_err(|error| match error.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        CliError::IntegerOutOfRange {
                            token: token.to_string(),
                            min: <$ty>::MIN.to_string(),
                            max: <$ty>::MAX.to_string(),
                        }
                    }
                    _ => CliError::InvalidInteger(token.to_string()),
                })
            }
        }
    )*};
}

impl_parse_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_parse_float {
    ($($ty:ty),* $(,)?) => {$(
        impl ParseValue for $ty {
            fn parse_value(token: &str) -> Result<Self> {
                token
                    .parse::<$ty>()
                    .map_err(|_| CliError::InvalidNumber(token.to_string()))
            }
        }
    )*};
}

impl_parse_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strings_and_paths() {
        assert_eq!(String::parse_value("hello").expect("string"), "hello");
        assert_eq!(
            PathBuf::parse_value("src/main.rs").expect("path"),
            PathBuf::from("src/main.rs")
        );
    }

    #[test]
    fn parses_integers_of_every_width() {
        assert_eq!(i8::parse_value("-5").expect("i8"), -5);
        assert_eq!(u16::parse_value("65535").expect("u16"), 65535);
        assert_eq!(i64::parse_value("-9000000000").expect("i64"), -9000000000);
        assert_eq!(usize::parse_value("42").expect("usize"), 42);
        assert_eq!(u128::parse_value("0").expect("u128"), 0);
    }

    #[test]
    fn rejects_malformed_integers() {
        assert_eq!(
            i32::parse_value("four"),
            Err(CliError::InvalidInteger("four".into()))
        );
        assert_eq!(i32::parse_value(""), Err(CliError::InvalidInteger("".into())));
    }

    #[test]
    fn rejects_out_of_range_integers_distinctly() {
        assert_eq!(
            i8::parse_value("200"),
            Err(CliError::IntegerOutOfRange {
                token: "200".into(),
                min: "-128".into(),
                max: "127".into(),
            })
        );
        assert_eq!(
            u8::parse_value("256"),
            Err(CliError::IntegerOutOfRange {
                token: "256".into(),
                min: "0".into(),
                max: "255".into(),
            })
        );
    }

    #[test]
    fn parses_numbers() {
        assert_eq!(f32::parse_value("2.5").expect("f32"), 2.5);
        assert_eq!(f64::parse_value("-0.125").expect("f64"), -0.125);
        assert_eq!(
            f64::parse_value("abc"),
            Err(CliError::InvalidNumber("abc".into()))
        );
    }

    #[test]
    fn optional_wraps_the_inner_parser() {
        assert_eq!(Option::<i32>::parse_value("7").expect("option"), Some(7));
        assert_eq!(
            Option::<i32>::parse_value("x"),
            Err(CliError::InvalidInteger("x".into()))
        );
    }
}

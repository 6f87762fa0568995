use std::fmt;
use std::num::ParseIntError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidBase(i64),
    InvalidDigit(u8, usize),
    UnparsableBase(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidBase(base) => write!(
                f,
                "Invalid base {}. Base must be between {} and {}",
                base,
                crate::base::Base::MIN,
                crate::base::Base::MAX
            ),
            Error::InvalidDigit(byte, position) if byte.is_ascii_graphic() => write!(
                f,
                "Invalid digit '{}' at position {}",
                char::from(*byte),
                position
            ),
            Error::InvalidDigit(byte, position) => {
                write!(f, "Invalid digit 0x{:02x} at position {}", byte, position)
            }
            Error::UnparsableBase(msg) => write!(f, "Unable to parse base: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// InvalidBase:
// Base below 2 or above 62, from either operation or from Base::new
// Base text that is a number out of range, saturated to i64 when it overflows
//
// InvalidDigit:
// Byte outside 0-9, a-z, A-Z
// Digit value not below the base (e.g. 'z' in base 10)

impl From<ParseIntError> for Error {
    fn from(e: ParseIntError) -> Self {
        Error::UnparsableBase(e.to_string())
    }
}

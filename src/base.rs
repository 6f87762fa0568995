use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;
use tracing::debug;

// Output characters per input byte for each base, roughly 8 / log2(base).
// Only used to size buffers.
const GROWTH_FACTORS: [f64; 63] = [
    0.0, 0.0, 8.0, 5.052, 4.0, 3.452, 3.097, 2.852, 2.671, 2.53, 2.413, 2.317, 2.233, 2.168, 2.104,
    2.052, 2.0, 1.962, 1.923, 1.884, 1.852, 1.826, 1.8, 1.775, 1.749, 1.73, 1.704, 1.684, 1.665,
    1.652, 1.633, 1.62, 1.6, 1.588, 1.575, 1.562, 1.549, 1.542, 1.53, 1.517, 1.504, 1.497, 1.483,
    1.478, 1.471, 1.459, 1.452, 1.446, 1.439, 1.426, 1.42, 1.413, 1.407, 1.4, 1.394, 1.388, 1.381,
    1.375, 1.368, 1.362, 1.355, 1.355, 1.349,
];

/// A radix between 2 and 62 inclusive.
///
/// Holding a `Base` means the value has already been range checked, so the
/// operations that take one cannot fail on the base.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Base(u32);

impl Base {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 62;

    pub const BINARY: Base = Base(2);
    pub const OCTAL: Base = Base(8);
    pub const DECIMAL: Base = Base(10);
    pub const HEX: Base = Base(16);
    pub const BASE36: Base = Base(36);
    pub const BASE62: Base = Base(62);

    pub fn new(base: u32) -> Result<Base, Error> {
        if base < Base::MIN || base > Base::MAX {
            debug!(base, "rejected base outside supported range");
            return Err(Error::InvalidBase(i64::from(base)));
        }

        Ok(Base(base))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Above base 36 upper and lower case letters are distinct digits.
    pub fn is_case_sensitive(self) -> bool {
        self.0 > 36
    }

    pub fn growth_factor(self) -> f64 {
        GROWTH_FACTORS[self.0 as usize]
    }

    /// Expected number of digits for `byte_len` significant bytes, used as a
    /// buffer capacity.
    pub fn encoded_len_hint(self, byte_len: usize) -> usize {
        (byte_len as f64 * self.growth_factor()).ceil() as usize + 1
    }
}

impl TryFrom<u32> for Base {
    type Error = Error;

    fn try_from(base: u32) -> Result<Base, Error> {
        Base::new(base)
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> u32 {
        base.0
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "base{}", self.0)
    }
}

// Accepts "16" as well as "base16" / "Base16"
impl FromStr for Base {
    type Err = Error;

    fn from_str(s: &str) -> Result<Base, Error> {
        let s = s.trim();
        let number = match s.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("base") => &s[4..],
            _ => s,
        };

        let value = match number.parse::<i64>() {
            Ok(value) => value,
            Err(e) => {
                let kind = e.kind().clone();
                match kind {
                    IntErrorKind::PosOverflow => i64::max_value(),
                    IntErrorKind::NegOverflow => i64::min_value(),
                    _ => return Err(e.into()),
                }
            }
        };
        match u32::try_from(value) {
            Ok(base) => Base::new(base),
            Err(_) => {
                debug!(base = value, "rejected base outside supported range");
                Err(Error::InvalidBase(value))
            }
        }
    }
}

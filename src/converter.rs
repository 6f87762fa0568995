use crate::alphabet::{digit_value, symbol};
use crate::base::Base;
use crate::error::Error;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use tracing::{debug, trace};

/// Encodes bytes as digits of `base`, treating the input as one big-endian
/// unsigned integer. Zero (including empty input) encodes to `"0"`.
pub fn encode(input: &[u8], base: u32) -> Result<String, Error> {
    Ok(Converter::new(base)?.encode(input))
}

/// Decodes digits of `base` back to the minimal big-endian bytes of their value.
///
/// Zero decodes to a single `0x00` byte. Any byte that is not a digit of
/// `base` fails with [`Error::InvalidDigit`].
pub fn decode<T: AsRef<[u8]>>(input: T, base: u32) -> Result<Vec<u8>, Error> {
    Converter::new(base)?.decode(input)
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Converter {
    base: Base,
}

impl Converter {
    pub fn new(base: u32) -> Result<Converter, Error> {
        Ok(Converter {
            base: Base::new(base)?,
        })
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn encode(&self, input: &[u8]) -> String {
        trace!(base = self.base.get(), len = input.len(), "encoding");
        let base = BigUint::from(self.base.get());
        let significant = input.iter().skip_while(|&&b| b == 0).count();
        let mut digits: Vec<char> = Vec::with_capacity(self.base.encoded_len_hint(significant));

        // Least significant digit first
        let mut value = BigUint::from_bytes_be(input);
        while value >= base {
            let (quotient, remainder) = value.div_rem(&base);
            digits.push(symbol(low_digit(&remainder)));
            value = quotient;
        }
        digits.push(symbol(low_digit(&value)));

        digits.iter().rev().collect()
    }

    pub fn decode<T: AsRef<[u8]>>(&self, input: T) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        trace!(base = self.base.get(), len = input.len(), "decoding");

        let mut value = BigUint::zero();
        for (position, &byte) in input.iter().enumerate() {
            let digit = match digit_value(byte, self.base) {
                Some(digit) => digit,
                None => {
                    debug!(base = self.base.get(), position, byte, "illegal digit");
                    return Err(Error::InvalidDigit(byte, position));
                }
            };
            value *= self.base.get();
            value += digit;
        }

        Ok(value.to_bytes_be())
    }

    /// Whether `input` would decode without error.
    pub fn is_valid<T: AsRef<[u8]>>(&self, input: T) -> bool {
        input
            .as_ref()
            .iter()
            .all(|&byte| digit_value(byte, self.base).is_some())
    }
}

impl From<Base> for Converter {
    fn from(base: Base) -> Self {
        Converter { base }
    }
}

// Callers only pass values below the base, so one limb holds the whole value
fn low_digit(value: &BigUint) -> usize {
    value.iter_u32_digits().next().map_or(0, |limb| limb as usize)
}

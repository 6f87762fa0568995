//! Digit symbols and their values.
//!
//! Lookups go from byte to value only; the value to symbol direction stays
//! inside the crate.
//!
//! ```compile_fail
//! let _ = radix_rs::alphabet::symbol(62);
//! ```

use crate::base::Base;

/// Digit symbols in value order. Interoperability depends on this exact ordering.
pub const DIGITS: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const NO_DIGIT: u8 = 0xff;

lazy_static! {
    // Bases up to 36: upper case letters fold onto lower case
    static ref FOLDED_VALUES: [u8; 256] = value_table(true);
    static ref EXACT_VALUES: [u8; 256] = value_table(false);
}

fn value_table(fold_case: bool) -> [u8; 256] {
    let mut table = [NO_DIGIT; 256];
    for (value, &symbol) in DIGITS.iter().enumerate() {
        table[symbol as usize] = value as u8;
    }
    if fold_case {
        for symbol in b'A'..=b'Z' {
            table[symbol as usize] = symbol - b'A' + 10;
        }
    }

    table
}

/// Returns the symbol for a digit value. `value` must be below 62.
pub(crate) fn symbol(value: usize) -> char {
    char::from(DIGITS[value])
}

/// Maps an input byte to its digit value in `base`.
///
/// `None` when the byte is not a digit symbol at all, or when its value is
/// not below the base.
pub fn digit_value(byte: u8, base: Base) -> Option<u32> {
    let table: &[u8; 256] = if base.is_case_sensitive() {
        &*EXACT_VALUES
    } else {
        &*FOLDED_VALUES
    };
    match table[byte as usize] {
        NO_DIGIT => None,
        value if u32::from(value) < base.get() => Some(u32::from(value)),
        _ => None,
    }
}

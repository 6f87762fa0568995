//! Conversion of arbitrary-length byte buffers to and from text in any base
//! from 2 to 62.
//!
//! The input bytes are read as a single big-endian unsigned integer and
//! written out with the digits `0-9a-zA-Z`, most significant first. Up to
//! base 36 only lower case letters are produced and upper case letters are
//! accepted as their lower case equivalents; above base 36 case matters.
//!
//! The digit ordering is specific to this crate and is not compatible with
//! standard base32/base64 style encodings.
//!
//! ```
//! let encoded = radix_rs::encode(&[0xff, 0xff], 62).unwrap();
//! assert_eq!("h31", encoded);
//! assert_eq!(vec![0xff, 0xff], radix_rs::decode(&encoded, 62).unwrap());
//! ```

#[macro_use]
extern crate lazy_static;

pub mod alphabet;
pub mod base;
mod converter;
pub mod error;

pub use crate::base::Base;
pub use crate::converter::{decode, encode, Converter};
pub use crate::error::Error;

//! A Reed-Solomon RS(15, 9) forward-error-correcting codec over GF(16), with
//! an outer block interleaver for spreading burst errors across code words.
//!
//! Correction capability: `t = 3` symbol errors per 15-symbol code word.

pub mod decoder;
pub mod driver;
pub mod encoder;
pub mod error;
pub mod field;
pub mod interleaver;
pub mod packer;
pub mod poly;

pub use decoder::{decode, Decoded};
pub use driver::{decode_interleaved, decode_sequential, encode_bytes, encode_bytes_interleaved};
pub use error::{CodecError, Result};
pub use field::Symbol;

//! Base-58 encoding and decoding of arbitrary byte strings over a
//! configurable 58-character alphabet.
//!
//! Leading zero bytes are preserved as leading copies of the alphabet's
//! zero character. Both directions come in an accelerated form working on
//! 32-bit limbs ([`Encoder::encode`], [`Decoder::decode`]) and a byte-wise
//! reference form ([`Encoder::encode_trivial`], [`Decoder::decode_trivial`])
//! producing identical results.

pub mod alphabet;
pub mod buffer;
pub mod decode;
pub mod encode;

pub use alphabet::{Alphabet, ALPHABET};
pub use decode::{decode, decode_into, Decoder};
pub use encode::{encode, encode_into, Encoder};

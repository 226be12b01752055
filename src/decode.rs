use crate::{
    alphabet::{self, Alphabet, ALPHABET},
    buffer::{self, BLOCK_DIGITS, POWERS},
};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Little-endian `u32` limbs of `input`, a digit string without its leading
    /// zero characters. `offset` is the position of `input` in the whole string.
    ///
    /// Up to five digits are folded into one block before the limbs are
    /// multiplied by the matching power of 58.
    fn limbs(&self, input: &[u8], offset: usize) -> Result<Vec<u32>, Error> {
        let mut limbs: Vec<u32> = Vec::with_capacity(input.len().div_ceil(BLOCK_DIGITS));
        for (block_index, block) in input.chunks(BLOCK_DIGITS).enumerate() {
            let mut carry = 0u64;
            for (index, &character) in block.iter().enumerate() {
                let digit = self.alphabet.decode(character, offset + block_index * BLOCK_DIGITS + index)?;
                carry = carry * 58 + u64::from(digit);
            }
            let multiplier = POWERS[block.len()];
            for limb in &mut limbs {
                carry += u64::from(*limb) * multiplier;
                *limb = carry as u32;
                carry >>= 32;
            }
            if carry > 0 {
                limbs.push(carry as u32);
            }
        }
        Ok(limbs)
    }

    /// Little-endian bytes of `input`, multiplying a byte buffer by 58 for every character.
    fn bytes(&self, input: &[u8], offset: usize) -> Result<Vec<u8>, Error> {
        let mut bytes: Vec<u8> = Vec::with_capacity(buffer::max_decoded_len(input.len()));
        for (index, &character) in input.iter().enumerate() {
            let mut carry = u32::from(self.alphabet.decode(character, offset + index)?);
            for value in &mut bytes {
                carry += u32::from(*value) * 58;
                *value = (carry & 0xFF) as u8;
                carry >>= 8;
            }
            while carry > 0 {
                bytes.push((carry & 0xFF) as u8);
                carry >>= 8;
            }
        }
        Ok(bytes)
    }

    /// Writes the decoded bytes straight into `output`. Only the limb working
    /// buffer is allocated; the input is fully validated before `output` is touched.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let zeros = buffer::leading_zeros(input, self.alphabet.zero());
        let limbs = self.limbs(&input[zeros..], zeros)?;
        if output.len() < zeros {
            return Err(Error::BufferTooSmall);
        }
        let (prefix, rest) = output.split_at_mut(zeros);
        let len = buffer::unpack_limbs_into(&limbs, rest).ok_or(Error::BufferTooSmall)?;
        prefix.fill(0);
        Ok(zeros + len)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let zeros = buffer::leading_zeros(input, self.alphabet.zero());
        let limbs = self.limbs(&input[zeros..], zeros)?;
        let mut output = Vec::with_capacity(buffer::max_decoded_len(input.len()));
        output.resize(zeros, 0);
        buffer::unpack_limbs(&limbs, &mut output);
        Ok(output)
    }

    /// Reference implementation of [`Decoder::decode`], one character at a time.
    pub fn decode_trivial(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let zeros = buffer::leading_zeros(input, self.alphabet.zero());
        let bytes = self.bytes(&input[zeros..], zeros)?;
        let mut output = Vec::with_capacity(zeros + bytes.len());
        output.resize(zeros, 0);
        output.extend(bytes.iter().rev());
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

static DECODER: Decoder<'static> = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

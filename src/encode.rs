use crate::{
    alphabet::{Alphabet, ALPHABET},
    buffer::{self, BLOCK, BLOCK_DIGITS},
};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire output.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

/// Base-58 digits of `input` (without its leading zero bytes), least significant first.
///
/// Divides the number by 58^5 on every pass, four bytes at a time.
fn digits_by_block(input: &[u8]) -> Vec<u8> {
    let mut limbs = buffer::pack_limbs(input);
    let mut digits = Vec::with_capacity(buffer::max_encoded_len(input.len()) + BLOCK_DIGITS);
    let mut start = 0;
    while start < limbs.len() {
        let mut remainder = 0u64;
        for limb in &mut limbs[start..] {
            let current = (remainder << 32) | u64::from(*limb);
            *limb = (current / BLOCK) as u32;
            remainder = current % BLOCK;
        }
        while start < limbs.len() && limbs[start] == 0 {
            start += 1;
        }
        for _ in 0..BLOCK_DIGITS {
            digits.push((remainder % 58) as u8);
            remainder /= 58;
        }
    }
    // the last block is padded with zero digits
    while digits.last() == Some(&0) {
        digits.pop();
    }
    digits
}

/// Base-58 digits of `input` (without its leading zero bytes), least significant first.
///
/// Long division by 58, one byte at a time.
fn digits_by_byte(input: &[u8]) -> Vec<u8> {
    let mut number = input.to_vec();
    let mut digits = Vec::with_capacity(buffer::max_encoded_len(input.len()));
    let mut start = 0;
    while start < number.len() {
        let mut remainder = 0u32;
        for byte in &mut number[start..] {
            let current = (remainder << 8) | u32::from(*byte);
            *byte = (current / 58) as u8;
            remainder = current % 58;
        }
        digits.push(remainder as u8);
        while start < number.len() && number[start] == 0 {
            start += 1;
        }
    }
    digits
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    fn write(&self, zeros: usize, digits: &[u8], output: &mut [u8]) -> Result<usize, Error> {
        let len = zeros + digits.len();
        let output = output.get_mut(..len).ok_or(Error::BufferTooSmall)?;
        let (prefix, rest) = output.split_at_mut(zeros);
        prefix.fill(self.alphabet.zero());
        for (value, &digit) in rest.iter_mut().zip(digits.iter().rev()) {
            *value = self.alphabet.encode(digit as usize);
        }
        Ok(len)
    }

    fn render(&self, zeros: usize, digits: &[u8]) -> String {
        let mut output = Vec::with_capacity(zeros + digits.len());
        output.resize(zeros, self.alphabet.zero());
        output.extend(digits.iter().rev().map(|&digit| self.alphabet.encode(digit as usize)));
        unsafe { String::from_utf8_unchecked(output) }
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let zeros = buffer::leading_zeros(input, 0);
        self.write(zeros, &digits_by_block(&input[zeros..]), output.as_mut())
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let zeros = buffer::leading_zeros(input, 0);
        self.render(zeros, &digits_by_block(&input[zeros..]))
    }

    /// Reference implementation of [`Encoder::encode`], dividing one byte at a time.
    pub fn encode_trivial(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let zeros = buffer::leading_zeros(input, 0);
        self.render(zeros, &digits_by_byte(&input[zeros..]))
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

static ENCODER: Encoder<'static> = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

#[cfg(test)]
mod tests {
    use super::{Encoder, Error};
    use crate::alphabet::Alphabet;

    const VECTORS: &[(&[u8], &str)] = &[
        (b"", ""),
        (b"a", "2g"),
        (b"bbb", "a3gV"),
        (b"ccc", "aPEr"),
        (b"hello", "Cn8eVZg"),
        (b"simply a long string", "2cFupjhnEsSn59qHXstmK2ffpLv2"),
        (
            &[
                0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae,
                0xb1, 0x72, 0xc0, 0x66, 0x47,
            ],
            "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L",
        ),
        (&[0x51, 0x6b, 0x6f, 0xcd, 0x0f], "ABnLTmg"),
        (&[0xbf, 0x4f, 0x89, 0x00, 0x1e, 0x67, 0x02, 0x74, 0xdd], "3SEo3LWLoPntC"),
        (&[0x57, 0x2e, 0x47, 0x94], "3EFU7m"),
        (&[0xec, 0xac, 0x89, 0xca, 0xd9, 0x39, 0x23, 0xc0, 0x23, 0x21], "EJDM8drfXA6uyA"),
        (&[0x10, 0xc8, 0x51, 0x1e], "Rt5zm"),
        (&[0x00, 0x01], "12"),
        (&[0x39], "z"),
        (&[0x3a], "21"),
        (&[0x00; 10], "1111111111"),
    ];

    #[test]
    fn encode() {
        for &(input, output) in VECTORS {
            assert_eq!(super::encode(input), output);
        }
    }

    #[test]
    fn encode_trivial() {
        for &(input, output) in VECTORS {
            assert_eq!(Encoder::default().encode_trivial(input), output);
        }
    }

    #[test]
    fn encode_into() {
        let mut output = [0u8; 8];
        assert_eq!(super::encode_into(b"hello", &mut output), Ok(7));
        assert_eq!(&output[..7], b"Cn8eVZg");

        let mut output = [0u8; 6];
        assert_eq!(super::encode_into(b"hello", &mut output), Err(Error::BufferTooSmall));

        let mut output = [0u8; 0];
        assert_eq!(super::encode_into([], &mut output), Ok(0));
    }

    #[test]
    fn leading_zeros() {
        let mut input = vec![0u8; 7];
        input.extend_from_slice(b"\x01\x02\x03");
        let output = super::encode(&input);
        assert!(output.starts_with("1111111"));
        assert!(!output[7..].starts_with('1'));
    }

    #[test]
    fn custom_alphabet() {
        let alphabet: Alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz012345".parse().unwrap();
        let encoder = Encoder::new(&alphabet);
        assert_eq!(encoder.encode([0x00, 0x00, 0x39]), "AA5");
        assert_eq!(encoder.encode_trivial([0x00, 0x00, 0x39]), "AA5");
        assert_eq!(encoder.encode([0x3a]), "BA");
    }
}

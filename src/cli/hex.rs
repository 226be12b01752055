use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidHexCharacter { character: char, index: usize },
    OddLength,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidHexCharacter { character, index } => {
                write!(f, "Invalid hex character {:?} at position {}", character, index)
            }
            Error::OddLength => write!(f, "Odd number of hex digits"),
        }
    }
}

const TABLE: &[u8; 16] = b"0123456789abcdef";

const fn nibble(character: u8, index: usize) -> Result<u8, Error> {
    match character {
        b'0'..=b'9' => Ok(character - b'0'),
        b'a'..=b'f' => Ok(character - b'a' + 10),
        b'A'..=b'F' => Ok(character - b'A' + 10),
        _ => Err(Error::InvalidHexCharacter {
            character: character as char,
            index,
        }),
    }
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    if input.len() % 2 != 0 {
        return Err(Error::OddLength);
    }
    input
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| Ok(nibble(pair[0], 2 * i)? << 4 | nibble(pair[1], 2 * i + 1)?))
        .collect()
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let mut output = String::with_capacity(input.as_ref().len() * 2);
    for &byte in input.as_ref() {
        output.push(TABLE[(byte >> 4) as usize] as char);
        output.push(TABLE[(byte & 0x0F) as usize] as char);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn encode() {
        assert_eq!(super::encode([]), "");
        assert_eq!(super::encode([0x00, 0x01, 0xab, 0xff]), "0001abff");
    }

    #[test]
    fn decode() {
        assert_eq!(super::decode("0001ABff"), Ok(vec![0x00, 0x01, 0xab, 0xff]));
        assert_eq!(super::decode("abc"), Err(Error::OddLength));
        assert_eq!(
            super::decode("00zz"),
            Err(Error::InvalidHexCharacter { character: 'z', index: 2 })
        );
    }
}

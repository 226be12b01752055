use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{error, fmt, str::FromStr};

pub const SIZE: usize = 58;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidLength { length: usize },
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length } => write!(f, "Alphabet must be {} characters long ({} given)", SIZE, length),
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

/// A validated set of 58 distinct ASCII characters together with its
/// reverse lookup table.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Alphabet {
    encode: [u8; SIZE],
    decode: [Option<u8>; 128],
}

impl Alphabet {
    /// Builds the lookup tables for `characters`.
    ///
    /// Fails if the input is not exactly 58 bytes, contains a byte outside
    /// the ASCII range or repeats a character. No table is returned on failure.
    pub const fn new(characters: &[u8]) -> Result<Self, Error> {
        if characters.len() != SIZE {
            return Err(Error::InvalidLength { length: characters.len() });
        }

        let mut encode = [0u8; SIZE];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < SIZE {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    #[inline(always)]
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    #[inline(always)]
    pub fn decode(&self, character: u8, index: usize) -> Result<u8, DecodeError> {
        if character >= 128 {
            return Err(DecodeError::NonAsciiCharacter { index, character });
        }
        match self.decode[character as usize] {
            Some(value) => Ok(value),
            None => Err(DecodeError::InvalidCharacter {
                character: character as char,
                index,
            }),
        }
    }

    /// The character standing for the digit zero (and for each leading zero byte).
    pub const fn zero(&self) -> u8 {
        self.encode[0]
    }

    pub fn as_str(&self) -> &str {
        // Every character is ASCII, so this never falls back.
        std::str::from_utf8(&self.encode).unwrap_or_default()
    }
}

pub static ALPHABET: Alphabet = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::new(string.as_bytes())
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = Error;

    fn try_from(string: &str) -> Result<Self, Self::Error> {
        Self::new(string.as_bytes())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        ALPHABET
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.as_str()).finish()
    }
}

impl Serialize for Alphabet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Alphabet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let string = String::deserialize(deserializer)?;
        Self::new(string.as_bytes()).map_err(de::Error::custom)
    }
}

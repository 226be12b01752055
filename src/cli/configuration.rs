use super::error::Error;
use base58::{Alphabet, ALPHABET};
use serde::Serialize;
use std::{env, error, str::FromStr};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encode,
    Decode,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "encode" => Ok(Self::Encode),
            "decode" => Ok(Self::Decode),
            _ => Err(Error::new(format!("Invalid mode {} (expected encode or decode)", value))),
        }
    }
}

/// Representation of the binary side: stdin when encoding, stdout when decoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DataFormat {
    Raw,
    Hex,
}

impl FromStr for DataFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "raw" => Ok(Self::Raw),
            "hex" => Ok(Self::Hex),
            _ => Err(Error::new(format!("Invalid data format {}", value))),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::new(format!("Invalid output format {}", value))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    mode: Mode,
    alphabet: Alphabet,
    data_format: DataFormat,
    output_format: OutputFormat,
    verbose: bool,
}

fn var_map<T, E: error::Error>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    f: impl FnOnce(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, Error> {
    match lookup(key) {
        Some(value) => f(&value).map_err(|error| Error::new(format!("Invalid {} {} ({})", key, value, error))),
        None => default.ok_or_else(|| Error::new(format!("Missing {}", key))),
    }
}

impl Configuration {
    /// Reads the mode from the first command line argument and everything else from the environment.
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(env::args().nth(1), |key| env::var(key).ok())
    }

    pub fn from_lookup(mode: Option<String>, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mode = mode.ok_or_else(|| Error::new("Missing mode (expected encode or decode)"))?.parse()?;
        let alphabet = var_map(&lookup, "ALPHABET", |alphabet| alphabet.parse::<Alphabet>(), Some(ALPHABET))?;
        let data_format = var_map(&lookup, "DATA_FORMAT", |format| format.parse(), Some(DataFormat::Raw))?;
        let output_format = var_map(&lookup, "OUTPUT_FORMAT", |format| format.parse(), Some(OutputFormat::Text))?;
        let verbose = var_map(&lookup, "VERBOSE", |verbose| verbose.parse::<bool>(), Some(false))?;
        Ok(Self {
            mode,
            alphabet,
            data_format,
            output_format,
            verbose,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn data_format(&self) -> DataFormat {
        self.data_format
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::{Configuration, DataFormat, Mode, OutputFormat};
    use base58::ALPHABET;
    use std::collections::HashMap;

    fn configuration(mode: &str, variables: &[(&str, &str)]) -> Result<Configuration, super::Error> {
        let variables: HashMap<String, String> = variables.iter().map(|&(key, value)| (key.into(), value.into())).collect();
        Configuration::from_lookup(Some(mode.into()), |key| variables.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let configuration = configuration("encode", &[]).unwrap();
        assert_eq!(configuration.mode(), Mode::Encode);
        assert_eq!(configuration.alphabet(), &ALPHABET);
        assert_eq!(configuration.data_format(), DataFormat::Raw);
        assert_eq!(configuration.output_format(), OutputFormat::Text);
        assert!(!configuration.verbose());
    }

    #[test]
    fn variables() {
        let alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz012345";
        let configuration = configuration(
            "decode",
            &[("ALPHABET", alphabet), ("DATA_FORMAT", "hex"), ("OUTPUT_FORMAT", "json"), ("VERBOSE", "true")],
        )
        .unwrap();
        assert_eq!(configuration.mode(), Mode::Decode);
        assert_eq!(configuration.alphabet().as_str(), alphabet);
        assert_eq!(configuration.data_format(), DataFormat::Hex);
        assert_eq!(configuration.output_format(), OutputFormat::Json);
        assert!(configuration.verbose());
    }

    #[test]
    fn invalid() {
        assert_eq!(
            configuration("compress", &[]).unwrap_err().to_string(),
            "Invalid mode compress (expected encode or decode)"
        );
        assert_eq!(
            configuration("encode", &[("ALPHABET", "abc")]).unwrap_err().to_string(),
            "Invalid ALPHABET abc (Alphabet must be 58 characters long (3 given))"
        );
        assert!(configuration("encode", &[("VERBOSE", "maybe")]).is_err());
        assert!(Configuration::from_lookup(None, |_| None).is_err());
    }
}

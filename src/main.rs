mod cli;

use base58::{Alphabet, Decoder, Encoder};
use cli::{
    configuration::{Configuration, DataFormat, Mode, OutputFormat},
    hex,
    logger::Logger,
};
use serde::Serialize;
use std::{
    error,
    io::{self, Read, Write},
    process::ExitCode,
};

#[derive(Serialize)]
struct Report<'a> {
    mode: Mode,
    alphabet: &'a Alphabet,
    input_length: usize,
    output: &'a str,
}

fn report(configuration: &Configuration, input_length: usize, output: &str) -> Result<Vec<u8>, serde_json::Error> {
    let mut line = serde_json::to_vec(&Report {
        mode: configuration.mode(),
        alphabet: configuration.alphabet(),
        input_length,
        output,
    })?;
    line.push(b'\n');
    Ok(line)
}

fn encode(configuration: &Configuration, input: &[u8], logger: &Logger) -> Result<Vec<u8>, Box<dyn error::Error>> {
    let data = match configuration.data_format() {
        DataFormat::Raw => input.to_vec(),
        DataFormat::Hex => hex::decode(input.trim_ascii())?,
    };
    let encoded = Encoder::new(configuration.alphabet()).encode(&data);
    logger.log(format!("Encoded {} bytes into {} characters", data.len(), encoded.len()));
    Ok(match configuration.output_format() {
        OutputFormat::Text => format!("{}\n", encoded).into_bytes(),
        OutputFormat::Json => report(configuration, data.len(), &encoded)?,
    })
}

fn decode(configuration: &Configuration, input: &[u8], logger: &Logger) -> Result<Vec<u8>, Box<dyn error::Error>> {
    let input = input.trim_ascii();
    let decoded = Decoder::new(configuration.alphabet()).decode(input)?;
    logger.log(format!("Decoded {} characters into {} bytes", input.len(), decoded.len()));
    Ok(match (configuration.output_format(), configuration.data_format()) {
        (OutputFormat::Json, _) => report(configuration, input.len(), &hex::encode(&decoded))?,
        (OutputFormat::Text, DataFormat::Hex) => format!("{}\n", hex::encode(&decoded)).into_bytes(),
        (OutputFormat::Text, DataFormat::Raw) => decoded,
    })
}

fn process(configuration: &Configuration, input: &[u8], logger: &Logger) -> Result<Vec<u8>, Box<dyn error::Error>> {
    match configuration.mode() {
        Mode::Encode => encode(configuration, input, logger),
        Mode::Decode => decode(configuration, input, logger),
    }
}

fn run() -> Result<(), Box<dyn error::Error>> {
    let configuration = Configuration::new()?;
    let logger = Logger::new(configuration.verbose());

    let mut input = Vec::new();
    io::stdin().lock().read_to_end(&mut input)?;
    logger.log(format!("Read {} bytes", input.len()));

    let output = process(&configuration, &input, &logger)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

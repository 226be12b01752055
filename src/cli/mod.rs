pub mod chronometer;
pub mod configuration;
pub mod error;
pub mod hex;
pub mod logger;

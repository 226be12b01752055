use super::chronometer::Chronometer;
use std::fmt::Display;

/// Timing log written to stderr, so that stdout only ever carries data.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    enabled: bool,
}

impl Logger {
    pub fn new(enabled: bool) -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled,
        }
    }

    pub fn log(&self, value: impl Display) {
        if self.enabled {
            eprintln!("{} ({} elapsed)", value, self.chronometer.elapsed());
        }
    }
}

//  ____                    __  __        _
// |  _ \   __ _  ___  ___ |  \/  |  ___ | |_   ___  _ __
// | |_) | / _` |/ __|/ __|| |\/| | / _ \| __| / _ \| '__|
// |  __/ | (_| |\__ \\__ \| |  | ||  __/| |_ |  __/| |
// |_|     \__,_||___/|___/|_|  |_| \___| \__| \___||_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Interactive session state

use chrono::{DateTime, Local};
use crate::charset::{CharacterClass, CharacterClassSet};
use crate::configtool::{ConfigError, Settings};
use crate::passgen::{self, GenerationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    pub password: String,
    pub generated_at: DateTime<Local>,
}

/// Caller-held state for one interactive run. The generator and evaluator stay
/// stateless; the last generated password lives here.
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    length: usize,
    classes: CharacterClassSet,
    last_generated: Option<GeneratedPassword>,
}

#[derive(Debug)]
pub enum SessionError {
    Config(ConfigError),
    Generation(GenerationError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Config(e) => write!(f, "{}", e),
            SessionError::Generation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            length: settings.default_length,
            classes: settings.default_classes,
            settings,
            last_generated: None,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> CharacterClassSet {
        self.classes
    }

    pub fn set_length(&mut self, length: usize) -> Result<(), ConfigError> {
        self.length = self.settings.validate_length(length)?;
        Ok(())
    }

    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        self.classes.toggle(class)
    }

    /// Generates with the current selection and remembers the result.
    /// A failed generation leaves the previous password in place.
    pub fn generate(&mut self, length: Option<usize>) -> Result<&GeneratedPassword, SessionError> {
        if let Some(length) = length {
            self.set_length(length).map_err(SessionError::Config)?;
        }
        let password = passgen::generate_password(self.length, self.classes)
            .map_err(SessionError::Generation)?;
        Ok(self.last_generated.insert(GeneratedPassword {
            password,
            generated_at: Local::now(),
        }))
    }

    pub fn last_generated(&self) -> Option<&GeneratedPassword> {
        self.last_generated.as_ref()
    }
}

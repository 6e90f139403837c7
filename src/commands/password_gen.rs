use anyhow::{Result, bail};
use passmeter::charset::{CharacterClass, CharacterClassSet};
use passmeter::configtool::Settings;
use passmeter::passgen::{self, GenerationError};
use passmeter::strength;
use super::print_evaluation;

pub struct GenOptions {
    pub length: Option<usize>,
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub no_numbers: bool,
    pub no_special: bool,
    pub check: bool,
}

impl GenOptions {
    /// Starts from the configured classes and removes the excluded ones.
    pub fn classes(&self, defaults: CharacterClassSet) -> CharacterClassSet {
        let mut classes = defaults;
        let excluded = [
            (self.no_lowercase, CharacterClass::Lowercase),
            (self.no_uppercase, CharacterClass::Uppercase),
            (self.no_numbers, CharacterClass::Digit),
            (self.no_special, CharacterClass::Special),
        ];
        for (skip, class) in excluded {
            if skip {
                classes.remove(class);
            }
        }
        classes
    }
}

pub fn generate_random(options: GenOptions, settings: &Settings) -> Result<()> {
    let classes = options.classes(settings.default_classes);
    let request = settings.request(options.length, classes)?;
    log::info!("generating {} chars from [{}]", request.length, request.enabled_classes);

    let password = match passgen::generate_password(request.length, request.enabled_classes) {
        Ok(p) => p,
        Err(GenerationError::NoCharacterClassSelected) => {
            bail!("Please select at least one character type.");
        }
    };
    println!("Generated Password: {}", password);

    if options.check {
        print_evaluation(&strength::evaluate(&password));
    }
    Ok(())
}

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
// Password generator
//
// Characters are drawn from the operating system CSPRNG (`OsRng`) rather than a
// general purpose PRNG. Every character is sampled uniformly, with replacement,
// from the pooled character set; no class is forced into the output.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use thiserror::Error;
use crate::charset::{CharacterClass, CharacterClassSet};

pub const DEFAULT_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Please select at least one character type")]
    NoCharacterClassSelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub enabled_classes: CharacterClassSet,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            enabled_classes: CharacterClassSet::all(),
        }
    }
}

impl GenerationRequest {
    pub fn new(length: usize, enabled_classes: CharacterClassSet) -> Self {
        Self { length, enabled_classes }
    }

    /// Concatenated character sets of the enabled classes, in pool order.
    pub fn pool(&self) -> String {
        self.enabled_classes
            .iter()
            .map(CharacterClass::chars)
            .collect()
    }
}

/// 使用系统安全随机源生成密码
pub fn generate_password(length: usize, classes: CharacterClassSet) -> Result<String, GenerationError> {
    let request = GenerationRequest::new(length, classes);
    generate_password_with_rng(&request, &mut OsRng)
}

pub fn generate_password_with_rng<R>(request: &GenerationRequest, rng: &mut R) -> Result<String, GenerationError>
where
    R: Rng + CryptoRng,
{
    let pool: Vec<char> = request.pool().chars().collect();
    if pool.is_empty() {
        log::warn!("password generation requested with no character class enabled");
        return Err(GenerationError::NoCharacterClassSelected);
    }

    let mut password = String::with_capacity(request.length);
    for _ in 0..request.length {
        password.push(pool[rng.gen_range(0..pool.len())]);
    }

    log::debug!(
        "generated password of length {} from {} classes ({} chars in pool)",
        request.length,
        request.enabled_classes.len(),
        pool.len()
    );
    Ok(password)
}

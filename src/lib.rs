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
// Password strength meter and generator.

pub mod charset;
pub mod strength;
pub mod passgen;
pub mod configtool;
pub mod session;

pub use charset::{CharacterClass, CharacterClassSet};
pub use passgen::{GenerationError, GenerationRequest, generate_password};
pub use strength::{EvaluationResult, StrengthLabel, evaluate};

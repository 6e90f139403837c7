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
// Password strength evaluator

use std::fmt;
use serde::Serialize;
use crate::charset::CharacterClass;

/// Upper bound of the score range. The rules below top out at 85.
pub const MAX_SCORE: u8 = 100;

const LONG_LENGTH: usize = 12;
const MIN_LENGTH: usize = 8;
const LONG_POINTS: u8 = 25;
const MIN_LENGTH_POINTS: u8 = 15;
const CLASS_POINTS: u8 = 15;

pub const SUGGEST_LONGER: &str = "Make your password at least 12 characters long.";
pub const SUGGEST_TOO_SHORT: &str = "Your password is too short. Use at least 8 characters.";
pub const SUGGEST_UPPERCASE: &str = "Add uppercase letters for better security.";
pub const SUGGEST_LOWERCASE: &str = "Include lowercase letters.";
pub const SUGGEST_DIGIT: &str = "Use numbers to strengthen your password.";
pub const SUGGEST_SPECIAL: &str = "Add special characters like !@#$%^&*.";

/// 强度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
        }
    }

    /// Display color as a hex RGB string.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "#dc2626",
            StrengthLabel::Weak => "#f97316",
            StrengthLabel::Moderate => "#facc15",
            StrengthLabel::Strong => "#16a34a",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Checked top to bottom, first threshold not above the score wins.
pub const STRENGTH_LEVELS: [(u8, StrengthLabel); 4] = [
    (80, StrengthLabel::Strong),
    (60, StrengthLabel::Moderate),
    (30, StrengthLabel::Weak),
    (0, StrengthLabel::VeryWeak),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub score: u8,
    pub label: StrengthLabel,
    pub suggestions: Vec<String>,
}

impl EvaluationResult {
    pub fn is_strong(&self) -> bool {
        self.label == StrengthLabel::Strong
    }
}

pub fn classify(score: u8) -> StrengthLabel {
    STRENGTH_LEVELS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, label)| *label)
        .unwrap_or(StrengthLabel::VeryWeak)
}

/// Scores a password with five additive rules: length, then one rule per
/// character class. Never fails; the empty string scores 0.
pub fn evaluate(password: &str) -> EvaluationResult {
    let mut score = 0u8;
    let mut suggestions = Vec::new();

    let length = password.chars().count();
    if length >= LONG_LENGTH {
        score += LONG_POINTS;
    } else if length >= MIN_LENGTH {
        score += MIN_LENGTH_POINTS;
        suggestions.push(SUGGEST_LONGER.to_string());
    } else {
        suggestions.push(SUGGEST_TOO_SHORT.to_string());
    }

    let class_rules = [
        (CharacterClass::Uppercase, SUGGEST_UPPERCASE),
        (CharacterClass::Lowercase, SUGGEST_LOWERCASE),
        (CharacterClass::Digit, SUGGEST_DIGIT),
        (CharacterClass::Special, SUGGEST_SPECIAL),
    ];
    for (class, suggestion) in class_rules {
        if password.chars().any(|c| class.contains(c)) {
            score += CLASS_POINTS;
        } else {
            suggestions.push(suggestion.to_string());
        }
    }

    log::debug!("evaluated password of length {}: score {}", length, score);

    EvaluationResult {
        score,
        label: classify(score),
        suggestions,
    }
}

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
// Character classes

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// ASCII punctuation, 32 characters.
pub const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// 字符类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// Pool construction order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Special => c.is_ascii_punctuation(),
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Lowercase => 0b0001,
            CharacterClass::Uppercase => 0b0010,
            CharacterClass::Digit => 0b0100,
            CharacterClass::Special => 0b1000,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Digit => write!(f, "digit"),
            CharacterClass::Special => write!(f, "special"),
        }
    }
}

impl FromStr for CharacterClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
            "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
            "digit" | "digits" | "number" | "numbers" => Ok(CharacterClass::Digit),
            "special" | "symbol" | "symbols" => Ok(CharacterClass::Special),
            other => Err(format!("Unknown character class: {}", other)),
        }
    }
}

/// Set of enabled classes. Iterates in pool order regardless of insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClassSet(u8);

impl CharacterClassSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    /// Flips a class on or off, returning whether it is now enabled.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        self.0 ^= class.bit();
        self.contains(class)
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<CharacterClass> for CharacterClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = Self::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl fmt::Display for CharacterClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(none)");
        }
        let names: Vec<String> = self.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", names.join(", "))
    }
}

impl Serialize for CharacterClassSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for CharacterClassSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let classes = Vec::<CharacterClass>::deserialize(deserializer)?;
        Ok(classes.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_set_matches_ascii_punctuation() {
        assert_eq!(SPECIAL.len(), 32);
        assert!(SPECIAL.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn set_iterates_in_pool_order() {
        let set: CharacterClassSet = [CharacterClass::Special, CharacterClass::Lowercase]
            .into_iter()
            .collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![CharacterClass::Lowercase, CharacterClass::Special]);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut set = CharacterClassSet::all();
        assert!(!set.toggle(CharacterClass::Digit));
        assert_eq!(set.len(), 3);
        assert!(set.toggle(CharacterClass::Digit));
        assert_eq!(set, CharacterClassSet::all());
    }

    #[test]
    fn set_serializes_as_names() {
        let set: CharacterClassSet = [CharacterClass::Digit, CharacterClass::Uppercase]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["uppercase","digit"]"#);
        let back: CharacterClassSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("Numbers".parse::<CharacterClass>(), Ok(CharacterClass::Digit));
        assert_eq!("upper".parse::<CharacterClass>(), Ok(CharacterClass::Uppercase));
        assert!("emoji".parse::<CharacterClass>().is_err());
    }
}

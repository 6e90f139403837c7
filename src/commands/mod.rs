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
// Command handlers

pub mod testpass;
pub mod password_gen;
pub mod interactive;
pub mod settings;

use std::io::{self, IsTerminal, Write};
use anyhow::{Context, Result};
use rpassword::read_password;
use passmeter::strength::{EvaluationResult, MAX_SCORE, StrengthLabel};

const BAR_WIDTH: usize = 30;

/// 提示用户输入
pub fn prompt_input(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush output")?;
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// 提示用户输入密码
pub fn read_password_from_stdin(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush output")?;
    read_password().context("Failed to read password")
}

fn paint(label: StrengthLabel) -> String {
    if !io::stdout().is_terminal() {
        return label.to_string();
    }
    let hex = label.color().trim_start_matches('#');
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(255);
    format!("\x1b[1;38;2;{};{};{}m{}\x1b[0m", channel(0), channel(2), channel(4), label)
}

fn score_bar(score: u8) -> String {
    let filled = usize::from(score) * BAR_WIDTH / usize::from(MAX_SCORE);
    format!("[{}{}] {}/{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled), score, MAX_SCORE)
}

pub fn print_evaluation(result: &EvaluationResult) {
    println!("Password Strength: {}", paint(result.label));
    println!("{}", score_bar(result.score));
    if !result.suggestions.is_empty() {
        println!("Improve Your Password:");
        for item in &result.suggestions {
            println!("  - {}", item);
        }
    }
}

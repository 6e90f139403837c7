use anyhow::{Context, Result};
use passmeter::strength;
use super::{print_evaluation, read_password_from_stdin};

pub fn test_password(password: Option<String>, json: bool) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => read_password_from_stdin("Enter your password: ")?,
    };
    // 空密码不做评估
    if password.is_empty() {
        log::debug!("empty password, skipping evaluation");
        return Ok(());
    }

    let result = strength::evaluate(&password);
    log::info!("password scored {} ({})", result.score, result.label);
    if json {
        let out = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", out);
    } else {
        print_evaluation(&result);
    }
    Ok(())
}

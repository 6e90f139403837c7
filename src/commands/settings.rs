use anyhow::{Context, Result};
use passmeter::configtool::{Settings, get_config_dir};

pub fn manage_settings(show: bool, length: Option<usize>, reset: bool) -> Result<()> {
    let dir = get_config_dir()?;
    let mut settings = if reset {
        Settings::default()
    } else {
        Settings::load_from(&dir).context("Failed to load settings")?
    };

    let changed = reset || length.is_some();
    if let Some(length) = length {
        settings.default_length = settings.validate_length(length)?;
    }
    if changed {
        settings.save_to(&dir).context("Failed to save settings")?;
        println!("Settings updated.");
    }

    if show || !changed {
        println!("Config directory: {}", dir.display());
        println!("Default length: {}", settings.default_length);
        println!("Length range: {}..={}", settings.min_length, settings.max_length);
        println!("Default classes: {}", settings.default_classes);
    }
    Ok(())
}

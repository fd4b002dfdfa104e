//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::{Confirm, Select};

use crate::convert::ConversionMode;

/// Ask which conversion mode to run.
pub fn select_mode() -> Result<ConversionMode> {
    let items = ["Custom Model Data Conversion", "Item Model Conversion"];
    let choice = Select::new()
        .with_prompt("Conversion mode")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(match choice {
        0 => ConversionMode::CustomModelData,
        _ => ConversionMode::ItemModel,
    })
}

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Ask whether to convert the scanned pack.
pub fn confirm_conversion(file_count: usize) -> Result<bool> {
    confirm_step(&format!("Continue converting {} file(s)?", file_count))
}

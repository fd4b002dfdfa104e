//! Command-line argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::convert::ConversionMode;

/// Packmig - Migrate Minecraft resource packs to the 1.21.4+ item model format
#[derive(Parser, Debug)]
#[command(name = "packmig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input resource pack: a directory or a .zip archive
    #[arg(short, long, default_value = "input")]
    pub input: PathBuf,

    /// Output location (a .zip extension creates an archive, anything else
    /// a directory tree). Defaults to converted_<timestamp>.zip.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Conversion mode.
    /// If not provided, will be selected interactively.
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Skip interactive confirmation prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,
}

/// CLI spelling of the two conversion modes
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Rewrite overrides into one range_dispatch document per item
    CustomModelData,
    /// Emit one discrete item model document per override
    ItemModel,
}

impl From<ModeArg> for ConversionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::CustomModelData => ConversionMode::CustomModelData,
            ModeArg::ItemModel => ConversionMode::ItemModel,
        }
    }
}

impl Cli {
    /// Get the output path, deriving a timestamped archive name next to the
    /// working directory if not explicitly provided.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            PathBuf::from(format!("converted_{}.zip", timestamp))
        })
    }
}

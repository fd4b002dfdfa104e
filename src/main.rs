//! Packmig: Minecraft Resource Pack Migration CLI
//!
//! A command-line tool for converting resource packs from the predicate
//! override format (1.14-1.21.3) to the 1.21.4+ item model format.

mod cli;
mod convert;
mod pack;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use cli::{confirm_conversion, select_mode, Cli};
use convert::is_convertible;
use pack::{convert_pack, read_pack, write_pack, PackFile};
use report::{display_convertible_files, display_file_report, ConversionSummary};
use utils::{
    create_progress_bar, create_spinner, finish_with_success, finish_with_warning, print_banner,
    print_completion, print_config, print_count, print_info, print_step_header, print_step_time,
    print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Determine the conversion mode - either from the flag or interactively
    let mode = match cli.mode {
        Some(mode) => mode.into(),
        None => {
            if cli.no_confirm {
                anyhow::bail!(
                    "A conversion mode is required when using --no-confirm. Use -m/--mode to specify."
                );
            }
            select_mode()?
        }
    };

    let input = cli.input.clone();
    if !input.exists() {
        anyhow::bail!(
            "Input '{}' not found. Create it and place the resource pack inside.",
            input.display()
        );
    }

    let output_path = cli.output_path();

    // Print styled banner
    print_banner(env!("CARGO_PKG_VERSION"));

    // Print configuration card
    print_config(&input, mode, &output_path);

    // Step 1: Read the pack
    print_step_header(1, "Read Pack");

    let step_start = Instant::now();
    let spinner = create_spinner("Reading pack files...");
    let files = read_pack(&input)?;
    if files.is_empty() {
        finish_with_warning(&spinner, &format!("No files found in '{}'", input.display()));
        return Ok(());
    }
    finish_with_success(&spinner, &format!("Read {} file(s)", files.len()));
    print_step_time(step_start.elapsed());

    // Step 2: Scan for convertible item models
    print_step_header(2, "Scan Models");

    let step_start = Instant::now();
    let convertible: Vec<&PackFile> = files
        .iter()
        .filter(|file| is_convertible(&file.path, &file.bytes))
        .collect();

    if convertible.is_empty() {
        print_info("No convertible item models found; files will be copied unchanged");
    } else {
        print_count("convertible item model(s)", convertible.len(), None);
        let paths: Vec<&str> = convertible.iter().map(|file| file.path.as_str()).collect();
        display_convertible_files(&paths);
    }
    print_step_time(step_start.elapsed());

    if !cli.no_confirm && !confirm_conversion(files.len())? {
        println!("Cancelled by user.");
        return Ok(());
    }

    // Step 3: Convert
    print_step_header(3, "Convert");

    let step_start = Instant::now();
    let bar = create_progress_bar(files.len() as u64, "Processing files");
    let outcome = convert_pack(&files, mode, |_path| bar.inc(1));
    finish_with_success(&bar, "Conversion complete");
    print_step_time(step_start.elapsed());

    // Step 4: Write output
    print_step_header(4, "Write Output");

    let step_start = Instant::now();
    let spinner = create_spinner("Writing output...");
    write_pack(&outcome.outputs, &output_path)?;
    finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));
    print_step_time(step_start.elapsed());

    if outcome.failed() > 0 {
        println!();
        print_info(&format!(
            "{} file(s) failed to convert and were left out of the output",
            outcome.failed()
        ));
    } else {
        print_success("All files processed");
    }

    // Display processing report and summary
    display_file_report(&outcome);
    ConversionSummary::from_outcome(&outcome, &output_path).display();

    // Final completion message
    print_completion();

    Ok(())
}

//! User input utilities for interactive CLI prompts
//!
//! This module provides the stdin prompts used by the drill-down loop:
//! data-file path, numbered option menus, the record-limit prompt and
//! yes/no confirmations.

use crate::error::Result;
use std::io::{self, Write};
use std::path::PathBuf;

/// Prompt for the path to the soil samples spreadsheet.
pub fn prompt_data_path() -> Result<PathBuf> {
    print!("Enter the path to the soil samples spreadsheet: ");
    io::stdout().flush()?;

    let input = read_line()?;
    Ok(PathBuf::from(input.trim()))
}

/// Display a numbered option menu and get the user's choice.
///
/// Returns `None` when there are no options to offer (e.g. the source
/// column is missing from the dataset). Re-prompts until the input is a
/// valid selection.
pub fn prompt_selection(options: &[String], title: &str) -> Result<Option<String>> {
    if options.is_empty() {
        println!("\n{} - no options available", title);
        return Ok(None);
    }

    println!("\n{}:", title);
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
    println!();

    loop {
        print!("Select an option [1-{}]: ", options.len());
        io::stdout().flush()?;

        let input = read_line()?;
        match parse_selection(input.trim(), options.len()) {
            Some(index) => return Ok(Some(options[index].clone())),
            None => println!("Invalid selection. Please choose 1-{}.", options.len()),
        }
    }
}

/// Prompt for the maximum number of records to show.
///
/// Empty or non-numeric input means no limit; the filter engine likewise
/// treats zero and negative values as no limit.
pub fn prompt_limit() -> Result<Option<i64>> {
    print!("Maximum number of records to show (Enter for all): ");
    io::stdout().flush()?;

    let input = read_line()?;
    Ok(parse_limit(input.trim()))
}

/// Get user confirmation for an action
pub fn prompt_confirmation(message: &str, default_yes: bool) -> Result<bool> {
    let default_text = if default_yes { "Y/n" } else { "y/N" };
    print!("{} [{}]: ", message, default_text);
    io::stdout().flush()?;

    let input = read_line()?;
    let input = input.trim().to_lowercase();

    if input.is_empty() {
        return Ok(default_yes);
    }

    match input.as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => {
            println!("Please enter 'y' for yes or 'n' for no.");
            prompt_confirmation(message, default_yes)
        }
    }
}

/// Parse a 1-based menu selection into a 0-based index.
pub(crate) fn parse_selection(input: &str, option_count: usize) -> Option<usize> {
    match input.parse::<usize>() {
        Ok(choice) if choice >= 1 && choice <= option_count => Some(choice - 1),
        _ => None,
    }
}

/// Parse a record limit; anything that is not an integer means no limit.
pub(crate) fn parse_limit(input: &str) -> Option<i64> {
    input.parse().ok()
}

fn read_line() -> Result<String> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}

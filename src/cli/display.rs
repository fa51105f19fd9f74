//! Terminal rendering for the interactive session.

use crate::models::QueryOutcome;
use colored::*;

/// Clear the terminal and move the cursor home.
pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

/// Program banner shown at the top of every screen.
pub fn print_header() {
    let rule = "=".repeat(58);
    println!("{}", rule.bright_green());
    println!(
        "{}",
        "   Crop Edaphic Properties Query System"
            .bright_green()
            .bold()
    );
    println!("{}", rule.bright_green());
}

/// One-line description of the active query.
pub fn print_query_banner(department: &str, municipality: &str, crop: &str) {
    println!(
        "{} {} in {}, {}",
        "Query:".bright_cyan(),
        crop.bright_white().bold(),
        municipality.bright_white(),
        department.bright_white()
    );
}

/// Render the filtered rows and their edaphic statistics.
pub fn render_outcome(outcome: &QueryOutcome) {
    if outcome.row_count() == 0 {
        println!(
            "\n{}",
            "No records matched the selected criteria.".bright_yellow()
        );
        return;
    }

    println!(
        "\n{} {}",
        "Matching records:".bright_cyan(),
        outcome.row_count().to_string().bright_white().bold()
    );
    println!("{}", outcome.rows);

    println!("{}", "Edaphic statistics (median):".bright_cyan());
    for (label, value) in outcome.stats.labelled() {
        let label = format!("{}:", label);
        match value {
            Some(median) => println!(
                "  {:<13} {}",
                label,
                format!("{:.2}", median).bright_white().bold()
            ),
            None => println!("  {:<13} {}", label, "not available".dimmed()),
        }
    }
}

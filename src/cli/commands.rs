//! Interactive session driver.
//!
//! Wires up logging, the load/re-prompt loop and the drill-down query
//! loop: department -> municipality -> crop -> record limit -> results.

use crate::cli::args::Args;
use crate::cli::{display, input};
use crate::error::Result;
use crate::models::FilterCriteria;
use crate::session::QuerySession;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Outcome of one pass through the drill-down menus.
enum QueryStep {
    /// A query ran and its results were rendered
    Completed,
    /// Some menu level had no options to offer
    NoOptions,
}

/// Run the interactive session to completion.
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;

    display::clear_screen();
    display::print_header();

    let session = open_session(args.data_file)?;
    println!(
        "{} Total records: {}",
        "Data loaded successfully.".bright_green(),
        session.record_count().to_string().bright_white().bold()
    );

    run_query_loop(&session)?;

    println!(
        "\n{}",
        "Thank you for using the Crop Edaphic Properties Query System.".bright_green()
    );
    Ok(())
}

/// Load the dataset, re-prompting on paths that do not exist.
///
/// Any other load failure is fatal and aborts the session before the main
/// loop starts.
fn open_session(initial: Option<PathBuf>) -> Result<QuerySession> {
    let mut next_path = initial;

    loop {
        let path = match next_path.take() {
            Some(path) => path,
            None => input::prompt_data_path()?,
        };

        let spinner = load_spinner(&path);
        match QuerySession::open(&path) {
            Ok(session) => {
                spinner.finish_and_clear();
                return Ok(session);
            }
            Err(error) if error.is_recoverable() => {
                spinner.finish_and_clear();
                warn!("load failed: {}", error);
                println!(
                    "{}",
                    format!(
                        "The file {} does not exist. Please check the path.",
                        path.display()
                    )
                    .bright_red()
                );
            }
            Err(error) => {
                spinner.finish_and_clear();
                return Err(error);
            }
        }
    }
}

fn load_spinner(path: &Path) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Loading {}...", path.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// The main query loop: one drill-down per iteration until the user stops.
fn run_query_loop(session: &QuerySession) -> Result<()> {
    loop {
        display::clear_screen();
        display::print_header();
        println!("{} {}", "Data file:".bright_cyan(), session.source_name());

        if let QueryStep::NoOptions = run_single_query(session)? {
            println!(
                "{}",
                "Nothing to query at this level of the dataset.".bright_yellow()
            );
        }

        if !input::prompt_confirmation("Would you like to run another query?", true)? {
            break;
        }
    }

    Ok(())
}

/// One full drill-down: cascading selections, then filter and aggregate.
fn run_single_query(session: &QuerySession) -> Result<QueryStep> {
    let Some(department) = input::prompt_selection(&session.departments(), "Select a department")?
    else {
        return Ok(QueryStep::NoOptions);
    };

    let municipalities = session.municipalities(&department)?;
    let title = format!("Select a municipality of {}", department);
    let Some(municipality) = input::prompt_selection(&municipalities, &title)? else {
        return Ok(QueryStep::NoOptions);
    };

    let crops = session.crops(&department, &municipality)?;
    let title = format!("Select a crop in {}, {}", municipality, department);
    let Some(crop) = input::prompt_selection(&crops, &title)? else {
        return Ok(QueryStep::NoOptions);
    };

    let mut criteria = FilterCriteria::new()
        .with_department(department.clone())
        .with_municipality(municipality.clone())
        .with_crop(crop.clone());
    if let Some(limit) = input::prompt_limit()? {
        criteria = criteria.with_limit(limit);
    }

    debug!("running query: {:?}", criteria);
    let outcome = session.query(&criteria)?;
    info!("query matched {} records", outcome.row_count());

    display::clear_screen();
    display::print_header();
    display::print_query_banner(&department, &municipality, &crop);
    display::render_outcome(&outcome);

    Ok(QueryStep::Completed)
}

/// Set up structured logging to stderr.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("edaphic_query={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

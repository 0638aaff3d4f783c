mod catalog;
mod cli;
mod enrich;
mod reference;

use std::error::Error;
use std::process::ExitCode;

use catalog::CatalogError;
use clap::Parser;
use cli::{Cli, Mode};
use reference::ReferenceTable;
use tracing::{debug, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match init_tracing().and_then(|()| run(&cli).map_err(Into::into)) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", failure_line(&*e));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("term_examples=info".parse()?),
        )
        .init();
    Ok(())
}

/// Display form of a fatal error, as printed on stderr before exiting.
fn failure_line(e: &dyn Error) -> String {
    format!("error: {e}")
}

/// Load, enrich and (depending on mode) persist the catalog.
/// Returns the line to print on success.
fn run(cli: &Cli) -> Result<String, CatalogError> {
    let table = ReferenceTable::builtin();
    debug!(entries = table.len(), "reference table ready");

    let mut records = catalog::load(&cli.file)?;
    let summary = enrich::enrich(&table, &mut records);
    info!(
        file = %cli.file.display(),
        total = summary.total,
        matched = summary.matched,
        fallback = summary.fallback,
        changed = summary.changed,
        "catalog enriched"
    );

    match cli.mode() {
        Mode::Write => {
            let output = cli.output_path();
            catalog::save(output, &records, usize::from(cli.indent))?;
            info!(path = %output.display(), "catalog written");
            Ok(format!("Updated {} terms with famous music pieces!", summary.total))
        }
        Mode::DryRun => Ok(format!(
            "Dry run: {} of {} terms would change ({} matched, {} fallback)",
            summary.changed, summary.total, summary.matched, summary.fallback
        )),
        Mode::Check if summary.changed > 0 => Err(CatalogError::Stale {
            changed: summary.changed,
        }),
        Mode::Check => Ok(format!("All {} terms have up-to-date examples", summary.total)),
    }
}

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use pages_relativizer::logging::init_console_logging;
use pages_relativizer::{RewriteConfig, RewriteError, RunSummary, relativize_directory};

#[derive(Parser)]
#[command(name = "relativize-paths")]
#[command(
  version,
  about = "Rewrite absolute asset paths in every HTML file below a directory so the site works on GitHub Pages"
)]
struct Cli {
  /// Root directory to scan for HTML files
  #[arg(value_name = "DIRECTORY", default_value = ".")]
  directory: PathBuf,
}

fn main() -> ExitCode {
  match run() {
    Ok(code) => code,
    Err(e) => {
      eprintln!("error: {e:?}");
      ExitCode::FAILURE
    }
  }
}

fn run() -> Result<ExitCode> {
  let cli = Cli::parse();
  init_console_logging()?;

  println!("Fixing paths for GitHub Pages in {}", cli.directory.display());

  let summary = match relativize_directory(&cli.directory, &RewriteConfig::default()) {
    Ok(summary) => summary,
    Err(err @ RewriteError::MissingDirectory { .. }) => {
      eprintln!("error: {err}");
      return Ok(ExitCode::FAILURE);
    }
    Err(err) => return Err(err.into()),
  };

  print_summary(&summary);
  Ok(ExitCode::SUCCESS)
}

fn print_summary(summary: &RunSummary) {
  if summary.processed == 0 {
    println!("No HTML files found.");
  }

  println!();
  println!("Processed:  {}", summary.processed);
  println!("Modified:   {}", summary.modified);
  println!("Unmodified: {}", summary.unmodified);
  if !summary.failures.is_empty() {
    println!("Failed:     {}", summary.failed());
    for failure in &summary.failures {
      println!("   - {}: {}", failure.path.display(), failure.error);
    }
  }
}

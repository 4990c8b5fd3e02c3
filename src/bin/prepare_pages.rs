use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use pages_relativizer::logging::init_console_logging;
use pages_relativizer::{PreparedSite, ReferenceCheck, RewriteConfig, SitePreparer};

#[derive(Parser)]
#[command(name = "prepare-pages")]
#[command(
  version,
  about = "Prepare an exported WordPress site for GitHub Pages: fix paths, write .nojekyll and README.md, check assets"
)]
struct Cli {
  /// Root directory of the exported site
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

  if !cli.directory.is_dir() {
    eprintln!("error: directory {} does not exist", cli.directory.display());
    return Ok(ExitCode::FAILURE);
  }

  println!("Preparing {} for GitHub Pages deployment...", cli.directory.display());
  let config = RewriteConfig::default();
  let prepared = SitePreparer::new(&cli.directory, &config).prepare()?;

  print_report(&prepared);
  Ok(ExitCode::SUCCESS)
}

fn print_report(prepared: &PreparedSite) {
  let summary = &prepared.summary;
  println!(
    "Fixed paths in {} of {} files ({} unchanged, {} failed)",
    summary.modified,
    summary.processed,
    summary.unmodified,
    summary.failed()
  );
  for failure in &summary.failures {
    println!("   - {}: {}", failure.path.display(), failure.error);
  }
  println!("Created {}", prepared.marker_path.display());
  println!("Created {}", prepared.readme_path.display());

  println!();
  println!("Verifying file structure...");
  match &prepared.references {
    ReferenceCheck::Checked(missing) if missing.is_empty() => {
      println!("All referenced files found!");
    }
    ReferenceCheck::Checked(missing) => {
      println!("Missing files:");
      for path in missing {
        println!("   - {path}");
      }
      println!("Some scripts may be missing but the core styling should still work.");
    }
    ReferenceCheck::Skipped(reason) => {
      println!("Skipped reference check: {reason}");
    }
  }

  println!();
  println!("Checking font files...");
  if prepared.missing_fonts.is_empty() {
    println!("All font files found!");
  } else {
    println!("Missing font files:");
    for font in &prepared.missing_fonts {
      println!("   - {font}");
    }
    println!("The site will fall back to system fonts for these.");
  }

  println!();
  println!("Ready for GitHub Pages deployment!");
  println!("Next steps:");
  println!("1. Commit and push these changes to your repository");
  println!("2. Go to your repository Settings > Pages");
  println!("3. Select 'Deploy from a branch' and choose your main branch");
  println!("4. Your site will be available at: https://[username].github.io/[repository-name]/");
}

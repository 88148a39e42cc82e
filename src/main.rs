use anyhow::Result;
use clap::Parser;

use release_check::analyzer::TagClassifier;
use release_check::cli::{run_release_check, CheckArgs};
use release_check::config;
use release_check::git::{RepositorySource, Snapshot};
use release_check::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-check",
    about = "Check that a proposed version is a valid next release"
)]
struct Args {
    #[arg(help = "Requested release version (prompted for when omitted)")]
    candidate: Option<String>,

    #[arg(short, long, help = "Snapshot file with captured git output")]
    snapshot: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Release branch (overrides configuration)")]
    release_branch: Option<String>,

    #[arg(long, help = "Show classified release tags and exit")]
    list_tags: bool,

    #[arg(long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if args.version {
        println!("release-check {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(2);
        }
    };

    let Some(snapshot_path) = args.snapshot.as_deref() else {
        ui::display_error("A snapshot file is required (--snapshot <FILE>)");
        std::process::exit(2);
    };

    let snapshot = match Snapshot::load(snapshot_path) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            ui::display_error(&format!("Failed to load '{}': {}", snapshot_path, e));
            std::process::exit(2);
        }
    };

    if args.list_tags {
        let release_branch = args
            .release_branch
            .clone()
            .unwrap_or_else(|| config.release_branch.clone());
        let tags = snapshot.list_tags()?;
        let membership = snapshot.branch_membership(&tags)?;
        let classified =
            TagClassifier::new(release_branch.as_str()).classify(&tags, &membership);
        ui::display_tags(&classified, &release_branch);
        return Ok(());
    }

    let candidate = match args.candidate {
        Some(candidate) => candidate,
        None => match ui::prompt_candidate() {
            Ok(candidate) => candidate,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(2);
            }
        },
    };

    let check = CheckArgs {
        candidate,
        release_branch: args.release_branch,
    };
    let report = run_release_check(&snapshot, &check, &config)?;

    ui::display_report(&report);

    if report.is_releasable(&config.behavior) {
        println!();
        ui::display_success(&format!("{} is ready to release", report.candidate));
        Ok(())
    } else {
        println!();
        ui::display_failure(&format!("{} is not ready to release", report.candidate));
        std::process::exit(1);
    }
}

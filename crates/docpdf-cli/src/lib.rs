use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use docpdf_config::{Config, LoadOptions};
use docpdf_guide::{render_guide, GuideOptions};
use docpdf_layout::FontCandidate;
use docpdf_readme::{render_readme, ReadmeArtifact, ReadmeError, ReadmeOptions, ReadmeOutcome};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let mut load = LoadOptions::default();
    if let Some(path) = &cli.config {
        load = load.with_override_path(path.clone());
    }

    let config = match Config::load(load) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("docpdf error: {err}");
            return Ok(2);
        }
    };
    debug!(
        layers = config.sources.layers.len(),
        working_dir = %config.sources.working_directory.display(),
        "configuration loaded"
    );

    match cli.command {
        Command::Guide(args) => handle_guide(&config, args),
        Command::Readme(args) => handle_readme(&config, args, false),
        Command::Html(args) => handle_readme(&config, args, true),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default = if quiet {
        "warn"
    } else if verbose > 0 {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn font_candidates(config: &Config) -> Vec<FontCandidate> {
    config
        .fonts
        .candidates
        .iter()
        .map(|setting| FontCandidate::new(&setting.path, setting.name.as_str()))
        .collect()
}

fn handle_guide(config: &Config, args: GuideArgs) -> Result<i32> {
    let GuideArgs { output, json } = args;

    let options = GuideOptions {
        output: output.unwrap_or_else(|| config.guide.output.clone()),
        fonts: font_candidates(config),
    };

    let outcome = render_guide(&options)
        .with_context(|| format!("failed to render guide to {}", options.output.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!(
            "PDF generated: {} ({} pages, font {})",
            outcome.output.display(),
            outcome.pages,
            outcome.font
        );
    }

    Ok(0)
}

fn handle_readme(config: &Config, args: ReadmeArgs, html_only: bool) -> Result<i32> {
    let ReadmeArgs {
        input,
        output,
        title,
        json,
    } = args;

    let options = ReadmeOptions {
        input: input.unwrap_or_else(|| config.readme.input.clone()),
        output: output.unwrap_or_else(|| config.readme.output.clone()),
        title: title.unwrap_or_else(|| config.readme.title.clone()),
        fonts: font_candidates(config),
        html_only,
    };

    match render_readme(&options) {
        Ok(outcome) => {
            report_readme(&outcome, json)?;
            Ok(0)
        }
        Err(ReadmeError::InputNotFound { path }) => {
            eprintln!("Error: {} not found", path.display());
            Ok(1)
        }
        Err(err) => Err(err.into()),
    }
}

fn report_readme(outcome: &ReadmeOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    match &outcome.artifact {
        ReadmeArtifact::Pdf { .. } => println!("PDF generated: {}", outcome.output.display()),
        ReadmeArtifact::Html { reason: Some(_) } => {
            println!("Generated HTML instead: {}", outcome.output.display())
        }
        ReadmeArtifact::Html { reason: None } => {
            println!("HTML generated: {}", outcome.output.display())
        }
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Render project documentation to PDF",
    propagate_version = true
)]
struct Cli {
    /// Configuration file applied on top of `.docpdf.toml`
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Log more detail (debug level)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the bilingual framework guide
    Guide(GuideArgs),
    /// Render a Markdown README to PDF, falling back to HTML
    Readme(ReadmeArgs),
    /// Convert a Markdown README to HTML only
    Html(ReadmeArgs),
}

#[derive(Args)]
struct GuideArgs {
    /// Override the PDF output path
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Print a JSON summary instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ReadmeArgs {
    /// Markdown source file
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,
    /// Output path; the HTML variant uses the same path with `.html`
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Document title
    #[arg(long)]
    title: Option<String>,
    /// Print a JSON summary instead of plain text
    #[arg(long)]
    json: bool,
}

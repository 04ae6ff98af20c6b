//! inline-sass CLI
//!
//! Compiles the Sass stylesheets linked from an HTML document and prints the
//! document with all CSS inlined into `style` attributes.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use inline_sass::{CssStyle, InlineOutcome, InlineSassOptions, inline_sass_with_report};

#[derive(Parser)]
#[command(name = "inline-sass")]
#[command(version)]
#[command(about = "Compile linked Sass stylesheets and inline the CSS into HTML", long_about = None)]
struct Cli {
    /// HTML file, or the HTML text itself
    input: String,

    /// Base URL for relative links when INPUT is HTML text (file:// for a local directory)
    #[arg(long)]
    url: Option<String>,

    /// Keep the temporary directory of compiled stylesheets
    #[arg(long)]
    keep_temp_dir: bool,

    /// Create the temporary directory under DIR instead of the OS temp root
    #[arg(long)]
    temp_root: Option<PathBuf>,

    /// JSON file with options; flags given here override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output style of compiled stylesheets
    #[arg(long)]
    style: Option<CssStyle>,

    /// Extra directory for @use/@import resolution (repeatable)
    #[arg(short = 'I', long)]
    load_path: Vec<PathBuf>,

    /// Write output to FILE instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> Result<InlineSassOptions> {
        let base = match &self.config {
            Some(path) => InlineSassOptions::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => InlineSassOptions::default(),
        };

        let mut builder = base.into_builder();
        if let Some(url) = &self.url {
            builder = builder.url(url.clone());
        }
        if self.keep_temp_dir {
            builder = builder.delete_temp_dir(false);
        }
        if let Some(root) = &self.temp_root {
            builder = builder.temp_root(root.clone());
        }
        if let Some(style) = self.style {
            builder = builder.style(style);
        }
        for dir in &self.load_path {
            builder = builder.load_path(dir.clone());
        }

        builder.build().context("Invalid options")
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = cli.options()?;

    let report = inline_sass_with_report(&cli.input, &options)
        .await
        .context("inline-sass failed")?;

    for sheet in &report.stylesheets {
        log::info!(
            "Compiled {} -> {}",
            sheet.original_href,
            sheet.output_path.display()
        );
    }

    let html = match report.outcome {
        InlineOutcome::Inlined(html) => html,
        InlineOutcome::Degraded { reason } => {
            log::error!("No output produced: {reason}");
            return Ok(ExitCode::from(2));
        }
    };

    match &cli.output {
        Some(path) => std::fs::write(path, html)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{html}"),
    }

    Ok(ExitCode::SUCCESS)
}

//! snapshot-dom CLI
//!
//! Snapshots an HTML page rendered in Chrome/Chromium, or a JSON node tree,
//! and prints the resulting record as JSON.

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use snapshot_dom::browser::{BrowserSession, DEFAULT_SELECTOR, LaunchOptions};
use snapshot_dom::dom::{Record, SnapshotOptions, snapshot_json};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// HTML document rendered in the browser
    Html,
    /// JSON node tree (tagName, nodeName, nodeValue, attributes, childNodes)
    Json,
}

#[derive(Parser)]
#[command(name = "snapshot-dom")]
#[command(version)]
#[command(about = "Convert a DOM tree into a JSON snapshot", long_about = None)]
struct Cli {
    /// Input file, or `-` to read a JSON node tree from stdin
    input: String,

    /// Input format (default: guessed from the file extension)
    #[arg(long, short = 'f', value_enum)]
    format: Option<InputFormat>,

    /// CSS selector of the root node to snapshot (HTML input only)
    #[arg(long, short = 's', default_value = DEFAULT_SELECTOR)]
    selector: String,

    /// Leave out attributes with an empty value while serializing
    #[arg(long)]
    skip_empty_value: bool,

    /// Drop empty attributes after serializing
    #[arg(long)]
    remove_empty_attributes: bool,

    /// Sort attribute names; the listed attributes also get their values sorted
    #[arg(long, value_name = "NAME", num_args = 0..)]
    sort_attributes: Option<Vec<String>>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    chrome_path: Option<PathBuf>,
}

impl Cli {
    fn snapshot_options(&self) -> SnapshotOptions {
        SnapshotOptions {
            skip_empty_value: self.skip_empty_value,
            remove_empty_attributes: self.remove_empty_attributes,
            sort_attributes: self.sort_attributes.clone(),
        }
    }

    fn input_format(&self) -> anyhow::Result<InputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        if self.input == "-" {
            return Ok(InputFormat::Json);
        }
        match Path::new(&self.input).extension().and_then(|e| e.to_str()) {
            Some("html" | "htm") => Ok(InputFormat::Html),
            Some("json") => Ok(InputFormat::Json),
            _ => bail!("Cannot guess the format of '{}', pass --format", self.input),
        }
    }
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}

fn snapshot_html(cli: &Cli, html: &str, options: &SnapshotOptions) -> anyhow::Result<Record> {
    let mut launch = LaunchOptions::new().headless(!cli.headed);
    if let Some(path) = &cli.chrome_path {
        launch = launch.chrome_path(path);
    }

    let session = BrowserSession::launch(launch).context("Failed to start browser")?;
    session.set_content(html)?;
    let record = session.snapshot(&cli.selector, options)?;
    session.close()?;
    Ok(record)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.snapshot_options();
    let source = read_input(&cli.input)?;

    let record = match cli.input_format()? {
        InputFormat::Html => snapshot_html(&cli, &source, &options)?,
        InputFormat::Json => snapshot_json(&source, &options)
            .with_context(|| format!("Failed to parse node tree from {}", cli.input))?,
    };

    let output = if cli.compact {
        record.to_json_compact()?
    } else {
        record.to_json()?
    };
    println!("{}", output);

    Ok(())
}

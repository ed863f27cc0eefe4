//! Command-line front end for rs-readable.
//!
//! Reads a saved HTML response from a file or stdin and prints the extracted
//! article as markdown, or as JSON with `--json`.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rs_readable::{extract_with_options, ExtractedArticle, Options};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Extract the main article from an HTML document.
#[derive(Parser)]
#[command(name = "rs-readable", version, about)]
struct Cli {
    /// HTML file to read; stdin when omitted.
    input: Option<PathBuf>,

    /// URL the page was fetched from, used to resolve relative links.
    #[arg(long)]
    url: Url,

    /// Transport Content-Type header, e.g. "text/html; charset=iso-8859-1".
    #[arg(long)]
    content_type: Option<String>,

    /// Minimum text length (chars) for a content candidate.
    #[arg(long)]
    min_candidate_len: Option<usize>,

    /// Print the article as JSON.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let bytes = read_input(cli.input.as_ref())?;

    let mut options = Options::default();
    if let Some(min) = cli.min_candidate_len {
        options.min_candidate_len = min;
    }

    let article = extract_with_options(&bytes, cli.content_type.as_deref(), &cli.url, &options)
        .with_context(|| format!("failed to extract article from {}", cli.url))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&article)?);
    } else {
        print!("{}", format_markdown(&article));
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn format_markdown(article: &ExtractedArticle) -> String {
    if article.title.is_empty() {
        return article.content_markdown.clone();
    }
    format!("# {}\n\n{}", article.title, article.content_markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_levels() {
        assert_eq!(log_filter(true).to_string(), "debug");

        std::env::remove_var(EnvFilter::DEFAULT_ENV);
        assert_eq!(log_filter(false).to_string(), "warn");
    }

    #[test]
    fn title_heads_the_markdown() {
        let article = ExtractedArticle {
            title: "Headline".to_string(),
            content_markdown: "Body.\n".to_string(),
        };
        assert_eq!(format_markdown(&article), "# Headline\n\nBody.\n");

        let untitled = ExtractedArticle {
            title: String::new(),
            ..article
        };
        assert_eq!(format_markdown(&untitled), "Body.\n");
    }
}

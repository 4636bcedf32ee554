//! c-javadoc-extractor: turn javadoc-style comments into markdown files.
//!
//! Documentation comments (`/** ... */`, optionally `/*! ... */`) are
//! assumed to already contain markdown. Each source file's comments are
//! collected into a markdown file mirroring the source tree, e.g.
//! `src/buffer.c` + `src/buffer.h` → `src-doc/src/buffer.md`, and a
//! `README.md` index links all of them.
//!
//! ```text
//! c-javadoc-extractor --output-dir src-doc/ src/*.c src/*.h
//! ```

mod fragment;
mod model;
mod output;
mod registry;
mod render;
mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "c-javadoc-extractor",
    version,
    about = "Extract markdown from javadoc style comments and create markdown files from it"
)]
struct Cli {
    /// Input files, directories or glob patterns, processed in the given order
    files: Vec<String>,

    /// Where to place the generated files
    #[arg(short = 'o', long = "output-dir", default_value = "src-doc/")]
    output_dir: PathBuf,

    /// Also treat `/*!` as the start of a documentation comment
    #[arg(long)]
    bang: bool,

    /// Log every comment and fragment found
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

/// Run configuration for [`run`].
struct ExtractConfig {
    output_dir: PathBuf,
    scan: scanner::ScanOptions,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        // --help / --version
        Err(e) => e.exit(),
    };

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input_files = expand_inputs(&cli.files)?;
    let config = ExtractConfig {
        output_dir: cli.output_dir,
        scan: scanner::ScanOptions {
            accept_bang: cli.bang,
        },
    };
    run(&input_files, &config)
}

/// Scan every input, then write all output. Nothing is written if any input fails.
fn run(input_files: &[String], config: &ExtractConfig) -> Result<()> {
    let mut registry = model::Registry::new();

    for path in input_files {
        tracing::info!("Reading {}", path);
        let source = fs::read(path).with_context(|| format!("failed to read {}", path))?;
        let found =
            registry::extract_documentation_comments(&mut registry, path, &source, config.scan)
                .with_context(|| format!("{}: malformed input", path))?;
        tracing::info!("Done reading {} ({} comments)", path, found);
    }

    tracing::info!("*** Starting output of markdown files ***");
    let written = output::write_markdown_files(&registry, &config.output_dir)?;
    tracing::info!(
        "Done outputting markdown files ({} files, {} targets)",
        written,
        registry.len()
    );
    Ok(())
}

/// File extensions picked up when a directory is given as input.
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "c", "h", "cc", "cpp", "cxx", "hh", "hpp", "hxx", "java", "js", "ts",
];

/// Expand arguments into input paths.
///
/// Argument order is kept and duplicates are not removed; only the matches
/// of a single directory or glob are sorted.
fn expand_inputs(patterns: &[String]) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(pattern.clone());
            continue;
        }
        // Directory: supported source files only, non-recursive
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            let mut found: Vec<PathBuf> = entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|p| p.is_file() && has_supported_extension(p))
                .collect();
            found.sort();
            files.extend(found.iter().map(|p| p.to_string_lossy().to_string()));
            continue;
        }
        let mut matches: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            // Let the read fail with a proper error for plain paths
            if !is_glob(pattern) {
                files.push(pattern.clone());
            } else {
                tracing::warn!("no files matched: {}", pattern);
            }
            continue;
        }
        matches.sort();
        files.extend(matches.iter().map(|p| p.to_string_lossy().to_string()));
    }
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

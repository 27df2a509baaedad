//! Weld CLI
//!
//! Lists the external style and script references of an HTML document and
//! merges the referenced files into a single self-contained output.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use serde::Serialize;
use weld_refs::{ReferenceKind, resolve_url};
use weld_session::{MergeSession, SessionOutcome, picker_prefill};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "weld", version, about = "Merge referenced styles and scripts into one HTML file")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the style and script files a document references
    List {
        /// HTML file to scan
        source: PathBuf,
        /// Emit the reference descriptors as JSON
        #[arg(long)]
        json: bool,
    },
    /// Merge referenced files into a single output document
    Merge {
        /// HTML file to merge
        source: PathBuf,
        /// Referenced files, paired in listing order; when omitted, each
        /// listed name is read relative to the source file's directory
        payloads: Vec<PathBuf>,
        /// Output path (default: source name with `.html` -> `Merged.html`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// One row of the machine-readable listing.
#[derive(Serialize)]
struct ListEntry<'session> {
    index: usize,
    kind: ReferenceKind,
    file: Option<&'session str>,
    tag: &'session str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::List { source, json } => run_list(&source, json),
        Command::Merge {
            source,
            payloads,
            output,
        } => run_merge(&source, &payloads, output),
    }
}

fn load_session(source: &Path) -> Result<SessionOutcome> {
    let text = fs::read_to_string(source)
        .with_context(|| format!("failed to read '{}'", source.display()))?;
    let name = source
        .file_name()
        .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
    Ok(MergeSession::load(text, name))
}

fn run_list(source: &Path, json: bool) -> Result<()> {
    let SessionOutcome::Ready(session) = load_session(source)? else {
        println!("no referenced files");
        return Ok(());
    };

    if json {
        let entries: Vec<ListEntry<'_>> = session
            .references()
            .iter()
            .enumerate()
            .map(|(index, reference)| ListEntry {
                index,
                kind: reference.kind,
                file: resolve_url(reference),
                tag: &reference.raw_tag,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let names = session.file_names();
    println!("{}", "referenced style & script files".bold());
    for (number, name) in names.iter().enumerate() {
        println!("{}: {name}", number + 1);
    }
    println!();
    println!("prefill: {}", picker_prefill(&names));
    Ok(())
}

fn run_merge(source: &Path, payloads: &[PathBuf], output: Option<PathBuf>) -> Result<()> {
    let SessionOutcome::Ready(mut session) = load_session(source)? else {
        println!("no referenced files");
        return Ok(());
    };

    let pending = session.pending_files();
    let paths: Vec<(usize, PathBuf)> = if payloads.is_empty() {
        let base = source.parent().unwrap_or_else(|| Path::new("."));
        pending
            .iter()
            .map(|(index, name)| (*index, base.join(name)))
            .collect()
    } else {
        if payloads.len() != pending.len() {
            bail!(
                "expected {} referenced file(s), got {}",
                pending.len(),
                payloads.len()
            );
        }
        pending
            .iter()
            .map(|(index, _)| *index)
            .zip(payloads.iter().cloned())
            .collect()
    };

    for (index, path) in paths {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read referenced file '{}'", path.display()))?;
        session.supply_payload(index, text)?;
    }

    let merged = session.merge()?;
    let out_path =
        output.unwrap_or_else(|| source.with_file_name(session.merged_output_name()));
    fs::write(&out_path, merged)
        .with_context(|| format!("failed to write '{}'", out_path.display()))?;
    println!("{} {}", "merged".green().bold(), out_path.display());
    Ok(())
}

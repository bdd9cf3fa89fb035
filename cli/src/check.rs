//! # `shastream check`
//!
//! Reads a checksum list (`<hex>  <name>` or `<hex> *<name>` per line, with a
//! leading `\` when the name is escaped), rehashes every named file and
//! reports `OK` or `FAILED` for each.

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, ensure, Context};
use clap::Args;
use hashes::sha256;

use crate::sum::parse_chunk_size;
use crate::{escape_file_name, unescape_file_name, Input, DEFAULT_CHUNK_SIZE};

/// Arguments for `shastream check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Checksum list to verify.
    pub sumfile: PathBuf,

    /// Only print failures.
    #[arg(long)]
    pub quiet: bool,

    /// Number of bytes read per call while streaming an input.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    pub chunk_size: usize,
}

/// One parsed line of a checksum list.
#[derive(Debug, PartialEq, Eq)]
pub struct ChecksumLine<'a> {
    /// Expected digest.
    pub hash: sha256::Hash,
    /// File the digest belongs to, unescaped.
    pub name: Cow<'a, str>,
}

/// Parses `<64 hex chars>` followed by `"  "` or `" *"` and a file name.
///
/// A leading `\` marks an escaped file name.
pub fn parse_line(line: &str) -> anyhow::Result<ChecksumLine<'_>> {
    let (escaped, line) = match line.strip_prefix('\\') {
        Some(rest) => (true, rest),
        None => (false, line),
    };
    let (hex, rest) = line.split_once(' ').context("missing separator after digest")?;
    let name = match rest.strip_prefix(' ').or_else(|| rest.strip_prefix('*')) {
        Some(name) => name,
        None => bail!("separator must be two spaces or \" *\""),
    };
    ensure!(!name.is_empty(), "missing file name");
    let hash = hex.parse::<sha256::Hash>().with_context(|| format!("invalid digest {hex:?}"))?;
    let name = if escaped { Cow::Owned(unescape_file_name(name)?) } else { Cow::Borrowed(name) };
    Ok(ChecksumLine { hash, name })
}

fn write_status(out: &mut impl Write, name: &str, status: &str) -> io::Result<()> {
    match escape_file_name(name) {
        Cow::Borrowed(name) => writeln!(out, "{name}: {status}"),
        Cow::Owned(name) => writeln!(out, "\\{name}: {status}"),
    }
}

/// Outcome counts of a check run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Files whose digest matched.
    pub ok: usize,
    /// Files whose digest did not match.
    pub mismatched: usize,
    /// Files that could not be read.
    pub unreadable: usize,
    /// Lines that could not be parsed.
    pub malformed: usize,
}

impl CheckSummary {
    /// Whether every listed file verified and every line parsed.
    pub fn all_ok(&self) -> bool {
        self.mismatched == 0 && self.unreadable == 0 && self.malformed == 0
    }
}

/// Verifies every entry of `list`, writing a status line per file.
pub fn verify_list(
    list: &str,
    chunk_size: usize,
    quiet: bool,
    out: &mut impl Write,
) -> anyhow::Result<CheckSummary> {
    let mut summary = CheckSummary::default();
    for (lineno, line) in list.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry = match parse_line(line) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(line = lineno + 1, "improperly formatted checksum line: {e:#}");
                summary.malformed += 1;
                continue;
            }
        };

        match Input::from_arg(&entry.name).digest(chunk_size) {
            Ok(actual) if actual == entry.hash => {
                summary.ok += 1;
                if !quiet {
                    write_status(out, &entry.name, "OK")?;
                }
            }
            Ok(actual) => {
                tracing::debug!(name = %entry.name, expected = %entry.hash, %actual, "digest mismatch");
                summary.mismatched += 1;
                write_status(out, &entry.name, "FAILED")?;
            }
            Err(e) => {
                tracing::error!("{e:#}");
                summary.unreadable += 1;
                write_status(out, &entry.name, "FAILED open or read")?;
            }
        }
    }
    Ok(summary)
}

/// Runs `shastream check`; exit code 1 unless every entry verified.
pub fn run_check(args: &CheckArgs, out: &mut impl Write) -> anyhow::Result<u8> {
    let list = std::fs::read_to_string(&args.sumfile)
        .with_context(|| format!("cannot read checksum list {}", args.sumfile.display()))?;

    let summary = verify_list(&list, args.chunk_size, args.quiet, out)?;
    if summary.ok + summary.mismatched + summary.unreadable == 0 {
        bail!("no properly formatted checksum lines found in {}", args.sumfile.display());
    }
    if summary.malformed > 0 {
        tracing::warn!("{} lines are improperly formatted", summary.malformed);
    }
    if summary.unreadable > 0 {
        tracing::warn!("{} listed files could not be read", summary.unreadable);
    }
    if summary.mismatched > 0 {
        tracing::warn!("{} computed checksums did NOT match", summary.mismatched);
    }
    tracing::info!(ok = summary.ok, "check finished");

    Ok(if summary.all_ok() { 0 } else { 1 })
}

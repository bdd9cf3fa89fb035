//! # shastream-cli
//!
//! Embedding program for the `shastream_hashes` engine. Every input is
//! streamed through a [`sha256::HashEngine`] in fixed-size reads, so files of
//! any size are hashed in constant memory.
//!
//! ## Subcommands
//!
//! - `shastream sum [FILES]...`: print `<hex>  <name>` per input (`-` or no
//!   argument reads stdin).
//! - `shastream text <STRING>...`: hash literal strings.
//! - `shastream check <SUMFILE>`: verify a checksum list produced by `sum`
//!   or by `sha256sum`.
//!
//! File names holding a backslash, newline or carriage return are escaped the
//! way `sha256sum` escapes them, with a leading `\` on the checksum line.

pub mod check;
pub mod sum;
pub mod text;

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, ensure, Context};
use hashes::sha256;

/// Default read size when streaming inputs.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// A source of bytes to hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl Input {
    /// Interprets a command-line operand; `-` means stdin.
    pub fn from_arg(arg: &str) -> Input {
        if arg == "-" {
            Input::Stdin
        } else {
            Input::File(PathBuf::from(arg))
        }
    }

    /// Computes the digest of this input.
    pub fn digest(&self, chunk_size: usize) -> anyhow::Result<sha256::Hash> {
        match self {
            Input::Stdin => digest_reader(io::stdin().lock(), chunk_size),
            Input::File(path) => {
                let file =
                    File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
                digest_reader(file, chunk_size)
                    .with_context(|| format!("cannot hash {}", path.display()))
            }
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("-"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Escapes backslash, newline and carriage return in a file name, as `sha256sum` does.
///
/// Returns the name unchanged when it needs no escaping. A checksum line for an
/// escaped name starts with a `\`.
pub fn escape_file_name(name: &str) -> Cow<'_, str> {
    if !name.contains(|c: char| matches!(c, '\\' | '\n' | '\r')) {
        return Cow::Borrowed(name);
    }
    let mut escaped = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Inverse of [`escape_file_name`].
pub fn unescape_file_name(escaped: &str) -> anyhow::Result<String> {
    let mut name = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            name.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => name.push('\\'),
            Some('n') => name.push('\n'),
            Some('r') => name.push('\r'),
            Some(other) => bail!("invalid escape \"\\{other}\" in file name"),
            None => bail!("file name ends in a lone backslash"),
        }
    }
    Ok(name)
}

/// Writes one `<hex>  <name>` checksum line, escaping the name when needed.
pub fn write_checksum_line(
    out: &mut impl Write,
    hash: &sha256::Hash,
    name: &str,
) -> io::Result<()> {
    match escape_file_name(name) {
        Cow::Borrowed(name) => writeln!(out, "{hash}  {name}"),
        Cow::Owned(name) => writeln!(out, "\\{hash}  {name}"),
    }
}

/// Streams `reader` to its end through a fresh engine, `chunk_size` bytes at a time.
pub fn digest_reader<R: Read>(mut reader: R, chunk_size: usize) -> anyhow::Result<sha256::Hash> {
    ensure!(chunk_size > 0, "chunk size must be greater than zero");

    let mut engine = sha256::HashEngine::new();
    let mut buf = vec![0u8; chunk_size];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("read failed"),
        };
        engine.input(&buf[..n])?;
    }
    let hash = engine.finalize()?;
    tracing::trace!(bytes = engine.n_bytes_hashed(), %hash, "digest complete");
    Ok(hash)
}

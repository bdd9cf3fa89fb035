//! # `shastream sum`
//!
//! Hashes files or stdin and prints one `<hex>  <name>` line per input, the
//! format `sha256sum` uses and `shastream check` reads back.

use std::io::Write;

use clap::Args;

use crate::{write_checksum_line, Input, DEFAULT_CHUNK_SIZE};

/// Arguments for `shastream sum`.
#[derive(Args, Debug)]
pub struct SumArgs {
    /// Files to hash. With no file, or when a file is `-`, read stdin.
    pub files: Vec<String>,

    /// Number of bytes read per call while streaming an input.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    pub chunk_size: usize,
}

pub(crate) fn parse_chunk_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("chunk size must be greater than zero".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl SumArgs {
    fn inputs(&self) -> Vec<Input> {
        if self.files.is_empty() {
            vec![Input::Stdin]
        } else {
            self.files.iter().map(|f| Input::from_arg(f)).collect()
        }
    }
}

/// Hashes every input, writing a checksum line for each one that could be read.
///
/// Returns exit code 1 when at least one input failed.
pub fn run_sum(args: &SumArgs, out: &mut impl Write) -> anyhow::Result<u8> {
    let mut failed = 0usize;
    for input in args.inputs() {
        tracing::debug!(%input, chunk_size = args.chunk_size, "hashing");
        match input.digest(args.chunk_size) {
            Ok(hash) => write_checksum_line(out, &hash, &input.to_string())?,
            Err(e) => {
                tracing::error!("{e:#}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        tracing::warn!(failed, "some inputs could not be hashed");
        Ok(1)
    } else {
        Ok(0)
    }
}

//! # `shastream text`
//!
//! Hashes string operands directly, without a trailing newline.

use std::io::Write;

use clap::Args;
use hashes::sha256;

/// Arguments for `shastream text`.
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Strings to hash, taken as UTF-8 bytes.
    #[arg(required = true)]
    pub strings: Vec<String>,
}

/// Returns the lowercase hex SHA256 digest of `input`.
pub fn sha256_hex(input: &str) -> String {
    sha256::hash(input.as_bytes()).to_string()
}

/// Writes `<hex>  <string>` for every operand.
pub fn run_text(args: &TextArgs, out: &mut impl Write) -> anyhow::Result<u8> {
    for s in &args.strings {
        tracing::debug!(len = s.len(), "hashing string operand");
        writeln!(out, "{}  {}", sha256_hex(s), s)?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_of_known_strings() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex("The quick brown fox jumps over the lazy dog"),
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
        );
    }

    #[test]
    fn run_text_lines() {
        let args = TextArgs { strings: vec!["abc".to_string(), "abd".to_string()] };
        let mut out = Vec::new();
        assert_eq!(run_text(&args, &mut out).unwrap(), 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad  abc\n\
             a52d159f262b2c6ddb724a61840befc36eb30c88877a4030b65cbe86298449c9  abd\n"
        );
    }
}

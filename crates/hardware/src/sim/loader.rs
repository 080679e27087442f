//! Program Image Loader.
//!
//! Reads the LS-8 text image format into bytes:
//! 1. **Comments:** Everything from `#` to the end of a line is dropped.
//! 2. **Blank lines:** Lines empty after stripping are skipped and take no address.
//! 3. **Tokens:** Every other line is one base-2 literal holding a single byte.
//!
//! ```text
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! ```

use std::fs;
use std::path::Path;

use crate::common::error::LoadError;

/// Returns the token carried by `line`, or `None` for comment-only and blank lines.
pub fn token(line: &str) -> Option<&str> {
    let code = line.split_once('#').map_or(line, |(code, _)| code).trim();
    (!code.is_empty()).then_some(code)
}

/// Parses one binary token into a byte.
///
/// Only the digits `0` and `1` are accepted, and the value must fit in 8 bits.
pub fn parse_token(token: &str) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(token, 2).ok()
}

/// Parses a program image held in memory.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for the first line whose token is not a
/// binary byte literal.
pub fn parse_program(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let Some(tok) = token(line) else {
            continue;
        };
        let byte = parse_token(tok).ok_or_else(|| LoadError::Parse {
            line: idx + 1,
            token: tok.to_string(),
        })?;
        image.push(byte);
    }
    Ok(image)
}

/// Reads and parses a program image file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read (check
/// [`LoadError::is_not_found`] for a missing file) and [`LoadError::Parse`]
/// for a malformed line.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_program(&text)?;
    tracing::debug!(path = %path.display(), bytes = image.len(), "program loaded");
    Ok(image)
}

//! Program Loader.
//!
//! This module turns LS-8 program text into a memory image. It performs:
//! 1. **Parsing:** One binary literal per line (`10000010`); `#` starts a comment.
//! 2. **Validation:** Rejects literals that are not binary or do not fit in a byte,
//!    and images larger than main memory.
//! 3. **File loading:** Reads a program file from disk and parses it.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::common::constants::MEMORY_SIZE;

/// Character that starts a comment running to end of line.
const COMMENT_MARKER: char = '#';

/// Errors produced while loading a program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line holds something other than an 8-bit binary literal.
    #[error("line {line}: invalid instruction byte `{text}`")]
    InvalidLiteral {
        /// 1-based line number.
        line: usize,
        /// The offending text, comment stripped.
        text: String,
    },

    /// The program does not fit in main memory.
    #[error("program is {len} bytes; memory holds {max}", max = MEMORY_SIZE)]
    ProgramTooLarge {
        /// Number of bytes parsed.
        len: usize,
    },
}

/// Parses program text into a byte image.
///
/// # Arguments
///
/// * `source` - Program text.
///
/// # Returns
///
/// The instruction bytes in order, ready for [`Cpu::load`](crate::core::Cpu::load).
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_program;
///
/// let program = parse_program("10000010 # LDI R0,8\n00000000\n00001000\n\n00000001 # HLT\n").unwrap();
/// assert_eq!(program, vec![0b1000_0010, 0, 8, 1]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let text = raw
            .split_once(COMMENT_MARKER)
            .map_or(raw, |(code, _)| code)
            .trim();
        if text.is_empty() {
            continue;
        }
        let byte = u8::from_str_radix(text, 2).map_err(|_| LoadError::InvalidLiteral {
            line: idx + 1,
            text: text.to_owned(),
        })?;
        program.push(byte);
    }
    if program.len() > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge { len: program.len() });
    }
    Ok(program)
}

/// Reads and parses a program file.
///
/// # Arguments
///
/// * `path` - Path to the program text file.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&source)?;
    tracing::debug!(path = %path.display(), bytes = program.len(), "parsed program");
    Ok(program)
}

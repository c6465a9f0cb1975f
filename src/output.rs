//! Output emission
//!
//! Prints generated text and optionally writes `<Name>.h` /
//! `<Name>.cpp`. Writing is guarded by a plain existence check: a file
//! that is already there is skipped, never overwritten. The
//! check-then-write is not atomic; single-user usage makes the race
//! inconsequential.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::ScaffoldError;

/// Which files an invocation should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileSelection {
    #[default]
    Both,
    HeaderOnly,
    ImplementationOnly,
}

impl FileSelection {
    pub fn wants_header(&self) -> bool {
        matches!(self, FileSelection::Both | FileSelection::HeaderOnly)
    }

    pub fn wants_implementation(&self) -> bool {
        matches!(self, FileSelection::Both | FileSelection::ImplementationOnly)
    }
}

/// What happened to one target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    SkippedExisting(PathBuf),
    PrintedOnly,
}

/// Emit one generated file: print it, and write it when requested.
///
/// Returns the outcome so the front-end can report what was produced.
pub fn emit(
    directory: &Path,
    file_name: &str,
    text: &str,
    write: bool,
) -> Result<WriteOutcome, ScaffoldError> {
    println!("{text}");

    if !write {
        return Ok(WriteOutcome::PrintedOnly);
    }

    let path = directory.join(file_name);
    if path.exists() {
        warn!(path = %path.display(), "target file exists, not overwriting");
        return Ok(WriteOutcome::SkippedExisting(path));
    }

    fs::write(&path, text)?;
    info!(path = %path.display(), "wrote generated file");
    Ok(WriteOutcome::Written(path))
}

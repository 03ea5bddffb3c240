//! Loading and saving `.ini` files.
//!
//! This is plain glue around [`Document::from_reader`] and the [`writer`](crate::writer): it checks
//! the file extension and turns I/O failures into a [`FileError`] that names the path involved.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{Document, ParseError, writer};

const EXTENSION: &str = "ini";

#[derive(Debug, Error)]
pub enum FileError {
    #[error("{}: the file should have an ini extension (.ini)", .path.display())]
    InvalidExtension { path: PathBuf },
    #[error("{}: no such file", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Read and parse the INI file at `path`.
///
/// # Errors
///
/// [`FileError::InvalidExtension`] unless the path ends in `.ini`, [`FileError::FileNotFound`]
/// if it does not exist, otherwise the read or parse failure.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document, FileError> {
    let path = path.as_ref();
    check_extension(path)?;

    let mut file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => FileError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => FileError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let document = Document::from_reader(&mut file).map_err(|source| match source {
        ParseError::ReadFailure { source } => FileError::Read {
            path: path.to_path_buf(),
            source,
        },
        source => FileError::Parse {
            path: path.to_path_buf(),
            source,
        },
    })?;

    log::debug!(
        "loaded {} section(s) from {}",
        document.len(),
        path.display()
    );

    Ok(document)
}

/// Serialize `document` to the INI file at `path`, replacing any existing content.
///
/// # Errors
///
/// [`FileError::InvalidExtension`] unless the path ends in `.ini`, otherwise
/// [`FileError::Write`].
pub fn save<P: AsRef<Path>>(document: &Document, path: P) -> Result<(), FileError> {
    let path = path.as_ref();
    check_extension(path)?;

    let write_error = |source| FileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    writer::write_document(document, BufWriter::new(file)).map_err(write_error)?;

    log::debug!(
        "saved {} section(s) to {}",
        document.len(),
        path.display()
    );

    Ok(())
}

fn check_extension(path: &Path) -> Result<(), FileError> {
    if path.extension().is_some_and(|ext| ext == EXTENSION) {
        Ok(())
    } else {
        Err(FileError::InvalidExtension {
            path: path.to_path_buf(),
        })
    }
}

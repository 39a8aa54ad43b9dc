//! File loading and saving
//!
//! Thin wrappers reading an actor file from disk through the [Parser] and writing one through
//! the [ActorWriter]. The whole file is read into memory before parsing.

use crate::actor::ast::Actor;
use crate::actor::formats::{ActorWriter, WriteError};
use crate::actor::parsing::{ParseError, Parser};
use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteError,
    },

    #[error("Failed to replace {}: {source}", .path.display())]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read and parse the actor file at `path`.
pub fn load_actor_file(path: impl AsRef<Path>, parser: &Parser) -> Result<Actor, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "loaded actor file");
    parser.parse(&source).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `actor` to `path` in canonical form, replacing any existing file.
///
/// The output goes to a sibling `.tmp` file first, which is then renamed over `path`. A failure
/// at any step leaves the existing file untouched.
pub fn write_actor_file(
    actor: &Actor,
    path: impl AsRef<Path>,
    writer: &ActorWriter,
) -> Result<(), LoadError> {
    let path = path.as_ref();
    let staging = staging_path(path);

    let file = fs::File::create(&staging).map_err(|source| LoadError::Create {
        path: staging.clone(),
        source,
    })?;
    if let Err(source) = writer.write(actor, BufWriter::new(file)) {
        let _ = fs::remove_file(&staging);
        return Err(LoadError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    fs::rename(&staging, path).map_err(|source| {
        let _ = fs::remove_file(&staging);
        LoadError::Replace {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::debug!(path = %path.display(), "wrote actor file");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

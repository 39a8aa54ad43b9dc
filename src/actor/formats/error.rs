//! Writer errors

use std::io;
use thiserror::Error;

/// The sink failed while emitting output. `step` names what was being written.
#[derive(Debug, Error)]
#[error("{step}: {source}")]
pub struct WriteError {
    pub step: &'static str,
    #[source]
    pub source: io::Error,
}

impl WriteError {
    /// Adapter for `map_err`, tagging an I/O failure with the step that hit it.
    pub fn at(step: &'static str) -> impl FnOnce(io::Error) -> WriteError {
        move |source| WriteError { step, source }
    }
}

//! Error types for seqdraw operations.
//!
//! [`SeqdrawError`] wraps the errors of every pipeline stage. Stage errors
//! convert into it with `?`.

use std::io;

use thiserror::Error;

use crate::{export, input::InputError, layout, render};

/// The main error type for seqdraw operations.
///
/// The `Input` variant keeps the source document so that callers can point
/// at the offending location.
#[derive(Debug, Error)]
pub enum SeqdrawError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Input { err: InputError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(#[from] layout::Error),

    #[error("Render error: {0}")]
    Render(#[from] render::Error),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),
}

impl SeqdrawError {
    /// Create a new `Input` error with the associated source document.
    pub fn new_input_error(err: InputError, src: impl Into<String>) -> Self {
        Self::Input {
            err,
            src: src.into(),
        }
    }
}

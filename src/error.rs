//! Error types for fnplot.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! None of the plotting conditions are fatal: callers recover locally and
//! surface the message on the status line.

use thiserror::Error;

/// Result type alias for fnplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur in fnplot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// A domain text field could not be parsed as a finite real number.
    #[error("Invalid {field} value: '{text}' is not a finite number")]
    InvalidDomainInput {
        /// Which bound the text was meant for.
        field: &'static str,
        /// The rejected text.
        text: String,
    },

    /// The domain is empty or inverted, so the curve collapses to a flat line.
    #[error("Degenerate range [{start}, {end}]: drawing a flat line")]
    DegenerateRange {
        /// Domain start.
        start: f64,
        /// Domain end.
        end: f64,
    },

    /// The viewport is too small to hold the border and at least one sample.
    #[error("Viewport {width}x{height} is too small to draw")]
    DegenerateViewport {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },

    /// A viewport size could not be parsed from text.
    #[error("Invalid viewport '{0}': expected WIDTHxHEIGHT, each at most 65536")]
    InvalidViewport(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Create an InvalidDomainInput error.
    pub fn invalid_input(field: &'static str, text: impl Into<String>) -> Self {
        Self::InvalidDomainInput {
            field,
            text: text.into(),
        }
    }

    /// Create an InvalidViewport error.
    pub fn invalid_viewport(text: impl Into<String>) -> Self {
        Self::InvalidViewport(text.into())
    }
}

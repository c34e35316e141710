//! fnplot - A terminal function plotter.
//!
//! fnplot draws one function from a small fixed catalog (`x^2`, `x^3`,
//! `sin(x)`, `cos(x)`, `e^x`) over a user-chosen range, as a polyline
//! scaled to fill the terminal.
//!
//! # Features
//!
//! - Five built-in functions picked from a list
//! - Editable range fields with validation
//! - Braille-resolution canvas that follows terminal resizes
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use fnplot::catalog::Function;
//! use fnplot::plot::{to_curve, Domain, Viewport};
//!
//! let curve = to_curve(Function::Square, Domain::new(-10.0, 10.0), Viewport::new(7, 103));
//! let rows: Vec<f64> = curve.points().iter().map(|p| p.row).collect();
//! assert_eq!(rows, [0.0, 75.0, 100.0, 75.0, 0.0]);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod plot;
pub mod surface;
pub mod ui;

pub use error::{PlotError, Result};

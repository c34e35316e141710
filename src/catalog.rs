//! The fixed catalog of plottable functions.

use clap::ValueEnum;

/// A function offered in the selection list.
///
/// The set is closed and ordered; [`Function::ALL`] is the order the list
/// shows them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Function {
    /// x^2
    #[default]
    Square,
    /// x^3
    Cube,
    /// sin(x)
    Sin,
    /// cos(x)
    Cos,
    /// e^x
    Exp,
}

impl Function {
    /// Every catalog entry, in display order.
    pub const ALL: [Function; 5] = [
        Function::Square,
        Function::Cube,
        Function::Sin,
        Function::Cos,
        Function::Exp,
    ];

    /// Get the display name.
    pub fn name(self) -> &'static str {
        match self {
            Function::Square => "x^2",
            Function::Cube => "x^3",
            Function::Sin => "sin(x)",
            Function::Cos => "cos(x)",
            Function::Exp => "e^x",
        }
    }

    /// Evaluate the function at `x`.
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Function::Square => x * x,
            Function::Cube => x * x * x,
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Exp => x.exp(),
        }
    }

    /// Look up a catalog entry by list position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this entry in the list.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&f| f == self)
            .unwrap_or_default()
    }
}

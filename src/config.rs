//! Launch settings and layout constants.

use crate::catalog::Function;
use crate::plot::Domain;

/// Settings the application starts with.
#[derive(Debug, Clone, Default)]
pub struct PlotConfig {
    /// Function selected at startup.
    pub function: Function,
    /// Domain plotted at startup.
    pub domain: Domain,
    /// Layout of the controls.
    pub layout: LayoutConfig,
}

/// Sizes of the controls below the canvas.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Visible entries in the function list.
    pub list_height: u16,
    /// Width of each domain text field, in characters.
    pub field_width: u16,
    /// Minimum width of the function list, in characters.
    pub list_min_width: u16,
}

impl LayoutConfig {
    /// Height of the control row, list borders included.
    pub fn controls_height(&self) -> u16 {
        self.list_height + 2
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            list_height: Function::ALL.len() as u16,
            field_width: 15,
            list_min_width: 12,
        }
    }
}

//! Application state and logic.

use crate::catalog::Function;
use crate::config::{LayoutConfig, PlotConfig};
use crate::input::{format_bound, parse_domain, TextField};
use crate::plot::{Domain, PlotCurve, Viewport};
use crate::surface::{render, ShapeBuffer, Surface};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Control receiving key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The function list.
    #[default]
    List,
    /// The domain start field.
    From,
    /// The domain end field.
    To,
}

impl Focus {
    /// Next control in tab order.
    pub fn next(self) -> Self {
        match self {
            Focus::List => Focus::From,
            Focus::From => Focus::To,
            Focus::To => Focus::List,
        }
    }

    /// Previous control in tab order.
    pub fn prev(self) -> Self {
        match self {
            Focus::List => Focus::To,
            Focus::From => Focus::List,
            Focus::To => Focus::From,
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Function being plotted.
    pub function: Function,
    /// Last domain that parsed successfully.
    pub domain: Domain,
    /// Domain start field.
    pub from: TextField,
    /// Domain end field.
    pub to: TextField,
    /// Highlighted entry in the function list.
    pub list_cursor: usize,
    /// Control receiving key input.
    pub focus: Focus,
    /// Shapes of the current plot.
    pub scene: ShapeBuffer,
    /// Curve of the current plot.
    pub curve: PlotCurve,
    /// Number of completed recomputations.
    pub redraws: u64,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Control sizes.
    pub layout: LayoutConfig,
}

impl App {
    /// Create a new application instance.
    pub fn new(config: PlotConfig) -> Self {
        let mut app = Self {
            function: config.function,
            domain: config.domain,
            from: TextField::new(format_bound(config.domain.start)),
            to: TextField::new(format_bound(config.domain.end)),
            list_cursor: config.function.index(),
            focus: Focus::List,
            scene: ShapeBuffer::default(),
            curve: PlotCurve::default(),
            redraws: 0,
            status: String::new(),
            theme: Theme::GruvboxDark,
            layout: config.layout,
        };
        app.recompute();
        app.status = app.describe();
        app
    }

    /// Current canvas size.
    pub fn viewport(&self) -> Viewport {
        self.scene.size()
    }

    /// Handle a canvas size change. The domain is left as is.
    pub fn resize(&mut self, viewport: Viewport) {
        tracing::debug!("Resize to {}", viewport);
        self.scene.resize(viewport);
        self.recompute();
    }

    /// Switch to the catalog entry at `index` and redraw.
    pub fn activate_function(&mut self, index: usize) {
        let Some(function) = Function::from_index(index) else {
            return;
        };
        self.function = function;
        self.list_cursor = index;
        self.redraw_request();
    }

    /// Activate the highlighted list entry.
    pub fn activate_selected(&mut self) {
        self.activate_function(self.list_cursor);
    }

    /// Re-read the domain fields and redraw.
    ///
    /// Text that does not parse leaves the previous domain in place and is
    /// reported on the status line.
    pub fn redraw_request(&mut self) {
        let rejected = match parse_domain(self.from.text(), self.to.text()) {
            Ok(domain) => {
                self.domain = domain;
                self.sync_fields();
                None
            },
            Err(e) => {
                tracing::warn!("Rejected domain input: {}", e);
                Some(e)
            },
        };

        self.recompute();

        self.status = match rejected {
            Some(e) => format!("{} (keeping {})", e, self.domain),
            None => self.describe(),
        };
    }

    /// Put the applied domain back into the fields.
    pub fn revert_fields(&mut self) {
        self.sync_fields();
        self.status = format!("Range restored to {}", self.domain);
    }

    /// Move focus to the next control.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous control.
    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The text field with focus, if any.
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            Focus::List => None,
            Focus::From => Some(&mut self.from),
            Focus::To => Some(&mut self.to),
        }
    }

    /// Move the list highlight up.
    pub fn list_up(&mut self) {
        self.list_cursor = self.list_cursor.saturating_sub(1);
    }

    /// Move the list highlight down.
    pub fn list_down(&mut self) {
        if self.list_cursor + 1 < Function::ALL.len() {
            self.list_cursor += 1;
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Redraw from the current function, domain and viewport.
    ///
    /// Runs to completion on the caller's thread, so the app is back to
    /// showing a finished curve by the time any event handler returns.
    fn recompute(&mut self) {
        self.curve = render(&mut self.scene, self.function, self.domain);
        self.redraws += 1;
        tracing::debug!(
            "Plotted {} over {} in {}: {} points",
            self.function.name(),
            self.domain,
            self.viewport(),
            self.curve.len()
        );
    }

    fn sync_fields(&mut self) {
        self.from.set_text(format_bound(self.domain.start));
        self.to.set_text(format_bound(self.domain.end));
    }

    fn describe(&self) -> String {
        match self.domain.check() {
            Ok(()) => format!("{} over {}", self.function.name(), self.domain),
            Err(e) => e.to_string(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(PlotConfig::default())
    }
}

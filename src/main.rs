//! fnplot - A terminal function plotter.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fnplot::app::{App, Focus};
use fnplot::catalog::Function;
use fnplot::config::PlotConfig;
use fnplot::input::parse_bound;
use fnplot::plot::{to_curve, Domain, Viewport};
use fnplot::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "fnplot")]
#[command(about = "A terminal function plotter", long_about = None)]
struct Args {
    /// Function plotted at startup
    #[arg(long, value_enum, default_value_t = Function::Square)]
    function: Function,

    /// Start of the plotted range
    #[arg(long, default_value = "-10", allow_hyphen_values = true, value_parser = parse_from)]
    from: f64,

    /// End of the plotted range
    #[arg(long, default_value = "10", allow_hyphen_values = true, value_parser = parse_to)]
    to: f64,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print the curve for a WIDTHxHEIGHT viewport and exit
    #[arg(long, value_name = "WIDTHxHEIGHT")]
    print_curve: Option<Viewport>,
}

fn parse_from(text: &str) -> fnplot::Result<f64> {
    parse_bound("from", text)
}

fn parse_to(text: &str) -> fnplot::Result<f64> {
    parse_bound("to", text)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting fnplot");
    }

    let config = PlotConfig {
        function: args.function,
        domain: Domain::new(args.from, args.to),
        ..PlotConfig::default()
    };

    if let Some(viewport) = args.print_curve {
        let curve = to_curve(config.function, config.domain, viewport);
        tracing::info!("Printing {} points for {}", curve.len(), viewport);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        curve.write_to(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(config);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("fnplot exited");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            // The next draw measures the new plot area and resizes the app.
            Event::Resize(width, height) => {
                tracing::debug!("Terminal resized to {}x{}", width, height);
                continue;
            },
            _ => continue,
        };

        // Quit from anywhere
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(());
        }

        match (key.modifiers, key.code) {
            (_, KeyCode::Tab) => {
                app.cycle_focus();
                continue;
            },
            (_, KeyCode::BackTab) => {
                app.cycle_focus_back();
                continue;
            },
            _ => {},
        }

        // Range fields
        if app.focus != Focus::List {
            match key.code {
                KeyCode::Enter => app.redraw_request(),
                KeyCode::Esc => app.revert_fields(),
                _ => {
                    let Some(field) = app.focused_field_mut() else {
                        continue;
                    };
                    match key.code {
                        KeyCode::Backspace => field.backspace(),
                        KeyCode::Delete => field.delete(),
                        KeyCode::Left => field.move_left(),
                        KeyCode::Right => field.move_right(),
                        KeyCode::Home => field.home(),
                        KeyCode::End => field.end(),
                        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                            field.insert(c)
                        },
                        _ => {},
                    }
                },
            }
            continue;
        }

        // Function list
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                app.list_up();
            },
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.list_down();
            },

            (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                app.activate_selected();
            },

            (KeyModifiers::NONE, KeyCode::Char('r')) | (KeyModifiers::NONE, KeyCode::F(5)) => {
                app.redraw_request();
            },

            (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                app.cycle_theme();
            },

            _ => {},
        }
    }
}

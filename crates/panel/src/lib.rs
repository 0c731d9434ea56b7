//! Terminal surface for cpugraph.
//!
//! Owns the event loop and wires together all background tasks:
//! - CPU sampler task (one utilization value per interval)
//! - Config file watcher (live reload on change)
//! - Terminal input stream (resize, click-to-launch, quit keys)
//!
//! Everything runs on one logical thread of control: each event is turned
//! into a [`Message`] and handled to completion before the next one, so the
//! ring is never observed mid-resize.

pub mod launcher;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
    KeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::StreamExt;
use graph_config::{default_path, load as load_config, ConfigWatcher, GraphConfig};
use graph_core::{GraphError, Message, Result, SampleRing};
use graph_render::{CpuGraph, GraphTheme};
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::Block;
use ratatui::Terminal;
use std::io;
use tracing::{info, warn};

type PanelTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Width of the border drawn around the chart, in columns/rows per side.
const BORDER_SIZE: u16 = 1;

/// Start the panel.  Blocks until the user quits.
pub fn run() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    let mut terminal = setup_terminal()?;

    // Leaving the terminal raw on a panic makes the shell unusable.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let result = runtime.block_on(event_loop(&mut terminal));
    restore_terminal();
    result
}

fn setup_terminal() -> Result<PanelTerminal> {
    enable_raw_mode().map_err(|e| GraphError::Terminal(format!("raw mode: {e}")))?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| GraphError::Terminal(format!("alternate screen: {e}")))?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(|e| GraphError::Terminal(format!("backend: {e}")))
}

fn restore_terminal() {
    // Best effort — called on the way out and from the panic hook.
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = disable_raw_mode();
}

async fn event_loop(terminal: &mut PanelTerminal) -> Result<()> {
    let config = load_config(default_path()).unwrap_or_default();
    let mut panel = Panel::new(config);

    let mut samples = graph_system::spawn_sampler(panel.config.interval_ms);
    let (watcher, mut reload) = ConfigWatcher::spawn(default_path());
    let mut inputs = EventStream::new();

    // First draw sizes the ring to the drawing area.
    panel.draw(terminal)?;

    while panel.running {
        let message = tokio::select! {
            Some(sample) = samples.recv() => Message::Sample(sample),
            Some(()) = reload.recv() => Message::ConfigReloaded,
            Some(event) = inputs.next() => match event {
                Ok(event) => match translate_input(event) {
                    Some(message) => message,
                    None => continue,
                },
                Err(e) => {
                    warn!("terminal input error: {e}");
                    continue;
                }
            },
            else => break,
        };

        match message {
            Message::ConfigReloaded => match load_config(watcher.path()) {
                Ok(cfg) => {
                    info!("Config reloaded");
                    if cfg.interval_ms != panel.config.interval_ms {
                        // Dropping the old receiver stops the old task.
                        samples = graph_system::spawn_sampler(cfg.interval_ms);
                    }
                    panel.apply_config(cfg);
                }
                Err(e) => warn!("Config reload failed: {e}"),
            },
            message => panel.update(message),
        }

        panel.draw(terminal)?;
    }

    Ok(())
}

/// All panel state, owned by the event loop and passed explicitly — no
/// globals.
struct Panel {
    config: GraphConfig,
    theme: GraphTheme,
    ring: SampleRing,
    running: bool,
}

impl Panel {
    fn new(config: GraphConfig) -> Self {
        Self {
            theme: GraphTheme::from_config(&config.theme),
            // Capacity follows the drawing area; established on first draw.
            ring: SampleRing::new(0),
            running: true,
            config,
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Sample(sample) => self.ring.push(sample),
            Message::Resized(columns) => self.ring.resize(chart_width(columns)),
            Message::LaunchMonitor => launcher::launch(&self.config.task_manager),
            Message::Shutdown => self.running = false,
            // Needs the sampler handle; handled in the event loop.
            Message::ConfigReloaded => {}
        }
    }

    fn apply_config(&mut self, config: GraphConfig) {
        self.theme = GraphTheme::from_config(&config.theme);
        self.config = config;
    }

    fn draw(&mut self, terminal: &mut PanelTerminal) -> Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            let block = Block::bordered();
            let inner = block.inner(area);

            // Keep one ring slot per drawing-area column; covers the first
            // draw and any resize the input stream missed.
            if self.ring.capacity() != inner.width as usize {
                self.ring.resize(inner.width as usize);
            }

            frame.render_widget(block, area);
            frame.render_widget(
                CpuGraph::new(&self.ring, self.theme, self.config.show_percentage),
                inner,
            );
        })?;
        Ok(())
    }
}

/// Columns available to the chart inside the border.
fn chart_width(columns: u16) -> usize {
    columns.saturating_sub(2 * BORDER_SIZE) as usize
}

/// Map a raw terminal event to a [`Message`], filtering everything else.
fn translate_input(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Shutdown),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Shutdown)
            }
            _ => None,
        },
        Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) => {
            Some(Message::LaunchMonitor)
        }
        Event::Resize(columns, _) => Some(Message::Resized(columns)),
        _ => None,
    }
}

//! TUI effects boundary: event loop, terminal lifecycle, input mapping.
//!
//! This is the only module with side effects. It wires the state, update
//! and view layers to the real terminal via crossterm and ratatui.
//!
//! A reader thread forwards terminal events into an mpsc channel. The
//! mounted button's change observer sends `Redraw` into the same channel.
//! The loop draws only when something asked for a frame.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Frame, Terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};
use tracing::{debug, info, warn};

use crate::button::Button;
use crate::types::TuiConfig;

use super::state::{Action, App, AppEvent, Effect, Transition};
use super::update::update;
use super::view::{button_area, render};

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char('m') => Some(Action::ToggleMount),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Map a mouse event to an Action, given where the button currently is.
///
/// Only a left-button press inside the button activates it.
pub fn map_mouse(mouse: MouseEvent, button: Option<Rect>) -> Option<Action> {
    let rect = button?;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left)
            if rect.contains(Position::new(mouse.column, mouse.row)) =>
        {
            Some(Action::Activate)
        }
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal(config: &TuiConfig) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    if config.mouse {
        io::stdout().execute(EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    // Harmless when capture was never enabled.
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREAD
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_event_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                // Release/repeat events would double-activate on some platforms.
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    warn!(error = %e, "terminal event reader stopped");
                    break;
                }
            };
            if tx.send(app_event).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive TUI until the user quits.
pub fn run(config: TuiConfig) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal(&config)?;
    info!(mouse = config.mouse, "tui started");

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_event_reader(tx.clone());

    let mut app = App::unmounted();
    mount(&mut app, &tx);

    let mut needs_redraw = true;
    // Where the button was last drawn; clicks are tested against this.
    let mut drawn_button: Option<Rect> = None;

    loop {
        if app.should_quit {
            break;
        }

        if needs_redraw {
            terminal.draw(|frame| drawn_button = draw_frame(&app, frame))?;
            needs_redraw = false;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        let action = match event {
            AppEvent::Redraw | AppEvent::Resize => {
                needs_redraw = true;
                None
            }
            AppEvent::Key(key) => map_key(key),
            AppEvent::Mouse(mouse) => map_mouse(mouse, drawn_button),
        };

        if let Some(action) = action {
            debug!(?action, "dispatching action");
            match update(&mut app, &action) {
                Transition::Continue => {}
                Transition::Redraw => needs_redraw = true,
                Transition::Quit => app.should_quit = true,
                Transition::Effect(effect) => {
                    handle_effect(effect, &mut app, &tx);
                    needs_redraw = true;
                }
            }
        }
    }

    // Unmount explicitly so the drop is logged.
    app.button = None;
    info!("tui stopped");
    restore_terminal()
}

/// Render one frame and return the button's on-screen area.
///
/// A click queued before the next redraw must hit what is visible, not the
/// geometry of a label that has already changed.
fn draw_frame(app: &App, frame: &mut Frame) -> Option<Rect> {
    render(app, frame);
    button_area(app, frame.area())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a transition.
fn handle_effect(effect: Effect, app: &mut App, tx: &mpsc::Sender<AppEvent>) {
    match effect {
        Effect::Mount => mount(app, tx),
    }
}

/// Mount a fresh button whose counter changes schedule a redraw.
fn mount(app: &mut App, tx: &mpsc::Sender<AppEvent>) {
    let mut button = Button::mount();
    let tx = tx.clone();
    button.on_change(move |_| {
        // Receiver gone means the loop is exiting; nothing left to draw.
        let _ = tx.send(AppEvent::Redraw);
    });
    app.button = Some(button);
}

// ============================================================================
// TESTS
// ============================================================================

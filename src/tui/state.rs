//! TUI state algebra: events, model, actions, transitions.
//!
//! The model is tiny: an optional mounted button and a quit flag.
//! `None` means the component is unmounted; there is no counter to
//! keep around, so a remount always starts from zero.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::button::Button;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// The terminal reader thread sends `Key`, `Mouse` and `Resize`.
/// The button's change observer sends `Redraw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A key press from the terminal.
    Key(KeyEvent),
    /// A mouse event from the terminal (only with mouse capture on).
    Mouse(MouseEvent),
    /// The terminal was resized.
    Resize,
    /// Component state changed; the next frame must be drawn.
    Redraw,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The mounted button, if any.
    pub button: Option<Button>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// App with a freshly mounted button.
    pub fn mounted() -> Self {
        App {
            button: Some(Button::mount()),
            should_quit: false,
        }
    }

    /// App with no component mounted.
    pub fn unmounted() -> Self {
        App {
            button: None,
            should_quit: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.button.is_some()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key and mouse events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Click, Enter or Space on the button.
    Activate,
    /// Unmount the button, or mount a fresh one.
    ToggleMount,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// What the effects boundary must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing beyond what state observers already requested.
    Continue,
    /// The model changed shape; draw the next frame.
    Redraw,
    /// Quit the application.
    Quit,
    /// Execute a side effect.
    Effect(Effect),
}

/// Side effect requested by a transition, executed by the effects layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Mount a new button and wire its change observer to the event loop.
    Mount,
}

// ============================================================================
// TESTS
// ============================================================================

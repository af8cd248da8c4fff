//! Terminal host for the button component.
//!
//! - `state`: model, events, actions, transitions
//! - `update`: (App, Action) → Transition
//! - `view`: rendering and the button's on-screen area
//! - `theme`: styles
//! - `run`: terminal lifecycle and event loop (the only effects)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;

//! boton: a terminal button with a click counter.

pub mod button;
pub mod counter;
pub mod logging;
pub mod report;
pub mod tui;
pub mod types;

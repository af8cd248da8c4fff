//! Rendering: map App state to ratatui widgets.
//!
//! `button_area` is the single source of truth for where the button sits,
//! shared by `render` and the mouse hit test in the effects layer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::state::App;
use super::theme;

/// Border plus one column of padding on each side.
const BUTTON_H_CHROME: u16 = 4;

/// Top border, label row, bottom border.
const BUTTON_HEIGHT: u16 = 3;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole UI to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let [title_area, content_area, help_area] = split(area);

    frame.render_widget(render_title(), title_area);
    frame.render_widget(render_help(app), help_area);

    match (&app.button, button_area(app, area)) {
        (Some(button), Some(rect)) => {
            let paragraph = Paragraph::new(Span::styled(button.label(), theme::STYLE_BUTTON_LABEL))
                .alignment(Alignment::Center)
                .block(Block::bordered().border_style(theme::STYLE_BUTTON_BORDER));
            frame.render_widget(paragraph, rect);
        }
        _ => render_unmounted(frame, content_area),
    }
}

/// Where the button is drawn for a given frame area. None when unmounted.
pub fn button_area(app: &App, area: Rect) -> Option<Rect> {
    let button = app.button.as_ref()?;
    let [_, content_area, _] = split(area);

    let label_width = u16::try_from(button.label().chars().count()).unwrap_or(u16::MAX);
    let width = label_width.saturating_add(BUTTON_H_CHROME);

    Some(centered(content_area, width, BUTTON_HEIGHT))
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Title bar at top, content in middle, help at bottom.
fn split(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .areas(area)
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ============================================================================
// WIDGETS
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled("boton", theme::STYLE_TITLE)))
}

/// Help line showing available keybindings.
fn render_help(app: &App) -> Paragraph<'static> {
    let help_text = if app.is_mounted() {
        "[Enter/Space/click] activate  [m] unmount  [q] quit"
    } else {
        "[m] mount  [q] quit"
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn render_unmounted(frame: &mut Frame, area: Rect) {
    let rect = centered(area, area.width, 1);
    let text = Paragraph::new(Span::styled(
        "component unmounted, press [m] to mount",
        theme::STYLE_PLACEHOLDER,
    ))
    .alignment(Alignment::Center);
    frame.render_widget(text, rect);
}

// ============================================================================
// TESTS
// ============================================================================

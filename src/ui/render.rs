//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop and the
//! layout helper that splits the screen into the list and the detail column.
//!
//! This module should stay mostly "pure rendering": it reads state + config and
//! produces widgets, without owning lister core logic.

use crate::app::AppState;
use crate::ui::panes::{self, PaneContext};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Height of the header and footer panes, borders included.
const LINE_PANE_HEIGHT: u16 = 3;

/// Renders the entire terminal UI for lister on each frame.
///
/// ```text
/// +--------+----------------+
/// |        | header         |
/// | list   +----------------+
/// |        | description    |
/// |        +----------------+
/// |        | footer         |
/// +--------+----------------+
/// ```
pub fn render(frame: &mut Frame, app: &mut AppState) {
    let chunks = layout_chunks(frame.area(), app);

    let display_cfg = app.config().display();
    let borders = display_cfg.borders();
    let border_type = display_cfg.border_shape().as_border_type();

    let header = app.header().to_string();
    let description = app.description().to_string();
    let footer = app.footer().to_string();
    let title = app.list_title().to_string();

    panes::draw_line(frame, &header, PaneContext::new(chunks[1], borders, border_type));
    panes::draw_text(
        frame,
        &description,
        PaneContext::new(chunks[2], borders, border_type),
    );
    panes::draw_line(frame, &footer, PaneContext::new(chunks[3], borders, border_type));

    let list_context = PaneContext::new(chunks[0], borders, border_type).titled(title);
    panes::draw_list(frame, app, list_context);
}

/// Splits `size` into `[list, header, description, footer]`.
pub fn layout_chunks(size: Rect, app: &AppState) -> Vec<Rect> {
    let list_width = app.config().display().list_width();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(list_width), Constraint::Min(0)])
        .split(size);

    let details = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LINE_PANE_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(LINE_PANE_HEIGHT),
        ])
        .split(columns[1]);

    vec![columns[0], details[0], details[1], details[2]]
}

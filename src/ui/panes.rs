//! Pane drawing functions for lister.
//!
//! The list pane shows one row per item title. The text panes (header, description and
//! footer) each show a single string inside their own block.

use crate::app::AppState;
use crate::core::sanitize_to_exact_width;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Context for rendering a pane: its area and block
pub struct PaneContext<'a> {
    pub area: Rect,
    pub block: Block<'a>,
}

impl<'a> PaneContext<'a> {
    /// Builds the block of a pane, bordered or not.
    pub fn new(area: Rect, borders: bool, border_type: BorderType) -> Self {
        let block = if borders {
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
        } else {
            Block::default()
        };
        Self { area, block }
    }

    pub fn titled(mut self, title: impl Into<Line<'a>>) -> Self {
        self.block = self.block.title(title);
        self
    }

    /// Width left for content once borders are taken away.
    fn inner_width(&self) -> usize {
        self.block.inner(self.area).width as usize
    }
}

/// Draws the item list and stores its area for mouse hit tests.
pub fn draw_list(frame: &mut Frame, app: &mut AppState, context: PaneContext) {
    let icon = app.config().display().selection_icon().to_string();
    let icon_width = unicode_width::UnicodeWidthStr::width(icon.as_str());
    let row_width = context.inner_width().saturating_sub(icon_width);

    let items: Vec<ListItem> = app
        .items()
        .iter()
        .map(|item| {
            let title = sanitize_to_exact_width(item.title(), row_width);
            ListItem::new(Line::from(Span::raw(title)))
        })
        .collect();

    let list = List::new(items)
        .block(context.block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(icon.as_str());

    app.set_list_area(context.area);
    frame.render_stateful_widget(list, context.area, app.list_state_mut());
}

/// Draws one line of text, cut to the pane width.
pub fn draw_line(frame: &mut Frame, text: &str, context: PaneContext) {
    let line = sanitize_to_exact_width(text, context.inner_width());
    frame.render_widget(Paragraph::new(line).block(context.block), context.area);
}

/// Draws multi-line text, wrapping long lines.
pub fn draw_text(frame: &mut Frame, text: &str, context: PaneContext) {
    frame.render_widget(
        Paragraph::new(text.to_string())
            .block(context.block)
            .wrap(Wrap { trim: false }),
        context.area,
    );
}

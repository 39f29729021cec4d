//! Application State and main controller module for lister.
//!
//! [AppState] is owned by the UI thread. It holds:
//! - the items received so far, in arrival order
//! - the selection and the texts of the header, description and footer widgets
//! - the list widget state and its last drawn area for mouse hit tests
//! - the [ShutdownSignal] used by the quit keys
//!
//! Items only arrive through [AppState::tick], which drains the serialized update queue.
//! Selection only changes from input handlers running on the same thread.

use crate::app::controller::{UiUpdate, UpdateQueue};
use crate::app::keymap::{Action, Keymap, NavAction, SystemAction};
use crate::config::Config;
use crate::core::{Item, ShutdownSignal};

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;
use tracing::{debug, info};

/// Enumeration for each individual keypress result processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressResult {
    /// Key not bound, nothing changed.
    Continue,
    /// Key handled, the frame needs a redraw.
    Consumed,
    /// Shutdown requested, the event loop must stop.
    Quit,
}

/// Main struct which holds the UI state of lister.
pub struct AppState<'a> {
    config: &'a Config,
    keymap: Keymap,

    list_title: String,
    items: Vec<Item>,
    selected: usize,

    header: String,
    description: String,
    footer: String,

    list_state: ListState,
    list_area: Rect,

    shutdown: ShutdownSignal,
}

impl<'a> AppState<'a> {
    pub fn new(config: &'a Config, shutdown: ShutdownSignal) -> Self {
        Self {
            config,
            keymap: Keymap::from_config(config),
            list_title: String::new(),
            items: Vec::new(),
            selected: 0,
            header: String::new(),
            description: String::new(),
            footer: String::new(),
            list_state: ListState::default(),
            list_area: Rect::default(),
            shutdown,
        }
    }

    // Getters/ accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn list_title(&self) -> &str {
        &self.list_title
    }

    pub fn set_list_title(&mut self, title: String) {
        self.list_title = title;
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    #[inline]
    pub fn header(&self) -> &str {
        &self.header
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn footer(&self) -> &str {
        &self.footer
    }

    #[inline]
    pub(crate) fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    /// Remembers where the list was drawn, for mouse hit tests.
    pub(crate) fn set_list_area(&mut self, area: Rect) {
        self.list_area = area;
    }

    /// Applies all queued updates. Returns true if a redraw is needed.
    pub fn tick(&mut self, queue: &UpdateQueue) -> bool {
        queue.apply_pending(self)
    }

    /// Applies one update from the serialized update queue.
    pub fn apply(&mut self, update: UiUpdate) {
        match update {
            UiUpdate::AppendItem(item) => self.append_item(item),
        }
    }

    fn append_item(&mut self, item: Item) {
        self.items.push(item);
        if self.items.len() == 1 {
            // The list reports its first entry as selected
            self.select(0);
        } else {
            self.refresh_footer();
        }
    }

    /// Selection changed handler: moves the selection and refreshes the detail widgets.
    ///
    /// Out of range indices are ignored.
    pub fn select(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        debug!(title = item.title(), "Selected item");

        self.header = item.title().to_string();
        self.description = item.description().to_string();
        self.selected = index;
        self.list_state.select(Some(index));
        self.refresh_footer();
    }

    fn refresh_footer(&mut self) {
        self.footer = match self.items.get(self.selected) {
            Some(item) => format!(
                "{}/{}: {}",
                self.selected + 1,
                self.items.len(),
                item.footer()
            ),
            None => String::new(),
        };
    }

    /// Sends the shutdown token. Never blocks.
    pub fn request_quit(&self) {
        self.shutdown.trigger();
    }

    /// Handles a key press. Quit keys send the shutdown token before returning
    /// [KeypressResult::Quit].
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        let Some(action) = self.keymap.lookup(key) else {
            return KeypressResult::Continue;
        };

        match action {
            Action::Nav(nav) => {
                self.handle_nav(nav);
                KeypressResult::Consumed
            }
            Action::System(SystemAction::Quit) => {
                info!("Pressed quit, stopping app...");
                self.request_quit();
                KeypressResult::Quit
            }
            Action::System(SystemAction::Interrupt) => {
                info!("Pressed interrupt, stopping app...");
                self.request_quit();
                KeypressResult::Quit
            }
        }
    }

    fn handle_nav(&mut self, nav: NavAction) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        let target = match nav {
            NavAction::GoUp => self.selected.saturating_sub(1),
            NavAction::GoDown => (self.selected + 1).min(last),
            NavAction::GoToTop => 0,
            NavAction::GoToBottom => last,
        };
        if target != self.selected {
            self.select(target);
        }
    }

    /// Handles a mouse event. Returns true if a redraw is needed.
    ///
    /// A left click on a list row selects it, the wheel moves the selection.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        let pos = Position::new(mouse.column, mouse.row);
        if !self.list_area.contains(pos) {
            return false;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let inner = self.list_inner_area();
                if !inner.contains(pos) {
                    return false;
                }
                let row = usize::from(mouse.row - inner.y);
                let index = self.list_state.offset() + row;
                if index < self.items.len() && index != self.selected {
                    self.select(index);
                    return true;
                }
                false
            }
            MouseEventKind::ScrollDown => {
                let before = self.selected;
                self.handle_nav(NavAction::GoDown);
                before != self.selected
            }
            MouseEventKind::ScrollUp => {
                let before = self.selected;
                self.handle_nav(NavAction::GoUp);
                before != self.selected
            }
            _ => false,
        }
    }

    fn list_inner_area(&self) -> Rect {
        if self.config.display().borders() {
            self.list_area.inner(ratatui::layout::Margin::new(1, 1))
        } else {
            self.list_area
        }
    }
}

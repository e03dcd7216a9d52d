//! Delegated click handling and debounced search input.

use crate::debounce::{Clock, Debouncer};
use crate::display::DisplayController;
use crate::error::BrowserError;
use crate::page::CLEAR_SEARCH_ID;
use crate::render::PanelKind;
use crate::storage::KeyValueStore;
use log::{debug, info};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlRole {
    PanelToggle,
    Favorite,
    ClearSearch,
}

/// An interactive element, decoded from its attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    PanelToggle { kind: PanelKind, recipe_id: u32 },
    Favorite { recipe_id: u32 },
    ClearSearch,
}

impl Control {
    pub fn role(&self) -> ControlRole {
        match self {
            Control::PanelToggle { .. } => ControlRole::PanelToggle,
            Control::Favorite { .. } => ControlRole::Favorite,
            Control::ClearSearch => ControlRole::ClearSearch,
        }
    }

    /// Decode an element from an attribute lookup. Elements without a role,
    /// or with unreadable data attributes, are not controls.
    pub fn from_attributes<'a>(attr: impl Fn(&str) -> Option<&'a str>) -> Option<Self> {
        if let Some(kind) = attr("data-toggle") {
            let kind = kind.parse().ok()?;
            let recipe_id = attr("data-id")?.trim().parse().ok()?;
            return Some(Control::PanelToggle { kind, recipe_id });
        }

        if let Some(id) = attr("data-favorite") {
            let recipe_id = id.trim().parse().ok()?;
            return Some(Control::Favorite { recipe_id });
        }

        if attr("id") == Some(CLEAR_SEARCH_ID) {
            return Some(Control::ClearSearch);
        }

        None
    }
}

/// What a dispatched event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing handled the event
    Ignored,
    PanelToggled {
        kind: PanelKind,
        recipe_id: u32,
        visible: bool,
        label: String,
    },
    FavoriteToggled { recipe_id: u32, favorite: bool },
    SearchCleared,
    /// A search commit is pending until the given time
    SearchScheduled { deadline: Duration },
    /// A pending search value was committed
    SearchCommitted { query: String, shown: usize },
}

type Handler<S, C> = fn(&mut Dispatcher<S, C>, Control) -> Result<Outcome, BrowserError>;

/// Routes clicks by control role and debounces search input
pub struct Dispatcher<S, C> {
    controller: DisplayController<S>,
    clock: C,
    search: Debouncer<String>,
    handlers: HashMap<ControlRole, Handler<S, C>>,
}

impl<S: KeyValueStore, C: Clock> Dispatcher<S, C> {
    pub fn new(controller: DisplayController<S>, clock: C, debounce: Duration) -> Self {
        let mut handlers: HashMap<ControlRole, Handler<S, C>> = HashMap::new();
        handlers.insert(ControlRole::PanelToggle, Self::on_panel_toggle);
        handlers.insert(ControlRole::Favorite, Self::on_favorite);
        if controller.page().has_clear_control() {
            handlers.insert(ControlRole::ClearSearch, Self::on_clear_search);
        }

        Self {
            controller,
            clock,
            search: Debouncer::new(debounce),
            handlers,
        }
    }

    /// Click on the first element matching `selector`
    pub fn click(&mut self, selector: &str) -> Result<Outcome, BrowserError> {
        match self.controller.page().control_at(selector)? {
            Some(control) => self.activate(control),
            None => {
                debug!("Click on '{}' hit no control", selector);
                Ok(Outcome::Ignored)
            }
        }
    }

    /// Run the handler registered for the control's role
    pub fn activate(&mut self, control: Control) -> Result<Outcome, BrowserError> {
        match self.handlers.get(&control.role()).copied() {
            Some(handler) => handler(self, control),
            None => {
                debug!("No handler for {:?}", control.role());
                Ok(Outcome::Ignored)
            }
        }
    }

    /// Keystroke in the search box: reschedule the commit of `value`
    pub fn input(&mut self, value: impl Into<String>) -> Outcome {
        let value = value.into();
        if !self.controller.page_mut().set_search_value(value.clone()) {
            debug!("Page has no search box, ignoring input");
            return Outcome::Ignored;
        }

        self.search.schedule(value, self.clock.now());
        match self.search.deadline() {
            Some(deadline) => Outcome::SearchScheduled { deadline },
            None => Outcome::Ignored,
        }
    }

    /// Commit the pending search if its quiet period has passed
    pub fn tick(&mut self) -> Outcome {
        match self.search.take_ready(self.clock.now()) {
            Some(query) => {
                let shown = self.controller.set_query(query.clone());
                Outcome::SearchCommitted { query, shown }
            }
            None => Outcome::Ignored,
        }
    }

    /// When the pending search commit is due, if any
    pub fn next_deadline(&self) -> Option<Duration> {
        self.search.deadline()
    }

    pub fn controller(&self) -> &DisplayController<S> {
        &self.controller
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn on_panel_toggle(&mut self, control: Control) -> Result<Outcome, BrowserError> {
        let Control::PanelToggle { kind, recipe_id } = control else {
            return Ok(Outcome::Ignored);
        };

        let page = self.controller.page_mut();
        match page.toggle_panel(kind, recipe_id)? {
            Some(visible) => Ok(Outcome::PanelToggled {
                kind,
                recipe_id,
                visible,
                label: page.toggle_label(kind, recipe_id),
            }),
            None => {
                debug!("Panel {} is not on the page", kind.panel_id(recipe_id));
                Ok(Outcome::Ignored)
            }
        }
    }

    fn on_favorite(&mut self, control: Control) -> Result<Outcome, BrowserError> {
        let Control::Favorite { recipe_id } = control else {
            return Ok(Outcome::Ignored);
        };

        let favorite = self.controller.toggle_favorite(recipe_id)?;
        Ok(Outcome::FavoriteToggled {
            recipe_id,
            favorite,
        })
    }

    fn on_clear_search(&mut self, _control: Control) -> Result<Outcome, BrowserError> {
        if self.search.cancel().is_some() {
            debug!("Cancelled pending search commit");
        }
        self.controller.page_mut().set_search_value("");
        self.controller.set_query("");
        info!("Search cleared");
        Ok(Outcome::SearchCleared)
    }
}

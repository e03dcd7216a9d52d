//! In-memory stand-in for the host document.
//!
//! A page is discovered from an HTML shell by element id. Only the root
//! container is required; the search box, clear control and counter are
//! optional and the features using them are disabled when absent.

use crate::error::BrowserError;
use crate::events::Control;
use crate::render::{panel_open_tag, toggle_button, toggle_label, PanelKind};
use log::debug;
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeSet;

pub const ROOT_ID: &str = "recipe-container";
pub const SEARCH_INPUT_ID: &str = "search-input";
pub const CLEAR_SEARCH_ID: &str = "clear-search";
pub const COUNTER_ID: &str = "recipe-count";

pub const DEFAULT_SHELL: &str = include_str!("../data/shell.html");

#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    stylesheets: Vec<String>,
    root: String,
    search: Option<String>,
    clear_control: bool,
    counter: Option<String>,
    /// Panels currently expanded; everything else is hidden
    visible_panels: BTreeSet<(PanelKind, u32)>,
}

impl Page {
    /// Locate the mount points in a host HTML shell
    pub fn from_shell(shell: &str) -> Result<Self, BrowserError> {
        let document = Html::parse_document(shell);

        if find_by_id(&document, ROOT_ID)?.is_none() {
            return Err(BrowserError::MissingRoot(ROOT_ID.to_string()));
        }

        let title = select_first(&document, "title")?
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| "Recipes".to_string());

        let stylesheets = parse_selector("link[rel='stylesheet']")
            .map(|selector| {
                document
                    .select(&selector)
                    .filter_map(|el| el.value().attr("href"))
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })?;

        let search = find_by_id(&document, SEARCH_INPUT_ID)?
            .map(|el| el.value().attr("value").unwrap_or_default().to_string());
        let clear_control = find_by_id(&document, CLEAR_SEARCH_ID)?.is_some();
        let counter = find_by_id(&document, COUNTER_ID)?
            .map(|el| el.text().collect::<String>().trim().to_string());

        if search.is_none() {
            debug!("No #{} in shell, search disabled", SEARCH_INPUT_ID);
        }
        if !clear_control {
            debug!("No #{} in shell, clear control disabled", CLEAR_SEARCH_ID);
        }
        if counter.is_none() {
            debug!("No #{} in shell, counter disabled", COUNTER_ID);
        }

        Ok(Self {
            title,
            stylesheets,
            root: String::new(),
            search,
            clear_control,
            counter,
            visible_panels: BTreeSet::new(),
        })
    }

    /// Page built from the bundled shell, with every optional element present
    pub fn standard() -> Result<Self, BrowserError> {
        Self::from_shell(DEFAULT_SHELL)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current content of the root container
    pub fn root_html(&self) -> &str {
        &self.root
    }

    /// Replace the root content wholesale. Expanded panels collapse since
    /// their elements are rebuilt.
    pub fn replace_content(&mut self, html: String) {
        self.root = html;
        self.visible_panels.clear();
    }

    pub fn counter(&self) -> Option<&str> {
        self.counter.as_deref()
    }

    /// No-op when the page has no counter
    pub fn set_counter(&mut self, text: impl Into<String>) {
        if let Some(counter) = self.counter.as_mut() {
            *counter = text.into();
        }
    }

    pub fn search_value(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn has_search(&self) -> bool {
        self.search.is_some()
    }

    /// Returns `false` when the page has no search box
    pub fn set_search_value(&mut self, value: impl Into<String>) -> bool {
        match self.search.as_mut() {
            Some(search) => {
                *search = value.into();
                true
            }
            None => false,
        }
    }

    pub fn has_clear_control(&self) -> bool {
        self.clear_control
    }

    /// Flip a panel's visibility. `None` if the panel is not in the current markup.
    pub fn toggle_panel(
        &mut self,
        kind: PanelKind,
        recipe_id: u32,
    ) -> Result<Option<bool>, BrowserError> {
        let fragment = Html::parse_fragment(&self.root);
        if find_by_id(&fragment, &kind.panel_id(recipe_id))?.is_none() {
            return Ok(None);
        }

        let key = (kind, recipe_id);
        let visible = if self.visible_panels.remove(&key) {
            false
        } else {
            self.visible_panels.insert(key);
            true
        };
        Ok(Some(visible))
    }

    pub fn is_panel_visible(&self, kind: PanelKind, recipe_id: u32) -> bool {
        self.visible_panels.contains(&(kind, recipe_id))
    }

    /// Current label of the toggle control for a panel
    pub fn toggle_label(&self, kind: PanelKind, recipe_id: u32) -> String {
        toggle_label(kind, self.is_panel_visible(kind, recipe_id))
    }

    /// Resolve a click on the first element matching `selector`, walking up
    /// to the nearest ancestor that is a known control.
    pub fn control_at(&self, selector: &str) -> Result<Option<Control>, BrowserError> {
        let document = Html::parse_document(&self.document());
        let Some(target) = select_first(&document, selector)? else {
            debug!("Click target '{}' not found", selector);
            return Ok(None);
        };

        let control = std::iter::once(target)
            .chain(target.ancestors().filter_map(ElementRef::wrap))
            .find_map(|el| Control::from_attributes(|name| el.value().attr(name)));
        Ok(control)
    }

    /// The complete page with the current root content, counter and panel state
    pub fn document(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!(
            "<title>{}</title>\n",
            html_escape::encode_text(&self.title)
        ));
        for href in &self.stylesheets {
            html.push_str(&format!(
                "<link rel=\"stylesheet\" href=\"{}\">\n",
                html_escape::encode_double_quoted_attribute(href)
            ));
        }
        html.push_str("</head>\n<body>\n<header>\n");

        if let Some(search) = &self.search {
            html.push_str(&format!(
                "<input id=\"{}\" type=\"search\" value=\"{}\">\n",
                SEARCH_INPUT_ID,
                html_escape::encode_double_quoted_attribute(search)
            ));
        }
        if self.clear_control {
            html.push_str(&format!("<button id=\"{}\">Clear</button>\n", CLEAR_SEARCH_ID));
        }
        if let Some(counter) = &self.counter {
            html.push_str(&format!(
                "<p id=\"{}\">{}</p>\n",
                COUNTER_ID,
                html_escape::encode_text(counter)
            ));
        }

        html.push_str("</header>\n");
        html.push_str(&format!(
            "<main id=\"{}\">{}</main>\n",
            ROOT_ID,
            self.root_with_panel_state()
        ));
        html.push_str("</body>\n</html>\n");
        html
    }

    /// Root markup with expanded panels marked `visible` and their labels flipped
    fn root_with_panel_state(&self) -> String {
        let mut root = self.root.clone();
        for &(kind, id) in &self.visible_panels {
            root = root.replace(
                &panel_open_tag(kind, id, false),
                &panel_open_tag(kind, id, true),
            );
            root = root.replace(
                &toggle_button(kind, id, false),
                &toggle_button(kind, id, true),
            );
        }
        root
    }
}

fn parse_selector(selector: &str) -> Result<Selector, BrowserError> {
    Selector::parse(selector).map_err(|_| BrowserError::InvalidSelector(selector.to_string()))
}

fn select_first<'a>(
    document: &'a Html,
    selector: &str,
) -> Result<Option<ElementRef<'a>>, BrowserError> {
    let selector = parse_selector(selector)?;
    Ok(document.select(&selector).next())
}

fn find_by_id<'a>(document: &'a Html, id: &str) -> Result<Option<ElementRef<'a>>, BrowserError> {
    select_first(document, &format!("[id='{}']", id))
}

mod card;
mod steps;

pub use self::card::render_card;
pub use self::steps::render_steps;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Collapsible section of a recipe card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PanelKind {
    Ingredients,
    Steps,
}

impl PanelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelKind::Ingredients => "ingredients",
            PanelKind::Steps => "steps",
        }
    }

    /// Element id of this panel on the card of `recipe_id`, e.g. `steps-3`
    pub fn panel_id(&self, recipe_id: u32) -> String {
        format!("{}-{}", self.as_str(), recipe_id)
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ingredients" => Ok(PanelKind::Ingredients),
            "steps" => Ok(PanelKind::Steps),
            other => Err(format!("unknown panel type '{}'", other)),
        }
    }
}

/// Label of a panel toggle control: `Show steps` / `Hide steps`
pub fn toggle_label(kind: PanelKind, visible: bool) -> String {
    if visible {
        format!("Hide {}", kind)
    } else {
        format!("Show {}", kind)
    }
}

/// Opening tag of a panel container: `<div class="steps-container" id="steps-3">`
pub fn panel_open_tag(kind: PanelKind, recipe_id: u32, visible: bool) -> String {
    format!(
        "<div class=\"{}-container{}\" id=\"{}\">",
        kind,
        if visible { " visible" } else { "" },
        kind.panel_id(recipe_id)
    )
}

/// Control that expands or collapses a panel, labelled for its current state
pub fn toggle_button(kind: PanelKind, recipe_id: u32, visible: bool) -> String {
    format!(
        "<button class=\"toggle-btn\" data-toggle=\"{}\" data-id=\"{}\">{}</button>",
        kind,
        recipe_id,
        toggle_label(kind, visible)
    )
}

/// Markup generation settings
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    /// Escape text content; off by default since the dataset is trusted
    pub escape_html: bool,
}

impl Renderer {
    pub fn new(escape_html: bool) -> Self {
        Self { escape_html }
    }

    fn text<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.escape_html {
            html_escape::encode_text(raw)
        } else {
            Cow::Borrowed(raw)
        }
    }
}

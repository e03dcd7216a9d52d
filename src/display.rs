use crate::error::BrowserError;
use crate::favorites::FavoritesLedger;
use crate::page::Page;
use crate::render::Renderer;
use crate::search::filter_recipes;
use crate::storage::KeyValueStore;
use crate::store::RecipeStore;
use log::{debug, info};

/// Whether the current query narrows the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    ShowingAll,
    ShowingFiltered,
}

/// `Showing 2 of 8 recipes`
pub fn counter_text(shown: usize, total: usize) -> String {
    format!("Showing {} of {} recipes", shown, total)
}

/// Owns the browsing state and rebuilds the page from it
#[derive(Debug)]
pub struct DisplayController<S> {
    store: RecipeStore,
    favorites: FavoritesLedger<S>,
    renderer: Renderer,
    page: Page,
    query: String,
    visible: Vec<u32>,
}

impl<S: KeyValueStore> DisplayController<S> {
    /// Create the controller and render the initial (unfiltered) page
    pub fn new(
        store: RecipeStore,
        favorites: FavoritesLedger<S>,
        page: Page,
        renderer: Renderer,
    ) -> Self {
        let query = page.search_value().unwrap_or_default().to_string();
        let mut controller = Self {
            store,
            favorites,
            renderer,
            page,
            query,
            visible: Vec::new(),
        };
        controller.refresh();
        controller
    }

    /// Filter, render every matching card and replace the container.
    /// Returns the number of recipes shown.
    pub fn refresh(&mut self) -> usize {
        let results = filter_recipes(self.store.all(), &self.query);

        let html: String = results
            .iter()
            .map(|recipe| {
                self.renderer
                    .card(recipe, self.favorites.is_favorite(recipe.id))
            })
            .collect();

        self.visible = results.iter().map(|recipe| recipe.id).collect();
        let shown = self.visible.len();
        let total = self.store.len();

        self.page.replace_content(html);
        self.page.set_counter(counter_text(shown, total));

        debug!(
            "Rendered {} of {} recipes for query '{}'",
            shown, total, self.query
        );
        shown
    }

    /// Commit a new search query and refresh
    pub fn set_query(&mut self, query: impl Into<String>) -> usize {
        self.query = query.into();
        info!("Search query set to '{}'", self.query);
        self.refresh()
    }

    /// Toggle a favorite and refresh. Returns whether the recipe is now a favorite.
    pub fn toggle_favorite(&mut self, id: u32) -> Result<bool, BrowserError> {
        if !self.store.contains(id) {
            return Err(BrowserError::UnknownRecipe(id));
        }

        let favorite = self.favorites.toggle(id)?;
        self.refresh();
        Ok(favorite)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> DisplayMode {
        if self.query.trim().is_empty() {
            DisplayMode::ShowingAll
        } else {
            DisplayMode::ShowingFiltered
        }
    }

    /// Ids of the recipes on the page, in display order
    pub fn visible_ids(&self) -> &[u32] {
        &self.visible
    }

    pub fn favorites(&self) -> &FavoritesLedger<S> {
        &self.favorites
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }
}

pub mod config;
pub mod debounce;
pub mod display;
pub mod error;
pub mod events;
pub mod favorites;
pub mod model;
pub mod page;
pub mod render;
pub mod replay;
pub mod search;
pub mod storage;
pub mod store;
pub mod watch;

pub use config::BrowserConfig;
pub use debounce::{Clock, Debouncer, ManualClock, SystemClock};
pub use display::{counter_text, DisplayController, DisplayMode};
pub use error::BrowserError;
pub use events::{Control, ControlRole, Dispatcher, Outcome};
pub use favorites::FavoritesLedger;
pub use model::{Difficulty, Recipe, Step};
pub use page::Page;
pub use render::{render_card, render_steps, PanelKind, Renderer};
pub use search::filter_recipes;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::RecipeStore;

use log::info;

/// Recipe store from the configured dataset, or the built-in one
pub fn load_store(config: &BrowserConfig) -> Result<RecipeStore, BrowserError> {
    match &config.data.recipes_path {
        Some(path) => RecipeStore::from_path(path),
        None => RecipeStore::builtin(),
    }
}

/// Page from the configured shell, or the bundled one
pub fn load_page(config: &BrowserConfig) -> Result<Page, BrowserError> {
    match &config.data.shell_path {
        Some(path) => Page::from_shell(&std::fs::read_to_string(path)?),
        None => Page::standard(),
    }
}

/// Assemble a controller over `storage` and render the initial page
pub fn build_controller<S: KeyValueStore>(
    config: &BrowserConfig,
    storage: S,
) -> Result<DisplayController<S>, BrowserError> {
    let store = load_store(config)?;
    let page = load_page(config)?;
    let favorites = FavoritesLedger::load(storage, config.storage.key.clone());
    info!(
        "Loaded {} recipes, {} favorites",
        store.len(),
        favorites.len()
    );

    Ok(DisplayController::new(
        store,
        favorites,
        page,
        Renderer::new(config.render.escape_html),
    ))
}

/// Controller plus event dispatcher with the configured debounce interval
pub fn build_dispatcher<S: KeyValueStore, C: Clock>(
    config: &BrowserConfig,
    storage: S,
    clock: C,
) -> Result<Dispatcher<S, C>, BrowserError> {
    let controller = build_controller(config, storage)?;
    Ok(Dispatcher::new(controller, clock, config.search.debounce()))
}

/// Render the full page for `query`. Stored favorites are read, never written.
pub fn render_page(config: &BrowserConfig, query: &str) -> Result<String, BrowserError> {
    let favorites = FileStore::new(&config.storage.path);
    let mut controller = build_controller(config, favorites)?;
    controller.page_mut().set_search_value(query);
    controller.set_query(query);
    Ok(controller.page().document())
}

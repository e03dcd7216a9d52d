use recipe_browser::{
    Control, DisplayController, Dispatcher, FavoritesLedger, KeyValueStore, ManualClock,
    MemoryStore, Outcome, Page, PanelKind, RecipeStore, Renderer,
};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn dispatcher_with(page: Page) -> (Dispatcher<MemoryStore, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let controller = DisplayController::new(
        RecipeStore::builtin().unwrap(),
        FavoritesLedger::load(MemoryStore::new(), "favorites"),
        page,
        Renderer::default(),
    );
    (Dispatcher::new(controller, clock.clone(), ms(300)), clock)
}

fn dispatcher() -> (Dispatcher<MemoryStore, ManualClock>, ManualClock) {
    dispatcher_with(Page::standard().unwrap())
}

#[test]
fn test_only_latest_input_is_committed() {
    let (mut dispatcher, clock) = dispatcher();

    dispatcher.input("t");
    clock.advance(ms(100));
    dispatcher.input("to");
    clock.advance(ms(100));
    assert_eq!(
        dispatcher.input("tomato"),
        Outcome::SearchScheduled { deadline: ms(500) }
    );

    clock.advance(ms(299));
    assert_eq!(dispatcher.tick(), Outcome::Ignored);
    assert_eq!(dispatcher.controller().query(), "");

    clock.advance(ms(1));
    assert_eq!(
        dispatcher.tick(),
        Outcome::SearchCommitted {
            query: "tomato".to_string(),
            shown: 2
        }
    );
    assert_eq!(dispatcher.controller().visible_ids(), &[2, 3]);
    assert_eq!(
        dispatcher.controller().page().counter(),
        Some("Showing 2 of 8 recipes")
    );

    // Nothing left to fire
    clock.advance(ms(1000));
    assert_eq!(dispatcher.tick(), Outcome::Ignored);
}

#[test]
fn test_search_box_reflects_typing_before_commit() {
    let (mut dispatcher, _clock) = dispatcher();
    dispatcher.input("sal");
    assert_eq!(dispatcher.controller().page().search_value(), Some("sal"));
    assert_eq!(dispatcher.controller().visible_ids().len(), 8);
}

#[test]
fn test_panel_toggle_click() {
    let (mut dispatcher, _clock) = dispatcher();
    let selector = "button[data-toggle='steps'][data-id='1']";

    assert_eq!(
        dispatcher.click(selector).unwrap(),
        Outcome::PanelToggled {
            kind: PanelKind::Steps,
            recipe_id: 1,
            visible: true,
            label: "Hide steps".to_string(),
        }
    );
    let document = dispatcher.controller().page().document();
    assert!(document.contains("class=\"steps-container visible\" id=\"steps-1\""));
    assert!(document.contains("data-toggle=\"steps\" data-id=\"1\">Hide steps</button>"));
    // Other panels are untouched
    assert!(document.contains("class=\"ingredients-container\" id=\"ingredients-1\""));

    match dispatcher.click(selector).unwrap() {
        Outcome::PanelToggled { visible, label, .. } => {
            assert!(!visible);
            assert_eq!(label, "Show steps");
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn test_clicks_outside_controls_are_ignored() {
    let (mut dispatcher, _clock) = dispatcher();

    assert_eq!(dispatcher.click("#steps-1 li").unwrap(), Outcome::Ignored);
    assert_eq!(dispatcher.click(".recipe-card h3").unwrap(), Outcome::Ignored);
    assert_eq!(dispatcher.click("#does-not-exist").unwrap(), Outcome::Ignored);
}

#[test]
fn test_favorite_click_refreshes_page() {
    let (mut dispatcher, _clock) = dispatcher();
    dispatcher
        .click("button[data-toggle='ingredients'][data-id='1']")
        .unwrap();

    assert_eq!(
        dispatcher.click("[data-favorite='3']").unwrap(),
        Outcome::FavoriteToggled {
            recipe_id: 3,
            favorite: true
        }
    );

    let controller = dispatcher.controller();
    assert!(controller.favorites().is_favorite(3));
    assert_eq!(
        controller.favorites().store().get("favorites").unwrap().as_deref(),
        Some("[3]")
    );
    assert!(controller
        .page()
        .root_html()
        .contains("class=\"favorite-btn active\" data-favorite=\"3\""));
    // The rebuild collapses panels
    assert!(!controller.page().is_panel_visible(PanelKind::Ingredients, 1));
}

#[test]
fn test_favorite_twice_restores_original() {
    let (mut dispatcher, _clock) = dispatcher();
    dispatcher.click("[data-favorite='5']").unwrap();
    dispatcher.click("[data-favorite='5']").unwrap();

    let favorites = dispatcher.controller().favorites();
    assert!(favorites.is_empty());
    assert_eq!(
        favorites.store().get("favorites").unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn test_filtered_out_recipes_cannot_be_clicked() {
    let (mut dispatcher, clock) = dispatcher();
    dispatcher.input("tomato");
    clock.advance(ms(300));
    dispatcher.tick();

    assert_eq!(dispatcher.click("[data-favorite='1']").unwrap(), Outcome::Ignored);
    assert!(dispatcher.controller().favorites().is_empty());
}

#[test]
fn test_clear_search_cancels_pending_input() {
    let (mut dispatcher, clock) = dispatcher();
    dispatcher.input("salad");
    clock.advance(ms(300));
    dispatcher.tick();
    assert_eq!(dispatcher.controller().visible_ids(), &[3]);

    dispatcher.input("lava");
    clock.advance(ms(100));
    assert_eq!(dispatcher.click("#clear-search").unwrap(), Outcome::SearchCleared);

    assert_eq!(dispatcher.controller().query(), "");
    assert_eq!(dispatcher.controller().page().search_value(), Some(""));
    assert_eq!(dispatcher.controller().visible_ids().len(), 8);

    clock.advance(ms(1000));
    assert_eq!(dispatcher.tick(), Outcome::Ignored);
    assert_eq!(dispatcher.controller().query(), "");
}

#[test]
fn test_page_without_optional_elements() {
    let page = Page::from_shell("<main id=\"recipe-container\"></main>").unwrap();
    let (mut dispatcher, clock) = dispatcher_with(page);

    assert_eq!(dispatcher.input("salad"), Outcome::Ignored);
    clock.advance(ms(500));
    assert_eq!(dispatcher.tick(), Outcome::Ignored);

    assert_eq!(dispatcher.click("#clear-search").unwrap(), Outcome::Ignored);
    assert_eq!(dispatcher.activate(Control::ClearSearch).unwrap(), Outcome::Ignored);
    assert_eq!(dispatcher.controller().page().counter(), None);

    // Cards and their controls still work
    assert!(matches!(
        dispatcher.click("[data-favorite='2']").unwrap(),
        Outcome::FavoriteToggled { recipe_id: 2, favorite: true }
    ));
}

#[test]
fn test_unknown_recipe_favorite_is_an_error() {
    let (mut dispatcher, _clock) = dispatcher();
    assert!(dispatcher
        .activate(Control::Favorite { recipe_id: 42 })
        .is_err());
}

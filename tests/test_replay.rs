use recipe_browser::replay::{parse_script, replay, ReplayEntry};
use recipe_browser::{
    build_dispatcher, BrowserConfig, ManualClock, MemoryStore, Outcome, PanelKind,
};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_replay_session() {
    let events = parse_script(
        r#"[
            {"at": 0, "input": "t"},
            {"at": 100, "input": "tomato"},
            {"at": 250, "click": "button[data-toggle='ingredients'][data-id='2']"},
            {"at": 500, "click": "[data-favorite='3']"}
        ]"#,
    )
    .unwrap();

    let mut dispatcher =
        build_dispatcher(&BrowserConfig::default(), MemoryStore::new(), ManualClock::new())
            .unwrap();
    let entries = replay(&mut dispatcher, &events).unwrap();

    assert_eq!(
        entries,
        vec![
            ReplayEntry {
                at: ms(0),
                outcome: Outcome::SearchScheduled { deadline: ms(300) }
            },
            ReplayEntry {
                at: ms(100),
                outcome: Outcome::SearchScheduled { deadline: ms(400) }
            },
            ReplayEntry {
                at: ms(250),
                outcome: Outcome::PanelToggled {
                    kind: PanelKind::Ingredients,
                    recipe_id: 2,
                    visible: true,
                    label: "Hide ingredients".to_string(),
                }
            },
            ReplayEntry {
                at: ms(400),
                outcome: Outcome::SearchCommitted {
                    query: "tomato".to_string(),
                    shown: 2
                }
            },
            ReplayEntry {
                at: ms(500),
                outcome: Outcome::FavoriteToggled {
                    recipe_id: 3,
                    favorite: true
                }
            },
        ]
    );

    let page = dispatcher.controller().page();
    assert_eq!(page.counter(), Some("Showing 2 of 8 recipes"));
    assert!(!page.is_panel_visible(PanelKind::Ingredients, 2));
}

#[test]
fn test_pending_input_fires_after_last_event() {
    let events = parse_script(r#"[{"at": 20, "input": "lava"}]"#).unwrap();
    let mut dispatcher =
        build_dispatcher(&BrowserConfig::default(), MemoryStore::new(), ManualClock::new())
            .unwrap();

    let entries = replay(&mut dispatcher, &events).unwrap();
    assert_eq!(
        entries.last(),
        Some(&ReplayEntry {
            at: ms(320),
            outcome: Outcome::SearchCommitted {
                query: "lava".to_string(),
                shown: 1
            }
        })
    );
    assert_eq!(dispatcher.controller().visible_ids(), &[8]);
}

#[test]
fn test_configured_debounce_interval() {
    let mut config = BrowserConfig::default();
    config.search.debounce_ms = 50;

    let events = parse_script(
        r#"[{"at": 0, "input": "salad"}, {"at": 60, "tick": true}]"#,
    )
    .unwrap();
    let mut dispatcher =
        build_dispatcher(&config, MemoryStore::new(), ManualClock::new()).unwrap();

    let entries = replay(&mut dispatcher, &events).unwrap();
    assert_eq!(entries[1].at, ms(50));
    assert_eq!(dispatcher.controller().query(), "salad");
}

#[test]
fn test_bad_selector_aborts_replay() {
    let events = parse_script(r#"[{"at": 0, "click": "[[["}]"#).unwrap();
    let mut dispatcher =
        build_dispatcher(&BrowserConfig::default(), MemoryStore::new(), ManualClock::new())
            .unwrap();
    assert!(replay(&mut dispatcher, &events).is_err());
}

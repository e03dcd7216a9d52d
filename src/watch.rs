//! Interactive session: stdin lines drive the page, the debounce timer runs on tokio.

use crate::debounce::Clock;
use crate::error::BrowserError;
use crate::events::{Control, Dispatcher, Outcome};
use crate::render::PanelKind;
use crate::storage::KeyValueStore;
use log::{error, info, warn};
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::Instant;

/// Clock backed by tokio's timer, so paused test time applies
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
}

impl TokioClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text: the new content of the search box
    Input(String),
    Favorite(u32),
    Toggle(PanelKind, u32),
    Clear,
    Quit,
}

/// Lines starting with `:` are commands (`:fav ID`, `:toggle KIND ID`,
/// `:clear`, `:quit`); anything else is search box content.
pub fn parse_line(line: &str) -> Result<Command, String> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(Command::Input(line.to_string()));
    };

    let parts: Vec<&str> = command.split_whitespace().collect();
    match parts.as_slice() {
        ["fav" | "favorite", id] => parse_id(id).map(Command::Favorite),
        ["toggle", kind, id] => {
            let kind = kind.parse::<PanelKind>()?;
            parse_id(id).map(|id| Command::Toggle(kind, id))
        }
        ["clear"] => Ok(Command::Clear),
        ["quit" | "q"] => Ok(Command::Quit),
        _ => Err(format!("unknown command ':{}'", command.trim())),
    }
}

fn parse_id(raw: &str) -> Result<u32, String> {
    raw.parse()
        .map_err(|_| format!("'{}' is not a recipe id", raw))
}

/// Run until `:quit` or end of input, rewriting `out` after every change.
/// Input still pending at end of input is committed after its quiet period.
pub async fn watch<S, R>(
    dispatcher: &mut Dispatcher<S, TokioClock>,
    input: R,
    out: &Path,
) -> Result<(), BrowserError>
where
    S: KeyValueStore,
    R: AsyncBufRead + Unpin,
{
    write_page(dispatcher, out).await?;
    let mut lines = input.lines();

    loop {
        let wait = dispatcher
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(dispatcher.clock().now()));

        // A commit that is already due goes out before the next line is read
        tokio::select! {
            biased;

            _ = tokio::time::sleep(wait.unwrap_or_default()), if wait.is_some() => {
                commit_due(dispatcher, out).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                commit_due(dispatcher, out).await?;
                match parse_line(&line) {
                    Ok(Command::Quit) => {
                        info!("Quit requested");
                        return Ok(());
                    }
                    Ok(command) => {
                        if let Some(outcome) = handle(dispatcher, command) {
                            report(&outcome);
                            write_page(dispatcher, out).await?;
                        }
                    }
                    Err(message) => warn!("{}", message),
                }
            }
        }
    }

    if let Some(deadline) = dispatcher.next_deadline() {
        tokio::time::sleep(deadline.saturating_sub(dispatcher.clock().now())).await;
        commit_due(dispatcher, out).await?;
    }

    Ok(())
}

/// Commit the pending search if its deadline has passed
async fn commit_due<S: KeyValueStore>(
    dispatcher: &mut Dispatcher<S, TokioClock>,
    out: &Path,
) -> Result<(), BrowserError> {
    let outcome = dispatcher.tick();
    if outcome != Outcome::Ignored {
        report(&outcome);
        write_page(dispatcher, out).await?;
    }
    Ok(())
}

fn handle<S: KeyValueStore>(
    dispatcher: &mut Dispatcher<S, TokioClock>,
    command: Command,
) -> Option<Outcome> {
    let result = match command {
        Command::Input(value) => {
            // Keystrokes don't touch the output until the commit fires
            dispatcher.input(value);
            return None;
        }
        Command::Favorite(recipe_id) => dispatcher.activate(Control::Favorite { recipe_id }),
        Command::Toggle(kind, recipe_id) => {
            dispatcher.activate(Control::PanelToggle { kind, recipe_id })
        }
        Command::Clear => dispatcher.activate(Control::ClearSearch),
        Command::Quit => return None,
    };

    match result {
        Ok(Outcome::Ignored) => None,
        Ok(outcome) => Some(outcome),
        Err(e) => {
            error!("{}", e);
            None
        }
    }
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::SearchCommitted { query, shown } => {
            info!("Search '{}' matched {} recipes", query, shown)
        }
        Outcome::FavoriteToggled {
            recipe_id,
            favorite,
        } => info!("Recipe {} favorite: {}", recipe_id, favorite),
        Outcome::PanelToggled { label, .. } => {
            info!("Panel toggled, control now reads '{}'", label)
        }
        Outcome::SearchCleared => info!("Search cleared"),
        Outcome::SearchScheduled { .. } | Outcome::Ignored => {}
    }
}

async fn write_page<S: KeyValueStore>(
    dispatcher: &Dispatcher<S, TokioClock>,
    out: &Path,
) -> Result<(), BrowserError> {
    tokio::fs::write(out, dispatcher.controller().page().document()).await?;
    Ok(())
}

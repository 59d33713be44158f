//! Search engine actor.
//!
//! # Design
//! One tokio task owns the `SearchState`. Query updates and refresh requests
//! arrive as commands, fetch results come back from spawned fetch tasks over
//! a second channel, and the debounce timer is a single `sleep_until` on the
//! state's deadline. `select!` multiplexes the three, so every mutation runs
//! on the actor's task and no lock guards the state. After each event the
//! actor publishes a `SearchSnapshot` on a watch channel.
//!
//! Fetches are never cancelled. When two overlap, whichever result reaches
//! the actor last is the one left standing.

use std::sync::Arc;
use std::time::Duration;

use catalog_core::{
    FilterMode, MovieEntity, Result, SearchAction, SearchConfig, SearchSnapshot, SearchState,
};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::fetch::MovieSource;

/// How long the actor sleeps when no query is pending.
const IDLE_WAKE: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, Copy)]
pub struct EngineSettings {
    pub debounce: Duration,
    pub filter_mode: FilterMode,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

impl From<&SearchConfig> for EngineSettings {
    fn from(config: &SearchConfig) -> Self {
        Self {
            debounce: config.debounce(),
            filter_mode: config.filter_mode,
        }
    }
}

enum Command {
    SetQuery(String),
    Refresh,
}

/// Handle to a running search engine.
///
/// Dropping the handle stops the actor.
pub struct SearchEngine {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<SearchSnapshot>,
    worker: JoinHandle<()>,
}

impl SearchEngine {
    /// Start the actor and its initial fetch. Must be called inside a tokio
    /// runtime.
    pub fn spawn(source: Arc<dyn MovieSource>, settings: EngineSettings) -> Self {
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (publisher, snapshots) = watch::channel(SearchSnapshot::default());
        let state = SearchState::new(settings.debounce, settings.filter_mode);
        let worker = tokio::spawn(run(state, source, command_rx, publisher));
        Self {
            commands,
            snapshots,
            worker,
        }
    }

    pub fn set_query(&self, query: impl Into<String>) {
        let _ = self.commands.send(Command::SetQuery(query.into()));
    }

    /// Fetch again, exactly like the initial load.
    pub fn refresh(&self) {
        let _ = self.commands.send(Command::Refresh);
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.snapshots.clone()
    }
}

impl Drop for SearchEngine {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

async fn run(
    mut state: SearchState,
    source: Arc<dyn MovieSource>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    publisher: watch::Sender<SearchSnapshot>,
) {
    let (done_tx, mut done_rx) = mpsc::unbounded_channel();
    spawn_fetch(&source, &done_tx);

    loop {
        let deadline = state.deadline();
        let wake_at = deadline
            .map(Instant::from_std)
            .unwrap_or_else(|| Instant::now() + IDLE_WAKE);

        tokio::select! {
            command = commands.recv() => match command {
                Some(Command::SetQuery(query)) => state.set_query(query, Instant::now().into_std()),
                Some(Command::Refresh) => spawn_fetch(&source, &done_tx),
                None => break,
            },
            Some(result) = done_rx.recv() => state.apply_fetch(result),
            _ = sleep_until(wake_at), if deadline.is_some() => {
                if let Some(SearchAction::Fetch) = state.poll(Instant::now().into_std()) {
                    spawn_fetch(&source, &done_tx);
                }
            }
        }

        publisher.send_replace(state.snapshot());
    }

    tracing::debug!("search engine stopped");
}

fn spawn_fetch(
    source: &Arc<dyn MovieSource>,
    done: &mpsc::UnboundedSender<Result<Vec<MovieEntity>>>,
) {
    let source = Arc::clone(source);
    let done = done.clone();
    tokio::spawn(async move {
        let result = source.fetch_top_rated().await;
        let _ = done.send(result);
    });
}

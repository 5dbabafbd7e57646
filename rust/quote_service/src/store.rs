// src/store.rs

use crate::aggregator::fetch_all;
use crate::error::{FleetError, ListError};
use crate::loader::StockApi;
use crate::models::StockSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load stock data. Please try again.";

/// What the list view shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StockListState {
    pub stocks: Vec<StockSummary>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub generation: u64,
    pub last_updated: Option<DateTime<Utc>>,
}

impl StockListState {
    fn settled(&self, generation: u64) -> bool {
        self.generation >= generation && !self.is_loading
    }
}

enum Command {
    Refresh(oneshot::Sender<u64>),
}

struct Completion {
    generation: u64,
    result: Result<Vec<StockSummary>, FleetError>,
}

/// Cheap, cloneable front of the list store.
///
/// A single writer task owns the state; fleet fetches run in their own tasks
/// and hand their results back to it. A refresh aborts the fetch it
/// supersedes, and results from older generations are dropped.
#[derive(Clone)]
pub struct StockListHandle {
    commands: mpsc::Sender<Command>,
    state: watch::Receiver<StockListState>,
}

impl StockListHandle {
    /// Starts the writer task and the initial fetch. Must be called inside a tokio runtime.
    pub fn spawn<A>(api: Arc<A>, symbols: Vec<String>) -> Self
    where
        A: StockApi + Send + Sync + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel(16);
        let (state_tx, state_rx) = watch::channel(StockListState::default());

        let writer = Writer {
            api,
            symbols: Arc::new(symbols),
            state: state_tx,
            generation: 0,
            in_flight: None,
        };
        tokio::spawn(writer.run(command_rx));

        let handle = StockListHandle {
            commands: command_tx,
            state: state_rx,
        };
        let (reply, _) = oneshot::channel();
        // The channel is fresh, so this cannot be full.
        let _ = handle.commands.try_send(Command::Refresh(reply));
        handle
    }

    /// Starts a new fetch generation and returns its number.
    pub async fn refresh(&self) -> Result<u64, ListError> {
        let (reply, generation) = oneshot::channel();
        self.commands
            .send(Command::Refresh(reply))
            .await
            .map_err(|_| ListError::Closed)?;
        generation.await.map_err(|_| ListError::Closed)
    }

    pub fn snapshot(&self) -> StockListState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StockListState> {
        self.state.clone()
    }

    /// Waits until `generation`, or a newer one, has finished loading.
    pub async fn wait_settled(&self, generation: u64) -> Result<StockListState, ListError> {
        let mut rx = self.state.clone();
        let state = rx
            .wait_for(|state| state.settled(generation))
            .await
            .map_err(|_| ListError::Closed)?;
        Ok(state.clone())
    }
}

struct Writer<A> {
    api: Arc<A>,
    symbols: Arc<Vec<String>>,
    state: watch::Sender<StockListState>,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
}

impl<A> Writer<A>
where
    A: StockApi + Send + Sync + 'static,
{
    async fn run(mut self, mut commands: mpsc::Receiver<Command>) {
        let (done_tx, mut done_rx) = mpsc::channel::<Completion>(16);

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(Command::Refresh(reply)) => {
                        let generation = self.start(done_tx.clone());
                        let _ = reply.send(generation);
                    }
                    None => break,
                },
                Some(completion) = done_rx.recv() => self.finish(completion),
            }
        }

        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
        log::debug!("Stock list store stopped");
    }

    fn start(&mut self, done: mpsc::Sender<Completion>) -> u64 {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }

        self.generation += 1;
        let generation = self.generation;
        self.state.send_modify(|state| {
            state.stocks.clear();
            state.is_loading = true;
            state.error_message = None;
            state.generation = generation;
        });

        let api = Arc::clone(&self.api);
        let symbols = Arc::clone(&self.symbols);
        self.in_flight = Some(tokio::spawn(async move {
            let result = fetch_all(api.as_ref(), &symbols).await;
            let _ = done.send(Completion { generation, result }).await;
        }));
        generation
    }

    fn finish(&mut self, completion: Completion) {
        if completion.generation != self.generation {
            log::debug!(
                "Dropping stale stock list from generation {} (current {})",
                completion.generation,
                self.generation
            );
            return;
        }
        self.in_flight = None;

        self.state.send_modify(|state| {
            state.is_loading = false;
            match completion.result {
                Ok(stocks) => {
                    state.stocks = stocks;
                    state.error_message = None;
                    state.last_updated = Some(Utc::now());
                }
                Err(e) => {
                    log::warn!("Stock list generation {}: {e}", completion.generation);
                    state.stocks.clear();
                    state.error_message = Some(LOAD_FAILED_MESSAGE.to_string());
                }
            }
        });
    }
}

//! Glue code tying the fetch service, the battle, and the terminal together.
use std::sync::Arc;

use anyhow::{Context, Result};
use pokeduel_battle::{Battle, BattleReport, Creature, Phase};
use pokeduel_client::{CatalogClient, Transport};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use crate::command::{Command, HELP};
use crate::render::render;

/// Results coming back from spawned fetches
#[derive(Debug)]
pub enum AppEvent {
    PairFetched(Option<Creature>, Option<Creature>),
    BattleFinished(BattleReport),
}

/// Top-level container: owns the creature pair through the battle
///
/// Network work runs on spawned tasks and reports back over a channel, so the
/// battle is only ever mutated from the event loop.
pub struct App<T: Transport + 'static> {
    client: Arc<CatalogClient<T>>,
    battle: Battle,
    tx_event: mpsc::UnboundedSender<AppEvent>,
    rx_event: mpsc::UnboundedReceiver<AppEvent>,
    /// Spawned tasks whose result has not been received yet
    outstanding: usize,
}

impl<T: Transport + 'static> App<T> {
    pub fn new(client: CatalogClient<T>) -> Self {
        let (tx_event, rx_event) = mpsc::unbounded_channel();
        Self {
            client: Arc::new(client),
            battle: Battle::new(),
            tx_event,
            rx_event,
            outstanding: 0,
        }
    }

    pub fn battle(&self) -> &Battle {
        &self.battle
    }

    /// Draw a new pair in the background
    pub fn select_creatures(&mut self) {
        let client = Arc::clone(&self.client);
        let tx = self.tx_event.clone();
        self.outstanding += 1;

        tokio::spawn(async move {
            let (a, b) = client.fetch_random_pair().await;
            let _ = tx.send(AppEvent::PairFetched(a, b));
        });
    }

    /// Start a battle in the background; `false` if it could not start
    pub fn start_battle(&mut self) -> bool {
        let Some(pending) = self.battle.begin() else {
            return false;
        };

        let client = Arc::clone(&self.client);
        let tx = self.tx_event.clone();
        self.outstanding += 1;

        tokio::spawn(async move {
            let report = pending.run(client.as_ref()).await;
            let _ = tx.send(AppEvent::BattleFinished(report));
        });

        true
    }

    /// Wait for the next background result
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        let event = self.rx_event.recv().await?;
        self.outstanding = self.outstanding.saturating_sub(1);
        Some(event)
    }

    pub fn has_outstanding_work(&self) -> bool {
        self.outstanding > 0
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::PairFetched(a, b) => {
                self.battle.set_creatures(a.map(Arc::new), b.map(Arc::new));
            }
            AppEvent::BattleFinished(report) => {
                tracing::debug!(
                    generation = report.generation(),
                    failed = report.is_err(),
                    "Battle finished"
                );
                self.battle.complete(report);
            }
        }
    }

    /// Run the event loop until `quit`, or until input ends and every
    /// background fetch has reported back
    pub async fn run<R, W>(mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut view_rx = self.battle.subscribe();

        let intro = format!("{}\n{}", HELP, render(&view_rx.borrow_and_update()));
        write(&mut output, &intro).await?;

        let mut input_open = true;

        loop {
            if !input_open && !self.has_outstanding_work() {
                if view_rx.has_changed().unwrap_or(false) {
                    let text = render(&view_rx.borrow_and_update());
                    write(&mut output, &text).await?;
                }
                break;
            }

            tokio::select! {
                line = lines.next_line(), if input_open => {
                    let Some(line) = line.context("Failed to read input")? else {
                        input_open = false;
                        continue;
                    };

                    match Command::parse(&line) {
                        Some(Command::Select) => self.select_creatures(),
                        Some(Command::Battle) => {
                            if !self.start_battle() {
                                tracing::debug!(phase = ?self.battle.phase(), "Start ignored");
                                if let Some(hint) = refusal_hint(self.battle.phase()) {
                                    write(&mut output, hint).await?;
                                }
                            }
                        }
                        Some(Command::Help) => write(&mut output, HELP).await?,
                        Some(Command::Quit) => break,
                        None if line.trim().is_empty() => {}
                        None => write(&mut output, "Unknown command, try `help`\n").await?,
                    }
                }
                Some(event) = self.next_event() => self.apply(event),
                changed = view_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let text = render(&view_rx.borrow_and_update());
                    write(&mut output, &text).await?;
                }
            }
        }

        tracing::info!("pokeduel exiting");
        Ok(())
    }
}

/// Why `battle` did nothing, when the view does not already say so
fn refusal_hint(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::Idle => Some("Select Pokémon first\n"),
        Phase::Fetching => Some("Battle already in progress\n"),
        _ => None,
    }
}

async fn write<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output
        .write_all(text.as_bytes())
        .await
        .context("Failed to write output")?;
    output.flush().await.context("Failed to flush output")
}

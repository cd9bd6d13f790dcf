//! Runs the three animated drivers side by side and reports real timings.
//!
//! A race moves the coordinator `Idle -> Racing -> (Completed | Cancelled)`.
//! Only the most recent race may move it: starting a race cancels whichever
//! one was active, and a superseded race finishing late leaves the state alone.

use std::sync::{Mutex, PoisonError};

use sort::{ALL_ALGORITHMS, SortAlgorithm, is_sorted_non_decreasing};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::benchmark;
use crate::cancel::Cancelled;
use crate::config::RaceConfig;
use crate::drivers::{self, Pacer};
use crate::error::RaceError;
use crate::progress::ProgressObserver;
use crate::report::RaceReport;
use crate::speed::SpeedDial;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceState {
    Idle,
    Racing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceOutcome {
    Completed(RaceReport),
    Cancelled,
}

impl RaceOutcome {
    pub fn report(&self) -> Option<&RaceReport> {
        match self {
            Self::Completed(report) => Some(report),
            Self::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareMode {
    #[default]
    Animated,
    Instant,
}

#[derive(Default)]
struct ActiveRace {
    latest_id: u64,
    token: Option<CancellationToken>,
}

pub struct RaceCoordinator {
    config: RaceConfig,
    speed: SpeedDial,
    active: Mutex<ActiveRace>,
    state: watch::Sender<RaceState>,
}

impl RaceCoordinator {
    pub fn new(config: RaceConfig) -> Result<Self, RaceError> {
        config.validate()?;
        let (state, _rx) = watch::channel(RaceState::Idle);
        Ok(Self {
            speed: SpeedDial::new(config.default_speed),
            config,
            active: Mutex::new(ActiveRace::default()),
            state,
        })
    }

    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    /// The dial every throttle of every race follows.
    pub fn speed(&self) -> &SpeedDial {
        &self.speed
    }

    pub fn state(&self) -> RaceState {
        *self.state.borrow()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<RaceState> {
        self.state.subscribe()
    }

    /// Input-mutating controls stay disabled while a race is running.
    pub fn controls_enabled(&self) -> bool {
        self.state() != RaceState::Racing
    }

    /// Signals the active race, if any. Returns whether one was signalled.
    pub fn cancel(&self) -> bool {
        let token = self.lock_active().token.clone();
        match token {
            Some(token) => {
                tracing::info!("race cancellation requested");
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Starts a race on copies of `input` without running it yet.
    ///
    /// Any race already in flight is cancelled first.
    pub fn prepare(&self, input: &[i32]) -> Result<PreparedRace<'_>, RaceError> {
        let limit = self.config.visualization_limit;
        if input.len() > limit {
            return Err(RaceError::TooLargeToAnimate {
                len: input.len(),
                limit,
            });
        }

        let (id, cancel) = self.begin_race();
        tracing::info!(race = id, len = input.len(), speed = self.speed.get().get(), "race started");

        Ok(PreparedRace {
            coordinator: self,
            id,
            input: input.to_vec(),
            cancel,
            settled: false,
        })
    }

    pub async fn race<O, F>(&self, input: &[i32], observer_for: F) -> Result<RaceOutcome, RaceError>
    where
        O: ProgressObserver,
        F: FnMut(SortAlgorithm) -> O,
    {
        Ok(self.prepare(input)?.run(observer_for).await)
    }

    /// Times the plain kernels without animation or observers.
    pub fn benchmark(&self, input: &[i32]) -> RaceReport {
        let report = benchmark::measure_all(input, false);
        tracing::info!(len = input.len(), "benchmark finished");
        report
    }

    /// Animates when asked to and the input is small enough, otherwise
    /// benchmarks straight away.
    pub async fn compare<O, F>(
        &self,
        input: &[i32],
        mode: CompareMode,
        observer_for: F,
    ) -> Result<RaceOutcome, RaceError>
    where
        O: ProgressObserver,
        F: FnMut(SortAlgorithm) -> O,
    {
        let animate = mode == CompareMode::Animated && input.len() <= self.config.visualization_limit;
        if !animate {
            if mode == CompareMode::Animated {
                tracing::info!(
                    len = input.len(),
                    limit = self.config.visualization_limit,
                    "input too large to animate, benchmarking only"
                );
            }
            return Ok(RaceOutcome::Completed(self.benchmark(input)));
        }
        self.race(input, observer_for).await
    }

    fn lock_active(&self) -> std::sync::MutexGuard<'_, ActiveRace> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes over the active slot and publishes `Racing` under one lock, so a
    /// superseded race can never overwrite the state of a newer one.
    fn begin_race(&self) -> (u64, CancellationToken) {
        let mut active = self.lock_active();
        if let Some(previous) = active.token.take() {
            tracing::info!(race = active.latest_id, "race superseded");
            previous.cancel();
        }
        active.latest_id = active.latest_id.wrapping_add(1);
        let token = CancellationToken::new();
        active.token = Some(token.clone());
        self.state.send_replace(RaceState::Racing);
        (active.latest_id, token)
    }

    /// Moves to `state` only if race `id` is still the latest one.
    fn settle(&self, id: u64, state: RaceState) {
        let mut active = self.lock_active();
        if active.latest_id == id {
            active.token = None;
            self.state.send_replace(state);
        }
    }
}

/// A race that owns its input copy and cancellation token.
///
/// Dropping it without [`run`](Self::run) cancels it.
pub struct PreparedRace<'a> {
    coordinator: &'a RaceCoordinator,
    id: u64,
    input: Vec<i32>,
    cancel: CancellationToken,
    settled: bool,
}

impl PreparedRace<'_> {
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Drives all three lanes to completion or cancellation, then runs the
    /// unthrottled timing pass if nothing was cancelled.
    pub async fn run<O, F>(mut self, mut observer_for: F) -> RaceOutcome
    where
        O: ProgressObserver,
        F: FnMut(SortAlgorithm) -> O,
    {
        let dial = self.coordinator.speed.clone();
        let mut lanes = ALL_ALGORITHMS.map(|algorithm| Lane {
            algorithm,
            values: self.input.clone(),
            pacer: Pacer::new(dial.clone(), self.cancel.clone(), observer_for(algorithm)),
        });

        let [bubble, insertion, quick] = &mut lanes;
        let (bubble, insertion, quick) = tokio::join!(bubble.run(), insertion.run(), quick.run());
        let finished = [bubble, insertion, quick].iter().all(Result::is_ok);

        let outcome = if finished && !self.cancel.is_cancelled() {
            debug_assert!(lanes.iter().all(|lane| is_sorted_non_decreasing(&lane.values)));
            let report = benchmark::measure_all(&self.input, true);
            if let Some(winner) = report.winner() {
                tracing::info!(
                    race = self.id,
                    winner = winner.name(),
                    elapsed = ?winner.elapsed,
                    "race completed"
                );
            }
            RaceOutcome::Completed(report)
        } else {
            tracing::info!(race = self.id, "race cancelled");
            RaceOutcome::Cancelled
        };

        let state = match outcome {
            RaceOutcome::Completed(_) => RaceState::Completed,
            RaceOutcome::Cancelled => RaceState::Cancelled,
        };
        self.coordinator.settle(self.id, state);
        self.settled = true;
        outcome
    }
}

impl Drop for PreparedRace<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.cancel.cancel();
            self.coordinator.settle(self.id, RaceState::Cancelled);
        }
    }
}

struct Lane<O> {
    algorithm: SortAlgorithm,
    values: Vec<i32>,
    pacer: Pacer<O>,
}

impl<O: ProgressObserver> Lane<O> {
    async fn run(&mut self) -> Result<(), Cancelled> {
        let result = drivers::drive(self.algorithm, &mut self.values, &mut self.pacer).await;
        tracing::debug!(
            algorithm = %self.algorithm,
            frames = self.pacer.frames(),
            cancelled = result.is_err(),
            "lane finished"
        );
        result
    }
}

//! The session: one circuit-state handle per builder, executor attached.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;
use tracing::debug;

use quoll_compile::{CompileResult, ControlLift, Inverse, rewrite_from};
use quoll_hal::{Counts, Executor, ResultAggregator, ResultFormat, ResultNotifier};
use quoll_ir::{CircuitLog, QubitId};

/// Default shot count for an execution request.
pub const DEFAULT_SHOTS: u32 = 100;

/// Shared result state written by completion tasks and read by the poller.
#[derive(Default)]
struct ExecutionState {
    aggregator: ResultAggregator,
    notifier: ResultNotifier,
}

/// A circuit session.
///
/// Owns one [`CircuitLog`] and the result state of the most recent
/// execution. Every facade that builds on the same circuit receives this
/// handle explicitly — the sharing relationship is a constructor dependency,
/// not module state.
///
/// Execution is non-blocking: [`run`](Session::run) spawns the collaborator
/// call and returns immediately. The completion task is the sole writer of
/// the shared result state, and its write (outcomes, histogram, readiness
/// edge) happens in one turn. Overlapping runs do not queue; whichever
/// completion lands last overwrites the state.
pub struct Session {
    log: CircuitLog,
    executor: Arc<dyn Executor>,
    state: Arc<Mutex<ExecutionState>>,
}

impl Session {
    /// Create a session bound to an executor.
    pub fn new(executor: Arc<dyn Executor>) -> Self {
        Self {
            log: CircuitLog::new(),
            executor,
            state: Arc::new(Mutex::new(ExecutionState::default())),
        }
    }

    // =========================================================================
    // Circuit building
    // =========================================================================

    /// The circuit log.
    pub fn circuit(&self) -> &CircuitLog {
        &self.log
    }

    /// The circuit log, for building and clearing.
    pub fn circuit_mut(&mut self) -> &mut CircuitLog {
        &mut self.log
    }

    /// Current log length; the start of a region for a later transform.
    pub fn mark(&self) -> usize {
        self.log.mark()
    }

    /// Invert everything appended since `mark`, in place.
    pub fn invert_from(&mut self, mark: usize) -> CompileResult<()> {
        rewrite_from(&mut self.log, mark, &Inverse)
    }

    /// Control-lift everything appended since `mark`, in place.
    ///
    /// Only the first control is used; extra controls are ignored.
    pub fn control_from(
        &mut self,
        mark: usize,
        controls: impl IntoIterator<Item = QubitId>,
    ) -> CompileResult<()> {
        let lift = ControlLift::new(controls)?;
        rewrite_from(&mut self.log, mark, &lift)
    }

    /// Render the current log as program text.
    pub fn program(&self) -> String {
        quoll_qasm::emit(&self.log)
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Request execution of the current program.
    ///
    /// Returns immediately; the spawned task writes the outcome set and
    /// bumps the readiness edge when the collaborator answers. A failed run
    /// still completes: it records the synthetic error outcome, so pollers
    /// are never left waiting on a failure. The returned handle may be
    /// awaited but does not have to be.
    pub fn run(&self, shots: u32) -> JoinHandle<()> {
        let program = self.program();
        let executor = Arc::clone(&self.executor);
        let state = Arc::clone(&self.state);

        debug!(executor = executor.name(), shots, "requesting execution");

        tokio::spawn(async move {
            let outcome = executor.execute(&program, shots).await;
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            match outcome {
                Ok(shot_list) => state.aggregator.set_outcomes(shot_list),
                Err(err) => state.aggregator.set_failure(err.to_string()),
            }
            state.notifier.complete();
        })
    }

    /// Poll the readiness edge.
    ///
    /// `true` exactly once per completed execution, then `false` until the
    /// next completion.
    pub fn poll_ready(&self) -> bool {
        self.lock_state().notifier.poll()
    }

    // =========================================================================
    // Result queries
    // =========================================================================

    /// Render the latest results in one of the presentation modes.
    pub fn results(&self, format: ResultFormat) -> String {
        self.lock_state().aggregator.render(format)
    }

    /// Snapshot of the latest histogram.
    pub fn histogram(&self) -> Counts {
        self.lock_state().aggregator.histogram().clone()
    }

    /// Count for one outcome; `0` when never observed.
    pub fn count_of(&self, outcome: &str) -> u64 {
        self.lock_state().aggregator.count_of(outcome)
    }

    /// Fraction of shots yielding one outcome.
    pub fn probability_of(&self, outcome: &str) -> f64 {
        self.lock_state().aggregator.probability_of(outcome)
    }

    /// Alias for [`probability_of`](Self::probability_of).
    pub fn frequency(&self, outcome: &str) -> f64 {
        self.lock_state().aggregator.frequency(outcome)
    }

    /// Percentage of shots yielding one outcome.
    pub fn percentage(&self, outcome: &str) -> f64 {
        self.lock_state().aggregator.percentage(outcome)
    }

    /// Shot count of the latest outcome set (`1` when empty).
    pub fn total_shots(&self) -> u64 {
        self.lock_state().aggregator.total()
    }

    /// Failure message of the latest execution, if it failed.
    pub fn last_error(&self) -> Option<String> {
        self.lock_state().aggregator.failure().map(String::from)
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ExecutionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

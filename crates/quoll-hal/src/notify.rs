//! One-shot readiness notification for completed executions.

/// Edge-triggered readiness flag for polling callers.
///
/// Modeled as a pair of generation counters rather than a mutable boolean:
/// each completed execution (success or failure) bumps the completed
/// generation, and a poll observes readiness exactly once per completion
/// regardless of how often the caller polls. Completions landing between
/// two polls collapse into one observation — last write wins, with no
/// queueing across overlapping executions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultNotifier {
    completed: u64,
    observed: u64,
}

impl ResultNotifier {
    /// Create a notifier in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed execution; transitions idle → ready.
    pub fn complete(&mut self) {
        self.completed = self.completed.wrapping_add(1);
    }

    /// Poll the readiness edge.
    ///
    /// Returns `true` on the first poll after a completion, then `false`
    /// until the next completion.
    pub fn poll(&mut self) -> bool {
        if self.observed != self.completed {
            self.observed = self.completed;
            true
        } else {
            false
        }
    }

    /// Whether every completion has already been observed.
    pub fn is_idle(&self) -> bool {
        self.observed == self.completed
    }
}

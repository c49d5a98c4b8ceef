//! Outcome aggregation: insertion-ordered histogram and derived statistics.

use rustc_hash::FxHashMap;
use tracing::debug;

/// Histogram of outcome bitstrings.
///
/// Iteration order is the insertion order of first appearance, so repeated
/// aggregation of the same outcome list renders identically.
#[derive(Debug, Clone, Default)]
pub struct Counts {
    order: Vec<(String, u64)>,
    index: FxHashMap<String, usize>,
}

impl Counts {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` observations of an outcome.
    pub fn insert(&mut self, outcome: impl Into<String>, n: u64) {
        let outcome = outcome.into();
        match self.index.get(&outcome) {
            Some(&slot) => self.order[slot].1 += n,
            None => {
                self.index.insert(outcome.clone(), self.order.len());
                self.order.push((outcome, n));
            }
        }
    }

    /// Count for an outcome; `0` when it was never observed.
    pub fn get(&self, outcome: &str) -> u64 {
        self.index.get(outcome).map_or(0, |&slot| self.order[slot].1)
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the histogram is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.order.iter().map(|(_, n)| n).sum()
    }

    /// Iterate over `(outcome, count)` in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order.iter().map(|(k, n)| (k.as_str(), *n))
    }

    /// The outcome with the highest count, ties broken by first appearance.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        let mut best: Option<(&str, u64)> = None;
        for (outcome, n) in self.iter() {
            if best.is_none_or(|(_, m)| n > m) {
                best = Some((outcome, n));
            }
        }
        best
    }

    /// Render as a JSON object, keys in first-appearance order.
    pub fn to_json(&self) -> String {
        let mut map = serde_json::Map::new();
        for (outcome, n) in self.iter() {
            map.insert(outcome.to_string(), serde_json::json!(n));
        }
        serde_json::Value::Object(map).to_string()
    }
}

/// Presentation mode for aggregated results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultFormat {
    /// JSON object of per-outcome counts.
    Raw,
    /// `outcome: count` pairs, comma-joined.
    Summary,
    /// `outcome: NN.NN%` pairs, comma-joined.
    Percentage,
    /// `outcome: count` lines, highest count first.
    Frequency,
}

/// Aggregates per-shot outcomes into a histogram and derived statistics.
///
/// Owns the outcome set of the most recent completed execution; each new
/// completion replaces it wholesale along with the histogram, so readers
/// never observe a partially updated state.
#[derive(Debug, Clone, Default)]
pub struct ResultAggregator {
    outcomes: Vec<String>,
    counts: Counts,
    failure: Option<String>,
}

impl ResultAggregator {
    /// Create an aggregator with no outcomes yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the outcome set with a completed execution's shots.
    pub fn set_outcomes(&mut self, outcomes: Vec<String>) {
        debug!(shots = outcomes.len(), "recording execution outcomes");
        self.counts = Self::count(&outcomes);
        self.outcomes = outcomes;
        self.failure = None;
    }

    /// Record a failed execution as a single synthetic error outcome.
    ///
    /// The failed run is still a completed run: the outcome set is replaced,
    /// never left stale or partially updated.
    pub fn set_failure(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "recording execution failure");
        self.outcomes = vec![format!("error: {message}")];
        self.counts = Self::count(&self.outcomes);
        self.failure = Some(message);
    }

    fn count(outcomes: &[String]) -> Counts {
        let mut counts = Counts::new();
        for outcome in outcomes {
            counts.insert(outcome.clone(), 1);
        }
        counts
    }

    /// The per-shot outcomes of the most recent execution.
    pub fn shots(&self) -> &[String] {
        &self.outcomes
    }

    /// The histogram of the current outcome set.
    pub fn histogram(&self) -> &Counts {
        &self.counts
    }

    /// Shot count of the current outcome set.
    ///
    /// Returns `1` when the set is empty so percentage and frequency queries
    /// never divide by zero. This is a deliberate convention of the query
    /// surface, not a numerical default.
    pub fn total(&self) -> u64 {
        if self.outcomes.is_empty() {
            1
        } else {
            self.outcomes.len() as u64
        }
    }

    /// Count for one outcome; `0` when it was never observed.
    pub fn count_of(&self, outcome: &str) -> u64 {
        self.counts.get(outcome)
    }

    /// Fraction of shots yielding one outcome; `0.0` when never observed.
    pub fn probability_of(&self, outcome: &str) -> f64 {
        self.count_of(outcome) as f64 / self.total() as f64
    }

    /// Alias for [`probability_of`](Self::probability_of).
    pub fn frequency(&self, outcome: &str) -> f64 {
        self.probability_of(outcome)
    }

    /// Percentage of shots yielding one outcome.
    pub fn percentage(&self, outcome: &str) -> f64 {
        100.0 * self.probability_of(outcome)
    }

    /// Whether the most recent execution failed.
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    /// The failure message of the most recent execution, if it failed.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Render the histogram in one of the presentation modes.
    pub fn render(&self, format: ResultFormat) -> String {
        match format {
            ResultFormat::Raw => self.counts.to_json(),

            ResultFormat::Summary => self
                .counts
                .iter()
                .map(|(outcome, n)| format!("{outcome}: {n}"))
                .collect::<Vec<_>>()
                .join(", "),

            ResultFormat::Percentage => self
                .counts
                .iter()
                .map(|(outcome, _)| {
                    format!("{outcome}: {:.2}%", self.percentage(outcome))
                })
                .collect::<Vec<_>>()
                .join(", "),

            ResultFormat::Frequency => {
                let mut entries: Vec<_> = self.counts.iter().collect();
                // Stable sort keeps first-appearance order among ties.
                entries.sort_by(|a, b| b.1.cmp(&a.1));
                entries
                    .iter()
                    .map(|(outcome, n)| format!("{outcome}: {n}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
    }
}

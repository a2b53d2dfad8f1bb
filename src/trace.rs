//! Distance/predecessor bookkeeping and the replay trace.
//!
//! Every snapshot embedded in a trace entry is a full independent copy of
//! the working distance map: later relaxations never retroactively change
//! an already-recorded entry. `BTreeMap` keeps snapshot keys in
//! lexicographic order for deterministic display.

use num_traits::{Float, Zero};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Debug;

/// Mapping from node id to its current shortest known distance.
/// Unreached nodes carry `W::infinity()`.
pub type DistanceMap<W> = BTreeMap<String, W>;

/// Mapping from node id to the predecessor on its current shortest path,
/// `None` for the source and for unreached nodes. Defines a forest.
pub type PredecessorMap = BTreeMap<String, Option<String>>;

/// One algorithmic event in a run, in replay-label form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceStep {
    Init,
    Visit(String),
    Relax { from: String, to: String },
    Settled(String),
    NegativeCycle,
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceStep::Init => write!(f, "init"),
            TraceStep::Visit(id) => write!(f, "visit {}", id),
            TraceStep::Relax { from, to } => write!(f, "relax {}->{}", from, to),
            TraceStep::Settled(id) => write!(f, "settled {}", id),
            TraceStep::NegativeCycle => write!(f, "negative cycle detected"),
        }
    }
}

impl Serialize for TraceStep {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One immutable record of a single algorithmic event plus a full distance
/// snapshot at that moment.
#[derive(Debug, Clone, Serialize)]
pub struct TraceEntry<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub step: TraceStep,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge: Option<(String, String)>,
    pub dist: DistanceMap<W>,
}

/// Owns the working distance and predecessor maps for a single engine
/// invocation and produces immutable snapshots for tracing.
#[derive(Debug, Clone)]
pub struct DistanceTracker<W>
where
    W: Float + Zero + Debug + Copy,
{
    dist: DistanceMap<W>,
    pred: PredecessorMap,
}

impl<W> DistanceTracker<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a tracker with every listed node at infinity and no
    /// predecessors.
    pub fn new<'a>(node_ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut dist = BTreeMap::new();
        let mut pred = BTreeMap::new();
        for id in node_ids {
            dist.insert(id.to_string(), W::infinity());
            pred.insert(id.to_string(), None);
        }
        DistanceTracker { dist, pred }
    }

    /// Sets the source distance to zero. The id must already be tracked.
    pub fn seed(&mut self, start: &str) {
        if let Some(d) = self.dist.get_mut(start) {
            *d = W::zero();
        }
    }

    /// Current distance for a node, infinity for unknown ids
    pub fn distance(&self, id: &str) -> W {
        self.dist.get(id).copied().unwrap_or_else(W::infinity)
    }

    /// Records an improving relaxation: a shorter distance and the
    /// predecessor that produced it.
    pub fn improve(&mut self, id: &str, distance: W, predecessor: &str) {
        self.dist.insert(id.to_string(), distance);
        self.pred.insert(id.to_string(), Some(predecessor.to_string()));
    }

    /// Predecessor on the current shortest path to a node
    pub fn predecessor(&self, id: &str) -> Option<&str> {
        self.pred.get(id).and_then(|p| p.as_deref())
    }

    /// Full independent copy of the current distance map
    pub fn snapshot(&self) -> DistanceMap<W> {
        self.dist.clone()
    }

    /// Consumes the tracker, yielding the final distance and predecessor maps
    pub fn into_parts(self) -> (DistanceMap<W>, PredecessorMap) {
        (self.dist, self.pred)
    }
}

/// Append-only, time-ordered log of trace entries. Entries are never
/// reordered or deduplicated.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder<W>
where
    W: Float + Zero + Debug + Copy,
{
    entries: Vec<TraceEntry<W>>,
}

impl<W> TraceRecorder<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new() -> Self {
        TraceRecorder {
            entries: Vec::new(),
        }
    }

    /// Appends an entry for `step`, snapshotting the tracker at this
    /// instant. The edge field is derived from the step so relax entries
    /// always carry the pair they relaxed.
    pub fn record(&mut self, step: TraceStep, tracker: &DistanceTracker<W>) {
        let edge = match &step {
            TraceStep::Relax { from, to } => Some((from.clone(), to.clone())),
            _ => None,
        };
        self.entries.push(TraceEntry {
            step,
            edge,
            dist: tracker.snapshot(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TraceEntry<W>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TraceEntry<W>> {
        self.entries
    }
}

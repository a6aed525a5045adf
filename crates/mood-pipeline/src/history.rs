use mood_infer::Emotion;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Append-only log of classified labels, one per processed frame.
///
/// Single writer, any number of concurrent readers.
#[derive(Debug, Default)]
pub struct EmotionHistory {
    log: RwLock<Vec<Emotion>>,
}

impl EmotionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, emotion: Emotion) {
        self.log
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(emotion);
    }

    /// Count every label recorded so far.
    pub fn snapshot(&self) -> Snapshot {
        let log = self.log.read().unwrap_or_else(|e| e.into_inner());
        Snapshot::from_labels(log.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.log.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the full log in arrival order.
    pub fn entries(&self) -> Vec<Emotion> {
        self.log.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// Label frequencies at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    counts: BTreeMap<Emotion, usize>,
    total: usize,
}

impl Snapshot {
    pub fn from_labels(labels: impl IntoIterator<Item = Emotion>) -> Self {
        let mut snapshot = Self::default();
        for label in labels {
            *snapshot.counts.entry(label).or_insert(0) += 1;
            snapshot.total += 1;
        }
        snapshot
    }

    pub fn count(&self, emotion: Emotion) -> usize {
        self.counts.get(&emotion).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Non-zero counts in `Emotion` declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, usize)> + '_ {
        self.counts.iter().map(|(&e, &n)| (e, n))
    }
}

use sort::SortAlgorithm;
use tokio::sync::mpsc;

/// Positions most recently compared or written, at most two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    One(usize),
    Pair(usize, usize),
}

impl Highlight {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Self::None)
    }

    pub fn indices(self) -> impl Iterator<Item = usize> {
        let (first, second) = match self {
            Self::None => (None, None),
            Self::One(a) => (Some(a), None),
            Self::Pair(a, b) => (Some(a), Some(b)),
        };
        first.into_iter().chain(second)
    }
}

/// Snapshot of one driver's sequence plus the positions it just touched.
///
/// `values` is an owned copy; the driver keeps mutating its own buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub values: Vec<i32>,
    pub highlight: Highlight,
}

impl ProgressEvent {
    pub fn snapshot(values: &[i32], highlight: Highlight) -> Self {
        Self {
            values: values.to_vec(),
            highlight,
        }
    }

    /// The last event of a driver that ran to completion.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.highlight.is_empty()
    }
}

/// Receives the progress of a single algorithm, in emission order.
///
/// Called from inside the driver between steps, so implementations must
/// return promptly.
pub trait ProgressObserver {
    fn on_progress(&mut self, event: ProgressEvent);
}

impl<F> ProgressObserver for F
where
    F: FnMut(ProgressEvent),
{
    fn on_progress(&mut self, event: ProgressEvent) {
        self(event)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneUpdate {
    pub algorithm: SortAlgorithm,
    pub event: ProgressEvent,
}

/// Forwards events, tagged with their algorithm, to a UI loop.
///
/// The channel is unbounded so a slow consumer never stalls a driver.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    algorithm: SortAlgorithm,
    tx: mpsc::UnboundedSender<LaneUpdate>,
}

impl ChannelObserver {
    pub fn new(algorithm: SortAlgorithm, tx: mpsc::UnboundedSender<LaneUpdate>) -> Self {
        Self { algorithm, tx }
    }
}

impl ProgressObserver for ChannelObserver {
    fn on_progress(&mut self, event: ProgressEvent) {
        // A closed receiver means the UI went away; the race still finishes.
        let _ = self.tx.send(LaneUpdate {
            algorithm: self.algorithm,
            event,
        });
    }
}

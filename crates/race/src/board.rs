use std::collections::BTreeMap;

use sort::{SortAlgorithm, all_algorithms};

use crate::progress::{Highlight, LaneUpdate, ProgressEvent};

/// What a UI shows for one algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneView {
    pub values: Vec<i32>,
    pub highlight: Highlight,
    pub frames: u64,
    pub finished: bool,
}

/// Latest state of every lane, keyed by algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceBoard {
    lanes: BTreeMap<SortAlgorithm, LaneView>,
}

impl RaceBoard {
    pub fn new(input: &[i32]) -> Self {
        let mut board = Self {
            lanes: BTreeMap::new(),
        };
        board.reset(input);
        board
    }

    /// Puts every lane back to an unsorted copy of `input`.
    pub fn reset(&mut self, input: &[i32]) {
        self.lanes = all_algorithms()
            .iter()
            .map(|&algorithm| {
                let view = LaneView {
                    values: input.to_vec(),
                    ..LaneView::default()
                };
                (algorithm, view)
            })
            .collect();
    }

    pub fn lane(&self, algorithm: SortAlgorithm) -> Option<&LaneView> {
        self.lanes.get(&algorithm)
    }

    pub fn lanes(&self) -> impl Iterator<Item = (SortAlgorithm, &LaneView)> {
        self.lanes.iter().map(|(&algorithm, view)| (algorithm, view))
    }

    pub fn apply(&mut self, update: LaneUpdate) {
        self.record(update.algorithm, update.event);
    }

    /// Replaces the lane's values and highlight with `event`.
    pub fn record(&mut self, algorithm: SortAlgorithm, event: ProgressEvent) {
        let lane = self.lanes.entry(algorithm).or_default();
        lane.finished = event.is_final();
        lane.values = event.values;
        lane.highlight = event.highlight;
        lane.frames += 1;
    }

    pub fn all_finished(&self) -> bool {
        self.lanes.values().all(|lane| lane.finished)
    }
}

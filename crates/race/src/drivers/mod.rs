//! Animated counterparts of the `sort` kernels.
//!
//! Each driver follows its kernel's control flow exactly and calls
//! [`Pacer::step`] at every comparison or write. The pacer checks the race's
//! cancellation token, counts the operation against the frame throttle, and
//! when a frame is due emits a snapshot and waits out the frame.

mod bubble;
mod insertion;
mod quick;

use sort::SortAlgorithm;
use tokio_util::sync::CancellationToken;

use crate::cancel::{self, Cancelled};
use crate::progress::{Highlight, ProgressEvent, ProgressObserver};
use crate::speed::SpeedDial;
use crate::throttle::FrameThrottle;

pub struct Pacer<O> {
    throttle: FrameThrottle,
    dial: SpeedDial,
    cancel: CancellationToken,
    observer: O,
    frames: u64,
}

impl<O: ProgressObserver> Pacer<O> {
    pub fn new(dial: SpeedDial, cancel: CancellationToken, observer: O) -> Self {
        Self {
            throttle: FrameThrottle::new(dial.get()),
            dial,
            cancel,
            observer,
            frames: 0,
        }
    }

    /// Progress events emitted so far, the final one included.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub async fn step(&mut self, values: &[i32], highlight: Highlight) -> Result<(), Cancelled> {
        cancel::check(&self.cancel)?;
        self.throttle.follow(&self.dial);
        if self.throttle.tick() {
            self.emit(values, highlight);
            tracing::trace!(frame = self.frames, ?highlight, "frame");
            self.throttle.wait_frame(&self.cancel).await?;
        }
        Ok(())
    }

    fn finish(&mut self, values: &[i32]) -> Result<(), Cancelled> {
        cancel::check(&self.cancel)?;
        self.emit(values, Highlight::None);
        Ok(())
    }

    fn emit(&mut self, values: &[i32], highlight: Highlight) {
        self.frames += 1;
        self.observer.on_progress(ProgressEvent::snapshot(values, highlight));
    }
}

/// Sorts `values` with `algorithm`, reporting through `pacer`.
///
/// On completion one last event with an empty highlight is emitted. A
/// cancelled driver returns `Err(Cancelled)` with `values` partially sorted
/// and emits nothing further.
pub async fn drive<O: ProgressObserver>(
    algorithm: SortAlgorithm,
    values: &mut [i32],
    pacer: &mut Pacer<O>,
) -> Result<(), Cancelled> {
    cancel::check(&pacer.cancel)?;
    match algorithm {
        SortAlgorithm::BubbleSort => bubble::sort(values, pacer).await?,
        SortAlgorithm::InsertionSort => insertion::sort(values, pacer).await?,
        SortAlgorithm::QuickSort => quick::sort(values, pacer).await?,
    }
    pacer.finish(values)
}

use crate::cancel::Cancelled;
use crate::progress::{Highlight, ProgressObserver};

use super::Pacer;

pub(super) async fn sort<O: ProgressObserver>(
    values: &mut [i32],
    pacer: &mut Pacer<O>,
) -> Result<(), Cancelled> {
    let mut pending = values.len();
    loop {
        let mut swapped = false;
        for i in 0..pending.saturating_sub(1) {
            if values[i] > values[i + 1] {
                values.swap(i, i + 1);
                swapped = true;
            }
            pacer.step(values, Highlight::Pair(i, i + 1)).await?;
        }
        pending = pending.saturating_sub(1);
        if !swapped {
            return Ok(());
        }
    }
}

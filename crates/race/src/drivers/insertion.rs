use crate::cancel::Cancelled;
use crate::progress::{Highlight, ProgressObserver};

use super::Pacer;

pub(super) async fn sort<O: ProgressObserver>(
    values: &mut [i32],
    pacer: &mut Pacer<O>,
) -> Result<(), Cancelled> {
    for i in 1..values.len() {
        let held = values[i];
        let mut j = i;
        while j > 0 && values[j - 1] > held {
            values[j] = values[j - 1];
            j -= 1;
            pacer.step(values, Highlight::Pair(j, i)).await?;
        }
        values[j] = held;
        pacer.step(values, Highlight::One(j)).await?;
    }
    Ok(())
}

pub fn sort(data: &mut [i32]) {
    let mut pending = data.len();
    loop {
        let mut swapped = false;
        for i in 0..pending.saturating_sub(1) {
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
                swapped = true;
            }
        }
        // The largest remaining value has bubbled into `pending - 1`.
        pending = pending.saturating_sub(1);
        if !swapped {
            return;
        }
    }
}

pub fn sort(data: &mut [i32]) {
    for i in 1..data.len() {
        let held = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > held {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = held;
    }
}

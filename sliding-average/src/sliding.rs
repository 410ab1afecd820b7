use crate::window::WindowSize;

/// Calculates the moving average with a running window sum.
///
/// The first window is summed once, then every step adds the value entering the window and
/// subtracts the value leaving it. Runs in O(n) time.
///
/// Note that a non-finite value stays in the running sum after it leaves the window, so
/// every later average is non-finite too.
pub fn calculate(data: &[f64], window: WindowSize) -> Vec<f64> {
    let size = window.get();
    if data.len() < size {
        return Vec::new();
    }

    let divisor = window.as_f64();
    let mut averages = Vec::with_capacity(window.output_len(data.len()));

    let mut sum = data[..size].iter().fold(0.0, |sum, value| sum + value);
    averages.push(sum / divisor);

    for (leaving, entering) in data.iter().zip(&data[size..]) {
        sum = sum - leaving + entering;
        averages.push(sum / divisor);
    }
    averages
}

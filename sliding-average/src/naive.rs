use crate::window::WindowSize;

/// Calculates the moving average by re-summing every window from scratch.
///
/// Each window is summed backwards from its last element. Runs in O(n·k) time and returns
/// an empty `Vec` when `data` is shorter than the window.
pub fn calculate(data: &[f64], window: WindowSize) -> Vec<f64> {
    let size = window.get();
    let divisor = window.as_f64();

    let mut averages = Vec::with_capacity(window.output_len(data.len()));
    for end in (size - 1)..data.len() {
        let sum = (0..size).fold(0.0, |sum, offset| sum + data[end - offset]);
        averages.push(sum / divisor);
    }
    averages
}

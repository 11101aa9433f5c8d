/// Running average of the verdicts: element `i` is the mean of `outcomes[..=i]`.
pub fn running_mean(outcomes: &[bool]) -> Vec<f64> {
    let mut correct = 0usize;
    outcomes
        .iter()
        .enumerate()
        .map(|(i, &o)| {
            correct += o as usize;
            correct as f64 / (i + 1) as f64
        })
        .collect()
}

/// Up to `n` evenly spaced `(trial_number, running_mean)` points, 1-based, always
/// ending on the last trial.
pub fn checkpoints(running: &[f64], n: usize) -> Vec<(usize, f64)> {
    if running.is_empty() || n == 0 {
        return Vec::new();
    }
    let len = running.len();
    let n = n.min(len);

    let mut points: Vec<(usize, f64)> = (1..=n)
        .map(|k| {
            let trial = (k * len).div_ceil(n);
            (trial, running[trial - 1])
        })
        .collect();
    points.dedup_by_key(|p| p.0);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round3(v: f64) -> f64 {
        (v * 1000.0).round() / 1000.0
    }

    #[test]
    fn running_mean_of_literal_sequence() {
        let running: Vec<f64> = running_mean(&[true, false, true, true])
            .into_iter()
            .map(round3)
            .collect();
        assert_eq!(running, vec![1.0, 0.5, 0.667, 0.75]);
    }

    #[test]
    fn running_mean_of_empty_is_empty() {
        assert!(running_mean(&[]).is_empty());
    }

    #[test]
    fn checkpoints_end_on_last_trial() {
        let running = running_mean(&[true, false, true, true, false, false, true, true, true, false]);
        let points = checkpoints(&running, 4);
        assert_eq!(points.iter().map(|p| p.0).collect::<Vec<_>>(), vec![3, 5, 8, 10]);
        assert_eq!(points.last().unwrap().1, 0.6);
    }

    #[test]
    fn checkpoints_cap_at_sequence_length() {
        let running = running_mean(&[true, false, true]);
        let points = checkpoints(&running, 10);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], (1, 1.0));
        assert_eq!(points[1], (2, 0.5));
        assert!(checkpoints(&running, 0).is_empty());
    }
}

use crate::momentum::normalize;

const LEVELS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// One block character per value, scaled against the series maximum.
pub fn sparkline(values: &[f64]) -> String {
    normalize(values)
        .into_iter()
        .map(|ratio| {
            let idx = ((ratio * (LEVELS.len() - 1) as f64).round() as usize).min(LEVELS.len() - 1);
            LEVELS[idx]
        })
        .collect()
}

/// Fixed-width bar (`width` cells) for `value` relative to `max`.
pub fn intensity_bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }

    let ratio = value as f64 / max as f64;
    let filled = ((ratio * width as f64).round() as usize).min(width);
    "█".repeat(filled) + &"░".repeat(width - filled)
}

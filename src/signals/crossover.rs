//! Pairwise moving-average crossovers at the latest position

use crate::models::indicators::MovingAverageTable;
use crate::models::signal::{CrossoverSignal, Position};

/// Compare every pair of lines (shorter, longer) at the last position.
///
/// Pairs come out ordered by the shorter window, then the longer one.
pub fn crossover_matrix(table: &MovingAverageTable) -> Vec<CrossoverSignal> {
    let mut windows = table.windows();
    windows.sort_unstable();
    windows.dedup();

    let mut signals = Vec::with_capacity(windows.len() * windows.len().saturating_sub(1) / 2);
    for (i, &shorter) in windows.iter().enumerate() {
        for &longer in &windows[i + 1..] {
            let shorter_ma = table.latest(shorter);
            let longer_ma = table.latest(longer);
            signals.push(CrossoverSignal {
                shorter,
                longer,
                shorter_ma,
                longer_ma,
                position: Position::classify(shorter_ma, longer_ma),
            });
        }
    }
    signals
}

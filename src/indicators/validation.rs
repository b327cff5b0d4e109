//! Window-set validation

use serde::Serialize;

use super::IndicatorError;

/// A validated, ascending set of distinct positive window lengths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WindowSet(Vec<u32>);

impl WindowSet {
    /// Validate raw window lengths. Rejects an empty set, lengths <= 0 and
    /// repeated lengths; nothing is computed from a rejected set.
    pub fn new(windows: &[i64]) -> Result<Self, IndicatorError> {
        if windows.is_empty() {
            return Err(IndicatorError::EmptyWindowSet);
        }

        let mut validated = Vec::with_capacity(windows.len());
        for &window in windows {
            if window <= 0 {
                return Err(IndicatorError::NonPositiveWindow(window));
            }
            let window =
                u32::try_from(window).map_err(|_| IndicatorError::WindowTooLarge(window))?;
            if validated.contains(&window) {
                return Err(IndicatorError::DuplicateWindow(window));
            }
            validated.push(window);
        }

        validated.sort_unstable();
        Ok(Self(validated))
    }

    /// Build from lengths already known to be positive and distinct.
    pub(crate) fn from_valid(mut windows: Vec<u32>) -> Self {
        windows.sort_unstable();
        windows.dedup();
        Self(windows)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<&[i64]> for WindowSet {
    type Error = IndicatorError;

    fn try_from(windows: &[i64]) -> Result<Self, Self::Error> {
        Self::new(windows)
    }
}

//! Indicator configuration and input-shape errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("at least one moving-average window is required")]
    EmptyWindowSet,

    #[error("window length must be positive, got {0}")]
    NonPositiveWindow(i64),

    #[error("window length {0} is too large")]
    WindowTooLarge(i64),

    #[error("window length {0} is requested more than once")]
    DuplicateWindow(u32),

    #[error("moving-average table has {table} positions but the series has {series}")]
    ShapeMismatch { series: usize, table: usize },
}

use dtn_core::Rect;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid world bounds {max_x} x {max_y}: both sides must be positive")]
    InvalidWorld { max_x: f64, max_y: f64 },

    #[error("invalid speed range [{min}, {max}]")]
    InvalidSpeedRange { min: f64, max: f64 },

    #[error("movement area {area} extends outside the world bounds")]
    AreaOutOfBounds { area: Rect },

    #[error("community size {size} does not fit the {max_x} x {max_y} world")]
    InvalidCommunitySize { size: f64, max_x: f64, max_y: f64 },

    #[error("invalid probability range [{lo}, {hi}]: must satisfy 0 <= lo <= hi <= 1")]
    InvalidProbabilityRange { lo: f64, hi: f64 },

    #[error("invalid expected epoch length {0}: must be positive")]
    InvalidEpochLength(f64),

    #[error("epoch rate is zero: mean speed must be positive")]
    ZeroEpochRate,
}

pub type ModelResult<T> = Result<T, ModelError>;

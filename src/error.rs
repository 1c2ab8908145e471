//! Error taxonomy for projection runs and scenario I/O

use thiserror::Error;

/// Failures surfaced to callers of the projection engine
///
/// Formula-level edge cases (pre-inception years, zero rates) are not errors;
/// only caller misuse and I/O end up here.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("invalid projection range: end year {end_year} precedes start year {start_year}")]
    InvalidRange { start_year: i32, end_year: i32 },

    #[error("inflation rate must be greater than -100%, got {0}")]
    InvalidInflationRate(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Reject a horizon whose end precedes its start
pub fn check_range(start_year: i32, end_year: i32) -> Result<()> {
    if end_year < start_year {
        return Err(ProjectionError::InvalidRange { start_year, end_year });
    }
    Ok(())
}

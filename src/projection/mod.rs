//! Projection orchestration over a base model and its life events

mod model;
mod output;
pub mod real_terms;

pub use model::{FinancialModel, Horizon};
pub use output::{CombinedRow, ModelOutput, ProjectionSummary};

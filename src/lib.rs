//! Household Projection - Deterministic net worth and cash flow projection engine
//!
//! This library provides:
//! - Value formulas for assets, liabilities, incomes and expenses
//! - Balance sheet and cash flow aggregation into yearly records
//! - Life events (home purchase, child birth, inheritance) that derive new instruments
//! - A financial model that applies events in year order and projects a horizon
//! - Real-terms (inflation-adjusted) figures, scenario files and CSV export

pub mod error;
pub mod instruments;
pub mod statements;
pub mod events;
pub mod projection;
pub mod scenario;
pub mod export;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use instruments::{Asset, Expense, Income, Liability};
pub use statements::{BalanceSheet, BalanceSheetRow, CashFlow, CashFlowRow};
pub use events::LifeEvent;
pub use projection::{FinancialModel, Horizon, ModelOutput, ProjectionSummary};
pub use scenario::{Scenario, ScenarioRunner};

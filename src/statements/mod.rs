//! Instrument collections and their yearly projections

mod balance_sheet;
mod cash_flow;
mod rows;

pub use balance_sheet::BalanceSheet;
pub use cash_flow::CashFlow;
pub use rows::{BalanceSheetRow, CashFlowRow};

//! Financial instruments and their per-year value formulas

pub mod growth;
mod asset;
mod liability;
mod flow;

pub use asset::{Asset, LifestyleAsset, ManagedFund, Property, Savings, Shares, Superannuation};
pub use liability::{HomeLoan, Liability, OtherLiability};
pub use flow::{Expense, Income};

//! Inflation adjustment of nominal projections into base-year money

use crate::error::{ProjectionError, Result};
use crate::statements::{BalanceSheetRow, CashFlowRow};

/// Cumulative price level of `year` relative to `base_year`: `(1 + inflation)^(year - base_year)`
///
/// Fails for an inflation rate at or below -100%, where the price level is undefined.
pub fn deflator(inflation_rate: f64, year: i32, base_year: i32) -> Result<f64> {
    let rate_base = 1.0 + inflation_rate;
    if rate_base.is_nan() || rate_base <= 0.0 {
        return Err(ProjectionError::InvalidInflationRate(inflation_rate));
    }
    Ok(rate_base.powi(year - base_year))
}

/// Attach `_real` figures to every balance sheet row
pub fn deflate_balance_sheet(rows: &mut [BalanceSheetRow], inflation_rate: f64, base_year: i32) -> Result<()> {
    for row in rows.iter_mut() {
        row.deflate(deflator(inflation_rate, row.year, base_year)?);
    }
    Ok(())
}

/// Attach `_real` figures to every cash flow row
pub fn deflate_cash_flow(rows: &mut [CashFlowRow], inflation_rate: f64, base_year: i32) -> Result<()> {
    for row in rows.iter_mut() {
        row.deflate(deflator(inflation_rate, row.year, base_year)?);
    }
    Ok(())
}

//! Balance sheet: assets and liabilities aggregated per year

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{check_range, Result};
use crate::instruments::{Asset, Liability};
use super::rows::BalanceSheetRow;

/// Ordered collection of assets and liabilities
///
/// Order only affects iteration; totals are plain sums.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub liabilities: Vec<Liability>,
}

impl BalanceSheet {
    pub fn new(assets: Vec<Asset>, liabilities: Vec<Liability>) -> Self {
        Self { assets, liabilities }
    }

    /// Append an asset, returning the updated sheet
    pub fn with_asset(mut self, asset: impl Into<Asset>) -> Self {
        self.assets.push(asset.into());
        self
    }

    /// Append a liability, returning the updated sheet
    pub fn with_liability(mut self, liability: impl Into<Liability>) -> Self {
        self.liabilities.push(liability.into());
        self
    }

    pub fn total_assets(&self, year: i32) -> f64 {
        self.assets.iter().map(|a| a.predict(year)).sum()
    }

    pub fn total_liabilities(&self, year: i32) -> f64 {
        self.liabilities.iter().map(|l| l.predict(year)).sum()
    }

    pub fn net_worth(&self, year: i32) -> f64 {
        self.total_assets(year) - self.total_liabilities(year)
    }

    /// One row per year in `[start_year, end_year]`, each computed independently
    pub fn project(&self, start_year: i32, end_year: i32) -> Result<Vec<BalanceSheetRow>> {
        check_range(start_year, end_year)?;
        debug!(
            "Projecting balance sheet ({} assets, {} liabilities) over {}-{}",
            self.assets.len(),
            self.liabilities.len(),
            start_year,
            end_year
        );

        Ok((start_year..=end_year)
            .map(|year| BalanceSheetRow::new(year, self.total_assets(year), self.total_liabilities(year)))
            .collect())
    }
}

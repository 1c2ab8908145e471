//! Year-keyed output records consumed by renderers and exporters

use serde::{Deserialize, Serialize};

/// Balance sheet totals for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetRow {
    pub year: i32,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,

    // Deflated to base-year money; present only after a real-terms pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_assets_real: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_liabilities_real: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_worth_real: Option<f64>,
}

impl BalanceSheetRow {
    pub fn new(year: i32, total_assets: f64, total_liabilities: f64) -> Self {
        Self {
            year,
            total_assets,
            total_liabilities,
            net_worth: total_assets - total_liabilities,
            total_assets_real: None,
            total_liabilities_real: None,
            net_worth_real: None,
        }
    }

    /// Fill the `_real` fields by dividing each nominal figure by `deflator`
    pub fn deflate(&mut self, deflator: f64) {
        self.total_assets_real = Some(self.total_assets / deflator);
        self.total_liabilities_real = Some(self.total_liabilities / deflator);
        self.net_worth_real = Some(self.net_worth / deflator);
    }
}

/// Cash flow totals for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowRow {
    pub year: i32,
    pub inflow: f64,
    pub outflow: f64,
    pub net_flow: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflow_real: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outflow_real: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_flow_real: Option<f64>,
}

impl CashFlowRow {
    pub fn new(year: i32, inflow: f64, outflow: f64) -> Self {
        Self {
            year,
            inflow,
            outflow,
            net_flow: inflow - outflow,
            inflow_real: None,
            outflow_real: None,
            net_flow_real: None,
        }
    }

    pub fn deflate(&mut self, deflator: f64) {
        self.inflow_real = Some(self.inflow / deflator);
        self.outflow_real = Some(self.outflow / deflator);
        self.net_flow_real = Some(self.net_flow / deflator);
    }
}

//! Projection output structures

use serde::{Deserialize, Serialize};

use crate::events::LifeEvent;
use crate::statements::{BalanceSheetRow, CashFlowRow};

/// Balance sheet and cash flow figures for one year, joined on `year`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRow {
    pub year: i32,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub inflow: f64,
    pub outflow: f64,
    pub net_flow: f64,
    pub net_worth_real: Option<f64>,
    pub net_flow_real: Option<f64>,
}

/// Complete result of one model run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput {
    /// Yearly balance sheet rows, ascending, no gaps
    pub balance_sheet: Vec<BalanceSheetRow>,

    /// Yearly cash flow rows over the same years
    pub cash_flow: Vec<CashFlowRow>,

    /// Events triggered inside the horizon, in application order
    pub events: Vec<LifeEvent>,
}

impl ModelOutput {
    /// Rows for a renderer that plots both statements on one axis
    pub fn combined_rows(&self) -> Vec<CombinedRow> {
        self.balance_sheet
            .iter()
            .zip(&self.cash_flow)
            .map(|(bs, cf)| CombinedRow {
                year: bs.year,
                total_assets: bs.total_assets,
                total_liabilities: bs.total_liabilities,
                net_worth: bs.net_worth,
                inflow: cf.inflow,
                outflow: cf.outflow,
                net_flow: cf.net_flow,
                net_worth_real: bs.net_worth_real,
                net_flow_real: cf.net_flow_real,
            })
            .collect()
    }

    /// Years at which an event marker should be drawn
    pub fn event_years(&self) -> Vec<(i32, &str)> {
        self.events.iter().map(|e| (e.start_year(), e.name())).collect()
    }

    pub fn summary(&self) -> ProjectionSummary {
        let final_net_worth = self.balance_sheet.last().map(|r| r.net_worth).unwrap_or(0.0);

        let (peak_net_worth_year, peak_net_worth) = self
            .balance_sheet
            .iter()
            .fold(None, |best: Option<(i32, f64)>, row| match best {
                Some((_, nw)) if nw >= row.net_worth => best,
                _ => Some((row.year, row.net_worth)),
            })
            .unwrap_or((0, 0.0));

        let cumulative_net_flow: f64 = self.cash_flow.iter().map(|r| r.net_flow).sum();
        let first_deficit_year = self.cash_flow.iter().find(|r| r.net_flow < 0.0).map(|r| r.year);

        ProjectionSummary {
            total_years: self.balance_sheet.len() as u32,
            final_net_worth,
            peak_net_worth,
            peak_net_worth_year,
            cumulative_net_flow,
            first_deficit_year,
            event_count: self.events.len() as u32,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub final_net_worth: f64,
    pub peak_net_worth: f64,
    pub peak_net_worth_year: i32,
    pub cumulative_net_flow: f64,
    /// First year outflow exceeds inflow, if any
    pub first_deficit_year: Option<i32>,
    pub event_count: u32,
}

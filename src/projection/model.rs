//! Financial model: base state plus life events, projected over a horizon

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{check_range, Result};
use crate::events::LifeEvent;
use crate::statements::{BalanceSheet, CashFlow};
use super::output::ModelOutput;
use super::real_terms::{deflate_balance_sheet, deflate_cash_flow};

/// Inclusive range of calendar years to project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    pub start_year: i32,
    pub end_year: i32,
}

impl Horizon {
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self { start_year, end_year }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }

    pub fn years(&self) -> u32 {
        (self.end_year - self.start_year + 1).max(0) as u32
    }
}

/// Household model: immutable base state and the events that reshape it
///
/// Every run works on its own copy of the base state, so repeated runs with
/// the same inputs give identical results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialModel {
    pub balance_sheet: BalanceSheet,
    pub cash_flow: CashFlow,
    #[serde(default)]
    pub events: Vec<LifeEvent>,
    /// Annual inflation used to attach real-terms figures
    #[serde(default)]
    pub inflation_rate: Option<f64>,
}

impl FinancialModel {
    pub fn new(balance_sheet: BalanceSheet, cash_flow: CashFlow, events: Vec<LifeEvent>) -> Self {
        Self {
            balance_sheet,
            cash_flow,
            events,
            inflation_rate: None,
        }
    }

    pub fn with_inflation(mut self, inflation_rate: f64) -> Self {
        self.inflation_rate = Some(inflation_rate);
        self
    }

    pub fn set_inflation(&mut self, inflation_rate: f64) {
        self.inflation_rate = Some(inflation_rate);
    }

    pub fn add_event(&mut self, event: impl Into<LifeEvent>) {
        self.events.push(event.into());
    }

    /// Base state with every event up to `end_year` applied in ascending year order
    ///
    /// Returns the working balance sheet and cash flow plus the events applied.
    /// Events after `end_year` cannot affect the horizon and are skipped.
    pub fn working_state(&self, end_year: i32) -> (BalanceSheet, CashFlow, Vec<LifeEvent>) {
        let mut ordered: Vec<&LifeEvent> = self.events.iter().collect();
        // Stable: same-year events keep their input order
        ordered.sort_by_key(|e| e.start_year());

        let mut balance_sheet = self.balance_sheet.clone();
        let mut cash_flow = self.cash_flow.clone();
        let mut applied = Vec::new();

        for event in ordered {
            if event.start_year() > end_year {
                debug!("Skipping event '{}' ({}): after horizon end {}", event.name(), event.start_year(), end_year);
                continue;
            }
            debug!("Applying event '{}' at {}", event.name(), event.start_year());
            (balance_sheet, cash_flow) = event.apply(balance_sheet, cash_flow);
            applied.push(event.clone());
        }

        (balance_sheet, cash_flow, applied)
    }

    /// Project balance sheet and cash flow for every year in `[start_year, end_year]`
    pub fn model(&self, start_year: i32, end_year: i32) -> Result<ModelOutput> {
        check_range(start_year, end_year)?;

        let (balance_sheet, cash_flow, applied) = self.working_state(end_year);

        let mut balance_rows = balance_sheet.project(start_year, end_year)?;
        let mut cash_rows = cash_flow.project(start_year, end_year)?;

        if let Some(rate) = self.inflation_rate {
            deflate_balance_sheet(&mut balance_rows, rate, start_year)?;
            deflate_cash_flow(&mut cash_rows, rate, start_year)?;
        }

        let horizon = Horizon::new(start_year, end_year);
        let (events, earlier): (Vec<LifeEvent>, Vec<LifeEvent>) =
            applied.into_iter().partition(|e| horizon.contains(e.start_year()));
        if !earlier.is_empty() {
            warn!(
                "{} event(s) before {} were applied to the starting state but are not annotated",
                earlier.len(),
                start_year
            );
        }

        debug!(
            "Model run {}-{}: {} rows, {} events in range",
            start_year,
            end_year,
            balance_rows.len(),
            events.len()
        );

        Ok(ModelOutput {
            balance_sheet: balance_rows,
            cash_flow: cash_rows,
            events,
        })
    }

    pub fn run(&self, horizon: Horizon) -> Result<ModelOutput> {
        self.model(horizon.start_year, horizon.end_year)
    }
}

//! Receiving an inheritance: a new savings balance and a one-year inflow

use serde::{Deserialize, Serialize};

use crate::instruments::{Income, Savings};
use crate::statements::{BalanceSheet, CashFlow};

fn default_savings_rate() -> f64 {
    0.04
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inheritance {
    pub name: String,
    pub start_year: i32,
    pub amount: f64,
    #[serde(default = "default_savings_rate")]
    pub savings_interest_rate: f64,
    /// Also record the amount as income in the year received
    #[serde(default = "default_true")]
    pub add_to_cash_flow: bool,
}

impl Inheritance {
    pub fn new(name: impl Into<String>, start_year: i32, amount: f64) -> Self {
        Self {
            name: name.into(),
            start_year,
            amount,
            savings_interest_rate: default_savings_rate(),
            add_to_cash_flow: true,
        }
    }

    pub fn with_interest_rate(mut self, rate: f64) -> Self {
        self.savings_interest_rate = rate;
        self
    }

    pub fn without_cash_flow(mut self) -> Self {
        self.add_to_cash_flow = false;
        self
    }

    pub fn apply(&self, balance_sheet: BalanceSheet, cash_flow: CashFlow) -> (BalanceSheet, CashFlow) {
        let savings = Savings::new(self.amount, self.start_year)
            .with_interest_rate(self.savings_interest_rate);
        let balance_sheet = balance_sheet.with_asset(savings);

        let cash_flow = if self.add_to_cash_flow {
            cash_flow.with_income(
                Income::new("Inheritance", self.amount, 0.0, self.start_year).until(self.start_year),
            )
        } else {
            cash_flow
        };

        (balance_sheet, cash_flow)
    }
}

//! Buying a home: property asset, deposit, mortgage and upkeep

use serde::{Deserialize, Serialize};

use crate::instruments::{Expense, HomeLoan, Property};
use crate::statements::{BalanceSheet, CashFlow};

fn default_maintenance_growth() -> f64 {
    0.02
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomePurchase {
    pub name: String,
    pub start_year: i32,
    pub purchase_price: f64,
    pub appreciation_rate: f64,
    pub mortgage_rate: f64,
    pub mortgage_term_years: u32,
    #[serde(default)]
    pub deposit: f64,
    /// Annual upkeep in the purchase year, indexed by `maintenance_growth`
    #[serde(default)]
    pub maintenance_cost: f64,
    #[serde(default = "default_maintenance_growth")]
    pub maintenance_growth: f64,
}

impl HomePurchase {
    pub fn new(
        name: impl Into<String>,
        start_year: i32,
        purchase_price: f64,
        appreciation_rate: f64,
        mortgage_rate: f64,
        mortgage_term_years: u32,
    ) -> Self {
        Self {
            name: name.into(),
            start_year,
            purchase_price,
            appreciation_rate,
            mortgage_rate,
            mortgage_term_years,
            deposit: 0.0,
            maintenance_cost: 0.0,
            maintenance_growth: default_maintenance_growth(),
        }
    }

    pub fn with_deposit(mut self, deposit: f64) -> Self {
        self.deposit = deposit;
        self
    }

    pub fn with_maintenance(mut self, cost: f64, growth: f64) -> Self {
        self.maintenance_cost = cost;
        self.maintenance_growth = growth;
        self
    }

    /// Amount borrowed after the deposit
    pub fn loan_amount(&self) -> f64 {
        (self.purchase_price - self.deposit).max(0.0)
    }

    pub fn apply(&self, balance_sheet: BalanceSheet, cash_flow: CashFlow) -> (BalanceSheet, CashFlow) {
        let year = self.start_year;
        let mut balance_sheet = balance_sheet.with_asset(Property::new(
            self.purchase_price,
            year,
            self.appreciation_rate,
        ));
        let mut cash_flow = cash_flow;

        if self.deposit > 0.0 {
            cash_flow = cash_flow.with_expense(Expense::one_off("Deposit", self.deposit, year));
        }

        let loan_amount = self.loan_amount();
        if loan_amount > 0.0 {
            let mortgage = HomeLoan::new(loan_amount, year, self.mortgage_rate, self.mortgage_term_years);
            // Flat repayment for exactly the loan term
            let last_payment_year = year + self.mortgage_term_years.saturating_sub(1) as i32;
            let repayment = Expense::new("Mortgage repayment", mortgage.annual_payment(), year)
                .with_rate(0.0)
                .until(last_payment_year);

            balance_sheet = balance_sheet.with_liability(mortgage);
            cash_flow = cash_flow.with_expense(repayment);
        }

        if self.maintenance_cost > 0.0 {
            cash_flow = cash_flow.with_expense(
                Expense::new("Property maintenance", self.maintenance_cost, year)
                    .with_rate(self.maintenance_growth),
            );
        }

        (balance_sheet, cash_flow)
    }
}

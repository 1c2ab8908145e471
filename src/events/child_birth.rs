//! Having a child: a growing expense for a fixed number of years

use serde::{Deserialize, Serialize};

use crate::instruments::Expense;
use crate::statements::{BalanceSheet, CashFlow};

fn default_expense_growth() -> f64 {
    0.03
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildBirth {
    pub name: String,
    pub start_year: i32,
    pub annual_cost: f64,
    pub years_of_expense: i32,
    #[serde(default = "default_expense_growth")]
    pub expense_growth: f64,
}

impl ChildBirth {
    pub fn new(name: impl Into<String>, start_year: i32, annual_cost: f64, years_of_expense: i32) -> Self {
        Self {
            name: name.into(),
            start_year,
            annual_cost,
            years_of_expense,
            expense_growth: default_expense_growth(),
        }
    }

    /// Last year the expense is paid, never before the birth year
    pub fn end_year(&self) -> i32 {
        self.start_year + (self.years_of_expense - 1).max(0)
    }

    pub fn apply(&self, balance_sheet: BalanceSheet, cash_flow: CashFlow) -> (BalanceSheet, CashFlow) {
        let expense = Expense::new("Child related expenses", self.annual_cost, self.start_year)
            .with_rate(self.expense_growth)
            .until(self.end_year());

        (balance_sheet, cash_flow.with_expense(expense))
    }
}

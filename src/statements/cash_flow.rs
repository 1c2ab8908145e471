//! Cash flow: incomes and expenses aggregated per year

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{check_range, Result};
use crate::instruments::{Expense, Income};
use super::rows::CashFlowRow;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    #[serde(default)]
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl CashFlow {
    pub fn new(incomes: Vec<Income>, expenses: Vec<Expense>) -> Self {
        Self { incomes, expenses }
    }

    pub fn with_income(mut self, income: Income) -> Self {
        self.incomes.push(income);
        self
    }

    pub fn with_expense(mut self, expense: Expense) -> Self {
        self.expenses.push(expense);
        self
    }

    pub fn inflow(&self, year: i32) -> f64 {
        self.incomes.iter().map(|i| i.predict(year)).sum()
    }

    pub fn outflow(&self, year: i32) -> f64 {
        self.expenses.iter().map(|e| e.predict(year)).sum()
    }

    pub fn net_flow(&self, year: i32) -> f64 {
        self.inflow(year) - self.outflow(year)
    }

    pub fn project(&self, start_year: i32, end_year: i32) -> Result<Vec<CashFlowRow>> {
        check_range(start_year, end_year)?;
        debug!(
            "Projecting cash flow ({} incomes, {} expenses) over {}-{}",
            self.incomes.len(),
            self.expenses.len(),
            start_year,
            end_year
        );

        Ok((start_year..=end_year)
            .map(|year| CashFlowRow::new(year, self.inflow(year), self.outflow(year)))
            .collect())
    }
}

//! Recurring income and expense streams

use serde::{Deserialize, Serialize};

use super::growth::{compound, elapsed_years};

fn default_expense_growth() -> f64 {
    0.02
}

/// Whether `year` falls inside the inclusive `[start_year, end_year]` window
fn is_active(start_year: i32, end_year: Option<i32>, year: i32) -> bool {
    year >= start_year && end_year.map_or(true, |end| year <= end)
}

fn stream_value(amount: f64, annual_rate: f64, start_year: i32, end_year: Option<i32>, year: i32) -> f64 {
    if !is_active(start_year, end_year, year) {
        return 0.0;
    }
    match elapsed_years(start_year, year) {
        Some(t) => compound(amount, annual_rate, t),
        None => 0.0,
    }
}

/// Money coming in each year (salary, rent, one-off windfalls)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub name: String,
    pub amount: f64,
    pub annual_rate: f64,
    pub start_year: i32,
    /// Last year the income is received; open-ended when absent
    #[serde(default)]
    pub end_year: Option<i32>,
}

impl Income {
    pub fn new(name: impl Into<String>, amount: f64, annual_rate: f64, start_year: i32) -> Self {
        Self {
            name: name.into(),
            amount,
            annual_rate,
            start_year,
            end_year: None,
        }
    }

    pub fn until(mut self, end_year: i32) -> Self {
        self.end_year = Some(end_year);
        self
    }

    pub fn is_active(&self, year: i32) -> bool {
        is_active(self.start_year, self.end_year, year)
    }

    pub fn predict(&self, target_year: i32) -> f64 {
        stream_value(self.amount, self.annual_rate, self.start_year, self.end_year, target_year)
    }
}

/// Money going out each year (living costs, repayments, one-off purchases)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    pub amount: f64,
    pub start_year: i32,
    #[serde(default = "default_expense_growth")]
    pub annual_rate: f64,
    /// Last year the expense is paid; open-ended when absent
    #[serde(default)]
    pub end_year: Option<i32>,
}

impl Expense {
    pub fn new(name: impl Into<String>, amount: f64, start_year: i32) -> Self {
        Self {
            name: name.into(),
            amount,
            start_year,
            annual_rate: default_expense_growth(),
            end_year: None,
        }
    }

    /// Single payment in `year`, not indexed
    pub fn one_off(name: impl Into<String>, amount: f64, year: i32) -> Self {
        Self::new(name, amount, year).with_rate(0.0).until(year)
    }

    pub fn with_rate(mut self, annual_rate: f64) -> Self {
        self.annual_rate = annual_rate;
        self
    }

    pub fn until(mut self, end_year: i32) -> Self {
        self.end_year = Some(end_year);
        self
    }

    pub fn is_active(&self, year: i32) -> bool {
        is_active(self.start_year, self.end_year, year)
    }

    pub fn predict(&self, target_year: i32) -> f64 {
        stream_value(self.amount, self.annual_rate, self.start_year, self.end_year, target_year)
    }
}

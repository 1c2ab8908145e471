//! Liability instruments: amortising home loans and generic interest-bearing debt

use serde::{Deserialize, Serialize};

use super::growth::{amortised_balance, amortising_payment, elapsed_years};

/// Amortising loan repaid by a level annual payment over a fixed term
///
/// The value for a year is the balance outstanding at the start of that year:
/// `initial_value` in `start_year`, and exactly zero from
/// `start_year + term_years` onward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeLoan {
    pub initial_value: f64,
    pub start_year: i32,
    pub interest_rate: f64,
    pub term_years: u32,
}

impl HomeLoan {
    pub fn new(initial_value: f64, start_year: i32, interest_rate: f64, term_years: u32) -> Self {
        Self { initial_value, start_year, interest_rate, term_years }
    }

    /// Level annual repayment; zero for a non-positive principal or a zero term
    pub fn annual_payment(&self) -> f64 {
        amortising_payment(self.initial_value, self.interest_rate, self.term_years)
    }

    pub fn predict(&self, target_year: i32) -> f64 {
        let Some(payments_made) = elapsed_years(self.start_year, target_year) else {
            return 0.0;
        };
        if payments_made >= self.term_years {
            return 0.0;
        }

        amortised_balance(
            self.initial_value,
            self.interest_rate,
            self.annual_payment(),
            payments_made,
        )
    }
}

/// Debt accruing interest and reduced by a fixed annual repayment
///
/// Paid off for good the first year the balance reaches zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherLiability {
    pub initial_value: f64,
    pub start_year: i32,
    #[serde(default)]
    pub interest_rate: f64,
    #[serde(default)]
    pub annual_repayment: f64,
}

impl OtherLiability {
    pub fn new(initial_value: f64, start_year: i32, interest_rate: f64, annual_repayment: f64) -> Self {
        Self { initial_value, start_year, interest_rate, annual_repayment }
    }

    /// Recomputed from `start_year` on every call; no cross-call caching.
    pub fn predict(&self, target_year: i32) -> f64 {
        let Some(years) = elapsed_years(self.start_year, target_year) else {
            return 0.0;
        };

        let mut balance = self.initial_value;
        for _ in 0..years {
            balance *= 1.0 + self.interest_rate;
            balance -= self.annual_repayment;
            if balance <= 0.0 {
                return 0.0;
            }
        }

        balance
    }
}

/// Any liability held on the balance sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Liability {
    HomeLoan(HomeLoan),
    OtherLiability(OtherLiability),
}

impl Liability {
    /// Outstanding balance in `target_year`; zero before inception and after payoff
    pub fn predict(&self, target_year: i32) -> f64 {
        match self {
            Liability::HomeLoan(l) => l.predict(target_year),
            Liability::OtherLiability(l) => l.predict(target_year),
        }
    }

    pub fn start_year(&self) -> i32 {
        match self {
            Liability::HomeLoan(l) => l.start_year,
            Liability::OtherLiability(l) => l.start_year,
        }
    }

    pub fn initial_value(&self) -> f64 {
        match self {
            Liability::HomeLoan(l) => l.initial_value,
            Liability::OtherLiability(l) => l.initial_value,
        }
    }
}

impl From<HomeLoan> for Liability {
    fn from(l: HomeLoan) -> Self {
        Liability::HomeLoan(l)
    }
}

impl From<OtherLiability> for Liability {
    fn from(l: OtherLiability) -> Self {
        Liability::OtherLiability(l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_home_loan_payoff_within_term() {
        let loan = HomeLoan::new(500_000.0, 2025, 0.05, 30);

        assert_eq!(loan.predict(2024), 0.0);
        assert_relative_eq!(loan.predict(2025), 500_000.0, epsilon = 1e-6);
        assert!(loan.predict(2054) > 0.0);
        assert_eq!(loan.predict(2055), 0.0);
        assert_eq!(loan.predict(2080), 0.0);
    }

    #[test]
    fn test_home_loan_balance_declines_monotonically() {
        let loan = HomeLoan::new(300_000.0, 2030, 0.06, 10);
        let balances: Vec<f64> = (2030..=2042).map(|y| loan.predict(y)).collect();

        for pair in balances.windows(2) {
            assert!(pair[1] <= pair[0]);
            assert!(pair[1] >= 0.0);
        }
        // Last outstanding balance is one payment discounted by a year
        assert_relative_eq!(
            loan.predict(2039),
            loan.annual_payment() / 1.06,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_home_loan_zero_rate() {
        let loan = HomeLoan::new(120_000.0, 2025, 0.0, 12);
        assert_eq!(loan.annual_payment(), 10_000.0);
        assert_eq!(loan.predict(2028), 90_000.0);
        assert_eq!(loan.predict(2036), 10_000.0);
        assert_eq!(loan.predict(2037), 0.0);
    }

    #[test]
    fn test_home_loan_degenerate_inputs() {
        let no_term = HomeLoan::new(100_000.0, 2025, 0.05, 0);
        assert_eq!(no_term.annual_payment(), 0.0);
        assert_eq!(no_term.predict(2025), 0.0);

        let no_principal = HomeLoan::new(0.0, 2025, 0.05, 10);
        assert_eq!(no_principal.annual_payment(), 0.0);
        assert_eq!(no_principal.predict(2030), 0.0);
    }

    #[test]
    fn test_other_liability_accrues_and_repays() {
        let debt = OtherLiability::new(10_000.0, 2025, 0.10, 2_000.0);
        assert_eq!(debt.predict(2024), 0.0);
        assert_eq!(debt.predict(2025), 10_000.0);
        assert_relative_eq!(debt.predict(2026), 9_000.0, epsilon = 1e-9);
        assert_relative_eq!(debt.predict(2027), 7_900.0, epsilon = 1e-9);
    }

    #[test]
    fn test_other_liability_early_payoff_stays_zero() {
        let debt = OtherLiability::new(5_000.0, 2025, 0.0, 2_000.0);
        assert_eq!(debt.predict(2026), 3_000.0);
        assert_eq!(debt.predict(2027), 1_000.0);
        assert_eq!(debt.predict(2028), 0.0);
        for year in 2029..2060 {
            assert_eq!(debt.predict(year), 0.0);
        }
    }

    #[test]
    fn test_other_liability_without_repayment_grows() {
        let debt = OtherLiability::new(1_000.0, 2025, 0.05, 0.0);
        assert_relative_eq!(debt.predict(2027), 1_102.5, epsilon = 1e-9);
    }

    #[test]
    fn test_liability_json_tagged() {
        let liability: Liability = serde_json::from_str(
            r#"{"type": "OtherLiability", "initial_value": 450000.0, "start_year": 2028,
                "interest_rate": 0.07, "annual_repayment": 33000.0}"#,
        )
        .unwrap();
        assert_eq!(liability.start_year(), 2028);
        assert_eq!(liability.initial_value(), 450_000.0);
    }
}

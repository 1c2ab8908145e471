//! Asset instruments and their value-prediction formulas

use serde::{Deserialize, Serialize};

use super::growth::{compound, compound_with_contributions, elapsed_years};

fn default_savings_rate() -> f64 {
    0.05
}

fn default_gross_return() -> f64 {
    0.07
}

fn default_management_fee() -> f64 {
    0.008
}

fn default_dividend_yield() -> f64 {
    0.03
}

fn default_true() -> bool {
    true
}

fn default_appreciation() -> f64 {
    0.035
}

fn default_salary_growth() -> f64 {
    0.03
}

fn default_employer_sg_rate() -> f64 {
    0.11
}

fn default_contribution_tax_rate() -> f64 {
    0.15
}

fn default_depreciation() -> f64 {
    0.15
}

/// Cash savings earning a fixed interest rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    pub initial_value: f64,
    pub start_year: i32,
    #[serde(default = "default_savings_rate")]
    pub interest_rate: f64,
    #[serde(default)]
    pub annual_contribution: f64,
}

impl Savings {
    pub fn new(initial_value: f64, start_year: i32) -> Self {
        Self {
            initial_value,
            start_year,
            interest_rate: default_savings_rate(),
            annual_contribution: 0.0,
        }
    }

    pub fn with_interest_rate(mut self, rate: f64) -> Self {
        self.interest_rate = rate;
        self
    }

    pub fn with_contribution(mut self, contribution: f64) -> Self {
        self.annual_contribution = contribution;
        self
    }

    pub fn predict(&self, target_year: i32) -> f64 {
        match elapsed_years(self.start_year, target_year) {
            Some(t) => compound_with_contributions(
                self.initial_value,
                self.annual_contribution,
                self.interest_rate,
                t,
            ),
            None => 0.0,
        }
    }
}

/// Pooled fund whose gross return is reduced by management and performance fees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedFund {
    pub initial_value: f64,
    pub start_year: i32,
    #[serde(default = "default_gross_return")]
    pub gross_return_rate: f64,
    #[serde(default = "default_management_fee")]
    pub management_fee_rate: f64,
    #[serde(default)]
    pub performance_fee_rate: f64,
    #[serde(default)]
    pub annual_contribution: f64,
}

impl ManagedFund {
    pub fn new(initial_value: f64, start_year: i32) -> Self {
        Self {
            initial_value,
            start_year,
            gross_return_rate: default_gross_return(),
            management_fee_rate: default_management_fee(),
            performance_fee_rate: 0.0,
            annual_contribution: 0.0,
        }
    }

    pub fn with_fees(mut self, management_fee_rate: f64, performance_fee_rate: f64) -> Self {
        self.management_fee_rate = management_fee_rate;
        self.performance_fee_rate = performance_fee_rate;
        self
    }

    pub fn with_contribution(mut self, contribution: f64) -> Self {
        self.annual_contribution = contribution;
        self
    }

    /// Return after fees: `(1 + gross) * (1 - management - performance) - 1`
    pub fn net_rate(&self) -> f64 {
        let fee_cut = self.management_fee_rate + self.performance_fee_rate;
        (1.0 + self.gross_return_rate) * (1.0 - fee_cut) - 1.0
    }

    pub fn predict(&self, target_year: i32) -> f64 {
        match elapsed_years(self.start_year, target_year) {
            Some(t) => compound_with_contributions(
                self.initial_value,
                self.annual_contribution,
                self.net_rate(),
                t,
            ),
            None => 0.0,
        }
    }
}

/// Directly held equities, optionally reinvesting dividends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shares {
    pub initial_value: f64,
    pub start_year: i32,
    #[serde(default = "default_gross_return")]
    pub annual_growth_rate: f64,
    #[serde(default = "default_dividend_yield")]
    pub dividend_yield: f64,
    #[serde(default)]
    pub annual_contribution: f64,
    #[serde(default = "default_true")]
    pub reinvest_dividends: bool,
}

impl Shares {
    pub fn new(initial_value: f64, start_year: i32) -> Self {
        Self {
            initial_value,
            start_year,
            annual_growth_rate: default_gross_return(),
            dividend_yield: default_dividend_yield(),
            annual_contribution: 0.0,
            reinvest_dividends: true,
        }
    }

    pub fn with_dividends(mut self, dividend_yield: f64, reinvest: bool) -> Self {
        self.dividend_yield = dividend_yield;
        self.reinvest_dividends = reinvest;
        self
    }

    /// Capital growth plus the dividend yield when dividends are reinvested
    pub fn effective_rate(&self) -> f64 {
        let dividends = if self.reinvest_dividends { self.dividend_yield } else { 0.0 };
        self.annual_growth_rate + dividends
    }

    pub fn predict(&self, target_year: i32) -> f64 {
        match elapsed_years(self.start_year, target_year) {
            Some(t) => compound_with_contributions(
                self.initial_value,
                self.annual_contribution,
                self.effective_rate(),
                t,
            ),
            None => 0.0,
        }
    }
}

/// Real estate appreciating at a fixed annual rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub initial_value: f64,
    pub start_year: i32,
    #[serde(default = "default_appreciation")]
    pub annual_appreciation: f64,
}

impl Property {
    pub fn new(initial_value: f64, start_year: i32, annual_appreciation: f64) -> Self {
        Self { initial_value, start_year, annual_appreciation }
    }

    pub fn predict(&self, target_year: i32) -> f64 {
        match elapsed_years(self.start_year, target_year) {
            Some(t) => compound(self.initial_value, self.annual_appreciation, t),
            None => 0.0,
        }
    }
}

/// Retirement fund fed by employer guarantee and personal contributions on a growing salary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Superannuation {
    pub initial_value: f64,
    pub start_year: i32,
    pub salary: f64,
    #[serde(default = "default_gross_return")]
    pub gross_return_rate: f64,
    #[serde(default = "default_management_fee")]
    pub fee_rate: f64,
    /// Salary increase per year
    #[serde(default = "default_salary_growth")]
    pub salary_growth: f64,
    /// Employer guarantee as a fraction of salary
    #[serde(default = "default_employer_sg_rate")]
    pub employer_sg_rate: f64,
    /// Personal concessional contribution per year
    #[serde(default)]
    pub personal_contribution: f64,
    /// Growth of the personal contribution per year
    #[serde(default)]
    pub personal_indexation: f64,
    /// Tax withheld from concessional contributions
    #[serde(default = "default_contribution_tax_rate")]
    pub contribution_tax_rate: f64,
}

impl Superannuation {
    pub fn new(initial_value: f64, start_year: i32, salary: f64) -> Self {
        Self {
            initial_value,
            start_year,
            salary,
            gross_return_rate: default_gross_return(),
            fee_rate: default_management_fee(),
            salary_growth: default_salary_growth(),
            employer_sg_rate: default_employer_sg_rate(),
            personal_contribution: 0.0,
            personal_indexation: 0.0,
            contribution_tax_rate: default_contribution_tax_rate(),
        }
    }

    pub fn with_personal_contribution(mut self, contribution: f64, indexation: f64) -> Self {
        self.personal_contribution = contribution;
        self.personal_indexation = indexation;
        self
    }

    pub fn net_investment_rate(&self) -> f64 {
        (1.0 + self.gross_return_rate) * (1.0 - self.fee_rate) - 1.0
    }

    /// Balance rolled forward one year at a time.
    ///
    /// Each year the existing balance earns the net investment rate first, then
    /// that year's after-tax contributions are added, then salary and personal
    /// contribution are indexed for the following year.
    pub fn predict(&self, target_year: i32) -> f64 {
        let Some(years) = elapsed_years(self.start_year, target_year) else {
            return 0.0;
        };

        let rate = self.net_investment_rate();
        let mut balance = self.initial_value;
        let mut salary = self.salary;
        let mut personal = self.personal_contribution;

        for _ in 0..years {
            balance *= 1.0 + rate;

            let gross_contribution = salary * self.employer_sg_rate + personal;
            balance += gross_contribution * (1.0 - self.contribution_tax_rate);

            salary *= 1.0 + self.salary_growth;
            personal *= 1.0 + self.personal_indexation;
        }

        balance
    }
}

/// Depreciating personal-use asset (vehicles, boats, furnishings)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleAsset {
    pub initial_value: f64,
    pub start_year: i32,
    #[serde(default = "default_depreciation")]
    pub depreciation_rate: f64,
}

impl LifestyleAsset {
    pub fn new(initial_value: f64, start_year: i32, depreciation_rate: f64) -> Self {
        Self { initial_value, start_year, depreciation_rate }
    }

    pub fn predict(&self, target_year: i32) -> f64 {
        match elapsed_years(self.start_year, target_year) {
            Some(t) => compound(self.initial_value, -self.depreciation_rate, t),
            None => 0.0,
        }
    }
}

/// Any asset held on the balance sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Asset {
    Savings(Savings),
    ManagedFund(ManagedFund),
    Shares(Shares),
    Property(Property),
    Superannuation(Superannuation),
    LifestyleAsset(LifestyleAsset),
}

impl Asset {
    /// Predicted value in `target_year`; zero before the asset's start year
    pub fn predict(&self, target_year: i32) -> f64 {
        match self {
            Asset::Savings(a) => a.predict(target_year),
            Asset::ManagedFund(a) => a.predict(target_year),
            Asset::Shares(a) => a.predict(target_year),
            Asset::Property(a) => a.predict(target_year),
            Asset::Superannuation(a) => a.predict(target_year),
            Asset::LifestyleAsset(a) => a.predict(target_year),
        }
    }

    pub fn start_year(&self) -> i32 {
        match self {
            Asset::Savings(a) => a.start_year,
            Asset::ManagedFund(a) => a.start_year,
            Asset::Shares(a) => a.start_year,
            Asset::Property(a) => a.start_year,
            Asset::Superannuation(a) => a.start_year,
            Asset::LifestyleAsset(a) => a.start_year,
        }
    }

    pub fn initial_value(&self) -> f64 {
        match self {
            Asset::Savings(a) => a.initial_value,
            Asset::ManagedFund(a) => a.initial_value,
            Asset::Shares(a) => a.initial_value,
            Asset::Property(a) => a.initial_value,
            Asset::Superannuation(a) => a.initial_value,
            Asset::LifestyleAsset(a) => a.initial_value,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Asset::Savings(_) => "Savings",
            Asset::ManagedFund(_) => "ManagedFund",
            Asset::Shares(_) => "Shares",
            Asset::Property(_) => "Property",
            Asset::Superannuation(_) => "Superannuation",
            Asset::LifestyleAsset(_) => "LifestyleAsset",
        }
    }
}

impl From<Savings> for Asset {
    fn from(a: Savings) -> Self {
        Asset::Savings(a)
    }
}

impl From<ManagedFund> for Asset {
    fn from(a: ManagedFund) -> Self {
        Asset::ManagedFund(a)
    }
}

impl From<Shares> for Asset {
    fn from(a: Shares) -> Self {
        Asset::Shares(a)
    }
}

impl From<Property> for Asset {
    fn from(a: Property) -> Self {
        Asset::Property(a)
    }
}

impl From<Superannuation> for Asset {
    fn from(a: Superannuation) -> Self {
        Asset::Superannuation(a)
    }
}

impl From<LifestyleAsset> for Asset {
    fn from(a: LifestyleAsset) -> Self {
        Asset::LifestyleAsset(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn all_kinds(start_year: i32) -> Vec<Asset> {
        vec![
            Savings::new(25_000.0, start_year).with_contribution(2_000.0).into(),
            ManagedFund::new(12_000.0, start_year).with_contribution(1_000.0).into(),
            Shares::new(30_000.0, start_year).into(),
            Property::new(100_000.0, start_year, 0.035).into(),
            Superannuation::new(12_000.0, start_year, 80_000.0).into(),
            LifestyleAsset::new(30_000.0, start_year, 0.15).into(),
        ]
    }

    #[test]
    fn test_zero_before_start_and_initial_at_start() {
        for asset in all_kinds(2025) {
            assert_eq!(asset.predict(2024), 0.0, "{} before start", asset.kind());
            assert_eq!(asset.predict(1990), 0.0, "{} long before start", asset.kind());
            assert_relative_eq!(asset.predict(2025), asset.initial_value(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_savings_one_year() {
        let savings = Savings::new(25_000.0, 2025);
        assert_relative_eq!(savings.predict(2026), 26_250.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_is_principal_plus_contributions() {
        let savings = Savings::new(10_000.0, 2025)
            .with_interest_rate(0.0)
            .with_contribution(1_500.0);
        assert_eq!(savings.predict(2035), 10_000.0 + 1_500.0 * 10.0);

        let mut shares = Shares::new(5_000.0, 2025).with_dividends(0.0, true);
        shares.annual_growth_rate = 0.0;
        shares.annual_contribution = 250.0;
        assert_eq!(shares.predict(2029), 5_000.0 + 250.0 * 4.0);

        let mut fund = ManagedFund::new(8_000.0, 2025).with_contribution(100.0);
        fund.gross_return_rate = 0.0;
        fund.management_fee_rate = 0.0;
        assert_eq!(fund.net_rate(), 0.0);
        assert_eq!(fund.predict(2030), 8_000.0 + 500.0);
    }

    #[test]
    fn test_managed_fund_net_rate() {
        let fund = ManagedFund::new(10_000.0, 2025).with_fees(0.01, 0.005);
        let expected = 1.07 * (1.0 - 0.015) - 1.0;
        assert_relative_eq!(fund.net_rate(), expected);
        assert_relative_eq!(fund.predict(2027), 10_000.0 * (1.0 + expected).powi(2), epsilon = 1e-9);
    }

    #[test]
    fn test_shares_dividend_reinvestment() {
        let reinvesting = Shares::new(10_000.0, 2025);
        let paying_out = Shares::new(10_000.0, 2025).with_dividends(0.03, false);

        assert_relative_eq!(reinvesting.effective_rate(), 0.10, epsilon = 1e-12);
        assert_relative_eq!(paying_out.effective_rate(), 0.07, epsilon = 1e-12);
        assert!(reinvesting.predict(2035) > paying_out.predict(2035));
    }

    #[test]
    fn test_property_and_lifestyle() {
        let home = Property::new(500_000.0, 2025, 0.04);
        assert_relative_eq!(home.predict(2027), 500_000.0 * 1.04 * 1.04, epsilon = 1e-6);

        let car = LifestyleAsset::new(30_000.0, 2025, 0.15);
        assert_relative_eq!(car.predict(2026), 25_500.0, epsilon = 1e-9);
        assert_relative_eq!(car.predict(2027), 21_675.0, epsilon = 1e-9);
    }

    #[test]
    fn test_superannuation_growth_before_contribution() {
        let mut fund = Superannuation::new(10_000.0, 2025, 100_000.0);
        fund.gross_return_rate = 0.10;
        fund.fee_rate = 0.0;
        fund.salary_growth = 0.05;
        fund.employer_sg_rate = 0.10;
        fund.contribution_tax_rate = 0.15;

        // Year 1: 10,000 * 1.10 + 10,000 * 0.85 = 19,500
        assert_relative_eq!(fund.predict(2026), 19_500.0, epsilon = 1e-9);
        // Year 2: 19,500 * 1.10 + 10,500 * 0.85 = 30,375
        assert_relative_eq!(fund.predict(2027), 30_375.0, epsilon = 1e-9);
    }

    #[test]
    fn test_superannuation_personal_contributions_indexed() {
        let mut fund = Superannuation::new(0.0, 2025, 0.0).with_personal_contribution(1_000.0, 0.10);
        fund.gross_return_rate = 0.0;
        fund.fee_rate = 0.0;
        fund.contribution_tax_rate = 0.0;

        assert_relative_eq!(fund.predict(2027), 1_000.0 + 1_100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_asset_json_defaults() {
        let asset: Asset = serde_json::from_str(
            r#"{"type": "Shares", "initial_value": 30000.0, "start_year": 2025}"#,
        )
        .unwrap();
        assert_eq!(asset, Asset::Shares(Shares::new(30_000.0, 2025)));

        let asset: Asset = serde_json::from_str(
            r#"{"type": "Superannuation", "initial_value": 12000.0, "start_year": 2025, "salary": 80000.0}"#,
        )
        .unwrap();
        assert_eq!(asset, Asset::Superannuation(Superannuation::new(12_000.0, 2025, 80_000.0)));
    }
}

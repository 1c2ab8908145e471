//! Scenario files and batch runner
//!
//! A scenario bundles a household model with the horizon to project it over.
//! Many scenarios (e.g. "buy in 2030" vs "keep renting") can be evaluated
//! side by side; each run copies its own base state, so they run in parallel.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::events::{ChildBirth, HomePurchase, Inheritance};
use crate::instruments::{
    Expense, HomeLoan, Income, LifestyleAsset, ManagedFund, OtherLiability, Property, Savings,
    Shares, Superannuation,
};
use crate::projection::{FinancialModel, Horizon, ModelOutput};
use crate::statements::{BalanceSheet, CashFlow};

/// Default path of the bundled sample scenario
pub const DEFAULT_SCENARIO_PATH: &str = "data/scenarios/household.json";

/// A named household model and the horizon to project it over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(flatten)]
    pub model: FinancialModel,
    /// Falls back to the caller's choice when absent
    #[serde(default)]
    pub horizon: Option<Horizon>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, model: FinancialModel, horizon: Horizon) -> Self {
        Self {
            name: name.into(),
            model,
            horizon: Some(horizon),
        }
    }

    /// Run over the scenario's own horizon, or `fallback` when it has none
    pub fn run(&self, fallback: Horizon) -> Result<ModelOutput> {
        self.model.run(self.horizon.unwrap_or(fallback))
    }

    /// Sample household: mixed assets, two loans, a home purchase, a child and an inheritance
    pub fn sample_household() -> Self {
        let balance_sheet = BalanceSheet::new(
            vec![
                Savings::new(25_000.0, 2025).into(),
                Savings::new(15_000.0, 2065).with_contribution(2_000.0).into(),
                ManagedFund::new(12_000.0, 2029).into(),
                Property::new(100_000.0, 2032, 0.035).into(),
                Shares::new(30_000.0, 2025).into(),
                Superannuation::new(12_000.0, 2025, 80_000.0).into(),
                LifestyleAsset::new(30_000.0, 2025, 0.15).into(),
            ],
            vec![
                HomeLoan::new(500_000.0, 2025, 0.05, 30).into(),
                OtherLiability::new(450_000.0, 2028, 0.07, 33_000.0).into(),
            ],
        );

        let cash_flow = CashFlow::new(
            vec![
                Income::new("Salary", 100_000.0, 0.07, 2024),
                Income::new("Rental Income", 20_000.0, 0.01, 2026),
            ],
            vec![
                Expense::new("Living Expenses", 40_000.0, 2024).with_rate(0.05),
                Expense::new("Vacation Expenses", 100_000.0, 2027).until(2027),
            ],
        );

        let events = vec![
            HomePurchase::new("First Home Purchase", 2030, 2_000_000.0, 0.035, 0.045, 30)
                .with_deposit(120_000.0)
                .with_maintenance(3_500.0, 0.02)
                .into(),
            ChildBirth::new("First Child", 2032, 15_000.0, 18).into(),
            Inheritance::new("Family Inheritance", 2045, 100_000.0)
                .with_interest_rate(0.045)
                .into(),
        ];

        Self::new(
            "Sample household",
            FinancialModel::new(balance_sheet, cash_flow, events),
            Horizon::new(2025, 2070),
        )
    }
}

/// Load a scenario from a JSON file
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario> {
    let file = File::open(path.as_ref())?;
    let scenario = load_scenario_from_reader(BufReader::new(file))?;
    info!("Loaded scenario '{}' from {}", scenario.name, path.as_ref().display());
    Ok(scenario)
}

/// Load a scenario from any reader (e.g., string buffer, network stream)
pub fn load_scenario_from_reader<R: Read>(reader: R) -> Result<Scenario> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load the bundled sample scenario file
pub fn load_default_scenario() -> Result<Scenario> {
    load_scenario(DEFAULT_SCENARIO_PATH)
}

/// Evaluates a set of scenarios against a shared default horizon
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    scenarios: Vec<Scenario>,
    default_horizon: Horizon,
}

impl ScenarioRunner {
    pub fn new(scenarios: Vec<Scenario>, default_horizon: Horizon) -> Self {
        Self { scenarios, default_horizon }
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn add(&mut self, scenario: Scenario) {
        self.scenarios.push(scenario);
    }

    /// Run every scenario in parallel; results keep the input order
    pub fn run_all(&self) -> Vec<(String, Result<ModelOutput>)> {
        self.scenarios
            .par_iter()
            .map(|s| (s.name.clone(), s.run(self.default_horizon)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE_JSON: &str = include_str!("../data/scenarios/household.json");

    #[test]
    fn test_bundled_file_matches_sample_household() {
        let loaded = load_scenario_from_reader(SAMPLE_JSON.as_bytes()).unwrap();
        let sample = Scenario::sample_household();

        assert_eq!(loaded.name, sample.name);
        assert_eq!(loaded.horizon, sample.horizon);
        assert_eq!(loaded.model.balance_sheet.assets.len(), 7);
        assert_eq!(loaded.model.balance_sheet.liabilities.len(), 2);
        assert_eq!(loaded.model.events.len(), 3);

        let fallback = Horizon::new(2025, 2070);
        let from_file = loaded.run(fallback).unwrap();
        let in_code = sample.run(fallback).unwrap();
        for (a, b) in from_file.balance_sheet.iter().zip(&in_code.balance_sheet) {
            assert_eq!(a.year, b.year);
            assert_relative_eq!(a.net_worth, b.net_worth, max_relative = 1e-9, epsilon = 1e-6);
        }
        for (a, b) in from_file.cash_flow.iter().zip(&in_code.cash_flow) {
            assert_relative_eq!(a.net_flow, b.net_flow, max_relative = 1e-9, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_sample_household_projection() {
        let scenario = Scenario::sample_household();
        let output = scenario.run(Horizon::new(2000, 2001)).unwrap();

        assert_eq!(output.balance_sheet.len(), 46);
        assert_eq!(output.cash_flow.len(), 46);
        assert_eq!(output.events.len(), 3);

        // Vacation is a one-year spike
        let flow = |y: i32| output.cash_flow.iter().find(|r| r.year == y).unwrap().clone();
        let living = |y: i32| 40_000.0 * 1.05_f64.powi(y - 2024);
        assert_relative_eq!(flow(2026).outflow, living(2026), epsilon = 1e-6);
        assert_relative_eq!(flow(2027).outflow, living(2027) + 100_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_horizon_fallback() {
        let mut scenario = Scenario::sample_household();
        scenario.horizon = None;

        let output = scenario.run(Horizon::new(2025, 2030)).unwrap();
        assert_eq!(output.balance_sheet.len(), 6);
        assert_eq!(output.events.len(), 1);
    }

    #[test]
    fn test_runner_keeps_order_and_isolates_runs() {
        let with_events = Scenario::sample_household();
        let mut renting = Scenario::sample_household();
        renting.name = "Keep renting".to_string();
        renting.model.events.clear();

        let runner = ScenarioRunner::new(vec![with_events.clone(), renting], Horizon::new(2025, 2070));
        let results = runner.run_all();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "Sample household");
        assert_eq!(results[1].0, "Keep renting");

        let buying = results[0].1.as_ref().unwrap();
        let renting = results[1].1.as_ref().unwrap();
        assert_eq!(buying, &with_events.run(Horizon::new(2025, 2070)).unwrap());
        assert!(renting.events.is_empty());
        assert_eq!(runner.scenarios()[0], with_events);
    }

    #[test]
    fn test_runner_reports_bad_scenarios_individually() {
        let mut broken = Scenario::sample_household();
        broken.horizon = Some(Horizon::new(2070, 2025));

        let mut runner = ScenarioRunner::new(Vec::new(), Horizon::new(2025, 2030));
        runner.add(broken);
        runner.add(Scenario::sample_household());

        let results = runner.run_all();
        assert!(results[0].1.is_err());
        assert!(results[1].1.is_ok());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_scenario("does/not/exist.json").is_err());
    }
}

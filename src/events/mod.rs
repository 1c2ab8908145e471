//! Life events: year-triggered transformations that derive new instruments
//!
//! Each event takes the current balance sheet and cash flow by value and returns
//! the updated pair, so the caller's base state is never aliased.

mod child_birth;
mod home_purchase;
mod inheritance;

pub use child_birth::ChildBirth;
pub use home_purchase::HomePurchase;
pub use inheritance::Inheritance;

use serde::{Deserialize, Serialize};

use crate::statements::{BalanceSheet, CashFlow};

/// Any discrete life event in a household model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LifeEvent {
    HomePurchase(HomePurchase),
    ChildBirth(ChildBirth),
    Inheritance(Inheritance),
}

impl LifeEvent {
    pub fn start_year(&self) -> i32 {
        match self {
            LifeEvent::HomePurchase(e) => e.start_year,
            LifeEvent::ChildBirth(e) => e.start_year,
            LifeEvent::Inheritance(e) => e.start_year,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            LifeEvent::HomePurchase(e) => &e.name,
            LifeEvent::ChildBirth(e) => &e.name,
            LifeEvent::Inheritance(e) => &e.name,
        }
    }

    /// Derive this event's instruments into the given state
    pub fn apply(&self, balance_sheet: BalanceSheet, cash_flow: CashFlow) -> (BalanceSheet, CashFlow) {
        match self {
            LifeEvent::HomePurchase(e) => e.apply(balance_sheet, cash_flow),
            LifeEvent::ChildBirth(e) => e.apply(balance_sheet, cash_flow),
            LifeEvent::Inheritance(e) => e.apply(balance_sheet, cash_flow),
        }
    }
}

impl From<HomePurchase> for LifeEvent {
    fn from(e: HomePurchase) -> Self {
        LifeEvent::HomePurchase(e)
    }
}

impl From<ChildBirth> for LifeEvent {
    fn from(e: ChildBirth) -> Self {
        LifeEvent::ChildBirth(e)
    }
}

impl From<Inheritance> for LifeEvent {
    fn from(e: Inheritance) -> Self {
        LifeEvent::Inheritance(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_roundtrip_keeps_variant() {
        let json = r#"[
            {"type": "ChildBirth", "name": "First Child", "start_year": 2032,
             "annual_cost": 15000.0, "years_of_expense": 18},
            {"type": "Inheritance", "name": "Family Inheritance", "start_year": 2045,
             "amount": 100000.0, "savings_interest_rate": 0.045}
        ]"#;
        let events: Vec<LifeEvent> = serde_json::from_str(json).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name(), "First Child");
        assert_eq!(events[1].start_year(), 2045);
        match &events[1] {
            LifeEvent::Inheritance(e) => assert!(e.add_to_cash_flow),
            other => panic!("unexpected event {:?}", other),
        }
    }
}

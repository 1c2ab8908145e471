//! Closed-form compound growth helpers shared by the instrument formulas

/// Rates with magnitude below this are treated as exactly zero
const ZERO_RATE_EPS: f64 = 1e-12;

fn is_zero_rate(rate: f64) -> bool {
    rate.abs() < ZERO_RATE_EPS
}

/// Whole years elapsed between `start_year` and `target_year`, or None before inception
pub fn elapsed_years(start_year: i32, target_year: i32) -> Option<u32> {
    if target_year < start_year {
        None
    } else {
        Some((target_year - start_year) as u32)
    }
}

/// Compound growth factor `(1 + rate)^years`
pub fn growth_factor(rate: f64, years: u32) -> f64 {
    (1.0 + rate).powi(years as i32)
}

/// Future value of a lump sum with no contributions
pub fn compound(principal: f64, rate: f64, years: u32) -> f64 {
    principal * growth_factor(rate, years)
}

/// Future value of a level contribution paid at the end of each year (ordinary annuity)
///
/// Falls back to `contribution * years` at a zero rate.
pub fn annuity_future_value(contribution: f64, rate: f64, years: u32) -> f64 {
    if is_zero_rate(rate) {
        return contribution * years as f64;
    }
    contribution * (growth_factor(rate, years) - 1.0) / rate
}

/// Lump sum plus level end-of-year contributions, both compounding at `rate`
pub fn compound_with_contributions(principal: f64, contribution: f64, rate: f64, years: u32) -> f64 {
    compound(principal, rate, years) + annuity_future_value(contribution, rate, years)
}

/// Level annual payment that retires `principal` over `term_years`
///
/// `PMT = P * r / (1 - (1 + r)^-n)`, or `P / n` at a zero rate.
pub fn amortising_payment(principal: f64, rate: f64, term_years: u32) -> f64 {
    if term_years == 0 || principal <= 0.0 {
        return 0.0;
    }
    if is_zero_rate(rate) {
        return principal / term_years as f64;
    }
    principal * rate / (1.0 - (1.0 + rate).powi(-(term_years as i32)))
}

/// Outstanding balance after `payments` level payments of `payment`, floored at zero
pub fn amortised_balance(principal: f64, rate: f64, payment: f64, payments: u32) -> f64 {
    let balance = if is_zero_rate(rate) {
        principal - payment * payments as f64
    } else {
        let growth = growth_factor(rate, payments);
        principal * growth - payment * (growth - 1.0) / rate
    };
    balance.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_elapsed_years() {
        assert_eq!(elapsed_years(2025, 2024), None);
        assert_eq!(elapsed_years(2025, 2025), Some(0));
        assert_eq!(elapsed_years(2025, 2035), Some(10));
    }

    #[test]
    fn test_compound() {
        assert_relative_eq!(compound(25_000.0, 0.05, 1), 26_250.0, epsilon = 1e-9);
        assert_relative_eq!(compound(1_000.0, 0.10, 0), 1_000.0);
    }

    #[test]
    fn test_annuity_zero_rate_is_additive() {
        let fv = annuity_future_value(2_000.0, 0.0, 7);
        assert_eq!(fv, 14_000.0);
        assert!(fv.is_finite());
    }

    #[test]
    fn test_annuity_matches_year_by_year_accumulation() {
        let mut balance = 0.0;
        for _ in 0..10 {
            balance = balance * 1.06 + 500.0;
        }
        assert_relative_eq!(annuity_future_value(500.0, 0.06, 10), balance, epsilon = 1e-9);
    }

    #[test]
    fn test_amortising_payment() {
        // 100k over 10 years at 5%: standard annuity payment ≈ 12,950.46
        let pmt = amortising_payment(100_000.0, 0.05, 10);
        assert!((pmt - 12_950.4575).abs() < 0.01);

        assert_eq!(amortising_payment(120_000.0, 0.0, 12), 10_000.0);
        assert_eq!(amortising_payment(0.0, 0.05, 10), 0.0);
        assert_eq!(amortising_payment(100_000.0, 0.05, 0), 0.0);
    }

    #[test]
    fn test_amortised_balance_reaches_zero_at_term() {
        let pmt = amortising_payment(100_000.0, 0.05, 10);
        assert_relative_eq!(amortised_balance(100_000.0, 0.05, pmt, 0), 100_000.0);
        assert!(amortised_balance(100_000.0, 0.05, pmt, 9) > 0.0);
        assert!(amortised_balance(100_000.0, 0.05, pmt, 10).abs() < 1e-6);
        // Never negative past the term
        assert_eq!(amortised_balance(100_000.0, 0.05, pmt, 15), 0.0);
    }
}

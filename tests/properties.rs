//! Property tests for conversion and pay arithmetic.

use household::models::{Currency, Job, Money};
use proptest::prelude::*;

fn supported_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::SUPPORTED.to_vec())
}

fn unsupported_currency() -> impl Strategy<Value = Currency> {
    "[A-Z]{3}"
        .prop_map(|code| Currency::from_code(&code))
        .prop_filter("code has a conversion factor", |c| !c.is_supported())
}

fn tolerance(scale: f64) -> f64 {
    1e-9 * scale.abs().max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: converting away and back restores the amount.
    #[test]
    fn property_round_trip(
        amount in -1e9f64..1e9,
        from in supported_currency(),
        to in supported_currency(),
    ) {
        let back = Money::new(amount, from.clone()).convert(&to).convert(&from);
        prop_assert!((back.amount() - amount).abs() <= tolerance(amount));
        prop_assert_eq!(back.currency(), &from);
    }

    /// PROPERTY: unknown currencies convert at par in both directions.
    #[test]
    fn property_unknown_currency_at_par(
        amount in -1e9f64..1e9,
        unknown in unsupported_currency(),
    ) {
        let m = Money::new(amount, unknown.clone());
        prop_assert_eq!(m.convert(&Currency::Usd).amount(), amount);
        prop_assert_eq!(Money::usd(amount).convert(&unknown).amount(), amount);
    }

    /// PROPERTY: the sum does not depend on operand order once expressed in
    /// one currency.
    #[test]
    fn property_add_order_independent(
        a in -1e6f64..1e6,
        b in -1e6f64..1e6,
        ca in supported_currency(),
        cb in supported_currency(),
    ) {
        let x = Money::new(a, ca.clone());
        let y = Money::new(b, cb.clone());

        let in_b = x.add(&y);
        let in_a = y.add(&x);
        prop_assert_eq!(in_b.currency(), &cb);
        prop_assert_eq!(in_a.currency(), &ca);

        let scale = a.abs() + b.abs();
        let drift = (in_b.convert(&ca).amount() - in_a.amount()).abs();
        prop_assert!(drift <= tolerance(scale) * 4.0);
    }

    /// PROPERTY: hourly income is the floor of hours times wage.
    #[test]
    fn property_hourly_income_floors(hours in 0i64..10_000, wage in 0.0f64..500.0) {
        let income = Job::hourly("Worker", wage).calculate_income(hours) as f64;
        let exact = hours as f64 * wage;
        prop_assert!(income <= exact);
        prop_assert!(income > exact - 1.0);
    }

    /// PROPERTY: salaries take only the whole part of a raise and never go
    /// below zero.
    #[test]
    fn property_salary_raise_by_amount(salary in 0u64..1_000_000, amount in -2e6f64..2e6) {
        let mut job = Job::salaried("Worker", salary);
        job.raise_by_amount(amount);

        let expected = (salary as i64 + amount.trunc() as i64).max(0) as u64;
        prop_assert_eq!(job.salary(), Some(expected));
    }

    /// PROPERTY: percent raises on salaries truncate to a whole number.
    #[test]
    fn property_salary_raise_by_percent(salary in 0u64..1_000_000, percent in -2.0f64..2.0) {
        let mut job = Job::salaried("Worker", salary);
        job.raise_by_percent(percent);

        let exact = salary as f64 * (1.0 + percent);
        let raised = job.salary().unwrap() as f64;
        if exact <= 0.0 {
            prop_assert_eq!(raised, 0.0);
        } else {
            prop_assert!(raised <= exact);
            prop_assert!(raised > exact - 1.0);
        }
    }
}

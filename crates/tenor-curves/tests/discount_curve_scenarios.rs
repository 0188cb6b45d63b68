//! Integration tests: discount curves built through each factory.
//!
//! Grid used by most tests:
//!
//! | Time | Discount factor |
//! |------|-----------------|
//! | 1Y   | 0.99            |
//! | 2Y   | 0.97            |
//! | 5Y   | 0.90            |
//! | 10Y  | 0.80            |

use approx::assert_relative_eq;
use tenor_curves::prelude::*;

const TIMES: [f64; 4] = [1.0, 2.0, 5.0, 10.0];
const DFS: [f64; 4] = [0.99, 0.97, 0.90, 0.80];

fn curve_with(options: &CurveOptions) -> DiscountCurve {
    DiscountCurve::from_discount_factors("grid", &TIMES, &DFS, None, options).unwrap()
}

#[test]
fn test_grid_scenario_log_per_time_linear_constant() {
    let options = CurveOptions::default()
        .with_interpolation(InterpolationMethod::Linear)
        .with_entity(InterpolationEntity::LogOfValuePerTime)
        .with_extrapolation(ExtrapolationMethod::Constant);
    let curve = curve_with(&options);

    let df2 = curve.discount_factor(2.0).unwrap();
    let df3 = curve.discount_factor(3.0).unwrap();
    let df5 = curve.discount_factor(5.0).unwrap();
    assert!(df2 > df3 && df3 > df5);

    // Linear in zero rate between 2Y and 5Y
    let r2 = -(0.97_f64.ln()) / 2.0;
    let r5 = -(0.90_f64.ln()) / 5.0;
    let r3 = r2 + (r5 - r2) / 3.0;
    assert_relative_eq!(curve.zero_rate(3.0).unwrap(), r3, max_relative = 1e-12);

    // Flat zero rate beyond 10Y
    assert_relative_eq!(
        curve.zero_rate(20.0).unwrap(),
        curve.zero_rate(10.0).unwrap(),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        curve.discount_factor(20.0).unwrap(),
        0.80_f64.powi(2),
        max_relative = 1e-12
    );
}

#[test]
fn test_grid_scenario_value_entity_flat_discount_factor() {
    let options = CurveOptions::default().with_entity(InterpolationEntity::Value);
    let curve = curve_with(&options);

    assert_eq!(curve.discount_factor(20.0).unwrap(), curve.discount_factor(10.0).unwrap());
    assert_eq!(curve.discount_factor(0.5).unwrap(), 0.99);
}

#[test]
fn test_every_selector_combination_reproduces_nodes() {
    let methods = [
        InterpolationMethod::Linear,
        InterpolationMethod::CubicSpline,
        InterpolationMethod::HarmonicSpline,
    ];
    let extrapolations = [ExtrapolationMethod::Constant, ExtrapolationMethod::Linear];
    let entities = [
        InterpolationEntity::Value,
        InterpolationEntity::LogOfValue,
        InterpolationEntity::LogOfValuePerTime,
    ];

    for method in methods {
        for extrapolation in extrapolations {
            for entity in entities {
                let options = CurveOptions::default()
                    .with_interpolation(method)
                    .with_extrapolation(extrapolation)
                    .with_entity(entity);
                let curve = curve_with(&options);

                for (t, df) in TIMES.iter().zip(DFS) {
                    assert_relative_eq!(
                        curve.discount_factor(*t).unwrap(),
                        df,
                        max_relative = 1e-14
                    );
                }

                // Between nodes the monotone schemes stay within the neighbours
                if method != InterpolationMethod::CubicSpline {
                    let df = curve.discount_factor(3.0).unwrap();
                    assert!(df < 0.97 && df > 0.90, "{method} {entity}: {df}");
                }
            }
        }
    }
}

#[test]
fn test_log_of_value_is_flat_forward() {
    let options = CurveOptions::default().with_entity(InterpolationEntity::LogOfValue);
    let curve = curve_with(&options);

    // Constant instantaneous forward between 2Y and 5Y
    let f1 = curve.forward_discount_factor(2.0, 3.0).unwrap();
    let f2 = curve.forward_discount_factor(3.0, 4.0).unwrap();
    assert_relative_eq!(f1, f2, max_relative = 1e-12);
}

#[test]
fn test_linear_extrapolation_of_zero_rates() {
    let options = CurveOptions::default().with_extrapolation(ExtrapolationMethod::Linear);
    let curve = curve_with(&options);

    let r5 = -(0.90_f64.ln()) / 5.0;
    let r10 = -(0.80_f64.ln()) / 10.0;
    let slope = (r10 - r5) / 5.0;

    assert_relative_eq!(curve.zero_rate(15.0).unwrap(), r10 + 5.0 * slope, max_relative = 1e-12);
}

#[test]
fn test_forward_rate_scenario() {
    let tenor = TimeDiscretization::from_step(0.0, 4, 0.5).unwrap();
    let curve =
        DiscountCurve::from_forward_rates("fwd", &tenor, &[0.03; 4], &CurveOptions::default())
            .unwrap();

    assert_relative_eq!(
        curve.discount_factor(2.0).unwrap(),
        (1.0_f64 + 0.03 * 0.5).powi(-4),
        max_relative = 1e-14
    );
}

#[test]
fn test_forward_rates_strictly_decreasing() {
    let tenor = TimeDiscretization::new(vec![0.0, 0.25, 0.5, 1.0, 2.0, 3.0, 5.0]).unwrap();
    let rates = [0.01, 0.015, 0.02, 0.022, 0.025, 0.03];
    let curve =
        DiscountCurve::from_forward_rates("fwd", &tenor, &rates, &CurveOptions::default()).unwrap();

    let dfs: Vec<f64> = curve.points().iter().map(|p| p.value).collect();
    assert!(dfs.windows(2).all(|w| w[1] < w[0]));

    for (i, rate) in rates.iter().enumerate() {
        let fwd = curve.forward_rate(tenor.time(i), tenor.time(i + 1)).unwrap();
        assert_relative_eq!(fwd, *rate, max_relative = 1e-10);
    }
}

#[test]
fn test_parameter_flags_default() {
    let curve = DiscountCurve::from_discount_factors(
        "flags",
        &[0.0, 0.5, 1.0],
        &[1.0, 0.995, 0.99],
        None,
        &CurveOptions::default(),
    )
    .unwrap();

    assert!(!curve.curve().point_at(0.0).unwrap().is_parameter);
    assert!(curve.curve().point_at(0.5).unwrap().is_parameter);
    assert!(curve.curve().point_at(1.0).unwrap().is_parameter);
}

#[test]
fn test_errors_by_kind() {
    let options = CurveOptions::default();

    let err = DiscountCurve::from_discount_factors("empty", &[], &[], None, &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Construction);

    let err = DiscountCurve::from_discount_factors("neg", &[1.0], &[-0.2], None, &options)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);

    let err = DiscountCurve::from_discount_factors("anchor", &[0.0], &[0.95], None, &options)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);

    let value_entity = options.with_entity(InterpolationEntity::Value);
    assert!(DiscountCurve::from_discount_factors("anchor", &[0.0], &[0.95], None, &value_entity).is_ok());

    let curve = curve_with(&options);
    assert_eq!(curve.curve().point_at(3.0).unwrap_err().kind(), ErrorKind::Lookup);
}

#[test]
fn test_config_to_model_to_spread() {
    let config = CurveConfig::from_json(
        r#"{
            "name": "EUR-OIS",
            "reference_date": "2025-01-02",
            "interpolation": "HARMONIC_SPLINE",
            "quote_type": "ZERO_RATE",
            "points": [
                { "time": 0.5, "value": 0.02 },
                { "time": 1.0, "value": 0.021 },
                { "time": 2.0, "value": 0.023 },
                { "time": 5.0, "value": 0.026 }
            ]
        }"#,
    )
    .unwrap();
    let ois = config.build().unwrap();
    assert_relative_eq!(ois.zero_rate(2.0).unwrap(), 0.023, max_relative = 1e-12);

    let model = AnalyticModel::new()
        .with_curve(ois)
        .with_curve(SpreadDiscountCurve::new("EUR-CORP", "EUR-OIS", 0.01));

    let corp = model.discount_curve("EUR-CORP").unwrap();
    let base = model.discount_curve("EUR-OIS").unwrap();
    for t in [0.25, 1.0, 3.0, 10.0] {
        let spread_rate = corp.zero_rate_in_model(Some(&model), t).unwrap()
            - base.zero_rate_in_model(Some(&model), t).unwrap();
        assert_relative_eq!(spread_rate, 0.01, max_relative = 1e-9);
    }
}

#[test]
fn test_invalid_discount_factors_fail_instead_of_degrading() {
    let options = CurveOptions::default()
        .with_entity(InterpolationEntity::Value)
        .with_extrapolation(ExtrapolationMethod::Linear);

    let steep = DiscountCurve::from_discount_factors("steep", &[1.0, 2.0], &[0.99, 0.5], None, &options)
        .unwrap();
    assert_eq!(steep.zero_rate(10.0).unwrap_err().kind(), ErrorKind::Domain);
    assert!(steep.zero_rates(&[1.0, 2.0, 10.0]).is_err());
    assert_relative_eq!(steep.zero_rate(2.0).unwrap(), -(0.5_f64.ln()) / 2.0, max_relative = 1e-14);

    let err = DiscountCurve::from_discount_factors("neg", &TIMES, &[0.99, 0.97, -0.9, 0.8], None, &options)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);

    let mut curve = curve_with(&options);
    let before = curve.parameters();
    assert!(curve.set_parameters(&[0.99, 0.97, 0.0, 0.8]).is_err());
    assert_eq!(curve.parameters(), before);
}

#[test]
fn test_cyclic_spread_curves() {
    let model = AnalyticModel::new()
        .with_curve(curve_with(&CurveOptions::default()))
        .with_curve(SpreadDiscountCurve::new("A", "B", 0.01))
        .with_curve(SpreadDiscountCurve::new("B", "C", 0.01))
        .with_curve(SpreadDiscountCurve::new("C", "A", 0.01))
        .with_curve(SpreadDiscountCurve::new("D", "grid", 0.01));

    for name in ["A", "B", "C"] {
        assert_eq!(model.discount_factor(name, 1.0).unwrap_err().kind(), ErrorKind::Lookup);
    }
    assert!(model.check_dependencies("D").is_ok());
    assert_relative_eq!(
        model.discount_factor("D", 1.0).unwrap(),
        0.99 * (-0.01_f64).exp(),
        max_relative = 1e-14
    );
}

#[test]
fn test_concurrent_queries() {
    use std::sync::Arc;
    use std::thread;

    let curve = Arc::new(curve_with(&CurveOptions::default()));
    let expected = curve.discount_factor(7.5).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let curve = Arc::clone(&curve);
            thread::spawn(move || curve.discount_factor(7.5).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

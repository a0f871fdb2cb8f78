//! 패널/배터리 산정 테스트.
use yellow_sun_toolbox::pv::{
    compute_monthly_potential, monthly_generation, size_system, MonthlySeries, PanelSpec,
    PvCalcError, SizingInput,
};
use yellow_sun_toolbox::solar_db::Month;

fn design() -> SizingInput {
    SizingInput {
        daily_target_kwh: 10.0,
        autonomy_days: 2.0,
        battery_voltage_v: 12.0,
        depth_of_discharge_pct: 50.0,
        battery_efficiency_pct: 95.0,
        battery_capacity_ah: 200.0,
    }
}

fn lagos_potential() -> MonthlySeries {
    let panel = PanelSpec {
        length_m: 1.6,
        width_m: 1.0,
        efficiency_pct: 20.0,
        inverter_efficiency_pct: 95.0,
    };
    compute_monthly_potential(&panel, "Lagos").expect("lagos")
}

#[test]
fn reference_design_counts() {
    let sizing = size_system(&lagos_potential(), &design()).expect("sizing");
    // 10 / (1.44096 × 0.92) = 7.54 → 8
    assert_eq!(sizing.panel_count, 8);
    assert_eq!(sizing.total_battery_capacity_ah, 3509.0);
    assert_eq!(sizing.battery_count, 18);
}

#[test]
fn panel_count_is_minimal_for_worst_month() {
    let potential = lagos_potential();
    let sizing = size_system(&potential, &design()).unwrap();
    let n = f64::from(sizing.panel_count);
    assert!(n * potential.min() >= 10.0);
    assert!((n - 1.0) * potential.min() < 10.0);
}

#[test]
fn battery_count_grows_with_autonomy() {
    let potential = lagos_potential();
    let mut previous = 0;
    for days in [0.0, 1.0, 2.0, 3.0, 5.0] {
        let input = SizingInput {
            autonomy_days: days,
            ..design()
        };
        let sizing = size_system(&potential, &input).unwrap();
        assert!(sizing.battery_count >= previous, "autonomy {days}");
        previous = sizing.battery_count;
    }
}

#[test]
fn battery_capacity_shrinks_with_better_battery() {
    let potential = lagos_potential();
    let capacity = |input: SizingInput| {
        size_system(&potential, &input)
            .unwrap()
            .total_battery_capacity_ah
    };
    let base = capacity(design());
    assert!(capacity(SizingInput { battery_voltage_v: 24.0, ..design() }) <= base);
    assert!(capacity(SizingInput { depth_of_discharge_pct: 80.0, ..design() }) <= base);
    assert!(capacity(SizingInput { battery_efficiency_pct: 100.0, ..design() }) <= base);
    assert!(capacity(SizingInput { daily_target_kwh: 20.0, ..design() }) >= base);
}

#[test]
fn zero_autonomy_needs_no_batteries() {
    let input = SizingInput {
        autonomy_days: 0.0,
        ..design()
    };
    let sizing = size_system(&lagos_potential(), &input).unwrap();
    assert_eq!(sizing.battery_count, 0);
    assert_eq!(sizing.total_battery_capacity_ah, 0.0);
}

#[test]
fn zero_divisors_are_reported() {
    let potential = lagos_potential();
    let zero_voltage = SizingInput {
        battery_voltage_v: 0.0,
        ..design()
    };
    assert_eq!(
        size_system(&potential, &zero_voltage).unwrap_err(),
        PvCalcError::DivisionByZero("battery voltage")
    );
    let zero_dod = SizingInput {
        depth_of_discharge_pct: 0.0,
        ..design()
    };
    assert!(matches!(
        size_system(&potential, &zero_dod),
        Err(PvCalcError::DivisionByZero(_))
    ));
    let zero_efficiency = SizingInput {
        battery_efficiency_pct: 0.0,
        ..design()
    };
    assert_eq!(
        size_system(&potential, &zero_efficiency).unwrap_err(),
        PvCalcError::DivisionByZero("battery efficiency")
    );
    let zero_unit = SizingInput {
        battery_capacity_ah: 0.0,
        ..design()
    };
    assert_eq!(
        size_system(&potential, &zero_unit).unwrap_err(),
        PvCalcError::DivisionByZero("battery capacity")
    );
    let flat = MonthlySeries::from_fn(|_| 0.0);
    assert!(matches!(
        size_system(&flat, &design()),
        Err(PvCalcError::DivisionByZero(_))
    ));
}

#[test]
fn counts_beyond_u32_are_rejected() {
    let tiny_panel = PanelSpec {
        length_m: 0.001,
        width_m: 0.001,
        efficiency_pct: 0.01,
        inverter_efficiency_pct: 1.0,
    };
    let potential = compute_monthly_potential(&tiny_panel, "Lagos").unwrap();
    assert_eq!(
        size_system(&potential, &design()).unwrap_err(),
        PvCalcError::InvalidDimension {
            field: "panel count",
            value: 10.0 / potential.min(),
        }
    );

    let tiny_battery = SizingInput {
        battery_capacity_ah: 1e-7,
        ..design()
    };
    let err = size_system(&lagos_potential(), &tiny_battery).unwrap_err();
    assert!(
        matches!(err, PvCalcError::InvalidDimension { field: "battery count", .. }),
        "{err:?}"
    );
}

#[test]
fn non_positive_target_is_rejected() {
    let input = SizingInput {
        daily_target_kwh: 0.0,
        ..design()
    };
    assert!(matches!(
        size_system(&lagos_potential(), &input),
        Err(PvCalcError::InvalidDimension { .. })
    ));
}

#[test]
fn generation_multiplies_days_and_panels() {
    let potential = lagos_potential();
    let generation = monthly_generation(8, &potential);
    let feb = 8.0 * potential.get(Month::February) * 28.0;
    assert!((generation.get(Month::February) - feb).abs() < 1e-9);
    assert_eq!(monthly_generation(0, &potential).sum(), 0.0);
}

#[test]
fn summaries_read_like_labels() {
    let sizing = size_system(&lagos_potential(), &design()).unwrap();
    assert_eq!(sizing.panel_summary(1.6, 1.0), "8 panels (1.6m x 1m)");
    assert_eq!(
        sizing.battery_summary(200.0, 12.0),
        "18 batteries (Rating: 200Ah, 12V)"
    );
}

//! 연도별 비용 시뮬레이션 테스트.
use yellow_sun_toolbox::pv::{
    project_costs, ComponentCosts, CostParameters, PvCalcError, SystemSizing,
};

fn sizing() -> SystemSizing {
    SystemSizing {
        panel_count: 8,
        battery_count: 18,
        total_battery_capacity_ah: 3509.0,
    }
}

fn params() -> CostParameters {
    CostParameters {
        procurement: ComponentCosts {
            per_panel: 50_000.0,
            controller: 20_000.0,
            inverter: 100_000.0,
            per_battery: 60_000.0,
            misc: 10_000.0,
        },
        installation: ComponentCosts {
            per_panel: 5_000.0,
            controller: 2_000.0,
            inverter: 5_000.0,
            per_battery: 3_000.0,
            misc: 5_000.0,
        },
        maintenance: ComponentCosts {
            per_panel: 500.0,
            controller: 500.0,
            inverter: 1_000.0,
            per_battery: 500.0,
            misc: 500.0,
        },
        maintenance_visits_per_year: 2.0,
        warranty_years: 2,
        grid_rate_per_kwh: 50.0,
        inflation_rate_pct: 10.0,
        years: 10,
        daily_target_kwh: 10.0,
    }
}

#[test]
fn grid_cost_compounds_with_inflation() {
    let p = project_costs(&sizing(), &params()).expect("projection");
    assert_eq!(p.records.len(), 10);
    assert!((p.records[0].grid_cost - 182_500.0).abs() < 1e-6);
    assert!((p.records[1].grid_cost - 200_750.0).abs() < 1e-6);
    for pair in p.records.windows(2) {
        let ratio = pair[1].grid_cost / pair[0].grid_cost;
        assert!((ratio - 1.1).abs() < 1e-12, "year {}: {ratio}", pair[1].year);
    }
}

#[test]
fn commissioning_cost_lands_in_first_year() {
    let p = project_costs(&sizing(), &params()).unwrap();
    // 조달 8×50k + 20k + 100k + 18×60k + 10k, 설치 8×5k + 2k + 5k + 18×3k + 5k
    assert_eq!(p.total_procurement_cost, 1_610_000.0);
    assert_eq!(p.total_installation_cost, 106_000.0);
    assert_eq!(p.commission_cost, 1_716_000.0);
    assert_eq!(p.records[0].pv_cost, p.commission_cost);
    assert_eq!(p.records[1].pv_cost, 0.0);
}

#[test]
fn maintenance_uses_absolute_year_exponent() {
    let p = project_costs(&sizing(), &params()).unwrap();
    // (8×500 + 500 + 1000 + 18×500 + 500) × 2
    assert_eq!(p.annual_maintenance_base, 30_000.0);
    let expected = 30_000.0 * 1.1_f64.powi(2);
    assert!((p.records[2].pv_cost - expected).abs() < 1e-6);
}

#[test]
fn cumulative_columns_are_running_sums() {
    let p = project_costs(&sizing(), &params()).unwrap();
    let mut pv = 0.0;
    let mut grid = 0.0;
    for r in &p.records {
        pv += r.pv_cost;
        grid += r.grid_cost;
        assert_eq!(r.cumulative_pv_cost, pv);
        assert_eq!(r.cumulative_grid_cost, grid);
    }
    assert_eq!(p.total_pv_cost(), pv);
    assert_eq!(p.total_grid_cost(), grid);
    assert_eq!(p.savings(), grid - pv);
}

#[test]
fn single_year_horizon_is_commission_only() {
    let params = CostParameters {
        years: 1,
        ..params()
    };
    let p = project_costs(&sizing(), &params).unwrap();
    assert_eq!(p.records.len(), 1);
    assert_eq!(p.records[0].year, 1);
    assert_eq!(p.records[0].pv_cost, p.commission_cost);
}

#[test]
fn no_warranty_charges_maintenance_from_year_one() {
    let params = CostParameters {
        warranty_years: 0,
        ..params()
    };
    let p = project_costs(&sizing(), &params).unwrap();
    assert_eq!(p.records[0].pv_cost, p.commission_cost + 30_000.0);
    assert!((p.records[1].pv_cost - 33_000.0).abs() < 1e-6);
}

#[test]
fn warranty_longer_than_horizon_means_no_maintenance() {
    let params = CostParameters {
        warranty_years: 15,
        ..params()
    };
    let p = project_costs(&sizing(), &params).unwrap();
    assert!(p.records[1..].iter().all(|r| r.pv_cost == 0.0));
    assert_eq!(p.total_pv_cost(), p.commission_cost);
}

#[test]
fn break_even_is_first_year_pv_is_cheaper() {
    let p = project_costs(&sizing(), &params()).unwrap();
    let year = p.break_even_year().expect("breaks even within 10 years");
    let r = &p.records[(year - 1) as usize];
    assert!(r.cumulative_pv_cost <= r.cumulative_grid_cost);
    if year > 1 {
        let prev = &p.records[(year - 2) as usize];
        assert!(prev.cumulative_pv_cost > prev.cumulative_grid_cost);
    }
}

#[test]
fn zero_year_horizon_is_rejected() {
    let params = CostParameters {
        years: 0,
        ..params()
    };
    assert_eq!(
        project_costs(&sizing(), &params).unwrap_err(),
        PvCalcError::InvalidHorizon(0)
    );
}

#[test]
fn negative_tariff_is_rejected() {
    let params = CostParameters {
        grid_rate_per_kwh: -1.0,
        ..params()
    };
    assert!(matches!(
        project_costs(&sizing(), &params),
        Err(PvCalcError::InvalidDimension { .. })
    ));
}

//! 월별 PV 잠재량 회귀 테스트.
use yellow_sun_toolbox::pv::{compute_monthly_potential, PanelSpec, PvCalcError};
use yellow_sun_toolbox::solar_db::Month;

fn reference_panel() -> PanelSpec {
    PanelSpec {
        length_m: 1.6,
        width_m: 1.0,
        efficiency_pct: 20.0,
        inverter_efficiency_pct: 95.0,
    }
}

#[test]
fn lagos_january_matches_hand_calculation() {
    let s = compute_monthly_potential(&reference_panel(), "Lagos").expect("lagos");
    // 4.74 × 1.6 × 0.20 × 0.95 × 0.95
    let jan = s.get(Month::January);
    assert!((jan - 1.368_912).abs() < 1e-6);
    assert!((jan - 1.3665).abs() < 5e-3);
    assert_eq!(s.values().len(), 12);
    assert!(s.values().iter().all(|v| *v > 0.0));
}

#[test]
fn potential_scales_with_panel_area() {
    let base = compute_monthly_potential(&reference_panel(), "Kano").unwrap();
    let mut big = reference_panel();
    big.length_m *= 2.0;
    let doubled = compute_monthly_potential(&big, "Kano").unwrap();
    for (m, v) in base.iter() {
        assert!((doubled.get(m) - 2.0 * v).abs() < 1e-9, "{m}");
    }
}

#[test]
fn potential_is_linear_in_both_efficiencies() {
    let base = compute_monthly_potential(&reference_panel(), "Oyo").unwrap();
    let mut half_panel = reference_panel();
    half_panel.efficiency_pct = 10.0;
    let mut half_inverter = reference_panel();
    half_inverter.inverter_efficiency_pct = 47.5;
    let a = compute_monthly_potential(&half_panel, "Oyo").unwrap();
    let b = compute_monthly_potential(&half_inverter, "Oyo").unwrap();
    assert!((a.sum() - base.sum() / 2.0).abs() < 1e-9);
    assert!((b.sum() - base.sum() / 2.0).abs() < 1e-9);
}

#[test]
fn month_ratio_follows_irradiance_factor() {
    let s = compute_monthly_potential(&reference_panel(), "Sokoto").unwrap();
    let ratio = s.get(Month::July) / s.get(Month::January);
    assert!((ratio - Month::July.factor() / Month::January.factor()).abs() < 1e-12);
}

#[test]
fn zero_efficiency_gives_zero_series() {
    let mut p = reference_panel();
    p.efficiency_pct = 0.0;
    let s = compute_monthly_potential(&p, "Lagos").unwrap();
    assert_eq!(s.sum(), 0.0);
}

#[test]
fn unknown_region_is_rejected() {
    let err = compute_monthly_potential(&reference_panel(), "Atlantis").unwrap_err();
    assert_eq!(err, PvCalcError::InvalidRegion("Atlantis".into()));
}

#[test]
fn negative_dimension_is_rejected() {
    let mut p = reference_panel();
    p.width_m = -1.0;
    let err = compute_monthly_potential(&p, "Lagos").unwrap_err();
    assert!(matches!(err, PvCalcError::InvalidDimension { .. }), "{err:?}");
}

#[test]
fn efficiency_above_hundred_is_rejected() {
    let mut p = reference_panel();
    p.inverter_efficiency_pct = 120.0;
    assert!(compute_monthly_potential(&p, "Lagos").is_err());
}

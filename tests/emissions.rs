//! 탄소 배출 비교 테스트.
use yellow_sun_toolbox::pv::{compare_emissions, PvCalcError};

#[test]
fn ten_year_reference_totals() {
    let r = compare_emissions(10, 10.0).expect("emissions");
    // 10 kWh × 402 g × 3650 일 / 1000
    assert!((r.total_grid_kgco2 - 14_673.0).abs() < 1e-6);
    assert!((r.total_solar_kgco2 - 1_496.5).abs() < 1e-6);
    assert!((r.avoided_kgco2() - 13_176.5).abs() < 1e-6);
}

#[test]
fn grid_to_solar_ratio_is_constant() {
    for (years, energy) in [(1, 0.5), (7, 12.0), (25, 300.0)] {
        let r = compare_emissions(years, energy).unwrap();
        let ratio = r.total_grid_kgco2 / r.total_solar_kgco2;
        assert!((ratio / (402.0 / 41.0) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn shares_add_up_to_hundred() {
    let r = compare_emissions(3, 4.0).unwrap();
    assert!((r.grid_share_pct() + r.solar_share_pct() - 100.0).abs() < 1e-9);
    assert!(r.grid_share_pct() > r.solar_share_pct());
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(
        compare_emissions(0, 10.0).unwrap_err(),
        PvCalcError::InvalidHorizon(0)
    );
    assert!(matches!(
        compare_emissions(5, -2.0),
        Err(PvCalcError::InvalidDimension { .. })
    ));
}

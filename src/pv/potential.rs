use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{percent_to_fraction, require_positive, PvCalcError, Result};
use crate::solar_db::{self, Month};

/// 패널 1장의 형상/효율 입력.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSpec {
    /// 패널 길이 [m]
    pub length_m: f64,
    /// 패널 폭 [m]
    pub width_m: f64,
    /// 패널 효율 [%]
    pub efficiency_pct: f64,
    /// 인버터 효율 [%]
    pub inverter_efficiency_pct: f64,
}

impl PanelSpec {
    /// 패널 면적 [m²]
    pub fn area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }
}

/// 달력 순서(1~12월)의 월별 값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    values: [f64; 12],
}

impl MonthlySeries {
    pub fn from_fn(mut f: impl FnMut(Month) -> f64) -> Self {
        let mut values = [0.0; 12];
        for month in Month::ALL {
            values[month.index()] = f(month);
        }
        Self { values }
    }

    pub fn get(&self, month: Month) -> f64 {
        self.values[month.index()]
    }

    pub fn values(&self) -> &[f64; 12] {
        &self.values
    }

    /// (월, 값) 쌍을 달력 순서로 순회한다.
    pub fn iter(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        Month::ALL.iter().map(move |m| (*m, self.values[m.index()]))
    }

    /// 최악의 달 값.
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// 패널 1장의 월별 일 발전 가능량 [kWh/day]을 계산한다.
///
/// `GHI × 면적 × 패널효율 × 인버터효율 × 월별계수`
pub fn compute_monthly_potential(panel: &PanelSpec, region: &str) -> Result<MonthlySeries> {
    let ghi = solar_db::irradiance(region).ok_or_else(|| {
        tracing::warn!(region, "unknown region");
        PvCalcError::InvalidRegion(region.to_string())
    })?;
    let length = require_positive("panel length", panel.length_m)?;
    let width = require_positive("panel width", panel.width_m)?;
    let eff_panel = percent_to_fraction("panel efficiency", panel.efficiency_pct)?;
    let eff_inverter = percent_to_fraction("inverter efficiency", panel.inverter_efficiency_pct)?;

    let base = ghi * (length * width) * eff_panel * eff_inverter;
    let series = MonthlySeries::from_fn(|m| base * m.factor());
    debug!(region, ghi, base, min = series.min(), "monthly potential computed");
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_min_max_sum() {
        let s = MonthlySeries::from_fn(|m| m.index() as f64);
        assert_eq!(s.min(), 0.0);
        assert_eq!(s.max(), 11.0);
        assert_eq!(s.sum(), 66.0);
        assert_eq!(s.get(Month::March), 2.0);
        assert_eq!(s.iter().count(), 12);
    }
}

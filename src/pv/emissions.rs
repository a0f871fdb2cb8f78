use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{require_positive, PvCalcError, Result};

/// 계통 전력 배출계수 [gCO2/kWh]
pub const GRID_CARBON_FACTOR_G_PER_KWH: f64 = 402.0;
/// 태양광 전과정 배출계수 [gCO2/kWh]
pub const SOLAR_CARBON_FACTOR_G_PER_KWH: f64 = 41.0;

/// 기간 누적 탄소 배출 비교 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionsResult {
    pub years: u32,
    /// 계통 전력 누적 배출 [kgCO2]
    pub total_grid_kgco2: f64,
    /// 태양광 누적 배출 [kgCO2]
    pub total_solar_kgco2: f64,
}

impl EmissionsResult {
    /// 원형 차트용 계통 비중 [%]
    pub fn grid_share_pct(&self) -> f64 {
        share(self.total_grid_kgco2, self.total_solar_kgco2)
    }

    pub fn solar_share_pct(&self) -> f64 {
        share(self.total_solar_kgco2, self.total_grid_kgco2)
    }

    /// 태양광 전환으로 줄어드는 배출량 [kgCO2]
    pub fn avoided_kgco2(&self) -> f64 {
        self.total_grid_kgco2 - self.total_solar_kgco2
    }
}

fn share(part: f64, other: f64) -> f64 {
    let total = part + other;
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// 일 에너지 사용량 기준으로 N년간 계통/태양광 배출량을 계산한다.
pub fn compare_emissions(years: u32, daily_energy_kwh: f64) -> Result<EmissionsResult> {
    if years == 0 {
        tracing::warn!("rejected zero-year emissions horizon");
        return Err(PvCalcError::InvalidHorizon(years));
    }
    let energy = require_positive("daily target energy", daily_energy_kwh)?;

    // g -> kg
    let grid_daily_kg = energy * GRID_CARBON_FACTOR_G_PER_KWH / 1000.0;
    let solar_daily_kg = energy * SOLAR_CARBON_FACTOR_G_PER_KWH / 1000.0;
    let days = 365.0 * f64::from(years);

    let result = EmissionsResult {
        years,
        total_grid_kgco2: grid_daily_kg * days,
        total_solar_kgco2: solar_daily_kg * days,
    };
    debug!(
        years,
        grid = result.total_grid_kgco2,
        solar = result.total_solar_kgco2,
        "emissions compared"
    );
    Ok(result)
}

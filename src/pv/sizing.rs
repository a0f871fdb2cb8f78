use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{
    percent_to_fraction, require_divisor, require_non_negative, require_positive, PvCalcError,
    Result,
};
use super::potential::MonthlySeries;

/// 시스템 설계 입력.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingInput {
    /// 일 목표 에너지 [kWh]
    pub daily_target_kwh: f64,
    /// 무일조 자립 일수
    pub autonomy_days: f64,
    /// 배터리 전압 [V]
    pub battery_voltage_v: f64,
    /// 방전 심도 [%]
    pub depth_of_discharge_pct: f64,
    /// 배터리 왕복 효율 [%]
    pub battery_efficiency_pct: f64,
    /// 배터리 1개 정격 용량 [Ah]
    pub battery_capacity_ah: f64,
}

/// 설계 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemSizing {
    pub panel_count: u32,
    pub battery_count: u32,
    /// 필요한 배터리 뱅크 총 용량 [Ah] (정수로 올림)
    pub total_battery_capacity_ah: f64,
}

impl SystemSizing {
    /// "12 panels (1.6m x 1m)" 형태의 요약.
    pub fn panel_summary(&self, length_m: f64, width_m: f64) -> String {
        format!("{} panels ({length_m}m x {width_m}m)", self.panel_count)
    }

    pub fn battery_summary(&self, capacity_ah: f64, voltage_v: f64) -> String {
        format!(
            "{} batteries (Rating: {capacity_ah}Ah, {voltage_v}V)",
            self.battery_count
        )
    }
}

/// 최악의 달 발전량 기준으로 패널 수와 배터리 뱅크를 산정한다.
pub fn size_system(potential: &MonthlySeries, input: &SizingInput) -> Result<SystemSizing> {
    let daily = require_positive("daily target energy", input.daily_target_kwh)?;
    let autonomy = require_non_negative("autonomy days", input.autonomy_days)?;
    let voltage = require_divisor("battery voltage", input.battery_voltage_v)?;
    let dod = percent_to_fraction("depth of discharge", input.depth_of_discharge_pct)?;
    let eff = percent_to_fraction("battery efficiency", input.battery_efficiency_pct)?;
    let dod = require_divisor("depth of discharge", dod)?;
    let eff = require_divisor("battery efficiency", eff)?;
    let unit_ah = require_divisor("battery capacity", input.battery_capacity_ah)?;
    let worst = require_divisor("minimum monthly potential", potential.min())?;

    let panel_count = ceil_count("panel count", daily / worst)?;

    // kWh -> Wh 후 전압으로 나누어 Ah
    let total_battery_capacity_ah =
        (daily * autonomy * 1000.0 / voltage * (1.0 / eff) * (1.0 / dod)).ceil();
    let battery_count = ceil_count("battery count", total_battery_capacity_ah / unit_ah)?;

    debug!(panel_count, battery_count, total_battery_capacity_ah, "system sized");
    Ok(SystemSizing {
        panel_count,
        battery_count,
        total_battery_capacity_ah,
    })
}

/// 설계된 시스템의 월별 총 발전량 [kWh/month].
pub fn monthly_generation(panel_count: u32, potential: &MonthlySeries) -> MonthlySeries {
    MonthlySeries::from_fn(|m| f64::from(panel_count) * potential.get(m) * f64::from(m.days()))
}

/// 올림한 개수가 u32 범위를 넘으면 `InvalidDimension`.
fn ceil_count(field: &'static str, ratio: f64) -> Result<u32> {
    let c = ratio.ceil();
    if c.is_finite() && c <= f64::from(u32::MAX) {
        Ok(c as u32)
    } else {
        tracing::warn!(field, ratio, "count out of range");
        Err(PvCalcError::InvalidDimension { field, value: ratio })
    }
}


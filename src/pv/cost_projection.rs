use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{
    percent_to_fraction, require_non_negative, require_positive, PvCalcError, Result,
};
use super::sizing::SystemSizing;

/// 구성품별 비용 묶음. 조달/설치/유지보수에 동일한 형태로 쓴다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentCosts {
    /// 패널 1장당 비용
    pub per_panel: f64,
    /// 충전 컨트롤러
    pub controller: f64,
    pub inverter: f64,
    /// 배터리 1개당 비용
    pub per_battery: f64,
    /// 기타
    pub misc: f64,
}

impl ComponentCosts {
    /// 수량을 반영한 합계.
    pub fn total(&self, panel_count: u32, battery_count: u32) -> f64 {
        self.per_panel * f64::from(panel_count)
            + self.controller
            + self.inverter
            + self.per_battery * f64::from(battery_count)
            + self.misc
    }

    fn validate(&self, group: &'static str) -> Result<()> {
        for value in [
            self.per_panel,
            self.controller,
            self.inverter,
            self.per_battery,
            self.misc,
        ] {
            require_non_negative(group, value)?;
        }
        Ok(())
    }
}

/// 비용 시뮬레이션 입력.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostParameters {
    pub procurement: ComponentCosts,
    pub installation: ComponentCosts,
    /// 1회 방문당 유지보수 비용
    pub maintenance: ComponentCosts,
    /// 연간 유지보수 방문 횟수
    pub maintenance_visits_per_year: f64,
    /// 보증 기간 [년]. 이 기간 동안 유지보수비는 0
    pub warranty_years: u32,
    /// 계통 전력 요금 [통화/kWh]
    pub grid_rate_per_kwh: f64,
    /// 연간 물가상승률 [%]
    pub inflation_rate_pct: f64,
    /// 시뮬레이션 기간 [년]
    pub years: u32,
    /// 일 목표 에너지 [kWh]
    pub daily_target_kwh: f64,
}

/// 한 해의 비용 기록.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyCostRecord {
    /// 1부터 시작
    pub year: u32,
    pub pv_cost: f64,
    pub grid_cost: f64,
    pub cumulative_pv_cost: f64,
    pub cumulative_grid_cost: f64,
}

/// 비용 시뮬레이션 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostProjection {
    pub total_procurement_cost: f64,
    pub total_installation_cost: f64,
    /// 조달 + 설치, 1년차에만 반영
    pub commission_cost: f64,
    /// 물가 반영 전 연간 유지보수비
    pub annual_maintenance_base: f64,
    pub records: Vec<YearlyCostRecord>,
}

impl CostProjection {
    pub fn total_pv_cost(&self) -> f64 {
        self.records.last().map_or(0.0, |r| r.cumulative_pv_cost)
    }

    pub fn total_grid_cost(&self) -> f64 {
        self.records.last().map_or(0.0, |r| r.cumulative_grid_cost)
    }

    /// 기간 전체의 계통 대비 절감액. 음수면 PV가 더 비싸다.
    pub fn savings(&self) -> f64 {
        self.total_grid_cost() - self.total_pv_cost()
    }

    /// 누적 PV 비용이 누적 계통 비용 이하가 되는 첫 해.
    pub fn break_even_year(&self) -> Option<u32> {
        self.records
            .iter()
            .find(|r| r.cumulative_pv_cost <= r.cumulative_grid_cost)
            .map(|r| r.year)
    }
}

/// PV 시스템과 계통 전력의 연도별 비용을 시뮬레이션한다.
///
/// - 계통 비용: 1년차 `일목표 × 요금 × 365`, 이후 매년 물가상승률만큼 복리 증가.
/// - PV 비용: 보증 기간 내 0, 이후 `연간유지보수비 × (1+물가)^i`.
///   지수 `i`는 보증 종료 후 경과 연수가 아니라 0부터 센 절대 연차다.
/// - 1년차 PV 비용에는 커미셔닝 비용(조달+설치)을 더한다.
pub fn project_costs(sizing: &SystemSizing, params: &CostParameters) -> Result<CostProjection> {
    if params.years == 0 {
        tracing::warn!("rejected zero-year cost projection");
        return Err(PvCalcError::InvalidHorizon(params.years));
    }
    params.procurement.validate("procurement cost")?;
    params.installation.validate("installation cost")?;
    params.maintenance.validate("maintenance cost")?;
    let visits = require_non_negative("maintenance visits", params.maintenance_visits_per_year)?;
    let grid_rate = require_non_negative("grid rate", params.grid_rate_per_kwh)?;
    let inflation = percent_to_fraction("inflation rate", params.inflation_rate_pct)?;
    let daily = require_positive("daily target energy", params.daily_target_kwh)?;

    let panels = sizing.panel_count;
    let batteries = sizing.battery_count;
    let total_procurement_cost = params.procurement.total(panels, batteries);
    let total_installation_cost = params.installation.total(panels, batteries);
    let commission_cost = total_procurement_cost + total_installation_cost;
    let annual_maintenance_base = params.maintenance.total(panels, batteries) * visits;

    let growth = 1.0 + inflation;
    let mut records = Vec::with_capacity(params.years as usize);
    let mut grid_cost = daily * grid_rate * 365.0;
    let mut cumulative_pv_cost = 0.0;
    let mut cumulative_grid_cost = 0.0;

    for i in 0..params.years {
        if i > 0 {
            grid_cost *= growth;
        }
        let mut pv_cost = if i < params.warranty_years {
            0.0
        } else {
            escalate(annual_maintenance_base, growth, i)
        };
        if i == 0 {
            pv_cost += commission_cost;
        }
        cumulative_pv_cost += pv_cost;
        cumulative_grid_cost += grid_cost;
        records.push(YearlyCostRecord {
            year: i + 1,
            pv_cost,
            grid_cost,
            cumulative_pv_cost,
            cumulative_grid_cost,
        });
    }

    debug!(
        years = params.years,
        commission_cost,
        annual_maintenance_base,
        total_pv = cumulative_pv_cost,
        total_grid = cumulative_grid_cost,
        "cost projection complete"
    );
    Ok(CostProjection {
        total_procurement_cost,
        total_installation_cost,
        commission_cost,
        annual_maintenance_base,
        records,
    })
}

/// `base × growth^year`. 지수는 u32 전체 범위에서 음수로 바뀌지 않는다.
fn escalate(base: f64, growth: f64, year: u32) -> f64 {
    base * growth.powf(f64::from(year))
}

//! 발전량 → 설계 → 비용/배출까지 한 번에 계산하는 파이프라인.

use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::pv::{
    compare_emissions, compute_monthly_potential, monthly_generation, project_costs, size_system,
    CostProjection, EmissionsResult, MonthlySeries, PvCalcError, Result, SystemSizing,
};
use crate::solar_db;

/// 전체 분석 결과.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub region: String,
    pub ghi_kwh_m2_day: f64,
    /// 패널 1장의 월별 일 발전 가능량 [kWh/day]
    pub potential: MonthlySeries,
    pub sizing: SystemSizing,
    /// 설계 시스템의 월별 총 발전량 [kWh/month]
    pub generation: MonthlySeries,
    pub costs: CostProjection,
    pub emissions: EmissionsResult,
}

/// 설정값만으로 모든 계산기를 순서대로 실행한다. 각 단계는 이전 결과를 그대로 넘겨받는다.
pub fn run_analysis(cfg: &Config) -> Result<Analysis> {
    let region = solar_db::find_region(&cfg.panel.region)
        .ok_or_else(|| PvCalcError::InvalidRegion(cfg.panel.region.clone()))?;
    info!(region = region.name, "running full PV analysis");

    let potential = compute_monthly_potential(&cfg.panel.panel_spec(), region.name)?;
    let sizing = size_system(&potential, &cfg.design.sizing_input())?;
    let generation = monthly_generation(sizing.panel_count, &potential);
    let costs = project_costs(
        &sizing,
        &cfg.costs.cost_parameters(cfg.design.daily_target_kwh),
    )?;
    let emissions = compare_emissions(cfg.emissions.years, cfg.emissions.daily_energy_kwh)?;

    Ok(Analysis {
        region: region.name.to_string(),
        ghi_kwh_m2_day: region.ghi_kwh_m2_day,
        potential,
        sizing,
        generation,
        costs,
        emissions,
    })
}

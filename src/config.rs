use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::pv::{ComponentCosts, CostParameters, PanelSpec, SizingInput};

/// 기본 설정 파일 이름.
pub const CONFIG_FILE: &str = "config.toml";

/// 패널/지역 공통 입력 기본값.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelDefaults {
    pub length_m: f64,
    pub width_m: f64,
    pub efficiency_pct: f64,
    pub inverter_efficiency_pct: f64,
    pub region: String,
}

impl Default for PanelDefaults {
    fn default() -> Self {
        Self {
            length_m: 1.6,
            width_m: 1.0,
            efficiency_pct: 20.0,
            inverter_efficiency_pct: 95.0,
            region: "Lagos".to_string(),
        }
    }
}

impl PanelDefaults {
    pub fn panel_spec(&self) -> PanelSpec {
        PanelSpec {
            length_m: self.length_m,
            width_m: self.width_m,
            efficiency_pct: self.efficiency_pct,
            inverter_efficiency_pct: self.inverter_efficiency_pct,
        }
    }
}

/// 시스템 설계 입력 기본값.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignDefaults {
    pub daily_target_kwh: f64,
    pub autonomy_days: f64,
    pub battery_voltage_v: f64,
    pub depth_of_discharge_pct: f64,
    pub battery_efficiency_pct: f64,
    pub battery_capacity_ah: f64,
}

impl Default for DesignDefaults {
    fn default() -> Self {
        Self {
            daily_target_kwh: 10.0,
            autonomy_days: 2.0,
            battery_voltage_v: 12.0,
            depth_of_discharge_pct: 50.0,
            battery_efficiency_pct: 95.0,
            battery_capacity_ah: 200.0,
        }
    }
}

impl DesignDefaults {
    pub fn sizing_input(&self) -> SizingInput {
        SizingInput {
            daily_target_kwh: self.daily_target_kwh,
            autonomy_days: self.autonomy_days,
            battery_voltage_v: self.battery_voltage_v,
            depth_of_discharge_pct: self.depth_of_discharge_pct,
            battery_efficiency_pct: self.battery_efficiency_pct,
            battery_capacity_ah: self.battery_capacity_ah,
        }
    }
}

/// 비용 시뮬레이션 기본값(나이라 기준).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CostDefaults {
    pub procurement: ComponentCosts,
    pub installation: ComponentCosts,
    pub maintenance: ComponentCosts,
    pub maintenance_visits_per_year: f64,
    pub warranty_years: u32,
    pub grid_rate_per_kwh: f64,
    pub inflation_rate_pct: f64,
    pub years: u32,
}

impl Default for CostDefaults {
    fn default() -> Self {
        Self {
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
        }
    }
}

impl CostDefaults {
    /// 설계 단계의 일 목표 에너지를 합쳐 시뮬레이션 입력을 만든다.
    pub fn cost_parameters(&self, daily_target_kwh: f64) -> CostParameters {
        CostParameters {
            procurement: self.procurement,
            installation: self.installation,
            maintenance: self.maintenance,
            maintenance_visits_per_year: self.maintenance_visits_per_year,
            warranty_years: self.warranty_years,
            grid_rate_per_kwh: self.grid_rate_per_kwh,
            inflation_rate_pct: self.inflation_rate_pct,
            years: self.years,
            daily_target_kwh,
        }
    }
}

/// 탄소 배출 비교 기본값.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionsDefaults {
    pub years: u32,
    pub daily_energy_kwh: f64,
}

impl Default for EmissionsDefaults {
    fn default() -> Self {
        Self {
            years: 10,
            daily_energy_kwh: 10.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 화면 표시용 통화 기호
    pub currency: String,
    /// tracing 필터 문자열(RUST_LOG가 있으면 그쪽 우선)
    pub log_level: String,
    pub panel: PanelDefaults,
    pub design: DesignDefaults,
    pub costs: CostDefaults,
    pub emissions: EmissionsDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "₦".to_string(),
            log_level: "info".to_string(),
            panel: PanelDefaults::default(),
            design: DesignDefaults::default(),
            costs: CostDefaults::default(),
            emissions: EmissionsDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 작업 디렉터리의 config.toml을 읽거나, 없으면 기본 설정을 돌려준다.
/// 파일을 새로 만들지는 않는다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        load_from(path)
    } else {
        tracing::debug!("no {CONFIG_FILE} found, using built-in defaults");
        Ok(Config::default())
    }
}

/// 지정한 TOML 파일에서 설정을 읽는다. 빠진 항목은 기본값으로 채운다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(cfg)
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
currency = "NGN"

[panel]
region = "Kano"

[costs.procurement]
per_panel = 65000.0
"#,
        )
        .unwrap();
        assert_eq!(cfg.currency, "NGN");
        assert_eq!(cfg.panel.region, "Kano");
        assert_eq!(cfg.panel.length_m, 1.6);
        assert_eq!(cfg.costs.procurement.per_panel, 65_000.0);
        assert_eq!(cfg.costs.procurement.inverter, 0.0);
        assert_eq!(cfg.costs.years, 10);
        assert_eq!(cfg.design.battery_capacity_ah, 200.0);
    }

    #[test]
    fn defaults_serialize_to_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.costs.maintenance.inverter, 1_000.0);
        assert_eq!(back.emissions.years, 10);
    }
}

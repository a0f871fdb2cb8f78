//! 결과 표 출력 및 파일 내보내기(CSV/TOML).

use serde::Serialize;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::analysis::Analysis;
use crate::config::Config;
use crate::pv::{CostProjection, EmissionsResult, MonthlySeries};

/// 보고서 내보내기 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
    #[error("TOML export error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// 천 단위 구분 기호와 소수 둘째 자리까지 표시한다. (예: 1,234,567.89)
pub fn format_amount(value: f64) -> String {
    let text = format!("{:.2}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && text != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// 통화 기호를 붙인 금액.
pub fn format_money(currency: &str, value: f64) -> String {
    if value < 0.0 {
        format!("-{currency}{}", format_amount(-value))
    } else {
        format!("{currency}{}", format_amount(value))
    }
}

/// 월별 값을 `Month  value unit` 형태의 표로 만든다.
pub fn monthly_table(series: &MonthlySeries, header: &str, unit: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10} {:>14}", "Month", header);
    for (month, value) in series.iter() {
        let _ = writeln!(out, "{:<10} {:>14.4} {unit}", month.name(), value);
    }
    out
}

/// 연도별 비용 표.
pub fn cost_table(projection: &CostProjection, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4} {:>18} {:>18} {:>20} {:>20}",
        "Year", "PV Cost", "Grid Cost", "Cumulative PV", "Cumulative Grid"
    );
    for r in &projection.records {
        let _ = writeln!(
            out,
            "{:>4} {:>18} {:>18} {:>20} {:>20}",
            r.year,
            format_money(currency, r.pv_cost),
            format_money(currency, r.grid_cost),
            format_money(currency, r.cumulative_pv_cost),
            format_money(currency, r.cumulative_grid_cost),
        );
    }
    out
}

/// 배출 비교 요약 두 줄.
pub fn emissions_summary(result: &EmissionsResult) -> String {
    format!(
        "Total carbon emissions from Grid Electricity over {years} years: {grid} kgCO₂ ({gs:.1}%)\n\
         Total carbon emissions from PV System's Solar Energy over {years} years: {solar} kgCO₂ ({ss:.1}%)",
        years = result.years,
        grid = format_amount(result.total_grid_kgco2),
        solar = format_amount(result.total_solar_kgco2),
        gs = result.grid_share_pct(),
        ss = result.solar_share_pct(),
    )
}

/// 비용 표를 CSV로 기록한다.
pub fn write_cost_csv<W: Write>(projection: &CostProjection, writer: W) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "Year",
        "PV Cost",
        "Grid Cost",
        "Cumulative PV Cost",
        "Cumulative Grid Cost",
    ])?;
    for r in &projection.records {
        wtr.write_record([
            r.year.to_string(),
            format!("{:.2}", r.pv_cost),
            format!("{:.2}", r.grid_cost),
            format!("{:.2}", r.cumulative_pv_cost),
            format!("{:.2}", r.cumulative_grid_cost),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_cost_csv(projection: &CostProjection, path: &Path) -> Result<(), ReportError> {
    let file = File::create(path)?;
    write_cost_csv(projection, file)?;
    tracing::info!(path = %path.display(), rows = projection.records.len(), "cost table exported");
    Ok(())
}

/// 입력값과 결과를 함께 담는 TOML 보고서.
#[derive(Debug, Serialize)]
pub struct ProjectReport<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub inputs: &'a Config,
    pub results: &'a Analysis,
}

impl<'a> ProjectReport<'a> {
    pub fn new(inputs: &'a Config, results: &'a Analysis) -> Self {
        Self {
            tool: "Yellow Sun Toolbox",
            version: env!("CARGO_PKG_VERSION"),
            inputs,
            results,
        }
    }

    pub fn to_toml(&self) -> Result<String, ReportError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        std::fs::write(path, self.to_toml()?)?;
        tracing::info!(path = %path.display(), "project report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_grouping() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(1000.0), "1,000.00");
        assert_eq!(format_amount(182500.0), "182,500.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-2500.0), "-2,500.00");
    }

    #[test]
    fn money_puts_sign_before_symbol() {
        assert_eq!(format_money("₦", 200750.0), "₦200,750.00");
        assert_eq!(format_money("₦", -5.0), "-₦5.00");
    }
}

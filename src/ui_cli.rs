use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, CostDefaults, DesignDefaults};
use crate::pv::{self, ComponentCosts, PanelSpec, SizingInput};
use crate::report;
use crate::solar_db;

/// 사용법 안내 문구. GUI의 How to Use 탭과 공유한다.
pub const HELP_TEXT: &str = "\
How to use the Yellow Sun Toolbox

1. Panel details and project state are shared by every calculator:
   panel length/width (m), panel efficiency (%), inverter efficiency (%)
   and the Nigerian state where the system will be installed.
2. Monthly PV Potential: daily energy of a single panel for each month.
3. PV System Designer: daily target energy, autonomy days, battery voltage,
   depth of discharge, battery efficiency and battery capacity give the
   number of panels, the number of batteries and the bank capacity.
4. Cost Simulation: procurement, installation and maintenance costs,
   warranty, grid tariff and inflation give annual and cumulative costs of
   the PV system against grid supply.
5. Carbon Emission Matrix: grid vs solar kgCO2 over a number of years.

Press Enter at any prompt to keep the value shown in brackets.";

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Regions,
    Potential,
    Designer,
    CostSimulation,
    Emissions,
    Help,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Yellow Sun Toolbox - PV System Performance Analysis ===");
    println!("1) Monthly PV Potential");
    println!("2) PV System Designer");
    println!("3) Cost Simulation");
    println!("4) Carbon Emission Matrix");
    println!("5) List states");
    println!("6) How to use");
    println!("0) Exit");
    loop {
        let sel = read_line("Select: ")?;
        if let Some(choice) = parse_menu(&sel) {
            return Ok(choice);
        }
        println!("Invalid selection, try again.");
    }
}

fn parse_menu(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::Potential),
        "2" => Some(MenuChoice::Designer),
        "3" => Some(MenuChoice::CostSimulation),
        "4" => Some(MenuChoice::Emissions),
        "5" => Some(MenuChoice::Regions),
        "6" => Some(MenuChoice::Help),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 지역별 GHI 목록을 출력한다.
pub fn handle_regions() {
    println!("\n{:<12} {:>12}", "State", "GHI");
    for r in solar_db::regions() {
        println!("{:<12} {:>8.2} kWh/m²/day", r.name, r.ghi_kwh_m2_day);
    }
}

/// Monthly PV Potential 메뉴를 처리한다.
pub fn handle_potential(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- Monthly PV Potential --");
    let (panel, region) = read_panel(cfg)?;
    let potential = pv::compute_monthly_potential(&panel, &region)?;
    println!("Monthly PV potential for a single panel in {region}:");
    print!("{}", report::monthly_table(&potential, "kWh/day", "kWh"));
    Ok(())
}

/// PV System Designer 메뉴를 처리한다.
pub fn handle_designer(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- PV System Designer --");
    let (panel, region) = read_panel(cfg)?;
    let input = read_design(&cfg.design)?;
    let potential = pv::compute_monthly_potential(&panel, &region)?;
    let sizing = pv::size_system(&potential, &input)?;
    println!(
        "Number of panels: {}",
        sizing.panel_summary(panel.length_m, panel.width_m)
    );
    println!(
        "Number of batteries: {}",
        sizing.battery_summary(input.battery_capacity_ah, input.battery_voltage_v)
    );
    println!(
        "Total battery capacity: {:.0} Ah",
        sizing.total_battery_capacity_ah
    );
    let generation = pv::monthly_generation(sizing.panel_count, &potential);
    println!("Monthly energy generation for the designed system:");
    print!("{}", report::monthly_table(&generation, "kWh/month", "kWh"));
    Ok(())
}

/// Cost Simulation 메뉴를 처리한다.
pub fn handle_cost_simulation(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- Cost Simulation --");
    let (panel, region) = read_panel(cfg)?;
    let input = read_design(&cfg.design)?;
    let params = read_costs(&cfg.costs, &cfg.currency, input.daily_target_kwh)?;

    let potential = pv::compute_monthly_potential(&panel, &region)?;
    let sizing = pv::size_system(&potential, &input)?;
    let projection = pv::project_costs(&sizing, &params)?;

    println!(
        "Commissioning cost: {}",
        report::format_money(&cfg.currency, projection.commission_cost)
    );
    print!("{}", report::cost_table(&projection, &cfg.currency));
    print_cost_summary(&projection, &cfg.currency);

    let path = read_line("Export table to CSV (path, Enter to skip): ")?;
    let path = path.trim();
    if !path.is_empty() {
        report::export_cost_csv(&projection, std::path::Path::new(path))?;
        println!("Saved {path}");
    }
    Ok(())
}

/// Carbon Emission Matrix 메뉴를 처리한다.
pub fn handle_emissions(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- Carbon Emission Matrix --");
    let years = read_u32_or("Number of years", cfg.emissions.years)?;
    let energy = read_f64_or("Daily target energy [kWh]", cfg.emissions.daily_energy_kwh)?;
    let result = pv::compare_emissions(years, energy)?;
    println!("{}", report::emissions_summary(&result));
    Ok(())
}

/// 비용 표 아래에 붙는 합계/손익분기 요약.
pub fn print_cost_summary(projection: &pv::CostProjection, currency: &str) {
    println!(
        "Total PV cost: {}  Total grid cost: {}  Savings: {}",
        report::format_money(currency, projection.total_pv_cost()),
        report::format_money(currency, projection.total_grid_cost()),
        report::format_money(currency, projection.savings()),
    );
    match projection.break_even_year() {
        Some(year) => println!("PV system breaks even in year {year}."),
        None => println!("PV system does not break even within the simulated period."),
    }
}

fn read_panel(cfg: &Config) -> Result<(PanelSpec, String), AppError> {
    let d = &cfg.panel;
    let panel = PanelSpec {
        length_m: read_f64_or("Solar panel length [m]", d.length_m)?,
        width_m: read_f64_or("Solar panel width [m]", d.width_m)?,
        efficiency_pct: read_f64_or("Solar panel efficiency [%]", d.efficiency_pct)?,
        inverter_efficiency_pct: read_f64_or(
            "Inverter efficiency [%]",
            d.inverter_efficiency_pct,
        )?,
    };
    let region = read_string_or("Project state", &d.region)?;
    Ok((panel, region))
}

fn read_design(d: &DesignDefaults) -> Result<SizingInput, AppError> {
    Ok(SizingInput {
        daily_target_kwh: read_f64_or("Daily target energy [kWh]", d.daily_target_kwh)?,
        autonomy_days: read_f64_or("Autonomy days", d.autonomy_days)?,
        battery_voltage_v: read_f64_or("Battery voltage [V]", d.battery_voltage_v)?,
        depth_of_discharge_pct: read_f64_or("Depth of discharge [%]", d.depth_of_discharge_pct)?,
        battery_efficiency_pct: read_f64_or("Battery efficiency [%]", d.battery_efficiency_pct)?,
        battery_capacity_ah: read_f64_or("Battery capacity [Ah]", d.battery_capacity_ah)?,
    })
}

fn read_costs(
    d: &CostDefaults,
    currency: &str,
    daily_target_kwh: f64,
) -> Result<pv::CostParameters, AppError> {
    println!("Procurement costs ({currency})");
    let procurement = read_component_costs(&d.procurement, "unit cost")?;
    println!("Installation costs ({currency})");
    let installation = read_component_costs(&d.installation, "installation cost")?;
    println!("Maintenance costs per visit ({currency})");
    let maintenance = read_component_costs(&d.maintenance, "maintenance cost")?;
    Ok(pv::CostParameters {
        procurement,
        installation,
        maintenance,
        maintenance_visits_per_year: read_f64_or(
            "Maintenance visits per year",
            d.maintenance_visits_per_year,
        )?,
        warranty_years: read_u32_or("Warranty years", d.warranty_years)?,
        grid_rate_per_kwh: read_f64_or(
            &format!("Grid electricity rate [{currency}/kWh]"),
            d.grid_rate_per_kwh,
        )?,
        inflation_rate_pct: read_f64_or("Inflation rate [%]", d.inflation_rate_pct)?,
        years: read_u32_or("Number of years for simulation", d.years)?,
        daily_target_kwh,
    })
}

fn read_component_costs(d: &ComponentCosts, label: &str) -> Result<ComponentCosts, AppError> {
    Ok(ComponentCosts {
        per_panel: read_f64_or(&format!("  Solar panel {label}"), d.per_panel)?,
        controller: read_f64_or(&format!("  Charge controller {label}"), d.controller)?,
        inverter: read_f64_or(&format!("  Inverter {label}"), d.inverter)?,
        per_battery: read_f64_or(&format!("  Battery {label}"), d.per_battery)?,
        misc: read_f64_or(&format!("  Miscellaneous {label}"), d.misc)?,
    })
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_string_or(prompt: &str, default: &str) -> Result<String, AppError> {
    let s = read_line(&format!("{prompt} [{default}]: "))?;
    let s = s.trim();
    Ok(if s.is_empty() { default } else { s }.to_string())
}

fn read_f64_or(prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{prompt} [{default}]: "))?;
        match parse_or_default(&s, default) {
            Some(v) => return Ok(v),
            None => println!("Please enter a number."),
        }
    }
}

fn read_u32_or(prompt: &str, default: u32) -> Result<u32, AppError> {
    loop {
        let s = read_line(&format!("{prompt} [{default}]: "))?;
        match parse_or_default(&s, default) {
            Some(v) => return Ok(v),
            None => println!("Please enter a whole number."),
        }
    }
}

/// 빈 입력이면 기본값, 숫자가 아니면 None.
fn parse_or_default<T: std::str::FromStr>(input: &str, default: T) -> Option<T> {
    let s = input.trim();
    if s.is_empty() {
        Some(default)
    } else {
        s.parse().ok()
    }
}

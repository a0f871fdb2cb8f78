use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use yellow_sun_toolbox::{
    analysis,
    app::{self, AppError},
    config::{self, Config},
    logging, pv, report, ui_cli,
};

/// Yellow Sun Toolbox 명령행 인터페이스. 하위 명령이 없으면 대화형 메뉴를 띄운다.
#[derive(Debug, Parser)]
#[command(
    name = "yellow_sun_toolbox_cli",
    version,
    about = "PV system sizing and costing for Nigerian states"
)]
struct Cli {
    /// 설정 파일 경로(기본: ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List states and their GHI
    Regions,
    /// Monthly PV potential of a single panel
    Potential(PanelArgs),
    /// Panel and battery counts for a daily target
    Design {
        #[command(flatten)]
        panel: PanelArgs,
        #[command(flatten)]
        design: DesignArgs,
    },
    /// Year-by-year PV vs grid cost simulation
    Costs {
        #[command(flatten)]
        panel: PanelArgs,
        #[command(flatten)]
        design: DesignArgs,
        #[command(flatten)]
        costs: CostArgs,
        /// Export the cost table as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Grid vs solar carbon emissions
    Emissions {
        /// Assessment horizon [years]
        #[arg(long)]
        years: Option<u32>,
        /// Daily energy [kWh]
        #[arg(long)]
        daily_energy: Option<f64>,
    },
    /// Run every calculator and write a TOML report
    Report {
        #[arg(long, short, default_value = "pv_report.toml")]
        output: PathBuf,
    },
    /// Write the default configuration file
    InitConfig {
        #[arg(default_value = config::CONFIG_FILE)]
        path: PathBuf,
    },
}

#[derive(Debug, Args)]
struct PanelArgs {
    /// Panel length [m]
    #[arg(long)]
    length: Option<f64>,
    /// Panel width [m]
    #[arg(long)]
    width: Option<f64>,
    /// Panel efficiency [%]
    #[arg(long)]
    efficiency: Option<f64>,
    /// Inverter efficiency [%]
    #[arg(long)]
    inverter_efficiency: Option<f64>,
    /// Project state
    #[arg(long)]
    state: Option<String>,
}

impl PanelArgs {
    fn apply(&self, cfg: &mut Config) {
        let p = &mut cfg.panel;
        override_with(&mut p.length_m, self.length);
        override_with(&mut p.width_m, self.width);
        override_with(&mut p.efficiency_pct, self.efficiency);
        override_with(&mut p.inverter_efficiency_pct, self.inverter_efficiency);
        override_with(&mut p.region, self.state.clone());
    }
}

#[derive(Debug, Args)]
struct DesignArgs {
    /// Daily target energy [kWh]
    #[arg(long)]
    daily_target: Option<f64>,
    #[arg(long)]
    autonomy_days: Option<f64>,
    /// Battery voltage [V]
    #[arg(long)]
    battery_voltage: Option<f64>,
    /// Depth of discharge [%]
    #[arg(long)]
    depth_of_discharge: Option<f64>,
    /// Battery efficiency [%]
    #[arg(long)]
    battery_efficiency: Option<f64>,
    /// Rated capacity of one battery [Ah]
    #[arg(long)]
    battery_capacity: Option<f64>,
}

impl DesignArgs {
    fn apply(&self, cfg: &mut Config) {
        let d = &mut cfg.design;
        override_with(&mut d.daily_target_kwh, self.daily_target);
        override_with(&mut d.autonomy_days, self.autonomy_days);
        override_with(&mut d.battery_voltage_v, self.battery_voltage);
        override_with(&mut d.depth_of_discharge_pct, self.depth_of_discharge);
        override_with(&mut d.battery_efficiency_pct, self.battery_efficiency);
        override_with(&mut d.battery_capacity_ah, self.battery_capacity);
    }
}

#[derive(Debug, Args)]
struct CostArgs {
    /// Simulation horizon [years]
    #[arg(long)]
    years: Option<u32>,
    #[arg(long)]
    warranty_years: Option<u32>,
    /// Grid tariff [currency/kWh]
    #[arg(long)]
    grid_rate: Option<f64>,
    /// Annual inflation [%]
    #[arg(long)]
    inflation: Option<f64>,
    #[arg(long)]
    visits_per_year: Option<f64>,
}

impl CostArgs {
    fn apply(&self, cfg: &mut Config) {
        let c = &mut cfg.costs;
        override_with(&mut c.years, self.years);
        override_with(&mut c.warranty_years, self.warranty_years);
        override_with(&mut c.grid_rate_per_kwh, self.grid_rate);
        override_with(&mut c.inflation_rate_pct, self.inflation);
        override_with(&mut c.maintenance_visits_per_year, self.visits_per_year);
    }
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load_or_default()?,
    };
    logging::init(&cfg.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "yellow sun toolbox cli started");

    let Some(command) = cli.command else {
        return app::run(&cfg);
    };
    match command {
        Command::Regions => ui_cli::handle_regions(),
        Command::Potential(panel) => {
            panel.apply(&mut cfg);
            let potential =
                pv::compute_monthly_potential(&cfg.panel.panel_spec(), &cfg.panel.region)?;
            println!("Monthly PV potential for a single panel in {}:", cfg.panel.region);
            print!("{}", report::monthly_table(&potential, "kWh/day", "kWh"));
        }
        Command::Design { panel, design } => {
            panel.apply(&mut cfg);
            design.apply(&mut cfg);
            let potential =
                pv::compute_monthly_potential(&cfg.panel.panel_spec(), &cfg.panel.region)?;
            let sizing = pv::size_system(&potential, &cfg.design.sizing_input())?;
            println!(
                "Number of panels: {}",
                sizing.panel_summary(cfg.panel.length_m, cfg.panel.width_m)
            );
            println!(
                "Number of batteries: {}",
                sizing.battery_summary(cfg.design.battery_capacity_ah, cfg.design.battery_voltage_v)
            );
            println!("Total battery capacity: {:.0} Ah", sizing.total_battery_capacity_ah);
            let generation = pv::monthly_generation(sizing.panel_count, &potential);
            print!("{}", report::monthly_table(&generation, "kWh/month", "kWh"));
        }
        Command::Costs {
            panel,
            design,
            costs,
            csv,
        } => {
            panel.apply(&mut cfg);
            design.apply(&mut cfg);
            costs.apply(&mut cfg);
            let potential =
                pv::compute_monthly_potential(&cfg.panel.panel_spec(), &cfg.panel.region)?;
            let sizing = pv::size_system(&potential, &cfg.design.sizing_input())?;
            let params = cfg.costs.cost_parameters(cfg.design.daily_target_kwh);
            let projection = pv::project_costs(&sizing, &params)?;
            println!(
                "Commissioning cost: {}",
                report::format_money(&cfg.currency, projection.commission_cost)
            );
            print!("{}", report::cost_table(&projection, &cfg.currency));
            ui_cli::print_cost_summary(&projection, &cfg.currency);
            if let Some(path) = csv {
                report::export_cost_csv(&projection, &path)?;
            }
        }
        Command::Emissions {
            years,
            daily_energy,
        } => {
            override_with(&mut cfg.emissions.years, years);
            override_with(&mut cfg.emissions.daily_energy_kwh, daily_energy);
            let result = pv::compare_emissions(cfg.emissions.years, cfg.emissions.daily_energy_kwh)?;
            println!("{}", report::emissions_summary(&result));
        }
        Command::Report { output } => {
            let result = analysis::run_analysis(&cfg)?;
            report::ProjectReport::new(&cfg, &result).save(&output)?;
            println!("Report written to {}", output.display());
        }
        Command::InitConfig { path } => {
            Config::default().save_to(&path)?;
            println!("Default configuration written to {}", path.display());
        }
    }
    Ok(())
}

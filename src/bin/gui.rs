#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{fs, path::Path};
use yellow_sun_toolbox::{
    analysis, config, logging,
    pv::{self, CostProjection, EmissionsResult, MonthlySeries, PvCalcError, SystemSizing},
    report, solar_db,
    solar_db::Month,
    ui_cli::HELP_TEXT,
};

const ORANGE: egui::Color32 = egui::Color32::from_rgb(255, 165, 0);
const SUN_YELLOW: egui::Color32 = egui::Color32::from_rgb(0xFD, 0xB8, 0x13);
const GRID_BLUE: egui::Color32 = egui::Color32::from_rgb(0x00, 0x77, 0xC2);
const CHART_HEIGHT: f32 = 240.0;

fn main() -> Result<(), eframe::Error> {
    let app_cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Config error: {e}; using defaults");
            config::Config::default()
        }
    };
    logging::init(&app_cfg.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "yellow sun toolbox gui started");

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1100.0, 760.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Yellow Sun Toolbox",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg.clone()))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["yellow_sun.png", "icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    HowTo,
    Potential,
    Designer,
    Costs,
    Emissions,
}

/// 설계 탭 결과.
#[derive(Debug, Clone)]
struct DesignView {
    sizing: SystemSizing,
    generation: MonthlySeries,
    panel_text: String,
    battery_text: String,
}

struct GuiApp {
    /// 폼 값. 시작 시 설정에서 채우며 저장하지 않는다.
    form: config::Config,
    tab: Tab,
    /// 계산에 쓰인 지역과 결과
    potential: Option<(String, MonthlySeries)>,
    design: Option<DesignView>,
    costs: Option<CostProjection>,
    emissions: Option<EmissionsResult>,
    error: Option<String>,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        Self {
            form: config,
            tab: Tab::HowTo,
            potential: None,
            design: None,
            costs: None,
            emissions: None,
            error: None,
            status: None,
        }
    }

    fn set_error(&mut self, e: PvCalcError) {
        tracing::warn!(error = %e, "calculation rejected");
        self.error = Some(e.to_string());
    }

    fn calculate_potential(&mut self) {
        self.potential = None;
        match potential_for(&self.form) {
            Ok(series) => {
                self.error = None;
                self.potential = Some((self.form.panel.region.clone(), series));
            }
            Err(e) => self.set_error(e),
        }
    }

    fn calculate_design(&mut self) {
        self.design = None;
        match design_for(&self.form) {
            Ok(view) => {
                self.error = None;
                self.design = Some(view);
            }
            Err(e) => self.set_error(e),
        }
    }

    fn simulate_costs(&mut self) {
        self.costs = None;
        match costs_for(&self.form) {
            Ok(projection) => {
                self.error = None;
                self.costs = Some(projection);
            }
            Err(e) => self.set_error(e),
        }
    }

    fn calculate_emissions(&mut self) {
        self.emissions = None;
        let inputs = &self.form.emissions;
        match pv::compare_emissions(inputs.years, inputs.daily_energy_kwh) {
            Ok(result) => {
                self.error = None;
                self.emissions = Some(result);
            }
            Err(e) => self.set_error(e),
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Menu");
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::HowTo, "How to Use"),
            (Tab::Potential, "Monthly PV Potential"),
            (Tab::Designer, "PV System Designer"),
            (Tab::Costs, "Cost Simulation"),
            (Tab::Emissions, "Carbon Emission Matrix"),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
                self.error = None;
            }
            ui.add_space(4.0);
        }
    }

    /// 모든 계산기가 공유하는 패널/지역 입력.
    fn ui_shared_inputs(&mut self, ui: &mut egui::Ui) {
        let p = &mut self.form.panel;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(egui::RichText::new("Solar Panel Details and Project State").strong());
            ui.horizontal_wrapped(|ui| {
                ui.label("Length [m]");
                ui.add(egui::DragValue::new(&mut p.length_m).speed(0.01));
                ui.label("Width [m]");
                ui.add(egui::DragValue::new(&mut p.width_m).speed(0.01));
                ui.label("Panel eff. [%]");
                ui.add(
                    egui::DragValue::new(&mut p.efficiency_pct)
                        .speed(0.5)
                        .clamp_range(0.0..=100.0),
                );
                ui.label("Inverter eff. [%]");
                ui.add(
                    egui::DragValue::new(&mut p.inverter_efficiency_pct)
                        .speed(0.5)
                        .clamp_range(0.0..=100.0),
                );
                ui.label("State");
                egui::ComboBox::from_id_source("project_state")
                    .selected_text(p.region.clone())
                    .show_ui(ui, |ui| {
                        for r in solar_db::regions() {
                            ui.selectable_value(&mut p.region, r.name.to_string(), r.name);
                        }
                    });
            });
        });
    }

    fn ui_how_to(&mut self, ui: &mut egui::Ui) {
        ui.heading("Yellow Sun Toolbox - PV System Performance Analysis");
        ui.add_space(8.0);
        ui.label(HELP_TEXT);
        ui.add_space(8.0);
        if ui.button("Export full report (TOML)").clicked() {
            self.export_report();
        }
    }

    fn ui_potential(&mut self, ui: &mut egui::Ui) {
        ui.heading("Monthly PV Potential Estimation");
        if ui.button("Calculate Monthly PV Potential").clicked() {
            self.calculate_potential();
        }
        if let Some((region, series)) = &self.potential {
            let title = format!("Monthly PV Potential for a Single Panel in {region}");
            ui.label(egui::RichText::new(title).strong());
            line_chart(ui, &[(series.values().as_slice(), ORANGE)], &month_labels(), "kWh");
            monthly_grid(ui, "potential_grid", series, "kWh/day");
        }
    }

    fn ui_designer(&mut self, ui: &mut egui::Ui) {
        ui.heading("PV System Designer for Monthly Variation");
        let d = &mut self.form.design;
        egui::Grid::new("designer_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                number_row(ui, "Daily Target Energy [kWh]", &mut d.daily_target_kwh, 0.5);
                number_row(ui, "Autonomy Days", &mut d.autonomy_days, 0.5);
                number_row(ui, "Battery Voltage [V]", &mut d.battery_voltage_v, 1.0);
                percent_row(ui, "Depth of Discharge [%]", &mut d.depth_of_discharge_pct);
                percent_row(ui, "Battery Efficiency [%]", &mut d.battery_efficiency_pct);
                number_row(ui, "Battery Capacity [Ah]", &mut d.battery_capacity_ah, 5.0);
            });
        if ui.button("Design PV System").clicked() {
            self.calculate_design();
        }
        if let Some(view) = &self.design {
            ui.separator();
            ui.label(format!("Number of Panels: {}", view.panel_text));
            ui.label(format!("Number of Batteries: {}", view.battery_text));
            ui.label(format!(
                "Total Battery Capacity: {:.0} Ah",
                view.sizing.total_battery_capacity_ah
            ));
            ui.label(egui::RichText::new("Monthly Energy Generation for Designed PV System").strong());
            bar_chart(ui, view.generation.values(), &month_labels(), ORANGE, "kWh");
        }
    }

    fn ui_costs(&mut self, ui: &mut egui::Ui) {
        ui.heading("PV System Cost Simulation");
        let currency = self.form.currency.clone();
        let c = &mut self.form.costs;
        ui.columns(3, |cols| {
            component_costs_group(&mut cols[0], "Procurement", "cost", &mut c.procurement);
            component_costs_group(&mut cols[1], "Installation", "install", &mut c.installation);
            component_costs_group(&mut cols[2], "Maintenance (per visit)", "maint", &mut c.maintenance);
        });
        egui::Grid::new("cost_params_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                number_row(ui, "Maintenance Visits per Year", &mut c.maintenance_visits_per_year, 1.0);
                integer_row(ui, "Warranty Years", &mut c.warranty_years);
                number_row(
                    ui,
                    &format!("Grid Electricity Rate [{currency}/kWh]"),
                    &mut c.grid_rate_per_kwh,
                    1.0,
                );
                percent_row(ui, "Inflation Rate [%]", &mut c.inflation_rate_pct);
                integer_row(ui, "Number of Years for Simulation", &mut c.years);
            });
        ui.label("Daily target energy and battery inputs are taken from the PV System Designer tab.");
        ui.horizontal(|ui| {
            if ui.button("Simulate Costs").clicked() {
                self.simulate_costs();
            }
            if self.costs.is_some() && ui.button("Export table (CSV)").clicked() {
                self.export_costs_csv();
            }
        });

        let Some(projection) = &self.costs else {
            return;
        };
        ui.separator();
        ui.label(format!(
            "Commissioning cost: {}   Total PV: {}   Total grid: {}   Savings: {}",
            report::format_money(&currency, projection.commission_cost),
            report::format_money(&currency, projection.total_pv_cost()),
            report::format_money(&currency, projection.total_grid_cost()),
            report::format_money(&currency, projection.savings()),
        ));
        ui.label(match projection.break_even_year() {
            Some(year) => format!("Break-even in year {year}"),
            None => "No break-even within the simulated period".to_string(),
        });
        cost_grid(ui, projection, &currency);

        let labels: Vec<String> = projection.records.iter().map(|r| r.year.to_string()).collect();
        let pv_annual: Vec<f64> = projection.records.iter().map(|r| r.pv_cost).collect();
        let grid_annual: Vec<f64> = projection.records.iter().map(|r| r.grid_cost).collect();
        let pv_cum: Vec<f64> = projection.records.iter().map(|r| r.cumulative_pv_cost).collect();
        let grid_cum: Vec<f64> = projection.records.iter().map(|r| r.cumulative_grid_cost).collect();
        let years = projection.records.len();

        ui.label(
            egui::RichText::new(format!(
                "Annual Cost of Electricity: PV System vs Grid Supply over {years} Years"
            ))
            .strong(),
        );
        legend(ui, &[("PV Cost", ORANGE), ("Grid Cost", GRID_BLUE)]);
        line_chart(
            ui,
            &[(pv_annual.as_slice(), ORANGE), (grid_annual.as_slice(), GRID_BLUE)],
            &labels,
            &currency,
        );
        ui.label(
            egui::RichText::new(format!(
                "{years}-Year Cumulative Life Cycle Cost Comparison: PV System vs Grid Electricity"
            ))
            .strong(),
        );
        legend(ui, &[("Cumulative PV Cost", ORANGE), ("Cumulative Grid Cost", GRID_BLUE)]);
        line_chart(
            ui,
            &[(pv_cum.as_slice(), ORANGE), (grid_cum.as_slice(), GRID_BLUE)],
            &labels,
            &currency,
        );
    }

    fn ui_emissions(&mut self, ui: &mut egui::Ui) {
        ui.heading("Carbon Emission Matrix");
        let e = &mut self.form.emissions;
        egui::Grid::new("emissions_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                integer_row(ui, "Number of Years for Carbon Emissions Assessment", &mut e.years);
                number_row(ui, "Daily Target Energy [kWh]", &mut e.daily_energy_kwh, 0.5);
            });
        if ui.button("Calculate Carbon Emissions").clicked() {
            self.calculate_emissions();
        }
        if let Some(result) = &self.emissions {
            ui.separator();
            for line in report::emissions_summary(result).lines() {
                ui.label(line);
            }
            ui.label(format!(
                "Avoided emissions: {} kgCO₂",
                report::format_amount(result.avoided_kgco2())
            ));
            ui.label(
                egui::RichText::new(format!("Carbon Emissions over {} Years", result.years))
                    .strong(),
            );
            share_bar(
                ui,
                &[
                    ("Grid Electricity", result.grid_share_pct(), GRID_BLUE),
                    ("PV System Solar Energy", result.solar_share_pct(), SUN_YELLOW),
                ],
            );
        }
    }

    fn export_costs_csv(&mut self) {
        let Some(projection) = &self.costs else {
            return;
        };
        let Some(path) = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("cost_table.csv")
            .save_file()
        else {
            return;
        };
        self.status = Some(match report::export_cost_csv(projection, &path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => format!("Export failed: {e}"),
        });
    }

    fn export_report(&mut self) {
        let result = match analysis::run_analysis(&self.form) {
            Ok(r) => r,
            Err(e) => {
                self.set_error(e);
                return;
            }
        };
        let Some(path) = FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("pv_report.toml")
            .save_file()
        else {
            return;
        };
        self.status = Some(
            match report::ProjectReport::new(&self.form, &result).save(&path) {
                Ok(()) => format!("Saved {}", path.display()),
                Err(e) => format!("Export failed: {e}"),
            },
        );
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Yellow Sun Toolbox");
                ui.label(" | PV System Performance Analysis");
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::from_rgb(211, 47, 47), format!("Error: {err}"));
                } else if let Some(status) = &self.status {
                    ui.label(status);
                } else {
                    ui.label("Ready");
                }
            });
        });

        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(190.0)
            .show(ctx, |ui| self.ui_nav(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if self.tab != Tab::Emissions {
                    self.ui_shared_inputs(ui);
                    ui.add_space(8.0);
                }
                match self.tab {
                    Tab::HowTo => self.ui_how_to(ui),
                    Tab::Potential => self.ui_potential(ui),
                    Tab::Designer => self.ui_designer(ui),
                    Tab::Costs => self.ui_costs(ui),
                    Tab::Emissions => self.ui_emissions(ui),
                }
            });
        });
    }
}

fn potential_for(form: &config::Config) -> Result<MonthlySeries, PvCalcError> {
    pv::compute_monthly_potential(&form.panel.panel_spec(), &form.panel.region)
}

fn design_for(form: &config::Config) -> Result<DesignView, PvCalcError> {
    let potential = potential_for(form)?;
    let input = form.design.sizing_input();
    let sizing = pv::size_system(&potential, &input)?;
    Ok(DesignView {
        panel_text: sizing.panel_summary(form.panel.length_m, form.panel.width_m),
        battery_text: sizing.battery_summary(input.battery_capacity_ah, input.battery_voltage_v),
        generation: pv::monthly_generation(sizing.panel_count, &potential),
        sizing,
    })
}

fn costs_for(form: &config::Config) -> Result<CostProjection, PvCalcError> {
    let potential = potential_for(form)?;
    let sizing = pv::size_system(&potential, &form.design.sizing_input())?;
    pv::project_costs(
        &sizing,
        &form.costs.cost_parameters(form.design.daily_target_kwh),
    )
}

fn month_labels() -> Vec<String> {
    Month::ALL.iter().map(|m| m.short_name().to_string()).collect()
}

fn number_row(ui: &mut egui::Ui, label: &str, value: &mut f64, speed: f64) {
    ui.label(label);
    ui.add(egui::DragValue::new(value).speed(speed));
    ui.end_row();
}

fn percent_row(ui: &mut egui::Ui, label: &str, value: &mut f64) {
    ui.label(label);
    ui.add(egui::DragValue::new(value).speed(0.5).clamp_range(0.0..=100.0));
    ui.end_row();
}

fn integer_row(ui: &mut egui::Ui, label: &str, value: &mut u32) {
    ui.label(label);
    ui.add(egui::DragValue::new(value).speed(1.0));
    ui.end_row();
}

fn component_costs_group(ui: &mut egui::Ui, title: &str, id: &str, costs: &mut pv::ComponentCosts) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new(title).strong());
        egui::Grid::new(format!("{id}_component_grid"))
            .num_columns(2)
            .show(ui, |ui| {
                number_row(ui, "Per panel", &mut costs.per_panel, 100.0);
                number_row(ui, "Charge controller", &mut costs.controller, 100.0);
                number_row(ui, "Inverter", &mut costs.inverter, 100.0);
                number_row(ui, "Per battery", &mut costs.per_battery, 100.0);
                number_row(ui, "Miscellaneous", &mut costs.misc, 100.0);
            });
    });
}

fn monthly_grid(ui: &mut egui::Ui, id: &str, series: &MonthlySeries, unit: &str) {
    egui::Grid::new(id).striped(true).num_columns(2).show(ui, |ui| {
        ui.strong("Month");
        ui.strong(unit);
        ui.end_row();
        for (month, value) in series.iter() {
            ui.label(month.name());
            ui.label(format!("{value:.4}"));
            ui.end_row();
        }
    });
}

fn cost_grid(ui: &mut egui::Ui, projection: &CostProjection, currency: &str) {
    egui::Grid::new("cost_table").striped(true).num_columns(5).show(ui, |ui| {
        for h in ["Year", "PV Cost", "Grid Cost", "Cumulative PV Cost", "Cumulative Grid Cost"] {
            ui.strong(h);
        }
        ui.end_row();
        for r in &projection.records {
            ui.label(r.year.to_string());
            ui.label(report::format_money(currency, r.pv_cost));
            ui.label(report::format_money(currency, r.grid_cost));
            ui.label(report::format_money(currency, r.cumulative_pv_cost));
            ui.label(report::format_money(currency, r.cumulative_grid_cost));
            ui.end_row();
        }
    });
}

fn legend(ui: &mut egui::Ui, entries: &[(&str, egui::Color32)]) {
    ui.horizontal(|ui| {
        for (name, color) in entries {
            ui.colored_label(*color, "■");
            ui.label(*name);
        }
    });
}

/// 0..max 값을 차트 영역의 y 좌표로 옮긴다. max가 0이면 바닥에 붙인다.
fn value_to_y(value: f64, max: f64, rect: egui::Rect) -> f32 {
    if max <= 0.0 {
        return rect.bottom();
    }
    let t = (value / max).clamp(0.0, 1.0) as f32;
    rect.bottom() - t * rect.height()
}

/// i번째 점의 x 좌표. 점이 하나면 가운데.
fn index_to_x(i: usize, count: usize, rect: egui::Rect) -> f32 {
    if count <= 1 {
        return rect.center().x;
    }
    rect.left() + rect.width() * i as f32 / (count - 1) as f32
}

fn series_max(series: &[(&[f64], egui::Color32)]) -> f64 {
    series
        .iter()
        .flat_map(|(values, _)| values.iter().copied())
        .fold(0.0, f64::max)
}

fn chart_frame(ui: &mut egui::Ui) -> (egui::Painter, egui::Rect) {
    let width = ui.available_width().max(300.0);
    let (response, painter) =
        ui.allocate_painter(egui::vec2(width, CHART_HEIGHT), egui::Sense::hover());
    let outer = response.rect;
    painter.rect_stroke(outer, 2.0, ui.visuals().widgets.noninteractive.bg_stroke);
    // 축 라벨 여백
    let plot = egui::Rect::from_min_max(
        egui::pos2(outer.left() + 90.0, outer.top() + 12.0),
        egui::pos2(outer.right() - 16.0, outer.bottom() - 24.0),
    );
    (painter, plot)
}

fn draw_axes(
    painter: &egui::Painter,
    plot: egui::Rect,
    max: f64,
    labels: &[String],
    unit: &str,
    text_color: egui::Color32,
) {
    let grid = egui::Stroke::new(0.5, text_color.gamma_multiply(0.3));
    let font = egui::FontId::proportional(11.0);
    for step in 0..=4 {
        let value = max * f64::from(step) / 4.0;
        let y = value_to_y(value, max, plot);
        painter.line_segment([egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)], grid);
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            format!("{} {unit}", report::format_amount(value)),
            font.clone(),
            text_color,
        );
    }
    // 라벨이 많으면 건너뛰며 그린다
    let stride = (labels.len() / 12).max(1);
    for (i, label) in labels.iter().enumerate().step_by(stride) {
        painter.text(
            egui::pos2(index_to_x(i, labels.len(), plot), plot.bottom() + 4.0),
            egui::Align2::CENTER_TOP,
            label,
            font.clone(),
            text_color,
        );
    }
}

fn line_chart(ui: &mut egui::Ui, series: &[(&[f64], egui::Color32)], labels: &[String], unit: &str) {
    let text_color = ui.visuals().text_color();
    let (painter, plot) = chart_frame(ui);
    let max = series_max(series) * 1.1;
    draw_axes(&painter, plot, max, labels, unit, text_color);
    for (values, color) in series {
        let points: Vec<egui::Pos2> = values
            .iter()
            .enumerate()
            .map(|(i, v)| egui::pos2(index_to_x(i, values.len(), plot), value_to_y(*v, max, plot)))
            .collect();
        painter.add(egui::Shape::line(points.clone(), egui::Stroke::new(2.0, *color)));
        for p in points {
            painter.circle_filled(p, 3.0, *color);
        }
    }
}

fn bar_chart(ui: &mut egui::Ui, values: &[f64], labels: &[String], color: egui::Color32, unit: &str) {
    let text_color = ui.visuals().text_color();
    let (painter, plot) = chart_frame(ui);
    let max = values.iter().copied().fold(0.0, f64::max) * 1.1;
    let slot = plot.width() / values.len().max(1) as f32;
    let font = egui::FontId::proportional(11.0);
    for step in 0..=4 {
        let value = max * f64::from(step) / 4.0;
        let y = value_to_y(value, max, plot);
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            format!("{} {unit}", report::format_amount(value)),
            font.clone(),
            text_color,
        );
    }
    for (i, v) in values.iter().enumerate() {
        let left = plot.left() + slot * i as f32 + slot * 0.15;
        let bar = egui::Rect::from_min_max(
            egui::pos2(left, value_to_y(*v, max, plot)),
            egui::pos2(left + slot * 0.7, plot.bottom()),
        );
        painter.rect_filled(bar, 1.0, color);
        if let Some(label) = labels.get(i) {
            painter.text(
                egui::pos2(bar.center().x, plot.bottom() + 4.0),
                egui::Align2::CENTER_TOP,
                label,
                font.clone(),
                text_color,
            );
        }
    }
}

/// 원형 차트 대신 비율 막대로 구성비를 표시한다.
fn share_bar(ui: &mut egui::Ui, parts: &[(&str, f64, egui::Color32)]) {
    let width = ui.available_width().max(300.0);
    let (response, painter) = ui.allocate_painter(egui::vec2(width, 48.0), egui::Sense::hover());
    let rect = response.rect;
    let mut left = rect.left();
    for (name, pct, color) in parts {
        let w = rect.width() * (*pct / 100.0) as f32;
        let part = egui::Rect::from_min_max(egui::pos2(left, rect.top()), egui::pos2(left + w, rect.bottom()));
        painter.rect_filled(part, 0.0, *color);
        if w > 60.0 {
            painter.text(
                part.center(),
                egui::Align2::CENTER_CENTER,
                format!("{name} {pct:.1}%"),
                egui::FontId::proportional(12.0),
                egui::Color32::WHITE,
            );
        }
        left += w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_view_uses_form_values() {
        let form = config::Config::default();
        let view = design_for(&form).unwrap();
        assert!(view.panel_text.ends_with("panels (1.6m x 1m)"));
        assert!(view.battery_text.contains("Rating: 200Ah, 12V"));
        assert_eq!(view.sizing.battery_count, 18);
    }

    #[test]
    fn failed_calculation_clears_previous_result() {
        let mut app = GuiApp::new(config::Config::default());
        app.calculate_potential();
        assert!(app.potential.is_some());
        app.form.panel.region = "Nowhere".into();
        app.calculate_potential();
        assert!(app.potential.is_none());
        assert!(app.error.as_deref().unwrap_or_default().contains("Nowhere"));
    }

    #[test]
    fn potential_keeps_region_it_was_computed_for() {
        let mut app = GuiApp::new(config::Config::default());
        app.calculate_potential();
        app.form.panel.region = "Kano".into();
        let (region, series) = app.potential.as_ref().unwrap();
        assert_eq!(region, "Lagos");
        let lagos = potential_for(&config::Config::default()).unwrap();
        assert_eq!(series, &lagos);
    }

    #[test]
    fn zero_year_emissions_are_rejected_in_gui() {
        let mut app = GuiApp::new(config::Config::default());
        app.form.emissions.years = 0;
        app.calculate_emissions();
        assert!(app.emissions.is_none());
        assert!(app.error.is_some());
    }

    #[test]
    fn chart_mapping_stays_inside_rect() {
        let rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(100.0, 50.0));
        assert_eq!(value_to_y(0.0, 10.0, rect), 50.0);
        assert_eq!(value_to_y(10.0, 10.0, rect), 0.0);
        assert_eq!(value_to_y(20.0, 10.0, rect), 0.0);
        assert_eq!(value_to_y(5.0, 0.0, rect), 50.0);
        assert_eq!(index_to_x(0, 12, rect), 0.0);
        assert_eq!(index_to_x(11, 12, rect), 100.0);
        assert_eq!(index_to_x(0, 1, rect), 50.0);
    }
}

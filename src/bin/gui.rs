#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use rfd::FileDialog;
use flexo_roi::{
    config,
    format::{format_count, format_currency, format_decimal},
    report::{self, FileSink, ReportDocument, ReportFormat, ReportOptions, ReportSink},
    roi::{self, RoiParams, SelfCheckReport},
    shell::{Level, Notification, ParamBounds, ShellState},
    substrate::SubstrateKind,
};

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("설정 로드 실패, 기본값 사용: {e}");
            config::Config::default()
        }
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(920.0, 620.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Flexo HaaS ROI",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

struct GuiApp {
    state: ShellState,
    /// 위젯이 직접 수정하는 사본. 프레임마다 상태와 비교해 바뀐 값만 반영한다.
    edit: RoiParams,
    substrate: SubstrateKind,
    report_opts: ReportOptions,
    report_format: ReportFormat,
    self_checks: SelfCheckReport,
    notification: Option<Notification>,
}

impl GuiApp {
    fn new(cfg: config::Config) -> Self {
        let state = ShellState::new(cfg.params, cfg.substrate);
        Self {
            edit: state.params(),
            substrate: state.substrate(),
            state,
            report_opts: cfg.report_options(),
            report_format: cfg.report.format,
            self_checks: roi::run_self_checks(),
            notification: None,
        }
    }

    fn sync_edits(&mut self) {
        if self.substrate != self.state.substrate() {
            // 원단 선택과 단가 제안 적용은 별도 단계로 처리한다.
            let suggestion = self.state.select_substrate(self.substrate);
            self.state.apply_price_suggestion(suggestion);
            self.edit.substrate_price = self.state.params().substrate_price;
        }
        let current = self.state.params();
        if self.edit == current {
            return;
        }
        if self.edit.substrate_price != current.substrate_price {
            self.state.set_substrate_price(self.edit.substrate_price);
        }
        self.state.set_params(self.edit);
        self.edit = self.state.params();
    }

    fn inputs_ui(&mut self, ui: &mut egui::Ui) {
        let e = &mut self.edit;
        egui::Grid::new("inputs_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                label_with_tip(ui, "Web width [m]", "Printable web width");
                ui.add(egui::Slider::new(&mut e.web_width_m, ParamBounds::WEB_WIDTH_M).step_by(0.005));
                ui.end_row();

                ui.label("Jobs per shift");
                ui.add(egui::DragValue::new(&mut e.jobs_per_shift).speed(1.0).clamp_range(0.0..=500.0));
                ui.end_row();

                ui.label("Shifts per day");
                egui::ComboBox::from_id_source("shifts")
                    .selected_text(format!("{}", e.shifts_per_day))
                    .show_ui(ui, |ui| {
                        for s in ParamBounds::SHIFTS_PER_DAY {
                            ui.selectable_value(&mut e.shifts_per_day, s, format!("{s}"));
                        }
                    });
                ui.end_row();

                ui.label("Hours per shift");
                ui.add(egui::DragValue::new(&mut e.hours_per_shift).speed(0.5).clamp_range(ParamBounds::HOURS_PER_SHIFT));
                ui.end_row();

                ui.label("Operating days / year");
                ui.add(egui::DragValue::new(&mut e.days_per_year).speed(1.0).clamp_range(ParamBounds::DAYS_PER_YEAR));
                ui.end_row();

                label_with_tip(ui, "Stops per job", "Makeready stops per job before the upgrade");
                ui.add(egui::DragValue::new(&mut e.stops_per_job_baseline).speed(0.5).clamp_range(0.0..=100.0));
                ui.end_row();

                ui.label("Stop reduction [%]");
                ui.add(egui::Slider::new(&mut e.reduction_percent, ParamBounds::PERCENT).step_by(1.0));
                ui.end_row();

                label_with_tip(ui, "Waste per stop [m]", "Web length lost per makeready stop");
                ui.add(egui::DragValue::new(&mut e.waste_per_stop_m).speed(5.0).clamp_range(0.0..=10_000.0));
                ui.end_row();

                ui.label("Line speed [m/min]");
                ui.add(egui::DragValue::new(&mut e.speed_m_per_min).speed(5.0).clamp_range(0.0..=1_000.0));
                ui.end_row();

                label_with_tip(ui, "Uptime [%]", "Share of scheduled time actually printing");
                ui.add(egui::Slider::new(&mut e.uptime_percent, ParamBounds::PERCENT).step_by(1.0));
                ui.end_row();

                ui.label("Substrate");
                egui::ComboBox::from_id_source("substrate")
                    .selected_text(self.substrate.label())
                    .show_ui(ui, |ui| {
                        for kind in SubstrateKind::all() {
                            ui.selectable_value(&mut self.substrate, kind, kind.label());
                        }
                    });
                ui.end_row();

                ui.label("Substrate price [€/m²]");
                ui.add(egui::DragValue::new(&mut e.substrate_price).speed(0.01).clamp_range(0.0..=100.0));
                ui.end_row();

                ui.label("HaaS subscription [€/year]");
                ui.add(egui::DragValue::new(&mut e.haas_price).speed(100.0).clamp_range(0.0..=10_000_000.0));
                ui.end_row();
            });
        if self.state.price_overridden() {
            ui.small("Substrate price overridden manually.");
        }
    }

    fn results_ui(&mut self, ui: &mut egui::Ui) {
        let r = self.state.result();
        ui.heading("Annual savings");
        egui::Grid::new("results_grid")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                let rows = [
                    ("Jobs per year", format_count(r.jobs_per_year)),
                    ("Stops avoided per job", format_decimal(r.stops_avoided_per_job, 2)),
                    ("Area per stop", format!("{} m²", format_decimal(r.m2_per_stop, 2))),
                    ("Makeready area saved", format!("{} m²", format_count(r.m2_calage_per_year))),
                    ("Printed length", format!("{} m", format_count(r.printed_length_per_year))),
                    ("3 mm width area saved", format!("{} m²", format_count(r.m2_three_mm_per_year))),
                    ("Makeready savings", format_currency(r.euro_calage)),
                    ("Width-reduction savings", format_currency(r.euro_three_mm)),
                    ("Total savings", format_currency(r.euro_total)),
                ];
                for (label, value) in rows {
                    ui.label(label);
                    ui.monospace(value);
                    ui.end_row();
                }
                ui.strong("Net benefit after HaaS");
                let color = if r.euro_net < 0.0 {
                    ui.visuals().error_fg_color
                } else {
                    ui.visuals().strong_text_color()
                };
                ui.colored_label(color, egui::RichText::new(format_currency(r.euro_net)).monospace());
                ui.end_row();
            });

        ui.separator();
        let status = if self.self_checks.all_passed() {
            "Self-checks: OK"
        } else {
            "Self-checks: FAILED"
        };
        ui.label(status).on_hover_text(self.self_checks.to_string());

        ui.separator();
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_source("report_format")
                .selected_text(format!("{:?}", self.report_format))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.report_format, ReportFormat::Text, "Text");
                    ui.selectable_value(&mut self.report_format, ReportFormat::Markdown, "Markdown");
                });
            if ui.button("Export report…").clicked() {
                self.export_report();
            }
        });
    }

    /// 파일 대화상자를 취소하면 sink가 없는 것으로 처리한다.
    fn export_report(&mut self) {
        let opts = ReportOptions {
            substrate: self.state.substrate(),
            ..self.report_opts.clone()
        };
        let doc = ReportDocument::build(&self.state.params(), &self.state.result(), &opts);
        let picked = FileDialog::new()
            .add_filter("Report", &[self.report_format.extension()])
            .set_file_name(format!("roi_report.{}", self.report_format.extension()))
            .save_file();
        let Some(path) = picked else {
            self.notification = Some(Notification::info("Export cancelled"));
            return;
        };
        let mut sink = FileSink::new(path);
        let outcome = report::export(Some(&mut sink as &mut dyn ReportSink), &doc, self.report_format);
        self.notification = Some(Notification::from_export(&outcome));
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match &self.notification {
                    Some(n) if n.level == Level::Error => {
                        ui.colored_label(ui.visuals().error_fg_color, n.message.as_str());
                    }
                    Some(n) => {
                        ui.label(n.message.as_str());
                    }
                    None => {
                        ui.label("");
                    }
                }
                if self.notification.is_some() && ui.small_button("✕").clicked() {
                    self.notification = None;
                }
            });
        });

        egui::SidePanel::left("inputs")
            .resizable(false)
            .min_width(380.0)
            .show(ctx, |ui| {
                ui.heading("Production parameters");
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| self.inputs_ui(ui));
            });

        self.sync_edits();

        egui::CentralPanel::default().show(ctx, |ui| self.results_ui(ui));
    }
}

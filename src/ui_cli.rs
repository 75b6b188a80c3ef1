use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::AppError;
use crate::format::{format_count, format_currency, format_decimal};
use crate::report::{self, FileSink, ReportDocument, ReportFormat, ReportOptions, ReportSink};
use crate::roi::{self, RoiResult};
use crate::shell::{Level, Notification, ShellState};
use crate::substrate::SubstrateKind;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EditParameter,
    Substrate,
    ShowResults,
    SelfCheck,
    ExportReport,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Flexo HaaS ROI ===");
    println!("1) Edit a parameter");
    println!("2) Choose substrate");
    println!("3) Show results");
    println!("4) Run self-checks");
    println!("5) Export report");
    println!("0) Quit");
    loop {
        let sel = read_line("Select: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::EditParameter),
            "2" => return Ok(MenuChoice::Substrate),
            "3" => return Ok(MenuChoice::ShowResults),
            "4" => return Ok(MenuChoice::SelfCheck),
            "5" => return Ok(MenuChoice::ExportReport),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("Invalid choice, try again."),
        }
    }
}

const PARAM_MENU: &[&str] = &[
    "Web width [m]",
    "Jobs per shift",
    "Shifts per day (1-3)",
    "Operating days per year",
    "Stops per job (before)",
    "Stop reduction [%]",
    "Waste per stop [m]",
    "Line speed [m/min]",
    "Uptime [%]",
    "Hours per shift",
    "Substrate price [€/m²]",
    "HaaS subscription [€/year]",
];

/// 파라미터 하나를 골라 값을 바꾼다.
pub fn handle_edit_parameter(state: &mut ShellState) -> Result<(), AppError> {
    println!("\n-- Parameters --");
    let p = state.params();
    let current = [
        p.web_width_m,
        p.jobs_per_shift,
        p.shifts_per_day,
        p.days_per_year,
        p.stops_per_job_baseline,
        p.reduction_percent,
        p.waste_per_stop_m,
        p.speed_m_per_min,
        p.uptime_percent,
        p.hours_per_shift,
        p.substrate_price,
        p.haas_price,
    ];
    for (i, (label, value)) in PARAM_MENU.iter().zip(current).enumerate() {
        println!("{:>2}) {label}: {value}", i + 1);
    }
    let sel = read_line("Parameter number (Enter to cancel): ")?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let Some(idx) = sel.trim().parse::<usize>().ok().filter(|n| (1..=12).contains(n)) else {
        println!("Unknown parameter.");
        return Ok(());
    };
    let v = read_f64("New value: ")?;
    let result = match idx {
        1 => state.set_web_width(v),
        2 => state.set_jobs_per_shift(v),
        3 => state.set_shifts_per_day(v),
        4 => state.set_days_per_year(v),
        5 => state.set_stops_per_job(v),
        6 => state.set_reduction_percent(v),
        7 => state.set_waste_per_stop(v),
        8 => state.set_speed(v),
        9 => state.set_uptime_percent(v),
        10 => state.set_hours_per_shift(v),
        11 => state.set_substrate_price(v),
        _ => state.set_haas_price(v),
    };
    print_summary(&result);
    Ok(())
}

/// 원단 종류를 고르고 기본 단가 적용 여부를 묻는다.
pub fn handle_substrate(state: &mut ShellState) -> Result<(), AppError> {
    println!("\n-- Substrate --");
    let kinds: Vec<SubstrateKind> = SubstrateKind::all().collect();
    for (i, kind) in kinds.iter().enumerate() {
        match kind.default_price() {
            Some(price) => println!("{}) {} ({} €/m²)", i + 1, kind.label(), format_decimal(price, 2)),
            None => println!("{}) {}", i + 1, kind.label()),
        }
    }
    let sel = read_line("Select: ")?;
    let Some(kind) = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| kinds.get(i).copied())
    else {
        println!("Substrate unchanged.");
        return Ok(());
    };
    let suggestion = state.select_substrate(kind);
    if let Some(price) = suggestion.price {
        let answer = read_line(&format!(
            "Apply default price {} €/m²? [Y/n]: ",
            format_decimal(price, 2)
        ))?;
        if !answer.trim().eq_ignore_ascii_case("n") {
            let result = state.apply_price_suggestion(suggestion);
            print_summary(&result);
        }
    }
    Ok(())
}

pub fn handle_self_check() {
    let report = roi::run_self_checks();
    print!("{report}");
    if report.all_passed() {
        println!("All self-checks passed.");
    }
}

/// 보고서를 파일로 내보낸다. 실패해도 알림만 출력하고 루프는 계속된다.
pub fn handle_export(
    state: &ShellState,
    opts: &ReportOptions,
    format: ReportFormat,
) -> Result<(), AppError> {
    let default_name = format!("roi_report.{}", format.extension());
    let input = read_line(&format!("Output file [{default_name}]: "))?;
    let path = if input.trim().is_empty() {
        PathBuf::from(default_name)
    } else {
        PathBuf::from(input.trim())
    };
    let opts = ReportOptions {
        substrate: state.substrate(),
        ..opts.clone()
    };
    let doc = ReportDocument::build(&state.params(), &state.result(), &opts);
    let mut sink = FileSink::new(path);
    let outcome = report::export(Some(&mut sink as &mut dyn ReportSink), &doc, format);
    print_notification(&Notification::from_export(&outcome));
    Ok(())
}

pub fn print_notification(n: &Notification) {
    match n.level {
        Level::Info => println!("{}", n.message),
        Level::Error => eprintln!("{}", n.message),
    }
}

/// 현재 결과 전체를 출력한다.
pub fn print_results(state: &ShellState) {
    let r = state.result();
    println!("\nSubstrate: {}", state.substrate());
    println!("Jobs per year:             {}", format_count(r.jobs_per_year));
    println!("Stops avoided per job:     {}", format_decimal(r.stops_avoided_per_job, 2));
    println!("Area per stop:             {} m²", format_decimal(r.m2_per_stop, 2));
    println!("Makeready area saved:      {} m²/year", format_count(r.m2_calage_per_year));
    println!("Printed length:            {} m/year", format_count(r.printed_length_per_year));
    println!("Width-reduction area:      {} m²/year", format_count(r.m2_three_mm_per_year));
    print_summary(&r);
}

fn print_summary(r: &RoiResult) {
    println!("Makeready savings:         {}", format_currency(r.euro_calage));
    println!("Width-reduction savings:   {}", format_currency(r.euro_three_mm));
    println!("Total savings:             {}", format_currency(r.euro_total));
    println!("Net benefit after HaaS:    {}", format_currency(r.euro_net));
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().replace(',', ".").parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Please enter a number."),
        }
    }
}

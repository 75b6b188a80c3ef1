use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use flexo_roi::app::{self, AppError};
use flexo_roi::config::{self, Config, DEFAULT_CONFIG_PATH};
use flexo_roi::report::{self, FileSink, ReportDocument, ReportFormat, ReportOptions, ReportSink};
use flexo_roi::roi::{self, RoiParams, RoiResult};
use flexo_roi::shell::{Notification, ShellState};
use flexo_roi::substrate::SubstrateKind;
use flexo_roi::ui_cli;

/// 플렉소 라인 HaaS ROI 계산기 (CLI)
#[derive(Debug, Parser)]
#[command(name = "flexo_roi_cli", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 디버그 로그 출력
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 파라미터로 ROI를 계산해 출력한다
    Compute {
        #[command(flatten)]
        params: ParamArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
    /// 기준 시나리오 자가 점검
    SelfCheck,
    /// 보고서를 파일로 저장한다
    Report {
        #[command(flatten)]
        params: ParamArgs,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
    },
    /// 대화형 메뉴
    Interactive,
    /// 기본 설정 파일을 만든다
    InitConfig {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Toml,
}

/// 설정값 위에 덮어쓸 파라미터. 지정하지 않은 값은 설정을 따른다.
#[derive(Debug, Clone, Args)]
struct ParamArgs {
    #[arg(long)]
    web_width: Option<f64>,
    #[arg(long)]
    jobs_per_shift: Option<f64>,
    #[arg(long)]
    shifts_per_day: Option<f64>,
    #[arg(long)]
    days_per_year: Option<f64>,
    #[arg(long)]
    stops_per_job: Option<f64>,
    #[arg(long)]
    reduction: Option<f64>,
    #[arg(long)]
    waste_per_stop: Option<f64>,
    #[arg(long)]
    speed: Option<f64>,
    #[arg(long)]
    uptime: Option<f64>,
    #[arg(long)]
    hours_per_shift: Option<f64>,
    /// 원단 단가. 생략하고 --substrate를 주면 원단 기본 단가를 쓴다
    #[arg(long)]
    substrate_price: Option<f64>,
    #[arg(long)]
    haas_price: Option<f64>,
    /// 원단 코드 (paper, pp, pe, pet, thermal, custom)
    #[arg(long)]
    substrate: Option<SubstrateKind>,
}

impl ParamArgs {
    fn resolve(&self, cfg: &Config) -> (RoiParams, SubstrateKind) {
        let base = cfg.params;
        let mut p = RoiParams {
            web_width_m: self.web_width.unwrap_or(base.web_width_m),
            jobs_per_shift: self.jobs_per_shift.unwrap_or(base.jobs_per_shift),
            shifts_per_day: self.shifts_per_day.unwrap_or(base.shifts_per_day),
            days_per_year: self.days_per_year.unwrap_or(base.days_per_year),
            stops_per_job_baseline: self.stops_per_job.unwrap_or(base.stops_per_job_baseline),
            reduction_percent: self.reduction.unwrap_or(base.reduction_percent),
            waste_per_stop_m: self.waste_per_stop.unwrap_or(base.waste_per_stop_m),
            speed_m_per_min: self.speed.unwrap_or(base.speed_m_per_min),
            uptime_percent: self.uptime.unwrap_or(base.uptime_percent),
            hours_per_shift: self.hours_per_shift.unwrap_or(base.hours_per_shift),
            substrate_price: base.substrate_price,
            haas_price: self.haas_price.unwrap_or(base.haas_price),
        };
        let substrate = self.substrate.unwrap_or(cfg.substrate);
        // 원단 선택 → 기본 단가 적용 → 명시 단가 덮어쓰기 순
        if self.substrate.is_some() {
            if let Some(price) = substrate.default_price() {
                p.substrate_price = price;
            }
        }
        if let Some(price) = self.substrate_price {
            p.substrate_price = price;
        }
        (p, substrate)
    }
}

#[derive(Serialize)]
struct ComputeOutput {
    substrate: SubstrateKind,
    params: RoiParams,
    result: RoiResult,
}

/// 프로그램의 엔트리 포인트. 로거를 설정한 뒤 하위 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match try_run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<ExitCode, AppError> {
    let load = || config::load_or_default_from(&cli.config);
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Compute { params, output } => {
            let cfg = load()?;
            let (p, substrate) = params.resolve(&cfg);
            let result = roi::compute_roi(p);
            match output {
                OutputFormat::Text => {
                    ui_cli::print_results(&ShellState::new(p, substrate));
                }
                OutputFormat::Toml => {
                    let out = ComputeOutput {
                        substrate,
                        params: p,
                        result,
                    };
                    let text = toml::to_string_pretty(&out).map_err(config::ConfigError::from)?;
                    print!("{text}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::SelfCheck => {
            let report = roi::run_self_checks();
            print!("{report}");
            Ok(if report.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Report {
            params,
            out,
            format,
        } => {
            let cfg = load()?;
            let (p, substrate) = params.resolve(&cfg);
            let result = roi::compute_roi(p);
            let opts = ReportOptions {
                substrate,
                ..cfg.report_options()
            };
            let doc = ReportDocument::build(&p, &result, &opts);
            let mut sink = FileSink::new(out);
            let outcome = report::export(
                Some(&mut sink as &mut dyn ReportSink),
                &doc,
                format.unwrap_or(cfg.report.format),
            );
            ui_cli::print_notification(&Notification::from_export(&outcome));
            Ok(if outcome.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Interactive => {
            app::run(&load()?)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::InitConfig { force } => {
            if cli.config.exists() && !force {
                eprintln!("{} already exists (use --force)", cli.config.display());
                return Ok(ExitCode::FAILURE);
            }
            Config::default().save_to(&cli.config)?;
            println!("Wrote {}", cli.config.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

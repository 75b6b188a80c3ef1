use crate::config::{Config, ConfigError};
use crate::shell::ShellState;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
}

/// 대화형 CLI의 메인 루프를 실행한다.
pub fn run(config: &Config) -> Result<(), AppError> {
    let mut state = ShellState::new(config.params, config.substrate);
    let opts = config.report_options();
    ui_cli::print_results(&state);
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::EditParameter => ui_cli::handle_edit_parameter(&mut state)?,
            MenuChoice::Substrate => ui_cli::handle_substrate(&mut state)?,
            MenuChoice::ShowResults => ui_cli::print_results(&state),
            MenuChoice::SelfCheck => ui_cli::handle_self_check(),
            MenuChoice::ExportReport => {
                ui_cli::handle_export(&state, &opts, config.report.format)?
            }
            MenuChoice::Exit => {
                println!("Bye.");
                break;
            }
        }
    }
    Ok(())
}

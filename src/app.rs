use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::pv::PvCalcError;
use crate::report::ReportError;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 터미널 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// 계산 입력 오류
    #[error("calculation error: {0}")]
    Calc(#[from] PvCalcError),
    #[error("export error: {0}")]
    Report(#[from] ReportError),
}

/// 대화형 CLI 메인 루프를 실행한다.
///
/// 계산 오류는 메시지만 출력하고 메뉴로 돌아간다. 입출력 오류는 루프를 끝낸다.
pub fn run(config: &Config) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu()? {
            MenuChoice::Regions => {
                ui_cli::handle_regions();
                Ok(())
            }
            MenuChoice::Potential => ui_cli::handle_potential(config),
            MenuChoice::Designer => ui_cli::handle_designer(config),
            MenuChoice::CostSimulation => ui_cli::handle_cost_simulation(config),
            MenuChoice::Emissions => ui_cli::handle_emissions(config),
            MenuChoice::Help => {
                println!("{}", ui_cli::HELP_TEXT);
                Ok(())
            }
            MenuChoice::Exit => {
                println!("Goodbye.");
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(AppError::Calc(e)) => println!("Error: {e}"),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

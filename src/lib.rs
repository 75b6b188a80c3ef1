//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 엔진을 쓰도록 한다.

pub mod app;
pub mod config;
pub mod format;
pub mod report;
pub mod roi;
pub mod shell;
pub mod substrate;
pub mod ui_cli;

//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 계산기를 공유한다.

pub mod analysis;
pub mod app;
pub mod config;
pub mod logging;
pub mod pv;
pub mod report;
pub mod solar_db;
pub mod ui_cli;

//! tracing 구독자 초기화.

use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// 기본 구독자를 설치한다. `RUST_LOG`가 있으면 `default_filter`보다 우선한다.
///
/// 로그는 stderr로 보내 CLI 표 출력과 섞이지 않게 한다. 두 번째 호출은 무시된다.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = Registry::default()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

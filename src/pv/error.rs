use thiserror::Error;

pub type Result<T> = std::result::Result<T, PvCalcError>;

/// PV 계산 입력 검증 오류.
///
/// 모든 오류는 계산 전에 입력만으로 판정하며, 실패 시 부분 결과는 없다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PvCalcError {
    /// 일사량 테이블에 없는 지역
    #[error("unknown region: {0}")]
    InvalidRegion(String),
    /// 0 이하 치수 또는 허용 범위를 벗어난 입력
    #[error("invalid value for {field}: {value}")]
    InvalidDimension { field: &'static str, value: f64 },
    /// 0년 시뮬레이션 기간
    #[error("simulation horizon must be at least one year (got {0})")]
    InvalidHorizon(u32),
    /// 분모가 0이 되는 입력
    #[error("{0} must not be zero")]
    DivisionByZero(&'static str),
}

/// 유한한 양수인지 확인한다.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid(field, value))
    }
}

/// 유한한 0 이상 값인지 확인한다.
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(invalid(field, value))
    }
}

/// 백분율(0~100)을 소수로 바꾼다.
pub(crate) fn percent_to_fraction(field: &'static str, pct: f64) -> Result<f64> {
    if pct.is_finite() && (0.0..=100.0).contains(&pct) {
        Ok(pct / 100.0)
    } else {
        Err(invalid(field, pct))
    }
}

/// 분모로 쓰이는 값. 0이면 `DivisionByZero`, 음수/NaN이면 `InvalidDimension`.
pub(crate) fn require_divisor(field: &'static str, value: f64) -> Result<f64> {
    if value == 0.0 {
        return Err(PvCalcError::DivisionByZero(field));
    }
    require_positive(field, value)
}

fn invalid(field: &'static str, value: f64) -> PvCalcError {
    tracing::warn!(field, value, "rejected calculator input");
    PvCalcError::InvalidDimension { field, value }
}

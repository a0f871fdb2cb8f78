//! PV 시스템 발전량, 설계, 비용, 탄소 배출 계산 모듈 모음.
//! 각 단계는 이전 단계의 결과를 인자로 받아 순수 함수로 계산한다.

pub mod cost_projection;
pub mod emissions;
pub mod error;
pub mod potential;
pub mod sizing;

pub use cost_projection::*;
pub use emissions::*;
pub use error::{PvCalcError, Result};
pub use potential::*;
pub use sizing::*;

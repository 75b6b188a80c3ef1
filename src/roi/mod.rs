//! 플렉소 라인 HaaS 도입 ROI 계산 모듈 모음.
//! 순수 계산 엔진과 기준 시나리오 자가 점검으로 구성한다.

pub mod engine;
pub mod self_check;

pub use engine::*;
pub use self_check::*;

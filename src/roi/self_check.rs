use std::fmt;

use log::warn;

use super::engine::{compute_roi, RoiParams};

/// 자가 점검 허용 상대 오차 (0.1%).
pub const SELF_CHECK_REL_TOL: f64 = 0.001;

/// 기대값이 0일 때 사용하는 절대 허용치.
const ZERO_ABS_EPS: f64 = 1e-9;

/// 점검 항목 하나의 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct SelfCheck {
    pub name: &'static str,
    pub passed: bool,
    pub actual: f64,
    pub expected: f64,
}

/// 점검 결과 묶음.
#[derive(Debug, Clone, PartialEq)]
pub struct SelfCheckReport {
    pub checks: Vec<SelfCheck>,
}

impl SelfCheckReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &SelfCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

impl fmt::Display for SelfCheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.checks {
            let mark = if c.passed { "PASS" } else { "FAIL" };
            writeln!(
                f,
                "[{mark}] {}: actual={:.3} expected={:.3}",
                c.name, c.actual, c.expected
            )?;
        }
        Ok(())
    }
}

/// 상대 오차 기준 근사 비교. `expected == 0`이면 절대 오차로 판정한다.
pub fn approx_eq(actual: f64, expected: f64, rel_tol: f64) -> bool {
    let diff = (actual - expected).abs();
    if expected == 0.0 {
        return diff <= ZERO_ABS_EPS;
    }
    diff <= expected.abs() * rel_tol
}

/// 기준 시나리오로 엔진을 돌려 손계산 값과 비교한다.
///
/// 기대값은 엔진 코드를 거치지 않고 리터럴 식으로 따로 계산한다.
pub fn run_self_checks() -> SelfCheckReport {
    let r = compute_roi(RoiParams::baseline());

    // 0.33 m × 100 m × (6 × 50%) 정지 × (6 작업 × 2 교대 × 250 일)
    let expected_calage = 0.33 * 100.0 * (6.0 * 0.5) * (6.0 * 2.0 * 250.0);
    // 0.003 m × 165 m/min × 60% × (8 h × 60 min × 2 교대) × 250 일
    let expected_three_mm = 0.003 * 165.0 * 0.6 * (8.0 * 60.0 * 2.0) * 250.0;

    let checks = vec![
        check("m2_calage_per_year", r.m2_calage_per_year, expected_calage),
        check("m2_three_mm_per_year", r.m2_three_mm_per_year, expected_three_mm),
    ];
    let report = SelfCheckReport { checks };
    for c in report.failed() {
        warn!(
            "자가 점검 실패: {} (actual={}, expected={})",
            c.name, c.actual, c.expected
        );
    }
    report
}

fn check(name: &'static str, actual: f64, expected: f64) -> SelfCheck {
    SelfCheck {
        name,
        passed: approx_eq(actual, expected, SELF_CHECK_REL_TOL),
        actual,
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_relative_window() {
        assert!(approx_eq(1000.9, 1000.0, 0.001));
        assert!(!approx_eq(1001.1, 1000.0, 0.001));
        assert!(approx_eq(-999.5, -1000.0, 0.001));
    }

    #[test]
    fn approx_eq_zero_expected() {
        assert!(approx_eq(0.0, 0.0, 0.001));
        assert!(approx_eq(1e-12, 0.0, 0.001));
        assert!(!approx_eq(1e-3, 0.0, 0.001));
    }
}

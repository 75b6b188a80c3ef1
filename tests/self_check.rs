//! 기준 시나리오 자가 점검 테스트.
use flexo_roi::roi::{approx_eq, run_self_checks, SELF_CHECK_REL_TOL};

#[test]
fn baseline_self_checks_pass() {
    let report = run_self_checks();
    let names: Vec<&str> = report.checks.iter().map(|c| c.name).collect();
    assert_eq!(names, ["m2_calage_per_year", "m2_three_mm_per_year"]);
    assert!(report.all_passed(), "{report}");
    assert_eq!(report.failed().count(), 0);
}

#[test]
fn expectations_are_non_zero() {
    for c in run_self_checks().checks {
        assert!(c.expected != 0.0, "{} expected must be non-zero", c.name);
    }
}

#[test]
fn tolerance_is_one_per_mille() {
    assert_eq!(SELF_CHECK_REL_TOL, 0.001);
    assert!(approx_eq(297_250.0, 297_000.0, SELF_CHECK_REL_TOL));
    assert!(!approx_eq(297_350.0, 297_000.0, SELF_CHECK_REL_TOL));
}

#[test]
fn report_display_marks_each_check() {
    let text = run_self_checks().to_string();
    assert_eq!(text.lines().count(), 2);
    assert!(text.lines().all(|l| l.starts_with("[PASS]")));
}

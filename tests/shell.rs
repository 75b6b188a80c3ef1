//! 화면 상태(입력 보관, 원단 선택 2단계, 위젯 범위) 테스트.
use flexo_roi::roi::{compute_roi, RoiParams};
use flexo_roi::shell::ShellState;
use flexo_roi::substrate::SubstrateKind;

#[test]
fn new_state_holds_baseline_result() {
    let state = ShellState::default();
    assert_eq!(state.params(), RoiParams::baseline());
    assert_eq!(state.result(), compute_roi(RoiParams::baseline()));
}

#[test]
fn every_change_recomputes_from_params() {
    let mut state = ShellState::default();
    let r = state.set_days_per_year(0.0);
    assert_eq!(r.euro_net, -20_000.0);
    assert_eq!(state.result(), compute_roi(state.params()));
}

#[test]
fn selecting_substrate_does_not_change_price_until_applied() {
    let mut state = ShellState::default();
    let before = state.params().substrate_price;
    let suggestion = state.select_substrate(SubstrateKind::Polyester);
    assert_eq!(state.substrate(), SubstrateKind::Polyester);
    assert_eq!(state.params().substrate_price, before);
    assert_eq!(suggestion.price, Some(0.75));

    state.apply_price_suggestion(suggestion);
    assert_eq!(state.params().substrate_price, 0.75);
    assert!(!state.price_overridden());
}

#[test]
fn manual_price_survives_substrate_selection() {
    let mut state = ShellState::default();
    state.set_substrate_price(0.9);
    assert!(state.price_overridden());
    state.select_substrate(SubstrateKind::PaperLabel);
    assert_eq!(state.params().substrate_price, 0.9);
}

#[test]
fn custom_substrate_keeps_current_price() {
    let mut state = ShellState::default();
    state.set_substrate_price(1.1);
    let suggestion = state.select_substrate(SubstrateKind::Custom);
    assert_eq!(suggestion.price, None);
    state.apply_price_suggestion(suggestion);
    assert_eq!(state.params().substrate_price, 1.1);
}

#[test]
fn widget_bounds_are_applied_by_the_shell() {
    let mut state = ShellState::default();
    state.set_web_width(2.0);
    assert_eq!(state.params().web_width_m, 0.60);
    state.set_reduction_percent(150.0);
    assert_eq!(state.params().reduction_percent, 100.0);
    state.set_uptime_percent(-5.0);
    assert_eq!(state.params().uptime_percent, 0.0);
    state.set_shifts_per_day(2.4);
    assert_eq!(state.params().shifts_per_day, 2.0);
    state.set_shifts_per_day(7.0);
    assert_eq!(state.params().shifts_per_day, 3.0);
    state.set_speed(-10.0);
    assert_eq!(state.params().speed_m_per_min, 0.0);
}

#[test]
fn set_params_clamps_whole_record() {
    let mut state = ShellState::default();
    let r = state.set_params(RoiParams {
        web_width_m: 0.01,
        shifts_per_day: 0.0,
        ..RoiParams::baseline()
    });
    assert_eq!(state.params().web_width_m, 0.10);
    assert_eq!(state.params().shifts_per_day, 1.0);
    assert_eq!(r, compute_roi(state.params()));
}

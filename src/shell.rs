//! CLI/GUI가 공유하는 화면 상태.
//!
//! 입력값은 `ShellState`가 하나의 `RoiParams`로 소유하고, 변경될 때마다 값 복사로
//! 엔진에 넘겨 결과를 새로 만든다. 위젯 범위 제한은 여기서만 하고 엔진은 검증하지 않는다.

use std::ops::RangeInclusive;

use log::debug;

use crate::report::{ReportError, ReportReceipt};
use crate::roi::{compute_roi, RoiParams, RoiResult};
use crate::substrate::SubstrateKind;

/// 위젯 입력 범위.
pub struct ParamBounds;

impl ParamBounds {
    pub const WEB_WIDTH_M: RangeInclusive<f64> = 0.10..=0.60;
    pub const SHIFTS_PER_DAY: [f64; 3] = [1.0, 2.0, 3.0];
    pub const PERCENT: RangeInclusive<f64> = 0.0..=100.0;
    pub const HOURS_PER_SHIFT: RangeInclusive<f64> = 0.0..=24.0;
    pub const DAYS_PER_YEAR: RangeInclusive<f64> = 0.0..=366.0;

    fn clamp(value: f64, range: &RangeInclusive<f64>) -> f64 {
        value.clamp(*range.start(), *range.end())
    }

    /// 숫자 입력칸은 음수만 막는다.
    fn non_negative(value: f64) -> f64 {
        value.max(0.0)
    }
}

/// 원단 선택 후 제안되는 기본 단가.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSuggestion {
    pub substrate: SubstrateKind,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// 사용자에게 한 줄로 보여줄 알림.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    /// 보고서 출력 결과를 알림으로 바꾼다. 실패도 치명적이지 않다.
    pub fn from_export(result: &Result<ReportReceipt, ReportError>) -> Self {
        match result {
            Ok(receipt) => Self::info(format!("Report saved to {}", receipt.destination)),
            Err(e) => Self::error(format!("Report export failed: {e}")),
        }
    }
}

/// 화면 입력 상태.
#[derive(Debug, Clone)]
pub struct ShellState {
    params: RoiParams,
    substrate: SubstrateKind,
    price_overridden: bool,
    last_result: RoiResult,
}

impl ShellState {
    pub fn new(params: RoiParams, substrate: SubstrateKind) -> Self {
        Self {
            params,
            substrate,
            price_overridden: false,
            last_result: compute_roi(params),
        }
    }

    pub fn params(&self) -> RoiParams {
        self.params
    }

    pub fn substrate(&self) -> SubstrateKind {
        self.substrate
    }

    pub fn price_overridden(&self) -> bool {
        self.price_overridden
    }

    pub fn result(&self) -> RoiResult {
        self.last_result
    }

    /// 현재 입력으로 결과를 다시 계산한다.
    pub fn recompute(&mut self) -> RoiResult {
        debug!("입력 변경 → 재계산");
        self.last_result = compute_roi(self.params);
        self.last_result
    }

    /// 입력 전체를 바꾼다. 각 값은 위젯 범위로 제한된다.
    pub fn set_params(&mut self, params: RoiParams) -> RoiResult {
        self.params = params;
        self.clamp_to_widgets();
        self.recompute()
    }

    pub fn set_web_width(&mut self, m: f64) -> RoiResult {
        self.params.web_width_m = ParamBounds::clamp(m, &ParamBounds::WEB_WIDTH_M);
        self.recompute()
    }

    /// 교대 수는 1~3 중 가장 가까운 값으로 맞춘다.
    pub fn set_shifts_per_day(&mut self, shifts: f64) -> RoiResult {
        self.params.shifts_per_day = nearest_shift(shifts);
        self.recompute()
    }

    pub fn set_jobs_per_shift(&mut self, jobs: f64) -> RoiResult {
        self.params.jobs_per_shift = ParamBounds::non_negative(jobs);
        self.recompute()
    }

    pub fn set_days_per_year(&mut self, days: f64) -> RoiResult {
        self.params.days_per_year = ParamBounds::clamp(days, &ParamBounds::DAYS_PER_YEAR);
        self.recompute()
    }

    pub fn set_stops_per_job(&mut self, stops: f64) -> RoiResult {
        self.params.stops_per_job_baseline = ParamBounds::non_negative(stops);
        self.recompute()
    }

    pub fn set_reduction_percent(&mut self, pct: f64) -> RoiResult {
        self.params.reduction_percent = ParamBounds::clamp(pct, &ParamBounds::PERCENT);
        self.recompute()
    }

    pub fn set_waste_per_stop(&mut self, m: f64) -> RoiResult {
        self.params.waste_per_stop_m = ParamBounds::non_negative(m);
        self.recompute()
    }

    pub fn set_speed(&mut self, m_per_min: f64) -> RoiResult {
        self.params.speed_m_per_min = ParamBounds::non_negative(m_per_min);
        self.recompute()
    }

    pub fn set_uptime_percent(&mut self, pct: f64) -> RoiResult {
        self.params.uptime_percent = ParamBounds::clamp(pct, &ParamBounds::PERCENT);
        self.recompute()
    }

    pub fn set_hours_per_shift(&mut self, hours: f64) -> RoiResult {
        self.params.hours_per_shift = ParamBounds::clamp(hours, &ParamBounds::HOURS_PER_SHIFT);
        self.recompute()
    }

    pub fn set_haas_price(&mut self, price: f64) -> RoiResult {
        self.params.haas_price = price;
        self.recompute()
    }

    /// 단가를 직접 입력한다. 이후 원단을 바꿔도 제안을 적용하기 전까지 유지된다.
    pub fn set_substrate_price(&mut self, price: f64) -> RoiResult {
        self.params.substrate_price = price;
        self.price_overridden = true;
        self.recompute()
    }

    /// 1단계: 원단 종류만 바꾸고 기본 단가 제안을 돌려준다. 단가는 아직 바뀌지 않는다.
    pub fn select_substrate(&mut self, kind: SubstrateKind) -> PriceSuggestion {
        self.substrate = kind;
        PriceSuggestion {
            substrate: kind,
            price: kind.default_price(),
        }
    }

    /// 2단계: 제안 단가를 적용한다. 제안이 없으면(사용자 정의) 아무것도 하지 않는다.
    pub fn apply_price_suggestion(&mut self, suggestion: PriceSuggestion) -> RoiResult {
        if let Some(price) = suggestion.price {
            self.params.substrate_price = price;
            self.price_overridden = false;
        }
        self.recompute()
    }

    fn clamp_to_widgets(&mut self) {
        let p = &mut self.params;
        p.web_width_m = ParamBounds::clamp(p.web_width_m, &ParamBounds::WEB_WIDTH_M);
        p.shifts_per_day = nearest_shift(p.shifts_per_day);
        p.days_per_year = ParamBounds::clamp(p.days_per_year, &ParamBounds::DAYS_PER_YEAR);
        p.reduction_percent = ParamBounds::clamp(p.reduction_percent, &ParamBounds::PERCENT);
        p.uptime_percent = ParamBounds::clamp(p.uptime_percent, &ParamBounds::PERCENT);
        p.hours_per_shift = ParamBounds::clamp(p.hours_per_shift, &ParamBounds::HOURS_PER_SHIFT);
        p.jobs_per_shift = ParamBounds::non_negative(p.jobs_per_shift);
        p.stops_per_job_baseline = ParamBounds::non_negative(p.stops_per_job_baseline);
        p.waste_per_stop_m = ParamBounds::non_negative(p.waste_per_stop_m);
        p.speed_m_per_min = ParamBounds::non_negative(p.speed_m_per_min);
    }
}

fn nearest_shift(shifts: f64) -> f64 {
    ParamBounds::SHIFTS_PER_DAY
        .iter()
        .copied()
        .min_by(|a, b| {
            (a - shifts)
                .abs()
                .partial_cmp(&(b - shifts).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(1.0)
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(RoiParams::baseline(), SubstrateKind::default())
    }
}

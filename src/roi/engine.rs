use log::debug;
use serde::{Deserialize, Serialize};

/// 폭 축소로 절감되는 웹 폭 [m]. 3 mm 고정값이며 설정으로 바꾸지 않는다.
pub const WIDTH_REDUCTION_M: f64 = 0.003;

/// ROI 계산 입력. 화면 상태에서 매 계산마다 새로 만들어 값으로 전달한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiParams {
    /// 인쇄 웹 폭 [m]
    pub web_width_m: f64,
    /// 교대당 작업 수
    pub jobs_per_shift: f64,
    /// 일일 교대 수 (실무상 1~3)
    pub shifts_per_day: f64,
    /// 연간 가동일
    pub days_per_year: f64,
    /// 개선 전 작업당 정지(메이크레디) 횟수
    pub stops_per_job_baseline: f64,
    /// 정지 감소율 [%] (0~100)
    pub reduction_percent: f64,
    /// 정지 1회당 손실 길이 [m]
    pub waste_per_stop_m: f64,
    /// 라인 속도 [m/min]
    pub speed_m_per_min: f64,
    /// 실인쇄 가동률 [%] (0~100)
    pub uptime_percent: f64,
    /// 교대 시간 [h]
    pub hours_per_shift: f64,
    /// 원단 단가 [통화/m²]
    pub substrate_price: f64,
    /// HaaS 연간 구독료 [통화/년]
    pub haas_price: f64,
}

impl RoiParams {
    /// 기준 시나리오(0.33 m 폭, 2교대, 250일, 50% 감소 등).
    pub const fn baseline() -> Self {
        Self {
            web_width_m: 0.33,
            jobs_per_shift: 6.0,
            shifts_per_day: 2.0,
            days_per_year: 250.0,
            stops_per_job_baseline: 6.0,
            reduction_percent: 50.0,
            waste_per_stop_m: 100.0,
            speed_m_per_min: 165.0,
            uptime_percent: 60.0,
            hours_per_shift: 8.0,
            substrate_price: 0.6,
            haas_price: 20_000.0,
        }
    }
}

impl Default for RoiParams {
    fn default() -> Self {
        Self::baseline()
    }
}

/// ROI 계산 결과. 반올림되지 않은 값만 담으며, 표시용 반올림은 출력 단계에서만 한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub jobs_per_day: f64,
    pub jobs_per_year: f64,
    /// 작업당 회피 정지 횟수. 연간 평균값이므로 정수로 맞추지 않는다.
    pub stops_avoided_per_job: f64,
    /// 정지 1회당 손실 면적 [m²]
    pub m2_per_stop: f64,
    /// 메이크레디 절감 면적 [m²/년]
    pub m2_calage_per_year: f64,
    /// 일일 인쇄 길이 [m/일]
    pub printed_length_per_day: f64,
    /// 연간 인쇄 길이 [m/년]
    pub printed_length_per_year: f64,
    /// 3 mm 폭 축소 절감 면적 [m²/년]
    pub m2_three_mm_per_year: f64,
    /// 메이크레디 절감액 [통화/년]
    pub euro_calage: f64,
    /// 폭 축소 절감액 [통화/년]
    pub euro_three_mm: f64,
    /// 총 절감액 [통화/년]
    pub euro_total: f64,
    /// 구독료 차감 후 순이익 [통화/년]. 음수일 수 있다.
    pub euro_net: f64,
}

/// 입력 파라미터로 ROI 결과를 계산한다.
///
/// 입력 범위를 검증하지 않으며 오류도 반환하지 않는다. 0 폭, 0 속도, 음수 단가 같은
/// 값은 그대로 0 또는 음수 결과로 이어지고 NaN/무한대도 그대로 전파된다.
pub fn compute_roi(p: RoiParams) -> RoiResult {
    let jobs_per_day = p.jobs_per_shift * p.shifts_per_day;
    let jobs_per_year = jobs_per_day * p.days_per_year;

    // 감소율을 먼저 비율로 바꿔야 100%에서 기준 정지 횟수가 정확히 유지된다.
    let stops_avoided_per_job = p.stops_per_job_baseline * (p.reduction_percent / 100.0);
    let m2_per_stop = p.web_width_m * p.waste_per_stop_m;
    let m2_calage_per_year = m2_per_stop * stops_avoided_per_job * jobs_per_year;

    let minutes_per_day = p.hours_per_shift * 60.0 * p.shifts_per_day;
    let printed_length_per_day = p.speed_m_per_min * (p.uptime_percent / 100.0) * minutes_per_day;
    let printed_length_per_year = printed_length_per_day * p.days_per_year;
    let m2_three_mm_per_year = WIDTH_REDUCTION_M * printed_length_per_year;

    let euro_calage = m2_calage_per_year * p.substrate_price;
    let euro_three_mm = m2_three_mm_per_year * p.substrate_price;
    let euro_total = euro_calage + euro_three_mm;
    let euro_net = euro_total - p.haas_price;

    debug!(
        "ROI 계산: 메이크레디 {m2_calage_per_year:.1} m², 폭 축소 {m2_three_mm_per_year:.1} m², 순이익 {euro_net:.1}"
    );

    RoiResult {
        jobs_per_day,
        jobs_per_year,
        stops_avoided_per_job,
        m2_per_stop,
        m2_calage_per_year,
        printed_length_per_day,
        printed_length_per_year,
        m2_three_mm_per_year,
        euro_calage,
        euro_three_mm,
        euro_total,
        euro_net,
    }
}

//! 결과 표시용 숫자 서식. 로케일은 프랑스식으로 고정한다
//! (천 단위 U+202F 구분, 소수점 쉼표, 금액 뒤 `€`).
//!
//! 반올림은 여기서만 하며, 서식화된 값을 다시 계산에 넣지 않는다.

/// 천 단위 구분자 (좁은 줄바꿈 없는 공백).
pub const GROUP_SEPARATOR: char = '\u{202F}';
/// 통화 기호 앞 공백 (줄바꿈 없는 공백).
pub const CURRENCY_SPACE: char = '\u{00A0}';
pub const CURRENCY_SYMBOL: &str = "€";

/// 정수로 반올림해 천 단위로 묶는다. `-0`은 `0`으로 표시한다.
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group(&digits));
    out
}

/// 소수점 없는 금액 서식.
pub fn format_currency(value: f64) -> String {
    format!("{}{CURRENCY_SPACE}{CURRENCY_SYMBOL}", format_count(value))
}

/// 입력값 표시용 소수 서식. 끝의 0은 남긴다.
pub fn format_decimal(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let s = format!("{:.*}", places, value.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };
    let is_zero = s.chars().all(|c| c == '0' || c == '.');
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn group(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(297_000.0), "297\u{202F}000");
        assert_eq!(format_count(23_760_000.0), "23\u{202F}760\u{202F}000");
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(0.0), "0");
    }

    #[test]
    fn rounds_only_for_display() {
        assert_eq!(format_count(71_279.5), "71\u{202F}280");
        assert_eq!(format_count(-0.4), "0");
        assert_eq!(format_count(-20_000.0), "-20\u{202F}000");
    }

    #[test]
    fn currency_has_no_decimals() {
        assert_eq!(format_currency(220_968.4), "220\u{202F}968\u{A0}€");
        assert_eq!(format_currency(-20_000.0), "-20\u{202F}000\u{A0}€");
    }

    #[test]
    fn decimal_uses_comma() {
        assert_eq!(format_decimal(0.33, 2), "0,33");
        assert_eq!(format_decimal(1234.5, 1), "1\u{202F}234,5");
        assert_eq!(format_decimal(-0.001, 2), "0,00");
        assert_eq!(format_decimal(20_000.0, 0), "20\u{202F}000");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_count(f64::NAN), "NaN");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-∞\u{A0}€");
    }
}

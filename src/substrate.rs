//! 원단 종류별 기본 단가 테이블.
//! 값은 견적 초기값일 뿐이며 사용자가 언제든 단가를 직접 덮어쓸 수 있다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubstrateKind {
    #[serde(rename = "paper")]
    PaperLabel,
    #[serde(rename = "pp")]
    Polypropylene,
    #[serde(rename = "pe")]
    Polyethylene,
    #[serde(rename = "pet")]
    Polyester,
    #[serde(rename = "thermal")]
    ThermalPaper,
    /// 사용자 정의. 기본 단가 제안이 없다.
    #[serde(rename = "custom")]
    Custom,
}

#[derive(Debug)]
pub struct SubstrateData {
    pub kind: SubstrateKind,
    pub code: &'static str,
    pub label: &'static str,
    /// 기본 단가 [통화/m²]
    pub default_price: Option<f64>,
}

const SUBSTRATES: &[SubstrateData] = &[
    SubstrateData {
        kind: SubstrateKind::PaperLabel,
        code: "paper",
        label: "Paper labelstock",
        default_price: Some(0.45),
    },
    SubstrateData {
        kind: SubstrateKind::Polypropylene,
        code: "pp",
        label: "PP film",
        default_price: Some(0.60),
    },
    SubstrateData {
        kind: SubstrateKind::Polyethylene,
        code: "pe",
        label: "PE film",
        default_price: Some(0.55),
    },
    SubstrateData {
        kind: SubstrateKind::Polyester,
        code: "pet",
        label: "PET film",
        default_price: Some(0.75),
    },
    SubstrateData {
        kind: SubstrateKind::ThermalPaper,
        code: "thermal",
        label: "Direct thermal paper",
        default_price: Some(0.40),
    },
    SubstrateData {
        kind: SubstrateKind::Custom,
        code: "custom",
        label: "Custom",
        default_price: None,
    },
];

pub fn substrates() -> &'static [SubstrateData] {
    SUBSTRATES
}

pub fn find_substrate(code: &str) -> Option<&'static SubstrateData> {
    SUBSTRATES
        .iter()
        .find(|s| s.code.eq_ignore_ascii_case(code) || s.label.eq_ignore_ascii_case(code))
}

impl SubstrateKind {
    pub fn data(self) -> &'static SubstrateData {
        SUBSTRATES
            .iter()
            .find(|s| s.kind == self)
            .unwrap_or(&SUBSTRATES[SUBSTRATES.len() - 1])
    }

    pub fn label(self) -> &'static str {
        self.data().label
    }

    pub fn code(self) -> &'static str {
        self.data().code
    }

    pub fn default_price(self) -> Option<f64> {
        self.data().default_price
    }

    pub fn all() -> impl Iterator<Item = SubstrateKind> {
        SUBSTRATES.iter().map(|s| s.kind)
    }
}

impl Default for SubstrateKind {
    fn default() -> Self {
        SubstrateKind::Polypropylene
    }
}

impl fmt::Display for SubstrateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("알 수 없는 원단 코드: {0}")]
pub struct UnknownSubstrate(pub String);

impl FromStr for SubstrateKind {
    type Err = UnknownSubstrate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_substrate(s.trim())
            .map(|d| d.kind)
            .ok_or_else(|| UnknownSubstrate(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_by_code_or_label() {
        assert_eq!("pp".parse::<SubstrateKind>(), Ok(SubstrateKind::Polypropylene));
        assert_eq!("PET film".parse::<SubstrateKind>(), Ok(SubstrateKind::Polyester));
        assert!("cardboard".parse::<SubstrateKind>().is_err());
    }

    #[test]
    fn every_kind_has_a_row() {
        for kind in SubstrateKind::all() {
            assert_eq!(kind.data().kind, kind);
        }
        assert_eq!(SubstrateKind::Custom.default_price(), None);
    }

    #[test]
    fn default_matches_baseline_price() {
        assert_eq!(SubstrateKind::default().default_price(), Some(0.60));
    }
}

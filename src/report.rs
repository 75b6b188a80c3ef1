//! 인쇄용 ROI 보고서 생성.
//!
//! 보고서는 입력 일부와 금액 결과 네 가지, 계산식 설명 한 줄로 구성된다.
//! 문서 자체는 반올림되지 않은 값을 들고 있고 렌더링할 때만 서식화한다.
//! 출력 대상은 [`ReportSink`]로 추상화하며, 없거나 실패해도 계산 경로에는 영향이 없다.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::format::{format_count, format_currency, format_decimal};
use crate::roi::{RoiParams, RoiResult};
use crate::substrate::SubstrateKind;

/// 보고서 생성/출력 오류.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// 보고서 출력 수단이 없음
    #[error("보고서 출력 기능을 사용할 수 없습니다")]
    SinkUnavailable,
    /// 파일 입출력 오류
    #[error("보고서 저장 실패 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Markdown => "md",
        }
    }
}

/// 보고서 머리말 옵션.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub title: String,
    pub site_name: Option<String>,
    pub substrate: SubstrateKind,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "Flexo HaaS ROI".to_string(),
            site_name: None,
            substrate: SubstrateKind::default(),
        }
    }
}

/// 값의 표시 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueStyle {
    Count,
    Currency,
    Decimal(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: f64,
    pub style: ValueStyle,
    pub unit: &'static str,
}

impl ReportLine {
    fn new(label: &'static str, value: f64, style: ValueStyle, unit: &'static str) -> Self {
        Self {
            label,
            value,
            style,
            unit,
        }
    }

    /// 최종 표시 문자열. 반올림은 여기서만 일어난다.
    pub fn display_value(&self) -> String {
        let v = match self.style {
            ValueStyle::Count => format_count(self.value),
            ValueStyle::Currency => format_currency(self.value),
            ValueStyle::Decimal(places) => format_decimal(self.value, places),
        };
        if self.unit.is_empty() {
            v
        } else {
            format!("{v} {}", self.unit)
        }
    }
}

pub const FORMULA_EXPLANATION: &str = "Makeready area saved = web width × waste per stop × stops avoided per job × jobs per year; \
width-reduction area saved = 0.003 m × line speed × uptime × shift minutes per day × operating days per year.";

/// 렌더링 전 보고서 내용.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub site_name: Option<String>,
    pub substrate_label: &'static str,
    pub inputs: Vec<ReportLine>,
    pub savings: Vec<ReportLine>,
    pub explanation: &'static str,
}

impl ReportDocument {
    pub fn build(p: &RoiParams, r: &RoiResult, opts: &ReportOptions) -> Self {
        use ValueStyle::*;
        let inputs = vec![
            ReportLine::new("Web width", p.web_width_m, Decimal(3), "m"),
            ReportLine::new("Jobs per shift", p.jobs_per_shift, Count, ""),
            ReportLine::new("Shifts per day", p.shifts_per_day, Count, ""),
            ReportLine::new("Operating days per year", p.days_per_year, Count, ""),
            ReportLine::new("Stops per job (before)", p.stops_per_job_baseline, Decimal(1), ""),
            ReportLine::new("Stop reduction", p.reduction_percent, Count, "%"),
            ReportLine::new("Waste per stop", p.waste_per_stop_m, Count, "m"),
            ReportLine::new("Line speed", p.speed_m_per_min, Count, "m/min"),
            ReportLine::new("Uptime", p.uptime_percent, Count, "%"),
            ReportLine::new("Substrate price", p.substrate_price, Decimal(2), "€/m²"),
            ReportLine::new("HaaS subscription", p.haas_price, Currency, "/ year"),
        ];
        let savings = vec![
            ReportLine::new("Makeready savings", r.euro_calage, Currency, "/ year"),
            ReportLine::new("Width-reduction savings (3 mm)", r.euro_three_mm, Currency, "/ year"),
            ReportLine::new("Total savings", r.euro_total, Currency, "/ year"),
            ReportLine::new("Net benefit after HaaS", r.euro_net, Currency, "/ year"),
        ];
        Self {
            title: opts.title.clone(),
            site_name: opts.site_name.clone(),
            substrate_label: opts.substrate.label(),
            inputs,
            savings,
            explanation: FORMULA_EXPLANATION,
        }
    }
}

impl ReportFormat {
    pub fn render(self, doc: &ReportDocument) -> String {
        match self {
            ReportFormat::Text => render_text(doc),
            ReportFormat::Markdown => render_markdown(doc),
        }
    }
}

fn render_text(doc: &ReportDocument) -> String {
    let width = doc
        .inputs
        .iter()
        .chain(doc.savings.iter())
        .map(|l| l.label.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    out.push_str(&doc.title);
    out.push('\n');
    out.push_str(&"=".repeat(doc.title.chars().count()));
    out.push('\n');
    if let Some(site) = &doc.site_name {
        out.push_str(&format!("Site: {site}\n"));
    }
    out.push_str(&format!("Substrate: {}\n\n", doc.substrate_label));

    out.push_str("Inputs\n------\n");
    for l in &doc.inputs {
        out.push_str(&format!("{:<width$}  {}\n", l.label, l.display_value()));
    }
    out.push_str("\nSavings\n-------\n");
    for l in &doc.savings {
        out.push_str(&format!("{:<width$}  {}\n", l.label, l.display_value()));
    }
    out.push('\n');
    out.push_str(doc.explanation);
    out.push('\n');
    out
}

fn render_markdown(doc: &ReportDocument) -> String {
    let mut out = format!("# {}\n\n", doc.title);
    if let Some(site) = &doc.site_name {
        out.push_str(&format!("**Site:** {site}  \n"));
    }
    out.push_str(&format!("**Substrate:** {}\n\n", doc.substrate_label));
    for (heading, lines) in [("Inputs", &doc.inputs), ("Savings", &doc.savings)] {
        out.push_str(&format!("## {heading}\n\n| Item | Value |\n|---|---:|\n"));
        for l in lines {
            out.push_str(&format!("| {} | {} |\n", l.label, l.display_value()));
        }
        out.push('\n');
    }
    out.push_str(&format!("_{}_\n", doc.explanation));
    out
}

/// 출력 결과 정보.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportReceipt {
    pub destination: String,
    pub bytes: usize,
}

/// 렌더링된 보고서를 받아 내보내는 대상.
pub trait ReportSink {
    fn name(&self) -> &str;
    fn write(&mut self, rendered: &str) -> Result<ReportReceipt, ReportError>;
}

/// 파일로 저장하는 sink.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn write(&mut self, rendered: &str) -> Result<ReportReceipt, ReportError> {
        fs::write(&self.path, rendered).map_err(|source| ReportError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(ReportReceipt {
            destination: self.path.display().to_string(),
            bytes: rendered.len(),
        })
    }
}

/// 메모리 버퍼에 모아두는 sink. 미리보기와 테스트에 쓴다.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub contents: String,
}

impl ReportSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn write(&mut self, rendered: &str) -> Result<ReportReceipt, ReportError> {
        self.contents = rendered.to_string();
        Ok(ReportReceipt {
            destination: "memory".to_string(),
            bytes: rendered.len(),
        })
    }
}

/// 보고서를 렌더링해 sink로 보낸다. sink가 없으면 `SinkUnavailable`.
pub fn export(
    sink: Option<&mut dyn ReportSink>,
    doc: &ReportDocument,
    format: ReportFormat,
) -> Result<ReportReceipt, ReportError> {
    let Some(sink) = sink else {
        warn!("보고서 sink 없음");
        return Err(ReportError::SinkUnavailable);
    };
    let rendered = format.render(doc);
    let receipt = sink.write(&rendered).inspect_err(|e| warn!("보고서 출력 실패: {e}"))?;
    info!(
        "보고서 출력 완료: {} → {} ({} bytes)",
        sink.name(),
        receipt.destination,
        receipt.bytes
    );
    Ok(receipt)
}

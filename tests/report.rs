//! 보고서 렌더링과 sink 출력 테스트.
use flexo_roi::report::{
    export, FileSink, MemorySink, ReportDocument, ReportError, ReportFormat, ReportOptions,
    ReportReceipt, ReportSink, FORMULA_EXPLANATION,
};
use flexo_roi::roi::{compute_roi, RoiParams};
use flexo_roi::shell::{Level, Notification};
use flexo_roi::substrate::SubstrateKind;

fn baseline_doc() -> ReportDocument {
    let p = RoiParams::baseline();
    let opts = ReportOptions {
        site_name: Some("Plant A".to_string()),
        ..ReportOptions::default()
    };
    ReportDocument::build(&p, &compute_roi(p), &opts)
}

/// 항상 실패하는 sink.
struct BrokenSink;

impl ReportSink for BrokenSink {
    fn name(&self) -> &str {
        "broken"
    }

    fn write(&mut self, _rendered: &str) -> Result<ReportReceipt, ReportError> {
        Err(ReportError::Io {
            path: "/nowhere".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }
}

#[test]
fn document_lists_four_monetary_outputs() {
    let doc = baseline_doc();
    let savings: Vec<&str> = doc.savings.iter().map(|l| l.label).collect();
    assert_eq!(
        savings,
        [
            "Makeready savings",
            "Width-reduction savings (3 mm)",
            "Total savings",
            "Net benefit after HaaS",
        ]
    );
    // 문서에는 반올림 전 값이 그대로 남는다.
    assert_eq!(doc.savings[2].value, compute_roi(RoiParams::baseline()).euro_total);
    assert_eq!(doc.substrate_label, SubstrateKind::default().label());
}

#[test]
fn text_render_formats_currency() {
    let text = ReportFormat::Text.render(&baseline_doc());
    assert!(text.starts_with("Flexo HaaS ROI\n"));
    assert!(text.contains("Site: Plant A"));
    assert!(text.contains("178\u{202F}200\u{A0}€ / year"));
    assert!(text.contains("42\u{202F}768\u{A0}€ / year"));
    assert!(text.contains("220\u{202F}968\u{A0}€ / year"));
    assert!(text.contains("200\u{202F}968\u{A0}€ / year"));
    assert!(text.contains("0,330 m"));
    assert!(text.trim_end().ends_with(FORMULA_EXPLANATION));
}

#[test]
fn markdown_render_has_tables() {
    let md = ReportFormat::Markdown.render(&baseline_doc());
    assert!(md.starts_with("# Flexo HaaS ROI"));
    assert!(md.contains("## Inputs"));
    assert!(md.contains("## Savings"));
    assert!(md.contains("| Total savings | 220\u{202F}968\u{A0}€ / year |"));
}

#[test]
fn memory_sink_receives_rendered_text() {
    let doc = baseline_doc();
    let mut sink = MemorySink::default();
    let receipt = export(Some(&mut sink as &mut dyn ReportSink), &doc, ReportFormat::Text)
        .expect("memory export");
    assert_eq!(receipt.bytes, sink.contents.len());
    assert_eq!(sink.contents, ReportFormat::Text.render(&doc));
}

#[test]
fn file_sink_writes_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roi.md");
    let mut sink = FileSink::new(&path);
    let receipt = export(
        Some(&mut sink as &mut dyn ReportSink),
        &baseline_doc(),
        ReportFormat::Markdown,
    )
    .expect("file export");
    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written.len(), receipt.bytes);
    assert!(written.contains("Net benefit after HaaS"));
}

#[test]
fn missing_sink_is_recoverable() {
    let outcome = export(None, &baseline_doc(), ReportFormat::Text);
    assert!(matches!(outcome, Err(ReportError::SinkUnavailable)));
    let n = Notification::from_export(&outcome);
    assert_eq!(n.level, Level::Error);
    assert!(n.message.starts_with("Report export failed"));
}

#[test]
fn failing_sink_becomes_single_notification() {
    let mut sink = BrokenSink;
    let outcome = export(Some(&mut sink as &mut dyn ReportSink), &baseline_doc(), ReportFormat::Text);
    assert!(matches!(outcome, Err(ReportError::Io { .. })));
    let n = Notification::from_export(&outcome);
    assert_eq!(n.level, Level::Error);
    assert_eq!(n.message.lines().count(), 1);
}

#[test]
fn file_sink_into_missing_directory_fails_cleanly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut sink = FileSink::new(dir.path().join("no_such_dir").join("roi.txt"));
    let outcome = export(Some(&mut sink as &mut dyn ReportSink), &baseline_doc(), ReportFormat::Text);
    assert!(matches!(outcome, Err(ReportError::Io { .. })));
}

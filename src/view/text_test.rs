use super::*;
use crate::view::{Action, ButtonView, CatalogItemView, StatView};

#[test]
fn notices_carry_outcome_marks() {
    let ok = Notice { kind: NoticeKind::Success, message: "Xem trước thành công".into() };
    let err = Notice { kind: NoticeKind::Error, message: "Task not found".into() };
    assert_eq!(render_notice(&ok), "✅ Xem trước thành công");
    assert_eq!(render_notice(&err), "❌ Task not found");
}

#[test]
fn catalog_marks_selected_items() {
    let catalog = CatalogView {
        items: vec![
            CatalogItemView {
                id: "rotate".into(),
                name: "Rotate".into(),
                description: "Xoay ảnh".into(),
                selected: true,
                toggle: Action::ToggleAugmentation("rotate".into()),
            },
            CatalogItemView {
                id: "noisy".into(),
                name: "Noise".into(),
                description: String::new(),
                selected: false,
                toggle: Action::ToggleAugmentation("noisy".into()),
            },
        ],
    };
    assert_eq!(render_catalog(&catalog), "[x] Rotate (rotate)\n      Xoay ảnh\n[ ] Noise (noisy)\n");
}

#[test]
fn results_print_display_values_and_link() {
    let results = ResultsView {
        headline: "done".into(),
        stats_heading: "stats".into(),
        stats: vec![StatView { label: "Tổng cộng".into(), value: 9, display: "9 ảnh".into() }],
        download: ButtonView {
            label: "dl".into(),
            action: Action::Download { output_id: "o1".into(), href: "http://h/api/download/o1".into() },
            enabled: true,
        },
    };
    let text = render_results(&results);
    assert!(text.contains("  • Tổng cộng: 9 ảnh\n"));
    assert!(text.ends_with("dl\n  http://h/api/download/o1\n"));
}

#[test]
fn empty_history_prints_placeholder() {
    let history = HistoryView::Empty { placeholder: "Chưa có task nào".into() };
    assert_eq!(render_history(&history), "Chưa có task nào\n");
}

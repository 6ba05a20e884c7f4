//! Plain-text rendering of view models for terminal output.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use std::fmt::Write;

use super::{CatalogView, HistoryView, ModalView, PreviewView, ResultsView, RunsView};
use crate::state::session::{Notice, NoticeKind};

pub fn render_notice(notice: &Notice) -> String {
    let mark = match notice.kind {
        NoticeKind::Success => "✅",
        NoticeKind::Error => "❌",
    };
    format!("{mark} {}", notice.message)
}

pub fn render_catalog(catalog: &CatalogView) -> String {
    let mut out = String::new();
    for item in &catalog.items {
        let mark = if item.selected { "[x]" } else { "[ ]" };
        let _ = writeln!(out, "{mark} {} ({})", item.name, item.id);
        if !item.description.is_empty() {
            let _ = writeln!(out, "      {}", item.description);
        }
    }
    out
}

pub fn render_preview(preview: &PreviewView) -> String {
    let mut out = String::new();
    for item in &preview.items {
        let _ = writeln!(out, "{}", item.title);
        let _ = writeln!(out, "  {}", item.image_src);
        let _ = writeln!(out, "  {}", item.bbox_label);
    }
    out
}

pub fn render_results(results: &ResultsView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", results.headline);
    let _ = writeln!(out, "{}", results.stats_heading);
    for stat in &results.stats {
        let _ = writeln!(out, "  • {}: {}", stat.label, stat.display);
    }
    let _ = writeln!(out, "{}", results.download.label);
    if let super::Action::Download { href, .. } = &results.download.action {
        let _ = writeln!(out, "  {href}");
    }
    out
}

pub fn render_history(history: &HistoryView) -> String {
    let cards = match history {
        HistoryView::Empty { placeholder } => return format!("{placeholder}\n"),
        HistoryView::Cards(cards) => cards,
    };
    let mut out = String::new();
    for card in cards {
        let _ = writeln!(out, "■ {} [{}]", card.title, card.task_id);
        for info in &card.info {
            let _ = writeln!(out, "  {} {}", info.label, info.value);
        }
        match &card.runs {
            RunsView::Empty { placeholder } => {
                let _ = writeln!(out, "  {placeholder}");
            }
            RunsView::History { heading, records } => {
                let _ = writeln!(out, "  {heading}");
                for record in records {
                    let _ = writeln!(out, "    [{}] {}", record.tags.join(", "), record.caption);
                    let _ = writeln!(out, "      {} {}", record.download.label, record.output_id);
                }
            }
        }
    }
    out
}

pub fn render_modal(modal: &ModalView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", modal.title, modal.task_id.as_deref().unwrap_or_default());
    out.push_str(&render_catalog(&modal.catalog));
    out
}

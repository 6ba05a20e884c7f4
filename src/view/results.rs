//! Apply-flow summary with the download action.

use super::{RenderContext, ResultsView, StatView};
use crate::net::types::AugmentResponse;

/// Counts are copied from the response verbatim; nothing is recomputed.
pub fn render_results(results: &AugmentResponse, ctx: &RenderContext<'_>) -> ResultsView {
    let messages = ctx.messages;
    let stats = vec![
        stat(messages.original_count(), results.original_count, results.original_count.to_string()),
        stat(messages.augmented_count(), results.augmented_count, results.augmented_count.to_string()),
        stat(messages.total_count(), results.total_count, messages.images(results.total_count)),
    ];
    ResultsView {
        headline: messages.results_done().to_owned(),
        stats_heading: messages.stats_heading().to_owned(),
        stats,
        download: ctx.download_button(messages.download_results(), &results.output_id),
    }
}

fn stat(label: &str, value: u64, display: String) -> StatView {
    StatView { label: label.to_owned(), value, display }
}

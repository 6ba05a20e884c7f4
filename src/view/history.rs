//! Task history cards.
//!
//! The list is rebuilt from scratch on every render; there is no diffing
//! against a previous render.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use super::{Action, HistoryView, InfoView, RenderContext, RunRecordView, RunsView, TaskCardView};
use crate::net::types::{AugmentationRun, Task};
use crate::util::timefmt::format_timestamp;

pub fn render_history(tasks: &[Task], ctx: &RenderContext<'_>) -> HistoryView {
    if tasks.is_empty() {
        return HistoryView::Empty { placeholder: ctx.messages.no_tasks().to_owned() };
    }
    HistoryView::Cards(tasks.iter().map(|task| render_card(task, ctx)).collect())
}

fn render_card(task: &Task, ctx: &RenderContext<'_>) -> TaskCardView {
    let messages = ctx.messages;
    let info = vec![
        InfoView { label: messages.task_image_count().to_owned(), value: task.image_count.to_string() },
        InfoView { label: messages.task_label_format().to_owned(), value: task.label_format.to_uppercase() },
        InfoView {
            label: messages.task_created_at().to_owned(),
            value: format_timestamp(&task.created_at, messages.locale()),
        },
    ];
    let runs = if task.augmentations.is_empty() {
        RunsView::Empty { placeholder: messages.no_runs().to_owned() }
    } else {
        RunsView::History {
            heading: messages.run_history(task.augmentations.len()),
            records: task.augmentations.iter().map(|run| render_run(run, ctx)).collect(),
        }
    };

    TaskCardView {
        task_id: task.id.clone(),
        title: task.name.clone(),
        reaugment: ctx.button(messages.reaugment_button(), Action::OpenReaugment(task.id.clone())),
        delete: ctx.button(messages.delete_button(), Action::DeleteTask(task.id.clone())),
        info,
        runs,
    }
}

fn render_run(run: &AugmentationRun, ctx: &RenderContext<'_>) -> RunRecordView {
    let messages = ctx.messages;
    let caption = format!(
        "{} - {}",
        format_timestamp(&run.created_at, messages.locale()),
        messages.images(run.output_count)
    );
    RunRecordView {
        output_id: run.output_id.clone(),
        tags: run.augmentations.clone(),
        caption,
        download: ctx.download_button(messages.download_run(), &run.output_id),
    }
}

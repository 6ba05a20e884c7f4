//! View-model rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! `render_page` turns an immutable [`SessionState`] snapshot into a
//! [`PageView`]. Each render rebuilds the whole description, so rendering the
//! same state twice yields equal values. `text` prints views for the terminal.


pub mod catalog;
pub mod history;
pub mod model;
pub mod preview;
pub mod results;
pub mod text;

pub use model::*;

use crate::messages::Messages;
use crate::net::api::Endpoints;
use crate::state::session::{SessionState, Tab};

/// Inputs shared by every render function.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    pub messages: &'a Messages,
    pub endpoints: &'a Endpoints,
    /// Flow triggers are disabled while a request is pending.
    pub loading: bool,
}

impl RenderContext<'_> {
    pub(crate) fn button(&self, label: &str, action: Action) -> ButtonView {
        ButtonView { label: label.to_owned(), action, enabled: !self.loading }
    }

    pub(crate) fn download_button(&self, label: &str, output_id: &str) -> ButtonView {
        let action = Action::Download {
            output_id: output_id.to_owned(),
            href: self.endpoints.download(output_id).to_string(),
        };
        self.button(label, action)
    }
}

pub fn render_page(state: &SessionState, ctx: &RenderContext<'_>) -> PageView {
    let messages = ctx.messages;
    let tabs = [(Tab::Upload, messages.tab_upload()), (Tab::History, messages.tab_history())]
        .into_iter()
        .map(|(tab, label)| TabView {
            tab,
            label: label.to_owned(),
            active: state.active_tab == tab,
            action: Action::SwitchTab(tab),
        })
        .collect();

    PageView {
        active_tab: state.active_tab,
        tabs,
        upload: render_upload_panel(state, ctx),
        history: history::render_history(&state.tasks, ctx),
        modal: state.modal.open.then(|| render_modal(state, ctx)),
        loading: ctx.loading.then(|| messages.loading().to_owned()),
        notice: state.latest_notice().cloned(),
    }
}

fn render_upload_panel(state: &SessionState, ctx: &RenderContext<'_>) -> UploadPanelView {
    let messages = ctx.messages;
    let augmentation = state.panels.augmentation.then(|| AugmentationSectionView {
        catalog: catalog::render_catalog(&state.catalog, &state.selection, Action::ToggleAugmentation),
        preview: ctx.button(messages.preview_button(), Action::Preview),
        apply: ctx.button(messages.apply_button(), Action::Apply),
    });
    let preview = state
        .preview
        .as_ref()
        .filter(|_| state.panels.preview)
        .map(|p| preview::render_preview(p, ctx));
    let results = state
        .results
        .as_ref()
        .filter(|_| state.panels.results)
        .map(|r| results::render_results(r, ctx));

    UploadPanelView { upload: ctx.button(messages.upload_button(), Action::Upload), augmentation, preview, results }
}

fn render_modal(state: &SessionState, ctx: &RenderContext<'_>) -> ModalView {
    let messages = ctx.messages;
    ModalView {
        title: messages.modal_title().to_owned(),
        task_id: state.modal.task_id.clone(),
        catalog: catalog::render_catalog(&state.catalog, &state.modal.selection, Action::ToggleReaugmentAugmentation),
        confirm: ctx.button(messages.apply_button(), Action::ConfirmReaugment),
        close: ButtonView { label: messages.modal_close().to_owned(), action: Action::CloseModal, enabled: true },
    }
}

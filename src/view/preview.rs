//! Preview panel: the original image followed by one entry per variant.

use super::{PreviewItemView, PreviewView, RenderContext};
use crate::net::types::PreviewResponse;

pub fn render_preview(preview: &PreviewResponse, ctx: &RenderContext<'_>) -> PreviewView {
    let messages = ctx.messages;
    let original = PreviewItemView {
        title: messages.original_image().to_owned(),
        image_src: ctx.endpoints.preview_image(&preview.original_image).to_string(),
        alt: "Original Image".to_owned(),
        bbox_label: messages.bbox_count(preview.original_bbox_count),
    };
    let variants = preview.augmented_images.iter().map(|aug| PreviewItemView {
        title: aug.augmentation_name.clone(),
        image_src: ctx.endpoints.preview_image(&aug.image_path).to_string(),
        alt: aug.augmentation_name.clone(),
        bbox_label: messages.bbox_count(aug.bbox_count),
    });
    PreviewView { items: std::iter::once(original).chain(variants).collect() }
}

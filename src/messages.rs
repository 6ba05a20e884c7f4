//! User-visible strings.
//!
//! DESIGN
//! ======
//! Every notice and label the view model emits comes from [`Messages`], so the
//! controller and renderers never embed wording. Vietnamese is the default
//! locale and keeps the product's original phrasing.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Vi,
    En,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Self::Vi => "vi",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct ParseLocaleError(pub String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vi" | "vi-vn" => Ok(Self::Vi),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            other => Err(ParseLocaleError(other.to_owned())),
        }
    }
}

/// Localized message catalog for one locale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn pick(&self, vi: &'static str, en: &'static str) -> &'static str {
        match self.locale {
            Locale::Vi => vi,
            Locale::En => en,
        }
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    pub fn choose_images(&self) -> &'static str {
        self.pick("Vui lòng chọn ảnh", "Please choose at least one image")
    }

    pub fn choose_augmentation(&self) -> &'static str {
        self.pick("Vui lòng chọn ít nhất một phương pháp augmentation", "Please choose at least one augmentation")
    }

    pub fn no_active_task(&self) -> &'static str {
        self.pick("Vui lòng tải ảnh lên trước", "Please upload images first")
    }

    pub fn unknown_augmentation(&self, id: &str) -> String {
        match self.locale {
            Locale::Vi => format!("Không tìm thấy phương pháp augmentation: {id}"),
            Locale::En => format!("Unknown augmentation: {id}"),
        }
    }

    pub fn dialog_closed(&self) -> &'static str {
        self.pick("Hộp thoại augmentation đã đóng", "The re-augment dialog is closed")
    }

    pub fn busy(&self) -> &'static str {
        self.pick("Đang xử lý yêu cầu khác, vui lòng đợi", "Another request is still in progress")
    }

    // =========================================================================
    // FLOW OUTCOMES
    // =========================================================================

    pub fn catalog_failed(&self) -> &'static str {
        self.pick("Không thể tải danh sách augmentations", "Could not load the augmentation list")
    }

    pub fn uploaded(&self, count: usize) -> String {
        match self.locale {
            Locale::Vi => format!("Đã tải lên {count} ảnh thành công"),
            Locale::En => format!("Uploaded {count} images"),
        }
    }

    pub fn upload_failed(&self) -> &'static str {
        self.pick("Lỗi khi tải file lên", "Upload failed")
    }

    pub fn preview_ready(&self) -> &'static str {
        self.pick("Xem trước thành công", "Preview ready")
    }

    pub fn preview_failed(&self) -> &'static str {
        self.pick("Lỗi khi tạo preview", "Preview failed")
    }

    pub fn applied(&self, total_count: u64) -> String {
        match self.locale {
            Locale::Vi => format!("Đã xử lý thành công! Tổng {total_count} ảnh"),
            Locale::En => format!("Done! {total_count} images in total"),
        }
    }

    pub fn apply_failed(&self) -> &'static str {
        self.pick("Lỗi khi áp dụng augmentation", "Applying augmentations failed")
    }

    pub fn reaugmented(&self, processed_count: u64) -> String {
        match self.locale {
            Locale::Vi => format!("Đã xử lý thành công {processed_count} ảnh"),
            Locale::En => format!("Processed {processed_count} images"),
        }
    }

    pub fn history_failed(&self) -> &'static str {
        self.pick("Không thể tải lịch sử tasks", "Could not load task history")
    }

    pub fn delete_confirm(&self) -> &'static str {
        self.pick("Bạn có chắc chắn muốn xóa task này?", "Delete this task?")
    }

    pub fn deleted(&self) -> &'static str {
        self.pick("Đã xóa task thành công", "Task deleted")
    }

    pub fn delete_failed(&self) -> &'static str {
        self.pick("Lỗi khi xóa task", "Deleting the task failed")
    }

    pub fn download_failed(&self) -> &'static str {
        self.pick("Lỗi khi tải kết quả về", "Download failed")
    }

    pub fn saved_to(&self, path: &str) -> String {
        match self.locale {
            Locale::Vi => format!("Đã lưu vào {path}"),
            Locale::En => format!("Saved to {path}"),
        }
    }

    pub fn default_task_name(&self, stamp: &str) -> String {
        format!("Task {stamp}")
    }

    // =========================================================================
    // LABELS
    // =========================================================================

    pub fn tab_upload(&self) -> &'static str {
        self.pick("📤 Tải lên & Augment", "📤 Upload & Augment")
    }

    pub fn tab_history(&self) -> &'static str {
        self.pick("📋 Lịch sử", "📋 History")
    }

    pub fn upload_button(&self) -> &'static str {
        self.pick("📤 Tải lên", "📤 Upload")
    }

    pub fn preview_button(&self) -> &'static str {
        self.pick("👁️ Xem trước", "👁️ Preview")
    }

    pub fn apply_button(&self) -> &'static str {
        self.pick("✨ Áp dụng", "✨ Apply")
    }

    pub fn loading(&self) -> &'static str {
        self.pick("Đang xử lý...", "Processing...")
    }

    pub fn original_image(&self) -> &'static str {
        self.pick("Ảnh gốc", "Original image")
    }

    pub fn bbox_count(&self, count: u64) -> String {
        match self.locale {
            Locale::Vi => format!("Số bbox: {count}"),
            Locale::En => format!("Boxes: {count}"),
        }
    }

    pub fn results_done(&self) -> &'static str {
        self.pick("✅ Hoàn thành augmentation!", "✅ Augmentation complete!")
    }

    pub fn stats_heading(&self) -> &'static str {
        self.pick("📊 Thống kê:", "📊 Statistics:")
    }

    pub fn original_count(&self) -> &'static str {
        self.pick("Ảnh gốc", "Original images")
    }

    pub fn augmented_count(&self) -> &'static str {
        self.pick("Ảnh augmented", "Augmented images")
    }

    pub fn total_count(&self) -> &'static str {
        self.pick("Tổng cộng", "Total")
    }

    pub fn images(&self, count: u64) -> String {
        match self.locale {
            Locale::Vi => format!("{count} ảnh"),
            Locale::En => format!("{count} images"),
        }
    }

    pub fn download_results(&self) -> &'static str {
        self.pick("⬇️ Tải về kết quả", "⬇️ Download results")
    }

    pub fn download_run(&self) -> &'static str {
        self.pick("⬇️ Tải về", "⬇️ Download")
    }

    pub fn reaugment_button(&self) -> &'static str {
        self.pick("🔄 Augment lại", "🔄 Re-augment")
    }

    pub fn delete_button(&self) -> &'static str {
        self.pick("🗑️ Xóa", "🗑️ Delete")
    }

    pub fn no_tasks(&self) -> &'static str {
        self.pick("Chưa có task nào", "No tasks yet")
    }

    pub fn task_image_count(&self) -> &'static str {
        self.pick("Số ảnh:", "Images:")
    }

    pub fn task_label_format(&self) -> &'static str {
        self.pick("Định dạng nhãn:", "Label format:")
    }

    pub fn task_created_at(&self) -> &'static str {
        self.pick("Ngày tạo:", "Created:")
    }

    pub fn run_history(&self, count: usize) -> String {
        match self.locale {
            Locale::Vi => format!("Lịch sử Augmentation ({count})"),
            Locale::En => format!("Augmentation history ({count})"),
        }
    }

    pub fn no_runs(&self) -> &'static str {
        self.pick("Chưa có augmentation nào", "No augmentations yet")
    }

    pub fn modal_title(&self) -> &'static str {
        self.pick("🔄 Augment lại task", "🔄 Re-augment task")
    }

    pub fn modal_close(&self) -> &'static str {
        "×"
    }
}

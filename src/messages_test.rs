use super::*;

#[test]
fn locale_defaults_to_vietnamese() {
    assert_eq!(Locale::default(), Locale::Vi);
    assert_eq!(Messages::default().locale(), Locale::Vi);
}

#[test]
fn locale_parses_codes_case_insensitively() {
    assert_eq!("vi".parse::<Locale>().unwrap(), Locale::Vi);
    assert_eq!(" EN ".parse::<Locale>().unwrap(), Locale::En);
    assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::En);
    assert_eq!("de".parse::<Locale>().unwrap_err(), ParseLocaleError("de".to_owned()));
}

#[test]
fn locale_display_matches_code() {
    assert_eq!(Locale::En.to_string(), "en");
    assert_eq!(Locale::Vi.to_string(), "vi");
}

#[test]
fn vietnamese_wording() {
    let m = Messages::new(Locale::Vi);
    assert_eq!(m.choose_images(), "Vui lòng chọn ảnh");
    assert_eq!(m.choose_augmentation(), "Vui lòng chọn ít nhất một phương pháp augmentation");
    assert_eq!(m.uploaded(3), "Đã tải lên 3 ảnh thành công");
    assert_eq!(m.applied(9), "Đã xử lý thành công! Tổng 9 ảnh");
    assert_eq!(m.images(9), "9 ảnh");
    assert_eq!(m.run_history(2), "Lịch sử Augmentation (2)");
}

#[test]
fn english_wording() {
    let m = Messages::new(Locale::En);
    assert_eq!(m.images(1), "1 images");
    assert_eq!(m.reaugmented(4), "Processed 4 images");
    assert_eq!(m.bbox_count(2), "Boxes: 2");
}

#[test]
fn default_task_name_is_locale_independent() {
    assert_eq!(Messages::new(Locale::En).default_task_name("x"), "Task x");
    assert_eq!(Messages::new(Locale::Vi).default_task_name("x"), "Task x");
}

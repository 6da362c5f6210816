use super::*;

#[test]
fn test_default_metrics() {
    let f = FontMetrics::default();
    assert_eq!(f.font_size, 14.0);
    assert_eq!(f.line_height(), 21.0);
}

#[test]
fn test_width_is_char_count_times_font_size() {
    let f = FontMetrics::default();
    assert_eq!(estimate_size("train", &f), Size::new(70.0, 21.0));
}

#[test]
fn test_width_counts_chars_not_bytes() {
    let f = FontMetrics { font_size: 10.0, body_line_height: 2.0 };
    assert_eq!(estimate_size("é…", &f).width, 20.0);
    assert_eq!(estimate_size("é…", &f).height, 20.0);
}

#[test]
fn test_empty_label_has_height() {
    let s = estimate_size("", &FontMetrics::default());
    assert_eq!(s.width, 0.0);
    assert!(s.height > 0.0);
}

#[test]
fn test_metrics_deserialize_with_defaults() {
    let f: FontMetrics = serde_json::from_str(r#"{"fontSize": 12}"#).unwrap();
    assert_eq!(f.font_size, 12.0);
    assert_eq!(f.body_line_height, 1.5);
}

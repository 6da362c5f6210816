use super::*;
use crate::error::LayoutError;

#[test]
fn test_default_config() {
    let cfg = LayoutConfig::new();
    assert_eq!(cfg.direction, Direction::TB);
    assert!(cfg.show_params);
    assert_eq!(cfg.font, FontMetrics::default());
    assert_eq!(cfg.node_separation, 75.0);
    assert_eq!(cfg.rank_separation, 100.0);
    assert_eq!(cfg.max_label_len, 70);
}

#[test]
fn test_builders() {
    let cfg = LayoutConfig::new()
        .with_direction(Direction::RL)
        .with_show_params(false);
    assert_eq!(cfg.direction, Direction::RL);
    assert!(!cfg.show_params);
}

#[test]
fn test_layout_options() {
    let cfg = LayoutConfig {
        node_separation: 10.0,
        rank_separation: 20.0,
        ..LayoutConfig::default()
    };
    let opts = cfg.layout_options(Direction::LR);
    assert_eq!(opts.direction, Direction::LR);
    assert_eq!(opts.node_separation, 10.0);
    assert_eq!(opts.rank_separation, 20.0);
}

#[test]
fn test_from_json_partial() {
    let cfg =
        LayoutConfig::from_json(r#"{"direction":"LR","showParams":false,"font":{"fontSize":10}}"#)
            .unwrap();
    assert_eq!(cfg.direction, Direction::LR);
    assert!(!cfg.show_params);
    assert_eq!(cfg.font.font_size, 10.0);
    assert_eq!(cfg.font.body_line_height, 1.5);
    assert_eq!(cfg.rank_separation, 100.0);
}

#[test]
fn test_from_json_empty_object_is_default() {
    assert_eq!(LayoutConfig::from_json("{}").unwrap(), LayoutConfig::default());
}

#[test]
fn test_from_json_rejects_unknown_direction() {
    let err = LayoutConfig::from_json(r#"{"direction":"TD"}"#).unwrap_err();
    assert!(matches!(err, LayoutError::Json(_)));
}

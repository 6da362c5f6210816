use super::*;

#[test]
fn test_direction_default_is_tb() {
    assert_eq!(Direction::default(), Direction::TB);
}

#[test]
fn test_direction_parse_all_tokens() {
    for d in Direction::ALL {
        assert_eq!(d.as_str().parse::<Direction>().unwrap(), d);
    }
}

#[test]
fn test_direction_parse_is_exact() {
    for bad in ["tb", "TD", "", " LR", "up", "LRX"] {
        let err = bad.parse::<Direction>().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidDirection(ref t) if t == bad));
    }
}

#[test]
fn test_direction_display_round_trips() {
    assert_eq!(Direction::RL.to_string(), "RL");
    assert_eq!(Direction::try_from("BT").unwrap(), Direction::BT);
}

#[test]
fn test_is_horizontal() {
    assert!(!Direction::TB.is_horizontal());
    assert!(!Direction::BT.is_horizontal());
    assert!(Direction::LR.is_horizontal());
    assert!(Direction::RL.is_horizontal());
}

#[test]
fn test_anchor_table() {
    let cases = [
        ("TB", Side::Top, Side::Bottom),
        ("BT", Side::Bottom, Side::Top),
        ("RL", Side::Right, Side::Left),
        ("LR", Side::Left, Side::Right),
    ];
    for (token, target, source) in cases {
        let a = anchors(token).unwrap();
        assert_eq!(a.target, target, "{token}");
        assert_eq!(a.source, source, "{token}");
    }
}

#[test]
fn test_anchor_sides_differ() {
    for d in Direction::ALL {
        let a = d.anchors();
        assert_ne!(a.source, a.target);
    }
}

#[test]
fn test_anchors_rejects_unknown_direction() {
    assert!(matches!(
        anchors("diagonal"),
        Err(LayoutError::InvalidDirection(t)) if t == "diagonal"
    ));
}

#[test]
fn test_side_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Side::Right).unwrap(), "\"right\"");
    let a = Direction::LR.anchors();
    assert_eq!(
        serde_json::to_value(a).unwrap(),
        serde_json::json!({"source": "right", "target": "left"})
    );
}

use super::*;
use serde_json::{from_str, json, to_value};

#[test]
fn test_label_ignores_unknown_fields() {
    let label: Label = from_str(r#"{"name": "bug", "color": "d73a4a", "description": "x"}"#)
        .expect("Failed to deserialize Label");

    assert_eq!(label, Label::new("bug", "d73a4a"));
}

#[test]
fn test_label_requires_name_and_color() {
    assert!(from_str::<Label>(r#"{"name": "bug"}"#).is_err());
    assert!(from_str::<Label>(r#"{"color": "d73a4a"}"#).is_err());
}

#[test]
fn test_label_from_repository_label_drops_remote_fields() {
    let remote = RepositoryLabel {
        id: Some(42),
        name: "bug".to_string(),
        color: "d73a4a".to_string(),
        description: Some("Something isn't working".to_string()),
        default: true,
    };

    let label = Label::from(remote);

    assert_eq!(label, Label::new("bug", "d73a4a"));
}

#[test]
fn test_label_set_serializes_as_plain_array() {
    let set = LabelSet::new(vec![Label::new("bug", "d73a4a"), Label::new("wip", "fbca04")]);

    let value = to_value(&set).expect("Failed to serialize LabelSet");

    assert_eq!(
        value,
        json!([
            {"name": "bug", "color": "d73a4a"},
            {"name": "wip", "color": "fbca04"}
        ])
    );
}

#[test]
fn test_label_set_keeps_order_and_duplicates() {
    let set: LabelSet = vec![
        Label::new("wip", "fbca04"),
        Label::new("bug", "d73a4a"),
        Label::new("wip", "000000"),
    ]
    .into();

    assert_eq!(set.len(), 3);
    assert_eq!(set.names(), vec!["wip", "bug", "wip"]);
}

#[test]
fn test_label_set_from_repository_labels() {
    let remote = vec![
        RepositoryLabel {
            id: Some(1),
            name: "bug".to_string(),
            color: "d73a4a".to_string(),
            description: None,
            default: true,
        },
        RepositoryLabel {
            id: Some(2),
            name: "question".to_string(),
            color: "d876e3".to_string(),
            description: None,
            default: true,
        },
    ];

    let set = LabelSet::from(remote);

    assert_eq!(
        set.labels(),
        &[Label::new("bug", "d73a4a"), Label::new("question", "d876e3")]
    );
}

#[test]
fn test_create_payload_from_label() {
    let payload = LabelCreatePayload::from(&Label::new("wip", "fbca04"));

    assert_eq!(payload, LabelCreatePayload::new("wip", "fbca04"));
}

use super::*;

#[test]
fn test_parse_json_file() {
    let endpoint = Endpoint::parse("labels/default.json").unwrap();

    assert_eq!(endpoint, Endpoint::File(PathBuf::from("labels/default.json")));
}

#[test]
fn test_parse_json_file_extension_is_case_insensitive() {
    let endpoint = Endpoint::parse("LABELS.JSON").unwrap();

    assert_eq!(endpoint, Endpoint::File(PathBuf::from("LABELS.JSON")));
}

#[test]
fn test_parse_empty_is_console() {
    assert_eq!(Endpoint::parse("").unwrap(), Endpoint::Console);
    assert_eq!(Endpoint::parse("   ").unwrap(), Endpoint::Console);
}

#[test]
fn test_parse_repository() {
    let endpoint = Endpoint::parse("octocat/Hello-World").unwrap();

    assert!(endpoint.is_repository());
    assert_eq!(endpoint.to_string(), "octocat/Hello-World");
}

#[test]
fn test_parse_rejects_other_references() {
    for reference in ["labels.yaml", "just-a-name", "a/b/c"] {
        let result = Endpoint::parse(reference);
        assert!(
            matches!(result, Err(GitLabelError::InvalidEndpoint(ref r)) if r == reference),
            "expected '{reference}' to be rejected"
        );
    }
}

#[test]
fn test_display() {
    assert_eq!(Endpoint::Console.to_string(), "console");
    assert_eq!(
        Endpoint::File(PathBuf::from("labels.json")).to_string(),
        "labels.json"
    );
}

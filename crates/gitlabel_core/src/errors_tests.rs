use super::*;
use std::error::Error as StdError;

#[test]
fn test_parse_error_names_the_file() {
    let source = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
    let error = GitLabelError::Parse {
        path: PathBuf::from("labels.json"),
        source,
    };

    assert!(error.to_string().starts_with("Failed to parse label file \"labels.json\""));
    assert!(error.source().is_some());
}

#[test]
fn test_remote_error_names_the_repository() {
    let error = GitLabelError::Remote {
        repository: RepositoryRef::new("octocat", "Hello-World").unwrap(),
        source: github_client::Error::NotFound,
    };

    assert_eq!(
        error.to_string(),
        "Failed to read labels from octocat/Hello-World: Resource not found"
    );
}

#[test]
fn test_invalid_endpoint_display() {
    let error = GitLabelError::InvalidEndpoint("labels.yaml".to_string());

    assert_eq!(
        error.to_string(),
        "Invalid source or destination 'labels.yaml': expected a .json file or owner/repo"
    );
}

#[test]
fn test_output_error_from_io() {
    let error: GitLabelError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();

    assert!(matches!(error, GitLabelError::Output(_)));
    assert_eq!(error.to_string(), "Failed to write output: pipe closed");
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GitLabelError>();
}

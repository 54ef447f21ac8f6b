//! In-memory label client used by the unit tests of this crate.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use github_client::{Error, LabelClient, LabelCreatePayload, RepositoryLabel, RepositoryRef};

/// Records every call made against it and keeps created labels, so a second
/// reconciliation sees the result of the first.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockLabelClient {
    labels: Arc<Mutex<Vec<RepositoryLabel>>>,
    list_failure_status: Option<u16>,
    create_failures: HashMap<String, u16>,
    pub(crate) list_calls: Arc<Mutex<Vec<RepositoryRef>>>,
    pub(crate) create_calls: Arc<Mutex<Vec<LabelCreatePayload>>>,
}

impl MockLabelClient {
    pub(crate) fn with_labels(names: &[(&str, &str)]) -> Self {
        let labels = names
            .iter()
            .enumerate()
            .map(|(i, (name, color))| RepositoryLabel {
                id: Some(i as u64 + 1),
                name: name.to_string(),
                color: color.to_string(),
                description: None,
                default: false,
            })
            .collect();

        Self {
            labels: Arc::new(Mutex::new(labels)),
            ..Default::default()
        }
    }

    /// Makes listing fail with the given HTTP status.
    pub(crate) fn failing_list(mut self, status: u16) -> Self {
        self.list_failure_status = Some(status);
        self
    }

    /// Makes creating the named label fail with the given HTTP status.
    pub(crate) fn failing_create(mut self, name: &str, status: u16) -> Self {
        self.create_failures.insert(name.to_string(), status);
        self
    }

    pub(crate) fn created(&self) -> Vec<LabelCreatePayload> {
        self.create_calls.lock().unwrap().clone()
    }

    pub(crate) fn label_names(&self) -> Vec<String> {
        self.labels
            .lock()
            .unwrap()
            .iter()
            .map(|l| l.name.clone())
            .collect()
    }
}

#[async_trait]
impl LabelClient for MockLabelClient {
    async fn list_labels(&self, repository: &RepositoryRef) -> Result<Vec<RepositoryLabel>, Error> {
        self.list_calls.lock().unwrap().push(repository.clone());

        match self.list_failure_status {
            Some(404) => Err(Error::NotFound),
            Some(status) => Err(Error::ApiStatus {
                status,
                message: "listing failed".to_string(),
            }),
            None => Ok(self.labels.lock().unwrap().clone()),
        }
    }

    async fn create_label(
        &self,
        _repository: &RepositoryRef,
        payload: &LabelCreatePayload,
    ) -> Result<RepositoryLabel, Error> {
        self.create_calls.lock().unwrap().push(payload.clone());

        if let Some(status) = self.create_failures.get(&payload.name) {
            return Err(Error::ApiStatus {
                status: *status,
                message: "Validation Failed".to_string(),
            });
        }

        let label = RepositoryLabel {
            id: None,
            name: payload.name.clone(),
            color: payload.color.clone(),
            description: None,
            default: false,
        };
        self.labels.lock().unwrap().push(label.clone());
        Ok(label)
    }
}

use super::clirk_client_models::{
    ClirkConfig, RequestDetails, RequestExecutionResult, RequestGroup, RequestInfo,
};
use crate::collection::{self, Collection, PreparedRequest};
use crate::core::error::ClirkError;
use std::path::Path;

pub struct ClirkClient {
    config: ClirkConfig,
}

impl ClirkClient {
    pub fn new(config: ClirkConfig) -> Self {
        Self { config }
    }

    pub fn list_requests(file: &Path) -> Result<Vec<RequestGroup>, ClirkError> {
        log::debug!("Parsing collection at {}", crate::core::paths::clean_path(file));
        let source = Collection::from_path(file)?;
        let requests = collection::flatten(&source.items);

        let groups = collection::group_by_parent(&requests)
            .into_iter()
            .map(|(group, members)| RequestGroup {
                group,
                requests: members
                    .into_iter()
                    .map(|r| RequestInfo {
                        path: r.path.clone(),
                        name: r.name.clone(),
                        method: r.template.method.to_string(),
                    })
                    .collect(),
            })
            .collect();

        Ok(groups)
    }

    /// Loads the collection and resolves the configured request path into a concrete request.
    pub fn prepare(&self) -> Result<PreparedRequest, ClirkError> {
        let source = Collection::from_path(Path::new(&self.config.file))?;
        let requests = collection::flatten(&source.items);
        log::debug!("Collection contains {} request(s)", requests.len());

        let variables = collection::merge_variables(&source.variables, &self.config.variables)?;

        let found = collection::find_request(&requests, &self.config.request_path)
            .ok_or_else(|| ClirkError::RequestNotFound(self.config.request_path.clone()))?;

        let prepared = collection::materialize(found, &variables)?;
        log::debug!("Prepared request: {prepared:?}");
        Ok(prepared)
    }

    pub fn get_request_details(&self) -> Result<RequestDetails, ClirkError> {
        let prepared = self.prepare()?;
        Ok(RequestDetails {
            path: prepared.path,
            name: prepared.name,
            method: prepared.method.to_string(),
            url: prepared.url,
            headers: prepared.headers,
            body: prepared.body,
        })
    }

    pub async fn run(&self) -> Result<RequestExecutionResult, ClirkError> {
        let prepared = self.prepare()?;
        let response = super::http::execute_request(&prepared, self.config.timeout).await?;

        Ok(RequestExecutionResult {
            path: prepared.path,
            name: prepared.name,
            method: prepared.method.to_string(),
            url: prepared.url,
            status: response.status,
            elapsed_ms: response.elapsed_ms,
            response_headers: response.headers,
            body: response.body,
        })
    }
}

use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestInfo {
    pub path: String,
    pub name: String,
    pub method: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestGroup {
    pub group: String,
    pub requests: Vec<RequestInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestDetails {
    pub path: String,
    pub name: String,
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestExecutionResult {
    pub path: String,
    pub name: String,
    pub method: String,
    pub url: String,
    pub status: u16,
    pub elapsed_ms: u64,
    pub response_headers: BTreeMap<String, String>,
    pub body: String,
}

pub struct ClirkConfig {
    pub file: String,
    pub request_path: String,
    pub variables: Vec<String>,
    pub timeout: Option<Duration>,
}

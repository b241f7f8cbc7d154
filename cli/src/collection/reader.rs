use super::error::LoadError;
use super::http_method::HttpMethod;
use super::model::{CollectionNode, CollectionVariable, Folder, RequestItem, RequestTemplate};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

// Wire shapes of a Postman v2.x export. Only the fields we act on are declared.

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(default)]
    info: Option<RawInfo>,
    #[serde(default)]
    item: Vec<RawItem>,
    #[serde(default)]
    variable: Vec<RawVariable>,
}

#[derive(Debug, Deserialize)]
struct RawInfo {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    item: Option<Vec<RawItem>>,
    #[serde(default)]
    request: Option<RawRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRequest {
    Url(String),
    Definition(RawRequestDefinition),
}

#[derive(Debug, Deserialize)]
struct RawRequestDefinition {
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    url: Option<RawUrl>,
    #[serde(default)]
    header: Option<RawHeaders>,
    #[serde(default)]
    body: Option<RawBody>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawUrl {
    Raw(String),
    Structured(RawUrlObject),
}

#[derive(Debug, Deserialize)]
struct RawUrlObject {
    #[serde(default)]
    raw: Option<String>,
    #[serde(default)]
    protocol: Option<String>,
    #[serde(default)]
    host: Option<RawSegments>,
    #[serde(default)]
    port: Option<Value>,
    #[serde(default)]
    path: Option<RawSegments>,
    #[serde(default)]
    query: Vec<RawQueryParam>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSegments {
    Joined(String),
    Parts(Vec<Value>),
}

#[derive(Debug, Deserialize)]
struct RawQueryParam {
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    disabled: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawHeaders {
    List(Vec<RawHeader>),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawHeader {
    key: String,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    disabled: bool,
}

#[derive(Debug, Deserialize)]
struct RawBody {
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    raw: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawVariable {
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    disabled: bool,
}

/// A parsed collection: the top-level nodes in source order plus its declared variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub name: Option<String>,
    pub items: Vec<CollectionNode>,
    pub variables: Vec<CollectionVariable>,
}

impl Collection {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let display = crate::core::paths::clean_path(path);
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: display.clone(),
            source,
        })?;

        log::debug!("Read {} bytes from {display}", content.len());

        let collection = Self::from_json(&content).map_err(|e| match e {
            LoadError::Json { source, .. } => LoadError::Json {
                path: display,
                source,
            },
            other => other,
        })?;

        log::debug!(
            "Loaded collection '{}' with {} top-level item(s)",
            collection.name.as_deref().unwrap_or("unnamed"),
            collection.items.len()
        );
        Ok(collection)
    }

    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        let raw: RawCollection = serde_json::from_str(content).map_err(|source| LoadError::Json {
            path: "<input>".to_string(),
            source,
        })?;

        let items = raw
            .item
            .into_iter()
            .map(|item| convert_item(item, ""))
            .collect::<Result<Vec<_>, _>>()?;

        let variables = raw
            .variable
            .into_iter()
            .filter(|v| !v.disabled)
            .filter_map(convert_variable)
            .collect();

        Ok(Self {
            name: raw.info.and_then(|info| info.name),
            items,
            variables,
        })
    }
}

fn convert_item(raw: RawItem, parent: &str) -> Result<CollectionNode, LoadError> {
    let name = raw.name.unwrap_or_default();
    let location = format!("{parent}/{name}");

    if let Some(children) = raw.item {
        let children = children
            .into_iter()
            .map(|child| convert_item(child, &location))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(CollectionNode::Folder(Folder { name, children }));
    }

    match raw.request {
        Some(request) => Ok(CollectionNode::Request(RequestItem {
            template: convert_request(request, &location),
            name,
        })),
        None => Err(LoadError::Invalid(format!(
            "item '{location}' has neither a request nor child items"
        ))),
    }
}

fn convert_request(raw: RawRequest, location: &str) -> RequestTemplate {
    let definition = match raw {
        RawRequest::Url(url) => {
            return RequestTemplate {
                method: HttpMethod::GET,
                url,
                headers: Vec::new(),
                body: None,
            }
        }
        RawRequest::Definition(definition) => definition,
    };

    let method = HttpMethod::parse(definition.method.as_deref().unwrap_or("GET"));
    let url = definition.url.map(build_url).unwrap_or_default();

    let headers = match definition.header {
        Some(RawHeaders::List(list)) => list
            .into_iter()
            .filter(|h| !h.disabled)
            .map(|h| (h.key, h.value.unwrap_or_default()))
            .collect(),
        Some(RawHeaders::Text(text)) => parse_header_text(&text),
        None => Vec::new(),
    };

    let body = match definition.body {
        Some(body) => match body.mode.as_deref() {
            Some("raw") | None => body.raw,
            Some(mode) => {
                log::debug!("Body mode '{mode}' of '{location}' is not supported; sending no body");
                None
            }
        },
        None => None,
    };

    RequestTemplate {
        method,
        url,
        headers,
        body,
    }
}

fn build_url(raw: RawUrl) -> String {
    let url = match raw {
        RawUrl::Raw(url) => return url,
        RawUrl::Structured(url) => url,
    };

    if let Some(raw) = url.raw {
        return raw;
    }

    let mut out = String::new();
    if let Some(protocol) = &url.protocol {
        out.push_str(protocol);
        out.push_str("://");
    }
    if let Some(host) = url.host {
        out.push_str(&join_segments(host, "."));
    }
    if let Some(port) = url.port.as_ref().map(value_to_string) {
        if !port.is_empty() {
            out.push(':');
            out.push_str(&port);
        }
    }
    if let Some(path) = url.path {
        let path = join_segments(path, "/");
        if !path.is_empty() {
            if !path.starts_with('/') {
                out.push('/');
            }
            out.push_str(&path);
        }
    }

    let query: Vec<String> = url
        .query
        .into_iter()
        .filter(|q| !q.disabled)
        .filter_map(|q| {
            let key = q.key?;
            Some(match q.value {
                Some(value) => format!("{key}={value}"),
                None => key,
            })
        })
        .collect();
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query.join("&"));
    }

    out
}

fn join_segments(segments: RawSegments, separator: &str) -> String {
    match segments {
        RawSegments::Joined(text) => text,
        RawSegments::Parts(parts) => parts
            .iter()
            .map(|part| match part {
                Value::Object(map) => map.get("value").map(value_to_string).unwrap_or_default(),
                other => value_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(separator),
    }
}

fn parse_header_text(text: &str) -> Vec<(String, String)> {
    text.lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .collect()
}

fn convert_variable(raw: RawVariable) -> Option<CollectionVariable> {
    let key = raw.key.or(raw.id)?;
    let value = raw.value.as_ref().map(value_to_string).unwrap_or_default();
    Some(CollectionVariable { key, value })
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

use super::http_method::HttpMethod;

/// A request as declared in the collection, before any variable is substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTemplate {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestItem {
    pub name: String,
    pub template: RequestTemplate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    pub name: String,
    pub children: Vec<CollectionNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CollectionNode {
    Request(RequestItem),
    Folder(Folder),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionVariable {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlatRequest {
    pub path: String,
    pub name: String,
    pub template: RequestTemplate,
}

impl FlatRequest {
    /// Everything before the final `/name`, with a trailing slash. `/Ping` lives in `/`.
    pub fn group(&self) -> String {
        match self.path.rsplit_once('/') {
            Some((parent, _)) => format!("{parent}/"),
            None => "/".to_string(),
        }
    }
}

/// Transport-ready request: every placeholder has been substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub name: String,
    pub path: String,
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(path: &str) -> FlatRequest {
        FlatRequest {
            path: path.to_string(),
            name: path.rsplit('/').next().unwrap_or_default().to_string(),
            template: RequestTemplate {
                method: HttpMethod::GET,
                url: "http://localhost".to_string(),
                headers: Vec::new(),
                body: None,
            },
        }
    }

    #[test]
    fn test_group_of_root_request() {
        assert_eq!(flat("/Ping").group(), "/");
    }

    #[test]
    fn test_group_of_nested_request() {
        assert_eq!(flat("/Auth/Login").group(), "/Auth/");
        assert_eq!(flat("/Api/V1/Users/List").group(), "/Api/V1/Users/");
    }
}

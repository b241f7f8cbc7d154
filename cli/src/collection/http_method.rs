#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
    Custom(String),
}

impl HttpMethod {
    /// Postman exports any verb a user typed, so unknown tokens are kept as `Custom`.
    pub fn parse(s: &str) -> Self {
        let upper = s.trim().to_uppercase();
        match upper.as_str() {
            "" | "GET" => Self::GET,
            "POST" => Self::POST,
            "PUT" => Self::PUT,
            "DELETE" => Self::DELETE,
            "PATCH" => Self::PATCH,
            "HEAD" => Self::HEAD,
            "OPTIONS" => Self::OPTIONS,
            _ => Self::Custom(upper),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::GET => "GET",
            Self::POST => "POST",
            Self::PUT => "PUT",
            Self::DELETE => "DELETE",
            Self::PATCH => "PATCH",
            Self::HEAD => "HEAD",
            Self::OPTIONS => "OPTIONS",
            Self::Custom(name) => name,
        }
    }

    /// Only these methods get a body attached when materialized.
    pub fn carries_body(&self) -> bool {
        matches!(self, Self::POST | Self::PUT | Self::PATCH)
    }

    pub fn to_reqwest_method(&self) -> Result<reqwest::Method, String> {
        match self {
            Self::GET => Ok(reqwest::Method::GET),
            Self::POST => Ok(reqwest::Method::POST),
            Self::PUT => Ok(reqwest::Method::PUT),
            Self::DELETE => Ok(reqwest::Method::DELETE),
            Self::PATCH => Ok(reqwest::Method::PATCH),
            Self::HEAD => Ok(reqwest::Method::HEAD),
            Self::OPTIONS => Ok(reqwest::Method::OPTIONS),
            Self::Custom(name) => reqwest::Method::from_bytes(name.as_bytes())
                .map_err(|_| format!("Invalid HTTP method: {name}")),
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

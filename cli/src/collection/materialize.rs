use super::error::MaterializeError;
use super::model::{FlatRequest, PreparedRequest};
use super::template::render;
use super::variables::VariableTable;

/// Substitutes variables into URL, headers and body, in that order.
///
/// The first missing variable aborts the whole request. The body is only attached for methods
/// that carry a payload (`POST`, `PUT`, `PATCH`).
pub fn materialize(
    request: &FlatRequest,
    variables: &VariableTable,
) -> Result<PreparedRequest, MaterializeError> {
    let template = &request.template;

    let url = render(&template.url, variables)
        .map_err(|e| MaterializeError::from_template(e, "url"))?;

    let headers = template
        .headers
        .iter()
        .map(|(name, value)| {
            render(value, variables)
                .map(|value| (name.clone(), value))
                .map_err(|e| MaterializeError::from_template(e, format!("header '{name}'")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let body = match &template.body {
        Some(body) => Some(
            render(body, variables).map_err(|e| MaterializeError::from_template(e, "body"))?,
        ),
        None => None,
    };

    let body = if template.method.carries_body() {
        body
    } else {
        if body.is_some() {
            log::debug!(
                "Dropping body of {} request '{}'",
                template.method,
                request.path
            );
        }
        None
    };

    Ok(PreparedRequest {
        name: request.name.clone(),
        path: request.path.clone(),
        method: template.method.clone(),
        url,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::http_method::HttpMethod;
    use crate::collection::model::RequestTemplate;

    fn flat(method: HttpMethod, url: &str, body: Option<&str>) -> FlatRequest {
        FlatRequest {
            path: "/Auth/Login".to_string(),
            name: "Login".to_string(),
            template: RequestTemplate {
                method,
                url: url.to_string(),
                headers: vec![
                    ("Content-Type".to_string(), "application/json".to_string()),
                    ("Authorization".to_string(), "Bearer {{TOKEN}}".to_string()),
                ],
                body: body.map(str::to_string),
            },
        }
    }

    fn vars(pairs: &[(&str, &str)]) -> VariableTable {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_materialize_post_login() {
        let request = flat(
            HttpMethod::POST,
            "{{HOST}}/login",
            Some(r#"{"user":"{{USER}}"}"#),
        );
        let table = vars(&[("HOST", "http://x.test"), ("USER", "alice"), ("TOKEN", "t0k")]);

        let prepared = materialize(&request, &table).unwrap();

        assert_eq!(prepared.method, HttpMethod::POST);
        assert_eq!(prepared.url, "http://x.test/login");
        assert_eq!(prepared.body.as_deref(), Some(r#"{"user":"alice"}"#));
        assert_eq!(
            prepared.headers,
            vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), "Bearer t0k".to_string()),
            ]
        );
        assert_eq!(prepared.path, "/Auth/Login");
        assert_eq!(prepared.name, "Login");
    }

    #[test]
    fn test_get_drops_body() {
        let request = flat(HttpMethod::GET, "http://x.test", Some("payload"));
        let prepared = materialize(&request, &vars(&[("TOKEN", "t")])).unwrap();
        assert_eq!(prepared.body, None);
    }

    #[test]
    fn test_put_and_patch_keep_body() {
        for method in [HttpMethod::PUT, HttpMethod::PATCH] {
            let request = flat(method, "http://x.test", Some("payload"));
            let prepared = materialize(&request, &vars(&[("TOKEN", "t")])).unwrap();
            assert_eq!(prepared.body.as_deref(), Some("payload"));
        }
    }

    #[test]
    fn test_missing_variable_in_url() {
        let request = flat(HttpMethod::GET, "{{HOST}}/users?token={{TOKEN}}", None);
        let err = materialize(&request, &vars(&[("HOST", "h")])).unwrap_err();
        assert_eq!(
            err,
            MaterializeError::MissingVariable {
                name: "TOKEN".to_string(),
                field: "url".to_string()
            }
        );
    }

    #[test]
    fn test_missing_variable_in_header() {
        let request = flat(HttpMethod::GET, "http://x.test", None);
        let err = materialize(&request, &VariableTable::new()).unwrap_err();
        assert_eq!(
            err,
            MaterializeError::MissingVariable {
                name: "TOKEN".to_string(),
                field: "header 'Authorization'".to_string()
            }
        );
    }

    #[test]
    fn test_url_errors_are_reported_before_headers() {
        let request = flat(HttpMethod::GET, "{{HOST}}", None);
        let err = materialize(&request, &VariableTable::new()).unwrap_err();
        assert!(matches!(err, MaterializeError::MissingVariable { ref field, .. } if field == "url"));
    }

    #[test]
    fn test_missing_variable_in_body_fails_even_for_get() {
        let request = flat(HttpMethod::GET, "http://x.test", Some("{{USER}}"));
        let err = materialize(&request, &vars(&[("TOKEN", "t")])).unwrap_err();
        assert_eq!(
            err,
            MaterializeError::MissingVariable {
                name: "USER".to_string(),
                field: "body".to_string()
            }
        );
    }
}

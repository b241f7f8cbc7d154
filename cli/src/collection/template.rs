use super::error::TemplateError;
use super::variables::VariableTable;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{(.*?)\}\}").unwrap();
}

/// Substitutes every `{{NAME}}` in `template` from `variables`.
///
/// Substituted values are not scanned again, so a value containing `{{...}}` is emitted as is.
/// The first placeholder with no entry in the table fails the whole render; so does an empty `{{}}`.
pub fn render(template: &str, variables: &VariableTable) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let name = caps[1].trim();

        let value = variables
            .get(name)
            .filter(|_| !name.is_empty())
            .ok_or_else(|| TemplateError::MissingVariable {
                name: name.to_string(),
            })?;

        out.push_str(&template[last..whole.start()]);
        out.push_str(value);
        last = whole.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}

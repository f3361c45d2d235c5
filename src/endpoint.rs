use crate::errors::SdkError;
use crate::pagination::Pagination;
use std::fmt::Display;

/// One API call's URL: a path template with `{name}` placeholders plus
/// ordered query parameters. Built fresh for every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    template: &'static str,
    path_params: Vec<(&'static str, Option<String>)>,
    query: Vec<(&'static str, Option<String>)>,
}

impl Endpoint {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            path_params: Vec::new(),
            query: Vec::new(),
        }
    }

    pub fn path_param(self, name: &'static str, value: impl Display) -> Self {
        self.optional_path_param(name, Some(value))
    }

    /// A `None` value fails the build with `InvalidArgument`.
    pub fn optional_path_param(mut self, name: &'static str, value: Option<impl Display>) -> Self {
        self.path_params.push((name, value.map(|v| v.to_string())));
        self
    }

    /// Absent values are dropped from the query string entirely.
    pub fn query(mut self, name: &'static str, value: Option<impl Display>) -> Self {
        self.query.push((name, value.map(|v| v.to_string())));
        self
    }

    pub fn paginate(self, pagination: &Pagination) -> Self {
        self.query("count", pagination.count)
            .query("page", pagination.page)
            .query("order", pagination.order)
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Joins `base` with the substituted template and the query string.
    ///
    /// Placeholder values are percent-encoded so that only RFC 3986
    /// unreserved characters stay literal.
    pub fn build_url(&self, base: &str) -> Result<String, SdkError> {
        let mut url = String::from(base.trim_end_matches('/'));

        if !self.template.starts_with('/') {
            url.push('/');
        }

        let mut rest = self.template;

        while let Some(start) = rest.find('{') {
            let end = rest[start..].find('}').ok_or_else(|| {
                SdkError::InvalidArgument(format!(
                    "unterminated placeholder in path template `{}`",
                    self.template
                ))
            })? + start;

            let name = &rest[start + 1..end];
            url.push_str(&rest[..start]);
            url.push_str(&urlencoding::encode(self.path_value(name)?));
            rest = &rest[end + 1..];
        }
        url.push_str(rest);

        let query: Vec<String> = self
            .query
            .iter()
            .filter_map(|(name, value)| {
                value
                    .as_ref()
                    .map(|v| format!("{name}={}", urlencoding::encode(v)))
            })
            .collect();

        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }

        Ok(url)
    }

    fn path_value(&self, name: &str) -> Result<&str, SdkError> {
        let value = self
            .path_params
            .iter()
            .find(|(param, _)| *param == name)
            .and_then(|(_, value)| value.as_deref());

        match value {
            None | Some("") => Err(SdkError::InvalidArgument(format!(
                "missing required path parameter `{name}`"
            ))),
            // URL parsers resolve these as dot segments and change the target path
            Some("." | "..") => Err(SdkError::InvalidArgument(format!(
                "path parameter `{name}` must not be a dot segment"
            ))),
            Some(value) => Ok(value),
        }
    }
}

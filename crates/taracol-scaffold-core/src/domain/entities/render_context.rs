use std::collections::HashMap;

/// Context for template rendering.
///
/// A **Value Object** holding every variable a parameterized file may use.
/// Starts empty; the project name is never interpolated, so the generated
/// workspace keeps its `taracol-*` crate names for any `--name`. Files add
/// their own variables (`SERVICE_NAME`, `SERVICE_DESCRIPTION`) through
/// [`FileSpec::with_variable`](super::blueprint::FileSpec::with_variable).
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self. Later values override earlier ones.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every `{{VARIABLE}}` placeholder.
    ///
    /// - `{{UNKNOWN}}` stays as the literal `{{UNKNOWN}}`
    /// - single braces (Rust format strings, TOML tables) are untouched
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_added_variables() {
        let ctx = RenderContext::new()
            .with_variable("SERVICE_NAME", "web-service")
            .with_variable("SERVICE_DESCRIPTION", "Web things");
        assert_eq!(
            ctx.render("{{SERVICE_NAME}}: {{SERVICE_DESCRIPTION}}"),
            "web-service: Web things"
        );
    }

    #[test]
    fn starts_empty() {
        let ctx = RenderContext::new();
        assert_eq!(ctx.get("PROJECT_NAME"), None);
        assert_eq!(ctx.render("# {{PROJECT_NAME}}"), "# {{PROJECT_NAME}}");
    }

    #[test]
    fn unknown_placeholder_is_left_alone() {
        let ctx = RenderContext::new();
        assert_eq!(ctx.render("{{NOPE}}"), "{{NOPE}}");
    }

    #[test]
    fn single_braces_survive() {
        let ctx = RenderContext::new();
        let src = "taracol-types = { path = \"../x\" }\nasync fn main() -> Result<()> {}";
        assert_eq!(ctx.render(src), src);
    }

    #[test]
    fn later_variable_overrides() {
        let ctx = RenderContext::new()
            .with_variable("SERVICE_NAME", "a")
            .with_variable("SERVICE_NAME", "b");
        assert_eq!(ctx.get("SERVICE_NAME"), Some("b"));
    }
}

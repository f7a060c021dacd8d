//! Read-only execution context passed to every handler.

/// Program metadata plus the invoking path, unrelated to parsing.
#[derive(Debug, Clone)]
pub struct Context {
    pub name: String,
    pub version: String,
    pub description: String,
    /// The invoked path, `argv[0]`.
    pub argv0: String,
}

impl Context {
    /// The `<name> <version>` line used for version output.
    pub fn version_line(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_line_joins_name_and_version() {
        let context = Context {
            name: "tool".into(),
            version: "1.2.3".into(),
            description: "A tool.".into(),
            argv0: "/usr/bin/tool".into(),
        };
        assert_eq!(context.version_line(), "tool 1.2.3");
    }
}

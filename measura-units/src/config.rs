//! Registry configuration

use serde::{Serialize, Deserialize};

/// Names a registry answers to, and its default lookup behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Schema name accepted as a qualifier ("Units:FT")
    pub schema_name: String,
    /// Short alias accepted as a qualifier ("u:FT")
    pub alias: String,
    /// Fall back to case-insensitive matching in `lookup_unit`
    pub case_insensitive: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            schema_name: "Units".to_string(),
            alias: "u".to_string(),
            case_insensitive: false,
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema_name(mut self, name: impl Into<String>) -> Self {
        self.schema_name = name.into();
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn with_case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    /// Strip a qualifier naming this registry. Returns `None` when the name
    /// is qualified with some other schema.
    pub(crate) fn strip_qualifier<'a>(&self, name: &'a str, ignore_case: bool) -> Option<&'a str> {
        match name.split_once(':') {
            None => Some(name),
            Some((prefix, rest)) => {
                let matches = |candidate: &str| {
                    if ignore_case {
                        prefix.eq_ignore_ascii_case(candidate)
                    } else {
                        prefix == candidate
                    }
                };
                (matches(&self.alias) || matches(&self.schema_name)).then_some(rest)
            }
        }
    }
}

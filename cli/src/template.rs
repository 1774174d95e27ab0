//! Header templates with `{{key}}` placeholders.

use std::collections::BTreeMap;

use regex::{Captures, Regex};

/// A header template and the values substituted into it.
pub struct HeaderTemplate {
    source: String,
    values: BTreeMap<String, String>,
    placeholder: Regex,
}

impl HeaderTemplate {
    /// Create a template from its source text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            values: BTreeMap::new(),
            placeholder: Regex::new(r"\{\{\s*([A-Za-z0-9_.-]+)\s*\}\}").unwrap(),
        }
    }

    /// Set a placeholder value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Set a value from a `KEY=VALUE` assignment.
    pub fn set_assignment(&mut self, assignment: &str) -> Result<(), String> {
        match assignment.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                self.set(key.trim(), value);
                Ok(())
            }
            _ => Err(format!("Expected KEY=VALUE, got {:?}", assignment)),
        }
    }

    /// Substitute every known placeholder. Unknown ones are left as written.
    pub fn render(&self) -> String {
        self.placeholder
            .replace_all(&self.source, |caps: &Captures| {
                let key = &caps[1];
                match self.values.get(key) {
                    Some(value) => value.clone(),
                    None => {
                        log::warn!("No value for template placeholder {:?}", key);
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }
}

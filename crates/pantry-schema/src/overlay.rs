//! Optional JSON overlay that extends the built-in tables without a
//! code change.
//!
//! The overlay is a single JSON object with up to four maps:
//!
//! ```json
//! {
//!   "aliases": { "Acct Name": "name" },
//!   "priority_tokens": { "urgent": "A" },
//!   "segment_tokens": { "bistro": "Fine Dining" },
//!   "type_tokens": { "partner": "distributor" }
//! }
//! ```
//!
//! Alias values are canonical field keys; token values are parsed with
//! the same tolerant rules the record enums use.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use pantry_model::{OrganizationType, Priority, Segment};

use crate::fields::FieldKey;
use crate::schema::ImportSchema;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("failed to read overlay file: {0}")]
    Io(#[from] std::io::Error),
    #[error("overlay is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("alias '{phrase}' names unknown field '{key}'")]
    UnknownField { phrase: String, key: String },
    #[error("{table} token '{token}' names unknown value '{value}'")]
    UnknownValue {
        table: &'static str,
        token: String,
        value: String,
    },
}

/// Parsed overlay file. Every map is optional and defaults to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaOverlay {
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    #[serde(default)]
    pub priority_tokens: BTreeMap<String, String>,
    #[serde(default)]
    pub segment_tokens: BTreeMap<String, String>,
    #[serde(default)]
    pub type_tokens: BTreeMap<String, String>,
}

impl SchemaOverlay {
    pub fn from_json(text: &str) -> Result<Self, OverlayError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, OverlayError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Merges the overlay into `schema`. Overlay entries win over
    /// built-ins when phrases or tokens collide. Fails without partial
    /// effect on the first unknown field or enum value.
    pub fn apply(&self, schema: &mut ImportSchema) -> Result<(), OverlayError> {
        let mut aliases = Vec::with_capacity(self.aliases.len());
        for (phrase, key) in &self.aliases {
            let field =
                FieldKey::from_str(key).map_err(|_| OverlayError::UnknownField {
                    phrase: phrase.clone(),
                    key: key.clone(),
                })?;
            aliases.push((phrase.as_str(), field));
        }
        let priority = parse_tokens::<Priority>("priority", &self.priority_tokens)?;
        let segment = parse_tokens::<Segment>("segment", &self.segment_tokens)?;
        let organization_type = parse_tokens::<OrganizationType>("type", &self.type_tokens)?;

        for (phrase, field) in aliases {
            schema.aliases.insert(phrase, field);
        }
        for (token, value) in priority {
            schema.priority.insert(token, value);
        }
        for (token, value) in segment {
            schema.segment.insert(token, value);
        }
        for (token, value) in organization_type {
            schema.organization_type.insert(token, value);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
            && self.priority_tokens.is_empty()
            && self.segment_tokens.is_empty()
            && self.type_tokens.is_empty()
    }
}

fn parse_tokens<'a, T>(
    table: &'static str,
    tokens: &'a BTreeMap<String, String>,
) -> Result<Vec<(&'a str, T)>, OverlayError>
where
    T: FromStr,
{
    tokens
        .iter()
        .map(|(token, value)| {
            T::from_str(value)
                .map(|parsed| (token.as_str(), parsed))
                .map_err(|_| OverlayError::UnknownValue {
                    table,
                    token: token.clone(),
                    value: value.clone(),
                })
        })
        .collect()
}

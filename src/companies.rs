//! Companies that use Moleculer, flattened for the README.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

use crate::error::{Error, Result};

/// A single company as listed in `companies.yml`.
///
/// Missing fields stay `None` and render as empty text. Non-string scalars
/// such as `name: 1024` are kept as their text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Company {
    #[serde(default, deserialize_with = "text_field")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub link: Option<String>,
}

/// Companies grouped the way the site data file groups them, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCompanies {
    pub groups: Vec<(String, Vec<Company>)>,
}

/// Flat list of companies handed to the template.
pub type CompanyView = Vec<Company>;

impl RawCompanies {
    /// Build from a parsed YAML document. `origin` only labels errors.
    pub fn from_value(value: Value, origin: &str) -> Result<Self> {
        let mapping = match value {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(Error::shape(
                    origin,
                    "expected a mapping of group name to company list",
                ))
            }
        };

        let mut groups = Vec::with_capacity(mapping.len());
        for (key, group) in mapping {
            let name = key_to_string(&key);
            let companies = match group {
                Value::Null => Vec::new(),
                Value::Sequence(_) => serde_yaml::from_value(group).map_err(|e| {
                    Error::shape(origin, format!("group '{}': {}", name, e))
                })?,
                _ => {
                    return Err(Error::shape(
                        origin,
                        format!("group '{}' is not a list", name),
                    ))
                }
            };
            groups.push((name, companies));
        }

        Ok(Self { groups })
    }

    /// Total number of companies across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, c)| c.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Concatenate every group in order, discarding the grouping.
pub fn build_companies_view(raw: RawCompanies) -> CompanyView {
    raw.groups
        .into_iter()
        .flat_map(|(_, companies)| companies)
        .collect()
}

/// Deserialize any YAML value as optional text. `null` is `None`.
pub(crate) fn text_field<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .filter(|v| !v.is_null())
        .map(|v| key_to_string(&v)))
}

pub(crate) fn key_to_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

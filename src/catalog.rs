//! Module catalog parsing.
//!
//! `modules.yml` maps a topic key to a topic record. A record holding exactly
//! `title` and `entries` lists its modules directly. Any other record groups
//! them into sub-topics, one per non-`title` key. The shape is decided here,
//! once, so the view builders never inspect key sets.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::companies::{key_to_string, text_field};
use crate::error::{Error, Result};

const TITLE_KEY: &str = "title";
const ENTRIES_KEY: &str = "entries";

/// A catalog item, as written in `modules.yml`. Text fields take any scalar.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Entry {
    #[serde(default, deserialize_with = "text_field")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub link: Option<String>,
    /// Only a literal `true` marks a module as official.
    #[serde(default)]
    pub official: Option<Value>,
    #[serde(default, deserialize_with = "text_field")]
    pub desc: Option<String>,
}

impl Entry {
    pub fn is_official(&self) -> bool {
        matches!(self.official, Some(Value::Bool(true)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubTopic {
    pub title: String,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Topic {
    /// Entries listed directly under the topic
    Flat { title: String, entries: Vec<Entry> },
    /// Entries grouped into sub-topics
    Nested {
        title: String,
        subtopics: Vec<SubTopic>,
    },
}

impl Topic {
    pub fn title(&self) -> &str {
        match self {
            Topic::Flat { title, .. } | Topic::Nested { title, .. } => title,
        }
    }
}

/// All topics of the catalog, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub topics: Vec<Topic>,
}

impl Catalog {
    /// Build from a parsed YAML document. `origin` only labels errors.
    pub fn from_value(value: Value, origin: &str) -> Result<Self> {
        let mapping = match value {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(Error::shape(
                    origin,
                    "expected a mapping of topic key to topic record",
                ))
            }
        };

        let topics = mapping
            .into_iter()
            .map(|(key, record)| parse_topic(&key_to_string(&key), record, origin))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { topics })
    }
}

fn parse_topic(key: &str, record: Value, origin: &str) -> Result<Topic> {
    let record = as_mapping(&record, key, origin)?;
    let title = title_of(record, key, origin)?;

    let is_flat = record.len() == 2 && record.contains_key(ENTRIES_KEY);
    if is_flat {
        let entries = entries_of(record, key, origin)?;
        return Ok(Topic::Flat { title, entries });
    }

    let mut subtopics = Vec::with_capacity(record.len().saturating_sub(1));
    for (sub_key, sub_record) in record {
        if sub_key.as_str() == Some(TITLE_KEY) {
            continue;
        }
        let path = format!("{}.{}", key, key_to_string(sub_key));
        let sub_record = as_mapping(sub_record, &path, origin)?;
        subtopics.push(SubTopic {
            title: title_of(sub_record, &path, origin)?,
            entries: entries_of(sub_record, &path, origin)?,
        });
    }

    Ok(Topic::Nested { title, subtopics })
}

fn as_mapping<'a>(value: &'a Value, path: &str, origin: &str) -> Result<&'a Mapping> {
    value
        .as_mapping()
        .ok_or_else(|| Error::shape(origin, format!("'{}' is not a mapping", path)))
}

fn title_of(record: &Mapping, path: &str, origin: &str) -> Result<String> {
    match record.get(TITLE_KEY) {
        Some(Value::String(title)) => Ok(title.clone()),
        Some(_) => Err(Error::shape(
            origin,
            format!("'{}.title' is not a string", path),
        )),
        None => Err(Error::shape(origin, format!("'{}' has no title", path))),
    }
}

fn entries_of(record: &Mapping, path: &str, origin: &str) -> Result<Vec<Entry>> {
    match record.get(ENTRIES_KEY) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(entries) => Vec::<Entry>::deserialize(entries)
            .map_err(|e| Error::shape(origin, format!("'{}.entries': {}", path, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source;

    fn catalog(yaml: &str) -> Catalog {
        let value = source::parse(yaml, "test").unwrap();
        Catalog::from_value(value, "test").unwrap()
    }

    #[test]
    fn test_title_and_entries_is_flat() {
        let catalog = catalog(r#"
core:
  title: Core
  entries:
    - name: moleculer
      link: https://github.com/moleculerjs/moleculer
      official: true
"#);
        assert_eq!(catalog.topics.len(), 1);
        match &catalog.topics[0] {
            Topic::Flat { title, entries } => {
                assert_eq!(title, "Core");
                assert_eq!(entries.len(), 1);
                assert!(entries[0].is_official());
            }
            other => panic!("expected flat topic, got {:?}", other),
        }
    }

    #[test]
    fn test_other_keys_are_nested() {
        let catalog = catalog(r#"
services:
  title: Services
  databases:
    title: Databases
    entries:
      - name: moleculer-db
        link: https://example.test/db
  gateways:
    title: API Gateways
    entries: []
"#);
        match &catalog.topics[0] {
            Topic::Nested { title, subtopics } => {
                assert_eq!(title, "Services");
                let titles: Vec<_> = subtopics.iter().map(|s| s.title.as_str()).collect();
                assert_eq!(titles, vec!["Databases", "API Gateways"]);
                assert_eq!(subtopics[0].entries.len(), 1);
                assert!(subtopics[1].entries.is_empty());
            }
            other => panic!("expected nested topic, got {:?}", other),
        }
    }

    #[test]
    fn test_entries_plus_extra_key_is_nested() {
        // `entries` next to a sub-topic is read as a sub-topic itself
        let value = source::parse(
            r#"
mixed:
  title: Mixed
  entries: []
  extra:
    title: Extra
    entries: []
"#,
            "modules.yml",
        )
        .unwrap();
        let err = Catalog::from_value(value, "modules.yml").unwrap_err();
        assert!(err.to_string().contains("'mixed.entries' is not a mapping"));
    }

    #[test]
    fn test_single_subtopic_is_nested() {
        let catalog = catalog(r#"
tools:
  title: Tools
  cli:
    title: CLI
    entries:
      - name: moleculer-cli
"#);
        match &catalog.topics[0] {
            Topic::Nested { subtopics, .. } => {
                assert_eq!(subtopics.len(), 1);
                assert_eq!(subtopics[0].title, "CLI");
            }
            other => panic!("expected nested topic, got {:?}", other),
        }
    }

    #[test]
    fn test_title_only_is_nested_without_subtopics() {
        let catalog = catalog("lonely:\n  title: Lonely\n");
        assert_eq!(
            catalog.topics[0],
            Topic::Nested {
                title: "Lonely".to_string(),
                subtopics: vec![],
            }
        );
    }

    #[test]
    fn test_document_order_is_preserved() {
        let catalog = catalog(r#"
zeta: { title: Zeta, entries: [] }
alpha: { title: Alpha, entries: [] }
mid: { title: Mid, entries: [] }
"#);
        let titles: Vec<_> = catalog.topics.iter().map(Topic::title).collect();
        assert_eq!(titles, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_official_only_when_literally_true() {
        let catalog = catalog(r#"
t:
  title: T
  entries:
    - { name: a, official: true }
    - { name: b, official: false }
    - { name: c, official: "true" }
    - { name: d }
"#);
        let Topic::Flat { entries, .. } = &catalog.topics[0] else {
            panic!("expected flat topic");
        };
        let official: Vec<_> = entries.iter().map(Entry::is_official).collect();
        assert_eq!(official, vec![true, false, false, false]);
    }

    #[test]
    fn test_numeric_fields_are_kept_as_text() {
        let catalog = catalog(r#"
t:
  title: T
  entries:
    - name: 2020
      link: 7
      desc: 3.5
    - link: https://example.test/unnamed
"#);
        let Topic::Flat { entries, .. } = &catalog.topics[0] else {
            panic!("expected flat topic");
        };
        assert_eq!(entries[0].name.as_deref(), Some("2020"));
        assert_eq!(entries[0].link.as_deref(), Some("7"));
        assert_eq!(entries[0].desc.as_deref(), Some("3.5"));
        assert_eq!(entries[1].name, None);
        assert_eq!(entries[1].desc, None);
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let value = source::parse("broken:\n  entries: []\n", "modules.yml").unwrap();
        let err = Catalog::from_value(value, "modules.yml").unwrap_err();
        assert!(err.to_string().contains("'broken' has no title"));
    }

    #[test]
    fn test_subtopic_not_a_mapping_is_an_error() {
        let value = source::parse("t:\n  title: T\n  sub: 3\n", "modules.yml").unwrap();
        let err = Catalog::from_value(value, "modules.yml").unwrap_err();
        assert!(err.to_string().contains("'t.sub' is not a mapping"));
    }
}

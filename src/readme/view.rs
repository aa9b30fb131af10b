//! View objects handed to the README template.
//!
//! Optional fields are left out of the serialized view entirely when they
//! are `None`, so templates gate sections with `is defined` rather than on
//! truthiness. `name` and `link` are always present and render as empty text
//! when missing from the source.

use serde::Serialize;

use crate::catalog::{Catalog, Entry, SubTopic, Topic};
use crate::companies::CompanyView;

/// Badge shown next to official Moleculer modules. The `[official]` reference
/// link is defined in the template.
pub const OFFICIAL_BADGE: &str = "![Official Moleculer Module][official]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub name: Option<String>,
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtopicView {
    pub name: String,
    pub link: String,
    pub modules: Vec<EntryView>,
}

/// A top-level topic. Flat topics set `modules`, nested ones set `subtopic`,
/// never both. A nested topic without sub-topics sets neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicView {
    pub name: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtopic: Option<Vec<SubtopicView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<EntryView>>,
}

pub type ModuleView = Vec<TopicView>;

/// Everything the README template sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderView {
    pub index: ModuleView,
    pub companies: CompanyView,
}

/// Build the navigation view for every topic of the catalog.
pub fn build_modules_view(catalog: Catalog) -> ModuleView {
    catalog.topics.into_iter().map(topic_view).collect()
}

fn topic_view(topic: Topic) -> TopicView {
    match topic {
        Topic::Flat { title, entries } => TopicView {
            link: anchor(&title),
            name: title,
            subtopic: None,
            modules: Some(sanitize_entries(entries)),
        },
        Topic::Nested { title, subtopics } => TopicView {
            link: anchor(&title),
            name: title,
            // An empty sub-topic list is left out, same as a missing one
            subtopic: if subtopics.is_empty() {
                None
            } else {
                Some(subtopics.into_iter().map(subtopic_view).collect())
            },
            modules: None,
        },
    }
}

fn subtopic_view(subtopic: SubTopic) -> SubtopicView {
    SubtopicView {
        link: anchor(&subtopic.title),
        name: subtopic.title,
        modules: sanitize_entries(subtopic.entries),
    }
}

/// Markdown heading anchor: lowercase, each whitespace run becomes one `-`.
pub fn anchor(title: &str) -> String {
    let mut link = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                link.push('-');
            }
            in_whitespace = true;
        } else {
            link.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    link
}

pub fn sanitize_entries(entries: Vec<Entry>) -> Vec<EntryView> {
    entries
        .into_iter()
        .map(|entry| EntryView {
            official: entry.is_official().then_some(OFFICIAL_BADGE),
            desc: sanitize_description(entry.desc.as_deref()),
            name: entry.name,
            link: entry.link,
        })
        .collect()
}

/// Prefix a description with a dash separator.
///
/// A single leading `/` or `\` is dropped first. Catalog authors use it to
/// escape descriptions that would otherwise not parse as a YAML string.
pub fn sanitize_description(desc: Option<&str>) -> Option<String> {
    let desc = desc?;
    let desc = desc
        .strip_prefix('/')
        .or_else(|| desc.strip_prefix('\\'))
        .unwrap_or(desc);

    Some(format!(" - {}", desc))
}

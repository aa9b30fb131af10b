//! README template rendering with Tera.
//!
//! Templates stay logic-less in practice: sections are gated on whether a
//! key is present (`{% if topic.modules is defined %}`) and lists are walked
//! with `{% for %}`. With autoescape on, plain substitutions are HTML-escaped
//! and `| safe` marks a value for verbatim output.

use std::collections::HashMap;
use tera::{Context, Tera};

use super::view::{anchor, RenderView};
use crate::error::Result;

/// Name the template is registered under. The `.md` suffix is what
/// autoescaping keys on.
const TEMPLATE_NAME: &str = "readme.md";

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub autoescape: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { autoescape: true }
    }
}

impl Renderer {
    pub fn new(autoescape: bool) -> Self {
        Self { autoescape }
    }

    /// Render `template` against `view`. No I/O, no hidden state.
    pub fn render(&self, template: &str, view: &RenderView) -> Result<String> {
        let mut tera = Tera::default();
        tera.autoescape_on(if self.autoescape {
            vec![TEMPLATE_NAME]
        } else {
            vec![]
        });
        tera.register_filter("anchor", anchor_filter);
        tera.add_raw_template(TEMPLATE_NAME, template)?;

        let context = Context::from_serialize(view)?;
        Ok(tera.render(TEMPLATE_NAME, &context)?)
    }
}

/// Render with default settings (autoescape on).
pub fn render(template: &str, view: &RenderView) -> Result<String> {
    Renderer::default().render(template, view)
}

/// Tera filter turning a title into its heading anchor
fn anchor_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    match value.as_str() {
        Some(s) => Ok(tera::Value::String(anchor(s))),
        None => Ok(value.clone()),
    }
}

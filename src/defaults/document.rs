//! Defaulting for raw EventListener documents
//!
//! Takes objects as they arrive from an admission or conversion request
//! (plain JSON), applies [`SetDefaults`] and hands back JSON. A Kubernetes
//! `List` is handled item by item, keeping item order.
//!
//! Only the document envelope is checked (`apiVersion` and `kind`). Field
//! values are never validated here, and fields the CRD types do not model
//! are carried through unchanged.

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use super::context::DefaultingContext;
use super::event_listener::SetDefaults;
use crate::crd::{EventListener, API_VERSION};

const EVENT_LISTENER_KIND: &str = "EventListener";
const LIST_KIND: &str = "List";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Missing apiVersion{0}")]
    MissingApiVersion(String),

    #[error("Unsupported apiVersion '{api_version}'{context}")]
    UnsupportedApiVersion {
        api_version: String,
        context: String,
    },

    #[error("Unsupported kind '{kind}'{context}")]
    UnsupportedKind { kind: String, context: String },

    #[error("Failed to decode EventListener{context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode EventListener{context}: {source}")]
    Serialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Describe where an object sits for error messages, e.g.
/// " (item: 2, namespace: ci, name: github)"
fn object_context(obj: &Value, item: Option<usize>) -> String {
    let metadata = obj.get("metadata");
    let field = |key: &str| metadata.and_then(|m| m.get(key)).and_then(|v| v.as_str());

    let mut parts = Vec::new();
    if let Some(index) = item {
        parts.push(format!("item: {}", index));
    }
    if let Some(namespace) = field("namespace") {
        parts.push(format!("namespace: {}", namespace));
    }
    if let Some(name) = field("name") {
        parts.push(format!("name: {}", name));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

/// Apply defaults to a single EventListener object
pub fn default_object(obj: &Value, ctx: &DefaultingContext) -> Result<Value, DocumentError> {
    default_object_at(obj, None, ctx)
}

fn default_object_at(
    obj: &Value,
    item: Option<usize>,
    ctx: &DefaultingContext,
) -> Result<Value, DocumentError> {
    let context = || object_context(obj, item);

    let api_version = obj
        .get("apiVersion")
        .and_then(|v| v.as_str())
        .ok_or_else(|| DocumentError::MissingApiVersion(context()))?;

    if api_version != API_VERSION {
        return Err(DocumentError::UnsupportedApiVersion {
            api_version: api_version.to_string(),
            context: context(),
        });
    }

    let kind = obj.get("kind").and_then(|v| v.as_str()).unwrap_or_default();
    if kind != EVENT_LISTENER_KIND {
        return Err(DocumentError::UnsupportedKind {
            kind: kind.to_string(),
            context: context(),
        });
    }

    let mut listener: EventListener =
        serde_json::from_value(obj.clone()).map_err(|source| DocumentError::Deserialize {
            context: context(),
            source,
        })?;

    listener.set_defaults(ctx);

    serde_json::to_value(&listener).map_err(|source| DocumentError::Serialize {
        context: context(),
        source,
    })
}

/// Apply defaults to an EventListener or to every item of a `List`
///
/// The first failing item fails the whole document; nothing is partially
/// returned.
pub fn default_objects(doc: &Value, ctx: &DefaultingContext) -> Result<Value, DocumentError> {
    let is_list = doc.get("kind").and_then(|v| v.as_str()) == Some(LIST_KIND);

    let Some(items) = doc.get("items").and_then(|v| v.as_array()).filter(|_| is_list) else {
        let defaulted = default_object(doc, ctx)?;
        info!(
            context = %object_context(doc, None),
            upgrading = ctx.is_upgrade_via_defaulting(),
            "Defaulted EventListener"
        );
        return Ok(defaulted);
    };

    let mut defaulted_items = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        defaulted_items.push(default_object_at(item, Some(index), ctx)?);
    }

    info!(
        item_count = defaulted_items.len(),
        upgrading = ctx.is_upgrade_via_defaulting(),
        "Defaulted EventListener list"
    );

    let mut list = doc.clone();
    list["items"] = Value::Array(defaulted_items);
    Ok(list)
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;

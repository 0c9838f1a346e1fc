use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::params::Param;

/// Fields this crate does not model, kept so a defaulting pass hands them
/// back untouched
pub type ExtraFields = BTreeMap<String, Value>;

/// EventListener exposes an addressable sink that turns incoming events into
/// pipeline resources by way of its triggers.
///
/// Older manifests describe each trigger with a single `binding`,
/// `interceptor` and inline `params`. Those fields are still accepted and are
/// folded into `bindings`/`interceptors` during an upgrade pass
/// (see [`crate::defaults`]).
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[kube(
    group = "triggers.tekton.dev",
    version = "v1alpha1",
    kind = "EventListener",
    namespaced,
    status = "EventListenerStatus",
    shortname = "el",
    derive = "PartialEq",
    printcolumn = r#"{"name":"Address", "type":"string", "jsonPath":".status.address.url"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
pub struct EventListenerSpec {
    /// Service account the generated sink runs as
    #[serde(
        rename = "serviceAccountName",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub service_account_name: String,

    /// Triggers evaluated for every incoming event, in declaration order
    #[serde(default)]
    pub triggers: Vec<EventListenerTrigger>,

    /// Kubernetes service type used to expose the sink (e.g. "ClusterIP")
    #[serde(rename = "serviceType", skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,

    /// Anything else under `spec` (podTemplate, resources, ...)
    #[serde(flatten)]
    #[schemars(skip)]
    pub extra: ExtraFields,
}

/// A single trigger: bindings extract event data, interceptors filter and
/// enrich the event, and the template instantiates resources.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct EventListenerTrigger {
    /// Deprecated: use `bindings`
    #[serde(rename = "binding", skip_serializing_if = "Option::is_none")]
    pub deprecated_binding: Option<EventListenerBinding>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<EventListenerBinding>,

    #[serde(default)]
    pub template: EventListenerTemplate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Deprecated: use `interceptors`
    #[serde(rename = "interceptor", skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "super::schema::opaque_object")]
    pub deprecated_interceptor: Option<EventInterceptor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(schema_with = "super::schema::opaque_object_list")]
    pub interceptors: Vec<EventInterceptor>,

    /// Deprecated: inline params have no replacement in v1alpha1 and are
    /// dropped on upgrade
    #[serde(rename = "params", default, skip_serializing_if = "Vec::is_empty")]
    pub deprecated_params: Vec<Param>,

    #[serde(flatten)]
    #[schemars(skip)]
    pub extra: ExtraFields,
}

/// Reference to a TriggerBinding or ClusterTriggerBinding
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct EventListenerBinding {
    pub name: String,

    /// Scope of the referenced binding. Unset (absent, null or "") means
    /// namespaced once defaulted.
    #[serde(
        default,
        deserialize_with = "empty_kind_as_unset",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub kind: Option<TriggerBindingKind>,

    #[serde(rename = "apiVersion", skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(flatten)]
    #[schemars(skip)]
    pub extra: ExtraFields,
}

impl EventListenerBinding {
    /// Binding reference with no kind set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: TriggerBindingKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

fn empty_kind_as_unset<'de, D>(deserializer: D) -> Result<Option<TriggerBindingKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let kind = Option::<String>::deserialize(deserializer)?;
    Ok(kind
        .filter(|k| !k.is_empty())
        .map(TriggerBindingKind::from))
}

/// Scope discriminator for binding references
///
/// Kinds this crate does not know are carried as `Other` and written back
/// unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum TriggerBindingKind {
    /// Binding lives in the EventListener's namespace (default)
    #[default]
    TriggerBinding,
    /// Cluster-scoped binding
    ClusterTriggerBinding,
    Other(String),
}

impl TriggerBindingKind {
    pub fn as_str(&self) -> &str {
        match self {
            TriggerBindingKind::TriggerBinding => "TriggerBinding",
            TriggerBindingKind::ClusterTriggerBinding => "ClusterTriggerBinding",
            TriggerBindingKind::Other(kind) => kind,
        }
    }
}

impl From<String> for TriggerBindingKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "TriggerBinding" => TriggerBindingKind::TriggerBinding,
            "ClusterTriggerBinding" => TriggerBindingKind::ClusterTriggerBinding,
            _ => TriggerBindingKind::Other(kind),
        }
    }
}

impl From<TriggerBindingKind> for String {
    fn from(kind: TriggerBindingKind) -> Self {
        match kind {
            TriggerBindingKind::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for TriggerBindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct EventListenerTemplate {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "apiVersion", skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Anything else (e.g. `ref`, inline `spec`)
    #[serde(flatten)]
    #[schemars(skip)]
    pub extra: ExtraFields,
}

/// One step of a trigger's interceptor chain, kept as written
///
/// The object is keyed by interceptor type (`webhook`, `github`, `cel`, ...).
/// Defaulting only relocates interceptors and never looks inside one.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct EventInterceptor(pub Map<String, Value>);

impl EventInterceptor {
    /// Interceptor with a single `kind: config` entry
    pub fn new(kind: impl Into<String>, config: Value) -> Self {
        let mut fields = Map::new();
        fields.insert(kind.into(), config);
        Self(fields)
    }

    /// Configuration for the given interceptor type, if present
    pub fn get(&self, kind: &str) -> Option<&Value> {
        self.0.get(kind)
    }

    /// Interceptor types named by this entry
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Observed state of an EventListener
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct EventListenerStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<EventListenerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Addressable>,

    /// Conditions and anything else reported by the sink's controller
    #[serde(flatten)]
    #[schemars(skip)]
    pub extra: ExtraFields,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
pub struct EventListenerConfig {
    /// Name of the generated Deployment and Service
    #[serde(rename = "generatedName")]
    pub generated_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
pub struct Addressable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
#[path = "event_listener_test.rs"]
mod tests;

//! Defaulting and upgrade migration for EventListener resources
//!
//! Every pass fills in binding kinds. A pass marked with
//! [`DefaultingContext::with_upgrade_via_defaulting`] also moves the
//! deprecated single `binding`/`interceptor` of each trigger into
//! `bindings`/`interceptors` (when those are empty) and drops deprecated
//! `params`.

pub mod context;
pub mod document;
pub mod event_listener;
pub mod trigger;

pub use context::{DefaultingContext, UPGRADE_ENV_VAR};
pub use document::{default_object, default_objects, DocumentError};
pub use event_listener::SetDefaults;
pub use trigger::{default_binding_kinds, default_kind, migrate_trigger, DEFAULT_BINDING_KIND};

//! EventListener CRD types (triggers.tekton.dev/v1alpha1)

pub mod event_listener;
pub mod params;
pub mod schema;

pub use event_listener::{
    Addressable, EventInterceptor, EventListener, EventListenerBinding, EventListenerConfig,
    EventListenerSpec, EventListenerStatus, EventListenerTemplate, EventListenerTrigger,
    ExtraFields, TriggerBindingKind,
};
pub use params::{Param, ParamValue};

/// Fully qualified apiVersion string ("triggers.tekton.dev/v1alpha1")
pub const API_VERSION: &str = "triggers.tekton.dev/v1alpha1";

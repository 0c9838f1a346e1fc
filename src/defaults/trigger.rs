//! Per-trigger defaulting and upgrade migration
//!
//! ## Rules
//! - Binding kinds: an unset kind becomes `TriggerBinding`. Always applied.
//! - Upgrade only: `binding` moves into `bindings` when `bindings` is empty.
//! - Upgrade only: `interceptor` moves into `interceptors` when
//!   `interceptors` is empty.
//! - Upgrade only: `params` is cleared. There is nothing to migrate it to.
//!
//! A populated replacement list always wins; the deprecated field is then
//! left where it is for validation to report.

use tracing::debug;

use crate::crd::{EventListenerBinding, EventListenerTrigger, TriggerBindingKind};

/// Kind assigned to binding references that do not name one
pub const DEFAULT_BINDING_KIND: TriggerBindingKind = TriggerBindingKind::TriggerBinding;

/// Fill in the kind of a binding reference if unset
///
/// Absent bindings are ignored. An explicit kind is never overwritten.
pub fn default_kind(binding: Option<&mut EventListenerBinding>) {
    if let Some(binding) = binding {
        if binding.kind.is_none() {
            binding.kind = Some(DEFAULT_BINDING_KIND);
        }
    }
}

/// Apply kind defaulting to the deprecated binding and every listed binding
pub fn default_binding_kinds(trigger: &mut EventListenerTrigger) {
    default_kind(trigger.deprecated_binding.as_mut());
    for binding in trigger.bindings.iter_mut() {
        default_kind(Some(binding));
    }
}

/// Migrate deprecated trigger fields to their replacements
///
/// Does nothing unless `upgrading` is set. The three rules are independent.
pub fn migrate_trigger(trigger: &mut EventListenerTrigger, upgrading: bool) {
    if !upgrading {
        return;
    }

    if trigger.bindings.is_empty() {
        if let Some(binding) = trigger.deprecated_binding.take() {
            debug!(
                trigger = trigger.name.as_deref().unwrap_or_default(),
                binding = %binding.name,
                "Moving deprecated binding into bindings"
            );
            trigger.bindings = vec![binding];
        }
    }

    if trigger.interceptors.is_empty() {
        if let Some(interceptor) = trigger.deprecated_interceptor.take() {
            debug!(
                trigger = trigger.name.as_deref().unwrap_or_default(),
                "Moving deprecated interceptor into interceptors"
            );
            trigger.interceptors = vec![interceptor];
        }
    }

    if !trigger.deprecated_params.is_empty() {
        debug!(
            trigger = trigger.name.as_deref().unwrap_or_default(),
            count = trigger.deprecated_params.len(),
            "Dropping deprecated params"
        );
        trigger.deprecated_params.clear();
    }
}

#[cfg(test)]
#[path = "trigger_test.rs"]
mod tests;

use tracing::debug;

use super::context::DefaultingContext;
use super::trigger::{default_binding_kinds, migrate_trigger};
use crate::crd::{EventListener, EventListenerSpec};

/// Resources that can fill in their own defaults
///
/// Implementations must be total: defaulting never fails and never rejects
/// input. Applying the same context twice gives the same result as once.
pub trait SetDefaults {
    fn set_defaults(&mut self, ctx: &DefaultingContext);
}

impl SetDefaults for EventListenerSpec {
    fn set_defaults(&mut self, ctx: &DefaultingContext) {
        let upgrading = ctx.is_upgrade_via_defaulting();

        for trigger in self.triggers.iter_mut() {
            default_binding_kinds(trigger);
            migrate_trigger(trigger, upgrading);
        }
    }
}

impl SetDefaults for EventListener {
    fn set_defaults(&mut self, ctx: &DefaultingContext) {
        debug!(
            name = self.metadata.name.as_deref().unwrap_or_default(),
            triggers = self.spec.triggers.len(),
            upgrading = ctx.is_upgrade_via_defaulting(),
            "Setting EventListener defaults"
        );
        self.spec.set_defaults(ctx);
    }
}

#[cfg(test)]
#[path = "event_listener_test.rs"]
mod tests;

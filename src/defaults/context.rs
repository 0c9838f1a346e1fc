//! Defaulting options passed explicitly to every defaulting pass

/// Env var read by the `set-defaults` binary for its `--upgrade` flag
pub const UPGRADE_ENV_VAR: &str = "TRIGGERS_UPGRADE_VIA_DEFAULTING";

/// Options for a single defaulting pass
///
/// The only switch today is whether the pass is part of an upgrade (e.g. a
/// stored-version rewrite). Outside an upgrade, deprecated fields are kept as
/// written; during one, they are migrated to their replacements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultingContext {
    upgrade_via_defaulting: bool,
}

impl DefaultingContext {
    /// Plain defaulting, no upgrade migrations
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark this pass as an upgrade
    pub fn with_upgrade_via_defaulting(mut self) -> Self {
        self.upgrade_via_defaulting = true;
        self
    }

    pub fn is_upgrade_via_defaulting(&self) -> bool {
        self.upgrade_via_defaulting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_is_not_upgrading() {
        assert!(!DefaultingContext::new().is_upgrade_via_defaulting());
        assert!(!DefaultingContext::default().is_upgrade_via_defaulting());
    }

    #[test]
    fn test_with_upgrade_via_defaulting_sets_flag() {
        let ctx = DefaultingContext::new().with_upgrade_via_defaulting();
        assert!(ctx.is_upgrade_via_defaulting());

        // Marking twice is the same as marking once
        assert_eq!(ctx.with_upgrade_via_defaulting(), ctx);
    }

    #[test]
    fn test_marking_does_not_affect_original() {
        let plain = DefaultingContext::new();
        let upgrading = plain.with_upgrade_via_defaulting();

        assert!(!plain.is_upgrade_via_defaulting());
        assert!(upgrading.is_upgrade_via_defaulting());
    }
}

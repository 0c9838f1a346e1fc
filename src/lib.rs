//! Defaulting and upgrade migration for Tekton Triggers EventListeners

pub mod crd;
pub mod defaults;

//! Metadata validation orchestration and shared helpers.

pub mod naming;
pub mod relation;

use crate::{
    error::ErrorTree,
    provider::{MetadataProvider, MetadataRegistry},
};

/// Run full metadata validation in a staged, deterministic order.
pub(crate) fn validate_registry(registry: &MetadataRegistry) -> ErrorTree {
    // Phase 1: per-entity invariants.
    let mut errors = ErrorTree::new();
    for entity in registry.entities() {
        errors.merge(entity.name.as_str(), naming::validate_entity(entity));
    }

    // Phase 2: cross-entity invariants.
    relation::validate_relation_targets(registry, &mut errors);

    errors
}

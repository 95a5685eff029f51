use crate::{
    provider::{MetadataProvider, MetadataRegistry},
    prelude::*,
};

// Every relation must point at a registered entity. Derived types only
// reference their targets by name, so a dangling target would surface later
// as an unresolved schema type.
pub fn validate_relation_targets(registry: &MetadataRegistry, errs: &mut ErrorTree) {
    for entity in registry.entities() {
        for prop in &entity.properties {
            let PropertyKind::Relation { target, .. } = &prop.kind else {
                continue;
            };
            if registry.entity(target.as_str()).is_none() {
                let mut route = ErrorTree::new();
                err!(route, "relation target '{target}' is not a registered entity");

                let mut owner = ErrorTree::new();
                owner.merge(&prop.name, route);
                errs.merge(entity.name.as_str(), owner);
            }
        }
    }
}

use crate::{MAX_ENTITY_NAME_LEN, MAX_PROPERTY_NAME_LEN, prelude::*};
use std::collections::BTreeSet;

/// Field names taken by the condition unions (`NOT` is held back for when
/// negation lands).
pub const RESERVED_FIELDS: [&str; 3] = ["AND", "NOT", "OR"];

/// Check one entity: its own name, then every property name.
pub fn validate_entity(entity: &EntityDescriptor) -> ErrorTree {
    let mut errs = ErrorTree::new();

    if let Err(msg) = validate_entity_name(entity.name.as_str()) {
        errs.add(msg);
    }

    let mut seen = BTreeSet::new();
    for prop in &entity.properties {
        if let Err(msg) = validate_property_name(&prop.name) {
            errs.add_for(&prop.name, msg);
        }
        if !seen.insert(prop.name.as_str()) {
            errs.add_for(&prop.name, "duplicate property name");
        }
        if let PropertyKind::Enum { name } = &prop.kind
            && name.trim().is_empty()
        {
            errs.add_for(&prop.name, "enum name is empty");
        }
    }

    errs
}

/// Entity names are ASCII identifiers; `$` is allowed as a namespace
/// separator and flattened during normalization.
pub(crate) fn validate_entity_name(name: &str) -> Result<(), String> {
    if name.len() > MAX_ENTITY_NAME_LEN {
        return Err(format!(
            "entity name '{name}' exceeds max length {MAX_ENTITY_NAME_LEN}"
        ));
    }
    if !is_graphql_name(name, true) {
        return Err(format!(
            "entity name '{name}' must match [_A-Za-z][_$0-9A-Za-z]*"
        ));
    }

    Ok(())
}

/// Property names become input field names, so they follow GraphQL name
/// rules and may not shadow the union fields.
pub(crate) fn validate_property_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("property name is empty".to_string());
    }
    if name.len() > MAX_PROPERTY_NAME_LEN {
        return Err(format!(
            "property name '{name}' exceeds max length {MAX_PROPERTY_NAME_LEN}"
        ));
    }
    if !is_graphql_name(name, false) {
        return Err(format!(
            "property name '{name}' must match [_A-Za-z][_0-9A-Za-z]*"
        ));
    }
    if RESERVED_FIELDS.contains(&name) {
        return Err(format!("the field name '{name}' is reserved"));
    }

    Ok(())
}

/// GraphQL `Name` production, optionally accepting `$`.
#[must_use]
pub fn is_graphql_name(name: &str, allow_dollar: bool) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || (allow_dollar && c == '$'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_names() {
        assert!(is_graphql_name("amount", false));
        assert!(is_graphql_name("_id2", false));
        assert!(!is_graphql_name("2nd", false));
        assert!(!is_graphql_name("", false));
        assert!(!is_graphql_name("scr$Car", false));
        assert!(is_graphql_name("scr$Car", true));
    }

    #[test]
    fn rejects_reserved_and_malformed_properties() {
        assert!(validate_property_name("AND").is_err());
        assert!(validate_property_name("OR").is_err());
        assert!(validate_property_name("NOT").is_err());
        assert!(validate_property_name("first-name").is_err());
        assert!(validate_property_name("firstName").is_ok());
    }

    #[test]
    fn entity_errors_are_routed_by_property() {
        let entity = EntityDescriptor::named("Order")
            .unwrap()
            .with_property(PropertyDescriptor::scalar("amount", Scalar::BigDecimal))
            .with_property(PropertyDescriptor::scalar("amount", Scalar::Long))
            .with_property(PropertyDescriptor::enumeration("OR", "Status"));

        let flat = validate_entity(&entity).flatten();
        assert_eq!(
            flat,
            vec![
                ("OR".to_string(), "the field name 'OR' is reserved".to_string()),
                ("amount".to_string(), "duplicate property name".to_string()),
            ]
        );
    }

    #[test]
    fn long_entity_names_are_rejected() {
        let name = "E".repeat(MAX_ENTITY_NAME_LEN + 1);
        assert!(validate_entity_name(&name).is_err());
    }
}

use crate::input::{EnumType, EnumValue};

///
/// SortOrder
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub const ALL: [Self; 2] = [Self::Ascending, Self::Descending];

    /// Enum value as it appears in the schema.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Schema enum definition named `name`.
    #[must_use]
    pub fn enum_type(name: &str, describe: bool) -> EnumType {
        EnumType {
            name: name.to_string(),
            values: Self::ALL
                .into_iter()
                .map(|s| EnumValue {
                    name: s.value().to_string(),
                    description: describe.then(|| s.description().to_string()),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_round_trip() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_value(order.value()), Some(order));
        }
        assert_eq!(SortOrder::from_value("ASCENDING"), None);
    }

    #[test]
    fn enum_type_lists_both_directions() {
        let ty = SortOrder::enum_type("SortOrder", false);

        assert_eq!(ty.name, "SortOrder");
        let values: Vec<_> = ty.values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(values, ["ASC", "DESC"]);
        assert!(ty.values.iter().all(|v| v.description.is_none()));
    }
}

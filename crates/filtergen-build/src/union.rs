use crate::input::InputField;
use derive_more::Display;

///
/// ConditionUnion
///
/// Logical members that compose conditions into trees. Each member becomes
/// a self-referencing list field on every filter-condition type.
/// NOT is not offered until negation is supported downstream.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ConditionUnion {
    #[display("AND")]
    And,
    #[display("OR")]
    Or,
}

impl ConditionUnion {
    pub const ALL: [Self; 2] = [Self::And, Self::Or];

    /// Resolve a union member from its field name.
    #[must_use]
    pub fn find(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.field_name() == name)
    }

    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// `MEMBER: [owner]`
    #[must_use]
    pub fn field(self, owner: &str) -> InputField {
        InputField::list(self.field_name(), owner)
    }
}

use crate::input::InputField;

///
/// ComparisonOperator
///
/// Operators offered on scalar condition types. Membership (IN/NIN) and
/// null checks are not offered; the query side does not evaluate them yet.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ComparisonOperator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl ComparisonOperator {
    /// Field order on generated types.
    pub const ALL: [Self; 6] = [Self::Eq, Self::Neq, Self::Gt, Self::Gte, Self::Lt, Self::Lte];

    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Eq => "EQ",
            Self::Neq => "NEQ",
            Self::Gt => "GT",
            Self::Gte => "GTE",
            Self::Lt => "LT",
            Self::Lte => "LTE",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Eq => "equals",
            Self::Neq => "not equals",
            Self::Gt => "greater than",
            Self::Gte => "greater than or equals",
            Self::Lt => "less than",
            Self::Lte => "less than or equals",
        }
    }

    /// `OP: scalar`
    #[must_use]
    pub fn field(self, scalar: &str, describe: bool) -> InputField {
        let field = InputField::value(self.field_name(), scalar);
        if describe {
            field.with_description(self.description())
        } else {
            field
        }
    }
}

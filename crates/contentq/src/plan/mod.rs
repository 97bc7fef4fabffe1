//! Pure plan-layer data types; no planning semantics or storage knowledge.
//!
//! Constraints are a schema-agnostic representation of a storage query.
//! All interpretation happens on the other side of the [`store`] boundary.
//!
//! [`store`]: crate::store

mod fingerprint;

pub use fingerprint::PlanFingerprint;

use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

///
/// RangeOp
///
/// Inclusive range comparators; this is the full set the storage
/// collaborator accepts for range constraints.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u8)]
pub enum RangeOp {
    Gte = 0x01,
    Lte = 0x02,
}

impl RangeOp {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Gte => ">=",
            Self::Lte => "<=",
        }
    }
}

///
/// Constraint
///
/// One ordered instruction for the storage collaborator. Constraints carry
/// owned strings so plans stay comparable and serializable without
/// referencing any particular storage client.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Constraint {
    /// Exact-match filter on one field.
    FieldEq { field: String, value: String },

    /// Inclusive range filter on one field.
    FieldRange {
        field: String,
        op: RangeOp,
        value: String,
    },

    /// Result ordering on one field.
    OrderBy {
        field: String,
        direction: OrderDirection,
    },

    /// Result-count cap ("first N records after ordering").
    Limit { count: u32 },
}

impl Constraint {
    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FieldEq {
            field: field.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FieldRange {
            field: field.into(),
            op: RangeOp::Gte,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FieldRange {
            field: field.into(),
            op: RangeOp::Lte,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn order_by(field: impl Into<String>, direction: OrderDirection) -> Self {
        Self::OrderBy {
            field: field.into(),
            direction,
        }
    }

    #[must_use]
    pub const fn limit(count: u32) -> Self {
        Self::Limit { count }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldEq { field, value } => write!(f, "{field} == {value:?}"),
            Self::FieldRange { field, op, value } => {
                write!(f, "{field} {} {value:?}", op.symbol())
            }
            Self::OrderBy { field, direction } => write!(f, "order by {field} {direction}"),
            Self::Limit { count } => write!(f, "limit {count}"),
        }
    }
}

///
/// QueryPlan
///
/// Immutable, ordered constraint sequence produced by the builder and
/// consumed verbatim by the storage collaborator. Order is significant:
/// collaborators may be order-sensitive for compound-index selection.
///
/// Two plans built from identical inputs are element-wise equal, which is
/// what upstream caching and tests rely on.
///

#[derive(Clone, Debug, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize)]
pub struct QueryPlan(#[into_iterator(owned, ref)] Vec<Constraint>);

impl QueryPlan {
    pub(crate) const fn from_constraints(constraints: Vec<Constraint>) -> Self {
        Self(constraints)
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.0
    }

    /// The count carried by the trailing limit constraint.
    ///
    /// Every plan the builder emits ends in a limit, so this only returns
    /// `None` for plans deserialized from a foreign source.
    #[must_use]
    pub fn limit_count(&self) -> Option<u32> {
        match self.0.last() {
            Some(Constraint::Limit { count }) => Some(*count),
            _ => None,
        }
    }
}

impl fmt::Display for QueryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, constraint) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{constraint}")?;
        }
        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests;

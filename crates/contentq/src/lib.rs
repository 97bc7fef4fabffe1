//! Deterministic query-plan construction for owner-scoped content
//! collections: filters and pagination in, an ordered constraint plan out.
//!
//! The builder is pure and total. It never executes a query and never talks
//! to storage; the document-store collaborator is reached only through the
//! boundary trait in [`store`].
#![warn(unreachable_pub)]

pub mod builder;
pub mod filter;
pub mod page;
pub mod plan;
pub mod store;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No stores, test doubles, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        builder::{QueryPlanBuilder, build_plan, fields},
        filter::{DateRange, FilterSpec},
        page::{DEFAULT_PAGE_SIZE, PageSpec, PageWindow},
        plan::{Constraint, OrderDirection, QueryPlan, RangeOp},
    };
}

use crate::{
    filter::{FilterSpec, NormalizedFilter},
    page::{PageSpec, compute_page_window},
    plan::{Constraint, OrderDirection, QueryPlan},
};

///
/// fields
///
/// Field vocabulary of the content collection. Constraints reference these
/// names verbatim; the storage collaborator resolves them against its own
/// schema and indexes.
///

pub mod fields {
    /// Record owner (the authenticated party whose records are queried).
    pub const OWNER: &str = "ownerId";
    /// Content discriminator ("promotion", "job", "event", ...).
    pub const CONTENT_TYPE: &str = "contentType";
    /// Lifecycle state.
    pub const STATUS: &str = "status";
    /// Creation timestamp; also the sole ordering key.
    pub const CREATED_AT: &str = "createdAt";
}

///
/// QueryPlanBuilder
///
/// Declarative builder for owner-scoped content queries.
///
/// This builder:
/// - Collects filter and pagination input against a fixed owner
/// - Is purely declarative (no schema access or execution)
/// - Normalizes input exactly once, inside `build`
///
/// Important design notes:
/// - No validation occurs here beyond structural composition
/// - The owner identifier is passed through uninterpreted; format
///   validation is an external collaborator's concern
/// - Identical inputs always produce element-wise equal plans
///

#[derive(Clone, Debug, Default)]
pub struct QueryPlanBuilder {
    owner_id: String,
    filter: Option<FilterSpec>,
    page: Option<PageSpec>,
}

impl QueryPlanBuilder {
    /// Create a builder scoped to one owner.
    #[must_use]
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            filter: None,
            page: None,
        }
    }

    /// Set or replace the filter input.
    #[must_use]
    pub fn filter(mut self, filter: FilterSpec) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set or replace the pagination input.
    #[must_use]
    pub const fn page(mut self, page: PageSpec) -> Self {
        self.page = Some(page);
        self
    }

    /// Finalize the builder into an immutable `QueryPlan`.
    #[must_use]
    pub fn build(self) -> QueryPlan {
        build_plan(&self.owner_id, self.filter.as_ref(), self.page.as_ref())
    }
}

/// Translate raw query input into the ordered constraint plan.
///
/// Emission order is a strict rule the storage collaborator may depend on
/// for compound-index selection:
///
/// 1. owner equality (always)
/// 2. creation-time ordering, descending (always)
/// 3. content-type equality (if set)
/// 4. status equality (if set)
/// 5. creation-time lower bound (if set)
/// 6. creation-time upper bound (if set)
/// 7. cumulative-offset limit (always)
///
/// The function is total: malformed pagination normalizes to defaults and
/// absent filters impose no constraints. It reads only its arguments.
#[must_use]
pub fn build_plan(
    owner_id: &str,
    filter: Option<&FilterSpec>,
    page: Option<&PageSpec>,
) -> QueryPlan {
    let filter = filter.map_or(NormalizedFilter::EMPTY, FilterSpec::normalize);
    let window = compute_page_window(page);

    let mut constraints = Vec::with_capacity(7);
    constraints.push(Constraint::eq(fields::OWNER, owner_id));
    constraints.push(Constraint::order_by(
        fields::CREATED_AT,
        OrderDirection::Desc,
    ));

    if let Some(content_type) = filter.content_type {
        constraints.push(Constraint::eq(fields::CONTENT_TYPE, content_type));
    }
    if let Some(status) = filter.status {
        constraints.push(Constraint::eq(fields::STATUS, status));
    }
    if let Some(start) = filter.created_after {
        constraints.push(Constraint::gte(fields::CREATED_AT, start));
    }
    if let Some(end) = filter.created_before {
        constraints.push(Constraint::lte(fields::CREATED_AT, end));
    }

    constraints.push(Constraint::limit(window.fetch_bound()));

    QueryPlan::from_constraints(constraints)
}

///
/// TESTS
///

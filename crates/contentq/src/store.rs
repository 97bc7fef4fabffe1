//! Boundary with the document-store collaborator.
//!
//! This crate only produces plans; executing them is the collaborator's
//! job. The trait here fixes the consumed/produced shapes so callers can
//! hand a plan over and get records plus a "fetch next" cursor back.

use crate::plan::QueryPlan;
use thiserror::Error as ThisError;

///
/// FetchPage
///
/// One page of collaborator results: matching records in plan order plus
/// an opaque continuation cursor when more records exist.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FetchPage<R, C> {
    pub records: Vec<R>,
    pub next: Option<C>,
}

///
/// FetchError
///
/// Rejections surfaced by the storage collaborator. The builder itself
/// never raises; callers propagate these unchanged.
///

#[derive(Debug, ThisError)]
pub enum FetchError {
    #[error("owner is not authorized for this collection")]
    NotAuthorized,

    #[error("no index satisfies the constraint order: {index}")]
    MissingIndex { index: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

///
/// DocumentStore
///
/// The collaborator combines the plan's constraints into one query and
/// returns matching records; this crate never sees how.
///

pub trait DocumentStore {
    type Record;
    type Cursor;

    fn fetch(&self, plan: &QueryPlan) -> Result<FetchPage<Self::Record, Self::Cursor>, FetchError>;
}

///
/// TESTS
///

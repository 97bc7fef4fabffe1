use serde::{Deserialize, Serialize};

/// Page size applied when the caller supplies none (or a non-positive one).
pub const DEFAULT_PAGE_SIZE: u32 = 20;

///
/// PageSpec
///
/// Raw pagination input. Values arrive signed because they come from UI
/// state or URL parameters; anything out of range normalizes to defaults
/// rather than failing.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageSpec {
    /// 1-based page index; `<= 1` or absent means the first page.
    pub page: Option<i64>,
    /// Desired page size; `<= 0` or absent means [`DEFAULT_PAGE_SIZE`].
    pub page_size: Option<i64>,
}

impl PageSpec {
    #[must_use]
    pub const fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }
}

///
/// PageWindow
///
/// Canonical pagination window in u32-domain: `page >= 1`, `page_size > 0`.
/// `fetch_bound` is the cumulative-offset limit handed to storage, and
/// `lead_in` is the row count the caller discards to isolate the last page.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageWindow {
    pub page: u32,
    pub page_size: u32,
}

impl PageWindow {
    /// Window for an absent pagination spec: page 1 at the default size.
    pub const DEFAULT: Self = Self {
        page: 1,
        page_size: DEFAULT_PAGE_SIZE,
    };

    /// Cumulative-offset limit: all prior pages plus one page of results.
    ///
    /// The storage collaborator supports only "first N records after
    /// ordering", not an explicit skip, so the bound for page `p` is
    /// `(p - 1) * page_size + page_size`. Saturates instead of wrapping.
    #[must_use]
    pub const fn fetch_bound(&self) -> u32 {
        if self.page <= 1 {
            return self.page_size;
        }
        (self.page - 1)
            .saturating_mul(self.page_size)
            .saturating_add(self.page_size)
    }

    /// Rows preceding the requested page; discarding them is the caller's
    /// responsibility, not the plan's.
    #[must_use]
    pub const fn lead_in(&self) -> u32 {
        self.fetch_bound() - self.page_size
    }
}

/// Compute the canonical page window from raw pagination input.
#[must_use]
pub fn compute_page_window(spec: Option<&PageSpec>) -> PageWindow {
    let Some(spec) = spec else {
        return PageWindow::DEFAULT;
    };

    let page = match spec.page {
        Some(page) if page > 1 => clamp_u32(page),
        _ => 1,
    };
    let page_size = match spec.page_size {
        Some(size) if size > 0 => clamp_u32(size),
        _ => DEFAULT_PAGE_SIZE,
    };

    PageWindow { page, page_size }
}

// Callers guarantee value > 0 here, so the only lossy case is overflow.
fn clamp_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

///
/// TESTS
///

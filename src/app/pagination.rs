use crate::utils::error::{PanelError, Result};
use serde::Serialize;

pub const DEFAULT_PER_PAGE: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageLink {
    Page(u64),
    Current(u64),
    Gap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl Pagination {
    /// `page` below 1 is treated as 1. Pages past the end are kept so the
    /// caller can render an empty result page, as long as their offset
    /// still fits in a `u64`.
    pub fn new(total: u64, page: u64, per_page: u64) -> Result<Self> {
        if per_page == 0 {
            return Err(PanelError::validation("per_page must be at least 1"));
        }
        let page = page.max(1);
        if (page - 1).checked_mul(per_page).is_none() {
            return Err(PanelError::validation(format!(
                "page {} is out of range for {} items per page",
                page, per_page
            )));
        }
        Ok(Self {
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }

    pub fn offset(&self) -> u64 {
        // Checked in `new`.
        (self.page - 1) * self.per_page
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page links: first, last, and everything within `radius` of the
    /// current page, with a gap marker wherever pages are skipped.
    pub fn window(&self, radius: u64) -> Vec<PageLink> {
        let mut links = Vec::new();
        if self.total_pages == 0 {
            return links;
        }

        let lo = self.page.saturating_sub(radius).max(1);
        let hi = self.page.saturating_add(radius).min(self.total_pages);
        let mut pages = vec![1, self.total_pages];
        pages.extend(lo..=hi);
        pages.sort_unstable();
        pages.dedup();

        let mut last_shown = 0;
        for n in pages {
            if n > last_shown + 1 {
                links.push(PageLink::Gap);
            }
            links.push(if n == self.page {
                PageLink::Current(n)
            } else {
                PageLink::Page(n)
            });
            last_shown = n;
        }

        links
    }
}

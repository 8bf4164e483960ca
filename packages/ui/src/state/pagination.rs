use api::PageQuery;

/// Page sizes offered by the tables.
pub const PAGE_SIZES: [usize; 3] = [10, 25, 50];

/// Table paging as the user sees it: 0-based page index and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationModel {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PaginationModel {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: PAGE_SIZES[0],
        }
    }
}

impl PaginationModel {
    /// Backend query for this page. The backend counts pages from 1.
    pub fn query(&self) -> PageQuery {
        PageQuery {
            page: self.page as u32 + 1,
            limit: self.page_size as u32,
        }
    }

    pub fn page_count(&self, total: u64) -> usize {
        let size = self.page_size.max(1) as u64;
        (total.div_ceil(size) as usize).max(1)
    }

    /// Resizing jumps back to the first page.
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn with_page(self, page: usize, total: u64) -> Self {
        Self {
            page: page.min(self.page_count(total) - 1),
            ..self
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: u64) -> bool {
        self.page + 1 < self.page_count(total)
    }

    /// "11–20 of 42", or "0–0 of 0" for an empty table.
    pub fn range_label(&self, total: u64) -> String {
        if total == 0 {
            return "0–0 of 0".to_string();
        }
        let first = (self.page * self.page_size) as u64 + 1;
        let last = ((self.page + 1) * self.page_size).min(total as usize) as u64;
        format!("{first}–{last} of {total}")
    }

    /// The rows of this page, for tables paged on the client.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = (self.page * self.page_size).min(rows.len());
        let end = (start + self.page_size).min(rows.len());
        &rows[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_one_based() {
        for page in 0..5 {
            for page_size in PAGE_SIZES {
                let model = PaginationModel { page, page_size };
                let query = model.query();
                assert_eq!(query.page as usize, page + 1);
                assert_eq!(query.limit as usize, page_size);
            }
        }
    }

    #[test]
    fn test_page_count_and_navigation() {
        let model = PaginationModel::default();
        assert_eq!(model.page_count(0), 1);
        assert_eq!(model.page_count(10), 1);
        assert_eq!(model.page_count(11), 2);

        let last = model.with_page(99, 42);
        assert_eq!(last.page, 4);
        assert!(!last.has_next(42));
        assert!(last.has_previous());
        assert_eq!(last.range_label(42), "41–42 of 42");
    }

    #[test]
    fn test_resize_resets_page() {
        let model = PaginationModel { page: 3, page_size: 10 }.with_page_size(25);
        assert_eq!(model, PaginationModel { page: 0, page_size: 25 });
    }

    #[test]
    fn test_client_side_slice() {
        let rows: Vec<u32> = (0..23).collect();
        let model = PaginationModel { page: 2, page_size: 10 };
        assert_eq!(model.slice(&rows), &[20, 21, 22]);

        let beyond = PaginationModel { page: 9, page_size: 10 };
        assert!(beyond.slice(&rows).is_empty());
    }
}

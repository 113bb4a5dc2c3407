use serde::Serialize;

/// Page size applied to article listings when the client does not ask for one.
pub const DEFAULT_ARTICLES_PER_PAGE: usize = 10;
/// Page size applied to comment listings when the client does not ask for one.
pub const DEFAULT_COMMENTS_PER_PAGE: usize = 20;

/// A page of items together with the offset arithmetic the API exposes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Wraps a loaded page. Page 0 is treated as page 1.
    pub fn new(items: Vec<T>, page: usize, limit: usize, total: usize) -> Self {
        let page = if page == 0 { 1 } else { page };
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };

        Self {
            items,
            page,
            limit,
            total,
            total_pages,
        }
    }

    /// Maps the item type while keeping the page arithmetic intact.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

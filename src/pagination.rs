//! Fixed-size paging over a result set.
//!
//! Pages are 1-based. Page `0` does not exist and yields nothing.

/// Books shown per "page" of the grid unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// The items on page `page`: `matches[(page-1)*size .. page*size]`, clamped.
pub fn visible_page<T>(matches: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= matches.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(matches.len());
    &matches[start..end]
}

/// Everything displayed once pages `1..=page` have been loaded.
pub fn shown<T>(matches: &[T], page: usize, page_size: usize) -> &[T] {
    let end = page.saturating_mul(page_size).min(matches.len());
    &matches[..end]
}

/// How many items lie beyond page `page`.
pub fn remaining<T>(matches: &[T], page: usize, page_size: usize) -> usize {
    matches.len().saturating_sub(page.saturating_mul(page_size))
}

/// Move to the next page. Advancing past the end is allowed and simply
/// produces empty pages.
pub fn advance(page: usize) -> usize {
    page.saturating_add(1)
}

/// Number of non-empty pages for `len` items.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

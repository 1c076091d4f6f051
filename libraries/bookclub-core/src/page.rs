//! Pagination arithmetic for client-side paging.

/// Number of pages needed to hold `total_elements` at `page_size` per page.
pub fn total_pages(total_elements: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_elements.div_ceil(u64::from(page_size)) as u32
}

/// The 1-based `page` window of `items`, clamped to the slice bounds.
pub fn page_window<T>(items: &[T], page: u32, page_size: u32) -> &[T] {
    let start = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
    let end = start.saturating_add(page_size as usize);
    let start = start.min(items.len());
    let end = end.min(items.len());
    &items[start..end]
}

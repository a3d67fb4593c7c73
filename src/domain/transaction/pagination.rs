//! Pagination math for the transaction table.

use crate::error::ValidationError;

/// Most page buttons shown at once.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// `ceil(total / page_size)`. Zero when there is nothing to page through.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(page_size as u64);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Rejects a page outside `1..=max(1, total_pages)`.
///
/// An empty wallet still has a first page (rendered as the empty state), so
/// page 1 is always requestable.
pub fn check_page(page: u32, total_pages: u32) -> Result<u32, ValidationError> {
    let last = total_pages.max(1);
    if page < 1 || page > last {
        return Err(ValidationError::PageOutOfRange { page, total_pages });
    }
    Ok(page)
}

/// Page buttons to render around `current`.
///
/// Up to five pages are shown in full. Beyond that the window sticks to the
/// first five while `current <= 3`, to the last five while
/// `current >= total_pages - 2`, and is centred on `current` otherwise.
pub fn visible_pages(current: u32, total_pages: u32) -> Vec<u32> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).collect();
    }

    let start = if current <= 3 {
        1
    } else if current >= total_pages - 2 {
        total_pages - (MAX_VISIBLE_PAGES - 1)
    } else {
        current - 2
    };

    (start..start + MAX_VISIBLE_PAGES).collect()
}

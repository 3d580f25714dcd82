use serde::Serialize;

use crate::constants::PAGE_WINDOW;

/// One clickable control in the pagination row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PageControl {
    First { enabled: bool },
    Previous { enabled: bool },
    Number { page: usize, current: bool },
    Next { enabled: bool },
    Last { enabled: bool },
}

/// Computes the pagination controls for the given position.
///
/// A single page produces no controls at all (the row is hidden).
/// The numeric window holds at most `PAGE_WINDOW` pages centered on the
/// current one, shifted left near the end so it never runs past
/// `total_pages` and never starts below 1.
pub fn plan(page: usize, total_pages: usize) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let page = page.clamp(1, total_pages);

    let mut start = page.saturating_sub(PAGE_WINDOW / 2).max(1);
    let mut end = start + PAGE_WINDOW - 1;
    if end > total_pages {
        end = total_pages;
        start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
    }

    let mut controls = Vec::with_capacity(end - start + 5);
    controls.push(PageControl::First { enabled: page > 1 });
    controls.push(PageControl::Previous { enabled: page > 1 });
    for number in start..=end {
        controls.push(PageControl::Number {
            page: number,
            current: number == page,
        });
    }
    controls.push(PageControl::Next {
        enabled: page < total_pages,
    });
    controls.push(PageControl::Last {
        enabled: page < total_pages,
    });
    controls
}

/// One slot in a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Gap,
}

const WINDOW: u32 = 2;

/// Page numbers to show around `current`: always the first and last page,
/// everything within two pages of `current`, and a gap marker between
/// non-adjacent runs. Empty when there is at most one page.
pub fn visible_pages(current: u32, total: u32) -> Vec<PageItem> {
    if total <= 1 {
        return Vec::new();
    }

    let current = current.clamp(1, total);
    let mut items = vec![PageItem::Page(1)];

    if current.saturating_sub(WINDOW) > 2 {
        items.push(PageItem::Gap);
    }

    let start = current.saturating_sub(WINDOW).max(2);
    let end = current.saturating_add(WINDOW).min(total - 1);
    items.extend((start..=end).map(PageItem::Page));

    if current.saturating_add(WINDOW) < total - 1 {
        items.push(PageItem::Gap);
    }
    items.push(PageItem::Page(total));

    items
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Gap, Page};
    use super::*;

    #[test]
    fn nothing_for_single_page() {
        assert!(visible_pages(1, 0).is_empty());
        assert!(visible_pages(1, 1).is_empty());
    }

    #[test]
    fn short_ranges_have_no_gaps() {
        assert_eq!(visible_pages(1, 2), vec![Page(1), Page(2)]);
        assert_eq!(
            visible_pages(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn gaps_on_both_sides_in_the_middle() {
        assert_eq!(
            visible_pages(10, 20),
            vec![Page(1), Gap, Page(8), Page(9), Page(10), Page(11), Page(12), Gap, Page(20)]
        );
    }

    #[test]
    fn edges_only_gap_towards_the_far_side() {
        assert_eq!(
            visible_pages(1, 10),
            vec![Page(1), Page(2), Page(3), Gap, Page(10)]
        );
        assert_eq!(
            visible_pages(10, 10),
            vec![Page(1), Gap, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn window_near_u32_max_does_not_overflow() {
        let total = u32::MAX;
        assert_eq!(
            visible_pages(total - 1, total),
            vec![Page(1), Gap, Page(total - 3), Page(total - 2), Page(total - 1), Page(total)]
        );
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(visible_pages(99, 3), vec![Page(1), Page(2), Page(3)]);
    }
}

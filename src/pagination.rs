use serde::Serialize;

/// Number of page links shown at once.
const WINDOW: usize = 5;

/// Page numbers around `current_page`, at most [`WINDOW`] wide.
///
/// The window starts two pages before the current one (never below 1) and
/// is cut at `total_pages`.
fn visible_pages(total_pages: usize, current_page: usize) -> Vec<usize> {
    if total_pages == 0 {
        return vec![];
    }

    let start = current_page.saturating_sub(2).max(1);
    let end = total_pages.min(start.saturating_add(WINDOW - 1));

    (start..=end).collect()
}

/// Pagination control state rendered under every list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub pages: Vec<usize>,
    pub page: usize,
    pub total_pages: usize,
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

impl Pager {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let page = current_page.max(1);

        Self {
            pages: visible_pages(total_pages, page),
            page,
            total_pages,
            previous: (page > 1).then(|| page - 1),
            next: (page < total_pages).then(|| page + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pages_when_total_is_zero() {
        assert!(visible_pages(0, 1).is_empty());
    }

    #[test]
    fn window_starts_at_first_page() {
        assert_eq!(visible_pages(10, 1), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(10, 3), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_follows_current_page() {
        assert_eq!(visible_pages(10, 6), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn window_is_cut_at_last_page() {
        assert_eq!(visible_pages(10, 10), vec![8, 9, 10]);
        assert_eq!(visible_pages(3, 2), vec![1, 2, 3]);
    }

    #[test]
    fn pager_disables_edges() {
        let first = Pager::new(1, 4);
        assert_eq!(first.previous, None);
        assert_eq!(first.next, Some(2));

        let last = Pager::new(4, 4);
        assert_eq!(last.previous, Some(3));
        assert_eq!(last.next, None);

        let single = Pager::new(0, 1);
        assert_eq!(single.page, 1);
        assert_eq!(single.pages, vec![1]);
        assert_eq!(single.next, None);
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        assert!(visible_pages(3, usize::MAX).is_empty());

        let pager = Pager::new(usize::MAX, 3);
        assert_eq!(pager.page, usize::MAX);
        assert_eq!(pager.previous, Some(usize::MAX - 1));
        assert_eq!(pager.next, None);
    }
}

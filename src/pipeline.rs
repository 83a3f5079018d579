use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::error::SearchError;
use crate::models::NormalizedResult;

/// How many page links are shown on each side of the current page.
pub const PAGE_WINDOW_RADIUS: usize = 2;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    /// Keep the order the endpoint ranked the results in
    #[default]
    Relevance,
    /// Case-insensitive by title, ties keep their original order
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Result<Self, SearchError> {
        if page == 0 || page_size == 0 {
            return Err(SearchError::InvalidPage { page, page_size });
        }
        Ok(Self { page, page_size })
    }

    /// Like [`PageRequest::new`], with zeros bumped up to 1.
    pub fn clamped(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// One rendered page plus the numbers needed for the results header.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub items: Vec<&'a NormalizedResult>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    /// 1-based index of the first item shown, 0 for an empty page
    pub first_index: usize,
    /// 1-based index of the last item shown, 0 for an empty page
    pub last_index: usize,
}

impl Page<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Gap,
}

pub fn sort(results: &[NormalizedResult], key: SortKey) -> Vec<&NormalizedResult> {
    let mut ordered: Vec<&NormalizedResult> = results.iter().collect();
    if key == SortKey::Title {
        // stable: equal titles keep their arrival order
        ordered.sort_by_cached_key(|result| result.title.to_lowercase());
    }
    ordered
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Sorts, then slices out the requested page.
///
/// Pages past the end come back empty rather than clamped; keeping the page
/// in range is up to the caller.
pub fn paginate(results: &[NormalizedResult], key: SortKey, request: PageRequest) -> Page<'_> {
    let total_count = results.len();
    let start = (request.page - 1).saturating_mul(request.page_size);

    let items: Vec<&NormalizedResult> = if start >= total_count {
        Vec::new()
    } else {
        sort(results, key)
            .into_iter()
            .skip(start)
            .take(request.page_size)
            .collect()
    };

    let (first_index, last_index) = if items.is_empty() {
        (0, 0)
    } else {
        (start + 1, start + items.len())
    };

    Page {
        items,
        current_page: request.page,
        total_pages: total_pages(total_count, request.page_size),
        total_count,
        first_index,
        last_index,
    }
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Page links around `current`: first and last page are always shown,
/// skipped stretches collapse into a gap.
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages == 0 {
        return Vec::new();
    }

    let start = current.saturating_sub(PAGE_WINDOW_RADIUS).max(1);
    let end = current.saturating_add(PAGE_WINDOW_RADIUS).min(total_pages);
    let mut links = Vec::new();

    if start > 1 {
        links.push(PageLink::Page(1));
        if start > 2 {
            links.push(PageLink::Gap);
        }
    }

    links.extend((start..=end).map(PageLink::Page));

    if end < total_pages {
        if end + 1 < total_pages {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page(total_pages));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(titles: &[&str]) -> Vec<NormalizedResult> {
        titles
            .iter()
            .map(|title| NormalizedResult {
                title: title.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn numbered(count: usize) -> Vec<NormalizedResult> {
        (1..=count)
            .map(|n| NormalizedResult {
                id: n.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn ids(page: &Page) -> Vec<String> {
        page.items.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_pages_of_85_by_40() {
        let all = numbered(85);

        let first = paginate(&all, SortKey::Relevance, PageRequest::new(1, 40).unwrap());
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_count, 85);
        assert_eq!(first.items.len(), 40);
        assert_eq!((first.first_index, first.last_index), (1, 40));
        assert_eq!(ids(&first).first().map(String::as_str), Some("1"));

        let last = paginate(&all, SortKey::Relevance, PageRequest::new(3, 40).unwrap());
        assert_eq!(ids(&last), vec!["81", "82", "83", "84", "85"]);
        assert_eq!((last.first_index, last.last_index), (81, 85));
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let all = numbered(5);
        let page = paginate(&all, SortKey::Relevance, PageRequest::new(4, 2).unwrap());
        assert!(page.is_empty());
        assert_eq!(page.current_page, 4);
        assert_eq!(page.total_pages, 3);
        assert_eq!((page.first_index, page.last_index), (0, 0));
    }

    #[test]
    fn test_no_results_no_pages() {
        let page = paginate(&[], SortKey::Title, PageRequest::new(1, 40).unwrap());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_count, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_invalid_page_request() {
        assert!(matches!(
            PageRequest::new(0, 10),
            Err(SearchError::InvalidPage { page: 0, .. })
        ));
        assert!(PageRequest::new(1, 0).is_err());
    }

    #[test]
    fn test_title_sort_is_case_insensitive() {
        let all = results(&["banana", "Apple", "cherry"]);
        let page = paginate(&all, SortKey::Title, PageRequest::new(1, 10).unwrap());
        let titles: Vec<&str> = page.items.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_title_sort_is_stable() {
        let mut all = results(&["b", "A", "a", "B"]);
        for (n, result) in all.iter_mut().enumerate() {
            result.id = n.to_string();
        }
        let sorted: Vec<&str> = sort(&all, SortKey::Title)
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(sorted, vec!["1", "2", "0", "3"]);
    }

    #[test]
    fn test_relevance_keeps_arrival_order() {
        let all = results(&["c", "a", "b"]);
        let titles: Vec<&str> = sort(&all, SortKey::Relevance)
            .into_iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn test_page_window_middle() {
        use PageLink::{Gap, Page};
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Gap, Page(3), Page(4), Page(5), Page(6), Page(7), Gap, Page(10)]
        );
    }

    #[test]
    fn test_page_window_edges() {
        use PageLink::{Gap, Page};
        assert_eq!(page_window(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_window(1, 6), vec![Page(1), Page(2), Page(3), Gap, Page(6)]);
        assert_eq!(page_window(4, 6), vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]);
        assert!(page_window(1, 0).is_empty());
    }
}

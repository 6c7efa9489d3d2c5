use crate::entities::{Page, PageRequest};

/// Slices an already fully fetched sequence. A page past the end yields an
/// empty slice; an empty sequence has zero pages.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total_count = items.len();
    let total_pages = total_count.div_ceil(request.limit());
    let offset = (request.page() - 1).saturating_mul(request.limit());
    let items = items
        .into_iter()
        .skip(offset)
        .take(request.limit())
        .collect();
    Page {
        items,
        total_count,
        total_pages,
        current_page: request.page(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn first_page_of_25_items() {
        let page = paginate(numbers(25), PageRequest::new(10, 1).unwrap());
        assert_eq!(page.items, numbers(10));
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 1);
        assert!(page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn last_page_is_partial() {
        let page = paginate(numbers(25), PageRequest::new(10, 3).unwrap());
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn page_beyond_end_is_empty() {
        let page = paginate(numbers(25), PageRequest::new(10, 4).unwrap());
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 4);
    }

    #[test]
    fn empty_input_has_no_pages() {
        let page = paginate(Vec::<usize>::new(), PageRequest::new(10, 1).unwrap());
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        let page = paginate(numbers(20), PageRequest::new(10, 2).unwrap());
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 10);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let page = paginate(numbers(5), PageRequest::new(usize::MAX, usize::MAX).unwrap());
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn zero_limit_or_page_is_rejected() {
        assert!(PageRequest::new(0, 1).is_err());
        assert!(PageRequest::new(10, 0).is_err());
    }

    #[test]
    fn next_request_keeps_limit() {
        let next = PageRequest::new(5, 2).unwrap().next();
        assert_eq!((next.limit(), next.page()), (5, 3));
    }
}

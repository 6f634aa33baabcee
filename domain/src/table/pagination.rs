use std::ops::Range;

/// Number of pages for `len` rows, never less than one
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Clamp a 1-indexed page into `[1, total_pages]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Row range of a 1-indexed page, cut at `len`
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(1, 10, 25), 0..10);
        assert_eq!(page_range(3, 10, 25), 20..25);
        assert_eq!(page_range(4, 10, 25), 25..25);
        assert_eq!(page_range(1, 10, 0), 0..0);
    }

    #[test]
    fn test_pages_cover_every_row_once() {
        for len in [0usize, 1, 9, 10, 11, 37, 100] {
            let pages = total_pages(len, 10);
            let sizes: Vec<usize> = (1..=pages).map(|page| page_range(page, 10, len).len()).collect();

            assert_eq!(sizes.iter().sum::<usize>(), len);
            if len > 0 {
                assert!(sizes[..pages - 1].iter().all(|&size| size == 10));
                assert_eq!(sizes[pages - 1], len - (pages - 1) * 10);
            }
        }
    }
}

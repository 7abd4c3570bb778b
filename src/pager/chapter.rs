//! Chapter arithmetic
//!
//! Page numbers are 1-based; chapter `c` covers pages
//! `(c - 1) * 10 + 1 ..= c * 10`.

/// Pages per chapter
pub const CHAPTER_SIZE: u32 = 10;

/// Page number of the first page in `chapter`
pub fn first_page(chapter: u32) -> u32 {
    chapter.saturating_sub(1) * CHAPTER_SIZE + 1
}

/// Position of the last page of `chapter` inside its window, 1 to 10
pub fn last_page_in_window(total_pages: u32, chapter: u32) -> u32 {
    let last_page_idx = total_pages.min(CHAPTER_SIZE * chapter);
    match last_page_idx % CHAPTER_SIZE {
        0 => CHAPTER_SIZE,
        rest => rest,
    }
}

/// Page numbers `1..=last_page` shifted into `chapter`
pub fn window(chapter: u32, last_page: u32) -> Vec<u32> {
    let offset = chapter.saturating_sub(1) * CHAPTER_SIZE;
    (1 + offset..=last_page + offset).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        assert_eq!(first_page(1), 1);
        assert_eq!(first_page(2), 11);
        assert_eq!(first_page(5), 41);
    }

    #[test]
    fn test_last_page_in_window() {
        assert_eq!(last_page_in_window(15, 2), 5);
        assert_eq!(last_page_in_window(20, 2), 10);
        assert_eq!(last_page_in_window(25, 2), 10);
        assert_eq!(last_page_in_window(31, 4), 1);
    }

    #[test]
    fn test_window() {
        assert_eq!(window(1, 10), (1..=10u32).collect::<Vec<_>>());
        assert_eq!(window(2, 5), vec![11, 12, 13, 14, 15]);
        assert_eq!(window(1, 0), Vec::<u32>::new());
    }
}

//! Property-based tests for feed pagination arithmetic

use proptest::prelude::*;
use quillfeed::backend::feed::handlers::types::{page_number, page_offset, POSTS_PER_PAGE};

proptest! {
    #[test]
    fn test_positive_pages_parse_exactly(page in 1i64..1_000_000) {
        prop_assert_eq!(page_number(Some(&page.to_string())), page);
        prop_assert_eq!(page_number(Some(&format!("  {} ", page))), page);
    }

    #[test]
    fn test_non_positive_pages_fall_back_to_first(page in i64::MIN..1) {
        prop_assert_eq!(page_number(Some(&page.to_string())), 1);
    }

    #[test]
    fn test_non_numeric_pages_fall_back_to_first(raw in "[a-zA-Z_ ]*") {
        prop_assert_eq!(page_number(Some(&raw)), 1);
    }

    #[test]
    fn test_offset_skips_whole_pages(page in 1i64..1_000_000) {
        prop_assert_eq!(page_offset(page, POSTS_PER_PAGE), (page - 1) * POSTS_PER_PAGE);
    }

    #[test]
    fn test_offset_is_never_negative(page in any::<i64>(), per_page in 0i64..100) {
        prop_assert!(page_offset(page, per_page) >= 0);
    }

    #[test]
    fn test_pages_tile_the_feed(total in 0i64..500) {
        // Walking pages from 1 visits every post exactly once
        let mut seen = 0;
        let mut page = 1;
        loop {
            let skip = page_offset(page, POSTS_PER_PAGE);
            let on_page = (total - skip).clamp(0, POSTS_PER_PAGE);
            if on_page == 0 {
                break;
            }
            seen += on_page;
            page += 1;
        }
        prop_assert_eq!(seen, total);
    }
}

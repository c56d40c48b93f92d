//! Repeating segments bind lists.

use rewrite_tests::prelude::*;

mod one_or_more {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("one_or_more")
            .rule("/tags/:t+ | /tags/:t+")
            .rewrites("https://example.com/tags/a/b/c", "https://example.com/tags/a/b/c")
            .rewrites("https://example.com/tags/a", "https://example.com/tags/a")
            .rejects("https://example.com/tags")
    }

    #[test]
    fn test_list_round_trips() {
        scenario().run().unwrap();
    }
}

mod zero_or_more {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("zero_or_more")
            .rule("/files/:rest* | /storage/:rest*")
            .rewrites("https://example.com/files", "https://example.com/storage")
            .rewrites(
                "https://example.com/files/a/b.txt",
                "https://example.com/storage/a/b.txt",
            )
    }

    #[test]
    fn test_zero_or_more() {
        scenario().run().unwrap();
    }
}

mod shape_mismatch {
    use super::*;

    #[test]
    fn test_list_into_scalar_segment() {
        Scenario::new("list_into_scalar")
            .rule("/tags/:t+ | /tag/:t")
            .fails("https://example.com/tags/a/b", "Variable :t is not an array")
            .run()
            .unwrap();
    }

    #[test]
    fn test_scalar_into_repeating_segment() {
        Scenario::new("scalar_into_list")
            .rule("/tag/:t | /tags/:t+")
            .fails("https://example.com/tag/a", "Value 'a' of :t is not an array")
            .run()
            .unwrap();
    }

    #[test]
    fn test_wildcard_pattern_with_slashes_is_a_list() {
        Scenario::new("wildcard")
            .rule("/static/:path(.*) | /assets/:path+")
            .rewrites(
                "https://example.com/static/css/site.css",
                "https://example.com/assets/css/site.css",
            )
            .run()
            .unwrap();
    }
}

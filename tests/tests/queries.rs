//! Query constraints on the source and queries on the destination.

use rewrite_tests::prelude::*;

mod constrained_variable {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("constrained_variable")
            .rule("/x ??from=:f(foo|bar) | /y/:f")
            .rewrites("https://example.com/x?from=foo", "https://example.com/y/foo")
            .rewrites("https://example.com/x?from=bar", "https://example.com/y/bar")
            .rejects("https://example.com/x?from=baz")
            .rejects("https://example.com/x")
    }

    #[test]
    fn test_query_pattern() {
        scenario().run().unwrap();
    }
}

mod literal_query {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("literal_query")
            .rule("/app ??theme=dark | /dark")
            .rewrites("https://example.com/app?theme=dark", "https://example.com/dark")
            .rewrites(
                "https://example.com/app?lang=en&theme=dark",
                "https://example.com/dark",
            )
            .rejects("https://example.com/app?theme=Dark")
            .rejects("https://example.com/app?theme=light")
            .rejects("https://example.com/app")
    }

    #[test]
    fn test_literal_query_must_match_exactly() {
        scenario().run().unwrap();
    }
}

mod unconstrained_variable {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("unconstrained_variable")
            .rule("/search ??q=:term | /find/:term")
            .rewrites("https://example.com/search?q=rust", "https://example.com/find/rust")
            .rewrites("https://example.com/search?q=a&q=b", "https://example.com/find/a")
            .rejects("https://example.com/search")
            .rejects("https://example.com/search?q=")
    }

    #[test]
    fn test_query_variable_binds_first_value() {
        scenario().run().unwrap();
    }
}

mod destination_query {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("destination_query")
            .rule("/tags/:t+ | /search ??tag=:t ??page=1")
            .step("https://example.com/tags/a/b", |a| {
                a.path("/search").query("tag=a&tag=b&page=1")
            })
            .step("https://example.com/tags/x", |a| a.query("tag=x&page=1"))
    }

    #[test]
    fn test_destination_query_is_rendered() {
        scenario().run().unwrap();
    }
}

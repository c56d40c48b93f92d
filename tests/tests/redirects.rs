//! Plain redirects: path variables copied into a new path.

use rewrite_tests::prelude::*;

mod profile {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("profile")
            .rule("/users/:id | /profile/:id")
            .rewrites("https://example.com/users/42", "https://example.com/profile/42")
            .rewrites("http://localhost:3000/users/abc", "http://localhost:3000/profile/abc")
            .rejects("https://example.com/users")
            .rejects("https://example.com/users/42/edit")
            .rejects("https://example.com/posts/42")
    }

    #[test]
    fn test_profile_redirect() {
        scenario().run().unwrap();
    }
}

mod reorder {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("reorder")
            .rule("/:year/:month/:slug | /posts/:slug/:year.:month")
            .rewrites(
                "https://blog.test/2024/05/hello",
                "https://blog.test/posts/hello/2024.05",
            )
            .step("https://blog.test/2024/05/hello?utm=x#frag", |a| {
                a.url("https://blog.test/posts/hello/2024.05")
            })
    }

    #[test]
    fn test_variables_can_be_reordered() {
        scenario().run().unwrap();
    }
}

mod origin_is_kept {
    use super::*;

    #[test]
    fn test_pipeline_value_with_leading_slash() {
        Scenario::new("pipeline_value_with_leading_slash")
            .rule("/go | :y <- \"/other.test\" | /:y")
            .rewrites("https://example.com/go", "https://example.com//other.test")
            .run()
            .unwrap();
    }

    #[test]
    fn test_empty_capture_before_a_segment() {
        Scenario::new("empty_capture_before_a_segment")
            .rule("/p/:a(.*)/:b | /:a/:b")
            .rewrites("https://example.com/p//other.test", "https://example.com//other.test")
            .run()
            .unwrap();
    }
}

mod complex_segments {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("complex_segments")
            .rule("/img/thumb-:name.png | /images/:name/thumb.png")
            .rewrites(
                "https://cdn.test/img/thumb-cat.png",
                "https://cdn.test/images/cat/thumb.png",
            )
            .rejects("https://cdn.test/img/cat.png")
    }

    #[test]
    fn test_text_around_a_variable() {
        scenario().run().unwrap();
    }
}

mod optional_segment {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("optional_segment")
            .rule("/docs/:page? | /manual/:page?")
            .rewrites("https://d.test/docs", "https://d.test/manual")
            .rewrites("https://d.test/docs/intro", "https://d.test/manual/intro")
            .rejects("https://d.test/docs/a/b")
    }

    #[test]
    fn test_optional_segment() {
        scenario().run().unwrap();
    }
}

mod root {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("root")
            .rule("  / | /home  ")
            .rewrites("https://example.com/", "https://example.com/home")
            .rejects("https://example.com/other")
    }

    #[test]
    fn test_root_with_surrounding_whitespace() {
        scenario().run().unwrap();
    }
}

mod escaped_literals {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("escaped_literals")
            .rule("/feed.xml | /rss")
            .options(CompileOptions::new().escape_literals(true))
            .rewrites("https://example.com/feed.xml", "https://example.com/rss")
            .rejects("https://example.com/feedXxml")
    }

    #[test]
    fn test_escape_literals_option() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_unescaped_dot_matches_any_character() {
        Scenario::new("unescaped")
            .rule("/feed.xml | /rss")
            .rewrites("https://example.com/feedXxml", "https://example.com/rss")
            .run()
            .unwrap();
    }
}

use crate::post::Post;

/// The active tag set and free-text query, plus the pending tag field.
/// Tags are stored lower-cased in insertion order; the query is stored
/// verbatim and normalized only at match time.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    tags: Vec<String>,
    tag_input: String,
    query: String,
}

impl FilterState {
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_tag_input(&mut self, text: &str) {
        self.tag_input = text.to_string();
    }

    /// Commit the pending tag field. No-op when the field is empty or its
    /// lower-cased form is already in the set; otherwise the lower-cased tag
    /// is appended and the field cleared.
    pub fn add_tag(&mut self) {
        if self.tag_input.is_empty() {
            return;
        }
        let tag = self.tag_input.to_lowercase();
        if self.tags.contains(&tag) {
            return;
        }
        self.tags.push(tag);
        self.tag_input.clear();
    }

    /// Remove an exact chip; absent tags are a no-op.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
    }

    /// A post passes iff every filter tag is present (case-insensitive) in its
    /// tag list, and the query is a case-insensitive substring of its title,
    /// description or author username. Empty tag set and empty query each
    /// pass everything.
    pub fn matches(&self, post: &Post) -> bool {
        let tags_pass = self
            .tags
            .iter()
            .all(|tag| post.tags.iter().any(|t| &t.to_lowercase() == tag));
        if !tags_pass {
            return false;
        }

        let needle = self.query.to_lowercase();
        post.title.to_lowercase().contains(&needle)
            || post.description.to_lowercase().contains(&needle)
            || post.author.username.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::PostAuthor;

    fn post(title: &str, description: &str, username: &str, tags: &[&str]) -> Post {
        Post {
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author: PostAuthor {
                username: username.to_string(),
            },
            created_at: None,
        }
    }

    #[test]
    fn add_tag_lowercases_and_clears_input() {
        let mut filter = FilterState::default();
        filter.set_tag_input("Rust");
        filter.add_tag();
        assert_eq!(filter.tags(), ["rust"]);
        assert_eq!(filter.tag_input(), "");
    }

    #[test]
    fn add_tag_is_idempotent_case_insensitively() {
        let mut filter = FilterState::default();
        filter.set_tag_input("go");
        filter.add_tag();
        filter.set_tag_input("GO");
        filter.add_tag();
        assert_eq!(filter.tags(), ["go"]);
        // the duplicate commit leaves the pending field untouched
        assert_eq!(filter.tag_input(), "GO");
    }

    #[test]
    fn add_tag_with_empty_input_is_a_noop() {
        let mut filter = FilterState::default();
        filter.add_tag();
        assert!(filter.tags().is_empty());
    }

    #[test]
    fn tags_keep_insertion_order() {
        let mut filter = FilterState::default();
        for tag in ["zeta", "alpha", "mid"] {
            filter.set_tag_input(tag);
            filter.add_tag();
        }
        assert_eq!(filter.tags(), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn remove_tag_requires_exact_match() {
        let mut filter = FilterState::default();
        filter.set_tag_input("go");
        filter.add_tag();
        filter.remove_tag("rust");
        assert_eq!(filter.tags(), ["go"]);
        filter.remove_tag("go");
        assert!(filter.tags().is_empty());
    }

    #[test]
    fn tags_use_and_semantics() {
        let a = post("A", "", "u", &["go"]);
        let b = post("B", "", "u", &["rust"]);
        let c = post("C", "", "u", &["go", "rust"]);

        let mut filter = FilterState::default();
        filter.set_tag_input("go");
        filter.add_tag();
        assert!(filter.matches(&a));
        assert!(!filter.matches(&b));
        assert!(filter.matches(&c));

        filter.set_tag_input("rust");
        filter.add_tag();
        assert!(!filter.matches(&a));
        assert!(!filter.matches(&b));
        assert!(filter.matches(&c));
    }

    #[test]
    fn tag_match_ignores_post_tag_case() {
        let post = post("A", "", "u", &["Rust"]);
        let mut filter = FilterState::default();
        filter.set_tag_input("rust");
        filter.add_tag();
        assert!(filter.matches(&post));
    }

    #[test]
    fn query_matches_title_description_or_username() {
        let p = post("Intro to borrowing", "a gentle guide", "alice123", &[]);

        let mut filter = FilterState::default();
        filter.set_query("BORROW");
        assert!(filter.matches(&p));
        filter.set_query("gentle");
        assert!(filter.matches(&p));
        filter.set_query("ALICE");
        assert!(filter.matches(&p));
        filter.set_query("bob");
        assert!(!filter.matches(&p));
    }

    #[test]
    fn empty_filter_passes_everything() {
        let p = post("T", "D", "u", &[]);
        assert!(FilterState::default().matches(&p));
    }
}

use quill_core::domain::Post;
use quill_core::ports::PreSaveHook;

/// Fills an empty post slug from its title. A slug set by hand is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostSlugHook;

impl PreSaveHook<Post> for PostSlugHook {
    fn before_save(&self, post: &mut Post) {
        if post.slug.is_empty() && !post.title.trim().is_empty() {
            post.slug = slug::slugify(&post.title);
            tracing::debug!(post_id = %post.id, slug = %post.slug, "Generated post slug");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn post(title: &str) -> Post {
        Post::new(
            Uuid::new_v4(),
            title.to_string(),
            String::new(),
            String::new(),
            chrono::Utc::now(),
        )
    }

    #[test]
    fn test_generates_lowercase_slug() {
        let mut p = post("REST API Design Best Practices");
        PostSlugHook.before_save(&mut p);
        assert_eq!(p.slug, "rest-api-design-best-practices");
    }

    #[test]
    fn test_keeps_existing_slug() {
        let mut p = post("Clean Code Principles");
        p.slug = "clean-code".to_string();
        PostSlugHook.before_save(&mut p);
        assert_eq!(p.slug, "clean-code");
    }

    #[test]
    fn test_blank_title_leaves_slug_empty() {
        let mut p = post("   ");
        PostSlugHook.before_save(&mut p);
        assert!(p.slug.is_empty());
    }
}

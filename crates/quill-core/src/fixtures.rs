//! Deterministic demo data.
//!
//! Every generator keeps its counters in its own fields; two generators never
//! share state, and a fresh generator always produces the same sequence.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::{Comment, CommentStatus, Post, PostStatus, Subscriber, SubscriberSource};

const POST_TITLES: [&str; 16] = [
    "Getting Started with Rust",
    "Database Performance Optimization Guide",
    "Modern CSS Techniques You Should Know",
    "REST API Design Best Practices",
    "Introduction to Docker Containers",
    "Securing Your Web Application",
    "Test-Driven Development Explained",
    "Working with an ORM",
    "JavaScript Frameworks Comparison",
    "CI/CD Pipeline Setup Tutorial",
    "Microservices Architecture Overview",
    "Clean Code Principles",
    "Git Workflow Strategies",
    "Performance Monitoring Tools",
    "Building Real-Time Applications",
    "Cloud Deployment Strategies",
];

// Weighted towards published, like a live blog.
const POST_STATUSES: [PostStatus; 6] = [
    PostStatus::Draft,
    PostStatus::Published,
    PostStatus::Published,
    PostStatus::Published,
    PostStatus::Scheduled,
    PostStatus::Archived,
];

const COMMENT_TEMPLATES: [&str; 8] = [
    "Great article! I learned a lot from this.",
    "Thanks for sharing this. Very helpful!",
    "I have a question about the third section. Could you explain more?",
    "This is exactly what I was looking for. Bookmarked!",
    "Interesting perspective. I'd love to see a follow-up post.",
    "I disagree with some points, but overall a good read.",
    "Could you provide more code examples?",
    "This saved me hours of work. Thank you!",
];

// Most comments end up approved.
const COMMENT_STATUSES: [CommentStatus; 7] = [
    CommentStatus::Approved,
    CommentStatus::Pending,
    CommentStatus::Approved,
    CommentStatus::Spam,
    CommentStatus::Approved,
    CommentStatus::Rejected,
    CommentStatus::Approved,
];

/// Post generator. Titles cycle through a fixed list and get a running number.
#[derive(Debug, Clone, Default)]
pub struct PostFixtures {
    title_index: usize,
}

impl PostFixtures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart the sequence from the first title.
    pub fn reset(&mut self) {
        self.title_index = 0;
    }

    pub fn next(&mut self, author_id: Uuid, now: DateTime<Utc>) -> Post {
        let index = self.title_index;
        self.title_index += 1;

        let title = format!("{} #{}", POST_TITLES[index % POST_TITLES.len()], index + 1);
        let status = POST_STATUSES[index % POST_STATUSES.len()];
        let days = (index as i64 * 11) % 700;

        let mut post = Post::new(
            author_id,
            title,
            format!("A short tour of topic number {}.", index + 1),
            format!("<p>Demo content for post {}.</p>", index + 1),
            now - Duration::days(days + 1),
        );
        post.status = status;
        post.is_featured = index % 7 == 0;

        match status {
            PostStatus::Published => {
                post.published_at = Some(now - Duration::days(days));
                post.view_count = ((index * 1_373) % 10_000) as i32;
            }
            PostStatus::Scheduled => {
                post.scheduled_at = Some(now + Duration::days((index % 30) as i64 + 1));
            }
            PostStatus::Draft | PostStatus::Archived => {}
        }

        post
    }
}

/// Comment generator.
#[derive(Debug, Clone, Default)]
pub struct CommentFixtures {
    index: usize,
}

impl CommentFixtures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, post_id: Uuid, author_id: Uuid, now: DateTime<Utc>) -> Comment {
        let index = self.index;
        self.index += 1;

        let mut comment = Comment::new(
            post_id,
            author_id,
            COMMENT_TEMPLATES[index % COMMENT_TEMPLATES.len()].to_string(),
            now - Duration::hours((index as i64 * 17) % 8_760),
        );
        comment.status = COMMENT_STATUSES[index % COMMENT_STATUSES.len()];
        comment
    }
}

/// Subscriber generator. Roughly two in three are confirmed, one in ten has
/// left.
#[derive(Debug, Clone, Default)]
pub struct SubscriberFixtures {
    index: usize,
}

impl SubscriberFixtures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> Subscriber {
        let index = self.index;
        self.index += 1;

        let source = SubscriberSource::ALL[index % SubscriberSource::ALL.len()];
        let mut subscriber = Subscriber::new(
            format!("reader{}@example.com", index + 1),
            source,
            now - Duration::days((index as i64 * 5) % 365 + 1),
        );
        subscriber.locale = String::from(if index % 4 == 3 { "es" } else { "en" });
        if index % 5 != 4 {
            subscriber.name = Some(format!("Reader {}", index + 1));
        }

        if index % 3 != 2 {
            subscriber.confirm(subscriber.subscribed_at + Duration::hours((index % 48) as i64 + 1));
        }
        if index % 10 == 9 {
            subscriber.unsubscribe(now - Duration::days((index % 90) as i64));
        }

        subscriber
    }
}

/// A consistent demo data set. Comments are only attached to published posts.
#[derive(Debug, Clone, Default)]
pub struct DemoData {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub subscribers: Vec<Subscriber>,
}

impl DemoData {
    pub fn generate(
        authors: &[Uuid],
        posts: usize,
        comments_per_post: usize,
        subscribers: usize,
        now: DateTime<Utc>,
    ) -> Self {
        let mut data = DemoData::default();
        if authors.is_empty() {
            return data;
        }

        let mut post_gen = PostFixtures::new();
        let mut comment_gen = CommentFixtures::new();
        let mut subscriber_gen = SubscriberFixtures::new();

        for i in 0..posts {
            let post = post_gen.next(authors[i % authors.len()], now);
            if post.is_published() {
                for j in 0..comments_per_post {
                    let author = authors[(i + j + 1) % authors.len()];
                    data.comments.push(comment_gen.next(post.id, author, now));
                }
            }
            data.posts.push(post);
        }

        data.subscribers = (0..subscribers).map(|_| subscriber_gen.next(now)).collect();
        data
    }
}

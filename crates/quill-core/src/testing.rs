//! Test doubles for the repository ports.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, CommentStatus, Entity, Post, PostStatus, Subscriber};
use crate::error::RepoError;
use crate::ports::{BaseRepository, CommentRepository, PostRepository, SubscriberRepository};

/// HashMap-backed repository that counts writes and can be told to fail them.
pub struct MemoryRepo<T> {
    rows: Mutex<HashMap<Uuid, T>>,
    fail_writes: AtomicBool,
    save_calls: AtomicUsize,
    save_all_calls: AtomicUsize,
}

impl<T> Default for MemoryRepo<T> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
            save_calls: AtomicUsize::new(0),
            save_all_calls: AtomicUsize::new(0),
        }
    }
}

impl<T: Entity> MemoryRepo<T> {
    pub fn with(entities: Vec<T>) -> Self {
        let repo = Self::default();
        {
            let mut rows = repo.rows.lock().unwrap();
            for entity in entities {
                rows.insert(entity.id(), entity);
            }
        }
        repo
    }

    pub fn get(&self, id: Uuid) -> Option<T> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn save_all_calls(&self) -> usize {
        self.save_all_calls.load(Ordering::SeqCst)
    }

    fn check_writable(&self) -> Result<(), RepoError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepoError::Connection("connection reset".to_string()));
        }
        Ok(())
    }

    fn count(&self, predicate: impl Fn(&T) -> bool) -> u64 {
        self.rows
            .lock()
            .unwrap()
            .values()
            .filter(|&e| predicate(e))
            .count() as u64
    }
}

#[async_trait]
impl<T: Entity> BaseRepository<T, Uuid> for MemoryRepo<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        Ok(self.get(id))
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.check_writable()?;
        self.rows.lock().unwrap().insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn save_all(&self, entities: Vec<T>) -> Result<usize, RepoError> {
        self.save_all_calls.fetch_add(1, Ordering::SeqCst);
        self.check_writable()?;
        let mut rows = self.rows.lock().unwrap();
        let count = entities.len();
        for entity in entities {
            rows.insert(entity.id(), entity);
        }
        Ok(count)
    }
}

#[async_trait]
impl PostRepository for MemoryRepo<Post> {
    async fn count_by_status(&self, status: PostStatus) -> Result<u64, RepoError> {
        Ok(self.count(|p| p.status == status))
    }
}

#[async_trait]
impl CommentRepository for MemoryRepo<Comment> {
    async fn count_by_status(&self, status: CommentStatus) -> Result<u64, RepoError> {
        Ok(self.count(|c| c.status == status))
    }
}

#[async_trait]
impl SubscriberRepository for MemoryRepo<Subscriber> {
    async fn count_active(&self) -> Result<u64, RepoError> {
        Ok(self.count(Subscriber::is_active))
    }

    async fn count_pending(&self) -> Result<u64, RepoError> {
        Ok(self.count(|s| !s.is_confirmed && s.unsubscribed_at.is_none()))
    }

    async fn count_unconfirmed(&self) -> Result<u64, RepoError> {
        Ok(self.count(|s| !s.is_confirmed))
    }
}

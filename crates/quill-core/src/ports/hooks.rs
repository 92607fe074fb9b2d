//! Pre-save hooks run by persistence adapters before an entity is written.

/// Interceptor invoked on every save of a `T`, new or existing.
pub trait PreSaveHook<T>: Send + Sync {
    fn before_save(&self, entity: &mut T);
}

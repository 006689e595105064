//! Key-value store abstraction

use crate::Result;

/// String-to-string storage scoped to one profile.
///
/// Implementations are cheap to clone; clones share the same underlying
/// state, the way two open pages share one browser profile.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Write a batch of entries. Backends that can make the batch atomic
    /// override this; the default writes entries one by one.
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()>;

    /// Erase every entry in the profile. Clearing an empty store is a no-op.
    fn clear(&self) -> Result<()>;

    /// All keys currently stored, sorted.
    fn keys(&self) -> Result<Vec<String>>;
}

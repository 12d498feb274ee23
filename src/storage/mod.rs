use crate::{domain::BoardSnapshot, error::Result};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Storage trait for persisting board snapshots
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend with an empty default board
    async fn initialize(&self) -> Result<()>;

    /// Saves the whole board
    async fn save_snapshot(&self, snapshot: &BoardSnapshot) -> Result<()>;

    /// Loads the whole board
    async fn load_snapshot(&self) -> Result<BoardSnapshot>;

    /// Checks if a board has been stored
    async fn is_initialized(&self) -> bool;
}

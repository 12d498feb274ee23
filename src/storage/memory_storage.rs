use crate::{
    domain::BoardSnapshot,
    error::{BoardError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

/// Keeps the board snapshot in process memory
#[derive(Default)]
pub struct MemoryStorage {
    snapshot: RwLock<Option<BoardSnapshot>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn initialize(&self) -> Result<()> {
        let mut slot = self.snapshot.write().await;
        if slot.is_none() {
            *slot = Some(BoardSnapshot::with_tasks(Vec::new()));
            info!("in-memory board initialized");
        }
        Ok(())
    }

    async fn save_snapshot(&self, snapshot: &BoardSnapshot) -> Result<()> {
        *self.snapshot.write().await = Some(snapshot.clone());
        info!(tasks = snapshot.tasks.len(), "board saved in memory");
        Ok(())
    }

    async fn load_snapshot(&self) -> Result<BoardSnapshot> {
        self.snapshot
            .read()
            .await
            .clone()
            .ok_or(BoardError::BoardNotInitialized)
    }

    async fn is_initialized(&self) -> bool {
        self.snapshot.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clock::ManualClock,
        domain::{Column, TaskStore},
    };
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_memory_storage_lifecycle() {
        let storage = MemoryStorage::new();
        assert!(!storage.is_initialized().await);
        assert!(matches!(
            storage.load_snapshot().await,
            Err(BoardError::BoardNotInitialized)
        ));

        storage.initialize().await.unwrap();
        assert!(storage.is_initialized().await);
        assert!(storage.load_snapshot().await.unwrap().tasks.is_empty());
    }

    #[tokio::test]
    async fn test_memory_storage_holds_latest_save() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
        let mut store = TaskStore::with_clock(Default::default(), clock);

        store.add_task(Column::Todo, "One");
        storage.save_snapshot(&store.snapshot()).await.unwrap();
        store.add_task(Column::Todo, "Two");
        storage.save_snapshot(&store.snapshot()).await.unwrap();

        // A later initialize leaves the saved board alone
        storage.initialize().await.unwrap();

        let loaded = storage.load_snapshot().await.unwrap();
        assert_eq!(loaded.tasks.len(), 2);
        assert_eq!(loaded.tasks[0].title, "Two");
    }

    #[test]
    fn test_storage_is_object_safe() {
        let storage: Box<dyn Storage> = Box::new(MemoryStorage::new());
        drop(storage);
    }
}

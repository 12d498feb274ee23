use crate::{
    domain::BoardSnapshot,
    error::{BoardError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// File-based storage: one JSON document per board
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const BOARD_DIR: &'static str = ".taskboard";
    const BOARD_FILE: &'static str = "board.json";
    const TEMP_FILE: &'static str = "board.json.tmp";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::BOARD_DIR),
        }
    }

    fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    fn temp_file(&self) -> PathBuf {
        self.root_path.join(Self::TEMP_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        // Never clobber an existing board
        if !self.board_file().exists() {
            self.save_snapshot(&BoardSnapshot::with_tasks(Vec::new()))
                .await?;
        }

        let gitignore_path = self.root_path.join(".gitignore");
        if !gitignore_path.exists() {
            fs::write(gitignore_path, "# Interrupted writes\n*.tmp\n").await?;
        }

        info!(path = %self.root_path.display(), "board storage initialized");
        Ok(())
    }

    async fn save_snapshot(&self, snapshot: &BoardSnapshot) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = serde_json::to_string_pretty(snapshot)?;

        // Write then rename so a crash never leaves a truncated board
        fs::write(self.temp_file(), json).await?;
        fs::rename(self.temp_file(), self.board_file()).await?;

        info!(tasks = snapshot.tasks.len(), "board saved");
        Ok(())
    }

    async fn load_snapshot(&self) -> Result<BoardSnapshot> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Err(BoardError::BoardNotInitialized);
        }

        let contents = fs::read_to_string(&board_file).await?;
        let snapshot: BoardSnapshot = serde_json::from_str(&contents)?;

        info!(tasks = snapshot.tasks.len(), "board loaded");
        Ok(snapshot)
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists() && self.board_file().exists()
    }
}

use crate::{
    domain::task::Column,
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};

/// Display configuration for a board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub column: Column,
    pub title: String,
}

impl ColumnConfig {
    pub fn new(column: Column, title: impl Into<String>) -> Self {
        Self {
            column,
            title: title.into(),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<ColumnConfig>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Task Board".to_string(),
            columns: Column::ALL
                .iter()
                .map(|column| ColumnConfig::new(*column, column.label()))
                .collect(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON board configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Every column must appear exactly once
    pub fn validate(&self) -> Result<()> {
        for column in Column::ALL {
            let count = self
                .columns
                .iter()
                .filter(|c| c.column == column)
                .count();

            match count {
                1 => {}
                0 => {
                    return Err(BoardError::ConfigError(format!(
                        "column '{}' is missing",
                        column.as_str()
                    )))
                }
                _ => {
                    return Err(BoardError::ConfigError(format!(
                        "column '{}' is configured {} times",
                        column.as_str(),
                        count
                    )))
                }
            }
        }
        Ok(())
    }

    /// Gets the column configuration for a column
    pub fn get_column(&self, column: Column) -> Option<&ColumnConfig> {
        self.columns.iter().find(|c| c.column == column)
    }

    /// Configured title, or the column's built-in label
    pub fn title_for(&self, column: Column) -> &str {
        self.get_column(column)
            .map(|c| c.title.as_str())
            .unwrap_or_else(|| column.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.columns.len(), 5);
        assert_eq!(config.title_for(Column::Todo), "To Do");
    }

    #[test]
    fn test_from_json_with_custom_titles() {
        let json = r#"{
        "name": "Sprint 12",
        "columns": [
            { "column": "backlog", "title": "Icebox" },
            { "column": "todo", "title": "Ready" },
            { "column": "in-progress", "title": "Doing" },
            { "column": "review", "title": "QA" },
            { "column": "done", "title": "Shipped" }
        ]
    }"#;

        let config = BoardConfig::from_json(json).unwrap();
        assert_eq!(config.name, "Sprint 12");
        assert_eq!(config.title_for(Column::InProgress), "Doing");
        assert_eq!(config.title_for(Column::Done), "Shipped");
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let mut config = BoardConfig::default();
        config.columns.retain(|c| c.column != Column::Review);

        let err = config.validate().unwrap_err();
        assert!(matches!(err, BoardError::ConfigError(_)));
        assert!(err.to_string().contains("review"));

        // Unvalidated lookups still fall back to the label
        assert_eq!(config.title_for(Column::Review), "Review");
    }

    #[test]
    fn test_duplicate_column_is_rejected() {
        let mut config = BoardConfig::default();
        config.columns.push(ColumnConfig::new(Column::Done, "Also done"));

        assert!(matches!(
            config.validate(),
            Err(BoardError::ConfigError(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_a_serialization_error() {
        let result = BoardConfig::from_json("{ \"name\": 3 }");
        assert!(matches!(result, Err(BoardError::SerializationError(_))));
    }
}

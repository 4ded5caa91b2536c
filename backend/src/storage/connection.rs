use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonConnection manages the data directory and the attendance file path
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection rooted at the given data directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the single attendance document
    pub fn attendance_file_path(&self) -> PathBuf {
        self.base_directory.join("attendance.json")
    }

    /// Recreate the data directory if it disappeared since startup
    pub fn ensure_data_dir(&self) -> Result<()> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let nested = temp_dir.path().join("nested").join("data");

        let connection = JsonConnection::new(&nested).expect("Failed to create connection");

        assert!(nested.exists());
        assert_eq!(connection.base_directory(), nested.as_path());
    }

    #[test]
    fn test_attendance_file_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).unwrap();

        assert_eq!(
            connection.attendance_file_path(),
            temp_dir.path().join("attendance.json")
        );
    }

    #[test]
    fn test_ensure_data_dir_recreates_deleted_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        let connection = JsonConnection::new(&data_dir).unwrap();

        fs::remove_dir_all(&data_dir).unwrap();
        assert!(!data_dir.exists());

        connection.ensure_data_dir().unwrap();
        assert!(data_dir.exists());
    }
}

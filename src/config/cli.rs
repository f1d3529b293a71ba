use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.base_path.clone()
    }
}

/// Prints each output under a `#` banner instead of writing files.
#[derive(Debug, Clone, Default)]
pub struct ConsoleStorage;

impl ConsoleStorage {
    pub fn new() -> Self {
        Self
    }

    fn banner(title: &str) -> String {
        let rule = "#".repeat(80);
        format!("{}\n{}{}\n{}\n", rule, " ".repeat(30), title, rule)
    }
}

impl Storage for ConsoleStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(Self::banner(path).as_bytes())?;
        stdout.write_all(data)?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }

    fn location(&self) -> String {
        "stdout".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_storage_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").to_str().unwrap().to_string();
        let storage = LocalStorage::new(base.clone());

        storage.write_file("intra_removed.csv", b"origin\n").await.unwrap();

        let written = fs::read(Path::new(&base).join("intra_removed.csv")).unwrap();
        assert_eq!(written, b"origin\n");
        assert_eq!(storage.location(), base);
    }

    #[test]
    fn test_console_banner() {
        let banner = ConsoleStorage::banner("intra_removed.txt");
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 80);
        assert_eq!(lines[1].trim(), "intra_removed.txt");
    }
}

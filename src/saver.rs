//! Persisting downloaded blobs locally

use std::ffi::OsString;
use std::future::Future;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Save-as side effect for a downloaded blob
pub trait FileSaver {
    /// Persist `data` under `file_name`, returning where it ended up
    fn save(&self, file_name: &str, data: &[u8])
        -> impl Future<Output = io::Result<PathBuf>> + Send;
}

/// Saves into a directory, going through a uniquely named `.part` file that
/// is renamed over the target once the write is complete.
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSaver for DirectorySaver {
    async fn save(&self, file_name: &str, data: &[u8]) -> io::Result<PathBuf> {
        // Only the last component is used so names can't escape `dir`
        let name = Path::new(file_name).file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid file name: {}", file_name),
            )
        })?;

        let dir = self.dir.clone();
        let target = self.dir.join(name);
        let mut prefix = OsString::from(".");
        prefix.push(name);
        prefix.push(".");
        let data = data.to_vec();

        tokio::task::spawn_blocking(move || write_and_persist(&dir, &prefix, &data, target))
            .await
            .map_err(io::Error::other)?
    }
}

/// Write into a fresh temp file in `dir`, then move it onto `target`.
/// The temp file is removed when anything before the move fails.
fn write_and_persist(
    dir: &Path,
    prefix: &OsString,
    data: &[u8],
    target: PathBuf,
) -> io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let mut part = Builder::new()
        .prefix(prefix)
        .suffix(".part")
        .tempfile_in(dir)?;
    part.write_all(data)?;
    part.flush()?;
    part.persist(&target).map_err(|e| e.error)?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn saves_file_without_leftover_part() {
        let dir = tempfile::tempdir().unwrap();
        let saver = DirectorySaver::new(dir.path().join("downloads"));

        let path = saver.save("report.pdf", b"%PDF-1.7").await.unwrap();

        assert_eq!(path, saver.dir().join("report.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7");
        assert_eq!(entries(saver.dir()), vec!["report.pdf".to_string()]);
    }

    #[tokio::test]
    async fn strips_directory_components() {
        let dir = tempfile::tempdir().unwrap();
        let saver = DirectorySaver::new(dir.path());

        let path = saver.save("../../etc/passwd", b"x").await.unwrap();
        assert_eq!(path, dir.path().join("passwd"));
    }

    #[tokio::test]
    async fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let saver = DirectorySaver::new(dir.path());

        saver.save("a.txt", b"old").await.unwrap();
        let path = saver.save("a.txt", b"new").await.unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn rejects_names_without_a_file_component() {
        let dir = tempfile::tempdir().unwrap();
        let saver = DirectorySaver::new(dir.path());

        let err = saver.save("..", b"x").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_saves_of_one_name_both_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let saver = DirectorySaver::new(dir.path());
        let data = vec![7u8; 64 * 1024];

        for _ in 0..50 {
            let (first, second) = tokio::join!(
                saver.save("same.bin", &data),
                saver.save("same.bin", &data)
            );
            assert_eq!(first.unwrap(), dir.path().join("same.bin"));
            assert_eq!(second.unwrap(), dir.path().join("same.bin"));
        }

        assert_eq!(std::fs::read(dir.path().join("same.bin")).unwrap(), data);
        assert_eq!(entries(dir.path()), vec!["same.bin".to_string()]);
    }
}

//! FileKvStore - ファイルベースの永続 key-value ストア
//!
//! # 実装詳細
//! - 1 キー = データディレクトリ配下の 1 ファイル（`<key>.json`）
//! - 書き込みは一時ファイルに書いてから rename（save は全部成功するか
//!   全部失敗するかのどちらか）
//! - I/O エラーは StoreError::Unavailable に集約

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::ports::{KvStore, StoreError};

/// FileKvStore はローカルファイルシステム上の耐久ストア
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// データディレクトリを指定して作成（ディレクトリは save 時に作られる）
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

fn unavailable(context: &str, e: std::io::Error) -> StoreError {
    StoreError::Unavailable(format!("{context}: {e}"))
}

#[async_trait]
impl KvStore for FileKvStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable("read", e)),
        }
    }

    async fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| unavailable("create data dir", e))?;

        // 一時ファイル経由で書き、rename で置き換える
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, blob)
            .await
            .map_err(|e| unavailable("write", e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| unavailable("rename", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn load_of_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let store = FileKvStore::new(dir.path());

        assert_eq!(store.load("purchase_list").await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = FileKvStore::new(dir.path());

        store.save("purchase_list", "[{\"a\":1}]").await.unwrap();
        let blob = store.load("purchase_list").await.unwrap();
        assert_eq!(blob.as_deref(), Some("[{\"a\":1}]"));
    }

    #[tokio::test]
    async fn save_creates_the_data_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data").join("kaimono");
        let store = FileKvStore::new(&nested);

        store.save("purchase_list", "[]").await.unwrap();
        assert!(nested.join("purchase_list.json").exists());
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let store = FileKvStore::new(dir.path());

        store.save("purchase_list", "[]").await.unwrap();
        assert!(!dir.path().join("purchase_list.json.tmp").exists());
    }

    #[tokio::test]
    async fn a_new_store_sees_what_the_old_one_wrote() {
        // プロセス再起動の代わりに、同じディレクトリで store を作り直す
        let dir = tempdir().unwrap();

        let store = FileKvStore::new(dir.path());
        store.save("purchase_list", "persisted").await.unwrap();
        drop(store);

        let reopened = FileKvStore::new(dir.path());
        let blob = reopened.load("purchase_list").await.unwrap();
        assert_eq!(blob.as_deref(), Some("persisted"));
    }

    #[tokio::test]
    async fn unreadable_dir_surfaces_unavailable() {
        // ディレクトリの位置にファイルを置いて読み込みを失敗させる
        let dir = tempdir().unwrap();
        let not_a_dir = dir.path().join("blocked");
        std::fs::write(&not_a_dir, "x").unwrap();

        let store = FileKvStore::new(&not_a_dir);
        let err = store.save("purchase_list", "[]").await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}

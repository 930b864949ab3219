//! InMemoryKvStore - 開発・テスト用の key-value ストア
//!
//! # 実装詳細
//! - HashMap<String, String> で key ごとの blob を保持
//! - tokio::sync::Mutex で排他制御（await 越しに持てるロック）

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::ports::{KvStore, StoreError};

/// InMemoryKvStore は揮発性の key-value ストア
///
/// # 使用例
/// ```ignore
/// let store = InMemoryKvStore::new();
/// store.save("purchase_list", "[]").await?;
/// let blob = store.load("purchase_list").await?;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryKvStore {
    /// 新しい空の InMemoryKvStore を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// テスト用: 初期エントリ入りで作成
    pub fn with_entry(key: impl Into<String>, blob: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .try_lock()
            .expect("fresh store is uncontended")
            .insert(key.into(), blob.into());
        store
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().await;
        Ok(entries.get(key).cloned())
    }

    async fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

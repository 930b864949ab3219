//! KvStore port - ローカル key-value ストアの抽象化
//!
//! KvStore はリスト全体を 1 つの blob として保存する耐久ストアです。
//! コアが使うキーは常に 1 つだけで、複数キーにまたがるトランザクション性は
//! 前提にしません。
//!
//! # 設計原則
//! - blob は opaque（ストアは中身を解釈しない）
//! - save は「全部成功するか、全部失敗するか」のどちらか
//! - 失敗は StoreError::Unavailable に集約（容量不足、権限エラー、I/O 障害）

use async_trait::async_trait;
use thiserror::Error;

/// StoreError は load/save の I/O 失敗
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// KvStore は耐久 key-value ストア
///
/// # Thread Safety
/// - `Send + Sync` を要求（async 実行環境から使える）
#[async_trait]
pub trait KvStore: Send + Sync {
    /// キーに対応する blob を取得。未保存なら `None`
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// blob を丸ごと保存（部分書き込みはしない）
    async fn save(&self, key: &str, blob: &str) -> Result<(), StoreError>;
}

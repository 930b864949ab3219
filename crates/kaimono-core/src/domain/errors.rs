//! Errors - エラー型と分類
//!
//! # 分類
//! - CorruptState: 保存された blob がスナップショットとして読めない。
//!   勝手に「修復」した状態をでっち上げず、そのまま上位に伝えます。
//! - StoreUnavailable: load/save の I/O 失敗（容量不足、権限エラーなど）。
//!   メモリ上の状態はそのまま使い続けられる、非致命のエラーです。
//!
//! 空ラベルの追加などのバリデーション失敗はエラーではなく、黙って no-op に
//! なります（UX 上の判断）。どのエラーもプロセスを落とす理由にはなりません。

use thiserror::Error;

use crate::ports::kv_store::StoreError;

/// ListError はリスト永続化コアのエラー
#[derive(Debug, Error)]
pub enum ListError {
    #[error("stored list is corrupt: {source}")]
    CorruptState {
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),
}

//! ListController - スナップショットの正本（source of truth）
//!
//! ListController はメモリ上の ListSnapshot を排他的に所有し、
//! add / toggle / delete を提供します。起動時に 1 度だけストアから load し、
//! 以降はすべての変更操作のたびにスナップショット全体を save します
//! （差分書き込み・バッチングはしない）。
//!
//! # 設計原則
//! - グローバル状態にしない。起動時に 1 度構築し、描画レイヤーへは参照で渡す
//! - save は fire-and-forget にせず await する。呼び出し側（とテスト）が
//!   失敗を観測できる
//! - save が失敗してもメモリ上の変更は残る。エラーを返して「保存されて
//!   いないかもしれない」と collaborator に伝え、リトライの余地を残す
//!
//! # エラーポリシー
//! - 起動時に blob が読めない（CorruptState）: そのまま返す。修復しない
//! - 起動時にストアが使えない（StoreUnavailable）: 警告を出して空リストで
//!   続行（非致命）
//! - 空ラベルの追加: エラーではなく黙って no-op

use crate::domain::{Item, ItemId, ListError, ListSnapshot};
use crate::ports::{IdGenerator, KvStore};

/// 永続化エントリの固定キー
pub const STORAGE_KEY: &str = "purchase_list";

/// ListController は買い物リストの変更と永続化を司る
pub struct ListController<S, G> {
    store: S,
    ids: G,
    snapshot: ListSnapshot,
    storage_key: String,
}

impl<S: KvStore, G: IdGenerator> ListController<S, G> {
    /// 既定のキー（STORAGE_KEY）で作成。スナップショットは load まで空
    pub fn new(store: S, ids: G) -> Self {
        Self::with_storage_key(store, ids, STORAGE_KEY)
    }

    pub fn with_storage_key(store: S, ids: G, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            ids,
            snapshot: ListSnapshot::new(),
            storage_key: storage_key.into(),
        }
    }

    /// 保存済みスナップショットを 1 度だけ読み込む
    ///
    /// - エントリなし（初回起動）: 空のまま Ok
    /// - blob が壊れている: CorruptState を返す（勝手に捨てない）
    /// - ストアが使えない: 警告して空のまま Ok（メモリ内で使い続けられる）
    pub async fn initialize(&mut self) -> Result<(), ListError> {
        match self.store.load(&self.storage_key).await {
            Ok(Some(blob)) => {
                self.snapshot = ListSnapshot::from_json(&blob)?;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                tracing::warn!(error = %e, "load failed; starting with an empty list");
                Ok(())
            }
        }
    }

    /// 項目を末尾に追加して保存する
    ///
    /// ラベルは trim され、空（または空白のみ）なら何もせず `Ok(None)`。
    /// 追加できた場合は採番した ID を返します。
    pub async fn add_item(&mut self, label: &str) -> Result<Option<ItemId>, ListError> {
        let label = label.trim();
        if label.is_empty() {
            return Ok(None);
        }

        let id = self.ids.generate_item_id();
        self.snapshot.push(Item::new(id, label));
        self.persist().await?;
        Ok(Some(id))
    }

    /// 項目を done にして保存する
    ///
    /// 遷移は pending -> done の一方向のみ。done の項目への再実行も
    /// 「一致あり」なので保存は走ります。一致しなければ保存もしません。
    pub async fn toggle_done(&mut self, id: ItemId) -> Result<bool, ListError> {
        if !self.snapshot.mark_done(id) {
            return Ok(false);
        }
        self.persist().await?;
        Ok(true)
    }

    /// 一致した最初の項目を削除して保存する。一致しなければ no-op
    pub async fn delete_item(&mut self, id: ItemId) -> Result<bool, ListError> {
        if self.snapshot.remove(id).is_none() {
            return Ok(false);
        }
        self.persist().await?;
        Ok(true)
    }

    /// 描画用の read-only ビュー
    pub fn snapshot(&self) -> &ListSnapshot {
        &self.snapshot
    }

    /// スナップショット全体を書き出す
    async fn persist(&self) -> Result<(), ListError> {
        let blob = self.snapshot.to_json()?;
        if let Err(e) = self.store.save(&self.storage_key, &blob).await {
            tracing::warn!(error = %e, "save failed; the change is kept in memory only");
            return Err(e.into());
        }
        Ok(())
    }
}

//! Item - リストの 1 項目
//!
//! # 状態遷移
//! - pending: 未購入
//! - done: 購入済み（終端。戻す遷移は存在しない）
//!
//! チェックは一方向です。done の項目を再度チェックしても done のまま
//! （冪等）で、pending に戻ることはありません。

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::domain::ids::ItemId;

/// ItemState は項目の状態を表現
///
/// 永続化レイアウトでは boolean（`isDone`）として書かれます。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemState {
    #[default]
    Pending,
    Done,
}

impl ItemState {
    pub fn is_done(&self) -> bool {
        matches!(self, ItemState::Done)
    }
}

impl Serialize for ItemState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_done())
    }
}

impl<'de> Deserialize<'de> for ItemState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let done = bool::deserialize(deserializer)?;
        Ok(if done {
            ItemState::Done
        } else {
            ItemState::Pending
        })
    }
}

/// Item はリストの 1 項目
///
/// serde rename は永続化レイアウト（`key` / `item` / `isDone`）に合わせています。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "key")]
    pub id: ItemId,

    #[serde(rename = "item")]
    pub label: String,

    #[serde(rename = "isDone")]
    pub state: ItemState,
}

impl Item {
    /// 新しい pending の項目を作成
    pub fn new(id: ItemId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            state: ItemState::Pending,
        }
    }

    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    /// done にする（冪等。done -> done は no-op）
    pub fn mark_done(&mut self) {
        self.state = ItemState::Done;
    }
}

//! Domain identifiers.
//!
//! # ラベルではなく ULID を identity にする
//! 表示ラベルをそのままキーにすると、同じテキストの項目が共存できず、
//! チェック・削除が「たまたま先に見つかった方」に当たってしまいます。
//! そのため identity は作成時に採番する ULID とし、ラベルとは切り離します。
//!
//! ## ULID の特性
//! - **時刻でソート可能**: timestamp が先頭にあるため、生成順序でソートできる
//! - **分散生成可能**: 調整なしで生成できる
//! - **UUID互換**: 128-bit で UUID と同じサイズ

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// ItemId はリスト項目の identity
///
/// シリアライズは内部の ULID 文字列そのもの（永続化レイアウトの `key` フィールド）。
/// Display は人間向けに `item-` プレフィックスを付けます。
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(Ulid);

impl ItemId {
    /// ULID から ItemId を作成
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// 内部の ULID を取得
    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for ItemId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

//! kaimono-core
//!
//! 買い物リストの永続化コア。UI レイヤーはここに intent（追加・チェック・削除）を
//! 渡し、スナップショットを描画するだけの collaborator です。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, item, snapshot, errors）
//! - **ports**: 抽象化レイヤー（KvStore, Clock, IdGenerator）
//! - **app**: アプリケーションロジック（ListController, Intent）
//! - **impls**: 実装（InMemoryKvStore は開発・テスト用、FileKvStore は永続化用）

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

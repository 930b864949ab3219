//! アプリケーションロジック
//!
//! - **controller**: ListController（スナップショットの正本を所有）
//! - **intent**: UI collaborator から届く typed intent とその dispatch

pub mod controller;
pub mod intent;

pub use self::controller::{ListController, STORAGE_KEY};
pub use self::intent::Intent;

//! 実装（adapters）
//!
//! - **InMemoryKvStore**: 開発・テスト用。プロセスが死ねば消える
//! - **FileKvStore**: 1 キー = 1 ファイルの永続化ストア

pub mod file_store;
pub mod inmem_store;

pub use self::file_store::FileKvStore;
pub use self::inmem_store::InMemoryKvStore;

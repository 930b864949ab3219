//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部システム（ファイルシステムなどの key-value ストア）への
//! インターフェースを提供し、実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - コアが触るストアは 1 キーの opaque な key-value ストアのみ
//! - 時刻と ID 採番も trait 化してテストで差し替え可能にする

pub mod clock;
pub mod id_generator;
pub mod kv_store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::kv_store::{KvStore, StoreError};

//! Domain model (IDs, items, snapshot, errors).

pub mod errors;
pub mod ids;
pub mod item;
pub mod snapshot;

pub use self::errors::ListError;
pub use self::ids::ItemId;
pub use self::item::{Item, ItemState};
pub use self::snapshot::ListSnapshot;

//! Intent - UI collaborator からのリスト変更要求
//!
//! UI は typed intent を投げるだけで、ポリシー（trim、冪等チェック、
//! 永続化のタイミング）はすべて controller 側にあります。

use crate::app::controller::ListController;
use crate::domain::{ItemId, ListError};
use crate::ports::{IdGenerator, KvStore};

/// Intent はリストを変更する要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// 項目を末尾に追加（空ラベルは no-op）
    Add { label: String },
    /// 項目を done にする（冪等、見つからなければ no-op）
    Toggle { id: ItemId },
    /// 項目を削除（見つからなければ no-op）
    Delete { id: ItemId },
}

impl<S: KvStore, G: IdGenerator> ListController<S, G> {
    /// intent を対応する操作に還元する
    pub async fn dispatch(&mut self, intent: Intent) -> Result<(), ListError> {
        match intent {
            Intent::Add { label } => {
                self.add_item(&label).await?;
            }
            Intent::Toggle { id } => {
                self.toggle_done(id).await?;
            }
            Intent::Delete { id } => {
                self.delete_item(id).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::InMemoryKvStore;
    use crate::ports::{SystemClock, UlidGenerator};

    fn controller() -> ListController<InMemoryKvStore, UlidGenerator<SystemClock>> {
        ListController::new(InMemoryKvStore::new(), UlidGenerator::new(SystemClock))
    }

    #[tokio::test]
    async fn intents_reduce_to_the_matching_operations() {
        let mut c = controller();

        c.dispatch(Intent::Add {
            label: "milk".into(),
        })
        .await
        .unwrap();
        c.dispatch(Intent::Add {
            label: "bread".into(),
        })
        .await
        .unwrap();

        let milk_id = c.snapshot().items()[0].id;
        c.dispatch(Intent::Toggle { id: milk_id }).await.unwrap();
        assert!(c.snapshot().items()[0].is_done());

        c.dispatch(Intent::Delete { id: milk_id }).await.unwrap();
        let labels: Vec<&str> = c.snapshot().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["bread"]);
    }

    #[tokio::test]
    async fn unknown_ids_dispatch_as_silent_noops() {
        let mut c = controller();
        c.dispatch(Intent::Add {
            label: "milk".into(),
        })
        .await
        .unwrap();

        let phantom = UlidGenerator::new(SystemClock).generate_item_id();
        c.dispatch(Intent::Toggle { id: phantom }).await.unwrap();
        c.dispatch(Intent::Delete { id: phantom }).await.unwrap();

        assert_eq!(c.snapshot().len(), 1);
        assert!(!c.snapshot().items()[0].is_done());
    }
}

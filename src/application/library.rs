use crate::adapters::memory;
use crate::ports::*;

/// 図書館システムのコンテキスト
///
/// カタログ・待機リスト・履歴ログを1つの単位として排他的に所有する。
/// 3つのコレクションは互いに参照せず、貸出サービスの関数だけがそれらを連携させる。
///
/// 関数型DDDの原則に従い、データ構造として定義する。
/// 振る舞いは`catalog_service`と`lending_service`の関数が持つ。
pub struct Library {
    pub catalog: Box<dyn Catalog>,
    pub waiting_list: Box<dyn WaitingList>,
    pub history: Box<dyn HistoryLog>,
}

impl Library {
    pub fn new(
        catalog: Box<dyn Catalog>,
        waiting_list: Box<dyn WaitingList>,
        history: Box<dyn HistoryLog>,
    ) -> Self {
        Self {
            catalog,
            waiting_list,
            history,
        }
    }

    /// インメモリアダプターで構成する
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(memory::Catalog::new()),
            Box::new(memory::WaitingList::new()),
            Box::new(memory::HistoryLog::new()),
        )
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("books", &self.catalog.count())
            .field("waiting_requests", &self.waiting_list.count_all())
            .field("history_entries", &self.history.count())
            .finish()
    }
}

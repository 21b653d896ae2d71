use crate::domain::{HistoryEntry, OperationKind, Title};
use chrono::Utc;

/// 履歴ログポート
///
/// 完了した貸出・返却の追記専用の記録。
/// エントリは変更も削除もされない。問い合わせは新しい順に返す。
pub trait HistoryLog: Send + Sync {
    /// エントリを追記する（最新のエントリになる）
    fn append(&mut self, entry: HistoryEntry);

    /// 現在時刻で操作を記録する
    fn record(&mut self, kind: OperationKind, title: Title, participant: &str) {
        self.append(HistoryEntry::new(kind, title, participant, Utc::now()));
    }

    /// 新しい順に最大`limit`件を返す
    ///
    /// `limit`が0、または件数以上の場合はすべて返す。
    fn recent(&self, limit: usize) -> Vec<HistoryEntry>;

    /// タイトル（大文字小文字を区別しない完全一致）の全エントリを新しい順に返す
    fn for_title(&self, title: &str) -> Vec<HistoryEntry>;

    /// 記録済みエントリの総数
    fn count(&self) -> usize;
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DomainEvent, Title};

/// 履歴に記録される操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationKind {
    /// 貸出
    Loan,
    /// 返却
    Return,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Loan => "LOAN",
            OperationKind::Return => "RETURN",
        }
    }
}

/// 履歴エントリ
///
/// 作成後は変更されない。履歴ログから削除されることもない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub kind: OperationKind,
    pub title: Title,
    pub participant: String,
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        kind: OperationKind,
        title: Title,
        participant: impl Into<String>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            title,
            participant: participant.into(),
            recorded_at,
        }
    }
}

/// 貸出・返却イベントから履歴エントリを導出する
impl From<&DomainEvent> for HistoryEntry {
    fn from(event: &DomainEvent) -> Self {
        match event {
            DomainEvent::BookLoaned(e) => HistoryEntry::new(
                OperationKind::Loan,
                e.title.clone(),
                e.borrower.clone(),
                e.loaned_at,
            ),
            DomainEvent::BookReturned(e) => HistoryEntry::new(
                OperationKind::Return,
                e.title.clone(),
                e.returned_by.clone(),
                e.returned_at,
            ),
        }
    }
}

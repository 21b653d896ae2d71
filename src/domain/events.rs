use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookId, Title};

/// イベント：書籍が貸出された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLoaned {
    pub book_id: BookId,
    pub title: Title,
    pub borrower: String,
    pub loaned_at: DateTime<Utc>,
}

/// イベント：書籍が返却された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReturned {
    pub book_id: BookId,
    pub title: Title,
    /// 返却直前まで借りていた利用者
    pub returned_by: String,
    pub returned_at: DateTime<Utc>,
}

/// ドメインイベント統合型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainEvent {
    BookLoaned(BookLoaned),
    BookReturned(BookReturned),
}

impl From<BookLoaned> for DomainEvent {
    fn from(event: BookLoaned) -> Self {
        DomainEvent::BookLoaned(event)
    }
}

impl From<BookReturned> for DomainEvent {
    fn from(event: BookReturned) -> Self {
        DomainEvent::BookReturned(event)
    }
}

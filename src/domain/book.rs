use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    BookId, BookLoaned, BookReturned, LendBookError, ReturnBookError, Title,
    commands::RegisterBook,
};

// ============================================================================
// 型安全な状態パターン
// ============================================================================

/// 書籍の貸出状態
///
/// 利用者名と貸出日時は貸出中の状態にのみ存在する。
/// 「貸出可能なのに利用者名が残っている」状態は型で表現できない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookStatus {
    /// 貸出可能
    Available,
    /// 貸出中
    OnLoan {
        holder: String,
        since: DateTime<Utc>,
    },
}

impl BookStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, BookStatus::Available)
    }

    pub fn is_on_loan(&self) -> bool {
        !self.is_available()
    }

    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::OnLoan { .. } => "on_loan",
        }
    }
}

/// 書籍レコード - カタログが排他的に所有する1冊分の情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub book_id: BookId,
    pub title: Title,
    pub author: String,
    pub publication_year: i32,
    pub isbn: Option<String>,
    pub status: BookStatus,
    pub registered_at: DateTime<Utc>,
}

impl BookRecord {
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }

    /// 現在の借り手（貸出中のみ）
    pub fn holder(&self) -> Option<&str> {
        match &self.status {
            BookStatus::OnLoan { holder, .. } => Some(holder.as_str()),
            BookStatus::Available => None,
        }
    }

    /// 貸出日時（貸出中のみ）
    pub fn loaned_at(&self) -> Option<DateTime<Utc>> {
        match &self.status {
            BookStatus::OnLoan { since, .. } => Some(*since),
            BookStatus::Available => None,
        }
    }
}

/// 純粋関数：書籍レコードを作成する
///
/// 新規登録された書籍は常に貸出可能。
/// タイトルの重複確認はカタログ側で行う。
pub fn register_book(cmd: RegisterBook) -> BookRecord {
    BookRecord {
        book_id: BookId::new(),
        title: Title::new(cmd.title),
        author: cmd.author,
        publication_year: cmd.publication_year,
        isbn: cmd.isbn,
        status: BookStatus::Available,
        registered_at: cmd.registered_at,
    }
}

/// 純粋関数：書籍を貸し出す
///
/// ビジネスルール：
/// - 貸出可能な書籍のみ貸し出せる
/// - 貸出中の書籍は借り手が同一人物でも貸し出さない
///
/// 副作用なし。新しいBookRecordとイベントを返す。
pub fn lend_book(
    book: &BookRecord,
    borrower: &str,
    loaned_at: DateTime<Utc>,
) -> Result<(BookRecord, BookLoaned), LendBookError> {
    if let BookStatus::OnLoan { holder, .. } = &book.status {
        return Err(LendBookError::AlreadyOnLoan {
            holder: holder.clone(),
        });
    }

    let new_book = BookRecord {
        status: BookStatus::OnLoan {
            holder: borrower.to_string(),
            since: loaned_at,
        },
        ..book.clone()
    };

    let event = BookLoaned {
        book_id: book.book_id,
        title: book.title.clone(),
        borrower: borrower.to_string(),
        loaned_at,
    };

    Ok((new_book, event))
}

/// 純粋関数：書籍を返却する
///
/// ビジネスルール：
/// - 貸出中の書籍のみ返却できる
/// - 返却後は貸出可能に戻る（待機者への自動貸出は行わない）
///
/// 副作用なし。新しいBookRecordとイベントを返す。
pub fn return_book(
    book: &BookRecord,
    returned_at: DateTime<Utc>,
) -> Result<(BookRecord, BookReturned), ReturnBookError> {
    let BookStatus::OnLoan { holder, .. } = &book.status else {
        return Err(ReturnBookError::AlreadyAvailable);
    };

    let event = BookReturned {
        book_id: book.book_id,
        title: book.title.clone(),
        returned_by: holder.clone(),
        returned_at,
    };

    let new_book = BookRecord {
        status: BookStatus::Available,
        ..book.clone()
    };

    Ok((new_book, event))
}

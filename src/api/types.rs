use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{BookRecord, HistoryEntry, QueuedRequest, WaitRequest, commands::*};

/// 出版年の下限
pub const MIN_PUBLICATION_YEAR: i32 = 1000;
/// 出版年の上限
pub const MAX_PUBLICATION_YEAR: i32 = 2025;
/// タイトルの最大文字数
pub const MAX_TITLE_LEN: usize = 100;
/// 著者名の最大文字数
pub const MAX_AUTHOR_LEN: usize = 100;
/// ISBNの最大文字数
pub const MAX_ISBN_LEN: usize = 20;
/// 利用者名の最大文字数
pub const MAX_READER_NAME_LEN: usize = 100;

// ============================================================================
// 入力値の検証
// ============================================================================

/// 必須のテキスト項目を検証する
///
/// 前後の空白を取り除いた上で、空でなく上限文字数以内であること。
fn required_text(field: &str, value: &str, max_len: usize) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    if value.chars().count() > max_len {
        return Err(format!("{} must be at most {} characters", field, max_len));
    }
    Ok(value.to_string())
}

/// パスの`:title`を検証する
///
/// `/books/:title/...`のすべてのハンドラーがこれを通し、同じ表記でコアに渡す。
pub fn book_title(raw: &str) -> Result<String, String> {
    required_text("title", raw, MAX_TITLE_LEN)
}

/// パスの`:requester`を検証する
pub fn reader_name(raw: &str) -> Result<String, String> {
    required_text("requester", raw, MAX_READER_NAME_LEN)
}

/// 書籍登録リクエスト（POST /books）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterBookRequest {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    #[serde(default)]
    pub isbn: Option<String>,
}

impl RegisterBookRequest {
    /// 検証してコマンドに変換する
    ///
    /// 空のISBNは未指定として扱う。
    pub fn to_command(&self) -> Result<RegisterBook, String> {
        let title = required_text("title", &self.title, MAX_TITLE_LEN)?;
        let author = required_text("author", &self.author, MAX_AUTHOR_LEN)?;

        if !(MIN_PUBLICATION_YEAR..=MAX_PUBLICATION_YEAR).contains(&self.publication_year) {
            return Err(format!(
                "publication_year must be between {} and {}",
                MIN_PUBLICATION_YEAR, MAX_PUBLICATION_YEAR
            ));
        }

        let isbn = match self.isbn.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(isbn) if isbn.chars().count() > MAX_ISBN_LEN => {
                return Err(format!("isbn must be at most {} characters", MAX_ISBN_LEN));
            }
            Some(isbn) => Some(isbn.to_string()),
        };

        Ok(RegisterBook {
            title,
            author,
            publication_year: self.publication_year,
            isbn,
            registered_at: Utc::now(),
        })
    }
}

/// 貸出リクエスト（POST /books/:title/borrow）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowBookRequest {
    pub borrower: String,
}

impl BorrowBookRequest {
    pub fn to_command(&self, title: &str) -> Result<BorrowBook, String> {
        Ok(BorrowBook {
            title: book_title(title)?,
            borrower: required_text("borrower", &self.borrower, MAX_READER_NAME_LEN)?,
            requested_at: Utc::now(),
        })
    }
}

/// 返却コマンドを作成する（POST /books/:title/return）
pub fn return_command(title: &str) -> Result<ReturnBook, String> {
    Ok(ReturnBook {
        title: book_title(title)?,
        returned_at: Utc::now(),
    })
}

/// 書籍一覧のクエリパラメータ
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksQuery {
    /// all / available / borrowed
    pub status: Option<String>,
    /// 著者名の部分一致
    pub author: Option<String>,
}

/// 書籍一覧の絞り込み
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookFilter {
    All,
    Available,
    Borrowed,
}

impl std::str::FromStr for BookFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all" => Ok(BookFilter::All),
            "available" => Ok(BookFilter::Available),
            "borrowed" => Ok(BookFilter::Borrowed),
            _ => Err(format!("Invalid status filter: {}", s)),
        }
    }
}

/// 履歴取得のクエリパラメータ
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// 0または未指定ですべて
    pub limit: Option<usize>,
}

// ============================================================================
// レスポンス
// ============================================================================

/// 書籍レスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookResponse {
    pub book_id: Uuid,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub isbn: Option<String>,
    /// "available" または "on_loan"
    pub status: String,
    pub holder: Option<String>,
    pub loaned_at: Option<DateTime<Utc>>,
}

impl From<BookRecord> for BookResponse {
    fn from(book: BookRecord) -> Self {
        Self {
            book_id: book.book_id.value(),
            status: book.status.as_str().to_string(),
            holder: book.holder().map(str::to_string),
            loaned_at: book.loaned_at(),
            title: book.title.as_str().to_string(),
            author: book.author,
            publication_year: book.publication_year,
            isbn: book.isbn,
        }
    }
}

/// 書籍登録レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRegisteredResponse {
    pub book: BookResponse,
    /// 登録後のカタログの総数
    pub total_books: usize,
}

/// 貸出レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowResponse {
    /// "loaned" または "queued"
    pub outcome: String,
    pub title: String,
    pub borrower: String,
    /// 待機リストでの順位（queuedのみ）
    pub position: Option<usize>,
}

/// 返却レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnResponse {
    pub title: String,
    /// 通知すべき待機者（いれば）
    ///
    /// 書籍は貸出可能のまま。この利用者への貸出は別途行う。
    pub notify: Option<String>,
}

/// 待機申請レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitRequestResponse {
    pub position: Option<usize>,
    pub requester: String,
    pub title: String,
    pub requested_at: DateTime<Utc>,
}

impl From<QueuedRequest> for WaitRequestResponse {
    fn from(queued: QueuedRequest) -> Self {
        Self {
            position: Some(queued.position),
            ..Self::from(queued.request)
        }
    }
}

impl From<WaitRequest> for WaitRequestResponse {
    fn from(request: WaitRequest) -> Self {
        Self {
            position: None,
            requester: request.requester,
            title: request.title.as_str().to_string(),
            requested_at: request.requested_at,
        }
    }
}

/// 待機順位レスポンス（0は申請なし）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionResponse {
    pub requester: String,
    pub title: String,
    pub position: usize,
}

/// 履歴エントリレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntryResponse {
    /// "LOAN" または "RETURN"
    pub kind: String,
    pub title: String,
    pub participant: String,
    pub recorded_at: DateTime<Utc>,
}

impl From<HistoryEntry> for HistoryEntryResponse {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            kind: entry.kind.as_str().to_string(),
            title: entry.title.as_str().to_string(),
            participant: entry.participant,
            recorded_at: entry.recorded_at,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// ステータスクエリパラメータのパースとバリデーション
pub fn parse_status_filter(status: &str) -> Result<BookFilter, String> {
    status.parse::<BookFilter>()
}

use crate::application::{
    self, BorrowOutcome, Library, LibraryApplicationError, LibraryReport, ReturnOutcome,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{
    error::ApiError,
    types::{
        BookFilter, BookRegisteredResponse, BookResponse, BorrowBookRequest, BorrowResponse,
        HistoryEntryResponse, HistoryQuery, ListBooksQuery, PositionResponse,
        RegisterBookRequest, ReturnResponse, WaitRequestResponse, book_title,
        parse_status_filter, reader_name, return_command,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
///
/// コアは単一スレッド前提のため、すべての呼び出しを1つのMutexで直列化する。
/// ロックを保持したまま`.await`しないこと。
pub struct AppState {
    library: Mutex<Library>,
}

impl AppState {
    pub fn new(library: Library) -> Self {
        Self {
            library: Mutex::new(library),
        }
    }

    fn library(&self) -> Result<MutexGuard<'_, Library>, ApiError> {
        self.library.lock().map_err(|_| ApiError::LibraryUnavailable)
    }
}

// ============================================================================
// Command handlers (POST / DELETE)
// ============================================================================

/// POST /books - 書籍を登録
///
/// 強制されるルール:
/// - タイトル・著者は必須、出版年は1000〜2025（シェル側で検証）
/// - タイトルは大文字小文字を区別せず一意
pub async fn register_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterBookRequest>,
) -> Result<(StatusCode, Json<BookRegisteredResponse>), ApiError> {
    let cmd = req.to_command().map_err(ApiError::Validation)?;

    let mut library = state.library()?;
    let book = application::register_book(&mut library, cmd)?;

    let response = BookRegisteredResponse {
        book: BookResponse::from(book),
        total_books: library.catalog.count(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /books/:title/borrow - 書籍を借りる
///
/// 貸出中の場合は待機リストに追加し、202と順位を返す。
pub async fn borrow_book(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
    Json(req): Json<BorrowBookRequest>,
) -> Result<(StatusCode, Json<BorrowResponse>), ApiError> {
    let title = book_title(&title).map_err(ApiError::Validation)?;
    let cmd = req.to_command(&title).map_err(ApiError::Validation)?;
    let borrower = cmd.borrower.clone();

    let mut library = state.library()?;
    let (status, outcome, position) = match application::borrow_book(&mut library, cmd) {
        BorrowOutcome::Success => (StatusCode::OK, "loaned", None),
        BorrowOutcome::QueuedAtPosition(position) => {
            (StatusCode::ACCEPTED, "queued", Some(position))
        }
        BorrowOutcome::NotFound => {
            return Err(LibraryApplicationError::BookNotFound(title).into());
        }
    };

    let response = BorrowResponse {
        outcome: outcome.to_string(),
        title,
        borrower,
        position,
    };

    Ok((status, Json(response)))
}

/// POST /books/:title/return - 書籍を返却
///
/// 待機者がいれば`notify`に名前を返す。書籍は貸出可能のまま。
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<Json<ReturnResponse>, ApiError> {
    let title = book_title(&title).map_err(ApiError::Validation)?;
    let cmd = return_command(&title).map_err(ApiError::Validation)?;

    let mut library = state.library()?;
    let notify = match application::return_book(&mut library, cmd) {
        ReturnOutcome::Success => None,
        ReturnOutcome::NotifyTarget(requester) => Some(requester),
        ReturnOutcome::AlreadyAvailable => return Err(ApiError::AlreadyAvailable(title)),
        ReturnOutcome::NotFound => {
            return Err(LibraryApplicationError::BookNotFound(title).into());
        }
    };

    Ok(Json(ReturnResponse { title, notify }))
}

/// DELETE /books/:title - 書籍を削除
///
/// 貸出中でも削除する。待機リストと履歴は変更しない。
pub async fn remove_book(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<StatusCode, ApiError> {
    let title = book_title(&title).map_err(ApiError::Validation)?;
    let mut library = state.library()?;
    application::remove_book(&mut library, &title)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books - 書籍一覧
///
/// クエリパラメータ:
/// - status: all（既定） / available / borrowed
/// - author: 著者名の部分一致（指定時はstatusより優先）
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListBooksQuery>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let filter = match query.status.as_deref() {
        Some(status) => parse_status_filter(status).map_err(ApiError::Validation)?,
        None => BookFilter::All,
    };

    let library = state.library()?;
    let books = match (&query.author, filter) {
        (Some(author), _) => library.catalog.find_by_author(author),
        (None, BookFilter::All) => library.catalog.list_all(),
        (None, BookFilter::Available) => library.catalog.list_available(),
        (None, BookFilter::Borrowed) => library.catalog.list_borrowed(),
    };

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// GET /books/:title - タイトルで書籍を取得
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<Json<BookResponse>, ApiError> {
    let title = book_title(&title).map_err(ApiError::Validation)?;
    let library = state.library()?;
    let book = application::find_book(&library, &title)?;
    Ok(Json(BookResponse::from(book)))
}

/// GET /books/:title/waiting-list - タイトルの待機リスト（順位付き）
pub async fn waiting_list_for_book(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<Json<Vec<WaitRequestResponse>>, ApiError> {
    let title = book_title(&title).map_err(ApiError::Validation)?;
    let library = state.library()?;
    let queued = library.waiting_list.list_for(&title);
    Ok(Json(queued.into_iter().map(WaitRequestResponse::from).collect()))
}

/// GET /books/:title/waiting-list/:requester - 利用者の待機順位
///
/// 申請がない場合は順位0を返す。
pub async fn waiting_position(
    State(state): State<Arc<AppState>>,
    Path((title, requester)): Path<(String, String)>,
) -> Result<Json<PositionResponse>, ApiError> {
    let title = book_title(&title).map_err(ApiError::Validation)?;
    let requester = reader_name(&requester).map_err(ApiError::Validation)?;
    let library = state.library()?;
    let position = library.waiting_list.position_of(&requester, &title);
    Ok(Json(PositionResponse {
        requester,
        title,
        position,
    }))
}

/// GET /waiting-list - 全タイトルの待機申請（到着順）
pub async fn list_waiting_requests(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WaitRequestResponse>>, ApiError> {
    let library = state.library()?;
    let requests = library.waiting_list.list_all();
    Ok(Json(
        requests.into_iter().map(WaitRequestResponse::from).collect(),
    ))
}

/// GET /history - 最近の履歴（新しい順）
///
/// クエリパラメータ:
/// - limit: 件数。0または未指定ですべて
pub async fn recent_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntryResponse>>, ApiError> {
    let library = state.library()?;
    let entries = library.history.recent(query.limit.unwrap_or(0));
    Ok(Json(
        entries.into_iter().map(HistoryEntryResponse::from).collect(),
    ))
}

/// GET /books/:title/history - タイトルの履歴（新しい順）
///
/// 削除済みの書籍の履歴も返す。
pub async fn book_history(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<Json<Vec<HistoryEntryResponse>>, ApiError> {
    let title = book_title(&title).map_err(ApiError::Validation)?;
    let library = state.library()?;
    let entries = library.history.for_title(&title);
    Ok(Json(
        entries.into_iter().map(HistoryEntryResponse::from).collect(),
    ))
}

/// GET /report - システムレポート
pub async fn report(State(state): State<Arc<AppState>>) -> Result<Json<LibraryReport>, ApiError> {
    let library = state.library()?;
    Ok(Json(application::system_report(&library)))
}

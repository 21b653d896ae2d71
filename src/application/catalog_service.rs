use crate::domain::{self, BookRecord, RegisterBookError, commands::RegisterBook};
use serde::{Deserialize, Serialize};

use super::errors::{LibraryApplicationError, Result};
use super::library::Library;

/// 書籍をカタログに登録する
///
/// ビジネスルール：
/// - タイトルは大文字小文字を区別せず一意
/// - 登録直後は貸出可能
///
/// 重複時はカタログを一切変更しない。
pub fn register_book(library: &mut Library, cmd: RegisterBook) -> Result<BookRecord> {
    let book = domain::book::register_book(cmd);

    match library.catalog.add(book.clone()) {
        Ok(()) => {
            tracing::info!(
                title = %book.title,
                total = library.catalog.count(),
                "Book registered"
            );
            Ok(book)
        }
        Err(RegisterBookError::DuplicateTitle) => {
            tracing::debug!(title = %book.title, "Duplicate title rejected");
            Err(LibraryApplicationError::DuplicateTitle(
                book.title.as_str().to_string(),
            ))
        }
    }
}

/// 書籍をタイトルで取得する
pub fn find_book(library: &Library, title: &str) -> Result<BookRecord> {
    library
        .catalog
        .find_by_title(title)
        .ok_or_else(|| LibraryApplicationError::BookNotFound(title.to_string()))
}

/// 書籍をカタログから削除する
///
/// 貸出中でも削除する。待機リストの申請と履歴はそのまま残る。
pub fn remove_book(library: &mut Library, title: &str) -> Result<()> {
    if !library.catalog.remove(title) {
        return Err(LibraryApplicationError::BookNotFound(title.to_string()));
    }
    tracing::info!(title, "Book removed from catalog");
    Ok(())
}

/// システム全体の集計
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryReport {
    pub total_books: usize,
    pub available_books: usize,
    pub borrowed_books: usize,
    pub waiting_requests: usize,
    pub history_entries: usize,
}

/// システムレポートを作成する（状態は変更しない）
pub fn system_report(library: &Library) -> LibraryReport {
    let books = library.catalog.list_all();
    let available_books = books.iter().filter(|b| b.is_available()).count();

    LibraryReport {
        total_books: books.len(),
        available_books,
        borrowed_books: books.len() - available_books,
        waiting_requests: library.waiting_list.count_all(),
        history_entries: library.history.count(),
    }
}

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use library_catalog::application::{self, Library};
use library_catalog::domain::commands::*;

/// テスト用の基準時刻
///
/// 操作ごとに1分ずつ進めて使い、履歴の順序を時刻でも確認できるようにする。
pub fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-10-01T09:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn at_minute(minute: i64) -> DateTime<Utc> {
    base_time() + Duration::minutes(minute)
}

pub fn register_command(title: &str, author: &str, year: i32) -> RegisterBook {
    RegisterBook {
        title: title.to_string(),
        author: author.to_string(),
        publication_year: year,
        isbn: None,
        registered_at: base_time(),
    }
}

pub fn borrow_command(title: &str, borrower: &str, minute: i64) -> BorrowBook {
    BorrowBook {
        title: title.to_string(),
        borrower: borrower.to_string(),
        requested_at: at_minute(minute),
    }
}

pub fn return_command(title: &str, minute: i64) -> ReturnBook {
    ReturnBook {
        title: title.to_string(),
        returned_at: at_minute(minute),
    }
}

/// 書籍を登録済みのインメモリ図書館を作成
pub fn library_with_books(books: &[(&str, &str)]) -> Library {
    let mut library = Library::in_memory();
    for (title, author) in books {
        application::register_book(&mut library, register_command(title, author, 1950))
            .expect("Failed to register test book");
    }
    library
}

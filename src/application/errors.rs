use thiserror::Error;

/// 図書館アプリケーション層のエラー
///
/// 貸出・返却の結果は`BorrowOutcome`/`ReturnOutcome`で表現するため、
/// ここにはカタログ操作の失敗だけが入る。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LibraryApplicationError {
    /// 同じタイトル（大文字小文字を区別しない）の書籍が既に存在する
    #[error("A book titled '{0}' already exists in the catalog")]
    DuplicateTitle(String),

    /// 書籍が見つからない
    #[error("Book '{0}' not found")]
    BookNotFound(String),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LibraryApplicationError>;

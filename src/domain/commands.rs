use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// コマンド：書籍をカタログに登録する
///
/// 入力値の検証（空欄、出版年の範囲、長さ制限）は呼び出し側の責務。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterBook {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub isbn: Option<String>,
    pub registered_at: DateTime<Utc>,
}

/// コマンド：書籍を借りる
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowBook {
    pub title: String,
    pub borrower: String,
    pub requested_at: DateTime<Utc>,
}

/// コマンド：書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub title: String,
    pub returned_at: DateTime<Utc>,
}

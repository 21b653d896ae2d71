use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// 書籍ID - カタログ内の書籍レコードの識別子
///
/// 業務上のキーはタイトルだが、レコードの差し替え（貸出・返却）では
/// タイトル表記の揺れに左右されないようIDで対象を特定する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

/// 書籍タイトル
///
/// 不変条件：カタログ内での比較は常に大文字小文字を区別しない完全一致。
/// 表示用には登録時の表記をそのまま保持する。
/// `PartialEq`と`Hash`も正規化したキーで比較する。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// 登録時の表記
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 比較用に正規化したキー
    pub fn normalized(&self) -> String {
        normalize(&self.0)
    }

    /// 大文字小文字を区別せず、完全一致するか
    pub fn matches(&self, other: &str) -> bool {
        self.normalized() == normalize(other)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq for Title {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other.as_str())
    }
}

impl Eq for Title {}

impl Hash for Title {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

/// タイトル・著者名・利用者名の比較用正規化
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// 大文字小文字を区別しない部分一致（著者検索用）
///
/// 空のパターンはすべてに一致する。
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}

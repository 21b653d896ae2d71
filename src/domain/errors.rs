/// 書籍登録のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterBookError {
    /// 正規化後のタイトルが既にカタログに存在する
    DuplicateTitle,
}

/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LendBookError {
    /// 既に貸出中（借りている本人からの再申請を含む）
    AlreadyOnLoan { holder: String },
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnBookError {
    /// 貸出中ではない
    AlreadyAvailable,
}

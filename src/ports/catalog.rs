use crate::domain::{BookRecord, RegisterBookError};

/// カタログポート
///
/// 書籍レコードの順序付きコレクション。タイトル（大文字小文字を区別しない）で一意。
/// 一覧系の操作はすべて登録順を保持し、状態を変更しない。
pub trait Catalog: Send + Sync {
    /// 書籍を末尾に追加する
    ///
    /// 正規化後のタイトルが既に存在する場合は`DuplicateTitle`を返し、何も変更しない。
    fn add(&mut self, book: BookRecord) -> Result<(), RegisterBookError>;

    /// タイトルの完全一致（大文字小文字を区別しない）で検索する
    fn find_by_title(&self, title: &str) -> Option<BookRecord>;

    /// 著者名の部分一致（大文字小文字を区別しない）で検索する
    ///
    /// 一致なしは空のVecを返す。
    fn find_by_author(&self, author: &str) -> Vec<BookRecord>;

    /// 書籍IDが一致するレコードを差し替える
    ///
    /// 貸出・返却で純粋関数が返した新しいレコードを保存するために使用される。
    /// 一致するレコードがなければ`false`を返す。
    fn update(&mut self, book: BookRecord) -> bool;

    /// タイトルが一致する書籍を削除する
    ///
    /// 貸出状態に関係なく削除する。元に戻す手段はない。
    fn remove(&mut self, title: &str) -> bool;

    fn list_all(&self) -> Vec<BookRecord>;

    /// 貸出可能な書籍のみ
    fn list_available(&self) -> Vec<BookRecord>;

    /// 貸出中の書籍のみ
    fn list_borrowed(&self) -> Vec<BookRecord>;

    fn count(&self) -> usize;
}

use crate::domain::{BookRecord, RegisterBookError, contains_ignore_case};
use crate::ports::catalog::Catalog as CatalogTrait;

/// Catalogのインメモリ実装
///
/// 登録順を保持するVecで、検索はすべて線形走査。
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<BookRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    fn position_of(&self, title: &str) -> Option<usize> {
        self.books.iter().position(|book| book.title.matches(title))
    }

    fn filtered(&self, predicate: impl Fn(&BookRecord) -> bool) -> Vec<BookRecord> {
        self.books
            .iter()
            .filter(|&book| predicate(book))
            .cloned()
            .collect()
    }
}

impl CatalogTrait for Catalog {
    fn add(&mut self, book: BookRecord) -> Result<(), RegisterBookError> {
        if self.position_of(book.title.as_str()).is_some() {
            return Err(RegisterBookError::DuplicateTitle);
        }
        self.books.push(book);
        Ok(())
    }

    fn find_by_title(&self, title: &str) -> Option<BookRecord> {
        self.position_of(title).map(|idx| self.books[idx].clone())
    }

    fn find_by_author(&self, author: &str) -> Vec<BookRecord> {
        self.filtered(|book| contains_ignore_case(&book.author, author))
    }

    fn update(&mut self, book: BookRecord) -> bool {
        match self.books.iter_mut().find(|b| b.book_id == book.book_id) {
            Some(slot) => {
                *slot = book;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, title: &str) -> bool {
        match self.position_of(title) {
            Some(idx) => {
                self.books.remove(idx);
                true
            }
            None => false,
        }
    }

    fn list_all(&self) -> Vec<BookRecord> {
        self.books.clone()
    }

    fn list_available(&self) -> Vec<BookRecord> {
        self.filtered(BookRecord::is_available)
    }

    fn list_borrowed(&self) -> Vec<BookRecord> {
        self.filtered(|book| !book.is_available())
    }

    fn count(&self) -> usize {
        self.books.len()
    }
}

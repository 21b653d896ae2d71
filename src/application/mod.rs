mod catalog_service;
mod errors;
mod lending_service;
mod library;

pub use catalog_service::{LibraryReport, find_book, register_book, remove_book, system_report};
pub use errors::{LibraryApplicationError, Result};
pub use lending_service::{BorrowOutcome, ReturnOutcome, borrow_book, return_book};
pub use library::Library;

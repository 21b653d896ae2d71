use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, book_history, borrow_book, get_book, list_books, list_waiting_requests,
    recent_history, register_book, remove_book, report, return_book, waiting_list_for_book,
    waiting_position,
};

/// Creates the API router with all library endpoints
///
/// Command endpoints (Write operations):
/// - POST /books - Register a book
/// - POST /books/:title/borrow - Borrow a book, or join its waiting list
/// - POST /books/:title/return - Return a book
/// - DELETE /books/:title - Remove a book from the catalog
///
/// Query endpoints (Read operations):
/// - GET /books - List books (status / author filters)
/// - GET /books/:title - Get a book by title
/// - GET /books/:title/waiting-list - Waiting list for a title
/// - GET /books/:title/waiting-list/:requester - Position of a requester
/// - GET /books/:title/history - History of a title
/// - GET /waiting-list - All pending requests
/// - GET /history - Recent history
/// - GET /report - System report
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Catalog
        .route("/books", post(register_book).get(list_books))
        .route("/books/:title", get(get_book).delete(remove_book))
        // Lending
        .route("/books/:title/borrow", post(borrow_book))
        .route("/books/:title/return", post(return_book))
        // Waiting list
        .route("/books/:title/waiting-list", get(waiting_list_for_book))
        .route(
            "/books/:title/waiting-list/:requester",
            get(waiting_position),
        )
        .route("/waiting-list", get(list_waiting_requests))
        // History and report
        .route("/books/:title/history", get(book_history))
        .route("/history", get(recent_history))
        .route("/report", get(report))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

use axum::body::Body;
use axum::http::{Request, StatusCode};
use library_catalog::api::handlers::AppState;
use library_catalog::api::router::create_router;
use library_catalog::api::types::*;
use library_catalog::application::{Library, LibraryReport};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// E2Eテスト用のヘルパー関数
// ============================================================================

/// E2Eテスト用のアプリケーションセットアップ
///
/// 空のインメモリ図書館と実際のAPIルーターを使用します。
fn setup_e2e_app() -> axum::Router {
    let app_state = Arc::new(AppState::new(Library::in_memory()));
    create_router(app_state)
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

async fn register(app: &axum::Router, title: &str, author: &str, year: i32) -> StatusCode {
    let (status, _) = send(
        app,
        "POST",
        "/books",
        Some(json!({ "title": title, "author": author, "publication_year": year })),
    )
    .await;
    status
}

async fn borrow(app: &axum::Router, title: &str, borrower: &str) -> (StatusCode, Vec<u8>) {
    send(
        app,
        "POST",
        &format!("/books/{}/borrow", title),
        Some(json!({ "borrower": borrower })),
    )
    .await
}

// ============================================================================
// E2Eテスト: 正常系フロー
// ============================================================================

#[tokio::test]
async fn test_e2e_health_check() {
    let app = setup_e2e_app();

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_e2e_full_lending_flow() {
    let app = setup_e2e_app();

    // Step 1: 書籍登録（POST /books）
    let (status, body) = send(
        &app,
        "POST",
        "/books",
        Some(json!({
            "title": "Memorias Postumas",
            "author": "Machado de Assis",
            "publication_year": 1881,
            "isbn": "978-0195101706",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let registered: BookRegisteredResponse = parse(&body);
    assert_eq!(registered.total_books, 1);
    assert_eq!(registered.book.status, "available");
    assert_eq!(registered.book.isbn.as_deref(), Some("978-0195101706"));

    // Step 2: 貸出（POST /books/:title/borrow）
    let (status, body) = borrow(&app, "memorias%20postumas", "Alice").await;
    assert_eq!(status, StatusCode::OK);
    let loaned: BorrowResponse = parse(&body);
    assert_eq!(loaned.outcome, "loaned");
    assert_eq!(loaned.position, None);

    // Step 3: 貸出中の書籍への申請は待機リストへ
    let (status, body) = borrow(&app, "Memorias%20Postumas", "Bob").await;
    assert_eq!(status, StatusCode::ACCEPTED);
    let queued: BorrowResponse = parse(&body);
    assert_eq!(queued.outcome, "queued");
    assert_eq!(queued.position, Some(1));

    // 借り手は変わらない
    let (status, body) = send(&app, "GET", "/books/Memorias%20Postumas", None).await;
    assert_eq!(status, StatusCode::OK);
    let book: BookResponse = parse(&body);
    assert_eq!(book.status, "on_loan");
    assert_eq!(book.holder.as_deref(), Some("Alice"));
    assert!(book.loaned_at.is_some());

    // Step 4: 返却（POST /books/:title/return）
    let (status, body) = send(&app, "POST", "/books/Memorias%20Postumas/return", None).await;
    assert_eq!(status, StatusCode::OK);
    let returned: ReturnResponse = parse(&body);
    assert_eq!(returned.notify.as_deref(), Some("Bob"));

    // 待機者に自動では貸し出さない
    let (_, body) = send(&app, "GET", "/books/Memorias%20Postumas", None).await;
    let book: BookResponse = parse(&body);
    assert_eq!(book.status, "available");
    assert_eq!(book.holder, None);

    // Step 5: 履歴（GET /history）
    let (status, body) = send(&app, "GET", "/history", None).await;
    assert_eq!(status, StatusCode::OK);
    let history: Vec<HistoryEntryResponse> = parse(&body);
    let kinds: Vec<_> = history.iter().map(|e| e.kind.as_str()).collect();
    assert_eq!(kinds, vec!["RETURN", "LOAN"]);
    assert!(history.iter().all(|e| e.participant == "Alice"));

    // Step 6: レポート（GET /report）
    let (status, body) = send(&app, "GET", "/report", None).await;
    assert_eq!(status, StatusCode::OK);
    let report: LibraryReport = parse(&body);
    assert_eq!(
        report,
        LibraryReport {
            total_books: 1,
            available_books: 1,
            borrowed_books: 0,
            waiting_requests: 0,
            history_entries: 2,
        }
    );
}

#[tokio::test]
async fn test_e2e_list_and_search_books() {
    let app = setup_e2e_app();
    register(&app, "Gabriela", "Jorge Amado", 1958).await;
    register(&app, "A Hora da Estrela", "Clarice Lispector", 1977).await;
    register(&app, "Capitaes da Areia", "Jorge Amado", 1937).await;
    borrow(&app, "Gabriela", "Alice").await;

    let titles = |body: &[u8]| -> Vec<String> {
        parse::<Vec<BookResponse>>(body)
            .into_iter()
            .map(|b| b.title)
            .collect()
    };

    let (status, body) = send(&app, "GET", "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        titles(&body),
        vec!["Gabriela", "A Hora da Estrela", "Capitaes da Areia"]
    );

    let (_, body) = send(&app, "GET", "/books?status=available", None).await;
    assert_eq!(titles(&body), vec!["A Hora da Estrela", "Capitaes da Areia"]);

    let (_, body) = send(&app, "GET", "/books?status=borrowed", None).await;
    assert_eq!(titles(&body), vec!["Gabriela"]);

    let (_, body) = send(&app, "GET", "/books?author=AMADO", None).await;
    assert_eq!(titles(&body), vec!["Gabriela", "Capitaes da Areia"]);

    let (_, body) = send(&app, "GET", "/books?author=Rosa", None).await;
    assert!(titles(&body).is_empty());
}

#[tokio::test]
async fn test_e2e_waiting_list_endpoints() {
    let app = setup_e2e_app();
    register(&app, "Vidas Secas", "Graciliano Ramos", 1938).await;
    register(&app, "Sao Bernardo", "Graciliano Ramos", 1934).await;
    borrow(&app, "Vidas%20Secas", "Alice").await;
    borrow(&app, "Sao%20Bernardo", "Alice").await;
    borrow(&app, "Vidas%20Secas", "Bob").await;
    borrow(&app, "Sao%20Bernardo", "Carol").await;
    borrow(&app, "Vidas%20Secas", "Dave").await;

    let (status, body) = send(&app, "GET", "/books/Vidas%20Secas/waiting-list", None).await;
    assert_eq!(status, StatusCode::OK);
    let queue: Vec<WaitRequestResponse> = parse(&body);
    let entries: Vec<_> = queue
        .iter()
        .map(|r| (r.position, r.requester.as_str()))
        .collect();
    assert_eq!(entries, vec![(Some(1), "Bob"), (Some(2), "Dave")]);

    let (_, body) = send(&app, "GET", "/books/Vidas%20Secas/waiting-list/dave", None).await;
    let position: PositionResponse = parse(&body);
    assert_eq!(position.position, 2);

    let (_, body) = send(&app, "GET", "/books/Vidas%20Secas/waiting-list/Carol", None).await;
    let position: PositionResponse = parse(&body);
    assert_eq!(position.position, 0);

    let (_, body) = send(&app, "GET", "/waiting-list", None).await;
    let all: Vec<WaitRequestResponse> = parse(&body);
    let requesters: Vec<_> = all.iter().map(|r| r.requester.as_str()).collect();
    assert_eq!(requesters, vec!["Bob", "Carol", "Dave"]);
    assert!(all.iter().all(|r| r.position.is_none()));
}

#[tokio::test]
async fn test_e2e_history_limit_and_per_title() {
    let app = setup_e2e_app();
    register(&app, "X", "a", 2000).await;
    register(&app, "Y", "b", 2000).await;
    borrow(&app, "X", "Alice").await;
    borrow(&app, "Y", "Bob").await;
    send(&app, "POST", "/books/X/return", None).await;

    let (_, body) = send(&app, "GET", "/history?limit=2", None).await;
    let recent: Vec<HistoryEntryResponse> = parse(&body);
    let summary: Vec<_> = recent
        .iter()
        .map(|e| (e.kind.as_str(), e.title.as_str()))
        .collect();
    assert_eq!(summary, vec![("RETURN", "X"), ("LOAN", "Y")]);

    let (_, body) = send(&app, "GET", "/history?limit=0", None).await;
    let all: Vec<HistoryEntryResponse> = parse(&body);
    assert_eq!(all.len(), 3);

    let (_, body) = send(&app, "GET", "/books/x/history", None).await;
    let for_x: Vec<HistoryEntryResponse> = parse(&body);
    assert_eq!(for_x.len(), 2);
    assert_eq!(for_x[0].kind, "RETURN");
}

// ============================================================================
// E2Eテスト: 異常系
// ============================================================================

#[tokio::test]
async fn test_e2e_duplicate_title_conflict() {
    let app = setup_e2e_app();
    assert_eq!(register(&app, "Iracema", "Jose de Alencar", 1865).await, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "POST",
        "/books",
        Some(json!({ "title": "IRACEMA", "author": "Other", "publication_year": 1900 })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "DUPLICATE_TITLE");
}

#[tokio::test]
async fn test_e2e_validation_errors() {
    let app = setup_e2e_app();

    assert_eq!(register(&app, "", "Author", 2000).await, StatusCode::BAD_REQUEST);
    assert_eq!(register(&app, "Title", "Author", 999).await, StatusCode::BAD_REQUEST);
    assert_eq!(register(&app, "Title", "Author", 2026).await, StatusCode::BAD_REQUEST);

    register(&app, "Title", "Author", 2000).await;
    let (status, body) = borrow(&app, "Title", "   ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "VALIDATION_ERROR");

    let (status, _) = send(&app, "GET", "/books?status=lost", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_e2e_not_found_and_already_available() {
    let app = setup_e2e_app();
    register(&app, "X", "a", 2000).await;

    let (status, _) = borrow(&app, "Missing", "Alice").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "POST", "/books/Missing/return", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/books/Missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "POST", "/books/X/return", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "ALREADY_AVAILABLE");

    // 失敗した操作は履歴に残らない
    let (_, body) = send(&app, "GET", "/history", None).await;
    let history: Vec<HistoryEntryResponse> = parse(&body);
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_e2e_remove_book() {
    let app = setup_e2e_app();
    register(&app, "X", "a", 2000).await;
    borrow(&app, "X", "Alice").await;
    borrow(&app, "X", "Bob").await;

    let (status, _) = send(&app, "DELETE", "/books/x", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", "/books/X", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/books/X", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 待機リストは残る
    let (_, body) = send(&app, "GET", "/waiting-list", None).await;
    let all: Vec<WaitRequestResponse> = parse(&body);
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_e2e_padded_title_addresses_same_book_everywhere() {
    let app = setup_e2e_app();
    register(&app, "X", "a", 2000).await;

    let (status, body) = borrow(&app, "%20X%20", "Alice").await;
    assert_eq!(status, StatusCode::OK);
    let loaned: BorrowResponse = parse(&body);
    assert_eq!(loaned.title, "X");

    let (status, body) = borrow(&app, "%20X", "Bob").await;
    assert_eq!(status, StatusCode::ACCEPTED);
    let queued: BorrowResponse = parse(&body);
    assert_eq!(queued.position, Some(1));

    let (status, body) = send(&app, "GET", "/books/%20X", None).await;
    assert_eq!(status, StatusCode::OK);
    let book: BookResponse = parse(&body);
    assert_eq!(book.holder.as_deref(), Some("Alice"));

    let (_, body) = send(&app, "GET", "/books/%20X/waiting-list", None).await;
    let queue: Vec<WaitRequestResponse> = parse(&body);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].requester, "Bob");

    let (_, body) = send(&app, "GET", "/books/%20X/waiting-list/%20Bob%20", None).await;
    let position: PositionResponse = parse(&body);
    assert_eq!(position.title, "X");
    assert_eq!(position.requester, "Bob");
    assert_eq!(position.position, 1);

    let (_, body) = send(&app, "GET", "/books/%20X/history", None).await;
    let history: Vec<HistoryEntryResponse> = parse(&body);
    assert_eq!(history.len(), 1);

    let (status, body) = send(&app, "POST", "/books/X%20/return", None).await;
    assert_eq!(status, StatusCode::OK);
    let returned: ReturnResponse = parse(&body);
    assert_eq!(returned.title, "X");
    assert_eq!(returned.notify.as_deref(), Some("Bob"));

    let (status, _) = send(&app, "DELETE", "/books/%20X", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", "/books/%20%20", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "VALIDATION_ERROR");
}

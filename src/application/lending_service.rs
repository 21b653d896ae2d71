use crate::domain::{
    self, DomainEvent, HistoryEntry, LendBookError, ReturnBookError, WaitRequest,
    commands::{BorrowBook, ReturnBook},
};

use super::library::Library;

/// 貸出申請の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowOutcome {
    /// 貸し出した
    Success,
    /// 貸出中のため待機リストに追加した（同じタイトル内での1始まりの順位）
    QueuedAtPosition(usize),
    /// タイトルがカタログに存在しない
    NotFound,
}

/// 返却の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// 返却した（待機者なし）
    Success,
    /// 返却した。待機リストの先頭だった利用者に知らせる必要がある
    ///
    /// 書籍は貸出可能のまま。この利用者への貸出は呼び出し側が改めて行う。
    NotifyTarget(String),
    /// 貸出中ではなかった
    AlreadyAvailable,
    /// タイトルがカタログに存在しない
    NotFound,
}

/// 書籍を借りる
///
/// 状態遷移：
/// - Available → OnLoan(借り手, 申請日時)。LOANを履歴に記録する
/// - OnLoan → 変更なし。申請者を待機リストに追加する（履歴には記録しない）
///
/// 借りている本人からの申請でも待機リストに追加する。
///
/// # 戻り値
/// 貸出結果。失敗も含めすべて呼び出し側で表示に使う。
pub fn borrow_book(library: &mut Library, cmd: BorrowBook) -> BorrowOutcome {
    // 1. カタログから書籍を取得
    let Some(book) = library.catalog.find_by_title(&cmd.title) else {
        tracing::debug!(title = %cmd.title, "Borrow requested for unknown title");
        return BorrowOutcome::NotFound;
    };

    // 2. ドメイン層の純粋関数を呼び出し
    match domain::book::lend_book(&book, &cmd.borrower, cmd.requested_at) {
        Ok((loaned_book, event)) => {
            // 3. カタログを更新してから履歴に記録
            if !library.catalog.update(loaned_book) {
                return BorrowOutcome::NotFound;
            }
            let event: DomainEvent = event.into();
            library.history.append(HistoryEntry::from(&event));

            tracing::info!(title = %book.title, borrower = %cmd.borrower, "Book loaned");
            BorrowOutcome::Success
        }
        Err(LendBookError::AlreadyOnLoan { holder }) => {
            // 3. 待機リストに追加
            library.waiting_list.push(WaitRequest::new(
                cmd.borrower.clone(),
                book.title.clone(),
                cmd.requested_at,
            ));
            let position = library
                .waiting_list
                .position_of(&cmd.borrower, book.title.as_str());

            tracing::info!(
                title = %book.title,
                requester = %cmd.borrower,
                holder = %holder,
                position,
                "Book on loan, requester queued"
            );
            BorrowOutcome::QueuedAtPosition(position)
        }
    }
}

/// 書籍を返却する
///
/// 状態遷移：
/// - OnLoan → Available。RETURNを履歴に記録し、待機リストから次の申請者を取り出す
/// - Available → 変更なし
///
/// 取り出した申請者への自動貸出は行わない。
pub fn return_book(library: &mut Library, cmd: ReturnBook) -> ReturnOutcome {
    // 1. カタログから書籍を取得
    let Some(book) = library.catalog.find_by_title(&cmd.title) else {
        tracing::debug!(title = %cmd.title, "Return requested for unknown title");
        return ReturnOutcome::NotFound;
    };

    // 2. ドメイン層の純粋関数を呼び出し
    let (returned_book, event) = match domain::book::return_book(&book, cmd.returned_at) {
        Ok(result) => result,
        Err(ReturnBookError::AlreadyAvailable) => {
            tracing::debug!(title = %book.title, "Return requested for available book");
            return ReturnOutcome::AlreadyAvailable;
        }
    };

    // 3. カタログを更新してから履歴に記録
    if !library.catalog.update(returned_book) {
        return ReturnOutcome::NotFound;
    }
    let event: DomainEvent = event.into();
    library.history.append(HistoryEntry::from(&event));

    tracing::info!(title = %book.title, "Book returned");

    // 4. 待機リストの先頭を取り出す
    match library.waiting_list.dequeue_next_for(book.title.as_str()) {
        Some(requester) => {
            tracing::info!(
                title = %book.title,
                requester = %requester,
                "Waiting requester to notify"
            );
            ReturnOutcome::NotifyTarget(requester)
        }
        None => ReturnOutcome::Success,
    }
}

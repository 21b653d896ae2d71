use crate::domain::{QueuedRequest, Title, WaitRequest};
use chrono::Utc;

/// 待機リストポート
///
/// 全タイトルの予約申請を1本のFIFO順で保持し、参照・取り出しはタイトル単位で行う。
/// 同じタイトルへの申請の順位は到着順のみで決まる。
///
/// タイトルの存在確認は呼び出し側の責務。書籍が削除されても申請は残る。
pub trait WaitingList: Send + Sync {
    /// 申請を末尾に追加する
    fn push(&mut self, request: WaitRequest);

    /// 現在時刻で申請を作成して末尾に追加する
    fn enqueue(&mut self, requester: &str, title: Title) {
        self.push(WaitRequest::new(requester, title, Utc::now()));
    }

    /// 指定タイトルの先頭の申請を取り出し、申請者名を返す
    ///
    /// 他のタイトルへの申請は飛ばし、残りの相対順序は保持する。
    fn dequeue_next_for(&mut self, title: &str) -> Option<String>;

    /// 指定タイトルの申請の中での1始まりの順位
    ///
    /// 申請がなければ0を返す。
    fn position_of(&self, requester: &str, title: &str) -> usize;

    /// 指定タイトルの申請を順位付きで返す
    fn list_for(&self, title: &str) -> Vec<QueuedRequest>;

    fn count_all(&self) -> usize;

    /// 全申請をFIFO順で返す
    fn list_all(&self) -> Vec<WaitRequest>;
}

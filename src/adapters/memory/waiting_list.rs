use crate::domain::{QueuedRequest, WaitRequest, normalize};
use crate::ports::waiting_list::WaitingList as WaitingListTrait;

/// WaitingListのインメモリ実装
///
/// 全タイトル共通の1本のVecに到着順で保持する。
/// タイトル単位の操作は先頭から走査して該当する申請だけを扱う。
#[derive(Debug, Default)]
pub struct WaitingList {
    requests: Vec<WaitRequest>,
}

impl WaitingList {
    pub fn new() -> Self {
        Self {
            requests: Vec::new(),
        }
    }

    fn requests_for<'a>(&'a self, title: &'a str) -> impl Iterator<Item = &'a WaitRequest> + 'a {
        self.requests.iter().filter(move |r| r.title.matches(title))
    }
}

impl WaitingListTrait for WaitingList {
    fn push(&mut self, request: WaitRequest) {
        self.requests.push(request);
    }

    fn dequeue_next_for(&mut self, title: &str) -> Option<String> {
        let idx = self.requests.iter().position(|r| r.title.matches(title))?;
        Some(self.requests.remove(idx).requester)
    }

    fn position_of(&self, requester: &str, title: &str) -> usize {
        let requester = normalize(requester);
        self.requests_for(title)
            .position(|r| normalize(&r.requester) == requester)
            .map_or(0, |idx| idx + 1)
    }

    fn list_for(&self, title: &str) -> Vec<QueuedRequest> {
        self.requests_for(title)
            .enumerate()
            .map(|(idx, request)| QueuedRequest {
                position: idx + 1,
                request: request.clone(),
            })
            .collect()
    }

    fn count_all(&self) -> usize {
        self.requests.len()
    }

    fn list_all(&self) -> Vec<WaitRequest> {
        self.requests.clone()
    }
}

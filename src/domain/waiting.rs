use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Title;

/// 待機リストへの予約申請
///
/// 待機リストが所有し、取り出された時点で破棄される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitRequest {
    pub requester: String,
    pub title: Title,
    pub requested_at: DateTime<Utc>,
}

impl WaitRequest {
    pub fn new(requester: impl Into<String>, title: Title, requested_at: DateTime<Utc>) -> Self {
        Self {
            requester: requester.into(),
            title,
            requested_at,
        }
    }
}

/// タイトルごとの待機順位付きの予約申請
///
/// 順位は同じタイトルへの申請の中での1始まりの到着順。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedRequest {
    pub position: usize,
    pub request: WaitRequest,
}

use crate::domain::HistoryEntry;
use crate::ports::history_log::HistoryLog as HistoryLogTrait;

/// HistoryLogのインメモリ実装
///
/// 追記順にVecへ保持し、問い合わせでは末尾から走査する。
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl HistoryLogTrait for HistoryLog {
    fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    fn recent(&self, limit: usize) -> Vec<HistoryEntry> {
        let take = if limit == 0 { self.entries.len() } else { limit };
        self.entries.iter().rev().take(take).cloned().collect()
    }

    fn for_title(&self, title: &str) -> Vec<HistoryEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|entry| entry.title.matches(title))
            .cloned()
            .collect()
    }

    fn count(&self) -> usize {
        self.entries.len()
    }
}

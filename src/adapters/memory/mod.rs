pub mod catalog;
pub mod history_log;
pub mod waiting_list;

pub use catalog::Catalog;
pub use history_log::HistoryLog;
pub use waiting_list::WaitingList;

pub mod catalog;
pub mod history_log;
pub mod waiting_list;

pub use catalog::*;
pub use history_log::*;
pub use waiting_list::*;

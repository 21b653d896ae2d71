pub mod book;
pub mod commands;
pub mod errors;
pub mod events;
pub mod history;
pub mod value_objects;
pub mod waiting;

pub use book::{BookRecord, BookStatus};
pub use errors::*;
pub use events::*;
pub use history::{HistoryEntry, OperationKind};
pub use value_objects::*;
pub use waiting::{QueuedRequest, WaitRequest};

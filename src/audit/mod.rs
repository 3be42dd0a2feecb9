pub mod logger;

pub use logger::HistoryLog;

pub mod notify;
pub mod time;

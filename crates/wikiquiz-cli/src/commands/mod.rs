pub mod config;
pub mod dispatch;
pub mod generate;
pub mod history;
pub mod show;
pub mod take;

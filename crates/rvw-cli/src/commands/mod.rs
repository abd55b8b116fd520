pub mod check;
pub mod config;
pub mod convert;
pub mod dispatch;
pub mod schema;

pub mod milestone;
pub mod session;

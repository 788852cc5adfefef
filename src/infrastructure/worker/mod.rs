//! Worker Layer - Background Processing
//!
//! 实现 SessionGc，回收空闲会话

mod session_gc;

pub use session_gc::{SessionGc, SessionGcConfig};

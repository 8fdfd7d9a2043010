//! State Management
//!
//! In-memory session state shared across pages.

pub mod session;

pub use session::{authenticate, provide_session, use_session, Session, UserProfile};

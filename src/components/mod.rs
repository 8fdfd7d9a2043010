//! UI Components
//!
//! Reusable Leptos components shared by the landing and dashboard pages.

pub mod backdrop;
pub mod nav;
pub mod shell;

pub use backdrop::Backdrop;
pub use nav::Navbar;
pub use shell::PageShell;

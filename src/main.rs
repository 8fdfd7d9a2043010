//! AquaIntel Marine Research Platform
//!
//! Marketing and demo frontend for a marine biodiversity research platform,
//! built with Leptos (WASM).
//!
//! # Features
//!
//! - Landing page with mock sign-in / registration
//! - Dashboard pages backed by static fixture data
//! - Session-gated routing
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no backend: the session lives in memory and every
//! page renders hardcoded sample content.

use leptos::*;

mod app;
mod browser;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

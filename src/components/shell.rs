//! Page Shell
//!
//! The shared layout wrapping every dashboard page: backdrop, navbar, page
//! title/subtitle, content slot, footer. One configurable component instead
//! of a copy per page.

use leptos::*;

use crate::components::{Backdrop, Navbar};

/// Dashboard page layout
#[component]
pub fn PageShell(
    /// Navigation id of the hosting page, used to highlight its link
    active: &'static str,
    /// Page heading
    title: &'static str,
    /// Line under the heading
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-b from-blue-950 via-slate-900 to-blue-950 text-white flex flex-col">
            <Backdrop />
            <Navbar active=active />

            <main class="relative z-10 flex-1 container mx-auto px-4 py-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold">{title}</h1>
                    <p class="text-blue-300 mt-1">{subtitle}</p>
                </div>

                {children()}
            </main>

            <Footer />
        </div>
    }
}

/// Static site footer
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="relative z-10 bg-blue-950/80 border-t border-blue-800 py-4 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-blue-300">
                <p>"© 2025 AquaIntel Marine Research Platform. All rights reserved."</p>
                <div class="flex items-center space-x-4">
                    <button class="hover:text-white transition-colors">"Privacy Policy"</button>
                    <button class="hover:text-white transition-colors">"Terms of Service"</button>
                    <button class="hover:text-white transition-colors">"Support"</button>
                </div>
            </div>
        </footer>
    }
}

//! Decorative Backdrop
//!
//! Floating particles and wave layers behind every page. Purely cosmetic.

use leptos::*;

/// Animated ocean backdrop
#[component]
pub fn Backdrop() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0 overflow-hidden pointer-events-none">
            // Floating particles
            {(0..9).map(|i| view! {
                <div
                    class="particle absolute w-2 h-2 bg-cyan-400/30 rounded-full animate-float"
                    style=format!("left: {}%; animation-delay: {}s", (i + 1) * 10, i as f64 * 0.5)
                />
            }).collect_view()}

            // Wave layers
            <div class="ocean-animation absolute inset-x-0 bottom-0 h-48 opacity-10">
                <div class="wave" style="animation-delay: 0s" />
                <div class="wave" style="animation-delay: -2s" />
                <div class="wave" style="animation-delay: -4s" />
            </div>
        </div>
    }
}

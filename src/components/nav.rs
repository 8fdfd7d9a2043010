//! Navigation Component
//!
//! Header navigation bar with brand, page links, and the signed-in user
//! dropdown. The dropdown's outside-click listener is registered only while
//! the menu is open and removed when it closes or the component unmounts.

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use crate::browser;
use crate::state::{use_session, UserProfile};

/// Static navigation entry. Fixed at compile time.
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem { id: "home", label: "Home", path: "/home", icon: "🏠" },
    NavItem { id: "features", label: "Features", path: "/features", icon: "⚡" },
    NavItem { id: "research", label: "Research", path: "/research", icon: "🔬" },
    NavItem { id: "data-hub", label: "Data Hub", path: "/data-hub", icon: "📊" },
    NavItem { id: "analytics", label: "Analytics", path: "/analytics", icon: "📈" },
];

/// Navigation header component. `active` is the hosting page's id ("" on the
/// landing page, where no link is highlighted).
#[component]
pub fn Navbar(active: &'static str) -> impl IntoView {
    let session = use_session();

    view! {
        <nav class="relative z-20 bg-blue-950/80 backdrop-blur border-b border-blue-800">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href="/" class="flex items-center space-x-2">
                        <span class="text-2xl">"🌊"</span>
                        <span class="text-xl font-bold text-white tracking-wide">"AquaIntel"</span>
                    </A>

                    <div class="flex items-center space-x-6">
                        // Page links
                        <div class="flex items-center space-x-1">
                            {NAV_ITEMS.iter().map(|item| {
                                let is_active = item.id == active;
                                view! {
                                    <A
                                        href=item.path
                                        class=if is_active {
                                            "px-4 py-2 rounded-lg bg-blue-800 text-white"
                                        } else {
                                            "px-4 py-2 rounded-lg text-blue-200 hover:text-white hover:bg-blue-800/60 transition-colors"
                                        }
                                    >
                                        <span class="mr-1">{item.icon}</span>
                                        {item.label}
                                    </A>
                                }
                            }).collect_view()}
                        </div>

                        // User dropdown, only with an active session
                        {move || session.user().map(|user| view! { <UserMenu user=user /> })}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Signed-in user control with dropdown menu.
#[component]
fn UserMenu(user: UserProfile) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let open = create_rw_signal(false);

    // Register the outside-click listener while the menu is open; tear it
    // down when the menu closes or the component is cleaned up.
    let listener: StoredValue<Option<WindowListenerHandle>> = store_value(None);
    create_effect(move |_| {
        if open.get() {
            let handle = window_event_listener(ev::click, move |ev| {
                let inside = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .map(|el| matches!(el.closest(".user-menu"), Ok(Some(_))))
                    .unwrap_or(false);
                if !inside {
                    open.set(false);
                }
            });
            listener.set_value(Some(handle));
        } else if let Some(handle) = listener.try_update_value(|l| l.take()).flatten() {
            handle.remove();
        }
    });
    on_cleanup(move || {
        if let Some(handle) = listener.try_update_value(|l| l.take()).flatten() {
            handle.remove();
        }
    });

    let sign_out = move |_| {
        open.set(false);
        session.logout();
        navigate(
            "/",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    let greeting = format!("Hello, {}", user.first_name);
    let initials = user.initials();
    let full_name = format!("{} {}", user.first_name, user.last_name);
    let email = user.email;

    view! {
        <div class="user-menu relative">
            // Toggle control
            <div
                class="flex items-center space-x-2 cursor-pointer select-none"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="text-blue-100 text-sm">{greeting}</span>
                <div class="w-8 h-8 rounded-full bg-gradient-to-br from-cyan-500 to-blue-600 flex items-center justify-center text-sm font-bold">
                    {initials.clone()}
                </div>
                <span class=move || {
                    if open.get() { "text-xs text-blue-300 rotate-180 transition-transform" }
                    else { "text-xs text-blue-300 transition-transform" }
                }>"▼"</span>
            </div>

            // Dropdown
            {move || open.get().then(|| view! {
                <div class="absolute right-0 mt-2 w-64 bg-blue-950 border border-blue-800 rounded-xl shadow-xl py-2 z-50">
                    // Identity header
                    <div class="flex items-center space-x-3 px-4 py-3">
                        <div class="w-10 h-10 rounded-full bg-gradient-to-br from-cyan-500 to-blue-600 flex items-center justify-center font-bold">
                            {initials.clone()}
                        </div>
                        <div class="min-w-0">
                            <div class="font-medium truncate">{full_name.clone()}</div>
                            <div class="text-sm text-blue-300 truncate">{email.clone()}</div>
                        </div>
                    </div>

                    <MenuDivider />
                    <MenuLink open=open path="/home" icon="🏠" label="Dashboard" />
                    <MenuLink open=open path="/profile" icon="👤" label="My Profile" />
                    <MenuLink open=open path="/settings" icon="⚙️" label="Account Settings" />
                    <MenuLink open=open path="/research" icon="📁" label="My Projects" />
                    <MenuLink open=open path="/data-hub" icon="🗄️" label="My Data" />

                    <MenuDivider />
                    <MenuAlert open=open icon="❓" label="Help & Support" message="Help & Support coming soon!" />
                    <MenuAlert open=open icon="📚" label="Documentation" message="Documentation coming soon!" />

                    <MenuDivider />
                    <button
                        class="w-full flex items-center space-x-2 px-4 py-2 text-left text-red-300 hover:bg-red-900/30 transition-colors"
                        on:click=sign_out.clone()
                    >
                        <span>"🚪"</span>
                        <span>"Sign Out"</span>
                    </button>
                </div>
            })}
        </div>
    }
}

/// Dropdown entry that navigates and closes the menu.
#[component]
fn MenuLink(
    open: RwSignal<bool>,
    path: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div on:click=move |_| open.set(false)>
            <A
                href=path
                class="flex items-center space-x-2 px-4 py-2 text-blue-100 hover:bg-blue-800/60 transition-colors"
            >
                <span>{icon}</span>
                <span>{label}</span>
            </A>
        </div>
    }
}

/// Dropdown entry for features that only show a placeholder alert.
#[component]
fn MenuAlert(
    open: RwSignal<bool>,
    icon: &'static str,
    label: &'static str,
    message: &'static str,
) -> impl IntoView {
    view! {
        <button
            class="w-full flex items-center space-x-2 px-4 py-2 text-left text-blue-100 hover:bg-blue-800/60 transition-colors"
            on:click=move |_| {
                open.set(false);
                browser::alert(message);
            }
        >
            <span>{icon}</span>
            <span>{label}</span>
        </button>
    }
}

/// Thin separator line inside the dropdown.
#[component]
fn MenuDivider() -> impl IntoView {
    view! { <div class="my-2 border-t border-blue-800" /> }
}

//! App Root Component
//!
//! Routing and session gating. The gate is a pure function of the current
//! path and the session snapshot; one `Protected` wrapper applies it to
//! every dashboard route, so there is a single routing policy rather than a
//! per-page copy.

use leptos::*;
use leptos_router::*;

use crate::pages::{Analytics, DataHub, Features, Home, Landing, Profile, Research, Settings};
use crate::state::{provide_session, use_session};

/// Paths that require an authenticated session.
const DASHBOARD_PATHS: [&str; 7] = [
    "/home",
    "/features",
    "/research",
    "/data-hub",
    "/analytics",
    "/profile",
    "/settings",
];

/// Where a visit to `path` should be redirected, if anywhere.
///
/// - `/` always renders the landing view.
/// - Dashboard paths render only for an authenticated session, otherwise
///   they redirect to `/`.
/// - Unknown paths redirect to `/home` when authenticated, else `/`.
pub fn redirect_target(path: &str, authenticated: bool) -> Option<&'static str> {
    if path == "/" {
        return None;
    }
    if DASHBOARD_PATHS.contains(&path) {
        return if authenticated { None } else { Some("/") };
    }
    Some(if authenticated { "/home" } else { "/" })
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide session state to all components
    provide_session();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Landing />
                <Route path="/home" view=|| view! { <Protected><Home /></Protected> } />
                <Route path="/features" view=|| view! { <Protected><Features /></Protected> } />
                <Route path="/research" view=|| view! { <Protected><Research /></Protected> } />
                <Route path="/data-hub" view=|| view! { <Protected><DataHub /></Protected> } />
                <Route path="/analytics" view=|| view! { <Protected><Analytics /></Protected> } />
                <Route path="/profile" view=|| view! { <Protected><Profile /></Protected> } />
                <Route path="/settings" view=|| view! { <Protected><Settings /></Protected> } />
                <Route path="/*any" view=Fallback />
            </Routes>
        </Router>
    }
}

/// Gate wrapper for dashboard routes. Renders its children for an
/// authenticated session and redirects to the landing page otherwise.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();

    view! {
        {move || {
            let path = location.pathname.get();
            match redirect_target(&path, session.is_authenticated()) {
                Some(target) => view! { <Redirect path=target /> }.into_view(),
                None => children().into_view(),
            }
        }}
    }
}

/// Catch-all route: unknown paths go to the dashboard when signed in,
/// otherwise back to the landing page.
#[component]
fn Fallback() -> impl IntoView {
    let session = use_session();
    let target = if session.is_authenticated() { "/home" } else { "/" };

    view! { <Redirect path=target /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_never_redirects() {
        assert_eq!(redirect_target("/", false), None);
        assert_eq!(redirect_target("/", true), None);
    }

    #[test]
    fn dashboard_paths_require_a_session() {
        for path in DASHBOARD_PATHS {
            assert_eq!(redirect_target(path, false), Some("/"), "path {path}");
            assert_eq!(redirect_target(path, true), None, "path {path}");
        }
    }

    #[test]
    fn unknown_paths_redirect_by_session() {
        for path in ["/nope", "/home/extra", "/Profile", "/data_hub", "/a/b/c"] {
            assert_eq!(redirect_target(path, true), Some("/home"), "path {path}");
            assert_eq!(redirect_target(path, false), Some("/"), "path {path}");
        }
    }
}

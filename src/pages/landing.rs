//! Landing Page
//!
//! Marketing hero, feature-card grid, and the mock sign-in / registration
//! forms. A successful submit populates the session and navigates to the
//! dashboard; with an active session the form column shows a signed-in
//! panel instead.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;

use crate::browser;
use crate::components::{Backdrop, Navbar};
use crate::state::{authenticate, use_session, UserProfile};

/// Simulated network latency for the mock auth flow, in milliseconds.
const AUTH_DELAY_MS: u32 = 1_500;

/// Which form the auth column shows. Login is the initial state.
#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    Register,
}

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let mode = create_rw_signal(AuthMode::Login);

    // Transient form state, shared by both forms and discarded on unmount
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let first_name = create_rw_signal(String::new());
    let last_name = create_rw_signal(String::new());
    let institution = create_rw_signal(String::new());
    let loading = create_rw_signal(false);

    // Pending auth delay. Dropping the handle cancels the callback, so
    // unmounting mid-delay cannot update a destroyed view.
    let pending: StoredValue<Option<Timeout>> = store_value(None);
    on_cleanup(move || pending.set_value(None));

    let on_login = {
        let navigate = navigate.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            loading.set(true);

            let navigate = navigate.clone();
            let timeout = Timeout::new(AUTH_DELAY_MS, move || {
                loading.set(false);
                match authenticate(&email.get_untracked(), &password.get_untracked()) {
                    Some(profile) => {
                        session.login(profile);
                        navigate("/home", Default::default());
                    }
                    None => browser::alert("Invalid credentials. Try demo@marine.org / demo123"),
                }
            });
            pending.set_value(Some(timeout));
        }
    };

    let on_register = {
        let navigate = navigate.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            loading.set(true);

            let navigate = navigate.clone();
            let timeout = Timeout::new(AUTH_DELAY_MS, move || {
                loading.set(false);
                // Every submission becomes a fresh account; there are no
                // uniqueness checks against the fixture records
                let profile = UserProfile {
                    email: email.get_untracked(),
                    password: password.get_untracked(),
                    first_name: first_name.get_untracked(),
                    last_name: last_name.get_untracked(),
                    institution: institution.get_untracked(),
                };
                session.login(profile);
                navigate("/home", Default::default());
            });
            pending.set_value(Some(timeout));
        }
    };

    let sign_out = move |_| {
        session.logout();
        mode.set(AuthMode::Login);
        email.set(String::new());
        password.set(String::new());
        first_name.set(String::new());
        last_name.set(String::new());
        institution.set(String::new());
    };

    let on_login = Callback::new(on_login);
    let on_register = Callback::new(on_register);
    let sign_out = Callback::new(sign_out);

    view! {
        <div class="min-h-screen bg-gradient-to-b from-blue-950 via-slate-900 to-blue-950 text-white">
            <Backdrop />
            <Navbar active="" />

            <div class="relative z-10 container mx-auto px-4 py-12 grid lg:grid-cols-5 gap-12">
                // Hero and feature grid
                <div class="lg:col-span-3">
                    <h1 class="text-4xl font-bold leading-tight">
                        {move || match session.user() {
                            Some(user) => format!("Welcome Back, {}!", user.first_name),
                            None => "Marine Biodiversity Intelligence".to_string(),
                        }}
                    </h1>
                    <p class="text-blue-200 mt-4 leading-relaxed">
                        {move || {
                            if session.is_authenticated() {
                                "Continue your marine research journey with advanced AI-powered tools and analytics."
                            } else {
                                "At the Marine Data Platform, our mission is to unify oceanography, taxonomy, \
                                 and molecular biology through AI-driven analytics. We aim to empower researchers, \
                                 educators, and institutions with accessible, intelligent tools that accelerate \
                                 marine discoveries, promote sustainable ecosystem management, and foster global \
                                 collaboration for the protection of our oceans."
                            }
                        }}
                    </p>

                    <div class="grid sm:grid-cols-2 gap-4 mt-8">
                        {move || feature_entries(session.is_authenticated())
                            .into_iter()
                            .map(|entry| view! { <FeatureCard entry=entry /> })
                            .collect_view()}
                    </div>
                </div>

                // Auth column
                <div class="lg:col-span-2">
                    {move || {
                        if session.is_authenticated() {
                            view! { <SignedInPanel sign_out=sign_out /> }.into_view()
                        } else {
                            match mode.get() {
                                AuthMode::Login => view! {
                                    <LoginForm
                                        email=email
                                        password=password
                                        loading=loading
                                        mode=mode
                                        on_submit=on_login
                                    />
                                }.into_view(),
                                AuthMode::Register => view! {
                                    <RegisterForm
                                        email=email
                                        password=password
                                        first_name=first_name
                                        last_name=last_name
                                        institution=institution
                                        loading=loading
                                        mode=mode
                                        on_submit=on_register
                                    />
                                }.into_view(),
                            }
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

/// Badge shown on selected feature cards.
#[derive(Clone, Copy, PartialEq)]
enum Badge {
    New,
    Pro,
}

#[derive(Clone)]
struct FeatureEntry {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    badge: Option<Badge>,
    path: &'static str,
}

/// Feature cards for the hero grid. Signed-in visitors see the full set.
fn feature_entries(authenticated: bool) -> Vec<FeatureEntry> {
    let mut entries = vec![
        FeatureEntry {
            icon: "🐠",
            title: "Species Classification",
            description: "AI-powered identification and taxonomy",
            badge: None,
            path: "/features",
        },
        FeatureEntry {
            icon: "🌊",
            title: "Ocean Analytics",
            description: "Environmental parameter correlation",
            badge: None,
            path: "/analytics",
        },
    ];

    if authenticated {
        entries.extend([
            FeatureEntry {
                icon: "📡",
                title: "Real-time Monitoring",
                description: "Live data from ocean sensor networks",
                badge: Some(Badge::New),
                path: "/analytics",
            },
            FeatureEntry {
                icon: "🤖",
                title: "Predictive Models",
                description: "AI-driven ecosystem forecasting",
                badge: Some(Badge::Pro),
                path: "/analytics",
            },
            FeatureEntry {
                icon: "💻",
                title: "Jupyter Workspace",
                description: "Cloud-based research environment",
                badge: None,
                path: "/research",
            },
            FeatureEntry {
                icon: "🗄️",
                title: "Data Archives",
                description: "50+ years of marine research data",
                badge: None,
                path: "/data-hub",
            },
            FeatureEntry {
                icon: "🔬",
                title: "Lab Integration",
                description: "Connect your lab instruments",
                badge: Some(Badge::New),
                path: "/research",
            },
            FeatureEntry {
                icon: "🌐",
                title: "Global Collaboration",
                description: "Share insights with researchers worldwide",
                badge: None,
                path: "/research",
            },
        ]);
    } else {
        entries.extend([
            FeatureEntry {
                icon: "🧬",
                title: "Molecular Data",
                description: "eDNA and genetic analysis tools",
                badge: None,
                path: "/data-hub",
            },
            FeatureEntry {
                icon: "📊",
                title: "Visualization",
                description: "Interactive dashboards and maps",
                badge: None,
                path: "/analytics",
            },
        ]);
    }

    entries
}

/// Decorative feature card linking into the platform.
#[component]
fn FeatureCard(entry: FeatureEntry) -> impl IntoView {
    view! {
        <A
            href=entry.path
            class="block bg-blue-900/40 border border-blue-800 rounded-xl p-5 hover:border-cyan-500 hover:bg-blue-900/60 transition-colors"
        >
            <div class="text-3xl">{entry.icon}</div>
            <h3 class="font-semibold text-cyan-300 mt-2">
                {entry.title}
                {entry.badge.map(|badge| match badge {
                    Badge::New => view! {
                        <span class="ml-2 text-xs font-bold bg-green-600 text-white px-2 py-0.5 rounded-full">"NEW"</span>
                    },
                    Badge::Pro => view! {
                        <span class="ml-2 text-xs font-bold bg-amber-500 text-white px-2 py-0.5 rounded-full">"PRO"</span>
                    },
                })}
            </h3>
            <p class="text-sm text-blue-200 mt-1">{entry.description}</p>
        </A>
    }
}

/// Sign-in form (initial auth view).
#[component]
fn LoginForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    loading: RwSignal<bool>,
    mode: RwSignal<AuthMode>,
    on_submit: Callback<ev::SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="bg-blue-900/40 border border-blue-800 rounded-2xl p-8">
            <h2 class="text-2xl font-semibold">"Welcome"</h2>
            <p class="text-blue-300 text-sm mt-1 mb-6">"Sign in to access your marine research tools"</p>

            <form on:submit=move |ev| on_submit.call(ev)>
                <TextField
                    label="Email Address"
                    id="login-email"
                    input_type="email"
                    placeholder="researcher@marine.org"
                    value=email
                />
                <TextField
                    label="Password"
                    id="login-password"
                    input_type="password"
                    placeholder="••••••••"
                    value=password
                />

                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="w-full py-3 bg-cyan-600 hover:bg-cyan-500 disabled:bg-blue-800 rounded-lg font-medium transition-colors"
                >
                    {move || if loading.get() { "Signing In..." } else { "Sign In to Platform" }}
                </button>
            </form>

            <p class="text-xs text-blue-400 mt-3 text-center">"Demo: demo@marine.org / demo123"</p>

            <div class="flex items-center my-6 text-blue-400 text-sm">
                <div class="flex-1 border-t border-blue-800" />
                <span class="px-3">"or"</span>
                <div class="flex-1 border-t border-blue-800" />
            </div>

            <p class="text-sm text-center text-blue-200">
                "New to marine research? "
                <button
                    type="button"
                    class="text-cyan-400 font-semibold hover:underline"
                    on:click=move |_| mode.set(AuthMode::Register)
                >
                    "Create account"
                </button>
            </p>
        </div>
    }
}

/// Registration form. Submission always succeeds; the submitted fields
/// become the session profile as-is.
#[component]
fn RegisterForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    institution: RwSignal<String>,
    loading: RwSignal<bool>,
    mode: RwSignal<AuthMode>,
    on_submit: Callback<ev::SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="bg-blue-900/40 border border-blue-800 rounded-2xl p-8">
            <h2 class="text-2xl font-semibold">"Join AquaIntel"</h2>
            <p class="text-blue-300 text-sm mt-1 mb-6">"Create your account to start marine research"</p>

            <form on:submit=move |ev| on_submit.call(ev)>
                <div class="grid grid-cols-2 gap-4">
                    <TextField
                        label="First Name"
                        id="register-first-name"
                        input_type="text"
                        placeholder="Dr. Jane"
                        value=first_name
                    />
                    <TextField
                        label="Last Name"
                        id="register-last-name"
                        input_type="text"
                        placeholder="Smith"
                        value=last_name
                    />
                </div>
                <TextField
                    label="Institution"
                    id="register-institution"
                    input_type="text"
                    placeholder="Marine Research Institute"
                    value=institution
                />
                <TextField
                    label="Email Address"
                    id="register-email"
                    input_type="email"
                    placeholder="researcher@institution.edu"
                    value=email
                />
                <TextField
                    label="Password"
                    id="register-password"
                    input_type="password"
                    placeholder="Create a strong password"
                    value=password
                />

                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="w-full py-3 bg-cyan-600 hover:bg-cyan-500 disabled:bg-blue-800 rounded-lg font-medium transition-colors"
                >
                    {move || if loading.get() { "Creating Account..." } else { "Create Account" }}
                </button>
            </form>

            <div class="flex items-center my-6 text-blue-400 text-sm">
                <div class="flex-1 border-t border-blue-800" />
                <span class="px-3">"or"</span>
                <div class="flex-1 border-t border-blue-800" />
            </div>

            <p class="text-sm text-center text-blue-200">
                "Already have an account? "
                <button
                    type="button"
                    class="text-cyan-400 font-semibold hover:underline"
                    on:click=move |_| mode.set(AuthMode::Login)
                >
                    "Sign in here"
                </button>
            </p>
        </div>
    }
}

/// Labeled form input bound to a signal.
#[component]
fn TextField(
    label: &'static str,
    id: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label for=id class="block text-sm text-blue-300 mb-1">{label}</label>
            <input
                type=input_type
                id=id
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                required
                class="w-full bg-blue-950/60 rounded-lg px-4 py-3 border border-blue-800
                       focus:border-cyan-500 focus:outline-none placeholder:text-blue-500"
            />
        </div>
    }
}

/// Card shown in place of the forms once a session exists.
#[component]
fn SignedInPanel(sign_out: Callback<ev::MouseEvent>) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let go = move |path: &'static str| {
        let navigate = navigate.clone();
        move |_| navigate(path, Default::default())
    };

    view! {
        {move || session.user().map(|user| view! {
            <div class="bg-blue-900/40 border border-blue-800 rounded-2xl p-8">
                // Identity header
                <div class="flex items-center space-x-4">
                    <div class="w-14 h-14 rounded-full bg-gradient-to-br from-cyan-500 to-blue-600 flex items-center justify-center text-xl font-bold">
                        {user.initials()}
                    </div>
                    <div class="min-w-0">
                        <h2 class="text-xl font-semibold">{format!("Welcome back, {}!", user.first_name)}</h2>
                        <p class="text-sm text-blue-300 truncate">{user.institution.clone()}</p>
                        <p class="text-sm text-blue-400 truncate">{user.email.clone()}</p>
                    </div>
                </div>

                // Stat pair
                <div class="grid grid-cols-2 gap-4 mt-6">
                    <div class="bg-blue-950/60 rounded-lg p-4 text-center">
                        <div class="text-2xl font-bold text-cyan-300">"127"</div>
                        <div class="text-xs text-blue-300 mt-1">"Datasets Analyzed"</div>
                    </div>
                    <div class="bg-blue-950/60 rounded-lg p-4 text-center">
                        <div class="text-2xl font-bold text-cyan-300">"43"</div>
                        <div class="text-xs text-blue-300 mt-1">"Species Identified"</div>
                    </div>
                </div>

                // Quick actions
                <h3 class="font-semibold mt-6 mb-3">"Quick Actions"</h3>
                <div class="space-y-2">
                    <button
                        class="w-full py-2 bg-cyan-600 hover:bg-cyan-500 rounded-lg font-medium transition-colors"
                        on:click=go("/analytics")
                    >
                        "📊 New Analysis"
                    </button>
                    <button
                        class="w-full py-2 bg-blue-800 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                        on:click=go("/research")
                    >
                        "📁 My Projects"
                    </button>
                    <button
                        class="w-full py-2 bg-blue-800 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                        on:click=go("/settings")
                    >
                        "⚙️ Settings"
                    </button>
                </div>

                // Recent activity
                <h4 class="font-semibold mt-6 mb-3">"Recent Activity"</h4>
                <div class="space-y-3 text-sm">
                    <div class="flex items-start space-x-3">
                        <span class="text-xl">"🐠"</span>
                        <div>
                            <p>"Analyzed coral reef biodiversity"</p>
                            <p class="text-blue-400 text-xs">"2 hours ago"</p>
                        </div>
                    </div>
                    <div class="flex items-start space-x-3">
                        <span class="text-xl">"🌊"</span>
                        <div>
                            <p>"Uploaded ocean temperature data"</p>
                            <p class="text-blue-400 text-xs">"1 day ago"</p>
                        </div>
                    </div>
                </div>

                <button
                    class="w-full mt-6 py-3 bg-red-900/60 hover:bg-red-800 text-red-200 rounded-lg font-medium transition-colors"
                    on:click=move |ev| sign_out.call(ev)
                >
                    "Sign Out"
                </button>
            </div>
        })}
    }
}

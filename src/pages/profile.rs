//! Profile Page
//!
//! Editable copy of the fixture researcher profile. Fields are read-only
//! until Edit Profile toggles editing; Save shows a confirmation alert and
//! nothing is persisted.

use leptos::*;

use crate::browser;
use crate::components::PageShell;

/// Local editable copy of the fixture profile record. Owned by this view;
/// independent of the session beyond its display strings.
#[derive(Clone, Copy)]
struct ProfileForm {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    location: RwSignal<String>,
    institution: RwSignal<String>,
    department: RwSignal<String>,
    position: RwSignal<String>,
    research_interests: RwSignal<String>,
    bio: RwSignal<String>,
    orcid: RwSignal<String>,
    google_scholar: RwSignal<String>,
}

impl ProfileForm {
    fn from_fixture() -> Self {
        Self {
            first_name: create_rw_signal("Dr. Sarah".to_string()),
            last_name: create_rw_signal("Johnson".to_string()),
            email: create_rw_signal("demo@marine.org".to_string()),
            phone: create_rw_signal("+1 (555) 123-4567".to_string()),
            location: create_rw_signal("Woods Hole, MA".to_string()),
            institution: create_rw_signal("Marine Research Institute".to_string()),
            department: create_rw_signal("Marine Biology".to_string()),
            position: create_rw_signal("Senior Research Scientist".to_string()),
            research_interests: create_rw_signal(
                "Coral Reef Ecology, Marine Biodiversity, Climate Change Impact".to_string(),
            ),
            bio: create_rw_signal(
                "Marine biologist specializing in coral reef ecosystems and biodiversity \
                 conservation with over 15 years of research experience."
                    .to_string(),
            ),
            orcid: create_rw_signal("0000-0002-1825-0097".to_string()),
            google_scholar: create_rw_signal("scholar.google.com/citations?user=example".to_string()),
        }
    }
}

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let form = ProfileForm::from_fixture();
    let editing = create_rw_signal(false);

    let save = move |_| {
        editing.set(false);
        browser::alert("Profile updated successfully!");
    };

    view! {
        <PageShell
            active=""
            title="My Profile"
            subtitle="Manage your personal information and research profile"
        >
            <div class="max-w-4xl mx-auto space-y-6">
                // Header card
                <div class="flex items-center space-x-6 bg-blue-900/40 border border-blue-800 rounded-xl p-6">
                    <div class="w-24 h-24 rounded-full bg-gradient-to-br from-cyan-500 to-blue-600 flex items-center justify-center text-4xl font-bold">
                        "S"
                    </div>
                    <div>
                        <h2 class="text-2xl font-semibold">
                            {move || format!("{} {}", form.first_name.get(), form.last_name.get())}
                        </h2>
                        <p class="text-blue-300">{move || form.position.get()}</p>
                        <p class="text-blue-300">{move || form.institution.get()}</p>
                        <button
                            class="mt-3 px-4 py-2 bg-cyan-600 hover:bg-cyan-500 rounded-lg text-sm font-medium transition-colors"
                            on:click=move |_| editing.update(|e| *e = !*e)
                        >
                            {move || if editing.get() { "Cancel" } else { "Edit Profile" }}
                        </button>
                    </div>
                </div>

                // Personal information
                <section class="bg-blue-900/40 border border-blue-800 rounded-xl p-6">
                    <h3 class="text-lg font-semibold text-cyan-300 border-b border-blue-800 pb-3 mb-4">
                        "Personal Information"
                    </h3>
                    <div class="grid md:grid-cols-2 gap-4">
                        <Field label="First Name" value=form.first_name editing=editing />
                        <Field label="Last Name" value=form.last_name editing=editing />
                    </div>
                    <div class="space-y-4 mt-4">
                        <Field label="Email" value=form.email editing=editing />
                        <Field label="Phone" value=form.phone editing=editing />
                        <Field label="Location" value=form.location editing=editing />
                    </div>
                </section>

                // Professional information
                <section class="bg-blue-900/40 border border-blue-800 rounded-xl p-6">
                    <h3 class="text-lg font-semibold text-cyan-300 border-b border-blue-800 pb-3 mb-4">
                        "Professional Information"
                    </h3>
                    <div class="space-y-4">
                        <Field label="Institution" value=form.institution editing=editing />
                        <Field label="Department" value=form.department editing=editing />
                        <Field label="Position" value=form.position editing=editing />
                        <TextArea label="Research Interests" value=form.research_interests editing=editing rows=3 />
                        <TextArea label="Bio" value=form.bio editing=editing rows=4 />
                    </div>
                </section>

                // Academic links
                <section class="bg-blue-900/40 border border-blue-800 rounded-xl p-6">
                    <h3 class="text-lg font-semibold text-cyan-300 border-b border-blue-800 pb-3 mb-4">
                        "Academic Links"
                    </h3>
                    <div class="space-y-4">
                        <Field label="ORCID iD" value=form.orcid editing=editing />
                        <Field label="Google Scholar" value=form.google_scholar editing=editing />
                    </div>
                </section>

                // Save/cancel only while editing
                {move || editing.get().then(|| view! {
                    <div class="flex justify-end gap-3 bg-blue-900/40 border border-blue-800 rounded-xl p-6">
                        <button
                            class="px-6 py-2 bg-blue-800 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                            on:click=move |_| editing.set(false)
                        >
                            "Cancel"
                        </button>
                        <button
                            class="px-6 py-2 bg-green-600 hover:bg-green-500 rounded-lg font-medium transition-colors"
                            on:click=save
                        >
                            "Save Changes"
                        </button>
                    </div>
                })}
            </div>
        </PageShell>
    }
}

/// Single-line profile field, editable only in editing mode.
#[component]
fn Field(label: &'static str, value: RwSignal<String>, editing: RwSignal<bool>) -> impl IntoView {
    view! {
        <div>
            <label class="block text-xs uppercase tracking-wide text-blue-300 mb-1">{label}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || !editing.get()
                class="w-full bg-blue-950/60 rounded-lg px-4 py-2 border border-blue-800
                       focus:border-cyan-500 focus:outline-none disabled:opacity-60 disabled:cursor-not-allowed"
            />
        </div>
    }
}

/// Multi-line profile field.
#[component]
fn TextArea(
    label: &'static str,
    value: RwSignal<String>,
    editing: RwSignal<bool>,
    rows: u32,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-xs uppercase tracking-wide text-blue-300 mb-1">{label}</label>
            <textarea
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || !editing.get()
                class="w-full bg-blue-950/60 rounded-lg px-4 py-2 border border-blue-800 resize-y
                       focus:border-cyan-500 focus:outline-none disabled:opacity-60 disabled:cursor-not-allowed"
            >
                {value.get_untracked()}
            </textarea>
        </div>
    }
}

//! Settings Page
//!
//! Account preference toggles, single-select preferences, the password
//! change form, and the danger zone. Everything is local view state;
//! "saving" only shows a confirmation alert.

use leptos::*;

use crate::browser;
use crate::components::PageShell;

/// Outcome of submitting the password-change form.
#[derive(Debug, PartialEq)]
enum PasswordOutcome {
    Updated,
    Mismatch,
}

/// Confirmation check for the password form. Either way the caller discards
/// the submitted values.
fn password_outcome(new_password: &str, confirm_password: &str) -> PasswordOutcome {
    if new_password == confirm_password {
        PasswordOutcome::Updated
    } else {
        PasswordOutcome::Mismatch
    }
}

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    // Toggle preferences, purely local
    let email_notifications = create_rw_signal(true);
    let project_updates = create_rw_signal(true);
    let data_alerts = create_rw_signal(false);
    let newsletter = create_rw_signal(true);
    let two_factor = create_rw_signal(false);
    let public_profile = create_rw_signal(true);

    // Single-select preferences
    let theme = create_rw_signal("ocean-blue".to_string());
    let language = create_rw_signal("english".to_string());
    let timezone = create_rw_signal("UTC-5".to_string());
    let data_retention = create_rw_signal("1-year".to_string());

    // Password form
    let current_password = create_rw_signal(String::new());
    let new_password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());

    let submit_password = move |_| {
        let outcome = password_outcome(
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        match outcome {
            PasswordOutcome::Updated => browser::alert("Password updated successfully!"),
            PasswordOutcome::Mismatch => browser::alert("Passwords do not match!"),
        }
        // Submitted values are discarded in both cases
        current_password.set(String::new());
        new_password.set(String::new());
        confirm_password.set(String::new());
    };

    let save_settings = move |_| browser::alert("Settings saved successfully!");

    let delete_account = move |_| {
        if browser::confirm("Are you sure you want to delete your account? This action cannot be undone.") {
            browser::alert("Account deletion process initiated. You will receive a confirmation email.");
        }
    };

    view! {
        <PageShell
            active=""
            title="Account Settings"
            subtitle="Manage your account preferences and security"
        >
            <div class="max-w-4xl mx-auto space-y-6">
                // Notifications
                <SettingsSection title="Notification Preferences">
                    <ToggleItem
                        title="Email Notifications"
                        blurb="Receive email updates about your account activity"
                        value=email_notifications
                    />
                    <ToggleItem
                        title="Project Updates"
                        blurb="Get notified when collaborators update shared projects"
                        value=project_updates
                    />
                    <ToggleItem
                        title="Data Alerts"
                        blurb="Receive alerts for unusual data patterns or anomalies"
                        value=data_alerts
                    />
                    <ToggleItem
                        title="Newsletter Subscription"
                        blurb="Monthly updates about new features and marine research"
                        value=newsletter
                    />
                </SettingsSection>

                // Security
                <SettingsSection title="Security">
                    <ToggleItem
                        title="Two-Factor Authentication"
                        blurb="Add an extra layer of security to your account"
                        value=two_factor
                    />

                    <div class="bg-blue-950/40 border border-blue-800 rounded-xl p-5">
                        <h4 class="font-semibold mb-4">"Change Password"</h4>
                        <div class="space-y-4">
                            <PasswordField label="Current Password" placeholder="Enter current password" value=current_password />
                            <PasswordField label="New Password" placeholder="Enter new password" value=new_password />
                            <PasswordField label="Confirm New Password" placeholder="Confirm new password" value=confirm_password />
                            <button
                                class="px-5 py-2 bg-cyan-600 hover:bg-cyan-500 rounded-lg font-medium transition-colors"
                                on:click=submit_password
                            >
                                "Update Password"
                            </button>
                        </div>
                    </div>
                </SettingsSection>

                // Privacy
                <SettingsSection title="Privacy">
                    <ToggleItem
                        title="Public Profile"
                        blurb="Make your profile visible to other researchers"
                        value=public_profile
                    />
                    <SelectItem
                        title="Data Retention Period"
                        blurb="How long to keep your research data"
                        value=data_retention
                        options=&[
                            ("6-months", "6 Months"),
                            ("1-year", "1 Year"),
                            ("2-years", "2 Years"),
                            ("indefinite", "Indefinite"),
                        ]
                    />
                </SettingsSection>

                // Preferences
                <SettingsSection title="Preferences">
                    <SelectItem
                        title="Theme"
                        blurb="Choose your preferred color scheme"
                        value=theme
                        options=&[
                            ("ocean-blue", "Ocean Blue"),
                            ("dark-mode", "Dark Mode"),
                            ("light-mode", "Light Mode"),
                            ("coral-reef", "Coral Reef"),
                        ]
                    />
                    <SelectItem
                        title="Language"
                        blurb="Select your preferred language"
                        value=language
                        options=&[
                            ("english", "English"),
                            ("spanish", "Spanish"),
                            ("french", "French"),
                            ("german", "German"),
                            ("chinese", "Chinese"),
                        ]
                    />
                    <SelectItem
                        title="Timezone"
                        blurb="Set your local timezone"
                        value=timezone
                        options=&[
                            ("UTC-8", "Pacific Time (UTC-8)"),
                            ("UTC-5", "Eastern Time (UTC-5)"),
                            ("UTC+0", "UTC (GMT)"),
                            ("UTC+1", "Central European Time (UTC+1)"),
                            ("UTC+8", "China Standard Time (UTC+8)"),
                        ]
                    />
                </SettingsSection>

                // Save all
                <div class="flex justify-center py-2">
                    <button
                        class="px-10 py-3 bg-green-600 hover:bg-green-500 rounded-lg font-semibold transition-colors"
                        on:click=save_settings
                    >
                        "Save All Settings"
                    </button>
                </div>

                // Danger zone
                <section class="bg-red-950/30 border-2 border-red-800/60 rounded-xl p-6">
                    <h3 class="text-lg font-semibold text-red-400 border-b border-red-800/60 pb-3 mb-4">
                        "Danger Zone"
                    </h3>
                    <div class="flex items-center justify-between gap-6">
                        <div>
                            <h4 class="font-semibold text-red-300">"Delete Account"</h4>
                            <p class="text-sm text-red-300/80 mt-1">
                                "Permanently delete your account and all associated data. This action cannot be undone."
                            </p>
                        </div>
                        <button
                            class="shrink-0 px-5 py-2 border-2 border-red-600 text-red-400 hover:bg-red-600 hover:text-white rounded-lg font-medium transition-colors"
                            on:click=delete_account
                        >
                            "Delete Account"
                        </button>
                    </div>
                </section>
            </div>
        </PageShell>
    }
}

/// Titled settings card.
#[component]
fn SettingsSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="bg-blue-900/40 border border-blue-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold text-cyan-300 border-b border-blue-800 pb-3 mb-4">{title}</h3>
            <div class="space-y-4">{children()}</div>
        </section>
    }
}

/// Labeled on/off switch row.
#[component]
fn ToggleItem(title: &'static str, blurb: &'static str, value: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between bg-blue-950/40 border border-blue-800 rounded-xl p-4">
            <div class="pr-6">
                <h4 class="font-medium">{title}</h4>
                <p class="text-sm text-blue-300 mt-0.5">{blurb}</p>
            </div>
            <button
                role="switch"
                aria-checked=move || value.get().to_string()
                class=move || {
                    if value.get() {
                        "relative w-12 h-6 rounded-full bg-cyan-600 transition-colors"
                    } else {
                        "relative w-12 h-6 rounded-full bg-blue-800 transition-colors"
                    }
                }
                on:click=move |_| value.update(|v| *v = !*v)
            >
                <span class=move || {
                    if value.get() {
                        "absolute top-0.5 left-6 w-5 h-5 bg-white rounded-full transition-all"
                    } else {
                        "absolute top-0.5 left-0.5 w-5 h-5 bg-white rounded-full transition-all"
                    }
                } />
            </button>
        </div>
    }
}

/// Labeled dropdown row for an enumerated preference.
#[component]
fn SelectItem(
    title: &'static str,
    blurb: &'static str,
    value: RwSignal<String>,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between bg-blue-950/40 border border-blue-800 rounded-xl p-4">
            <div class="pr-6">
                <h4 class="font-medium">{title}</h4>
                <p class="text-sm text-blue-300 mt-0.5">{blurb}</p>
            </div>
            <select
                class="bg-blue-950/60 rounded-lg px-4 py-2 border border-blue-800 min-w-[200px]
                       focus:border-cyan-500 focus:outline-none"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options.iter().map(|(id, label)| view! {
                    <option value=*id selected=move || value.get() == *id>{*label}</option>
                }).collect_view()}
            </select>
        </div>
    }
}

/// Password input row for the change-password form.
#[component]
fn PasswordField(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-xs uppercase tracking-wide text-blue-300 mb-1">{label}</label>
            <input
                type="password"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full bg-blue-950/60 rounded-lg px-4 py-2 border border-blue-800
                       focus:border-cyan-500 focus:outline-none placeholder:text-blue-500"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_passwords_update() {
        assert_eq!(password_outcome("abc123", "abc123"), PasswordOutcome::Updated);
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        assert_eq!(password_outcome("abc123", "abc124"), PasswordOutcome::Mismatch);
        assert_eq!(password_outcome("abc123", ""), PasswordOutcome::Mismatch);
    }

    #[test]
    fn password_fields_clear_after_submit() {
        let runtime = create_runtime();

        let current = create_rw_signal("old-secret".to_string());
        let new = create_rw_signal("next".to_string());
        let confirm = create_rw_signal("other".to_string());

        // Mismatch path: submitted values are discarded
        assert_eq!(
            password_outcome(&new.get_untracked(), &confirm.get_untracked()),
            PasswordOutcome::Mismatch
        );
        for field in [current, new, confirm] {
            field.set(String::new());
            assert!(field.get_untracked().is_empty());
        }

        runtime.dispose();
    }
}

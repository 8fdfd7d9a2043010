//! Session State
//!
//! Reactive session record using Leptos signals. The session holds at most
//! one [`UserProfile`]; a user being present is what "authenticated" means,
//! so the two can never disagree. Nothing is persisted: reloading the page
//! starts a fresh, signed-out session.

use leptos::*;

/// Mock account record. The password field exists only because the fixture
/// "database" compares it as a plain string; it is never a real secret.
#[derive(Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub institution: String,
}

impl UserProfile {
    /// Uppercase initials for the avatar badge.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}

/// Session state provided to all components.
///
/// `login` unconditionally overwrites any existing profile; `logout` clears
/// it in a single state update. Neither operation can fail.
#[derive(Clone, Copy)]
pub struct Session {
    user: RwSignal<Option<UserProfile>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            user: create_rw_signal(None),
        }
    }

    pub fn login(&self, profile: UserProfile) {
        self.user.set(Some(profile));
    }

    pub fn logout(&self) {
        self.user.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    /// Snapshot of the current user, if signed in.
    pub fn user(&self) -> Option<UserProfile> {
        self.user.get()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the session to the component tree. Called once at the app root.
pub fn provide_session() -> Session {
    let session = Session::new();
    provide_context(session);
    session
}

/// Access the session from any component under the app root.
///
/// Panics when called outside the provider scope; that is a programming
/// error, not a runtime condition.
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not provided; call provide_session() at the app root")
}

/// The simulated account database: a single demo credential pair.
fn fixture_accounts() -> Vec<UserProfile> {
    vec![UserProfile {
        email: "demo@marine.org".to_string(),
        password: "demo123".to_string(),
        first_name: "Dr. Sarah".to_string(),
        last_name: "Johnson".to_string(),
        institution: "Marine Research Institute".to_string(),
    }]
}

/// Exact string match against the fixture accounts.
pub fn authenticate(email: &str, password: &str) -> Option<UserProfile> {
    fixture_accounts()
        .into_iter()
        .find(|u| u.email == email && u.password == password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_credentials_authenticate() {
        let user = authenticate("demo@marine.org", "demo123").expect("demo account should match");
        assert_eq!(user.email, "demo@marine.org");
        assert_eq!(user.first_name, "Dr. Sarah");
        assert_eq!(user.institution, "Marine Research Institute");
    }

    #[test]
    fn wrong_credentials_do_not_authenticate() {
        assert!(authenticate("demo@marine.org", "wrong").is_none());
        assert!(authenticate("other@marine.org", "demo123").is_none());
        assert!(authenticate("", "").is_none());
    }

    #[test]
    fn login_sets_user_and_logout_clears_it() {
        let runtime = create_runtime();

        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());

        let profile = authenticate("demo@marine.org", "demo123").unwrap();
        session.login(profile.clone());
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(profile));

        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());

        // Logout from a signed-out session is a no-op, not an error
        session.logout();
        assert!(!session.is_authenticated());

        runtime.dispose();
    }

    #[test]
    fn login_overwrites_existing_profile() {
        let runtime = create_runtime();

        let session = Session::new();
        session.login(authenticate("demo@marine.org", "demo123").unwrap());

        // Registration fabricates a profile straight from form input, with
        // no uniqueness checks against existing accounts
        let registered = UserProfile {
            email: "jane@institute.edu".to_string(),
            password: "hunter2".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            institution: "Coastal Studies Lab".to_string(),
        };
        session.login(registered.clone());
        assert_eq!(session.user(), Some(registered));

        runtime.dispose();
    }

    #[test]
    fn profile_initials() {
        let user = authenticate("demo@marine.org", "demo123").unwrap();
        assert_eq!(user.initials(), "DJ");
    }
}

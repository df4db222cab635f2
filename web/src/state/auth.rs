use shared_types::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Field-level validation messages. An empty record means the form may be
/// submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl AuthErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Shape-only validation; no credential store exists behind this form.
pub fn validate(mode: AuthMode, fields: &AuthFields) -> AuthErrors {
    let mut errors = AuthErrors::default();

    if mode == AuthMode::Register && fields.name.is_empty() {
        errors.name = Some("Name is required".to_string());
    }

    if fields.email.is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !is_valid_email(&fields.email) {
        errors.email = Some("Email is invalid".to_string());
    }

    if fields.password.is_empty() {
        errors.password = Some("Password is required".to_string());
    } else if fields.password.len() < 6 {
        errors.password = Some("Password must be at least 6 characters".to_string());
    }

    errors
}

/// Accepts anything shaped like `local@domain.tld` with no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// The mock login fabricates a profile from the email's local part, e.g.
/// `jane.doe@example.com` signs in as "Jane Doe".
pub fn profile_from_email(email: &str) -> UserProfile {
    let local = email.split('@').next().unwrap_or(email);
    let name = local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    UserProfile {
        name,
        email: email.to_string(),
    }
}

/// Whether somebody is "signed in" this page load. Logout simply clears
/// the profile; nothing is persisted anywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSession {
    profile: Option<UserProfile>,
}

impl AuthSession {
    pub fn is_logged_in(&self) -> bool {
        self.profile.is_some()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn log_in(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    pub fn log_out(&mut self) {
        self.profile = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, password: &str) -> AuthFields {
        AuthFields {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn login_rejects_bad_email_and_short_password() {
        let errors = validate(AuthMode::Login, &fields("", "bad", "123"));

        assert_eq!(errors.email.as_deref(), Some("Email is invalid"));
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 6 characters")
        );
        assert!(errors.name.is_none());
    }

    #[test]
    fn login_accepts_wellformed_credentials() {
        let errors = validate(AuthMode::Login, &fields("", "a@b.com", "abcdef"));

        assert!(errors.is_empty());
    }

    #[test]
    fn register_requires_a_name() {
        let errors = validate(AuthMode::Register, &fields("", "a@b.com", "abcdef"));

        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert!(!errors.is_empty());
    }

    #[test]
    fn empty_fields_are_reported_as_required() {
        let errors = validate(AuthMode::Login, &fields("", "", ""));

        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
    }

    #[test]
    fn email_shape_edge_cases() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@bcom"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.de"));
    }

    #[test]
    fn profile_name_is_derived_from_the_local_part() {
        let profile = profile_from_email("jane.doe@example.com");

        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email, "jane.doe@example.com");
    }

    #[test]
    fn session_toggles_between_logged_in_and_out() {
        let mut session = AuthSession::default();
        assert!(!session.is_logged_in());

        session.log_in(profile_from_email("john@example.com"));
        assert!(session.is_logged_in());
        assert_eq!(session.profile().unwrap().name, "John");

        session.log_out();
        assert!(!session.is_logged_in());
        assert!(session.profile().is_none());
    }
}

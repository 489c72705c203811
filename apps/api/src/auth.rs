//! Identity provider error mapping.
//!
//! Sign-up and sign-in are delegated to the identity provider. The only thing this
//! service owns is turning the provider's error codes into the fixed set of
//! user-facing messages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthFlow {
    SignUp,
    SignIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthFailure {
    EmailInUse,
    InvalidEmail,
    WeakPassword,
    UserNotFound,
    WrongPassword,
    InvalidCredentials,
    Unknown,
}

impl AuthFailure {
    /// Classifies a provider error. Sign-up matches the code exactly; sign-in also
    /// looks inside the message, since some provider errors only carry it there.
    pub fn classify(flow: AuthFlow, code: &str, message: &str) -> Self {
        match flow {
            AuthFlow::SignUp => match code {
                "auth/email-already-in-use" => AuthFailure::EmailInUse,
                "auth/invalid-email" => AuthFailure::InvalidEmail,
                "auth/weak-password" => AuthFailure::WeakPassword,
                _ => AuthFailure::Unknown,
            },
            AuthFlow::SignIn => {
                if code.contains("auth/user-not-found") || message.contains("user-not-found") {
                    AuthFailure::UserNotFound
                } else if code.contains("auth/wrong-password")
                    || message.contains("wrong-password")
                {
                    AuthFailure::WrongPassword
                } else if code.contains("auth/invalid-credential")
                    || message.contains("invalid-email")
                {
                    AuthFailure::InvalidCredentials
                } else {
                    AuthFailure::Unknown
                }
            }
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            AuthFailure::EmailInUse => "This email is already registered!",
            AuthFailure::InvalidEmail => "Please enter a valid email!",
            AuthFailure::WeakPassword => "Password must be at least 6 characters!",
            AuthFailure::UserNotFound => "No account found with this email!",
            AuthFailure::WrongPassword => "Incorrect password!",
            AuthFailure::InvalidCredentials => "Invalid Credentials!",
            AuthFailure::Unknown => "Something went wrong!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_codes() {
        let cases = [
            ("auth/email-already-in-use", "This email is already registered!"),
            ("auth/invalid-email", "Please enter a valid email!"),
            ("auth/weak-password", "Password must be at least 6 characters!"),
            ("auth/network-request-failed", "Something went wrong!"),
        ];
        for (code, expected) in cases {
            assert_eq!(
                AuthFailure::classify(AuthFlow::SignUp, code, "").user_message(),
                expected
            );
        }
    }

    #[test]
    fn test_sign_in_codes() {
        assert_eq!(
            AuthFailure::classify(AuthFlow::SignIn, "auth/user-not-found", ""),
            AuthFailure::UserNotFound
        );
        assert_eq!(
            AuthFailure::classify(AuthFlow::SignIn, "auth/wrong-password", ""),
            AuthFailure::WrongPassword
        );
        assert_eq!(
            AuthFailure::classify(AuthFlow::SignIn, "auth/invalid-credential", ""),
            AuthFailure::InvalidCredentials
        );
    }

    #[test]
    fn test_sign_in_falls_back_to_message() {
        assert_eq!(
            AuthFailure::classify(
                AuthFlow::SignIn,
                "",
                "Firebase: Error (auth/wrong-password)."
            ),
            AuthFailure::WrongPassword
        );
        assert_eq!(
            AuthFailure::classify(AuthFlow::SignIn, "", "auth/invalid-email").user_message(),
            "Invalid Credentials!"
        );
    }

    #[test]
    fn test_sign_up_code_not_mapped_in_sign_in() {
        assert_eq!(
            AuthFailure::classify(AuthFlow::SignIn, "auth/email-already-in-use", ""),
            AuthFailure::Unknown
        );
    }
}

//! Configured credentials and per-request login submissions

use std::fmt;

/// Characters stripped from both ends of submitted values: space, tab,
/// newline, carriage return, NUL and vertical tab. Other Unicode
/// whitespace is kept and therefore has to match exactly.
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

fn trim_submitted(value: &str) -> &str {
    value.trim_matches(TRIMMED)
}

/// Shared user name and password, fixed for the lifetime of the process
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exact, case-sensitive match after trimming the submitted values.
    /// Missing or empty fields never match.
    pub fn matches(&self, submission: &LoginSubmission) -> bool {
        let (Some(username), Some(password)) = (submission.username(), submission.password()) else {
            return false;
        };
        if username.is_empty() || password.is_empty() {
            return false;
        }
        username == self.username && password == self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Credentials posted with the login form. Only exists when the form was submitted.
#[derive(Clone, Default)]
pub struct LoginSubmission {
    username: Option<String>,
    password: Option<String>,
}

impl LoginSubmission {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }

    /// Submitted user name with surrounding whitespace removed
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().map(trim_submitted)
    }

    /// Submitted password with surrounding whitespace removed
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().map(trim_submitted)
    }
}

impl fmt::Debug for LoginSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginSubmission")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

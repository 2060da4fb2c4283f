//! Bearer credentials for monitored accounts.

use std::fmt;

/// Number of leading characters kept visible when masking a token.
const MASK_VISIBLE_CHARS: usize = 4;

/// Opaque bearer credential granting API access for one monitored account.
///
/// `Debug` and `Display` never reveal the credential; logs and CLI output
/// only ever see the masked form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiToken(String);

impl ApiToken {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw credential, for building authorization headers.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked form safe for logs and terminal output.
    #[must_use]
    pub fn masked(&self) -> String {
        if self.0.chars().count() <= MASK_VISIBLE_CHARS {
            return "****".to_string();
        }
        let visible: String = self.0.chars().take(MASK_VISIBLE_CHARS).collect();
        format!("{visible}****")
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiToken({})", self.masked())
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_keeps_short_prefix() {
        let token = ApiToken::new("abcdefghij");
        assert_eq!(token.masked(), "abcd****");
    }

    #[test]
    fn masked_hides_short_tokens_entirely() {
        assert_eq!(ApiToken::new("abc").masked(), "****");
        assert_eq!(ApiToken::new("").masked(), "****");
    }

    #[test]
    fn debug_and_display_never_leak_the_credential() {
        let token = ApiToken::new("super-secret-credential");
        assert!(!format!("{token:?}").contains("secret-credential"));
        assert!(!format!("{token}").contains("secret-credential"));
    }
}

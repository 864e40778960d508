use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Signed-in user as shown in greetings and avatars.
///
/// Produced by `deck-auth` from the identity provider's user object; holds
/// data only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserProfile {
    /// Owner id used to scope every stored record.
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl UserProfile {
    /// Display name, then full name, then the email's local part, then "there".
    #[must_use]
    pub fn display_name(&self) -> String {
        non_blank(self.display_name.as_deref())
            .or_else(|| non_blank(self.full_name.as_deref()))
            .or_else(|| {
                non_blank(self.email.as_deref())
                    .and_then(|email| email.split('@').next())
                    .filter(|local| !local.is_empty())
            })
            .unwrap_or("there")
            .to_string()
    }

    /// First word of [`Self::display_name`].
    #[must_use]
    pub fn first_name(&self) -> String {
        let name = self.display_name();
        name.split_whitespace().next().unwrap_or("there").to_string()
    }

    /// Up to two uppercase initials for avatars.
    #[must_use]
    pub fn initials(&self) -> String {
        if let Some(full) = non_blank(self.full_name.as_deref()) {
            return full
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .take(2)
                .flat_map(char::to_uppercase)
                .collect();
        }
        non_blank(self.email.as_deref())
            .and_then(|email| email.chars().next())
            .map_or_else(|| "U".to_string(), |c| c.to_uppercase().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile(full: Option<&str>, display: Option<&str>, email: Option<&str>) -> UserProfile {
        UserProfile {
            id: "u1".into(),
            email: email.map(Into::into),
            full_name: full.map(Into::into),
            display_name: display.map(Into::into),
            avatar_url: None,
        }
    }

    #[test]
    fn display_name_fallback_chain() {
        assert_eq!(
            profile(Some("Ada Lovelace"), Some("Ada L."), None).display_name(),
            "Ada L."
        );
        assert_eq!(
            profile(Some("Ada Lovelace"), Some("  "), None).display_name(),
            "Ada Lovelace"
        );
        assert_eq!(
            profile(None, None, Some("ada@example.com")).display_name(),
            "ada"
        );
        assert_eq!(profile(None, None, None).display_name(), "there");
    }

    #[test]
    fn first_name_is_first_word() {
        assert_eq!(profile(Some("Ada Lovelace"), None, None).first_name(), "Ada");
        assert_eq!(profile(None, None, None).first_name(), "there");
    }

    #[test]
    fn initials() {
        assert_eq!(profile(Some("ada king lovelace"), None, None).initials(), "AK");
        assert_eq!(profile(Some("Grace"), None, None).initials(), "G");
        assert_eq!(profile(None, None, Some("zed@example.com")).initials(), "Z");
        assert_eq!(profile(None, None, None).initials(), "U");
    }
}

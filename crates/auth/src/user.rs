use serde::{Deserialize, Serialize};

/// Shown when the user has no photo reference.
pub const PHOTO_PLACEHOLDER: &str = "https://via.placeholder.com/30";

const FALLBACK_NAME: &str = "Usuario";

/// Descriptor of the signed-in user, as handed over by the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedInUser {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub email: Option<String>,
}

impl SignedInUser {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// First word of the display name, or a generic fallback.
    pub fn short_name(&self) -> &str {
        self.display_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
            .unwrap_or(FALLBACK_NAME)
    }

    pub fn photo(&self) -> &str {
        self.photo_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(PHOTO_PLACEHOLDER)
    }

    pub fn header(&self) -> SessionHeader {
        SessionHeader {
            name: self.short_name().to_string(),
            photo: self.photo().to_string(),
        }
    }
}

/// What the page header shows for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionHeader {
    pub name: String,
    pub photo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_is_first_word() {
        let user = SignedInUser {
            display_name: Some("  María José Pérez".to_string()),
            ..SignedInUser::default()
        };
        assert_eq!(user.short_name(), "María");
    }

    #[test]
    fn missing_or_blank_display_name_falls_back() {
        assert_eq!(SignedInUser::default().short_name(), "Usuario");
        let blank = SignedInUser {
            display_name: Some("   ".to_string()),
            ..SignedInUser::default()
        };
        assert_eq!(blank.short_name(), "Usuario");
    }

    #[test]
    fn header_uses_photo_placeholder() {
        let header = SignedInUser::with_email("ana@ejemplo.com").header();
        assert_eq!(header.name, "Usuario");
        assert_eq!(header.photo, PHOTO_PLACEHOLDER);
    }

    #[test]
    fn deserializes_provider_descriptor() {
        let json = r#"{"displayName":"Ana Ruiz","photoURL":"https://img/ana.png","email":"ana@ejemplo.com"}"#;
        let user: SignedInUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.short_name(), "Ana");
        assert_eq!(user.photo(), "https://img/ana.png");
        assert_eq!(user.email.as_deref(), Some("ana@ejemplo.com"));
    }
}

//! One-shot notices shown after a form submission

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Message rendered at the top of the page that follows a write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }

    /// Notice for a venue/artist create attempt
    pub fn listing(entity: &str, name: &str, succeeded: bool) -> Self {
        if succeeded {
            Self::success(format!("{} {} was successfully listed!", entity, name))
        } else {
            Self::failure(format!(
                "An error occurred. {} {} could not be listed.",
                entity, name
            ))
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Failure => "notice notice-failure",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_messages() {
        let ok = Notice::listing("Venue", "The Hop", true);
        assert_eq!(ok.kind, NoticeKind::Success);
        assert_eq!(ok.to_string(), "Venue The Hop was successfully listed!");

        let failed = Notice::listing("Artist", "Guns N Petals", false);
        assert_eq!(failed.kind, NoticeKind::Failure);
        assert_eq!(
            failed.to_string(),
            "An error occurred. Artist Guns N Petals could not be listed."
        );
        assert_eq!(failed.css_class(), "notice notice-failure");
    }
}

// ABOUTME: Settings panel flags and the static social-link list.
// ABOUTME: Guards the AI suggestion button so only one request is outstanding at a time.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "Instagram",
        url: "https://www.instagram.com/housni.king/",
        label: "HOUSNI.KING",
    },
    SocialLink {
        name: "Facebook",
        url: "https://www.facebook.com/housni.bouemir",
        label: "HOUSNI BOUEMIR",
    },
    SocialLink {
        name: "YouTube",
        url: "https://www.youtube.com/@HOUSNITHEKING",
        label: "HOUSNITHEKING",
    },
];

/// Only URLs from the built-in list may be handed to the system browser.
pub fn is_known_link(url: &str) -> bool {
    SOCIAL_LINKS.iter().any(|l| l.url == url)
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SettingsPanel {
    open: bool,
    generating: bool,
}

impl SettingsPanel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns false while a previous suggestion is still outstanding.
    pub fn begin_suggestion(&mut self) -> bool {
        if self.generating {
            debug!("suggestion already in flight");
            return false;
        }
        self.generating = true;
        true
    }

    pub fn finish_suggestion(&mut self) {
        self.generating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_idle() {
        let panel = SettingsPanel::default();
        assert!(!panel.is_open());
        assert!(!panel.is_generating());
    }

    #[test]
    fn open_close() {
        let mut panel = SettingsPanel::default();
        panel.open();
        assert!(panel.is_open());
        panel.close();
        assert!(!panel.is_open());
    }

    #[test]
    fn only_one_suggestion_in_flight() {
        let mut panel = SettingsPanel::default();
        assert!(panel.begin_suggestion());
        assert!(!panel.begin_suggestion());
        panel.finish_suggestion();
        assert!(panel.begin_suggestion());
    }

    #[test]
    fn closing_does_not_cancel_suggestion() {
        let mut panel = SettingsPanel::default();
        panel.open();
        assert!(panel.begin_suggestion());
        panel.close();
        assert!(panel.is_generating());
    }

    #[test]
    fn known_links() {
        assert!(is_known_link("https://www.youtube.com/@HOUSNITHEKING"));
        assert!(!is_known_link("https://example.com"));
    }
}

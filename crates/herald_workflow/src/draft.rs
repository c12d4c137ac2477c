//! The editable content draft: caption, link, applied suggestion.

use herald_core::CaptionSuggestion;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hard cap on caption length, counted in characters, not bytes.
///
/// Matches the strictest platform limit among the supported targets, so one
/// caption can be reused across every selected platform.
pub const CAPTION_MAX: usize = 2200;

/// Caption and link state for the content editing stage.
///
/// Captions past [`CAPTION_MAX`] characters are truncated, never rejected:
/// the editor keeps accepting input and the draft stores the first 2200
/// characters. The link is free-form; validation is the landing page's
/// problem, not the workflow's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDraft {
    caption: String,
    link_url: Option<String>,
    applied: Option<CaptionSuggestion>,
}

impl ContentDraft {
    /// Empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current caption text.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Current call-to-action link, if any.
    pub fn link_url(&self) -> Option<&String> {
        self.link_url.as_ref()
    }

    /// The suggestion last applied to the caption, if any.
    pub fn applied(&self) -> Option<&CaptionSuggestion> {
        self.applied.as_ref()
    }

    /// Characters still available under the caption cap.
    pub fn remaining(&self) -> usize {
        CAPTION_MAX.saturating_sub(self.caption.chars().count())
    }

    /// Replace the caption, clamping to the first [`CAPTION_MAX`] characters.
    ///
    /// Manual edits clear the applied-suggestion marker.
    pub fn set_caption(&mut self, text: &str) {
        let clamped = clamp_caption(text);
        if clamped.chars().count() < text.chars().count() {
            debug!(limit = CAPTION_MAX, "caption truncated to limit");
        }
        self.caption = clamped;
        self.applied = None;
    }

    /// Set or clear the call-to-action link.
    pub fn set_link_url(&mut self, url: Option<String>) {
        self.link_url = url;
    }

    /// Overwrite the caption with a suggestion's text, under the same cap.
    pub fn apply_suggestion(&mut self, suggestion: &CaptionSuggestion) {
        self.caption = clamp_caption(suggestion.text());
        self.applied = Some(suggestion.clone());
    }
}

fn clamp_caption(text: &str) -> String {
    if text.chars().count() <= CAPTION_MAX {
        text.to_string()
    } else {
        text.chars().take(CAPTION_MAX).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::SuggestionScope;

    #[test]
    fn caption_at_limit_is_kept_whole() {
        let mut draft = ContentDraft::new();
        let text = "a".repeat(CAPTION_MAX);
        draft.set_caption(&text);
        assert_eq!(draft.caption().chars().count(), CAPTION_MAX);
        assert_eq!(draft.remaining(), 0);
    }

    #[test]
    fn caption_past_limit_is_truncated() {
        let mut draft = ContentDraft::new();
        let text = "b".repeat(CAPTION_MAX + 50);
        draft.set_caption(&text);
        assert_eq!(draft.caption().chars().count(), CAPTION_MAX);
    }

    #[test]
    fn caption_limit_counts_characters_not_bytes() {
        let mut draft = ContentDraft::new();
        // Multibyte content: Arabic text plus emoji, well past the cap in
        // characters.
        let text = "تصميم جديد 🎨".repeat(300);
        draft.set_caption(&text);
        assert_eq!(draft.caption().chars().count(), CAPTION_MAX);
        assert!(draft.caption().len() > CAPTION_MAX);
    }

    #[test]
    fn applying_a_suggestion_overwrites_and_remembers() {
        let mut draft = ContentDraft::new();
        draft.set_caption("original");
        let suggestion =
            CaptionSuggestion::new("suggested caption".to_string(), SuggestionScope::All);
        draft.apply_suggestion(&suggestion);
        assert_eq!(draft.caption(), "suggested caption");
        assert_eq!(draft.applied(), Some(&suggestion));
    }

    #[test]
    fn manual_edit_clears_applied_marker() {
        let mut draft = ContentDraft::new();
        let suggestion = CaptionSuggestion::new("suggested".to_string(), SuggestionScope::All);
        draft.apply_suggestion(&suggestion);
        draft.set_caption("hand written");
        assert!(draft.applied().is_none());
    }

    #[test]
    fn oversized_suggestion_is_clamped() {
        let mut draft = ContentDraft::new();
        let suggestion =
            CaptionSuggestion::new("x".repeat(CAPTION_MAX * 2), SuggestionScope::All);
        draft.apply_suggestion(&suggestion);
        assert_eq!(draft.caption().chars().count(), CAPTION_MAX);
    }

    #[test]
    fn link_url_is_stored_verbatim() {
        let mut draft = ContentDraft::new();
        draft.set_link_url(Some("not a url at all".to_string()));
        assert_eq!(draft.link_url(), Some(&"not a url at all".to_string()));
        draft.set_link_url(None);
        assert!(draft.link_url().is_none());
    }
}

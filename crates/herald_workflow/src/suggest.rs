//! Caption suggestion generation.

use async_trait::async_trait;
use derive_getters::Getters;
use herald_core::{CaptionSuggestion, Platform, SuggestionScope};
use herald_error::HeraldResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Ticket identifying one suggestion generation round.
///
/// Tickets are issued in increasing order per workflow. A round's results
/// are accepted only while its ticket is still the newest one, so a slow
/// response can never overwrite a later request's results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display,
)]
#[display("{}", _0)]
pub struct SuggestionTicket(pub u64);

/// Everything a suggestion source gets to work with.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct SuggestionPrompt {
    /// Title of the design being published.
    design_title: String,

    /// Designer name, possibly empty.
    author: String,

    /// Trending topics loaded when the workflow opened.
    trends: Vec<String>,

    /// Audience the caption should address, if the user named one.
    target_audience: Option<String>,
}

/// Generator of caption suggestions.
///
/// Implementations may take arbitrarily long and are not cancelled when the
/// user moves on; the workflow's ticket check discards late results.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Generate captions for the prompt, tagged by platform scope.
    ///
    /// # Errors
    ///
    /// Returns error if the generator backend fails.
    async fn generate(&self, prompt: &SuggestionPrompt) -> HeraldResult<Vec<CaptionSuggestion>>;
}

/// Template-based suggestion source.
///
/// Fills a fixed set of caption templates from the prompt behind a
/// configurable artificial delay, standing in for a hosted model in tests
/// and demos.
#[derive(Debug, Clone)]
pub struct TemplatedSuggestionSource {
    latency: Duration,
}

impl TemplatedSuggestionSource {
    /// Build a source with the given artificial delay per round.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// A source that responds without delay, for tests.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for TemplatedSuggestionSource {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[async_trait]
impl SuggestionSource for TemplatedSuggestionSource {
    async fn generate(&self, prompt: &SuggestionPrompt) -> HeraldResult<Vec<CaptionSuggestion>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let title = prompt.design_title().as_str();
        let author = match prompt.author().as_str() {
            "" => "our studio",
            name => name,
        };
        let audience = prompt
            .target_audience()
            .as_deref()
            .unwrap_or("our community");
        let tags = prompt.trends().join(" ");

        let suggestions = vec![
            CaptionSuggestion::new(
                format!("{} is here! Fresh work by {}. {}", title, author, tags),
                SuggestionScope::All,
            ),
            CaptionSuggestion::new(
                format!("Hot off the drawing board: {}. Tell us what you think!", title),
                SuggestionScope::All,
            ),
            CaptionSuggestion::new(
                format!("{} ✨ double-tap if you love it. {}", title, tags),
                SuggestionScope::Platform(Platform::Instagram),
            ),
            CaptionSuggestion::new(
                format!("We made {} with {} in mind. Take a look and share your thoughts.", title, audience),
                SuggestionScope::Platform(Platform::Facebook),
            ),
            CaptionSuggestion::new(
                format!("New: {}.", title),
                SuggestionScope::Platform(Platform::Twitter),
            ),
            CaptionSuggestion::new(
                format!("Introducing {}, crafted by {}.", title, author),
                SuggestionScope::Platform(Platform::Linkedin),
            ),
        ];
        debug!(count = suggestions.len(), "caption templates filled");
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> SuggestionPrompt {
        SuggestionPrompt::new(
            "Summer launch".to_string(),
            "Aisha".to_string(),
            vec!["#design".to_string()],
            Some("young creatives".to_string()),
        )
    }

    #[tokio::test]
    async fn templates_mention_the_design_title() {
        let source = TemplatedSuggestionSource::immediate();
        let suggestions = source.generate(&prompt()).await.unwrap();
        assert!(!suggestions.is_empty());
        for suggestion in &suggestions {
            assert!(suggestion.text().contains("Summer launch"));
        }
    }

    #[tokio::test]
    async fn round_includes_general_and_platform_scopes() {
        let source = TemplatedSuggestionSource::immediate();
        let suggestions = source.generate(&prompt()).await.unwrap();
        assert!(suggestions.iter().any(|s| s.applies_to(Platform::Pinterest)));
        assert!(
            suggestions
                .iter()
                .any(|s| *s.scope() == SuggestionScope::Platform(Platform::Twitter))
        );
    }

    #[tokio::test]
    async fn empty_author_falls_back_to_studio_voice() {
        let source = TemplatedSuggestionSource::immediate();
        let prompt = SuggestionPrompt::new("Logo".to_string(), String::new(), vec![], None);
        let suggestions = source.generate(&prompt).await.unwrap();
        assert!(suggestions.iter().any(|s| s.text().contains("our studio")));
    }

    #[test]
    fn tickets_order_by_issue_number() {
        assert!(SuggestionTicket(2) > SuggestionTicket(1));
        assert_eq!(SuggestionTicket(7).to_string(), "7");
    }
}

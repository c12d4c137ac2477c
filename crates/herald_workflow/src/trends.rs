//! Trending-topic input for caption suggestions.

use async_trait::async_trait;
use herald_error::HeraldResult;

/// Source of currently trending topics.
///
/// Loaded once when a workflow opens; the same list feeds every suggestion
/// round in that workflow.
#[async_trait]
pub trait TrendSource: Send + Sync {
    /// The topics trending right now, most relevant first.
    ///
    /// # Errors
    ///
    /// Returns error if the trend feed cannot be read.
    async fn current_trends(&self) -> HeraldResult<Vec<String>>;
}

/// Fixed in-memory trend list.
///
/// Stands in for a live trend feed in tests and offline deployments.
#[derive(Debug, Clone)]
pub struct StaticTrendSource {
    trends: Vec<String>,
}

impl StaticTrendSource {
    /// Build a source over an explicit topic list.
    pub fn new(trends: Vec<String>) -> Self {
        Self { trends }
    }
}

impl Default for StaticTrendSource {
    fn default() -> Self {
        Self::new(vec![
            "#design".to_string(),
            "#branding".to_string(),
            "#smallbusiness".to_string(),
            "#marketing".to_string(),
        ])
    }
}

#[async_trait]
impl TrendSource for StaticTrendSource {
    async fn current_trends(&self) -> HeraldResult<Vec<String>> {
        Ok(self.trends.clone())
    }
}

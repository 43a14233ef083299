/// Status presentation: maps the current status to what the page shows
use crate::comment_data::SentimentCounts;

const DEFAULT_LOADING_MESSAGE: &str = "Loading...";
const SENTIMENT_ORDER: [&str; 3] = ["Positive", "Negative", "Neutral"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Cleared,
    Loading(String),
    Success(String),
    Error(String),
}

/// Visibility and enablement of every status-driven element on the page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusView {
    pub loading: Option<String>,
    pub success: Option<String>,
    pub error: Option<String>,
    /// Sentiment breakdown shown under a successful scrape
    pub sentiment: Option<String>,
    pub scrape_enabled: bool,
    pub download_visible: bool,
    pub download_enabled: bool,
    pub download_label: String,
}

impl StatusView {
    /// Pure: the same inputs always give the same view.
    pub fn render(
        status: &Status,
        comment_count: usize,
        sentiment: &SentimentCounts,
        has_input: bool,
    ) -> StatusView {
        let mut view = StatusView {
            scrape_enabled: has_input,
            download_label: download_label(comment_count),
            ..StatusView::default()
        };

        match status {
            Status::Cleared => {}
            Status::Loading(msg) => {
                let msg = if msg.is_empty() { DEFAULT_LOADING_MESSAGE } else { msg.as_str() };
                view.loading = Some(msg.to_string());
                view.scrape_enabled = false;
            }
            Status::Success(msg) => {
                view.success = Some(msg.clone());
                view.sentiment = sentiment_summary(sentiment);
                if comment_count > 0 {
                    view.download_visible = true;
                    view.download_enabled = true;
                }
            }
            Status::Error(msg) => {
                view.error = Some(msg.clone());
            }
        }

        view
    }
}

pub fn download_label(comment_count: usize) -> String {
    format!("Download CSV ({})", comment_count)
}

/// "Positive 3 / Negative 1 / Neutral 2", known labels first, then the rest by name
pub fn sentiment_summary(counts: &SentimentCounts) -> Option<String> {
    if counts.is_empty() {
        return None;
    }

    let known = SENTIMENT_ORDER
        .iter()
        .filter_map(|label| counts.get_key_value(*label));
    let others = counts
        .iter()
        .filter(|(label, _)| !SENTIMENT_ORDER.contains(&label.as_str()));

    let summary = known
        .chain(others)
        .map(|(label, count)| format!("{} {}", label, count))
        .collect::<Vec<_>>()
        .join(" / ");
    Some(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(status: &Status, comment_count: usize, has_input: bool) -> StatusView {
        StatusView::render(status, comment_count, &SentimentCounts::new(), has_input)
    }

    fn create_test_counts(entries: &[(&str, u64)]) -> SentimentCounts {
        entries
            .iter()
            .map(|(label, count)| (label.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_cleared_hides_everything() {
        let view = render(&Status::Cleared, 3, true);

        assert_eq!(view.loading, None);
        assert_eq!(view.success, None);
        assert_eq!(view.error, None);
        assert!(view.scrape_enabled);
        assert!(!view.download_visible);
        assert!(!view.download_enabled);
    }

    #[test]
    fn test_loading_disables_scrape() {
        let view = render(&Status::Loading("Scraping comments for abc...".to_string()), 0, true);

        assert_eq!(view.loading.as_deref(), Some("Scraping comments for abc..."));
        assert!(!view.scrape_enabled);
        assert!(!view.download_visible);
    }

    #[test]
    fn test_loading_default_message() {
        let view = render(&Status::Loading(String::new()), 0, true);
        assert_eq!(view.loading.as_deref(), Some("Loading..."));
    }

    #[test]
    fn test_success_with_comments_shows_download() {
        let view = render(&Status::Success("Successfully scraped 1 comments.".to_string()), 1, true);

        assert_eq!(view.success.as_deref(), Some("Successfully scraped 1 comments."));
        assert!(view.download_visible);
        assert!(view.download_enabled);
        assert_eq!(view.download_label, "Download CSV (1)");
    }

    #[test]
    fn test_success_without_comments_hides_download() {
        let view = render(&Status::Success("Scraping complete. No comments found.".to_string()), 0, true);

        assert!(!view.download_visible);
        assert!(!view.download_enabled);
    }

    #[test]
    fn test_error_region_is_exclusive() {
        let view = render(&Status::Error("boom".to_string()), 5, true);

        assert_eq!(view.error.as_deref(), Some("boom"));
        assert_eq!(view.success, None);
        assert_eq!(view.loading, None);
        assert!(!view.download_visible);
    }

    #[test]
    fn test_empty_input_disables_scrape() {
        let view = render(&Status::Cleared, 0, false);
        assert!(!view.scrape_enabled);
    }

    #[test]
    fn test_render_is_idempotent() {
        let status = Status::Success("done".to_string());
        assert_eq!(render(&status, 2, true), render(&status, 2, true));
    }

    #[test]
    fn test_success_shows_sentiment_breakdown() {
        let counts = create_test_counts(&[("Neutral", 2), ("Positive", 3), ("Negative", 1)]);

        let view = StatusView::render(&Status::Success("done".to_string()), 6, &counts, true);

        assert_eq!(view.sentiment.as_deref(), Some("Positive 3 / Negative 1 / Neutral 2"));
    }

    #[test]
    fn test_sentiment_hidden_outside_success() {
        let counts = create_test_counts(&[("Positive", 1)]);

        let view = StatusView::render(&Status::Loading("Generating CSV...".to_string()), 1, &counts, true);
        assert_eq!(view.sentiment, None);

        let view = StatusView::render(&Status::Error("boom".to_string()), 1, &counts, true);
        assert_eq!(view.sentiment, None);
    }

    #[test]
    fn test_sentiment_summary_unknown_labels_last() {
        let counts = create_test_counts(&[("Mixed", 4), ("Positive", 1)]);
        assert_eq!(sentiment_summary(&counts).as_deref(), Some("Positive 1 / Mixed 4"));
        assert_eq!(sentiment_summary(&SentimentCounts::new()), None);
    }
}

/// Comment records and the shapes the backend returns them in
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One scraped comment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comment: String,
}

impl CommentRecord {
    pub fn new(username: String, comment: String) -> CommentRecord {
        CommentRecord { username, comment }
    }
}

/// Per-label comment counts from the backend's sentiment analysis
pub type SentimentCounts = BTreeMap<String, u64>;

/// Everything a successful scrape hands back to the controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeResult {
    pub comments: Vec<CommentRecord>,
    pub sentiment: SentimentCounts,
}

/// Successful scrape body: either a bare list or the analysed envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScrapeResponse {
    Comments(Vec<CommentRecord>),
    Envelope {
        comments: Vec<CommentRecord>,
        #[serde(default)]
        sentiment_counts: SentimentCounts,
    },
}

impl ScrapeResponse {
    pub fn into_result(self) -> ScrapeResult {
        match self {
            ScrapeResponse::Comments(comments) => ScrapeResult {
                comments,
                sentiment: SentimentCounts::new(),
            },
            ScrapeResponse::Envelope { comments, sentiment_counts } => {
                log::debug!("Backend sentiment counts: {:?}", sentiment_counts);
                ScrapeResult {
                    comments,
                    sentiment: sentiment_counts,
                }
            }
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

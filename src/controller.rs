/// Client controller: page state plus the message handlers that drive it
use crate::comment_data::{CommentRecord, ScrapeResult, SentimentCounts};
use crate::csv_export::CsvExport;
use crate::error::AppError;
use crate::shortcode::{Shortcode, extract_shortcode};
use crate::status::{Status, StatusView};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the URL input.
    InputChanged(String),
    /// User clicked the scrape button.
    ScrapeClicked,
    /// The backend request finished.
    ScrapeFinished(Result<ScrapeResult, AppError>),
    /// User clicked the download button.
    DownloadClicked,
    /// The browser save was triggered, or failed.
    DownloadFinished(Result<(), AppError>),
}

/// Work the UI layer must carry out after an update
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Scrape { shortcode: Shortcode },
    Download(CsvExport),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Controller {
    input: String,
    comments: Vec<CommentRecord>,
    sentiment: SentimentCounts,
    shortcode: Option<Shortcode>,
    status: Status,
    in_flight: bool,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    #[cfg(test)]
    fn comments(&self) -> &[CommentRecord] {
        &self.comments
    }

    pub fn shortcode(&self) -> Option<&Shortcode> {
        self.shortcode.as_ref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    #[cfg(test)]
    fn is_scraping(&self) -> bool {
        self.in_flight
    }

    pub fn view(&self) -> StatusView {
        StatusView::render(
            &self.status,
            self.comments.len(),
            &self.sentiment,
            !self.input.trim().is_empty(),
        )
    }

    /// Apply a message and return the effects it requests.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::InputChanged(value) => {
                if !value.trim().is_empty() && !self.in_flight {
                    self.status = Status::Cleared;
                }
                self.input = value;
                Vec::new()
            }
            Msg::ScrapeClicked => match self.begin_scrape() {
                Ok(shortcode) => vec![Effect::Scrape { shortcode }],
                Err(AppError::ScrapeInFlight) => {
                    log::warn!("Ignoring scrape request while another is in flight");
                    Vec::new()
                }
                Err(e) => {
                    self.show_error(e);
                    Vec::new()
                }
            },
            Msg::ScrapeFinished(outcome) => {
                self.finish_scrape(outcome);
                Vec::new()
            }
            Msg::DownloadClicked => match CsvExport::from_comments(&self.comments, self.shortcode.as_ref()) {
                Ok(export) => {
                    self.status = Status::Loading("Generating CSV...".to_string());
                    vec![Effect::Download(export)]
                }
                Err(e) => {
                    self.show_error(e);
                    Vec::new()
                }
            },
            Msg::DownloadFinished(Ok(())) => {
                self.status = Status::Success(format!(
                    "Successfully scraped {} comments. CSV download initiated.",
                    self.comments.len()
                ));
                Vec::new()
            }
            Msg::DownloadFinished(Err(e)) => {
                self.show_error(e);
                Vec::new()
            }
        }
    }

    fn begin_scrape(&mut self) -> Result<Shortcode, AppError> {
        if self.in_flight {
            return Err(AppError::ScrapeInFlight);
        }

        self.comments.clear();
        self.sentiment.clear();
        self.shortcode = None;

        let shortcode = extract_shortcode(&self.input).ok_or(AppError::InvalidInput)?;
        log::debug!("Extracted shortcode {}", shortcode);

        self.status = Status::Loading(format!("Scraping comments for {}...", shortcode));
        self.shortcode = Some(shortcode.clone());
        self.in_flight = true;
        Ok(shortcode)
    }

    fn finish_scrape(&mut self, outcome: Result<ScrapeResult, AppError>) {
        self.in_flight = false;

        match outcome {
            Ok(ScrapeResult { comments, sentiment }) => {
                self.status = if comments.is_empty() {
                    Status::Success("Scraping complete. No comments found.".to_string())
                } else {
                    Status::Success(format!("Successfully scraped {} comments.", comments.len()))
                };
                self.comments = comments;
                self.sentiment = sentiment;
            }
            Err(e) => self.show_error(e),
        }
    }

    fn show_error(&mut self, error: AppError) {
        log::error!("{}", error);
        self.status = Status::Error(error.to_string());
    }
}

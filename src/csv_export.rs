/// CSV export of scraped comments and the browser download that saves it
use crate::comment_data::CommentRecord;
use crate::error::AppError;
use crate::shortcode::Shortcode;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlElement, Url};

pub const CSV_HEADER: &str = "Username,Comment";
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";
const FALLBACK_NAME: &str = "instagram_post";

/// A CSV file ready to be handed to the browser
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub contents: String,
}

impl CsvExport {
    pub fn from_comments(
        comments: &[CommentRecord],
        shortcode: Option<&Shortcode>,
    ) -> Result<CsvExport, AppError> {
        if comments.is_empty() {
            return Err(AppError::EmptyExportSource);
        }

        Ok(CsvExport {
            filename: export_filename(shortcode),
            contents: comments_to_csv(comments),
        })
    }
}

/// Build the CSV text: header line, then one fully quoted row per comment.
/// Embedded quotes are doubled; newlines stay inside the quotes.
pub fn comments_to_csv(comments: &[CommentRecord]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(
            comments
                .iter()
                .map(|c| format!("{},{}", quote_field(&c.username), quote_field(&c.comment))),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

pub fn export_filename(shortcode: Option<&Shortcode>) -> String {
    let name = shortcode.map_or(FALLBACK_NAME, Shortcode::as_str);
    format!("instagram_comments_{}.csv", name)
}

/// Object URL that is revoked when dropped
struct ObjectUrl(String);

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            log::warn!("Failed to revoke object URL: {:?}", e);
        }
    }
}

/// Link element attached to the page body, detached when dropped
struct AttachedLink {
    body: HtmlElement,
    anchor: HtmlAnchorElement,
}

impl Drop for AttachedLink {
    fn drop(&mut self) {
        if let Err(e) = self.body.remove_child(&self.anchor) {
            log::warn!("Failed to remove download link: {:?}", e);
        }
    }
}

/// Save the export through a temporary `<a download>` link.
/// The link and its blob URL are released as soon as the click is dispatched.
pub fn trigger_download(export: &CsvExport) -> Result<(), AppError> {
    save_with_link(export).map_err(|e| AppError::ExportFailed(format!("{:?}", e)))
}

fn save_with_link(export: &CsvExport) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&export.contents));
    let options = BlobPropertyBag::new();
    options.set_type(CSV_MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = ObjectUrl(Url::create_object_url_with_blob(&blob)?);

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url.0);
    anchor.set_download(&export.filename);
    body.append_child(&anchor)?;
    let link = AttachedLink { body, anchor };

    link.anchor.click();
    log::info!("Download triggered for {}", export.filename);

    drop(link);
    drop(url);
    Ok(())
}

//! Response normalization.
//!
//! Every completed exchange becomes three display lines: the request
//! line, the status line, and a body preview capped at 1000 characters.
//! A failed body read is replaced by a fixed placeholder and never fails
//! the tool call.

use reqwire_core::{HttpResponse, HttpVerb};

/// Preview cap, in characters. The ellipsis marker is appended only when
/// the original body is longer.
const BODY_PREVIEW_LIMIT: usize = 1000;

const BODY_READ_PLACEHOLDER: &str = "Unable to get response text";

/// Summarize a live response into the envelope's display lines.
pub(crate) async fn summarize(
    verb: HttpVerb,
    url: &str,
    response: Box<dyn HttpResponse>,
) -> Vec<String> {
    let status = response.status();
    let status_text = response.status_text().to_string();
    let body = match response.text().await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read response body");
            BODY_READ_PLACEHOLDER.to_string()
        }
    };

    vec![
        format!("{} request to {url}", verb.as_str()),
        format!("Status: {status} {status_text}"),
        format!("Response: {}", preview(&body)),
    ]
}

fn preview(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(BODY_PREVIEW_LIMIT).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

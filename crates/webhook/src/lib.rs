//! ZenHub webhook decoder.
//!
//! ZenHub posts webhook notifications as `application/x-www-form-urlencoded`
//! bodies with a `type` discriminator and a flat set of string fields. This
//! crate turns one such body into a single [`board::Event`].
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Receiving the HTTP request (binding a server, checking
//! the source) is the embedding service's job; it hands the raw body bytes to
//! [`parse_webhook_event`]. Parsing is pure and reentrant.

use std::collections::HashMap;

use board::{DecodeError, Event, EventType, IssueTransferWebhookEvent};
use tracing::{debug, warn};
use url::form_urlencoded;

/// Decodes a webhook POST body into an event.
///
/// Keys are matched exactly; when a key repeats the last value wins. Fields
/// ZenHub omitted decode as empty strings.
///
/// # Errors
///
/// - [`DecodeError::Form`] if the body has a malformed percent escape. This is
///   checked before the discriminator.
/// - [`DecodeError::UnknownEventType`] if `type` is missing or names anything
///   other than `issue_transfer`.
pub fn parse_webhook_event(body: &[u8]) -> Result<Event, DecodeError> {
    let mut fields = parse_form(body)?;

    let tag = fields.remove("type").unwrap_or_default();
    debug!(tag = %tag, "decoding webhook event");

    match tag.parse::<EventType>() {
        Ok(EventType::IssueTransfer) => {
            let mut take = |key: &str| fields.remove(key).unwrap_or_default();
            Ok(IssueTransferWebhookEvent {
                github_url: take("github_url"),
                organization: take("organization"),
                repo: take("repo"),
                user_name: take("user_name"),
                issue_number: take("issue_number"),
                issue_title: take("issue_title"),
                to_pipeline_name: take("to_pipeline_name"),
                from_pipeline_name: take("from_pipeline_name"),
            }
            .into())
        }
        // History-only tags are not webhook kinds.
        _ => {
            warn!(tag = %tag, "ignoring webhook with unknown event type");
            Err(DecodeError::UnknownEventType { tag })
        }
    }
}

/// Splits a form body into key/value pairs, last value wins.
fn parse_form(body: &[u8]) -> Result<HashMap<String, String>, DecodeError> {
    check_percent_escapes(body)?;

    let mut fields = HashMap::new();
    for (key, value) in form_urlencoded::parse(body) {
        fields.insert(key.into_owned(), value.into_owned());
    }
    Ok(fields)
}

/// Rejects `%` not followed by two hex digits.
///
/// `form_urlencoded` passes such sequences through untouched; ZenHub never
/// sends them, so their presence means the body is not what we expect.
fn check_percent_escapes(body: &[u8]) -> Result<(), DecodeError> {
    let mut i = 0;
    while i < body.len() {
        if body[i] == b'%' {
            let escape = body.get(i + 1..i + 3);
            match escape {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => {
                    let end = (i + 3).min(body.len());
                    return Err(DecodeError::Form {
                        reason: format!(
                            "invalid URL escape {:?}",
                            String::from_utf8_lossy(&body[i..end])
                        ),
                    });
                }
            }
        } else {
            i += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

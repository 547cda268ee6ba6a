// src/application/notifications/message.rs
//! Message composition for both delivery channels.

use crate::application::notifications::{ContentNotice, PublisherRef};

pub fn email_subject(notice: &ContentNotice) -> String {
    format!("New {} Published: {}", notice.kind.label(), notice.title)
}

pub fn email_body(notice: &ContentNotice, publisher: &PublisherRef) -> String {
    format!(
        "{}\n\nBy: {}\n\n{}\n\nPublisher: {}",
        notice.title, notice.author.name, notice.body, publisher.name
    )
}

/// Title plus a body excerpt capped at `excerpt_chars` characters. Plain
/// character cut, no word-boundary logic.
pub fn social_text(notice: &ContentNotice, excerpt_chars: usize) -> String {
    format!(
        "{}\n\n{}",
        notice.title,
        truncate_chars(&notice.body, excerpt_chars)
    )
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}

//! Info Text Sources
//!
//! Text for new "text" labels comes from an injectable asynchronous provider.
//! The browser crate supplies a prompt-based one; headless hosts pass their
//! own or keep `NoTextSource`, which always declines.

use futures::future::{self, LocalBoxFuture};
use thiserror::Error;

use crate::models::Position;

/// Fixed label of the administrator desk
pub const ADMIN_LABEL: &str = "СТОЙКА\nАДМИНИСТРАТОРА";

/// Where new info entries appear
pub const NEW_INFO_POSITION: Position = Position { top: 30.0, left: 30.0 };

/// The operator supplied no text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no info text was supplied")]
pub struct TextRejected;

/// Asynchronous source of info label text
pub trait InfoTextProvider {
    fn info_text(&self) -> LocalBoxFuture<'static, Result<String, TextRejected>>;
}

impl<F> InfoTextProvider for F
where
    F: Fn() -> LocalBoxFuture<'static, Result<String, TextRejected>>,
{
    fn info_text(&self) -> LocalBoxFuture<'static, Result<String, TextRejected>> {
        self()
    }
}

/// Provider that never yields text
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTextSource;

impl InfoTextProvider for NoTextSource {
    fn info_text(&self) -> LocalBoxFuture<'static, Result<String, TextRejected>> {
        Box::pin(future::ready(Err(TextRejected)))
    }
}

/// Turn raw prompt input into label text: literal `\n` sequences become line
/// breaks and surrounding whitespace is trimmed. Cancelled or blank input is
/// rejected.
pub fn normalize_prompt_text(raw: Option<&str>) -> Result<String, TextRejected> {
    let text = raw
        .unwrap_or_default()
        .replace("\\n", "\n")
        .trim()
        .to_string();

    if text.is_empty() {
        Err(TextRejected)
    } else {
        Ok(text)
    }
}

//! Prompt Text Provider
//!
//! Default text source in the browser: waits a moment so the button click
//! finishes repainting, then asks with the blocking `window.prompt`.

use club_schema_core::{normalize_prompt_text, InfoTextProvider, TextRejected};
use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;

const PROMPT_DELAY_MS: u32 = 50;
const PROMPT_MESSAGE: &str = "Введите текст";

#[derive(Debug, Clone, Copy, Default)]
pub struct PromptTextProvider;

impl InfoTextProvider for PromptTextProvider {
    fn info_text(&self) -> LocalBoxFuture<'static, Result<String, TextRejected>> {
        Box::pin(async {
            TimeoutFuture::new(PROMPT_DELAY_MS).await;

            let answer = web_sys::window()
                .and_then(|window| window.prompt_with_message(PROMPT_MESSAGE).ok())
                .flatten();
            normalize_prompt_text(answer.as_deref())
        })
    }
}

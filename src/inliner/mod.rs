//! CSS inlining
//!
//! This module hands the rewritten document to `css-inline`, which loads the
//! linked (now compiled) stylesheets and merges their rules into `style`
//! attributes. The engine is synchronous, so it runs on tokio's blocking
//! pool and the pipeline awaits it.

pub mod types;

pub use types::InlineOutcome;

use css_inline::{CSSInliner, InlineError};
use std::borrow::Cow;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

use crate::config::InlinerOptions;
use crate::input::StylesheetBase;
use crate::utils::{directory_url, parse_base_url};

/// Base URL handed to the engine
///
/// A caller-supplied `url` wins when it parses; otherwise a local base
/// directory becomes `file://<dir>/`; otherwise there is none.
#[must_use]
pub fn engine_base_url(caller_url: Option<&str>, base: &StylesheetBase) -> Option<Url> {
    if let Some(url) = caller_url.and_then(parse_base_url) {
        return Some(url);
    }
    base.directory().and_then(directory_url)
}

fn build_inliner(options: &InlinerOptions, base_url: Option<Url>) -> CSSInliner<'_> {
    CSSInliner::options()
        .inline_style_tags(options.inline_style_tags)
        .keep_style_tags(options.keep_style_tags)
        .keep_link_tags(options.keep_link_tags)
        .load_remote_stylesheets(options.load_remote_stylesheets)
        .base_url(base_url)
        .extra_css(options.extra_css.as_deref().map(Cow::Borrowed))
        .preallocate_node_capacity(options.preallocate_node_capacity)
        .build()
}

/// Inline CSS synchronously on the current thread
pub fn inline_html_blocking(
    html: &str,
    options: &InlinerOptions,
    base_url: Option<Url>,
) -> Result<String, InlineError> {
    build_inliner(options, base_url).inline(html)
}

/// Inline CSS into `html`, degrading instead of failing
///
/// Engine errors, a panicked blocking task, and an elapsed `limit` all
/// produce `InlineOutcome::Degraded` after being logged.
pub async fn inline_html(
    html: String,
    options: InlinerOptions,
    base_url: Option<Url>,
    limit: Option<Duration>,
) -> InlineOutcome {
    let html_len = html.len();
    let blocking_task = tokio::task::spawn_blocking(move || {
        inline_html_blocking(&html, &options, base_url).map_err(|e| e.to_string())
    });

    let joined = match limit {
        Some(limit) => match timeout(limit, blocking_task).await {
            Ok(joined) => joined,
            Err(_) => {
                return degrade(format!("inlining timed out after {limit:?}"));
            }
        },
        None => blocking_task.await,
    };

    match joined {
        Ok(Ok(inlined)) => {
            log::debug!(
                "Inlined CSS: {html_len} bytes in, {} bytes out",
                inlined.len()
            );
            InlineOutcome::Inlined(inlined)
        }
        Ok(Err(e)) => degrade(e),
        Err(e) => degrade(format!("inlining task panicked: {e}")),
    }
}

fn degrade(reason: String) -> InlineOutcome {
    log::error!("CSS inlining failed: {reason}");
    InlineOutcome::Degraded { reason }
}

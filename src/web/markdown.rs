use ammonia::{Builder, UrlRelative};
use pulldown_cmark::{html, Options, Parser};

use crate::error::{AppError, Result};

/// Converts Markdown content to sanitized HTML.
pub fn safe_markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::all());

    let mut raw_html = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut raw_html, parser);

    sanitize_html(&raw_html)
}

/// Strips scripts, event handlers and relative URLs from rendered HTML.
pub fn sanitize_html(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::Deny)
        .clean(content)
        .to_string()
}

/// Fetches a markdown document and renders it. Non-2xx responses count as
/// failures so an error page is never rendered as article text.
pub async fn fetch_markdown_html(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(AppError::External(format!(
            "Markdown fetch returned {}",
            response.status()
        )));
    }

    let body = response.text().await?;
    Ok(safe_markdown_to_html(&body))
}

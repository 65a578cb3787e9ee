use crate::utils::error::{Result, ScrapeError};
use regex::Regex;
use url::Url;

/// Resolve a thread identifier from a bare numeric ID or an HN item URL
/// such as `https://news.ycombinator.com/item?id=46857488`.
pub fn extract(url_or_id: &str) -> Result<u64> {
    if let Ok(id) = url_or_id.parse::<u64>() {
        if id > 0 {
            tracing::debug!("input is already a thread ID: {}", id);
            return Ok(id);
        }
        return Err(invalid(url_or_id));
    }

    if let Ok(url) = Url::parse(url_or_id) {
        if url.domain().is_some_and(|d| d.ends_with("ycombinator.com")) {
            let id_param = url
                .query_pairs()
                .find(|(key, _)| key == "id")
                .and_then(|(_, value)| value.parse::<u64>().ok());
            if let Some(id) = id_param.filter(|&id| id > 0) {
                tracing::debug!("extracted thread ID from URL: {}", id);
                return Ok(id);
            }
        }
    }

    // Last resort for inputs the URL parser rejects, e.g. a bare
    // "news.ycombinator.com/item?id=123" without a scheme.
    let pattern = Regex::new(r"id[=/](\d+)").expect("hardcoded pattern is valid");
    if let Some(id) = pattern
        .captures(url_or_id)
        .and_then(|captures| captures[1].parse::<u64>().ok())
        .filter(|&id| id > 0)
    {
        tracing::debug!("extracted thread ID from URL pattern: {}", id);
        return Ok(id);
    }

    Err(invalid(url_or_id))
}

fn invalid(input: &str) -> ScrapeError {
    ScrapeError::ThreadIdError {
        input: input.to_string(),
    }
}

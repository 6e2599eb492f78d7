use reqwest::Url;
use crate::api::error::FetchError;

pub fn search_url(base_url: &str) -> Result<Url, FetchError> {
    endpoint(base_url, &["search"])
}

pub fn pair_url(base_url: &str, chain_id: &str, pair_id: &str) -> Result<Url, FetchError> {
    endpoint(base_url, &["pairs", chain_id, pair_id])
}

fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| FetchError::Unexpected(format!("invalid base URL {}: {}", base_url, e)))?;
    url.path_segments_mut()
        .map_err(|_| FetchError::Unexpected(format!("base URL {} cannot take a path", base_url)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

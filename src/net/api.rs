//! Request builders and transport for the site's JSON endpoints.
//!
//! Client-side (hydrate): requests go out through `gloo-net`.
//! Native builds: the builders still work (and are what the tests cover),
//! while `send`/`send_json` return [`NewsroomError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! A transport failure, a non-2xx status and an undecodable body are three
//! distinct error variants so handlers can log precisely; none is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use crate::config::{CsrfConfig, HttpMethod, NewsroomConfig};
use crate::error::NewsroomError;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A fully described same-origin request, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    #[cfg(test)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Encode key/value pairs as `application/x-www-form-urlencoded`.
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

pub fn status_is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn csrf_headers(csrf: &CsrfConfig, token: Option<&str>) -> Vec<(String, String)> {
    match token {
        Some(token) => vec![(csrf.header_name.clone(), token.to_owned())],
        None => {
            log::warn!(
                "no {} cookie; sending request without {}",
                csrf.cookie_name,
                csrf.header_name
            );
            Vec::new()
        }
    }
}

fn form_post(csrf: &CsrfConfig, token: Option<&str>, url: &str, body: String) -> ApiRequest {
    let mut headers = vec![("Content-Type".to_owned(), FORM_CONTENT_TYPE.to_owned())];
    headers.extend(csrf_headers(csrf, token));
    ApiRequest {
        method: HttpMethod::Post,
        url: url.to_owned(),
        headers,
        body: Some(body),
    }
}

/// `POST /toggle-bookmark/` with `article_id=<id>`.
pub fn toggle_bookmark_request(
    config: &NewsroomConfig,
    token: Option<&str>,
    article_id: &str,
) -> ApiRequest {
    form_post(
        &config.csrf,
        token,
        &config.bookmark.endpoint,
        form_body(&[("article_id", article_id)]),
    )
}

/// Refresh trigger; method comes from config and carries no body.
pub fn refresh_news_request(config: &NewsroomConfig, token: Option<&str>) -> ApiRequest {
    ApiRequest {
        method: config.refresh.method,
        url: config.refresh.endpoint.clone(),
        headers: csrf_headers(&config.csrf, token),
        body: None,
    }
}

/// `POST /fetch-summary-single/` with `article_id=<id>`.
pub fn fetch_summary_request(
    config: &NewsroomConfig,
    token: Option<&str>,
    article_id: &str,
) -> ApiRequest {
    form_post(
        &config.csrf,
        token,
        &config.summary.endpoint,
        form_body(&[("article_id", article_id)]),
    )
}

/// `POST /fetch-missing-summaries/` with one `article_ids[]` field per id.
pub fn missing_summaries_request(
    config: &NewsroomConfig,
    token: Option<&str>,
    article_ids: &[String],
) -> ApiRequest {
    let pairs: Vec<(&str, &str)> = article_ids
        .iter()
        .map(|id| ("article_ids[]", id.as_str()))
        .collect();
    form_post(
        &config.csrf,
        token,
        &config.summary.batch_endpoint,
        form_body(&pairs),
    )
}

/// Send `request` and decode a JSON body.
///
/// # Errors
///
/// [`NewsroomError::Network`], [`NewsroomError::Status`] or
/// [`NewsroomError::Decode`] in the browser; [`NewsroomError::Unavailable`]
/// elsewhere.
pub async fn send_json<T: DeserializeOwned>(request: ApiRequest) -> Result<T, NewsroomError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = dispatch(request).await?;
        resp.json::<T>()
            .await
            .map_err(|e| NewsroomError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NewsroomError::Unavailable(request.url))
    }
}

/// Send `request` and only check the status.
///
/// # Errors
///
/// Same as [`send_json`] minus decoding.
pub async fn send(request: ApiRequest) -> Result<u16, NewsroomError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = dispatch(request).await?;
        Ok(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NewsroomError::Unavailable(request.url))
    }
}

#[cfg(feature = "hydrate")]
async fn dispatch(request: ApiRequest) -> Result<gloo_net::http::Response, NewsroomError> {
    use gloo_net::http::Request;

    let ApiRequest {
        method,
        url,
        headers,
        body,
    } = request;
    let mut builder = match method {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
    };
    for (name, value) in &headers {
        builder = builder.header(name, value);
    }
    let sent = match body {
        Some(body) => {
            let request = builder
                .body(body)
                .map_err(|e| NewsroomError::Network(e.to_string()))?;
            request.send().await
        }
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| NewsroomError::Network(e.to_string()))?;
    let status = resp.status();
    if !status_is_success(status) {
        return Err(NewsroomError::Status {
            endpoint: url,
            status,
        });
    }
    Ok(resp)
}

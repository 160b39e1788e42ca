//! Summary-fetch forms and the missing-summary batch trigger.

use std::rc::Rc;

use web_sys::{Element, Event};

use crate::config::NewsroomConfig;
use crate::error::NewsroomError;
use crate::net::api;
use crate::net::types::SummaryBatchResponse;
use crate::state::summary::{batch_article_ids, form_article_id};
use crate::util::{cookie, dom};

const ARTICLE_ID_ATTR: &str = "data-article-id";
const ARTICLE_ID_INPUT: &str = r#"input[name="article_id"]"#;

/// Intercept submission of every summary form. Returns how many were wired.
///
/// # Errors
///
/// Fails when the selector is invalid or a listener cannot be attached.
pub fn install(config: &Rc<NewsroomConfig>) -> Result<usize, NewsroomError> {
    let forms = dom::query_all(&config.summary.form_selector)?;
    for form in &forms {
        let config = Rc::clone(config);
        let target = form.clone();
        dom::listen(form, "submit", move |event: Event| {
            event.prevent_default();
            on_submit(&config, &target);
        })?;
    }
    Ok(forms.len())
}

fn on_submit(config: &NewsroomConfig, form: &Element) {
    let input_value = match dom::query_in(form, ARTICLE_ID_INPUT) {
        Ok(input) => input.and_then(dom::input_value),
        Err(err) => {
            log::warn!("cannot read summary form input: {err}");
            None
        }
    };
    let data_attribute = form.get_attribute(ARTICLE_ID_ATTR);
    let Some(article_id) = form_article_id(data_attribute, input_value) else {
        log::warn!("summary form without article id");
        return;
    };

    let token = cookie::document_cookie(&config.csrf.cookie_name);
    let request = api::fetch_summary_request(config, token.as_deref(), &article_id);
    form.set_inner_html(&config.summary.placeholder_html);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = api::send(request).await {
            log::error!("Error fetching summary for article {article_id}: {err}");
        }
    });
}

/// Ask the server to summarize articles rendered without one.
///
/// # Errors
///
/// Fails when the selector is invalid.
pub fn request_missing(config: &NewsroomConfig) -> Result<(), NewsroomError> {
    if !config.summary.batch_enabled {
        return Ok(());
    }
    let elements = dom::query_all(&config.summary.missing_selector)?;
    let ids = batch_article_ids(
        elements.iter().map(|el| el.get_attribute(ARTICLE_ID_ATTR)),
        config.summary.batch_limit,
    );
    if ids.is_empty() {
        return Ok(());
    }

    let token = cookie::document_cookie(&config.csrf.cookie_name);
    let request = api::missing_summaries_request(config, token.as_deref(), &ids);
    wasm_bindgen_futures::spawn_local(async move {
        match api::send_json::<SummaryBatchResponse>(request).await {
            Ok(resp) => log::debug!("summaries queued for {:?}", resp.triggered),
            Err(err) => log::warn!("missing-summary request failed: {err}"),
        }
    });
    Ok(())
}

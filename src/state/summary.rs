//! Article-id extraction for summary requests.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

/// Article id for a summary form: the form's `data-article-id`, else the
/// value of its `article_id` input. Blank values are skipped.
pub fn form_article_id(
    data_attribute: Option<String>,
    input_value: Option<String>,
) -> Option<String> {
    [data_attribute, input_value]
        .into_iter()
        .flatten()
        .map(|id| id.trim().to_owned())
        .find(|id| !id.is_empty())
}

/// Ids for the missing-summary batch: trimmed, non-blank, first occurrence
/// kept, at most `limit`.
pub fn batch_article_ids<I>(raw_ids: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut ids: Vec<String> = Vec::new();
    for id in raw_ids.into_iter().flatten() {
        if ids.len() >= limit {
            break;
        }
        let id = id.trim();
        if id.is_empty() || ids.iter().any(|seen| seen == id) {
            continue;
        }
        ids.push(id.to_owned());
    }
    ids
}

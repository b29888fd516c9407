//! Shape validation for structured assistant responses.
//!
//! Structured calls return JSON text. Parsing alone is not enough: the
//! client promises callers a list of 3-4 complete options or exactly three
//! questions, so anything else is reported as malformed.

use std::{collections::HashSet, ops::RangeInclusive};

use serde::de::DeserializeOwned;

use super::backend::Citation;
use crate::{
    error::AssistantError,
    models::{BrainstormOption, SuggestedResource},
};

pub(crate) const OPTION_COUNT: RangeInclusive<usize> = 3..=4;
pub(crate) const QUESTION_COUNT: usize = 3;

const UNTITLED_RESOURCE: &str = "Untitled Resource";

/// Removes a surrounding markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening line
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, AssistantError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(AssistantError::EmptyResponse);
    }
    serde_json::from_str(body).map_err(|e| AssistantError::malformed(e.to_string()))
}

fn all_filled(items: &[String]) -> bool {
    items.iter().all(|item| !item.trim().is_empty())
}

pub(crate) fn parse_options(text: &str) -> Result<Vec<BrainstormOption>, AssistantError> {
    let options: Vec<BrainstormOption> = parse_json(text)?;

    if !OPTION_COUNT.contains(&options.len()) {
        return Err(AssistantError::malformed(format!(
            "expected 3-4 options, got {}",
            options.len()
        )));
    }

    for (index, option) in options.iter().enumerate() {
        let complete = !option.option.trim().is_empty()
            && !option.pros.is_empty()
            && !option.cons.is_empty()
            && all_filled(&option.pros)
            && all_filled(&option.cons);
        if !complete {
            return Err(AssistantError::malformed(format!(
                "option {} is missing a title, pros or cons",
                index + 1
            )));
        }
    }

    Ok(options)
}

pub(crate) fn parse_questions(text: &str) -> Result<Vec<String>, AssistantError> {
    let questions: Vec<String> = parse_json(text)?;

    if questions.len() != QUESTION_COUNT {
        return Err(AssistantError::malformed(format!(
            "expected exactly 3 questions, got {}",
            questions.len()
        )));
    }
    if !all_filled(&questions) {
        return Err(AssistantError::malformed("a question is empty"));
    }

    Ok(questions)
}

/// Converts citations into resources.
///
/// Citations without a usable uri are dropped, never filled in; repeated
/// uris keep their first occurrence.
pub(crate) fn grounded_resources(citations: &[Citation]) -> Vec<SuggestedResource> {
    let mut seen = HashSet::new();
    citations
        .iter()
        .filter_map(|citation| {
            let url = citation.uri.as_deref()?.trim();
            if url.is_empty() || !seen.insert(url.to_string()) {
                return None;
            }
            let title = citation
                .title
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .unwrap_or(UNTITLED_RESOURCE);
            Some(SuggestedResource {
                title: title.to_string(),
                url: url.to_string(),
                description: None,
            })
        })
        .collect()
}

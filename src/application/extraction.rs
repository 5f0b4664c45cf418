//! Listing page extraction
//!
//! Downloads a listing page, asks the model for the next batch of
//! resorts as JSON, and parses the reply. The conversation history is
//! replayed on every call so the model keeps the context of earlier
//! batches.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::infrastructure::model::{ModelError, ModelProvider, ModelRequest};
use crate::infrastructure::web::{FetchError, PageFetcher, slice_body};
use crate::types::ChatMessage;

fn na() -> String {
    "N/A".to_string()
}

/// Models occasionally return numbers for fields like Star Rating.
/// Coerce scalars to strings instead of failing the whole batch.
fn flexible_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        Value::Null => na(),
        other => other.to_string(),
    })
}

/// One extracted resort. Field names follow the JSON keys the
/// extraction prompt asks for; absent fields become "N/A".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Resort {
    #[serde(rename = "Resort Name", default = "na", deserialize_with = "flexible_string")]
    pub name: String,
    #[serde(rename = "Country", default = "na", deserialize_with = "flexible_string")]
    pub country: String,
    #[serde(rename = "Description", default = "na", deserialize_with = "flexible_string")]
    pub description: String,
    #[serde(rename = "Star Rating", default = "na", deserialize_with = "flexible_string")]
    pub star_rating: String,
    #[serde(rename = "Price", default = "na", deserialize_with = "flexible_string")]
    pub price: String,
    #[serde(rename = "Main Picture", default = "na", deserialize_with = "flexible_string")]
    pub main_picture: String,
}

/// Errors raised while extracting a batch
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("extraction reply was not a valid JSON array: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ExtractionError {
    /// HTML paragraph shown to the user in place of a result table
    pub fn user_reply(&self) -> String {
        match self {
            ExtractionError::Fetch(error) => format!(
                "<p>Sorry, I couldn't access the website at that URL. Error: {error}</p>"
            ),
            ExtractionError::Parse(_) => {
                "<p>Sorry, I received an invalid format from the extraction service. \
                 I can't process the results.</p>"
                    .to_string()
            }
            ExtractionError::Model(error) => {
                format!("<p>Sorry, an unexpected error occurred: {error}</p>")
            }
        }
    }
}

/// Inputs for one extraction batch
#[derive(Debug, Clone)]
pub struct BatchRequest<'a> {
    pub url: &'a str,
    pub criteria: &'a str,
    pub page_offset: usize,
    pub page_size: usize,
    pub known_names: &'a [String],
}

/// Fetch the listing page and ask the model for the next batch.
/// On success both turns are appended to `history`; a parse failure
/// still records the exchange since the model did answer.
pub async fn extract_batch<P: ModelProvider>(
    model: &P,
    fetcher: &dyn PageFetcher,
    model_name: &str,
    history: &mut Vec<ChatMessage>,
    request: BatchRequest<'_>,
) -> Result<Vec<Resort>, ExtractionError> {
    info!(
        offset = request.page_offset,
        known = request.known_names.len(),
        "Extracting resort batch"
    );

    let page = fetcher.fetch(request.url).await?;
    let body = slice_body(&page);
    debug!(page_bytes = page.len(), body_bytes = body.len(), "Listing page downloaded");

    let prompt = build_extraction_prompt(
        request.criteria,
        request.page_offset,
        request.page_size,
        request.known_names,
        body,
    );

    let mut messages = history.clone();
    messages.push(ChatMessage::user(prompt.clone()));

    let response = model
        .chat(ModelRequest {
            model: model_name.to_string(),
            messages,
        })
        .await?;

    let reply = response.message.content.clone();
    history.push(ChatMessage::user(prompt));
    history.push(response.message);

    let json_text = strip_code_fences(&reply);
    let batch: Vec<Resort> = serde_json::from_str(&json_text)?;
    Ok(batch)
}

/// Remove markdown code fences the model wraps JSON in
pub fn strip_code_fences(text: &str) -> String {
    text.trim().replace("```json", "").replace("```", "")
}

/// Build the extraction prompt for one batch
pub fn build_extraction_prompt(
    criteria: &str,
    page_offset: usize,
    page_size: usize,
    known_names: &[String],
    page_body: &str,
) -> String {
    format!(
        "Analyze the following HTML content and extract data for holiday resorts \
         based on these criteria: '{criteria}'.\n\
         \n\
         Extract the following fields for each resort:\n\
         - Resort Name\n\
         - Country\n\
         - Description\n\
         - Star Rating\n\
         - Price\n\
         - Main Picture (the full URL to the image)\n\
         \n\
         Follow these rules:\n\
         1. Identify the top {page_size} resorts from the HTML that match the criteria, \
         starting from result number {page_offset}.\n\
         2. Do NOT include any resorts from this list of already extracted names: {known}.\n\
         3. If a field (like 'Price' or 'Star Rating') is not found for a resort, set its \
         value to \"N/A\".\n\
         4. Return the data as a single, valid JSON array of objects. Do not include any \
         text or explanations outside of the JSON array.\n\
         \n\
         Example of the exact output format expected:\n\
         [\n\
             {{\n\
                 \"Resort Name\": \"Example Resort 1\",\n\
                 \"Country\": \"Spain\",\n\
                 \"Description\": \"A beautiful resort...\",\n\
                 \"Star Rating\": \"4\",\n\
                 \"Price\": \"$200/night\",\n\
                 \"Main Picture\": \"https://example.com/image1.jpg\"\n\
             }}\n\
         ]\n\
         \n\
         HTML Content to analyze is provided below:\n\
         ---\n\
         {page_body}",
        known = known_names.join(", "),
    )
}

//! Guided extraction conversation
//!
//! A three step flow driven entirely over chat: the first message is
//! taken as the listing URL, the second as the search criteria, and
//! every message after that is either CONTINUE, FINISH, or a nudge
//! back to those two keywords. The flow is intentionally a single
//! shared conversation, matching a one-operator tool.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use super::extraction::{BatchRequest, Resort, extract_batch};
use super::report;
use crate::config::{AppConfig, ExtractionConfig};
use crate::infrastructure::model::ModelProvider;
use crate::infrastructure::web::PageFetcher;
use crate::types::ChatMessage;

const CRITERIA_QUESTION: &str = "What are the specific criteria for the resorts you want me to \
                                 find? (e.g., number of stars, location, amenities).";

const NUDGE: &str = "Please use CONTINUE to get more results or FINISH to complete the process.";

const NO_MORE_PARAGRAPH: &str = "<p>No more resorts found matching your criteria.</p>";

const NO_MORE_SENTENCE: &str = "No more resorts matching the criteria were found.";

const CONSOLIDATING: &str = "Consolidating all extracted data...<br>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Step {
    #[default]
    AwaitingUrl,
    AwaitingCriteria,
    Extracting,
}

#[derive(Default)]
struct Conversation {
    step: Step,
    url: Option<String>,
    criteria: Option<String>,
    extracted: Vec<Resort>,
    page_offset: usize,
    history: Vec<ChatMessage>,
}

/// Outcome of one extraction batch, before it is phrased for the step
/// that requested it
enum BatchReply {
    Table(String),
    NoMore,
    Failed(String),
}

/// The chat-driven extraction assistant. One instance serves the
/// whole process; concurrent requests are serialized on the
/// conversation lock.
pub struct Assistant<P: ModelProvider> {
    model: P,
    fetcher: Arc<dyn PageFetcher>,
    model_name: String,
    extraction: ExtractionConfig,
    conversation: Mutex<Conversation>,
}

impl<P: ModelProvider> Assistant<P> {
    pub fn new(model: P, fetcher: Arc<dyn PageFetcher>, config: &AppConfig) -> Self {
        Self {
            model,
            fetcher,
            model_name: config.model.clone(),
            extraction: config.extraction.clone(),
            conversation: Mutex::new(Conversation::default()),
        }
    }

    /// Advance the conversation with one user message and produce the
    /// reply. Never fails; extraction problems come back as apologetic
    /// HTML paragraphs.
    pub async fn handle(&self, message: &str) -> String {
        let mut convo = self.conversation.lock().await;

        match convo.step {
            Step::AwaitingUrl => {
                convo.url = Some(message.to_string());
                convo.step = Step::AwaitingCriteria;
                info!("Listing URL captured, asking for criteria");
                CRITERIA_QUESTION.to_string()
            }
            Step::AwaitingCriteria => {
                convo.criteria = Some(message.to_string());
                convo.step = Step::Extracting;
                info!("Criteria captured, starting first extraction");

                let mut reply = capture_plan(self.extraction.page_size);
                let first_batch = match self.run_batch(&mut convo).await {
                    BatchReply::Table(table) => table,
                    BatchReply::NoMore => NO_MORE_PARAGRAPH.to_string(),
                    BatchReply::Failed(apology) => apology,
                };
                reply.push_str(&first_batch);
                reply
            }
            Step::Extracting => {
                if message.eq_ignore_ascii_case("CONTINUE") {
                    convo.page_offset += self.extraction.page_size;
                    match self.run_batch(&mut convo).await {
                        BatchReply::Table(table) => table,
                        BatchReply::NoMore => NO_MORE_SENTENCE.to_string(),
                        BatchReply::Failed(apology) => apology,
                    }
                } else if message.eq_ignore_ascii_case("FINISH") {
                    let mut reply = String::from(CONSOLIDATING);
                    reply.push_str(&report::consolidate_by_country(&convo.extracted));
                    info!(resorts = convo.extracted.len(), "Consolidated and reset");

                    let history = std::mem::take(&mut convo.history);
                    *convo = Conversation {
                        history,
                        ..Conversation::default()
                    };
                    reply
                } else {
                    NUDGE.to_string()
                }
            }
        }
    }

    /// Start the conversation over. The model history is kept so the
    /// session context survives, like a page reload did originally.
    pub async fn reset(&self) {
        let mut convo = self.conversation.lock().await;
        let history = std::mem::take(&mut convo.history);
        *convo = Conversation {
            history,
            ..Conversation::default()
        };
        info!("Conversation state reset");
    }

    async fn run_batch(&self, convo: &mut Conversation) -> BatchReply {
        let url = convo.url.clone().unwrap_or_default();
        let criteria = convo.criteria.clone().unwrap_or_default();
        let known: Vec<String> = convo.extracted.iter().map(|r| r.name.clone()).collect();

        let request = BatchRequest {
            url: &url,
            criteria: &criteria,
            page_offset: convo.page_offset,
            page_size: self.extraction.page_size,
            known_names: &known,
        };

        match extract_batch(
            &self.model,
            self.fetcher.as_ref(),
            &self.model_name,
            &mut convo.history,
            request,
        )
        .await
        {
            Ok(batch) if batch.is_empty() => BatchReply::NoMore,
            Ok(batch) => {
                for resort in &batch {
                    if !convo.extracted.iter().any(|known| known.name == resort.name) {
                        convo.extracted.push(resort.clone());
                    }
                }
                BatchReply::Table(report::render_table(&batch))
            }
            Err(error) => {
                error!(%error, "Resort extraction failed");
                BatchReply::Failed(error.user_reply())
            }
        }
    }
}

/// Capture plan announced after the criteria arrive
fn capture_plan(page_size: usize) -> String {
    format!(
        "I will capture the following critical data points for each resort:\n\
         <ul>\n\
             <li>Resort Name</li>\n\
             <li>Country</li>\n\
             <li>Description</li>\n\
             <li>Star Rating</li>\n\
             <li>Price</li>\n\
             <li>Main Picture (Image)</li>\n\
         </ul>\n\
         All data will be presented in a clean, organized table format.\n\
         I will now extract information for the first {page_size} resorts that match your \
         criteria.\n\
         Once I've provided the first {page_size} resorts, you can type <b>CONTINUE</b> to get \
         the next {page_size}. If you have finished, type <b>FINISH</b>."
    )
}

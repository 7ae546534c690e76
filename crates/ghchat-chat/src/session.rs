use anyhow::{Context, Result};
use serde_json::Value;

use ghchat_logging::{log_request, log_response};
use ghchat_models::{ChatRequest, ChatResponse, Message, Usage};

use crate::registry::ModelRegistry;
use crate::{DEFAULT_MODELS, INFERENCE_API_URL};

/// Outcome of one submission attempt
#[derive(Debug, PartialEq)]
pub enum TurnOutcome {
    /// Assistant reply appended to the conversation
    Reply {
        content: String,
        usage: Option<Usage>,
    },
    /// The user message was sent but no assistant message came back
    /// (transport failure, non-JSON body, or a response without
    /// choices). Details live in the response snapshot.
    NoReply,
    /// Preconditions not met (empty input, missing token, no selected
    /// model) or a request already in flight; nothing was appended or
    /// sent.
    Blocked,
}

/// Chat console state: configuration plus the append-only conversation.
///
/// The conversation grows by exactly one user message per turn, plus
/// one assistant message when the response carries a choice. Nothing
/// is ever rolled back or rewritten.
pub struct ChatSession {
    pub token: String,
    pub registry: ModelRegistry,
    pub system_prompt: String,
    pub api_url: String,
    pub verbose: bool,
    client: reqwest::Client,
    messages: Vec<Message>,
    request_json: Option<String>,
    response_json: Option<String>,
    pending: bool,
}

impl ChatSession {
    pub fn new(token: String) -> Self {
        Self {
            token,
            registry: ModelRegistry::with_models(DEFAULT_MODELS),
            system_prompt: String::new(),
            api_url: INFERENCE_API_URL.to_string(),
            verbose: false,
            client: reqwest::Client::new(),
            messages: Vec::new(),
            request_json: None,
            response_json: None,
            pending: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Last outbound payload, pretty-printed; retained for inspection only
    pub fn request_json(&self) -> Option<&str> {
        self.request_json.as_deref()
    }

    /// Last inbound body (or error object), pretty-printed
    pub fn response_json(&self) -> Option<&str> {
        self.response_json.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Run one turn: append the user message and issue a single request
    /// against the inference endpoint.
    ///
    /// The user message is appended before the network call resolves
    /// and stays in the conversation whatever the outcome. The
    /// assistant message from `choices[0]` is appended verbatim when
    /// present. Transport and parse failures are caught here, recorded
    /// into the response snapshot, and never propagate.
    pub async fn submit(&mut self, input: &str) -> TurnOutcome {
        let input = input.trim();
        if input.is_empty() || self.token.is_empty() || self.pending {
            return TurnOutcome::Blocked;
        }
        let Some(model) = self.registry.selected().map(str::to_string) else {
            return TurnOutcome::Blocked;
        };

        self.messages.push(Message::user(input));
        self.pending = true;

        let request = ChatRequest::assemble(&self.system_prompt, &self.messages, &model);
        self.request_json = serde_json::to_string_pretty(&request).ok();

        let outcome = match self.call_api(&request).await {
            Ok(body) => {
                self.response_json = serde_json::to_string_pretty(&body).ok();
                self.append_reply(body)
            }
            Err(e) => {
                let error = serde_json::json!({ "error": e.to_string() });
                self.response_json = serde_json::to_string_pretty(&error).ok();
                TurnOutcome::NoReply
            }
        };

        self.pending = false;
        outcome
    }

    /// Append `choices[0].message` to the conversation if the body has
    /// at least one choice.
    fn append_reply(&mut self, body: Value) -> TurnOutcome {
        let Ok(response) = serde_json::from_value::<ChatResponse>(body) else {
            return TurnOutcome::NoReply;
        };

        match response.choices.into_iter().next() {
            Some(choice) => {
                let content = choice.message.content.clone();
                self.messages.push(choice.message);
                TurnOutcome::Reply {
                    content,
                    usage: response.usage,
                }
            }
            None => TurnOutcome::NoReply,
        }
    }

    /// Issue the POST and return whatever JSON body came back,
    /// regardless of HTTP status. Error bodies are still snapshots.
    async fn call_api(&self, request: &ChatRequest) -> Result<Value> {
        log_request(&self.api_url, request, &self.token, self.verbose);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .context("request to inference endpoint failed")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read response body")?;

        log_response(&status, &body, self.verbose);

        serde_json::from_str(&body)
            .with_context(|| format!("response was not JSON (status {})", status))
    }
}

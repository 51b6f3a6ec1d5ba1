//! Shared test doubles: a scripted model provider and a counting rate lookup.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use moneychanger::error::MoneyChangerError;
use moneychanger::provider::{ModelProvider, ProviderRequest, ProviderResponse};
use moneychanger::rates::RateLookup;
use moneychanger::types::*;

/// A provider that replays queued turns in order and records every request.
pub struct ScriptedProvider {
    turns: Mutex<Vec<Result<ProviderResponse, MoneyChangerError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            turns: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a turn that ends with plain text.
    pub fn queue_text(&self, text: &str) {
        self.queue_turn(text, Some(FinishReason::Stop));
    }

    /// Queue a turn with an arbitrary finish reason.
    pub fn queue_turn(&self, text: &str, finish_reason: Option<FinishReason>) {
        self.turns.lock().unwrap().push(Ok(ProviderResponse {
            text: text.to_string(),
            tool_calls: vec![],
            finish_reason,
        }));
    }

    /// Queue a turn that asks for a tool call.
    pub fn queue_tool_call(&self, name: &str, args: serde_json::Value) {
        self.turns.lock().unwrap().push(Ok(ProviderResponse {
            text: String::new(),
            tool_calls: vec![AgentToolCall {
                id: "call_1".to_string(),
                name: name.to_string(),
                arguments: args,
            }],
            finish_reason: Some(FinishReason::ToolCalls),
        }));
    }

    /// Queue a turn that fails in transport.
    pub fn queue_error(&self, error: MoneyChangerError) {
        self.turns.lock().unwrap().push(Err(error));
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelProvider for ScriptedProvider {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model_id(&self) -> &str {
        "scripted-model"
    }

    async fn generate_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, MoneyChangerError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut turns = self.turns.lock().unwrap();
        if turns.is_empty() {
            return Err(MoneyChangerError::api(500, "no scripted turn left"));
        }
        turns.remove(0)
    }
}

/// A rate lookup returning a fixed converted amount, or failing, while
/// counting calls.
pub struct CountingRates {
    converted: Option<String>,
    calls: AtomicUsize,
    seen: Mutex<Vec<ConversionRequest>>,
}

impl CountingRates {
    pub fn returning(converted: &str) -> Self {
        Self {
            converted: Some(converted.to_string()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            converted: None,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<ConversionRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl RateLookup for CountingRates {
    async fn get_rate(
        &self,
        base: &str,
        target: &str,
        amount: &str,
    ) -> Result<ConversionResult, MoneyChangerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push(ConversionRequest::new(base, target, amount));
        match &self.converted {
            Some(converted) => Ok(conversion_result(base, target, amount, converted)),
            None => Err(MoneyChangerError::api(503, "rate service unavailable")),
        }
    }
}

/// Build a `ConversionResult` from a provider-style numeric value.
pub fn conversion_result(base: &str, target: &str, amount: &str, converted: &str) -> ConversionResult {
    let number: serde_json::Number = serde_json::from_str(converted).unwrap();
    ConversionResult::from_number(&ConversionRequest::new(base, target, amount), &number).unwrap()
}

//! Inbound relay pipeline
//!
//! Takes one provider delivery envelope, classifies it, forwards the
//! message text to the completion backend, and delivers the reply back
//! to the originating chat out-of-band. Each invocation is single-turn
//! and stateless; concurrent deliveries may complete in any order.

use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::context::ServiceContext;

/// Reply delivered when the completion backend fails, instead of
/// dropping the message silently.
pub const FALLBACK_REPLY: &str = "could not process your message";

// ============================================================================
// Delivery envelope
// ============================================================================

/// Provider delivery envelope for one update.
///
/// Only the fields the relay consumes are modeled; everything else in
/// the provider's payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUpdate {
    #[serde(default)]
    pub update_id: Option<i64>,
    #[serde(default)]
    pub message: Option<TelegramMessage>,
}

/// The conversational part of an update, when present
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramMessage {
    #[serde(default)]
    pub chat: Option<TelegramChat>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Originating chat reference
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
}

/// Explicit classification of an inbound update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateKind {
    /// Update type without a message field (edits, joins, etc.)
    NotAMessage,
    /// Message without an originating chat id
    Malformed,
    /// Message without text, or with only whitespace
    EmptyText,
    /// A relayable chat message
    Message { chat_id: i64, text: String },
}

impl TelegramUpdate {
    /// Classify this update into one of the explicit relay cases.
    pub fn classify(self) -> UpdateKind {
        let Some(message) = self.message else {
            return UpdateKind::NotAMessage;
        };
        let Some(chat) = message.chat else {
            return UpdateKind::Malformed;
        };
        match message.text {
            Some(text) if !text.trim().is_empty() => UpdateKind::Message {
                chat_id: chat.id,
                text,
            },
            _ => UpdateKind::EmptyText,
        }
    }
}

// ============================================================================
// Relay service
// ============================================================================

/// Outcome of one relay invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Update acknowledged without forwarding
    Skipped,
    /// Model reply delivered to the chat
    Replied,
    /// Completion failed; the fallback reply was delivered instead
    FallbackReplied,
    /// Outbound delivery to the chat failed; the failure is absorbed
    DeliveryFailed,
}

/// Inbound relay service
pub struct RelayService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RelayService<'a> {
    /// Create a new RelayService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle one inbound update end to end.
    ///
    /// Non-message and malformed updates are skipped without touching
    /// the completion backend or the provider.
    #[instrument(skip(self, update))]
    pub async fn handle(&self, update: TelegramUpdate) -> RelayOutcome {
        match update.classify() {
            UpdateKind::Message { chat_id, text } => self.process(chat_id, &text).await,
            kind => {
                debug!(?kind, "Skipping non-relayable update");
                RelayOutcome::Skipped
            }
        }
    }

    /// Forward one message to the completion backend and deliver the
    /// reply to the originating chat.
    ///
    /// Failures never propagate out of the relay: a completion failure
    /// downgrades to the fallback reply, a delivery failure is logged
    /// and absorbed. The provider acknowledgment does not depend on
    /// this method at all.
    #[instrument(skip(self, text))]
    pub async fn process(&self, chat_id: i64, text: &str) -> RelayOutcome {
        let model = self.ctx.relay_model();

        let (reply, fallback) = match self.ctx.completion().complete(model, text).await {
            Ok(reply) => (reply, false),
            Err(e) => {
                warn!(error = %e, chat_id, "Completion failed for relayed message");
                (FALLBACK_REPLY.to_string(), true)
            }
        };

        match self.ctx.telegram().send_message(chat_id, &reply).await {
            Ok(()) if fallback => RelayOutcome::FallbackReplied,
            Ok(()) => {
                info!(chat_id, "Relayed reply delivered");
                RelayOutcome::Replied
            }
            Err(e) => {
                warn!(error = %e, chat_id, "Reply delivery failed");
                RelayOutcome::DeliveryFailed
            }
        }
    }
}

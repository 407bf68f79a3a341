//! # Cooking Assistant
//!
//! A toy chat assistant that lives beside the recipe box and shares nothing
//! with it. It is a plain request/response loop:
//!
//! 1. the user's message is appended to the transcript,
//! 2. the session waits a simulated network delay ([`Latency`]),
//! 3. a [`ReplySource`] produces the answer, which is appended too.
//!
//! The reply source is injected, so the canned [`KeywordReplies`] table can be
//! swapped for a real backend without touching the session logic. A failing
//! source does not fail the session: the bot answers with an apology instead.

use crate::error::Result;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::time::Duration;
use uuid::Uuid;

pub mod replies;

pub use replies::KeywordReplies;

const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Anything that can answer a chat message.
pub trait ReplySource {
    fn reply(&self, message: &str) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// Simulated reply delay, sampled uniformly from `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub min: Duration,
    pub max: Duration,
}

impl Latency {
    pub fn none() -> Self {
        Self {
            min: Duration::ZERO,
            max: Duration::ZERO,
        }
    }

    pub fn between(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub fn sample(&self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }
}

pub struct ChatSession<R: ReplySource> {
    source: R,
    latency: Latency,
    messages: Vec<ChatMessage>,
}

impl<R: ReplySource> ChatSession<R> {
    pub fn new(source: R, latency: Latency, welcome: &str) -> Self {
        let mut messages = Vec::new();
        if !welcome.is_empty() {
            messages.push(ChatMessage::new(welcome, Sender::Bot));
        }
        Self {
            source,
            latency,
            messages,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Sends a message and blocks until the reply arrives.
    ///
    /// Blank input is ignored and returns `None`. Otherwise returns the bot's
    /// reply, which is also in the transcript.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(text, Sender::User));

        let delay = self.latency.sample();
        tracing::debug!(?delay, "waiting for chat reply");
        std::thread::sleep(delay);

        let reply = match self.source.reply(text) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "chat reply source failed");
                ERROR_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage::new(reply, Sender::Bot));
        self.messages.last()
    }
}

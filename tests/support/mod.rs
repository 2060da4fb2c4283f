#![allow(dead_code)]

//! Test doubles for driving the relay control without a network.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use nodepulse::domain::{ApiToken, ChatId, MessageId, NodeStatus, UserInformation};
use nodepulse::error::{Error, Result};
use nodepulse::port::outbound::gateway::AccountGateway;
use nodepulse::port::outbound::messenger::Messenger;
use nodepulse::port::outbound::tokens::TokenSource;

/// One observable messenger interaction, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Sent { id: MessageId, text: String },
    Deleted { id: MessageId },
}

/// Thread-safe messenger double recording sends and deletes for assertions.
#[derive(Default)]
pub struct RecordingMessenger {
    next_id: AtomicI32,
    send_ordinal: AtomicUsize,
    log: Mutex<Vec<ChatEvent>>,
    failing_sends: Mutex<HashSet<usize>>,
}

impl RecordingMessenger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make the `ordinal`-th send (0-based, across the messenger's life)
    /// fail.
    pub fn fail_send(&self, ordinal: usize) {
        self.failing_sends.lock().expect("lock sends").insert(ordinal);
    }

    pub fn events(&self) -> Vec<ChatEvent> {
        self.log.lock().expect("lock event log").clone()
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ChatEvent::Sent { text, .. } => Some(text),
                ChatEvent::Deleted { .. } => None,
            })
            .collect()
    }

    pub fn sent_ids(&self) -> Vec<MessageId> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ChatEvent::Sent { id, .. } => Some(id),
                ChatEvent::Deleted { .. } => None,
            })
            .collect()
    }

    pub fn deleted_ids(&self) -> Vec<MessageId> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ChatEvent::Deleted { id } => Some(id),
                ChatEvent::Sent { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send(&self, _chat: ChatId, text: &str) -> Result<MessageId> {
        let ordinal = self.send_ordinal.fetch_add(1, Ordering::SeqCst);
        if self
            .failing_sends
            .lock()
            .expect("lock sends")
            .contains(&ordinal)
        {
            return Err(Error::Delivery("simulated send failure".to_string()));
        }

        let id = MessageId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.log.lock().expect("lock event log").push(ChatEvent::Sent {
            id,
            text: text.to_string(),
        });
        Ok(id)
    }

    async fn reply(&self, chat: ChatId, _reply_to: MessageId, text: &str) -> Result<MessageId> {
        self.send(chat, text).await
    }

    async fn delete(&self, _chat: ChatId, message: MessageId) -> Result<()> {
        self.log
            .lock()
            .expect("lock event log")
            .push(ChatEvent::Deleted { id: message });
        Ok(())
    }
}

/// Gateway double serving scripted account data keyed by raw token.
#[derive(Default)]
pub struct ScriptedGateway {
    users: HashMap<String, UserInformation>,
    statuses: HashMap<String, NodeStatus>,
    calls: AtomicUsize,
}

impl ScriptedGateway {
    #[must_use]
    pub fn with_account(mut self, token: &str, user: UserInformation, status: NodeStatus) -> Self {
        self.users.insert(token.to_string(), user);
        self.statuses.insert(token.to_string(), status);
        self
    }

    #[must_use]
    pub fn with_user_only(mut self, token: &str, user: UserInformation) -> Self {
        self.users.insert(token.to_string(), user);
        self
    }

    #[must_use]
    pub fn with_status_only(mut self, token: &str, status: NodeStatus) -> Self {
        self.statuses.insert(token.to_string(), status);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountGateway for ScriptedGateway {
    async fn user_information(&self, token: &ApiToken) -> Option<UserInformation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.users.get(token.as_str()).cloned()
    }

    async fn node_running_status(&self, token: &ApiToken) -> Option<NodeStatus> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.statuses.get(token.as_str()).cloned()
    }
}

/// Token source returning a fixed list.
pub struct StaticTokens(pub Vec<ApiToken>);

impl StaticTokens {
    pub fn of(raw: &[&str]) -> Arc<Self> {
        Arc::new(Self(raw.iter().map(|token| ApiToken::new(*token)).collect()))
    }
}

impl TokenSource for StaticTokens {
    fn load(&self) -> Vec<ApiToken> {
        self.0.clone()
    }
}

/// A populated profile snapshot for tests.
pub fn sample_user(nickname: &str) -> UserInformation {
    UserInformation {
        wallet_addr: "0xabcdef1234567890".to_string(),
        unique_identification_code: "UID-1234".to_string(),
        email: "node@example.com".to_string(),
        nickname: nickname.to_string(),
        avatar_url: "https://cdn.example.com/a.png".to_string(),
        email_verification_status: 1,
    }
}

/// A running node with 1h 1m 1s of uptime.
pub fn running_status() -> NodeStatus {
    NodeStatus {
        node_status: 1,
        total_running_time_secs: 3661,
    }
}

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chirp_insight::{CompletionGateway, CompletionRequest, ContentIntelligence};

/// Gateway replaying canned replies; `None` simulates an outage
#[derive(Default)]
pub struct FakeGateway {
    replies: Mutex<VecDeque<Option<String>>>,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl FakeGateway {
    pub fn scripted(replies: &[Option<&str>]) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.iter().map(|r| r.map(String::from)).collect()),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn always(reply: &str) -> Arc<Self> {
        Self::scripted(&[Some(reply)])
    }

    pub fn down() -> Arc<Self> {
        Self::scripted(&[])
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn prompt(&self, index: usize) -> String {
        self.seen.lock().unwrap()[index]
            .user_prompt()
            .unwrap_or_default()
            .to_string()
    }
}

#[async_trait]
impl CompletionGateway for FakeGateway {
    async fn complete(&self, request: &CompletionRequest) -> Option<String> {
        self.seen.lock().unwrap().push(request.clone());
        self.replies.lock().unwrap().pop_front().flatten()
    }
}

pub fn service(gateway: &Arc<FakeGateway>) -> ContentIntelligence {
    ContentIntelligence::new(gateway.clone())
}

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use secrecy::SecretString;
use stock_fetcher::{HttpTransport, Pacer, ProviderError};

/// One recorded GET: the URL and its query pairs.
#[derive(Debug, Clone)]
pub struct Call {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl Call {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Transport answering from a script, in order. Runs dry with a 500.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(self: &Arc<Self>, body: &str) -> Arc<Self> {
        self.replies.lock().unwrap().push_back(Ok(body.to_string()));
        Arc::clone(self)
    }

    pub fn fail(self: &Arc<Self>, status: u16) -> Arc<Self> {
        self.replies.lock().unwrap().push_back(Err(ProviderError::Status {
            status,
            body: String::new(),
        }));
        Arc::clone(self)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl HttpTransport for ScriptedTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(Call {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ProviderError::Status {
                status: 500,
                body: "script exhausted".to_string(),
            }))
    }
}

/// Pacer that only counts how often it was asked to wait.
#[derive(Clone, Default)]
pub struct CountingPacer(pub Arc<AtomicUsize>);

impl CountingPacer {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl Pacer for CountingPacer {
    fn pause(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn api_key() -> SecretString {
    SecretString::from("test-key".to_string())
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// TESTING - Dobles de prueba para wallet, avisos y reloj
// ============================================================================

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use alloy_primitives::{address, Address};
use chrono::NaiveDateTime;
use futures::future::{self, LocalBoxFuture};
use serde_json::Value;
use crate::error::VaultError;
use crate::services::{Clock, Notifier, WalletProvider};

pub const CONTRACT: Address = address!("5fbdb2315678afecb367f032d93f642f64180aa3");
pub const SIGNER: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
pub const TX_HASH: &str = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";

/// Wallet simulada: respuestas encoladas por método, registro de llamadas
#[derive(Default)]
pub struct MockProvider {
    responses: RefCell<HashMap<String, VecDeque<Result<Value, VaultError>>>>,
    calls: RefCell<Vec<(String, Value)>>,
    sleeps: RefCell<Vec<u32>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: &str, response: Result<Value, VaultError>) {
        self.responses
            .borrow_mut()
            .entry(method.to_string())
            .or_default()
            .push_back(response);
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(m, _)| m.clone()).collect()
    }

    pub fn sleeps(&self) -> Vec<u32> {
        self.sleeps.borrow().clone()
    }
}

impl WalletProvider for MockProvider {
    fn request(&self, method: &str, params: Value) -> LocalBoxFuture<'_, Result<Value, VaultError>> {
        self.calls.borrow_mut().push((method.to_string(), params));
        let response = self
            .responses
            .borrow_mut()
            .get_mut(method)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| {
                Err(VaultError::Provider {
                    code: None,
                    message: format!("sin respuesta simulada para {}", method),
                })
            });
        Box::pin(future::ready(response))
    }

    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
        self.sleeps.borrow_mut().push(millis);
        Box::pin(future::ready(()))
    }
}

/// Guarda los avisos en vez de mostrarlos
#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Hora local = UTC
pub struct UtcClock;

impl Clock for UtcClock {
    fn local_epoch_millis(&self, local: NaiveDateTime) -> Option<i64> {
        Some(local.and_utc().timestamp_millis())
    }

    fn format_local(&self, epoch_seconds: u64) -> String {
        format!("{}s", epoch_seconds)
    }
}

/// Zona horaria con desplazamiento fijo (minutos respecto a UTC)
pub struct FixedOffsetClock {
    pub offset_minutes: i64,
}

impl Clock for FixedOffsetClock {
    fn local_epoch_millis(&self, local: NaiveDateTime) -> Option<i64> {
        Some(local.and_utc().timestamp_millis() - self.offset_minutes * 60_000)
    }

    fn format_local(&self, epoch_seconds: u64) -> String {
        format!("{}s", epoch_seconds)
    }
}

// ============================================================================
// VAULT VIEWMODEL - Acciones del panel (conectar, crear, buscar, sacar)
// ============================================================================
// Cada acción: precondición local → una llamada remota → resultado al store.
// Los fallos de TODAS las acciones pasan por `report`, sin reintentos.
// ============================================================================

use std::future::Future;
use std::rc::Rc;
use alloy_primitives::Address;
use serde_json::json;
use crate::config::{AppConfig, CONFIG};
use crate::contract::VaultContract;
use crate::error::VaultError;
use crate::models::{DraftField, PendingTransactionReceipt, VaultId};
use crate::services::{BrowserClock, BrowserNotifier, Clock, Notifier, WalletProvider};
use crate::state::{Action, Store};
use crate::utils::i18n::t;

#[derive(Clone)]
pub struct VaultViewModel {
    store: Store,
    config: AppConfig,
    notifier: Rc<dyn Notifier>,
    clock: Rc<dyn Clock>,
}

impl VaultViewModel {
    pub fn new(store: Store, config: AppConfig, notifier: Rc<dyn Notifier>, clock: Rc<dyn Clock>) -> Self {
        Self { store, config, notifier, clock }
    }

    /// ViewModel con `window.alert` y reloj del navegador
    pub fn browser(store: Store) -> Self {
        Self::new(store, CONFIG.clone(), Rc::new(BrowserNotifier), Rc::new(BrowserClock))
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    // ------------------------------------------------------------------------
    // Formulario
    // ------------------------------------------------------------------------

    pub fn edit_draft(&self, field: DraftField, value: String) {
        self.store.dispatch(Action::DraftEdited { field, value });
    }

    pub fn edit_vault_id(&self, value: String) {
        self.store.dispatch(Action::VaultIdEdited(value));
    }

    /// Cerrar modal (click fuera o botón). No depende de la finalización.
    pub fn dismiss_confirmation(&self) {
        self.store.dispatch(Action::ConfirmationDismissed);
    }

    // ------------------------------------------------------------------------
    // Acciones remotas
    // ------------------------------------------------------------------------

    /// Conectar wallet. `None` = navegador sin proveedor inyectado.
    pub async fn connect_wallet(&self, provider: Option<Rc<dyn WalletProvider>>) {
        let Some(provider) = provider else {
            self.report(&VaultError::MissingProvider);
            return;
        };

        log::info!("🔌 [WALLET] Solicitando cuentas...");
        match self.request_session(provider).await {
            Ok((account, contract)) => {
                log::info!("✅ [WALLET] Conectado: {}", account);
                self.store.dispatch(Action::Connected { account, contract });
            }
            Err(e) if e.is_user_rejection() => {
                log::warn!("⚠️ [WALLET] Conexión rechazada por el usuario");
                self.report(&e);
            }
            Err(e) => {
                log::error!("❌ [WALLET] Conexión fallida: {}", e);
                self.report(&e);
            }
        }
    }

    async fn request_session(
        &self,
        provider: Rc<dyn WalletProvider>,
    ) -> Result<(Address, VaultContract), VaultError> {
        let contract_address = self.config.contract_address()?;

        let accounts = provider.request("eth_requestAccounts", json!([])).await?;
        let first = accounts
            .as_array()
            .ok_or_else(|| VaultError::MalformedResponse(format!("eth_requestAccounts: {}", accounts)))?
            .first()
            .ok_or(VaultError::NoAccounts)?;
        let account = first
            .as_str()
            .and_then(|raw| raw.parse::<Address>().ok())
            .ok_or_else(|| VaultError::InvalidAddress(first.to_string()))?;

        let contract = VaultContract::new(
            contract_address,
            account,
            provider,
            self.config.receipt_poll_interval_ms,
        );
        Ok((account, contract))
    }

    /// Crear cofre en ETH con el borrador actual
    pub async fn create_vault(&self) {
        let draft = self.store.snapshot().draft;
        let store = self.store.clone();
        let clock = self.clock.clone();

        let created = self
            .run_with_contract("createVault", move |contract| async move {
                let request = draft.to_request(clock.as_ref())?;
                let hash = contract.create_vault(&request).await?;
                // El modal se abre ya con el hash, antes de la finalización
                store.dispatch(Action::TransactionSubmitted(PendingTransactionReceipt::new(hash)));
                contract.wait_for_receipt(hash).await
            })
            .await;

        if created.is_some() {
            self.notify_key("vault_criado");
        }
    }

    /// Leer `getVaultInfo` para el ID del formulario
    pub async fn fetch_vault(&self) {
        let raw_id = self.store.snapshot().vault_id;

        let record = self
            .run_with_contract("getVaultInfo", move |contract| async move {
                let id = VaultId::parse(&raw_id)?;
                contract.get_vault_info(id).await
            })
            .await;

        if let Some(record) = record {
            self.store.dispatch(Action::VaultLoaded(record));
        }
    }

    /// `withdraw` del ID del formulario y espera de la finalización
    pub async fn withdraw_vault(&self) {
        let raw_id = self.store.snapshot().vault_id;

        let withdrawn = self
            .run_with_contract("withdraw", move |contract| async move {
                let id = VaultId::parse(&raw_id)?;
                let hash = contract.withdraw(id).await?;
                contract.wait_for_receipt(hash).await
            })
            .await;

        if withdrawn.is_some() {
            self.notify_key("saque_realizado");
        }
    }

    /// Envoltorio común: exige sesión, ejecuta la llamada y reporta el fallo.
    /// `None` si la acción no llegó a completarse.
    async fn run_with_contract<T, F, Fut>(&self, label: &str, operation: F) -> Option<T>
    where
        F: FnOnce(VaultContract) -> Fut,
        Fut: Future<Output = Result<T, VaultError>>,
    {
        let Some(contract) = self.store.snapshot().session.contract().cloned() else {
            log::warn!("⚠️ [VAULT] {} sin wallet conectada", label);
            self.report(&VaultError::NotConnected);
            return None;
        };

        log::info!("🚀 [VAULT] {} iniciado", label);
        match operation(contract).await {
            Ok(value) => {
                log::info!("✅ [VAULT] {} completado", label);
                Some(value)
            }
            Err(e) => {
                log::error!("❌ [VAULT] {} falló: {}", label, e);
                self.report(&e);
                None
            }
        }
    }

    /// Aviso uniforme para cualquier fallo
    fn report(&self, error: &VaultError) {
        let lang = self.language();
        let message = if !error.is_precondition() {
            format!("{}{}", t("erro_prefixo", &lang), error)
        } else if *error == VaultError::MissingProvider {
            t("instale_metamask", &lang)
        } else {
            t("conecte_carteira", &lang)
        };
        self.notifier.alert(&message);
    }

    fn notify_key(&self, key: &str) {
        self.notifier.alert(&t(key, &self.language()));
    }

    fn language(&self) -> String {
        self.store.snapshot().language
    }
}

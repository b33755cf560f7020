// ============================================================================
// STORE - Canal único de actualización del estado + subscribers
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::app_state::{reduce, Action, AppState, UpdateType};

type Subscriber = Rc<dyn Fn(UpdateType)>;

/// Store del panel. Clonar comparte el mismo estado y los mismos subscribers.
#[derive(Clone)]
pub struct Store {
    state: Rc<RefCell<AppState>>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: Rc::new(RefCell::new(initial)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Copia del estado actual
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Aplicar acción y notificar (si la acción requiere repintar)
    pub fn dispatch(&self, action: Action) {
        log::debug!("🔁 [STORE] {:?}", action);
        let update = action.update_type();
        let next = reduce(&self.state.borrow(), action);
        *self.state.borrow_mut() = next;

        if let Some(update) = update {
            self.notify(update);
        }
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self, update: UpdateType) {
        // Copiar la lista: un subscriber puede suscribir a otro
        let subscribers: Vec<Subscriber> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback(update.clone());
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DraftField;
    use crate::state::app_state::IncrementalUpdate;

    #[test]
    fn dispatch_notifies_only_when_view_must_change() {
        let store = Store::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            store.subscribe(move |update| seen.borrow_mut().push(update));
        }

        store.dispatch(Action::DraftEdited { field: DraftField::Amount, value: "1".to_string() });
        store.dispatch(Action::VaultIdEdited("5".to_string()));

        assert_eq!(store.snapshot().draft.amount, "1");
        assert_eq!(store.snapshot().vault_id, "5");
        assert_eq!(
            *seen.borrow(),
            vec![UpdateType::Incremental(IncrementalUpdate::VaultIdInputs)]
        );
    }

    #[test]
    fn clones_share_state() {
        let store = Store::default();
        let other = store.clone();
        other.dispatch(Action::VaultIdEdited("9".to_string()));
        assert_eq!(store.snapshot().vault_id, "9");
    }
}

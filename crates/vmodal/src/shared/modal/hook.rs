use contracts::modal::ModalOptions;
use leptos::prelude::*;

use super::VModal;

/// Creates a modal owned by the current reactive scope.
///
/// The modal is destroyed when the scope is cleaned up. Holds `None` when the
/// page has no body to attach to.
pub fn use_modal(options: ModalOptions) -> StoredValue<Option<VModal>, LocalStorage> {
    let modal = match VModal::new(options) {
        Ok(modal) => Some(modal),
        Err(err) => {
            log::error!("Failed to create modal: {}", err);
            None
        }
    };

    // VModal is not Send+Sync, store locally
    let stored = StoredValue::new_local(modal);
    on_cleanup(move || {
        stored.try_with_value(|modal| {
            if let Some(modal) = modal {
                modal.destroy();
            }
        });
    });

    stored
}

/// Runs `f` against the modal if it exists.
pub fn with_modal(stored: StoredValue<Option<VModal>, LocalStorage>, f: impl FnOnce(&VModal)) {
    stored.with_value(|modal| {
        if let Some(modal) = modal {
            f(modal);
        }
    });
}

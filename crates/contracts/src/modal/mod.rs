pub mod callback;
pub mod classes;
pub mod options;
pub mod state;

pub use callback::ModalCallback;
pub use options::{
    ButtonOptions, CloseBehavior, FooterOptions, ModalOptions, TransitionOptions,
    DEFAULT_TRANSITION_MS,
};
pub use state::ModalState;

//! Plain data shared by every consumer of the modal widget: configuration,
//! lifecycle state and the class-name conventions the renderer relies on.

pub mod modal;

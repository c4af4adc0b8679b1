//! Field Keeper - form fields that survive a page refresh
//!
//! Core modules:
//! - `persister`: restore pass and persist-on-edit binding
//! - `field`: field groups and the element capabilities they need
//! - `store`: key-value storage capability
//! - `settings`: selectors and log level, overridable from storage
//! - `web`: LocalStorage and DOM bindings (wasm only)

pub mod error;
pub mod field;
pub mod persister;
pub mod settings;
pub mod store;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{ElementKind, PersistError, Result};
pub use field::{FieldElement, FieldGroup, GroupSource, InputElement};
pub use persister::{FormFieldPersister, InitReport};
pub use settings::PersisterSettings;
pub use store::{KeyValueStore, MemoryStore};

/// Markup the server renders for each field
pub mod consts {
    /// Class on every field group container
    pub const GROUP_CLASS: &str = "fieldset";
    /// The input inside a container
    pub const INPUT_SELECTOR: &str = r#"[data-type="input"]"#;
    /// The error display inside a container
    pub const ERROR_SELECTOR: &str = "span";
}

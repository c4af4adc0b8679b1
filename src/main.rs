//! Field Keeper entry point
//!
//! On the web this restores and binds every field group once the module loads.
//! Natively it runs the same pass over an in-memory page.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::rc::Rc;

    use field_keeper::web::{BrowserStore, DomGroupSource};
    use field_keeper::{FormFieldPersister, PersistError, PersisterSettings};

    pub fn run() -> Result<(), PersistError> {
        let store = Rc::new(BrowserStore::local()?);
        let settings = PersisterSettings::load(store.as_ref());
        // Logger starts at Trace; narrow to the configured level
        log::set_max_level(settings.level_filter());

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document to scan");
            return Ok(());
        };

        let source = DomGroupSource::new(document, settings);
        let report = FormFieldPersister::new(store).initialize(&source);
        log::info!(
            "Bound {} field groups ({} skipped)",
            report.bound,
            report.skipped.len()
        );
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Trace);
    if let Err(e) = wasm_page::run() {
        log::error!("Field persistence disabled: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::rc::Rc;

    use field_keeper::field::MemoryGroupSource;
    use field_keeper::{FieldElement, FormFieldPersister, KeyValueStore, MemoryStore};

    env_logger::init();
    log::info!("Field Keeper (native) starting...");
    log::info!("Native mode runs against an in-memory page - build for wasm32 to bind a real form");

    let store = Rc::new(MemoryStore::with_entries([("email", "a@b.com")]));
    let mut page = MemoryGroupSource::new();
    let (email, email_error) = page.add_group("email", "", "email-error", "");
    page.add_group("name", "", "name-error", "");

    let persister = FormFieldPersister::new(store.clone());
    let report = persister.initialize(&page);
    log::info!(
        "Restored {} value(s) across {} group(s)",
        report.values_restored,
        report.bound
    );
    log::info!(
        "email = {:?}, email-error = {:?}",
        email.content(),
        email_error.content()
    );

    email.type_text("c@d.com");
    log::info!("Stored email = {:?}", store.get("email"));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

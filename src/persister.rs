//! Form field persistence
//!
//! On page load every field group is restored from storage, then bound so that
//! each edit writes the input value and the current error text back.
//! Stored content always wins over what the page rendered.

use std::rc::Rc;

use crate::error::{PersistError, Result};
use crate::field::{FieldElement, FieldGroup, GroupSource};
use crate::store::{self, KeyValueStore};

/// Outcome of one `initialize` pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Groups restored and bound to storage
    pub bound: usize,
    /// Inputs whose value came from storage
    pub values_restored: usize,
    /// Error displays whose text came from storage
    pub errors_restored: usize,
    /// Malformed containers that were skipped
    pub skipped: Vec<PersistError>,
}

/// What the restore pass took from storage for one group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Restored {
    pub value: bool,
    pub error_text: bool,
}

/// Keeps field groups in sync with a key-value store
#[derive(Clone)]
pub struct FormFieldPersister {
    store: Rc<dyn KeyValueStore>,
}

impl FormFieldPersister {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Rc<dyn KeyValueStore> {
        &self.store
    }

    /// Restore every group from storage and persist each future edit
    pub fn initialize(&self, source: &dyn GroupSource) -> InitReport {
        let mut report = InitReport::default();

        for group in source.field_groups() {
            let group = match group {
                Ok(group) => group,
                Err(e) => {
                    log::warn!("Skipping field group: {}", e);
                    report.skipped.push(e);
                    continue;
                }
            };

            let restored = self.restore(&group);
            report.values_restored += usize::from(restored.value);
            report.errors_restored += usize::from(restored.error_text);

            self.bind(&group);
            report.bound += 1;

            log::debug!(
                "id: {} textContent: {}",
                group.error_id(),
                group.error.content()
            );
        }

        log::info!("{}", store::dump(self.store.as_ref()));
        report
    }

    /// Overwrite a group's displayed content with whatever storage holds
    pub fn restore(&self, group: &FieldGroup) -> Restored {
        Restored {
            value: restore_element(self.store.as_ref(), group.input.as_ref()),
            error_text: restore_element(self.store.as_ref(), group.error.as_ref()),
        }
    }

    /// Write a group's current value and error text to storage
    pub fn persist(&self, group: &FieldGroup) -> Result<()> {
        persist_group(self.store.as_ref(), group)
    }

    /// Persist the group on every edit of its input
    fn bind(&self, group: &FieldGroup) {
        let store = self.store.clone();
        let target = group.clone();
        group.input.on_input(Box::new(move || {
            if let Err(e) = persist_group(store.as_ref(), &target) {
                log::warn!("Field {} not saved: {}", target.input_name(), e);
            }
        }));
    }
}

/// Returns true when storage held a value for the element
fn restore_element(store: &dyn KeyValueStore, element: &dyn FieldElement) -> bool {
    // Absent keeps the rendered default; an empty stored string still counts.
    match store.get(&element.key()) {
        Some(stored) => {
            element.set_content(&stored);
            true
        }
        None => false,
    }
}

fn persist_group(store: &dyn KeyValueStore, group: &FieldGroup) -> Result<()> {
    store.set(&group.input_name(), &group.input.content())?;
    store.set(&group.error_id(), &group.error.content())
}

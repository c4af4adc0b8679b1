//! Field groups and the elements they pair up
//!
//! A field group is one container holding an input and the element that shows
//! its validation error. Both elements double as storage keys: the input by its
//! `name`, the error display by its `id`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ElementKind, PersistError, Result};

/// Listener fired after every edit of an input
pub type InputListener = Box<dyn FnMut()>;

/// An element whose text content is mirrored into storage
pub trait FieldElement {
    /// Storage key for this element
    fn key(&self) -> String;

    /// Current displayed content
    fn content(&self) -> String;

    /// Replace the displayed content
    fn set_content(&self, content: &str);
}

/// An editable element that reports changes
pub trait InputElement: FieldElement {
    /// Call `listener` after every edit
    fn on_input(&self, listener: InputListener);
}

/// One input paired with its error display
#[derive(Clone)]
pub struct FieldGroup {
    /// Position of the container in document order
    pub index: usize,
    pub input: Rc<dyn InputElement>,
    pub error: Rc<dyn FieldElement>,
}

impl FieldGroup {
    pub fn new(index: usize, input: Rc<dyn InputElement>, error: Rc<dyn FieldElement>) -> Self {
        Self {
            index,
            input,
            error,
        }
    }

    /// Pair the elements found in a container, reporting the first missing one
    pub fn from_parts(
        index: usize,
        input: Option<Rc<dyn InputElement>>,
        error: Option<Rc<dyn FieldElement>>,
    ) -> Result<Self> {
        let input = input.ok_or(PersistError::MissingElement {
            group: index,
            element: ElementKind::Input,
        })?;
        let error = error.ok_or(PersistError::MissingElement {
            group: index,
            element: ElementKind::ErrorDisplay,
        })?;
        Ok(Self::new(index, input, error))
    }

    /// Storage key for the input value
    pub fn input_name(&self) -> String {
        self.input.key()
    }

    /// Storage key for the error text
    pub fn error_id(&self) -> String {
        self.error.key()
    }
}

impl std::fmt::Debug for FieldGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldGroup")
            .field("index", &self.index)
            .field("input_name", &self.input_name())
            .field("error_id", &self.error_id())
            .finish()
    }
}

/// Enumerates the field groups on a page
pub trait GroupSource {
    /// Every container in document order; malformed ones come back as errors
    fn field_groups(&self) -> Vec<Result<FieldGroup>>;
}

/// Text element held in memory
#[derive(Debug, Default)]
pub struct MemoryField {
    key: String,
    content: RefCell<String>,
}

impl MemoryField {
    pub fn new(key: impl Into<String>, content: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            key: key.into(),
            content: RefCell::new(content.into()),
        })
    }
}

impl FieldElement for MemoryField {
    fn key(&self) -> String {
        self.key.clone()
    }

    fn content(&self) -> String {
        self.content.borrow().clone()
    }

    fn set_content(&self, content: &str) {
        *self.content.borrow_mut() = content.to_string();
    }
}

/// Input element held in memory, with simulated typing
#[derive(Default)]
pub struct MemoryInput {
    field: MemoryField,
    listeners: RefCell<Vec<InputListener>>,
}

impl MemoryInput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            field: MemoryField {
                key: name.into(),
                content: RefCell::new(value.into()),
            },
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// Replace the value the way a user edit would, then fire listeners
    pub fn type_text(&self, value: &str) {
        self.field.set_content(value);
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl FieldElement for MemoryInput {
    fn key(&self) -> String {
        self.field.key()
    }

    fn content(&self) -> String {
        self.field.content()
    }

    fn set_content(&self, content: &str) {
        self.field.set_content(content);
    }
}

impl InputElement for MemoryInput {
    fn on_input(&self, listener: InputListener) {
        self.listeners.borrow_mut().push(listener);
    }
}

/// Page of in-memory containers, some of which may be incomplete
#[derive(Default)]
pub struct MemoryGroupSource {
    containers: Vec<(Option<Rc<MemoryInput>>, Option<Rc<MemoryField>>)>,
}

impl MemoryGroupSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a complete container and hand back its elements
    pub fn add_group(
        &mut self,
        name: &str,
        value: &str,
        error_id: &str,
        error_text: &str,
    ) -> (Rc<MemoryInput>, Rc<MemoryField>) {
        let input = MemoryInput::new(name, value);
        let error = MemoryField::new(error_id, error_text);
        self.containers
            .push((Some(input.clone()), Some(error.clone())));
        (input, error)
    }

    /// Add a container that may lack either element
    pub fn add_container(&mut self, input: Option<Rc<MemoryInput>>, error: Option<Rc<MemoryField>>) {
        self.containers.push((input, error));
    }
}

impl GroupSource for MemoryGroupSource {
    fn field_groups(&self) -> Vec<Result<FieldGroup>> {
        self.containers
            .iter()
            .enumerate()
            .map(|(index, (input, error))| {
                FieldGroup::from_parts(
                    index,
                    input.clone().map(|i| i as Rc<dyn InputElement>),
                    error.clone().map(|e| e as Rc<dyn FieldElement>),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_keys() {
        let mut page = MemoryGroupSource::new();
        page.add_group("email", "", "email-error", "");
        let groups = page.field_groups();
        let group = groups[0].as_ref().unwrap();
        assert_eq!(group.input_name(), "email");
        assert_eq!(group.error_id(), "email-error");
    }

    #[test]
    fn test_missing_input_reported() {
        let mut page = MemoryGroupSource::new();
        page.add_container(None, Some(MemoryField::new("name-error", "")));
        let groups = page.field_groups();
        assert_eq!(
            groups[0].as_ref().unwrap_err(),
            &PersistError::MissingElement {
                group: 0,
                element: ElementKind::Input,
            }
        );
    }

    #[test]
    fn test_missing_error_display_reported() {
        let mut page = MemoryGroupSource::new();
        page.add_group("name", "", "name-error", "");
        page.add_container(Some(MemoryInput::new("city", "")), None);
        let groups = page.field_groups();
        assert!(groups[0].is_ok());
        assert_eq!(
            groups[1].as_ref().unwrap_err(),
            &PersistError::MissingElement {
                group: 1,
                element: ElementKind::ErrorDisplay,
            }
        );
    }

    #[test]
    fn test_type_text_fires_listeners() {
        let input = MemoryInput::new("phone", "");
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            let probe = input.clone();
            input.on_input(Box::new(move || seen.borrow_mut().push(probe.content())));
        }
        input.type_text("98");
        input.type_text("987");
        assert_eq!(*seen.borrow(), vec!["98".to_string(), "987".to_string()]);
        assert_eq!(input.listener_count(), 1);
    }
}

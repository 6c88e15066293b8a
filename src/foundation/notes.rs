use std::cell::RefCell;

/// Host-supplied diagnostic sink for one segment build.
///
/// Diagnostics are advisory: the transform reports and continues.
pub trait NotesSink {
    fn warning(&self, message: &str);
}

/// In-memory sink used by tests and the command line tool.
#[derive(Debug, Default)]
pub struct NoteCollector {
    notes: RefCell<Vec<String>>,
}

impl NoteCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> Vec<String> {
        self.notes.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.notes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.borrow().is_empty()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.notes.borrow_mut())
    }
}

impl NotesSink for NoteCollector {
    fn warning(&self, message: &str) {
        self.notes.borrow_mut().push(message.to_string());
    }
}

/// Report a diagnostic to the sink and mirror it to the log.
pub(crate) fn warn(notes: &dyn NotesSink, message: impl AsRef<str>) {
    let message = message.as_ref();
    tracing::warn!(target: "segmix::notes", "{message}");
    notes.warning(message);
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/notes.rs"]
mod tests;

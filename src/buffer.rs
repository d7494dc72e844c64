use std::borrow::Cow;
use std::sync::{PoisonError, RwLock};

/// Source of the full text of one side of a diff
pub trait TextBuffer: Send + Sync {
    fn text(&self) -> Cow<'_, str>;
}

impl TextBuffer for String {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// An editable buffer shared with an editor. A poisoned lock still yields the
/// last text written before the panic.
impl TextBuffer for RwLock<String> {
    fn text(&self) -> Cow<'_, str> {
        let guard = self.read().unwrap_or_else(PoisonError::into_inner);
        Cow::Owned(guard.clone())
    }
}

//! Shared callback handles passed across the gesture boundary.
//!
//! ## Usage
//!
//! Wrap the gesture source's cancel hook in a [`Callback`] and attach it to
//! every [`GestureSample`](crate::GestureSample).

use std::{fmt, sync::Arc};

/// Stable, comparable callback handle for `Fn()`.
///
/// `Callback` compares by identity (`Arc::ptr_eq`), so two samples carrying
/// clones of the same cancel hook are equal. Invoking it any number of times
/// is allowed.
#[derive(Clone)]
pub struct Callback {
    inner: Arc<dyn Fn() + Send + Sync>,
}

impl Callback {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(handler),
        }
    }

    /// Invoke the callback.
    pub fn call(&self) {
        (self.inner)();
    }
}

impl<F> From<F> for Callback
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl Default for Callback {
    fn default() -> Self {
        Self::new(|| {})
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("ptr", &Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

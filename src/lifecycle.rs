// Ownership of a mounted instance. Kept free of web-sys so host tests can
// include it directly.

/// Something that must be released exactly once: stop timers, detach DOM,
/// drop listeners.
pub trait Teardown {
    fn teardown(self);
}

/// Holds a mounted instance and tears it down on `release()` or on drop,
/// whichever comes first.
pub struct MountGuard<T: Teardown> {
    inner: Option<T>,
}

impl<T: Teardown> MountGuard<T> {
    pub fn new(inner: T) -> Self {
        Self { inner: Some(inner) }
    }

    pub fn get(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    pub fn is_released(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns false if the instance was already released.
    pub fn release(&mut self) -> bool {
        match self.inner.take() {
            Some(inner) => {
                inner.teardown();
                true
            }
            None => false,
        }
    }
}

impl<T: Teardown> Drop for MountGuard<T> {
    fn drop(&mut self) {
        self.release();
    }
}

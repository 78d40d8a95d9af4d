use std::fmt;
use std::rc::Rc;

/// Zero-argument callback supplied by embedding code (`onOpen`, `onClose`,
/// footer button handlers).
///
/// Cheap to clone; the lifecycle clones it out of its state before invoking,
/// so the callback is free to call back into the modal.
#[derive(Clone)]
pub struct ModalCallback(Rc<dyn Fn()>);

impl ModalCallback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn run(&self) {
        (self.0)()
    }
}

impl fmt::Debug for ModalCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ModalCallback(..)")
    }
}

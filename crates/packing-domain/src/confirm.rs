//! Confirmation Port
//!
//! Blocking yes/no prompt the controller asks before destructive actions.

/// Synchronous yes/no question to the user
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Always answers the same way
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedConfirm(pub bool);

impl Confirm for FixedConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

impl<C: Confirm + ?Sized> Confirm for &C {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

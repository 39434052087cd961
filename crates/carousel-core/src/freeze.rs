//! Freeze capability shared by panels and rings.
//!
//! A frozen entity ignores input events and skips its own per-frame update.
//! Each implementor keeps its own flag; freezing a container does not touch
//! the flags of the things it contains.

/// Suspend and resume interaction and animation.
pub trait Freezable {
    fn freeze(&mut self);

    fn unfreeze(&mut self);

    fn is_frozen(&self) -> bool;
}

/// Plain freeze flag that implementors embed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FreezeFlag(bool);

impl FreezeFlag {
    pub const fn new() -> Self {
        Self(false)
    }

    /// Sets the flag, returning `true` if it changed.
    pub fn freeze(&mut self) -> bool {
        !std::mem::replace(&mut self.0, true)
    }

    /// Clears the flag, returning `true` if it changed.
    pub fn unfreeze(&mut self) -> bool {
        std::mem::replace(&mut self.0, false)
    }

    pub fn get(&self) -> bool {
        self.0
    }
}

impl Freezable for FreezeFlag {
    fn freeze(&mut self) {
        FreezeFlag::freeze(self);
    }

    fn unfreeze(&mut self) {
        FreezeFlag::unfreeze(self);
    }

    fn is_frozen(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freeze_reports_transitions_once() {
        let mut flag = FreezeFlag::new();
        assert!(flag.freeze());
        assert!(!flag.freeze());
        assert!(flag.get());
        assert!(flag.unfreeze());
        assert!(!flag.unfreeze());
        assert!(!flag.get());
    }

    #[test]
    fn freeze_unfreeze_pair_is_idempotent() {
        let mut flag = FreezeFlag::default();
        Freezable::freeze(&mut flag);
        Freezable::unfreeze(&mut flag);
        assert_eq!(flag, FreezeFlag::default());
        assert!(!flag.is_frozen());
    }
}

//! Target registries: which targets a context dispatches to.

use crate::level::Level;
use crate::message::LogMessage;
use crate::target::Target;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

/// Holds the targets a context dispatches to.
pub trait TargetRegistry: Send + Sync {
    /// # Errors
    /// [`crate::Error::DuplicateTarget`] when the name is taken, or whatever the policy refuses.
    fn add_target(&self, target: Arc<dyn Target>) -> Result<(), crate::Error>;

    /// Unregisters by name and hands the target back so the caller can close it.
    fn remove_target(&self, name: &str) -> Option<Arc<dyn Target>>;

    /// Point-in-time copy of the registered targets, in registration order.
    fn list_targets(&self) -> Vec<Arc<dyn Target>>;

    /// Calls `visitor` for every target under one consistent view.
    ///
    /// No removal completes while a visit is in progress.
    fn visit(&self, visitor: &mut dyn FnMut(&dyn Target));

    /// Returns `false` when no target has that name.
    fn set_threshold(&self, name: &str, level: Level) -> bool {
        let mut found = false;
        self.visit(&mut |target| {
            if target.name() == name {
                target.set_threshold(level);
                found = true;
            }
        });
        found
    }
}

/// Retaining registry: targets receive messages until removed.
///
/// Dispatch holds the read lock for the whole fan-out and removal takes the
/// write lock, so a removed target is never invoked after `remove_target`
/// returns. A target must not log through its own context from `render`.
#[derive(Default)]
pub struct Targets {
    targets: RwLock<Vec<Arc<dyn Target>>>,
}

impl Targets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Arc<dyn Target>>> {
        self.targets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Arc<dyn Target>>> {
        self.targets.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TargetRegistry for Targets {
    fn add_target(&self, target: Arc<dyn Target>) -> Result<(), crate::Error> {
        let mut targets = self.write();
        if targets.iter().any(|t| t.name() == target.name()) {
            return Err(crate::Error::DuplicateTarget(target.name().to_string()));
        }
        targets.push(target);
        Ok(())
    }

    fn remove_target(&self, name: &str) -> Option<Arc<dyn Target>> {
        let mut targets = self.write();
        let index = targets.iter().position(|t| t.name() == name)?;
        Some(targets.remove(index))
    }

    fn list_targets(&self) -> Vec<Arc<dyn Target>> {
        self.read().clone()
    }

    fn visit(&self, visitor: &mut dyn FnMut(&dyn Target)) {
        for target in self.read().iter() {
            visitor(target.as_ref());
        }
    }
}

/// Registry for environments that must not keep log streams open.
///
/// Every target is closed the moment it is registered and never retained, so
/// nothing is ever dispatched. The registry doubles as a target whose threshold
/// sits one rank below OFF: it stays registrable with managers that evict
/// OFF targets, yet admits no real level.
#[derive(Debug)]
pub struct ClosingTargets {
    threshold: Level,
}

impl ClosingTargets {
    pub const NAME: &'static str = "CLOSING_PROXY";

    /// Admits nothing real while not being OFF itself.
    pub const PLACEHOLDER_LEVEL: Level = Level::custom(Level::OFF.rank() - 1, "NOTOFF");

    #[must_use]
    pub const fn new() -> Self {
        Self {
            threshold: Self::PLACEHOLDER_LEVEL,
        }
    }
}

impl Default for ClosingTargets {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetRegistry for ClosingTargets {
    fn add_target(&self, target: Arc<dyn Target>) -> Result<(), crate::Error> {
        // Close failures are irrelevant: the target is dropped either way.
        let _ = target.close(Duration::ZERO);
        Ok(())
    }

    fn remove_target(&self, _name: &str) -> Option<Arc<dyn Target>> {
        None
    }

    fn list_targets(&self) -> Vec<Arc<dyn Target>> {
        Vec::new()
    }

    fn visit(&self, _visitor: &mut dyn FnMut(&dyn Target)) {}
}

impl Target for ClosingTargets {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn threshold(&self) -> Level {
        self.threshold
    }

    /// Fixed at the placeholder level.
    fn set_threshold(&self, _level: Level) {}

    fn close(&self, _timeout: Duration) -> Result<(), crate::Error> {
        Ok(())
    }

    fn render(&self, _message: &LogMessage) -> Result<(), crate::Error> {
        Ok(())
    }
}

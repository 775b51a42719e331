//! Placeholder target that never renders anything.

use super::{Target, Threshold};
use crate::level::Level;
use crate::message::LogMessage;

#[derive(Debug)]
pub struct NullTarget {
    name: String,
    threshold: Threshold,
}

impl NullTarget {
    /// Starts at OFF, so no message is ever admitted until the threshold is lowered.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            threshold: Threshold::new(Level::OFF),
        }
    }
}

impl Target for NullTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn threshold(&self) -> Level {
        self.threshold.get()
    }

    fn set_threshold(&self, level: Level) {
        self.threshold.set(level);
    }

    fn render(&self, _message: &LogMessage) -> Result<(), crate::Error> {
        Ok(())
    }
}

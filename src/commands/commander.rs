use log::debug;

use crate::commands::models::Command;
use crate::error::OrdkeyError;
use crate::generators::{Bound, KeyGenerator, check_ascending, keys_after, keys_before, keys_between};

pub trait Commander: Send {
    /// Runs `command` and returns the lines to print.
    fn execute(&self, command: &Command) -> Result<Vec<String>, OrdkeyError>;
}

pub struct ConcreteCommander<G: KeyGenerator> {
    generator: G,
}

impl<G: KeyGenerator> ConcreteCommander<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }
}

impl<G: KeyGenerator> Commander for ConcreteCommander<G> {
    fn execute(&self, command: &Command) -> Result<Vec<String>, OrdkeyError> {
        debug!("Executing {:?}", command);
        match command {
            Command::Between { lower, upper } => {
                let key = self.generator.between(
                    &Bound::from(lower.as_deref()),
                    &Bound::from(upper.as_deref()),
                )?;
                Ok(vec![key])
            }
            Command::Spread {
                lower,
                upper,
                count,
            } => keys_between(
                &self.generator,
                &Bound::from(lower.as_deref()),
                &Bound::from(upper.as_deref()),
                *count,
            ),
            Command::Append { after, count } => {
                keys_after(&self.generator, Bound::from(after.as_deref()))?
                    .take(*count)
                    .collect()
            }
            Command::Prepend { before, count } => {
                keys_before(&self.generator, Bound::from(before.as_deref()))?
                    .take(*count)
                    .collect()
            }
            Command::Check { keys } => {
                check_ascending(&self.generator, keys)?;
                Ok(vec![format!("ok: {} keys in order", keys.len())])
            }
        }
    }
}

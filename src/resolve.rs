//! Conflict resolution policy boundary.
//!
//! The sync engine never talks to a terminal. For each conflicting entry it
//! asks a [`ConflictResolver`] which side wins; the interactive resolver
//! prompts on stdin, and tests inject a scripted one. Force mode bypasses
//! the resolver entirely with explicit branches in the command layer.

use crate::Result;
use crate::ui;

/// Outcome of a single conflict, phrased from the pull direction.
/// Push-direction callers read `TakeRemote` as "take the other side".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Apply the remote side (overwrite or delete locally).
    TakeRemote,
    /// Keep the local side untouched.
    KeepLocal,
    /// Do nothing with this entry.
    Skip,
}

/// Strategy deciding conflicts and confirmations during a sync.
pub trait ConflictResolver {
    /// Decide what to do with a modified or removed entry.
    fn resolve(&mut self, path: &str) -> Result<Resolution>;

    /// Yes/no question, e.g. "Import skills/sql/SKILL.md?".
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Resolver that prompts the user on stdin.
#[derive(Debug, Default)]
pub struct InteractiveResolver;

impl ConflictResolver for InteractiveResolver {
    fn resolve(&mut self, path: &str) -> Result<Resolution> {
        ui::select_resolution(path)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        ui::confirm(prompt, default)
    }
}

/// Resolver answering from pre-recorded decisions, newest last. Used by
/// headless tests.
#[derive(Debug, Default)]
pub struct ScriptedResolver {
    resolutions: Vec<Resolution>,
    confirmations: Vec<bool>,
}

impl ScriptedResolver {
    pub fn new(resolutions: Vec<Resolution>, confirmations: Vec<bool>) -> Self {
        // Stored reversed so pop() yields decisions in the given order
        Self {
            resolutions: resolutions.into_iter().rev().collect(),
            confirmations: confirmations.into_iter().rev().collect(),
        }
    }
}

impl ConflictResolver for ScriptedResolver {
    fn resolve(&mut self, _path: &str) -> Result<Resolution> {
        Ok(self.resolutions.pop().unwrap_or(Resolution::Skip))
    }

    fn confirm(&mut self, _prompt: &str, _default: bool) -> Result<bool> {
        Ok(self.confirmations.pop().unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_resolver_replays_in_order() {
        let mut resolver = ScriptedResolver::new(
            vec![Resolution::TakeRemote, Resolution::KeepLocal],
            vec![true],
        );
        assert_eq!(resolver.resolve("a").unwrap(), Resolution::TakeRemote);
        assert_eq!(resolver.resolve("b").unwrap(), Resolution::KeepLocal);
        // Exhausted scripts fall back to the safe answers
        assert_eq!(resolver.resolve("c").unwrap(), Resolution::Skip);
        assert!(resolver.confirm("go?", true).unwrap());
        assert!(!resolver.confirm("go?", true).unwrap());
    }
}

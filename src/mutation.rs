//! Optimistic Mutation Commands
//!
//! Every optimistic write is an explicit command: the local change is
//! applied first, the request runs, and on failure the captured snapshot
//! drives a rollback instead of letting local state silently diverge.

/// Lifecycle of one mutation command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationStatus {
    Pending,
    Confirmed,
    Failed,
}

/// A pending optimistic write holding the snapshot needed to undo it.
/// The status outlives resolution so callers can surface in-flight
/// state (the board's saving indicator).
#[derive(Debug, Clone)]
pub struct Command<S> {
    snapshot: S,
    status: MutationStatus,
}

impl<S> Command<S> {
    /// Record a command right after its optimistic change was applied.
    pub fn new(snapshot: S) -> Self {
        Self { snapshot, status: MutationStatus::Pending }
    }

    pub fn status(&self) -> MutationStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == MutationStatus::Pending
    }

    /// The request succeeded; the snapshot is no longer needed.
    pub fn confirm(&mut self) {
        self.status = MutationStatus::Confirmed;
    }

    /// The request failed; hand the snapshot back for rollback.
    pub fn fail(&mut self) -> S
    where
        S: Clone,
    {
        self.status = MutationStatus::Failed;
        self.snapshot.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_starts_pending_and_confirms() {
        let mut cmd = Command::new(Some(3u32));
        assert!(cmd.is_pending());
        cmd.confirm();
        assert_eq!(cmd.status(), MutationStatus::Confirmed);
        assert!(!cmd.is_pending());
    }

    #[test]
    fn failed_command_returns_its_snapshot() {
        let mut cmd = Command::new(Some(3u32));
        assert_eq!(cmd.fail(), Some(3));
        // The status survives resolution for callers still watching it.
        assert_eq!(cmd.status(), MutationStatus::Failed);
    }
}

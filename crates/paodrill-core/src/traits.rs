//! The terminal collaborator seam for the training session.
//!
//! The session engine owns all state and policy; a [`TrainerIo`]
//! implementation only moves text between the user and the engine. The CLI
//! implements it over stdin/stdout, tests implement it with a script.

use crate::model::{Association, Key};
use crate::session::{GradedAnswer, SessionCounters};
use crate::stats::{EntryStats, StatsStore};

/// What the user handed back at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    /// Free-text answers for person, action, and object.
    Answer {
        person: String,
        action: String,
        object: String,
    },
    /// End the session.
    Quit,
    /// Show lifetime statistics. A side channel: it does not consume the
    /// turn, and the same key is prompted again afterwards.
    Stats,
}

/// Terminal collaborator driven by the session engine.
pub trait TrainerIo {
    /// Show a never-attempted association for study before it is quizzed.
    fn show_study(&mut self, key: Key, association: &Association) -> anyhow::Result<()>;

    /// Prompt for the triple bound to `key`, or a control command.
    fn prompt(&mut self, key: Key) -> anyhow::Result<PromptReply>;

    /// Report per-field grading results along with the true association and
    /// the key's updated lifetime counters.
    fn show_grade(
        &mut self,
        key: Key,
        association: &Association,
        grade: &GradedAnswer,
        lifetime: EntryStats,
    ) -> anyhow::Result<()>;

    /// Report lifetime statistics on an in-session `stats` command.
    fn show_stats(&mut self, stats: &StatsStore, counters: &SessionCounters)
        -> anyhow::Result<()>;

    /// Report the end-of-session summary.
    fn show_summary(&mut self, counters: &SessionCounters) -> anyhow::Result<()>;
}

//! The interactive training loop: select, prompt, grade, record, flush.

use std::path::PathBuf;

use rand::Rng;

use crate::model::Association;
use crate::selector::Selector;
use crate::stats::StatsStore;
use crate::table::AssociationTable;
use crate::traits::{PromptReply, TrainerIo};

/// Per-field grading outcome for one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradedAnswer {
    pub person: bool,
    pub action: bool,
    pub object: bool,
}

impl GradedAnswer {
    /// A turn counts as correct only when all three fields match.
    pub fn all_correct(&self) -> bool {
        self.person && self.action && self.object
    }
}

/// Trim surrounding whitespace and case-fold before comparison.
fn normalize(field: &str) -> String {
    field.trim().to_lowercase()
}

/// Grade a submitted triple against the true association, field by field.
pub fn grade(association: &Association, person: &str, action: &str, object: &str) -> GradedAnswer {
    GradedAnswer {
        person: normalize(person) == normalize(&association.person),
        action: normalize(action) == normalize(&association.action),
        object: normalize(object) == normalize(&association.object),
    }
}

/// Counters for the current run only. Never persisted; reset at start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCounters {
    pub attempts: u32,
    pub correct: u32,
}

/// One interactive training run.
///
/// The stats store is flushed after every recorded answer and once more on
/// quit, so an external interrupt at any instant loses nothing that was
/// already graded.
pub struct Session<R: Rng> {
    table: AssociationTable,
    stats: StatsStore,
    selector: Selector<R>,
    counters: SessionCounters,
    stats_path: PathBuf,
}

impl<R: Rng> Session<R> {
    pub fn new(
        table: AssociationTable,
        stats: StatsStore,
        selector: Selector<R>,
        stats_path: PathBuf,
    ) -> Self {
        Self {
            table,
            stats,
            selector,
            counters: SessionCounters::default(),
            stats_path,
        }
    }

    pub fn counters(&self) -> SessionCounters {
        self.counters
    }

    pub fn stats(&self) -> &StatsStore {
        &self.stats
    }

    /// Run the prompt/grade loop until the user quits.
    pub fn run(&mut self, io: &mut dyn TrainerIo) -> anyhow::Result<()> {
        loop {
            let key = self.selector.next(&self.table, &self.stats);
            let association = self.table.get(key)?.clone();

            // First sight of a key: show it for study before quizzing.
            if self.stats.stats(key).attempts == 0 {
                io.show_study(key, &association)?;
            }

            // The stats command re-prompts the same key without a new draw.
            loop {
                match io.prompt(key)? {
                    PromptReply::Quit => {
                        self.stats.save(&self.stats_path)?;
                        tracing::info!(
                            attempts = self.counters.attempts,
                            correct = self.counters.correct,
                            "session ended"
                        );
                        io.show_summary(&self.counters)?;
                        return Ok(());
                    }
                    PromptReply::Stats => {
                        io.show_stats(&self.stats, &self.counters)?;
                    }
                    PromptReply::Answer {
                        person,
                        action,
                        object,
                    } => {
                        let graded = grade(&association, &person, &action, &object);
                        let was_correct = graded.all_correct();
                        self.stats.record(key, was_correct);
                        self.counters.attempts += 1;
                        if was_correct {
                            self.counters.correct += 1;
                        }
                        self.stats.save(&self.stats_path)?;
                        io.show_grade(key, &association, &graded, self.stats.stats(key))?;
                        break;
                    }
                }
            }
        }
    }
}

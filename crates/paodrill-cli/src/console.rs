//! Terminal implementation of the session's I/O seam.

use std::io::{self, BufRead, Write};

use paodrill_core::model::{Association, Key};
use paodrill_core::session::{GradedAnswer, SessionCounters};
use paodrill_core::stats::{EntryStats, StatsStore};
use paodrill_core::traits::{PromptReply, TrainerIo};

fn mark(correct: bool) -> &'static str {
    if correct {
        "ok"
    } else {
        " X"
    }
}

fn percent(accuracy: f64) -> String {
    format!("{:.0}%", accuracy * 100.0)
}

/// Line-oriented stdin/stdout collaborator.
pub struct ConsoleIo;

impl ConsoleIo {
    pub fn new() -> Self {
        Self
    }

    /// Read one trimmed line; `None` on end of input.
    fn read_field(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        print!("{label}: ");
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_string()))
        }
    }
}

impl TrainerIo for ConsoleIo {
    fn show_study(&mut self, key: Key, association: &Association) -> anyhow::Result<()> {
        println!("\nFirst time seeing {key} - study it:");
        println!("  Person: {}", association.person);
        println!("  Action: {}", association.action);
        println!("  Object: {}", association.object);
        // Wait for acknowledgement, then push the triple off screen.
        let _ = self.read_field("Press Enter when ready")?;
        println!("{}", "\n".repeat(20));
        Ok(())
    }

    fn prompt(&mut self, key: Key) -> anyhow::Result<PromptReply> {
        println!("\nNumber: {key}");
        let first = match self.read_field("Person")? {
            Some(text) => text,
            None => return Ok(PromptReply::Quit),
        };
        match first.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(PromptReply::Quit),
            "stats" => return Ok(PromptReply::Stats),
            _ => {}
        }
        // End of input mid-triple ends the session without grading.
        let action = match self.read_field("Action")? {
            Some(text) => text,
            None => return Ok(PromptReply::Quit),
        };
        let object = match self.read_field("Object")? {
            Some(text) => text,
            None => return Ok(PromptReply::Quit),
        };
        Ok(PromptReply::Answer {
            person: first,
            action,
            object,
        })
    }

    fn show_grade(
        &mut self,
        key: Key,
        association: &Association,
        grade: &GradedAnswer,
        lifetime: EntryStats,
    ) -> anyhow::Result<()> {
        println!();
        println!("  Person: [{}] {}", mark(grade.person), association.person);
        println!("  Action: [{}] {}", mark(grade.action), association.action);
        println!("  Object: [{}] {}", mark(grade.object), association.object);
        if grade.all_correct() {
            println!("All three correct.");
        } else {
            println!("Review {key}: {} / {} / {}",
                association.person, association.action, association.object);
        }
        if let Some(accuracy) = lifetime.accuracy() {
            println!(
                "Accuracy for {key}: {} over {} attempt(s)",
                percent(accuracy),
                lifetime.attempts
            );
        }
        Ok(())
    }

    fn show_stats(
        &mut self,
        stats: &StatsStore,
        counters: &SessionCounters,
    ) -> anyhow::Result<()> {
        match stats.overall_accuracy() {
            Some(accuracy) => println!(
                "\nLifetime: {} attempts, {} correct ({})",
                stats.total_attempts(),
                stats.total_correct(),
                percent(accuracy)
            ),
            None => println!("\nLifetime: no attempts recorded yet"),
        }
        println!(
            "This session: {}/{} correct",
            counters.correct, counters.attempts
        );
        let weakest = stats.weakest(5);
        if !weakest.is_empty() {
            println!("Weakest keys:");
            for (key, accuracy) in weakest {
                println!("  {key}: {}", percent(accuracy));
            }
        }
        Ok(())
    }

    fn show_summary(&mut self, counters: &SessionCounters) -> anyhow::Result<()> {
        println!(
            "\nSession over: {}/{} correct. Progress saved.",
            counters.correct, counters.attempts
        );
        Ok(())
    }
}

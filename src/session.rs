use crate::checker::Verdict;
use crate::config::AttemptConfig;
use crate::geometry::{Grid, Segment};
use crate::recorder::{DrawingSession, PointerEvent};
use crate::shapes::ShapeDefinition;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Mastered,
    TryAgain,
}

impl Feedback {
    pub fn from_verdict(verdict: &Verdict) -> Self {
        if verdict.correct {
            Self::Mastered
        } else {
            Self::TryAgain
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mastered => write!(f, "✨ Symmetry Mastered! ✨"),
            Self::TryAgain => write!(f, "Not quite! Check your lines."),
        }
    }
}

/// Payload the attempt-recording service accepts, field for field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub user_id: Option<u64>,
    pub session_id: Option<String>,
    pub skill_id: u32,
    pub difficulty_level: String,
    pub question_text: String,
    pub is_correct: bool,
    pub time_spent_seconds: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub question: usize,
    pub verdict: Verdict,
    pub feedback: Feedback,
    pub attempt: AttemptRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next(usize),
    Finished,
    /// The current drawing has not been submitted yet.
    Pending,
}

/// Walks a list of shapes one drawing at a time.
#[derive(Debug, Clone)]
pub struct QuizSession {
    grid: Grid,
    shapes: Vec<ShapeDefinition>,
    attempt: AttemptConfig,
    index: usize,
    drawing: DrawingSession,
    elapsed_secs: u64,
    results: Vec<bool>,
}

impl QuizSession {
    pub fn new(grid: Grid, shapes: Vec<ShapeDefinition>, attempt: AttemptConfig) -> Self {
        if shapes.is_empty() {
            warn!("⚠️  Quiz session started with no shapes.");
        }
        info!(
            "🧩 Symmetry session: {} shapes, skill {}",
            shapes.len(),
            attempt.skill_id
        );
        Self {
            grid,
            shapes,
            attempt,
            index: 0,
            drawing: DrawingSession::new(),
            elapsed_secs: 0,
            results: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.shapes.len()
    }

    pub fn current_shape(&self) -> Option<&ShapeDefinition> {
        self.shapes.get(self.index)
    }

    pub fn drawing(&self) -> &DrawingSession {
        &self.drawing
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Correctness of every submitted question so far, in order.
    pub fn results(&self) -> &[bool] {
        &self.results
    }

    pub fn progress_label(&self) -> String {
        format!("Symmetry {} / {}", self.index + 1, self.total())
    }

    // The clock runs for the whole session, not per question.
    pub fn tick(&mut self, secs: u64) {
        self.elapsed_secs = self.elapsed_secs.saturating_add(secs);
    }

    pub fn pointer(&mut self, event: PointerEvent) -> Option<Segment> {
        self.drawing.handle(event, &self.grid)
    }

    pub fn undo(&mut self) -> Option<Segment> {
        self.drawing.undo()
    }

    pub fn clear(&mut self) -> usize {
        self.drawing.clear()
    }

    pub fn submit(&mut self) -> Option<Submission> {
        let shape = self.shapes.get(self.index)?;
        let verdict = self.drawing.submit(shape, &self.grid)?;
        let feedback = Feedback::from_verdict(&verdict);
        info!(
            "{} ({}: {})",
            feedback,
            self.progress_label(),
            shape.name
        );
        self.results.push(verdict.correct);

        let attempt = AttemptRecord {
            user_id: self.attempt.user_id,
            session_id: self.attempt.session_id.clone(),
            skill_id: self.attempt.skill_id,
            difficulty_level: self.attempt.difficulty.clone(),
            question_text: self.attempt.question_text.clone(),
            is_correct: verdict.correct,
            time_spent_seconds: self.elapsed_secs,
        };
        Some(Submission {
            question: self.index,
            verdict,
            feedback,
            attempt,
        })
    }

    /// Moves to the next shape with a fresh drawing. A question only counts
    /// once submitted, so this stays put until then.
    pub fn advance(&mut self) -> Advance {
        if self.index < self.shapes.len() && !self.drawing.is_submitted() {
            debug!("{}: submit before moving on", self.progress_label());
            return Advance::Pending;
        }
        if self.index + 1 < self.shapes.len() {
            self.index += 1;
            self.drawing.reset();
            Advance::Next(self.index)
        } else {
            let correct = self.results.iter().filter(|c| **c).count();
            info!(
                "🏁 Session finished: {}/{} correct in {}s",
                correct,
                self.results.len(),
                self.elapsed_secs
            );
            Advance::Finished
        }
    }
}

//! Risk assessment wizard.
//!
//! An ordered questionnaire that accumulates one answer per question, then
//! reduces the answers to a normalized risk score (0-100) and a categorical
//! band. The wizard is a small state machine:
//!
//! ```text
//! InProgress(k) --advance, k<last--> InProgress(k+1)
//! InProgress(last) --advance, answered--> Calculating
//! Calculating --resolve--> Complete(score)
//! Calculating --delegation failure--> DelegationFailed --retry--> Calculating
//! Complete --restart--> InProgress(0)
//! ```
//!
//! Scoring is a pure local computation and cannot fail in-band. When scoring
//! is delegated to the remote classifier instead, a failure surfaces as the
//! explicit `DelegationFailed` phase with answers and step untouched; a
//! generation counter discards delegated results that arrive after a restart.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A single questionnaire question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier for the question.
    pub id: u32,
    /// Prompt text.
    pub text: String,
    /// Ordered answer options (never empty).
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Look up an option by its value.
    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// One selectable option of a [`Question`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Stable value recorded in the answer set (unique within its question).
    pub value: String,
    /// Display label.
    pub label: String,
    /// Contribution to the raw risk total.
    pub score: i32,
}

/// Mapping from question id to the chosen option value.
///
/// Keys accumulate one at a time; re-answering replaces the prior value.
pub type AnswerSet = BTreeMap<u32, String>;

/// Lifecycle phase of a wizard run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPhase {
    /// Walking through questions.
    InProgress,
    /// All questions answered; scoring (local or delegated) pending.
    Calculating,
    /// Score available.
    Complete,
    /// Remote classification failed; answers retained, retry allowed.
    DelegationFailed,
}

/// Risk band derived from a 0-100 score. Never stored -- always recomputed
/// from the score via [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskBand {
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Conservative => "Conservative",
            RiskBand::Moderate => "Moderate",
            RiskBand::Aggressive => "Aggressive",
        }
    }

    /// Fixed display color per band; inert to scoring logic.
    pub fn color(&self) -> &'static str {
        match self {
            RiskBand::Conservative => "#2196f3",
            RiskBand::Moderate => "#ff9800",
            RiskBand::Aggressive => "#f44336",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a normalized score into its band.
///
/// Partitions [0,100] into three contiguous bands: scores below 40 are
/// Conservative, 40-69 Moderate, 70 and above Aggressive.
pub fn classify(score: u8) -> RiskBand {
    if score < 40 {
        RiskBand::Conservative
    } else if score < 70 {
        RiskBand::Moderate
    } else {
        RiskBand::Aggressive
    }
}

/// Error type for wizard operations.
///
/// These are contract violations of the caller, not user-facing conditions:
/// the presenting view is expected to block the operations that would raise
/// them (e.g. disable "Next" while the current question is unanswered).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// No question with this id.
    #[error("unknown question id: {0}")]
    UnknownQuestion(u32),

    /// The question exists but has no option with this value.
    #[error("question {question} has no option '{value}'")]
    UnknownOption { question: u32, value: String },

    /// Advance was attempted with the current question unanswered.
    #[error("question {0} has not been answered")]
    Unanswered(u32),

    /// Operation requires the InProgress phase.
    #[error("wizard is not in progress")]
    NotInProgress,

    /// Operation requires the Calculating phase.
    #[error("wizard is not awaiting a score")]
    NotCalculating,

    /// Retry was attempted outside the DelegationFailed phase.
    #[error("no failed delegation to retry")]
    NothingToRetry,
}

/// The risk assessment wizard state machine.
///
/// Owned exclusively by the presenting view: single writer, no internal
/// threads. Asynchronous delegation is driven by the caller, which captures
/// [`RiskWizard::generation`] at launch and hands it back with the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskWizard {
    questions: Vec<Question>,
    active_step: usize,
    answers: AnswerSet,
    risk_score: Option<u8>,
    phase: WizardPhase,
    /// Bumped on every restart; stale async results are discarded by
    /// comparing against the value captured at launch.
    generation: u64,
}

impl RiskWizard {
    /// Create a wizard over a fixed, non-empty question sequence.
    pub fn new(questions: Vec<Question>) -> Self {
        debug_assert!(!questions.is_empty(), "wizard requires at least one question");
        debug_assert!(
            questions.iter().all(|q| !q.options.is_empty()),
            "every question requires at least one option"
        );
        Self {
            questions,
            active_step: 0,
            answers: AnswerSet::new(),
            risk_score: None,
            phase: WizardPhase::InProgress,
            generation: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn active_step(&self) -> usize {
        self.active_step
    }

    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question at the active step.
    pub fn current_question(&self) -> &Question {
        &self.questions[self.active_step]
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Recorded answer for the active step, if any.
    pub fn current_answer(&self) -> Option<&str> {
        self.answers
            .get(&self.current_question().id)
            .map(String::as_str)
    }

    /// Normalized score; `None` until a run completes.
    pub fn risk_score(&self) -> Option<u8> {
        self.risk_score
    }

    /// Band for the completed run, if any.
    pub fn band(&self) -> Option<RiskBand> {
        self.risk_score.map(classify)
    }

    /// Current staleness generation. Capture before launching a delegated
    /// classification and pass back to [`RiskWizard::resolve_delegated`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record (or overwrite) the answer for a question.
    ///
    /// Does not move the active step.
    pub fn answer(&mut self, question_id: u32, value: &str) -> Result<(), WizardError> {
        if self.phase != WizardPhase::InProgress {
            return Err(WizardError::NotInProgress);
        }
        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or(WizardError::UnknownQuestion(question_id))?;
        if question.option(value).is_none() {
            return Err(WizardError::UnknownOption {
                question: question_id,
                value: value.to_string(),
            });
        }
        self.answers.insert(question_id, value.to_string());
        Ok(())
    }

    /// Move to the next question, or into `Calculating` from the last one.
    ///
    /// Guarded: the current question must have a recorded answer. On
    /// rejection the state is unchanged.
    pub fn advance(&mut self) -> Result<WizardPhase, WizardError> {
        if self.phase != WizardPhase::InProgress {
            return Err(WizardError::NotInProgress);
        }
        let current_id = self.current_question().id;
        if !self.answers.contains_key(&current_id) {
            return Err(WizardError::Unanswered(current_id));
        }
        if self.active_step == self.questions.len() - 1 {
            self.phase = WizardPhase::Calculating;
        } else {
            self.active_step += 1;
        }
        Ok(self.phase)
    }

    /// Step back one question. Silent no-op at step 0 or outside InProgress.
    pub fn retreat(&mut self) {
        if self.phase == WizardPhase::InProgress && self.active_step > 0 {
            self.active_step -= 1;
        }
    }

    /// Reduce the answer set to a normalized 0-100 score.
    ///
    /// Sums the chosen option scores, divides by the maximum attainable
    /// total, scales to 100 and rounds to the nearest integer. The guard in
    /// [`RiskWizard::advance`] forces every question to be answered before
    /// scoring is reachable; an unanswered question contributing 0 here is
    /// defensive and flagged by the debug assertion.
    pub fn compute_score(&self) -> u8 {
        let total: i32 = self
            .questions
            .iter()
            .map(|q| {
                let chosen = self.answers.get(&q.id).and_then(|v| q.option(v));
                debug_assert!(chosen.is_some(), "scoring reached with unanswered question");
                chosen.map(|o| o.score).unwrap_or(0)
            })
            .sum();
        let max_option_score = self
            .questions
            .iter()
            .flat_map(|q| &q.options)
            .map(|o| o.score)
            .max()
            .unwrap_or(1);
        let max_total = (self.questions.len() as i32 * max_option_score).max(1);
        let normalized = (total as f64 / max_total as f64) * 100.0;
        normalized.round().clamp(0.0, 100.0) as u8
    }

    /// Resolve the `Calculating` phase with the local scoring path.
    pub fn finish_local(&mut self) -> Result<u8, WizardError> {
        if self.phase != WizardPhase::Calculating {
            return Err(WizardError::NotCalculating);
        }
        let score = self.compute_score();
        self.risk_score = Some(score);
        self.phase = WizardPhase::Complete;
        Ok(score)
    }

    /// Apply the result of a delegated classification.
    ///
    /// Returns `false` when the result is stale (the wizard was restarted
    /// after launch) or the wizard is no longer calculating; the result is
    /// discarded without touching any state.
    pub fn resolve_delegated(&mut self, generation: u64, score: u8) -> bool {
        if generation != self.generation || self.phase != WizardPhase::Calculating {
            return false;
        }
        self.risk_score = Some(score.min(100));
        self.phase = WizardPhase::Complete;
        true
    }

    /// Record a delegated classification failure.
    ///
    /// Moves to `DelegationFailed` so the caller can offer a retry; answers
    /// and the active step survive untouched. Stale failures (after a
    /// restart) are ignored, mirroring [`RiskWizard::resolve_delegated`].
    pub fn fail_delegation(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != WizardPhase::Calculating {
            return false;
        }
        self.phase = WizardPhase::DelegationFailed;
        true
    }

    /// Re-enter `Calculating` after a delegation failure.
    pub fn retry(&mut self) -> Result<(), WizardError> {
        if self.phase != WizardPhase::DelegationFailed {
            return Err(WizardError::NothingToRetry);
        }
        self.phase = WizardPhase::Calculating;
        Ok(())
    }

    /// Reset to the initial state: step 0, empty answers, no score.
    ///
    /// Bumps the generation so in-flight delegated results are discarded.
    pub fn restart(&mut self) {
        self.active_step = 0;
        self.answers.clear();
        self.risk_score = None;
        self.phase = WizardPhase::InProgress;
        self.generation += 1;
    }
}

impl Default for RiskWizard {
    fn default() -> Self {
        Self::new(default_questions())
    }
}

/// The built-in questionnaire: three questions, options scored 1-3.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            text: "What is your investment time horizon?".to_string(),
            options: vec![
                QuestionOption {
                    value: "short".to_string(),
                    label: "Less than 2 years".to_string(),
                    score: 1,
                },
                QuestionOption {
                    value: "medium".to_string(),
                    label: "2-5 years".to_string(),
                    score: 2,
                },
                QuestionOption {
                    value: "long".to_string(),
                    label: "More than 5 years".to_string(),
                    score: 3,
                },
            ],
        },
        Question {
            id: 2,
            text: "How would you react to a 20% drop in your investment value?".to_string(),
            options: vec![
                QuestionOption {
                    value: "sell".to_string(),
                    label: "Sell immediately to prevent further losses".to_string(),
                    score: 1,
                },
                QuestionOption {
                    value: "wait".to_string(),
                    label: "Wait and see before making a decision".to_string(),
                    score: 2,
                },
                QuestionOption {
                    value: "buy".to_string(),
                    label: "Buy more at lower prices".to_string(),
                    score: 3,
                },
            ],
        },
        Question {
            id: 3,
            text: "What percentage of your total savings are you planning to invest?".to_string(),
            options: vec![
                QuestionOption {
                    value: "conservative".to_string(),
                    label: "Less than 25%".to_string(),
                    score: 1,
                },
                QuestionOption {
                    value: "moderate".to_string(),
                    label: "25-50%".to_string(),
                    score: 2,
                },
                QuestionOption {
                    value: "aggressive".to_string(),
                    label: "More than 50%".to_string(),
                    score: 3,
                },
            ],
        },
    ]
}

#![forbid(unsafe_code)]

//! Draft builder for user-authored collaboration methods.
//!
//! Mirrors the incremental form operations of the authoring flow: text
//! edits, closed-enum selection, and add/remove of steps and criteria. A
//! draft becomes a `MethodSpec` only through `finish`, which checks the
//! structural invariants every catalog method satisfies; the storage layer
//! assigns the id when the spec is appended to the catalog.


use crate::catalog::{CollabMethod, MethodStep};
use crate::ids::MethodId;
use crate::model::{Category, Difficulty};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftStep {
    pub title: String,
    pub description: String,
    pub success_criteria: Vec<String>,
}

impl DraftStep {
    fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            success_criteria: vec![String::new()],
        }
    }
}

/// Validated builder output: a catalog method minus its id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSpec {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub category: Category,
    pub steps: Vec<MethodStep>,
    pub outcome: String,
    pub success_criteria: Vec<String>,
}

impl MethodSpec {
    pub fn into_method(self, id: MethodId) -> CollabMethod {
        CollabMethod {
            id,
            title: self.title,
            description: self.description,
            duration: self.duration,
            difficulty: self.difficulty,
            category: self.category,
            steps: self.steps,
            outcome: self.outcome,
            success_criteria: self.success_criteria,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftError {
    BlankTitle,
    BlankDescription,
    BlankDuration,
    BlankOutcome,
    BlankStepTitle { step: usize },
    BlankStepDescription { step: usize },
    BlankStepCriterion { step: usize, criterion: usize },
    BlankMethodCriterion { criterion: usize },
    StepOutOfRange { index: usize, len: usize },
    CriterionOutOfRange { step: usize, index: usize, len: usize },
    MethodCriterionOutOfRange { index: usize, len: usize },
    LastStep,
    LastStepCriterion { step: usize },
    LastMethodCriterion,
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "title must not be blank"),
            Self::BlankDescription => write!(f, "description must not be blank"),
            Self::BlankDuration => write!(f, "duration must not be blank"),
            Self::BlankOutcome => write!(f, "outcome must not be blank"),
            Self::BlankStepTitle { step } => write!(f, "step {step} title must not be blank"),
            Self::BlankStepDescription { step } => {
                write!(f, "step {step} description must not be blank")
            }
            Self::BlankStepCriterion { step, criterion } => {
                write!(f, "step {step} criterion {criterion} must not be blank")
            }
            Self::BlankMethodCriterion { criterion } => {
                write!(f, "method criterion {criterion} must not be blank")
            }
            Self::StepOutOfRange { index, len } => {
                write!(f, "step index out of range (index={index}, len={len})")
            }
            Self::CriterionOutOfRange { step, index, len } => write!(
                f,
                "criterion index out of range (step={step}, index={index}, len={len})"
            ),
            Self::MethodCriterionOutOfRange { index, len } => write!(
                f,
                "method criterion index out of range (index={index}, len={len})"
            ),
            Self::LastStep => write!(f, "a method keeps at least one step"),
            Self::LastStepCriterion { step } => {
                write!(f, "step {step} keeps at least one criterion")
            }
            Self::LastMethodCriterion => write!(f, "a method keeps at least one criterion"),
        }
    }
}

impl std::error::Error for DraftError {}

#[derive(Clone, Debug)]
pub struct MethodDraft {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub category: Category,
    pub difficulty: Difficulty,
    steps: Vec<DraftStep>,
    pub outcome: String,
    success_criteria: Vec<String>,
}

impl Default for MethodDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodDraft {
    /// Fresh form state: one blank step with one blank criterion, one blank
    /// method criterion, Business / Medium preselected.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            duration: String::new(),
            category: Category::Business,
            difficulty: Difficulty::Medium,
            steps: vec![DraftStep::blank()],
            outcome: String::new(),
            success_criteria: vec![String::new()],
        }
    }

    pub fn steps(&self) -> &[DraftStep] {
        &self.steps
    }

    pub fn success_criteria(&self) -> &[String] {
        &self.success_criteria
    }

    pub fn add_step(&mut self) {
        self.steps.push(DraftStep::blank());
    }

    pub fn remove_step(&mut self, index: usize) -> Result<(), DraftError> {
        let len = self.steps.len();
        if index >= len {
            return Err(DraftError::StepOutOfRange { index, len });
        }
        if len == 1 {
            return Err(DraftError::LastStep);
        }
        self.steps.remove(index);
        Ok(())
    }

    pub fn set_step_title(&mut self, index: usize, title: impl Into<String>) -> Result<(), DraftError> {
        self.step_mut(index)?.title = title.into();
        Ok(())
    }

    pub fn set_step_description(
        &mut self,
        index: usize,
        description: impl Into<String>,
    ) -> Result<(), DraftError> {
        self.step_mut(index)?.description = description.into();
        Ok(())
    }

    pub fn add_step_criterion(&mut self, step: usize) -> Result<(), DraftError> {
        self.step_mut(step)?.success_criteria.push(String::new());
        Ok(())
    }

    pub fn remove_step_criterion(&mut self, step: usize, index: usize) -> Result<(), DraftError> {
        let entry = self.step_mut(step)?;
        let len = entry.success_criteria.len();
        if index >= len {
            return Err(DraftError::CriterionOutOfRange { step, index, len });
        }
        if len == 1 {
            return Err(DraftError::LastStepCriterion { step });
        }
        entry.success_criteria.remove(index);
        Ok(())
    }

    pub fn set_step_criterion(
        &mut self,
        step: usize,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), DraftError> {
        let entry = self.step_mut(step)?;
        let len = entry.success_criteria.len();
        let Some(slot) = entry.success_criteria.get_mut(index) else {
            return Err(DraftError::CriterionOutOfRange { step, index, len });
        };
        *slot = text.into();
        Ok(())
    }

    pub fn add_method_criterion(&mut self) {
        self.success_criteria.push(String::new());
    }

    pub fn remove_method_criterion(&mut self, index: usize) -> Result<(), DraftError> {
        let len = self.success_criteria.len();
        if index >= len {
            return Err(DraftError::MethodCriterionOutOfRange { index, len });
        }
        if len == 1 {
            return Err(DraftError::LastMethodCriterion);
        }
        self.success_criteria.remove(index);
        Ok(())
    }

    pub fn set_method_criterion(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), DraftError> {
        let len = self.success_criteria.len();
        let Some(slot) = self.success_criteria.get_mut(index) else {
            return Err(DraftError::MethodCriterionOutOfRange { index, len });
        };
        *slot = text.into();
        Ok(())
    }

    /// Validates the structural invariants of a catalog method and yields
    /// the spec with all fields trimmed.
    pub fn finish(&self) -> Result<MethodSpec, DraftError> {
        let title = non_blank(&self.title, DraftError::BlankTitle)?;
        let description = non_blank(&self.description, DraftError::BlankDescription)?;
        let duration = non_blank(&self.duration, DraftError::BlankDuration)?;
        let outcome = non_blank(&self.outcome, DraftError::BlankOutcome)?;

        let mut steps = Vec::with_capacity(self.steps.len());
        for (step_index, draft) in self.steps.iter().enumerate() {
            let title = non_blank(&draft.title, DraftError::BlankStepTitle { step: step_index })?;
            let description = non_blank(
                &draft.description,
                DraftError::BlankStepDescription { step: step_index },
            )?;
            let mut criteria = Vec::with_capacity(draft.success_criteria.len());
            for (criterion, text) in draft.success_criteria.iter().enumerate() {
                criteria.push(non_blank(
                    text,
                    DraftError::BlankStepCriterion {
                        step: step_index,
                        criterion,
                    },
                )?);
            }
            steps.push(MethodStep {
                title,
                description,
                success_criteria: criteria,
            });
        }

        let mut success_criteria = Vec::with_capacity(self.success_criteria.len());
        for (criterion, text) in self.success_criteria.iter().enumerate() {
            success_criteria.push(non_blank(
                text,
                DraftError::BlankMethodCriterion { criterion },
            )?);
        }

        Ok(MethodSpec {
            title,
            description,
            duration,
            difficulty: self.difficulty,
            category: self.category,
            steps,
            outcome,
            success_criteria,
        })
    }

    fn step_mut(&mut self, index: usize) -> Result<&mut DraftStep, DraftError> {
        let len = self.steps.len();
        self.steps
            .get_mut(index)
            .ok_or(DraftError::StepOutOfRange { index, len })
    }
}

fn non_blank(value: &str, error: DraftError) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_string())
}

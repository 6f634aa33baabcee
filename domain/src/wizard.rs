//! Multi-step form wizard.
//!
//! A wizard walks a form through an ordered list of steps. Moving forward
//! requires the current step to validate; moving back is always allowed;
//! jumping is only allowed to steps that were already reached.

use std::fmt::Debug;

/// A single invalid field, with a user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub type ValidationErrors = Vec<FieldError>;

/// A form that can be filled in over several steps
pub trait WizardForm {
    type Step: Copy + Eq + Debug + 'static;

    /// Steps in display order; never empty
    fn steps() -> &'static [Self::Step];

    fn validate_step(&self, step: Self::Step) -> Result<(), ValidationErrors>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WizardError<S: Debug> {
    #[error("Step {step:?} has {} invalid field(s)", .errors.len())]
    InvalidStep { step: S, errors: ValidationErrors },
    #[error("Step {0:?} has not been reached yet")]
    StepNotReached(S),
    #[error("Step {0:?} is not part of this wizard")]
    UnknownStep(S),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard<F: WizardForm> {
    form: F,
    current: usize,
    furthest: usize,
}

impl<F: WizardForm> Wizard<F> {
    /// Start on the first step with nothing reached beyond it
    pub fn new(form: F) -> Self {
        debug_assert!(!F::steps().is_empty(), "wizard needs at least one step");
        Self {
            form,
            current: 0,
            furthest: 0,
        }
    }

    /// Start on the first step with every step reachable, for editing
    pub fn unlocked(form: F) -> Self {
        Self {
            form,
            current: 0,
            furthest: F::steps().len().saturating_sub(1),
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn into_form(self) -> F {
        self.form
    }

    pub fn current_step(&self) -> F::Step {
        F::steps()[self.current]
    }

    /// 1-indexed position and total step count
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, F::steps().len())
    }

    pub fn is_first_step(&self) -> bool {
        self.current == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 >= F::steps().len()
    }

    pub fn is_reached(&self, step: F::Step) -> bool {
        Self::index_of(step).is_some_and(|idx| idx <= self.furthest)
    }

    /// Validate the current step and advance; stays put on the last step
    pub fn next(&mut self) -> Result<F::Step, WizardError<F::Step>> {
        let step = self.current_step();
        self.form
            .validate_step(step)
            .map_err(|errors| WizardError::InvalidStep { step, errors })?;

        if !self.is_last_step() {
            self.current += 1;
            self.furthest = self.furthest.max(self.current);
        }
        Ok(self.current_step())
    }

    pub fn back(&mut self) -> F::Step {
        self.current = self.current.saturating_sub(1);
        self.current_step()
    }

    pub fn go_to(&mut self, step: F::Step) -> Result<(), WizardError<F::Step>> {
        let idx = Self::index_of(step).ok_or(WizardError::UnknownStep(step))?;
        if idx > self.furthest {
            return Err(WizardError::StepNotReached(step));
        }
        self.current = idx;
        Ok(())
    }

    /// Validate every step in order and hand back the finished form
    pub fn submit(&self) -> Result<&F, WizardError<F::Step>> {
        for &step in F::steps() {
            self.form
                .validate_step(step)
                .map_err(|errors| WizardError::InvalidStep { step, errors })?;
        }
        Ok(&self.form)
    }

    fn index_of(step: F::Step) -> Option<usize> {
        F::steps().iter().position(|&s| s == step)
    }
}

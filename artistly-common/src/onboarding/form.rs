//! Multi-step onboarding form state machine
//!
//! Steps 1-3 each own a group of fields; step 4 is the review step.
//! `advance` validates only the current step's fields, `retreat` never
//! validates, and submission validates the whole record. Submission is a
//! one-way trip: `Editing → Submitting → Submitted`, with `Submitting`
//! falling back to `Editing` only if the collaborator rejects the record.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::application::{ApplicationDraft, ArtistApplication, DraftUpdate, ListField};
use super::validation::{validate_field, validate_fields, FieldErrors, FormField};
use super::TOTAL_STEPS;
use crate::{Error, Result};

/// Lifecycle of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    Editing,
    /// Record validated and handed to the submission collaborator
    Submitting,
    Submitted,
}

/// Fields validated when leaving `step`
pub fn step_fields(step: u8) -> &'static [FormField] {
    match step {
        1 => &[FormField::Name, FormField::Email, FormField::Phone, FormField::Location],
        2 => &[FormField::Bio, FormField::Categories, FormField::Experience],
        3 => &[FormField::Languages, FormField::FeeRange, FormField::Availability],
        _ => &[],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingForm {
    step: u8,
    draft: ApplicationDraft,
    errors: FieldErrors,
    status: FormStatus,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self {
            step: 1,
            draft: ApplicationDraft::default(),
            errors: FieldErrors::new(),
            status: FormStatus::Editing,
        }
    }

    /// Current step, 1..=TOTAL_STEPS
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    /// Progress bar fill, 0 on the first step and 100 on the last
    pub fn progress_percent(&self) -> f32 {
        f32::from(self.step - 1) / f32::from(TOTAL_STEPS - 1) * 100.0
    }

    fn ensure_editing(&self) -> Result<()> {
        match self.status {
            FormStatus::Editing => Ok(()),
            FormStatus::Submitting | FormStatus::Submitted => Err(Error::AlreadySubmitted),
        }
    }

    fn revalidate(&mut self, field: FormField) {
        match validate_field(&self.draft, field) {
            Some(msg) => {
                self.errors.insert(field, msg);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Set field values; each touched field is revalidated immediately
    pub fn update(&mut self, update: DraftUpdate) -> Result<()> {
        self.ensure_editing()?;
        for field in self.draft.apply(update) {
            self.revalidate(field);
        }
        Ok(())
    }

    /// Check or uncheck one item of a multi-select field
    pub fn toggle(&mut self, list: ListField, value: &str, checked: bool) -> Result<()> {
        self.ensure_editing()?;
        if !list.choices().contains(&value) {
            return Err(Error::InvalidInput(format!(
                "Unknown {:?} option: {}",
                list, value
            )));
        }
        self.draft.toggle(list, value, checked);
        self.revalidate(list.field());
        Ok(())
    }

    /// Validate the current step and move forward (clamped at the last step)
    ///
    /// On failure the step is unchanged and the failing fields carry messages.
    pub fn advance(&mut self) -> Result<u8> {
        self.ensure_editing()?;
        let fields = step_fields(self.step);
        for &field in fields {
            self.errors.remove(&field);
        }
        let failures = validate_fields(&self.draft, fields);
        if !failures.is_empty() {
            debug!(step = self.step, failures = failures.len(), "Step validation failed");
            self.errors.extend(failures.clone());
            return Err(Error::Validation(failures));
        }
        if self.step < TOTAL_STEPS {
            self.step += 1;
        }
        Ok(self.step)
    }

    /// Move back one step without validating (clamped at the first step)
    pub fn retreat(&mut self) -> Result<u8> {
        self.ensure_editing()?;
        if self.step > 1 {
            self.step -= 1;
        }
        Ok(self.step)
    }

    /// Validate the whole record and lock the form for submission
    pub fn begin_submit(&mut self) -> Result<ArtistApplication> {
        self.ensure_editing()?;
        let failures = validate_fields(&self.draft, &FormField::ALL);
        self.errors = failures.clone();
        if !failures.is_empty() {
            return Err(Error::Validation(failures));
        }
        self.status = FormStatus::Submitting;
        Ok(ArtistApplication::from(self.draft.clone()))
    }

    /// Collaborator accepted the record; terminal
    pub fn complete_submit(&mut self) {
        if self.status == FormStatus::Submitting {
            self.status = FormStatus::Submitted;
        }
    }

    /// Collaborator rejected the record; editing resumes
    pub fn abort_submit(&mut self) {
        if self.status == FormStatus::Submitting {
            self.status = FormStatus::Editing;
        }
    }
}

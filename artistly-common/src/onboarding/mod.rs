//! Artist onboarding: a four-step application form

pub mod application;
pub mod form;
pub mod options;
pub mod submission;
pub mod validation;

/// Number of form steps; the last one is review-only
pub const TOTAL_STEPS: u8 = 4;

pub use application::{ApplicationDraft, ArtistApplication, DraftUpdate, ListField};
pub use form::{step_fields, FormStatus, OnboardingForm};
pub use options::{
    FormOptions, AVAILABILITY_OPTIONS, CATEGORIES, EXPERIENCE_LEVELS, FEE_RANGES, LANGUAGES,
};
pub use submission::{ApplicationSink, SimulatedApplicationSink, SubmissionReceipt};
pub use validation::{FieldErrors, FormField};

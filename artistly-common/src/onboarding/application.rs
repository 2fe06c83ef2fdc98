//! Application values collected by the onboarding form

use serde::{Deserialize, Serialize};

use super::options::{AVAILABILITY_OPTIONS, CATEGORIES, LANGUAGES};
use super::validation::FormField;

/// In-progress form values; any field may still be empty or invalid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub categories: Vec<String>,
    pub experience: String,
    pub languages: Vec<String>,
    pub fee_range: String,
    pub availability: Vec<String>,
}

/// Partial update of scalar and list fields; `None` leaves a field as is
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DraftUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub categories: Option<Vec<String>>,
    pub experience: Option<String>,
    pub languages: Option<Vec<String>>,
    pub fee_range: Option<String>,
    pub availability: Option<Vec<String>>,
}

/// Multi-select fields edited one checkbox at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListField {
    Categories,
    Languages,
    Availability,
}

impl ListField {
    pub fn field(self) -> FormField {
        match self {
            ListField::Categories => FormField::Categories,
            ListField::Languages => FormField::Languages,
            ListField::Availability => FormField::Availability,
        }
    }

    /// Values a checkbox may carry for this list
    pub fn choices(self) -> &'static [&'static str] {
        match self {
            ListField::Categories => CATEGORIES,
            ListField::Languages => LANGUAGES,
            ListField::Availability => AVAILABILITY_OPTIONS,
        }
    }
}

impl ApplicationDraft {
    /// Apply an update, returning the fields it touched
    pub fn apply(&mut self, update: DraftUpdate) -> Vec<FormField> {
        let mut touched = Vec::new();

        macro_rules! set {
            ($field:ident, $variant:ident) => {
                if let Some(value) = update.$field {
                    self.$field = value;
                    touched.push(FormField::$variant);
                }
            };
        }

        set!(name, Name);
        set!(email, Email);
        set!(phone, Phone);
        set!(location, Location);
        set!(bio, Bio);
        set!(categories, Categories);
        set!(experience, Experience);
        set!(languages, Languages);
        set!(fee_range, FeeRange);
        set!(availability, Availability);

        touched
    }

    pub fn list(&self, list: ListField) -> &Vec<String> {
        match list {
            ListField::Categories => &self.categories,
            ListField::Languages => &self.languages,
            ListField::Availability => &self.availability,
        }
    }

    fn list_mut(&mut self, list: ListField) -> &mut Vec<String> {
        match list {
            ListField::Categories => &mut self.categories,
            ListField::Languages => &mut self.languages,
            ListField::Availability => &mut self.availability,
        }
    }

    /// Check or uncheck one item, keeping selection order and no duplicates
    pub fn toggle(&mut self, list: ListField, value: &str, checked: bool) {
        let items = self.list_mut(list);
        if checked {
            if !items.iter().any(|v| v == value) {
                items.push(value.to_string());
            }
        } else {
            items.retain(|v| v != value);
        }
    }
}

/// Fully validated application handed to the submission collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub categories: Vec<String>,
    pub experience: String,
    pub languages: Vec<String>,
    pub fee_range: String,
    pub availability: Vec<String>,
}

impl From<ApplicationDraft> for ArtistApplication {
    fn from(draft: ApplicationDraft) -> Self {
        Self {
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            location: draft.location,
            bio: draft.bio,
            categories: draft.categories,
            experience: draft.experience,
            languages: draft.languages,
            fee_range: draft.fee_range,
            availability: draft.availability,
        }
    }
}

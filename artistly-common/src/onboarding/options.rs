//! Fixed choice lists offered by the onboarding form

use serde::Serialize;

use super::TOTAL_STEPS;

pub const CATEGORIES: &[&str] = &[
    "Singer",
    "Dancer",
    "Speaker",
    "DJ",
    "Instrumentalist",
    "Comedian",
    "Magician",
    "Actor",
    "Choreographer",
    "Producer",
];

pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Mandarin",
    "Japanese",
    "Korean",
    "Hindi",
    "Arabic",
    "Russian",
];

/// Fee brackets; also the enumeration artist price ranges are drawn from
pub const FEE_RANGES: &[&str] = &[
    "$100-300",
    "$300-500",
    "$500-800",
    "$800-1200",
    "$1200-2000",
    "$2000+",
];

pub const EXPERIENCE_LEVELS: &[&str] = &[
    "Beginner (0-2 years)",
    "Intermediate (2-5 years)",
    "Advanced (5-10 years)",
    "Expert (10+ years)",
];

pub const AVAILABILITY_OPTIONS: &[&str] = &[
    "Weekdays",
    "Weekends",
    "Evenings",
    "Mornings",
    "Corporate Events",
    "Private Parties",
    "Weddings",
    "Festivals",
];

/// Step titles, indexed by step - 1
pub const STEP_TITLES: [&str; TOTAL_STEPS as usize] = [
    "Basic Information",
    "Professional Details",
    "Additional Details",
    "Review & Submit",
];

/// Everything a client needs to render the form's widgets
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub total_steps: u8,
    pub step_titles: &'static [&'static str],
    pub categories: &'static [&'static str],
    pub languages: &'static [&'static str],
    pub fee_ranges: &'static [&'static str],
    pub experience_levels: &'static [&'static str],
    pub availability: &'static [&'static str],
}

impl FormOptions {
    pub fn get() -> Self {
        Self {
            total_steps: TOTAL_STEPS,
            step_titles: &STEP_TITLES,
            categories: CATEGORIES,
            languages: LANGUAGES,
            fee_ranges: FEE_RANGES,
            experience_levels: EXPERIENCE_LEVELS,
            availability: AVAILABILITY_OPTIONS,
        }
    }
}

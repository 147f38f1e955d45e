//! Résumé content model
//!
//! The final, post-review résumé that a version snapshots. Every field is
//! optional or defaulted so partially extracted résumés still load.

use crate::traits::FinalContent;
use serde::{Deserialize, Serialize};

/// A single work experience entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    /// Job title
    pub title: String,
    /// Employer
    pub company: String,
    /// Start date as written on the résumé
    #[serde(default)]
    pub start_date: Option<String>,
    /// End date ("Present" or a date)
    #[serde(default)]
    pub end_date: Option<String>,
    /// Location
    #[serde(default)]
    pub location: Option<String>,
    /// Achievement bullets
    #[serde(default)]
    pub bullets: Vec<String>,
    /// Skills used in this role
    #[serde(default)]
    pub skills: Vec<String>,
    /// Whether this is the current role
    #[serde(default)]
    pub is_current: bool,
}

/// A single education entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    /// Degree name
    pub degree: String,
    /// Institution name
    pub institution: String,
    /// Field of study
    #[serde(default)]
    pub field_of_study: Option<String>,
    /// Graduation date
    #[serde(default)]
    pub graduation_date: Option<String>,
    /// GPA as written
    #[serde(default)]
    pub gpa: Option<String>,
    /// Honors and distinctions
    #[serde(default)]
    pub honors: Vec<String>,
    /// Relevant coursework
    #[serde(default)]
    pub relevant_coursework: Vec<String>,
}

/// Structured résumé
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeContent {
    /// Candidate name
    pub name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Location
    pub location: Option<String>,
    /// LinkedIn URL
    pub linkedin: Option<String>,
    /// GitHub URL
    pub github: Option<String>,
    /// Portfolio URL
    pub portfolio: Option<String>,
    /// One-line headline
    pub headline: Option<String>,
    /// Professional summary
    pub summary: Option<String>,
    /// Work experience, most recent first
    pub experiences: Vec<ExperienceItem>,
    /// Skills in display order
    pub skills: Vec<String>,
    /// Education entries
    pub education: Vec<EducationItem>,
    /// Certifications
    pub certifications: Vec<String>,
    /// Free-form project entries
    pub projects: Vec<serde_json::Value>,
    /// Awards
    pub awards: Vec<String>,
    /// Spoken languages
    pub languages: Vec<String>,
    /// Total years of experience, if computed
    pub total_years_experience: Option<f64>,
    /// Raw résumé text the structure was extracted from
    pub raw_text: Option<String>,
}

impl FinalContent for ResumeContent {
    fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    fn headline(&self) -> Option<&str> {
        self.headline.as_deref()
    }

    fn skills(&self) -> &[String] {
        &self.skills
    }
}

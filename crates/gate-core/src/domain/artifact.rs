// ============================================================================
// Gate Core - Artifact Record
// File: crates/gate-core/src/domain/artifact.rs
// Description: Metadata of the single artifact a deployment protects
// ============================================================================

use gate_shared::config::ArtifactSettings;
use serde::Serialize;

use crate::error::DomainError;

/// Evaluation outcome recorded for a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    HighPass,
    LowPass,
    None,
}

impl Evaluation {
    /// Label shown on the artifact page
    pub fn as_str(&self) -> &'static str {
        match self {
            Evaluation::HighPass => "High Pass",
            Evaluation::LowPass => "Low Pass",
            Evaluation::None => "None",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "high_pass" => Some(Evaluation::HighPass),
            "low_pass" => Some(Evaluation::LowPass),
            "none" | "" => Some(Evaluation::None),
            _ => None,
        }
    }
}

/// One label/value line of the metadata table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRecord {
    pub image_large: String,
    pub image_medium: String,
    pub year: String,
    pub semester: String,
    pub course_id: String,
    pub course_name: String,
    pub studio_master: String,
    pub instructor: String,
    pub assignment_name: String,
    pub assignment_duration: String,
    pub student_name: String,
    pub submission_id: String,
    pub evaluation: Evaluation,
}

impl ArtifactRecord {
    pub fn from_settings(settings: &ArtifactSettings) -> Result<Self, DomainError> {
        let evaluation = Evaluation::from_str(&settings.evaluation)
            .ok_or_else(|| DomainError::UnknownEvaluation(settings.evaluation.clone()))?;

        Ok(Self {
            image_large: settings.image_large.trim().to_string(),
            image_medium: settings.image_medium.trim().to_string(),
            year: settings.year.clone(),
            semester: settings.semester.clone(),
            course_id: settings.course_id.clone(),
            course_name: settings.course_name.clone(),
            studio_master: settings.studio_master.clone(),
            instructor: settings.instructor.clone(),
            assignment_name: settings.assignment_name.clone(),
            assignment_duration: settings.assignment_duration.clone(),
            student_name: settings.student_name.clone(),
            submission_id: settings.submission_id.clone(),
            evaluation,
        })
    }

    /// Metadata table rows in display order
    pub fn metadata_rows(&self) -> Vec<MetadataRow> {
        let row = |label, value: &str| MetadataRow { label, value: value.to_string() };
        vec![
            row("Year", &self.year),
            row("Semester", &self.semester),
            row("Course ID", &self.course_id),
            row("Course Name", &self.course_name),
            row("Studio Master", &self.studio_master),
            row("Instructor", &self.instructor),
            row("Assignment Name", &self.assignment_name),
            row("Assignment Duration", &self.assignment_duration),
            row("Student Name", &self.student_name),
            row("Submission ID", &self.submission_id),
            row("Evaluation", self.evaluation.as_str()),
        ]
    }
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_SKILLS: &str = "Python, Communication";
pub const DEFAULT_INTERESTS: &str = "Data Science, AI, Problem Solving";

/// Highest education level the user reports. Serialized as the label shown
/// in the form's select box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[default]
    #[serde(rename = "High School")]
    HighSchool,
    Undergraduate,
    Graduate,
    Postgraduate,
    Other,
}

impl EducationLevel {
    /// Every option, in the order the form lists them.
    pub const ALL: [EducationLevel; 5] = [
        EducationLevel::HighSchool,
        EducationLevel::Undergraduate,
        EducationLevel::Graduate,
        EducationLevel::Postgraduate,
        EducationLevel::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Undergraduate => "Undergraduate",
            EducationLevel::Graduate => "Graduate",
            EducationLevel::Postgraduate => "Postgraduate",
            EducationLevel::Other => "Other",
        }
    }
}

impl std::fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported profile submitted with the career recommendation form.
/// Lives for one request only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub skills: String,
    pub interests: String,
    pub education: EducationLevel,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            skills: DEFAULT_SKILLS.to_string(),
            interests: DEFAULT_INTERESTS.to_string(),
            education: EducationLevel::default(),
        }
    }
}

/// A free-text question for the career chatbot. A missing field reads as
/// an empty question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    pub question: String,
}

impl Question {
    /// Whitespace-only questions never reach the model.
    pub fn is_blank(&self) -> bool {
        self.question.trim().is_empty()
    }
}

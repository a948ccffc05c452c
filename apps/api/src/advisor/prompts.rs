// Prompt templates for the career advisor and the chatbot.
// User text is interpolated as-is: no escaping, no length limit.

use crate::models::profile::{Profile, Question};

/// Career recommendation template.
/// Replace: {skills}, {interests}, {education}
pub const CAREER_PROMPT_TEMPLATE: &str = r#"You are a career advisor. Based on the following profile:
- Skills: {skills}
- Interests: {interests}
- Education Level: {education}

Suggest 3 suitable career paths (like Data Scientist, Product Manager, UX Designer).
For each career:
- Provide a short description
- List key required skills
- Compare against the user's skills (mark missing skills as gaps)
- Suggest learning resources (courses, certifications, or books)"#;

/// Chatbot template. Replace `{question}` before sending.
pub const CHAT_PROMPT_TEMPLATE: &str = r#"You are a helpful career counseling assistant.
Answer this career-related question clearly and empathetically:

{question}"#;

pub fn build_career_prompt(profile: &Profile) -> String {
    fill_template(
        CAREER_PROMPT_TEMPLATE,
        &[
            ("skills", profile.skills.as_str()),
            ("interests", profile.interests.as_str()),
            ("education", profile.education.label()),
        ],
    )
}

pub fn build_chat_prompt(question: &Question) -> String {
    fill_template(CHAT_PROMPT_TEMPLATE, &[("question", question.question.as_str())])
}

/// Substitutes `{name}` placeholders in a single left-to-right pass over the
/// template. Inserted values are never rescanned, so user text that happens
/// to contain `{skills}` stays literal. Unknown placeholders are kept.
fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let filled = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });

        match filled {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::EducationLevel;

    fn profile(skills: &str, interests: &str, education: EducationLevel) -> Profile {
        Profile {
            skills: skills.to_string(),
            interests: interests.to_string(),
            education,
        }
    }

    #[test]
    fn test_career_prompt_contains_every_input_verbatim() {
        let p = profile(
            "Python, Communication",
            "Data Science, AI, Problem Solving",
            EducationLevel::Undergraduate,
        );
        let prompt = build_career_prompt(&p);
        assert!(prompt.contains("- Skills: Python, Communication\n"));
        assert!(prompt.contains("- Interests: Data Science, AI, Problem Solving\n"));
        assert!(prompt.contains("- Education Level: Undergraduate\n"));
        assert!(prompt.starts_with("You are a career advisor."));
        assert!(prompt.contains("Suggest 3 suitable career paths"));
        assert!(prompt.contains("mark missing skills as gaps"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_career_prompt_covers_every_education_level() {
        for level in EducationLevel::ALL {
            let prompt = build_career_prompt(&profile("Rust", "Systems", level));
            assert!(prompt.contains(level.label()), "missing {level}");
        }
    }

    #[test]
    fn test_placeholder_text_in_user_input_is_not_resubstituted() {
        let p = profile("{interests}", "{skills} and {education}", EducationLevel::Other);
        let prompt = build_career_prompt(&p);
        assert!(prompt.contains("- Skills: {interests}\n"));
        assert!(prompt.contains("- Interests: {skills} and {education}\n"));
        assert!(prompt.contains("- Education Level: Other\n"));
    }

    #[test]
    fn test_empty_and_multiline_inputs_are_embedded_unchanged() {
        let p = profile("", "line one\nline two\n\n  indented", EducationLevel::Graduate);
        let prompt = build_career_prompt(&p);
        assert!(prompt.contains("- Skills: \n"));
        assert!(prompt.contains("line one\nline two\n\n  indented"));
    }

    #[test]
    fn test_chat_prompt_contains_question_verbatim() {
        let question = Question {
            question: "How do I move from QA into data engineering? {question} ✨".to_string(),
        };
        let prompt = build_chat_prompt(&question);
        assert!(prompt.starts_with("You are a helpful career counseling assistant."));
        assert!(prompt.contains("clearly and empathetically"));
        assert!(prompt.ends_with(&question.question));
    }

    #[test]
    fn test_fill_template_keeps_unknown_and_unbalanced_braces() {
        let out = fill_template("{a} {b} {c", &[("a", "1")]);
        assert_eq!(out, "1 {b} {c");
    }

    #[test]
    fn test_fill_template_multibyte_neighbours() {
        let out = fill_template("é{a}ü", &[("a", "ß")]);
        assert_eq!(out, "éßü");
    }
}

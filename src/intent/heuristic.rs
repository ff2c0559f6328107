//! Local keyword fallback, consulted only when the remote oracle yields
//! nothing. Pure and total: a non-empty query always resolves to at least
//! the `me` introduction card.

use super::category::Category;

/// Keyword groups tested in fixed order; a query matching several groups
/// yields several categories, in this order.
const KEYWORD_GROUPS: &[(Category, &[&str])] = &[
    (Category::Projects, &["project", "work", "portfolio"]),
    (Category::Skills, &["skill", "proof"]),
    (Category::Contact, &["contact", "reach", "email"]),
    (
        Category::Experience,
        &["experience", "worked", "intern", "roles"],
    ),
    (Category::Resume, &["resume", "cv"]),
    (
        Category::Education,
        &["education", "degree", "study", "university", "college"],
    ),
    (
        Category::Achievements,
        &["achievement", "award", "badges", "accomplishment"],
    ),
];

/// Classify a query with substring heuristics alone. No I/O, never empty:
/// a query matching nothing defaults to `[Me]`.
pub fn infer_locally(query: &str) -> Vec<Category> {
    let q = query.to_lowercase();

    let mut matched: Vec<Category> = KEYWORD_GROUPS
        .iter()
        .filter(|(_, words)| words.iter().any(|w| q.contains(w)))
        .map(|(category, _)| *category)
        .collect();

    if mentions_self(&q) {
        matched.push(Category::Me);
    }

    if matched.is_empty() {
        matched.push(Category::Me);
    }
    matched
}

/// The `me` probe matches the standalone word only - a raw substring test
/// would fire inside "resume" or "time".
fn mentions_self(q: &str) -> bool {
    q.contains("who are you")
        || q.contains("about you")
        || q.split(|c: char| !c.is_alphanumeric()).any(|t| t == "me")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_query_matches_resume_only() {
        assert_eq!(infer_locally("Can I see your resume?"), [Category::Resume]);
    }

    #[test]
    fn cv_synonym_matches_resume() {
        assert_eq!(infer_locally("send me your CV"), [
            Category::Resume,
            Category::Me
        ]);
        assert_eq!(infer_locally("is there a cv?"), [Category::Resume]);
    }

    #[test]
    fn ambiguous_query_returns_groups_in_test_order() {
        assert_eq!(
            infer_locally("What's your experience with your projects?"),
            [Category::Projects, Category::Experience]
        );
    }

    #[test]
    fn gibberish_defaults_to_me() {
        assert_eq!(infer_locally("asdkjasd"), [Category::Me]);
    }

    #[test]
    fn empty_query_defaults_to_me() {
        assert_eq!(infer_locally(""), [Category::Me]);
    }

    #[test]
    fn who_are_you_matches_me() {
        assert_eq!(infer_locally("Who are you?"), [Category::Me]);
        assert_eq!(infer_locally("tell me about you"), [Category::Me]);
    }

    #[test]
    fn me_does_not_fire_inside_other_words() {
        // "time" and "resume" both contain the substring "me"
        assert_eq!(infer_locally("how much time do you have"), [Category::Me]);
        assert_eq!(infer_locally("your resume please"), [Category::Resume]);
    }

    #[test]
    fn education_keywords() {
        assert_eq!(
            infer_locally("where did you study, which university?"),
            [Category::Education]
        );
        assert_eq!(infer_locally("what's your degree"), [Category::Education]);
    }

    #[test]
    fn contact_keywords() {
        assert_eq!(
            infer_locally("how do I reach you by email"),
            [Category::Contact]
        );
    }

    #[test]
    fn achievements_keywords() {
        assert_eq!(
            infer_locally("any awards or badges?"),
            [Category::Achievements]
        );
    }

    #[test]
    fn worked_triggers_projects_and_experience() {
        // "worked" contains "work", so both groups fire, projects first.
        assert_eq!(infer_locally("where have you worked?"), [
            Category::Projects,
            Category::Experience
        ]);
    }
}

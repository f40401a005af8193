//! Rationale generation — renders a final score and its feature vector into
//! one human-readable sentence.
//!
//! The vector passed in must be the same one that produced the score, so the
//! wording can never drift from the number it explains.

use crate::ranking::features::FeatureVector;

/// Qualitative prefix for a final (post-perturbation) score.
pub fn score_prefix(score: f64) -> &'static str {
    if score >= 85.0 {
        "⭐ Exceptional match"
    } else if score >= 75.0 {
        "🎯 Excellent candidate"
    } else if score >= 65.0 {
        "✅ Strong candidate"
    } else if score >= 50.0 {
        "👍 Good candidate"
    } else {
        "📝 Potential candidate"
    }
}

/// Builds the full rationale: `"<prefix>: <clause>, <clause>, …."`.
///
/// The skills and experience clauses always appear; education, application
/// depth, and motivation clauses only when their thresholds fire.
pub fn build_rationale(features: &FeatureVector, score: f64) -> String {
    let mut clauses: Vec<String> = Vec::new();

    clauses.push(skills_clause(features.skills_match).to_string());
    clauses.push(experience_clause(features.experience_years));

    if features.education_level >= 0.8 {
        clauses.push("advanced degree".to_string());
    } else if features.education_level >= 0.6 {
        clauses.push("bachelor's degree".to_string());
    }

    if let Some(clause) = application_clause(features.completeness, features.response_quality) {
        clauses.push(clause.to_string());
    }

    if features.motivation_quality >= 0.7 {
        clauses.push("strong motivation expressed".to_string());
    }

    format!("{}: {}.", score_prefix(score), clauses.join(", "))
}

fn skills_clause(skills_match: f64) -> &'static str {
    if skills_match >= 0.7 {
        "excellent skills alignment with job requirements"
    } else if skills_match >= 0.5 {
        "good technical skills match"
    } else if skills_match >= 0.3 {
        "moderate skills overlap"
    } else {
        "limited skills match to requirements"
    }
}

/// Experience wording. Years render truncated to whole numbers, matching how
/// recruiters quote them.
fn experience_clause(years: f64) -> String {
    if years >= 10.0 {
        format!("{}+ years of extensive experience", years as i64)
    } else if years >= 5.0 {
        format!("{} years of solid experience", years as i64)
    } else if years >= 2.0 {
        format!("{} years experience", years as i64)
    } else if years >= 1.0 {
        "early career professional".to_string()
    } else {
        "entry-level candidate".to_string()
    }
}

/// Application-depth clause. Mid-range completeness (0.5 ≤ c < 0.7) says
/// nothing rather than something lukewarm.
fn application_clause(completeness: f64, response_quality: f64) -> Option<&'static str> {
    if completeness >= 0.9 && response_quality >= 0.6 {
        Some("comprehensive and detailed application")
    } else if completeness >= 0.7 {
        Some("thorough application")
    } else if completeness < 0.5 {
        Some("incomplete application")
    } else {
        None
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn vector() -> FeatureVector {
        FeatureVector {
            experience_years: 6.0,
            completeness: 1.0,
            response_quality: 0.3,
            skills_match: 0.6,
            education_level: 0.6,
            motivation_quality: 0.2,
        }
    }

    #[test]
    fn test_prefix_bands() {
        assert_eq!(score_prefix(92.0), "⭐ Exceptional match");
        assert_eq!(score_prefix(85.0), "⭐ Exceptional match");
        assert_eq!(score_prefix(84.9), "🎯 Excellent candidate");
        assert_eq!(score_prefix(75.0), "🎯 Excellent candidate");
        assert_eq!(score_prefix(65.0), "✅ Strong candidate");
        assert_eq!(score_prefix(50.0), "👍 Good candidate");
        assert_eq!(score_prefix(49.9), "📝 Potential candidate");
        assert_eq!(score_prefix(0.0), "📝 Potential candidate");
    }

    #[test]
    fn test_skills_clause_ladder() {
        assert_eq!(
            skills_clause(0.8),
            "excellent skills alignment with job requirements"
        );
        assert_eq!(skills_clause(0.5), "good technical skills match");
        assert_eq!(skills_clause(0.3), "moderate skills overlap");
        assert_eq!(skills_clause(0.1), "limited skills match to requirements");
    }

    #[test]
    fn test_experience_clause_ladder() {
        assert_eq!(experience_clause(12.3), "12+ years of extensive experience");
        assert_eq!(experience_clause(10.0), "10+ years of extensive experience");
        assert_eq!(experience_clause(6.0), "6 years of solid experience");
        assert_eq!(experience_clause(3.7), "3 years experience");
        assert_eq!(experience_clause(1.5), "early career professional");
        assert_eq!(experience_clause(0.4), "entry-level candidate");
    }

    #[test]
    fn test_education_mentioned_from_bachelor_up() {
        let mut fv = vector();

        fv.education_level = 1.0;
        assert!(build_rationale(&fv, 70.0).contains("advanced degree"));

        fv.education_level = 0.6;
        let text = build_rationale(&fv, 70.0);
        assert!(text.contains("bachelor's degree"));
        assert!(!text.contains("advanced degree"));

        fv.education_level = 0.4;
        assert!(!build_rationale(&fv, 70.0).contains("degree"));
    }

    #[test]
    fn test_application_clause_thresholds() {
        assert_eq!(
            application_clause(0.95, 0.7),
            Some("comprehensive and detailed application")
        );
        // High completeness with thin answers downgrades to "thorough".
        assert_eq!(application_clause(0.95, 0.2), Some("thorough application"));
        assert_eq!(application_clause(0.75, 0.0), Some("thorough application"));
        assert_eq!(application_clause(0.3, 0.9), Some("incomplete application"));
        assert_eq!(application_clause(0.6, 0.9), None);
    }

    #[test]
    fn test_motivation_clause_threshold() {
        let mut fv = vector();

        fv.motivation_quality = 0.7;
        assert!(build_rationale(&fv, 70.0).contains("strong motivation expressed"));

        fv.motivation_quality = 0.69;
        assert!(!build_rationale(&fv, 70.0).contains("strong motivation"));
    }

    #[test]
    fn test_rationale_shape() {
        let text = build_rationale(&vector(), 67.2);
        assert!(text.starts_with("✅ Strong candidate: "));
        assert!(text.ends_with('.'));
        // Skills and experience clauses always present, comma-joined.
        assert!(text.contains("good technical skills match, 6 years of solid experience"));
    }

    #[test]
    fn test_rationale_uses_the_vector_it_was_given() {
        // Same score, different vectors → different wording. The caller pairs
        // each score with the vector that produced it.
        let strong = build_rationale(&vector(), 55.0);
        let mut weak = vector();
        weak.skills_match = 0.1;
        weak.experience_years = 0.0;
        let weak_text = build_rationale(&weak, 55.0);

        assert_ne!(strong, weak_text);
        assert!(weak_text.contains("limited skills match"));
        assert!(weak_text.contains("entry-level candidate"));
    }
}

//! Recommendation scorer.
//!
//! Scores a user profile against every catalog entry with a hand-tuned
//! weighted formula and returns the top three careers. Scoring is pure and
//! infallible: no I/O, no shared state, and missing or garbage profile fields
//! degrade to neutral component scores instead of erroring.

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

use crate::advisor::catalog::{self, CareerDefinition};
use crate::models::profile::ProfileRow;

/// Years-of-experience floor for each coarse bucket code the client sends.
const EXPERIENCE_BUCKETS: &[(&str, u8)] = &[
    ("0", 0),   // entry level
    ("1", 2),   // 1-2 years
    ("3", 4),   // 3-5 years
    ("6", 8),   // 6-10 years
    ("11", 12), // 10+ years
];

/// Assumed years when the profile carries no recognizable bucket code.
const DEFAULT_EXPERIENCE_YEARS: u8 = 2;

const SKILL_WEIGHT: f64 = 0.5;
const INTEREST_WEIGHT: f64 = 0.2;
const EDUCATION_WEIGHT: f64 = 0.1;
const EXPERIENCE_WEIGHT: f64 = 0.1;
const DEMAND_WEIGHT: f64 = 0.1;

/// Flat bonus when the profile's current role overlaps the career title.
const ROLE_BONUS: f64 = 0.05;

/// Per-match boosts applied on top of the normalized ratios, so a five-skill
/// overlap outranks a one-skill career with the same ratio.
const SKILL_MATCH_BOOST: f64 = 1.7;
const INTEREST_MATCH_BOOST: f64 = 1.1;

const MIN_MATCH_SCORE: u8 = 28;
const MAX_MATCH_SCORE: u8 = 98;

const MAX_RECOMMENDATIONS: usize = 3;

/// One scored career, in the wire shape the frontend consumes.
///
/// `education_levels` echoes the catalog's accepted-levels list under the
/// `educationLevel` key the client expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub interests: Vec<String>,
    #[serde(rename = "educationLevel")]
    pub education_levels: Vec<String>,
    pub average_salary: String,
    pub growth_rate: String,
    pub match_score: u8,
    pub matched_skills: Vec<String>,
    pub matched_interests: Vec<String>,
}

/// Scores the full static catalog and returns the top three matches.
pub fn generate_recommendations(profile: &ProfileRow) -> Vec<CareerRecommendation> {
    recommend(profile, catalog::all_careers())
}

/// Scores every entry of `careers` independently, sorts descending by match
/// score, and truncates to three. The sort is stable, so careers with equal
/// scores keep their catalog declaration order.
pub fn recommend(
    profile: &ProfileRow,
    careers: &[CareerDefinition],
) -> Vec<CareerRecommendation> {
    let mut scored: Vec<CareerRecommendation> = careers
        .iter()
        .map(|career| score_career(profile, career))
        .collect();
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(MAX_RECOMMENDATIONS);
    scored
}

/// Scores a single catalog entry against the profile.
///
/// Weighted formula: 0.5*skills + 0.2*interests + 0.1*education +
/// 0.1*experience + 0.1*demand + role bonus, scaled to 100, boosted by raw
/// match counts, floored, and clamped to [28, 98].
pub fn score_career(profile: &ProfileRow, career: &CareerDefinition) -> CareerRecommendation {
    let matched_skills = matched_subset(career.required_skills, &profile.skills);
    let matched_interests = matched_subset(career.interests, &profile.interests);

    let skill_score = safe_ratio(matched_skills.len(), career.required_skills.len());
    let interest_score = safe_ratio(matched_interests.len(), career.interests.len());
    let education_score =
        education_alignment(profile.education_level.as_deref(), career.education_levels);
    let experience_score =
        experience_alignment(profile.years_experience.as_deref(), career.min_experience);
    let demand_score = f64::from(career.demand_index) / 5.0;
    let role_bonus = role_alignment(profile.current_role.as_deref(), career.title);

    let weighted_score = skill_score * SKILL_WEIGHT
        + interest_score * INTEREST_WEIGHT
        + education_score * EDUCATION_WEIGHT
        + experience_score * EXPERIENCE_WEIGHT
        + demand_score * DEMAND_WEIGHT
        + role_bonus;
    let boost = matched_skills.len() as f64 * SKILL_MATCH_BOOST
        + matched_interests.len() as f64 * INTEREST_MATCH_BOOST;
    let match_score = clamp_score(weighted_score * 100.0 + boost);

    CareerRecommendation {
        id: career.slug.to_string(),
        title: career.title.to_string(),
        description: career.description.to_string(),
        required_skills: to_owned(career.required_skills),
        interests: to_owned(career.interests),
        education_levels: to_owned(career.education_levels),
        average_salary: career.average_salary.to_string(),
        growth_rate: career.growth_rate.to_string(),
        match_score,
        matched_skills,
        matched_interests,
    }
}

/// Candidates whose lower-cased form appears in the profile values,
/// deduplicated and sorted ascending on the original casing.
fn matched_subset(candidates: &[&str], profile_values: &[String]) -> Vec<String> {
    let normalized: HashSet<String> = profile_values.iter().map(|v| v.to_lowercase()).collect();
    let matched: BTreeSet<&str> = candidates
        .iter()
        .copied()
        .filter(|candidate| normalized.contains(&candidate.to_lowercase()))
        .collect();
    matched.into_iter().map(str::to_string).collect()
}

fn safe_ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

/// 1.0 when the career accepts any level or the profile's level is accepted,
/// 0.4 when the profile has no level set, 0.6 on a mismatch.
fn education_alignment(user_level: Option<&str>, accepted_levels: &[&str]) -> f64 {
    if accepted_levels.is_empty() {
        return 1.0;
    }
    match user_level {
        None | Some("") => 0.4,
        Some(level) if accepted_levels.contains(&level) => 1.0,
        Some(_) => 0.6,
    }
}

/// Maps the profile's bucket code to a years floor and compares it with the
/// career's minimum. Shortfalls lose 0.1 per missing year, floored at 0.3.
fn experience_alignment(bucket_code: Option<&str>, required_years: u8) -> f64 {
    let user_years = bucket_code
        .and_then(|code| {
            EXPERIENCE_BUCKETS
                .iter()
                .find(|(bucket, _)| *bucket == code)
                .map(|(_, years)| *years)
        })
        .unwrap_or(DEFAULT_EXPERIENCE_YEARS);
    if required_years == 0 || user_years >= required_years {
        return 1.0;
    }
    let gap = f64::from(required_years - user_years);
    (1.0 - gap / 10.0).max(0.3)
}

/// 0.05 when the lower-cased current role contains the career title or any
/// single word of it as a substring, 0.0 otherwise.
fn role_alignment(current_role: Option<&str>, career_title: &str) -> f64 {
    let current = match current_role {
        Some(role) if !role.is_empty() => role.to_lowercase(),
        _ => return 0.0,
    };
    let title = career_title.to_lowercase();
    if current.contains(&title) || title.split_whitespace().any(|word| current.contains(word)) {
        ROLE_BONUS
    } else {
        0.0
    }
}

fn clamp_score(raw: f64) -> u8 {
    (raw.floor() as i64).clamp(i64::from(MIN_MATCH_SCORE), i64::from(MAX_MATCH_SCORE)) as u8
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_profile(
        skills: &[&str],
        interests: &[&str],
        education: Option<&str>,
        experience: Option<&str>,
        role: Option<&str>,
    ) -> ProfileRow {
        ProfileRow {
            user_id: Uuid::new_v4(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            education_level: education.map(str::to_string),
            years_experience: experience.map(str::to_string),
            current_role: role.map(str::to_string),
            updated_at: Utc::now(),
        }
    }

    fn empty_profile() -> ProfileRow {
        make_profile(&[], &[], None, None, None)
    }

    fn career(slug: &str) -> &'static CareerDefinition {
        catalog::all_careers()
            .iter()
            .find(|c| c.slug == slug)
            .unwrap_or_else(|| panic!("no catalog entry {slug}"))
    }

    const TIE_A: CareerDefinition = CareerDefinition {
        slug: "tie-a",
        title: "Tie A",
        description: "First of two identical careers.",
        required_skills: &["juggling"],
        interests: &["circus"],
        education_levels: &[],
        average_salary: "$1",
        growth_rate: "0%",
        demand_index: 3,
        min_experience: 0,
    };

    const TIE_B: CareerDefinition = CareerDefinition {
        slug: "tie-b",
        title: "Tie B",
        description: "Second of two identical careers.",
        required_skills: &["juggling"],
        interests: &["circus"],
        education_levels: &[],
        average_salary: "$1",
        growth_rate: "0%",
        demand_index: 3,
        min_experience: 0,
    };

    #[test]
    fn test_data_analyst_scenario() {
        let profile = make_profile(
            &["python", "analytics", "sql"],
            &["data", "technology"],
            Some("bachelors"),
            Some("3"),
            None,
        );
        let result = score_career(&profile, career("data-analyst"));

        assert_eq!(result.matched_skills, vec!["analytics", "python", "sql"]);
        assert_eq!(result.matched_interests, vec!["data", "technology"]);
        // 0.5*(3/5) + 0.2*(2/3) + 0.1 + 0.1 + 0.1*(4/5) = 0.71333...
        // -> 71.333 + (3*1.7 + 2*1.1) = 78.633 -> floor 78
        assert_eq!(result.match_score, 78);

        let unrelated = score_career(&profile, career("museum-curator"));
        assert!(result.match_score > unrelated.match_score);
    }

    #[test]
    fn test_full_overlap_hits_clamp_ceiling() {
        let full_stack = career("full-stack-engineer");
        let profile = make_profile(
            full_stack.required_skills,
            full_stack.interests,
            Some("bachelors"),
            Some("11"),
            Some("Full-Stack Engineer"),
        );
        // weighted 1.05 -> 105 + boost 11.8, clamped down to the ceiling
        assert_eq!(score_career(&profile, full_stack).match_score, 98);
    }

    #[test]
    fn test_empty_profile_hits_clamp_floor() {
        // museum-curator: demand 2, min_experience 4, accepts only masters.
        // 0.1*0.4 + 0.1*0.8 + 0.1*0.4 = 0.16 -> 16, clamped up to 28
        let result = score_career(&empty_profile(), career("museum-curator"));
        assert!(result.matched_skills.is_empty());
        assert!(result.matched_interests.is_empty());
        assert_eq!(result.match_score, 28);
    }

    #[test]
    fn test_match_score_always_within_bounds() {
        let profiles = [
            empty_profile(),
            make_profile(
                &["python", "sql", "communication", "leadership", "analytics"],
                &["data", "healthcare", "operations", "design"],
                Some("masters"),
                Some("11"),
                Some("Engineering Manager"),
            ),
        ];
        for profile in &profiles {
            for career in catalog::all_careers() {
                let result = score_career(profile, career);
                assert!(
                    (MIN_MATCH_SCORE..=MAX_MATCH_SCORE).contains(&result.match_score),
                    "{} scored {}",
                    career.slug,
                    result.match_score
                );
            }
        }
    }

    #[test]
    fn test_matched_subsets_come_from_the_career() {
        let profile = make_profile(
            &["SQL", "Python", "basket weaving"],
            &["DATA", "sailing"],
            None,
            None,
            None,
        );
        let data_analyst = career("data-analyst");
        let result = score_career(&profile, data_analyst);
        for skill in &result.matched_skills {
            assert!(data_analyst.required_skills.contains(&skill.as_str()));
        }
        for interest in &result.matched_interests {
            assert!(data_analyst.interests.contains(&interest.as_str()));
        }
        // matching is case-insensitive on both sides
        assert_eq!(result.matched_skills, vec!["python", "sql"]);
        assert_eq!(result.matched_interests, vec!["data"]);
    }

    #[test]
    fn test_matched_subset_dedupes_and_sorts_on_original_casing() {
        let matched = matched_subset(
            &["Zeta", "alpha", "Zeta", "omega"],
            &["zeta".to_string(), "ALPHA".to_string()],
        );
        // ascending lexicographic: uppercase sorts before lowercase
        assert_eq!(matched, vec!["Zeta", "alpha"]);
    }

    #[test]
    fn test_recommendations_sorted_descending_and_capped_at_three() {
        let profile = make_profile(
            &["python", "analytics", "sql"],
            &["data", "technology"],
            Some("bachelors"),
            Some("3"),
            None,
        );
        let results = generate_recommendations(&profile);
        assert_eq!(results.len(), 3);
        assert!(results[0].match_score >= results[1].match_score);
        assert!(results[1].match_score >= results[2].match_score);
    }

    #[test]
    fn test_recommendations_idempotent() {
        let profile = make_profile(
            &["sql", "communication"],
            &["finance", "people"],
            Some("bachelors"),
            Some("6"),
            Some("Account Manager"),
        );
        assert_eq!(
            generate_recommendations(&profile),
            generate_recommendations(&profile)
        );
    }

    #[test]
    fn test_empty_catalog_yields_empty_list() {
        assert!(recommend(&empty_profile(), &[]).is_empty());
    }

    #[test]
    fn test_short_catalog_yields_fewer_than_three() {
        let results = recommend(&empty_profile(), &[TIE_A, TIE_B]);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let results = recommend(&empty_profile(), &[TIE_A, TIE_B]);
        assert_eq!(results[0].match_score, results[1].match_score);
        assert_eq!(results[0].id, "tie-a");
        assert_eq!(results[1].id, "tie-b");
    }

    #[test]
    fn test_education_alignment() {
        assert_eq!(education_alignment(None, &[]), 1.0);
        assert_eq!(education_alignment(Some("phd"), &[]), 1.0);
        assert_eq!(education_alignment(None, &["bachelors"]), 0.4);
        assert_eq!(education_alignment(Some(""), &["bachelors"]), 0.4);
        assert_eq!(
            education_alignment(Some("bachelors"), &["bachelors", "masters"]),
            1.0
        );
        assert_eq!(education_alignment(Some("bootcamp"), &["masters"]), 0.6);
    }

    #[test]
    fn test_experience_alignment() {
        // "11" maps to 12 years, clearing a 6-year minimum
        assert_eq!(experience_alignment(Some("11"), 6), 1.0);
        assert_eq!(experience_alignment(Some("0"), 0), 1.0);
        // "0" maps to 0 years: 3-year gap loses 0.3
        assert!((experience_alignment(Some("0"), 3) - 0.7).abs() < f64::EPSILON);
        // unrecognized codes fall back to 2 years
        assert!((experience_alignment(Some("weird"), 3) - 0.9).abs() < f64::EPSILON);
        assert!((experience_alignment(None, 3) - 0.9).abs() < f64::EPSILON);
        // deep shortfalls bottom out at 0.3
        assert_eq!(experience_alignment(Some("0"), 8), 0.3);
    }

    #[test]
    fn test_role_alignment() {
        assert_eq!(role_alignment(None, "Data Analyst"), 0.0);
        assert_eq!(role_alignment(Some(""), "Data Analyst"), 0.0);
        assert_eq!(role_alignment(Some("Senior Data Analyst"), "Data Analyst"), ROLE_BONUS);
        // a single title word is enough
        assert_eq!(role_alignment(Some("data scientist"), "Data Analyst"), ROLE_BONUS);
        assert_eq!(role_alignment(Some("Pastry Chef"), "Data Analyst"), 0.0);
    }

    #[test]
    fn test_wire_shape_uses_frontend_keys() {
        let value =
            serde_json::to_value(score_career(&empty_profile(), career("data-analyst"))).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "id",
            "title",
            "description",
            "requiredSkills",
            "interests",
            "educationLevel",
            "averageSalary",
            "growthRate",
            "matchScore",
            "matchedSkills",
            "matchedInterests",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(value["id"], "data-analyst");
    }
}

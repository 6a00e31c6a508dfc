use super::Recommender;
use crate::errors::{Error, Result};
use crate::records::{Case, Engineer, MatchingField, MatchingResult, MatchingStatus};
use crate::view::sort::{sort_items, SortState};
use chrono::{Local, NaiveDate};
use std::collections::HashSet;

pub const DEFAULT_MIN_RATE: u32 = 50;
pub const DEFAULT_MAX_PER_CASE: usize = 10;

/// Outcome of comparing a case's required skills with an engineer's skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillOverlap {
    pub rate: u32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Score `held` against `required`, comparing skills case-insensitively.
///
/// The rate is the rounded percentage of required skills held. Repeated
/// required skills count once; no required skills scores 0.
pub fn skill_overlap(required: &[String], held: &[String]) -> SkillOverlap {
    let held: HashSet<String> = held.iter().map(|s| s.trim().to_lowercase()).collect();
    let mut seen = HashSet::new();
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in required {
        let key = skill.trim().to_lowercase();
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        if held.contains(&key) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    let total = matched.len() + missing.len();
    let rate = if total == 0 {
        0
    } else {
        (100.0 * matched.len() as f64 / total as f64).round() as u32
    };

    SkillOverlap {
        rate,
        matched,
        missing,
    }
}

/// Deterministic recommender ranking engineers by required-skill coverage.
#[derive(Debug, Clone)]
pub struct SkillOverlapRecommender {
    min_rate: u32,
    max_per_case: usize,
    created_on: NaiveDate,
}

impl Default for SkillOverlapRecommender {
    fn default() -> Self {
        Self {
            min_rate: DEFAULT_MIN_RATE,
            max_per_case: DEFAULT_MAX_PER_CASE,
            created_on: Local::now().date_naive(),
        }
    }
}

impl SkillOverlapRecommender {
    pub fn new(min_rate: u32, max_per_case: usize) -> Result<Self> {
        if min_rate > 100 {
            return Err(Error::invalid_argument(format!(
                "minimum rate must be between 0 and 100, got {}",
                min_rate
            )));
        }
        if max_per_case == 0 {
            return Err(Error::invalid_argument(
                "max results per case must be at least 1",
            ));
        }
        Ok(Self {
            min_rate,
            max_per_case,
            ..Self::default()
        })
    }

    /// Stamp produced results with `date` instead of today.
    pub fn with_created_on(mut self, date: NaiveDate) -> Self {
        self.created_on = date;
        self
    }

    pub fn min_rate(&self) -> u32 {
        self.min_rate
    }

    pub fn max_per_case(&self) -> usize {
        self.max_per_case
    }

    fn result_for(&self, case: &Case, engineer: &Engineer, overlap: SkillOverlap) -> MatchingResult {
        MatchingResult {
            id: format!("{}:{}", case.id, engineer.id),
            tenant_id: case.tenant_id.clone(),
            case_id: case.id.clone(),
            case_title: case.title.clone(),
            engineer_id: engineer.id.clone(),
            engineer_name: engineer.name.clone(),
            matching_rate: format!("{}%", overlap.rate),
            matched_skills: overlap.matched,
            missing_skills: overlap.missing,
            status: MatchingStatus::Unreviewed,
            created_at: self.created_on,
            is_active: true,
        }
    }
}

impl Recommender for SkillOverlapRecommender {
    fn recommend(&self, case: &Case, candidates: &[Engineer]) -> Result<Vec<MatchingResult>> {
        let scored: Vec<MatchingResult> = candidates
            .iter()
            .filter(|engineer| engineer.is_active)
            .filter_map(|engineer| {
                let overlap = skill_overlap(&case.skills, &engineer.skills);
                (overlap.rate >= self.min_rate).then(|| self.result_for(case, engineer, overlap))
            })
            .collect();

        let ranked = sort_items(
            scored.iter().collect(),
            &SortState::new(MatchingField::MatchingRate),
        );
        Ok(ranked
            .into_iter()
            .take(self.max_per_case)
            .cloned()
            .collect())
    }
}

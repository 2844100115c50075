//! Scoring-based component matching.
//!
//! Scores every dataset record against a keyword bag built from the query
//! and optional hints, keeps the best record per section type, and drops
//! types with no signal. Deterministic: ties go to dataset order.

use std::collections::HashMap;

use crate::dataset::DatasetRecord;
use crate::types::SectionType;

/// Inputs to a matching pass.
#[derive(Debug, Clone, Default)]
pub struct MatchQuery {
    pub query: String,
    pub industry: Option<String>,
    pub tone: Option<String>,
    pub audience: Option<String>,
}

impl MatchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            ..Default::default()
        }
    }

    pub fn with_industry(mut self, industry: &str) -> Self {
        self.industry = Some(industry.to_string());
        self
    }

    pub fn with_tone(mut self, tone: &str) -> Self {
        self.tone = Some(tone.to_string());
        self
    }

    pub fn with_audience(mut self, audience: &str) -> Self {
        self.audience = Some(audience.to_string());
        self
    }

    /// Lowercased query tokens plus each hint as a single whole token.
    pub fn keyword_bag(&self) -> Vec<String> {
        let mut bag: Vec<String> = self
            .query
            .to_lowercase()
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .filter(|w| w.len() > 2)
            .collect();

        for hint in [&self.industry, &self.tone, &self.audience]
            .into_iter()
            .flatten()
        {
            let hint = hint.trim().to_lowercase();
            if !hint.is_empty() {
                bag.push(hint);
            }
        }
        bag
    }
}

/// Score one record against a keyword bag.
///
/// One point per bag keyword that is a substring of any record keyword.
fn score(record: &DatasetRecord, bag: &[String]) -> usize {
    bag.iter()
        .filter(|keyword| record.keywords.iter().any(|rk| rk.contains(keyword.as_str())))
        .count()
}

/// Select the best-scoring record per section type.
///
/// Records with score 0 are never selected; a strictly higher score is
/// required to displace an earlier record, which keeps ties stable by
/// dataset order. Output is in canonical section order (header, hero,
/// features, testimonials, cta, footer) with other types in scan order
/// before the footer.
pub fn match_components<'a>(
    dataset: &'a [DatasetRecord],
    query: &MatchQuery,
) -> Vec<&'a DatasetRecord> {
    let bag = query.keyword_bag();

    let mut best: HashMap<SectionType, (usize, usize)> = HashMap::new();
    for (index, record) in dataset.iter().enumerate() {
        let record_score = score(record, &bag);
        if record_score == 0 {
            continue;
        }
        match best.get(&record.section_type) {
            Some((top, _)) if *top >= record_score => {}
            _ => {
                best.insert(record.section_type, (record_score, index));
            }
        }
    }

    let mut selected: Vec<&DatasetRecord> = {
        let mut indices: Vec<usize> = best.values().map(|(_, index)| *index).collect();
        indices.sort_unstable();
        indices.into_iter().map(|i| &dataset[i]).collect()
    };

    selected.sort_by_key(|record| record.section_type.canonical_rank());
    selected
}

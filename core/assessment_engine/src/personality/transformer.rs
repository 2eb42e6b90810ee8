use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, info, warn};

use shared_types::{
    ConfidenceInterval, DomainScore, MultiLayerScore, NormDistribution, PersonalityAnswer,
    PersonalityDomain, Question, TendencyLevel,
};

use crate::normal::{round2, z_to_percentile};
use crate::norms::{default_norm_table, default_personality_norm, is_usable_norm, NormTable};
use crate::personality::descriptions::tendency_description;

pub const T_SCORE_MIN: u8 = 20;
pub const T_SCORE_MAX: u8 = 80;
const CONFIDENCE_LEVEL: f64 = 0.95;
const Z_95: f64 = 1.96;

/// Mean and item count of one domain before standardisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainRawScore {
    pub raw_score: f64,
    pub item_count: usize,
}

/// Mean keyed value of the answers that resolve to a known question.
///
/// Reverse-keyed items are reflected (`6 - v`). Unknown question ids are
/// skipped and do not count toward the denominator; a second answer to the
/// same question is ignored. Returns 0.0 when nothing resolves.
pub fn raw_score(answers: &[PersonalityAnswer], questions: &[Question]) -> f64 {
    let lookup: HashMap<&str, &Question> = questions.iter().map(|q| (q.id.as_str(), q)).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut sum = 0u32;
    let mut count = 0usize;

    for answer in answers {
        let Some(question) = lookup.get(answer.question_id.as_str()) else {
            continue;
        };
        if !seen.insert(answer.question_id.as_str()) {
            continue;
        }
        sum += answer.value.keyed(question.keyed).get() as u32;
        count += 1;
    }

    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Raw score per domain present in `questions`, including domains with no
/// answered items (`item_count == 0`).
pub fn domain_raw_scores(
    answers: &[PersonalityAnswer],
    questions: &[Question],
) -> BTreeMap<PersonalityDomain, DomainRawScore> {
    let mut by_domain: BTreeMap<PersonalityDomain, Vec<Question>> = BTreeMap::new();
    for question in questions {
        by_domain.entry(question.domain).or_default().push(question.clone());
    }

    let domain_of: HashMap<&str, PersonalityDomain> =
        questions.iter().map(|q| (q.id.as_str(), q.domain)).collect();

    let unresolved = answers
        .iter()
        .filter(|a| !domain_of.contains_key(a.question_id.as_str()))
        .count();
    if unresolved > 0 {
        warn!(unresolved, "answers reference unknown question ids; skipping them");
    }

    by_domain
        .into_iter()
        .map(|(domain, domain_questions)| {
            let mut seen: HashSet<&str> = HashSet::new();
            let mut domain_answers: Vec<PersonalityAnswer> = Vec::new();
            for answer in answers {
                let id = answer.question_id.as_str();
                if domain_of.get(id) == Some(&domain) && seen.insert(id) {
                    domain_answers.push(answer.clone());
                }
            }

            let score = DomainRawScore {
                raw_score: raw_score(&domain_answers, &domain_questions),
                item_count: domain_answers.len(),
            };
            (domain, score)
        })
        .collect()
}

/// `clamp(round(50 + 10z), 20, 80)`.
pub fn t_score(z: f64) -> u8 {
    (50.0 + 10.0 * z)
        .round()
        .clamp(T_SCORE_MIN as f64, T_SCORE_MAX as f64) as u8
}

/// Lower bounds are inclusive: 35, 45, 55 and 65 belong to the higher band.
pub fn tendency_level(t_score: u8) -> TendencyLevel {
    match t_score {
        65.. => TendencyLevel::VeryCharacteristic,
        55..=64 => TendencyLevel::Characteristic,
        45..=54 => TendencyLevel::Moderate,
        35..=44 => TendencyLevel::LessCharacteristic,
        _ => TendencyLevel::NotCharacteristic,
    }
}

/// Norm-aware half of the pipeline. Construct once per norm table; every
/// method is a pure function of its arguments and the table.
#[derive(Debug, Clone)]
pub struct ScoreTransformer {
    norms: NormTable,
}

impl Default for ScoreTransformer {
    fn default() -> Self {
        Self::new(default_norm_table())
    }
}

impl ScoreTransformer {
    /// Domains missing from `norms` fall back to the built-in constants.
    pub fn new(norms: NormTable) -> Self {
        let mut table = default_norm_table();
        table.extend(norms);
        Self { norms: table }
    }

    pub fn norms(&self) -> &NormTable {
        &self.norms
    }

    pub fn norm(&self, domain: PersonalityDomain) -> NormDistribution {
        self.norms
            .get(&domain)
            .copied()
            .unwrap_or_else(|| default_personality_norm(domain))
    }

    /// `(raw - mean) / sd`; a norm that fails [`is_usable_norm`] yields 0.
    pub fn z_score(&self, raw: f64, domain: PersonalityDomain) -> f64 {
        let norm = self.norm(domain);
        if !is_usable_norm(&norm) {
            warn!(%domain, mean = norm.mean, sd = norm.sd, n = norm.n, "degenerate norm, reporting z = 0");
            return 0.0;
        }
        (raw - norm.mean) / norm.sd
    }

    pub fn percentile(&self, z: f64) -> u8 {
        z_to_percentile(z)
    }

    /// Every layer for one domain's raw mean.
    ///
    /// The 95% band is `1.96 * sd / sqrt(n)` of the norm sample, centred on
    /// the individual's raw score.
    pub fn transform_score(&self, raw: f64, domain: PersonalityDomain) -> MultiLayerScore {
        let z = self.z_score(raw, domain);
        let t = t_score(z);
        let percentile = z_to_percentile(z);
        let level = tendency_level(t);

        let norm = self.norm(domain);
        let confidence_interval = is_usable_norm(&norm).then(|| {
            let margin = Z_95 * (norm.sd / (norm.n as f64).sqrt());
            ConfidenceInterval {
                lower: round2(raw - margin),
                upper: round2(raw + margin),
                confidence: CONFIDENCE_LEVEL,
            }
        });

        debug!(%domain, raw, z, t, percentile, level = %level, "domain transformed");

        MultiLayerScore {
            raw_score: round2(raw),
            z_score: round2(z),
            t_score: t,
            percentile,
            tendency_level: level,
            description: tendency_description(domain, level).to_string(),
            confidence_interval,
        }
    }

    /// One score per domain with at least one answered item, in domain order.
    pub fn transform_all_scores(
        &self,
        answers: &[PersonalityAnswer],
        questions: &[Question],
    ) -> Vec<DomainScore> {
        let scores: Vec<DomainScore> = domain_raw_scores(answers, questions)
            .into_iter()
            .filter(|(_, raw)| raw.item_count > 0)
            .map(|(domain, raw)| DomainScore {
                domain,
                score: self.transform_score(raw.raw_score, domain),
                item_count: raw.item_count,
            })
            .collect();

        platform::record_counter("assessment_personality_scored_total", 1);
        info!(
            answers = answers.len(),
            domains = scores.len(),
            "personality answers scored"
        );

        scores
    }
}

/// [`ScoreTransformer::transform_all_scores`] with the built-in norms.
pub fn transform_all_scores(answers: &[PersonalityAnswer], questions: &[Question]) -> Vec<DomainScore> {
    ScoreTransformer::default().transform_all_scores(answers, questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AnswerValue, DomainCategory, Keying};

    fn question(id: &str, domain: PersonalityDomain, keyed: Keying) -> Question {
        Question {
            id: id.to_string(),
            text: String::new(),
            domain,
            category: domain.category(),
            keyed,
            order: 0,
        }
    }

    fn answer(id: &str, value: u8) -> PersonalityAnswer {
        PersonalityAnswer::new(id, AnswerValue::new(value).unwrap())
    }

    #[test]
    fn raw_score_reverses_minus_items() {
        let questions = vec![
            question("EX-1", PersonalityDomain::Ex, Keying::Plus),
            question("EX-6", PersonalityDomain::Ex, Keying::Minus),
        ];
        let answers = vec![answer("EX-1", 5), answer("EX-6", 2)];
        assert_eq!(raw_score(&answers, &questions), 4.5);
    }

    #[test]
    fn raw_score_of_nothing_is_zero() {
        let questions = vec![question("EX-1", PersonalityDomain::Ex, Keying::Plus)];
        assert_eq!(raw_score(&[], &questions), 0.0);
    }

    #[test]
    fn unknown_and_duplicate_answers_are_skipped() {
        let questions = vec![question("CO-1", PersonalityDomain::Co, Keying::Plus)];
        let answers = vec![answer("CO-1", 4), answer("ZZ-9", 1), answer("CO-1", 1)];
        assert_eq!(raw_score(&answers, &questions), 4.0);

        let raw = domain_raw_scores(&answers, &questions);
        assert_eq!(raw[&PersonalityDomain::Co].item_count, 1);
    }

    #[test]
    fn extreme_answers_hit_scale_bounds() {
        let questions: Vec<Question> = (1..=4)
            .map(|i| question(&format!("OP-{i}"), PersonalityDomain::Op, Keying::Plus))
            .collect();
        let fives: Vec<_> = questions.iter().map(|q| answer(&q.id, 5)).collect();
        let ones: Vec<_> = questions.iter().map(|q| answer(&q.id, 1)).collect();
        assert_eq!(raw_score(&fives, &questions), 5.0);
        assert_eq!(raw_score(&ones, &questions), 1.0);
    }

    #[test]
    fn tendency_bands_partition_the_t_range() {
        assert_eq!(tendency_level(20), TendencyLevel::NotCharacteristic);
        assert_eq!(tendency_level(34), TendencyLevel::NotCharacteristic);
        assert_eq!(tendency_level(35), TendencyLevel::LessCharacteristic);
        assert_eq!(tendency_level(45), TendencyLevel::Moderate);
        assert_eq!(tendency_level(55), TendencyLevel::Characteristic);
        assert_eq!(tendency_level(64), TendencyLevel::Characteristic);
        assert_eq!(tendency_level(65), TendencyLevel::VeryCharacteristic);
        assert_eq!(tendency_level(80), TendencyLevel::VeryCharacteristic);

        let mut previous = TendencyLevel::NotCharacteristic;
        for t in T_SCORE_MIN..=T_SCORE_MAX {
            let level = tendency_level(t);
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn t_score_is_clamped() {
        assert_eq!(t_score(0.0), 50);
        assert_eq!(t_score(10.0), 80);
        assert_eq!(t_score(-10.0), 20);
        assert_eq!(t_score(0.44), 54);
    }

    #[test]
    fn norm_mean_maps_to_the_centre() {
        let transformer = ScoreTransformer::default();
        for domain in PersonalityDomain::ALL {
            let mean = transformer.norm(domain).mean;
            let score = transformer.transform_score(mean, domain);
            assert_eq!(score.z_score, 0.0);
            assert_eq!(score.t_score, 50);
            assert_eq!(score.percentile, 50);
            assert_eq!(score.tendency_level, TendencyLevel::Moderate);
        }
    }

    #[test]
    fn confidence_interval_uses_norm_standard_error() {
        let transformer = ScoreTransformer::default();
        let score = transformer.transform_score(3.2, PersonalityDomain::Ex);
        let ci = score.confidence_interval.expect("norm has a sample size");
        // 1.96 * 0.8 / sqrt(1000) = 0.0496
        assert_eq!(ci.lower, 3.15);
        assert_eq!(ci.upper, 3.25);
        assert_eq!(ci.confidence, 0.95);
    }

    #[test]
    fn zero_sd_norm_falls_back_to_zero_z() {
        let mut norms = NormTable::new();
        norms.insert(
            PersonalityDomain::Wr,
            NormDistribution {
                mean: 3.0,
                sd: 0.0,
                n: 10,
            },
        );
        let transformer = ScoreTransformer::new(norms);
        let score = transformer.transform_score(4.8, PersonalityDomain::Wr);
        assert_eq!(score.z_score, 0.0);
        assert_eq!(score.t_score, 50);
    }

    #[test]
    fn negative_sd_or_nan_mean_keeps_layers_consistent() {
        for norm in [
            NormDistribution { mean: 3.0, sd: -0.5, n: 100 },
            NormDistribution { mean: f64::NAN, sd: 0.5, n: 100 },
        ] {
            let mut norms = NormTable::new();
            norms.insert(PersonalityDomain::Ex, norm);
            let score = ScoreTransformer::new(norms).transform_score(4.0, PersonalityDomain::Ex);
            assert_eq!(score.z_score, 0.0);
            assert_eq!(score.t_score, 50);
            assert_eq!(score.percentile, 50);
            assert_eq!(score.tendency_level, TendencyLevel::Moderate);
            assert!(score.confidence_interval.is_none());
        }
    }

    #[test]
    fn overrides_merge_over_built_in_norms() {
        let mut norms = NormTable::new();
        norms.insert(PersonalityDomain::Ex, NormDistribution { mean: 2.5, sd: 0.4, n: 50 });
        let transformer = ScoreTransformer::new(norms);
        assert_eq!(transformer.norms().len(), PersonalityDomain::ALL.len());
        assert_eq!(transformer.norm(PersonalityDomain::Ex).mean, 2.5);
        assert_eq!(
            transformer.norm(PersonalityDomain::Ne),
            default_personality_norm(PersonalityDomain::Ne)
        );
    }

    #[test]
    fn domains_without_answers_are_omitted() {
        let questions = vec![
            question("EX-1", PersonalityDomain::Ex, Keying::Plus),
            question("LI-4", PersonalityDomain::Li, Keying::Plus),
        ];
        let scores = transform_all_scores(&[answer("EX-1", 4)], &questions);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].domain, PersonalityDomain::Ex);
        assert_eq!(scores[0].item_count, 1);
        assert_eq!(questions[1].category, DomainCategory::Validity);
    }
}

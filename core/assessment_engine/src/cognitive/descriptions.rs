//! Text for cognitive levels, domains and item families.
//!
//! The `*_description` functions return the longer wording used when
//! displaying a result; the `*_summary` functions return the short phrases
//! that go into the interpretation payload.

use shared_types::{CognitiveDomain, CognitiveLevel, ItemType};

use CognitiveLevel::*;

pub fn level_description(level: CognitiveLevel) -> &'static str {
    match level {
        SignificantlyAboveAverage => {
            "Cognitive functioning is at a very high level, with excellent information processing, working memory and inhibitory control."
        }
        AboveAverage => {
            "Cognitive functioning is above average; most cognitive tasks are handled efficiently."
        }
        Average => {
            "Cognitive functioning is at a typical level and comfortably meets everyday cognitive demands."
        }
        BelowAverage => {
            "Additional support can help in some cognitive areas. Activities that draw on stronger areas are recommended."
        }
        SignificantlyBelowAverage => {
            "Individual accommodation and support help with cognitive tasks. Consider an environment built around existing strengths."
        }
    }
}

pub fn level_summary(level: CognitiveLevel) -> &'static str {
    match level {
        SignificantlyAboveAverage => "Very strong logical reasoning and problem solving",
        AboveAverage => "Above-average logical reasoning and problem solving",
        Average => "Typical logical reasoning and problem solving",
        BelowAverage => "Support in specific areas may be effective",
        SignificantlyBelowAverage => "Individual support and a suitable environment are effective",
    }
}

pub fn domain_description(domain: CognitiveDomain, level: CognitiveLevel) -> &'static str {
    match (domain, level) {
        (CognitiveDomain::WorkingMemory, SignificantlyAboveAverage) => {
            "Holds and manipulates several pieces of information at once with ease and handles complex tasks efficiently."
        }
        (CognitiveDomain::WorkingMemory, AboveAverage) => {
            "Good at briefly holding and manipulating information; multitasking comes relatively easily."
        }
        (CognitiveDomain::WorkingMemory, Average) => {
            "Typical working memory capacity, sufficient for everyday tasks."
        }
        (CognitiveDomain::WorkingMemory, BelowAverage) => {
            "Notes and lists help when handling several pieces of information at once."
        }
        (CognitiveDomain::WorkingMemory, SignificantlyBelowAverage) => {
            "Processing information step by step and making active use of external memory aids is recommended."
        }
        (CognitiveDomain::Inhibition, SignificantlyAboveAverage) => {
            "Very good at suppressing unwanted responses and steering attention."
        }
        (CognitiveDomain::Inhibition, AboveAverage) => {
            "Resistant to interference; keeps focus while carrying out a task."
        }
        (CognitiveDomain::Inhibition, Average) => {
            "Typical inhibitory control; attention is managed appropriately in ordinary settings."
        }
        (CognitiveDomain::Inhibition, BelowAverage) => {
            "Performance tends to improve in a low-distraction environment."
        }
        (CognitiveDomain::Inhibition, SignificantlyBelowAverage) => {
            "Focusing on one task at a time in a quiet, structured environment is effective."
        }
        (CognitiveDomain::ProcessingSpeed, SignificantlyAboveAverage) => {
            "Processes information very quickly; a strength wherever fast judgement and reaction are needed."
        }
        (CognitiveDomain::ProcessingSpeed, AboveAverage) => {
            "Processes information faster than average and works through tasks efficiently."
        }
        (CognitiveDomain::ProcessingSpeed, Average) => {
            "Typical processing speed; tasks are completed at an ordinary pace."
        }
        (CognitiveDomain::ProcessingSpeed, BelowAverage) => {
            "Given enough time, processing is accurate."
        }
        (CognitiveDomain::ProcessingSpeed, SignificantlyBelowAverage) => {
            "Scheduling with generous time margins leads to high-quality results."
        }
    }
}

pub fn domain_summary(domain: CognitiveDomain, level: CognitiveLevel) -> &'static str {
    match (domain, level) {
        (CognitiveDomain::WorkingMemory, SignificantlyAboveAverage) => {
            "Very strong at holding and manipulating several pieces of information at once"
        }
        (CognitiveDomain::WorkingMemory, AboveAverage) => {
            "Good at briefly holding and manipulating information"
        }
        (CognitiveDomain::WorkingMemory, Average) => "Typical working memory capacity",
        (CognitiveDomain::WorkingMemory, BelowAverage) => {
            "Step-by-step processing of information is effective"
        }
        (CognitiveDomain::WorkingMemory, SignificantlyBelowAverage) => {
            "Use of external memory aids is recommended"
        }
        (CognitiveDomain::Inhibition, SignificantlyAboveAverage) => {
            "Excellent suppression of unwanted responses and attention control"
        }
        (CognitiveDomain::Inhibition, AboveAverage) => "Resistant to interference and keeps focus",
        (CognitiveDomain::Inhibition, Average) => "Typical inhibitory control",
        (CognitiveDomain::Inhibition, BelowAverage) => "A low-distraction environment is effective",
        (CognitiveDomain::Inhibition, SignificantlyBelowAverage) => {
            "Working in a structured environment is recommended"
        }
        (CognitiveDomain::ProcessingSpeed, SignificantlyAboveAverage) => {
            "Very fast information processing"
        }
        (CognitiveDomain::ProcessingSpeed, AboveAverage) => {
            "Processes information faster than average"
        }
        (CognitiveDomain::ProcessingSpeed, Average) => "Typical processing speed",
        (CognitiveDomain::ProcessingSpeed, BelowAverage) => {
            "Accurate processing when given enough time"
        }
        (CognitiveDomain::ProcessingSpeed, SignificantlyBelowAverage) => {
            "Scheduling with time to spare is effective"
        }
    }
}

pub fn item_type_name(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::MatrixReasoning => "Matrix reasoning",
        ItemType::LetterNumberSeries => "Letter-number series",
        ItemType::VerbalReasoning => "Verbal reasoning",
        ItemType::Rotation3d => "3D rotation",
    }
}

pub fn item_type_description(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::MatrixReasoning => "Find the pattern and infer the missing element",
        ItemType::LetterNumberSeries => "Find the rule and predict the next element",
        ItemType::VerbalReasoning => "Derive the correct conclusion from logical statements",
        ItemType::Rotation3d => "Mentally rotate solids to find the same shape",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const DOMAINS: [CognitiveDomain; 3] = [
        CognitiveDomain::WorkingMemory,
        CognitiveDomain::Inhibition,
        CognitiveDomain::ProcessingSpeed,
    ];

    #[test]
    fn every_domain_level_pair_is_distinct() {
        let mut long = HashSet::new();
        let mut short = HashSet::new();
        for domain in DOMAINS {
            for level in CognitiveLevel::ALL {
                assert!(long.insert(domain_description(domain, level)));
                assert!(short.insert(domain_summary(domain, level)));
            }
        }
        assert_eq!(long.len(), 15);
    }

    #[test]
    fn summaries_are_shorter_than_descriptions() {
        for level in CognitiveLevel::ALL {
            assert!(level_summary(level).len() < level_description(level).len());
        }
    }
}

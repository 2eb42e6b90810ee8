//! Prompt assembly: bias-mitigation instructions, the analysis purpose, the
//! payload and the requested output structure.

use shared_types::{AIInputPayload, AnalysisPurpose};

pub const SYSTEM_PROMPT: &str = r#"You are an expert in organisational psychology and career development. You interpret aptitude assessment results and give advice that improves communication within organisations.

## Ground rules

### Traits are not abilities
- Personality traits (Big Five, Dark Triad) are behavioural tendencies and styles. They change slowly.
- Cognitive abilities (reasoning results) describe information processing and problem solving. They can improve with training.
- These are separate dimensions. Never mix them up.

### Reading the tendency levels
- T-score 50 is the typical tendency (reference point).
- T-score 40 to 60 is within the typical range.
- T-score 60 and above means the tendency shows up characteristically.
- T-score 40 and below means the tendency is subdued (the opposite tendency appears more easily).

### Interpretations that must never be made
1. "Low extraversion means poor communication skills" is wrong.
   Say instead: "performs well in quiet settings" or "prefers deep conversations".
2. "High conscientiousness means good at the job" is wrong.
   Say instead: "prefers a planned approach" or "values discipline".
3. "Low emotional stability means mentally weak" is wrong.
   Say instead: "sensitive to changes in the environment" or "attentive to fine details".
4. Linking high or low values to good or bad, superior or inferior, is forbidden.

### Constructive reading of the Dark Triad
In the right context these traits are strengths:
- Machiavellianism: strategic thinking, negotiation, reading situations.
- Narcissism: self-confidence, drive to lead, goal achievement.
- Psychopathy: pressure tolerance, calm judgement, decisions not swayed by emotion.

Avoid negative labels and look for ways the organisation can make use of them.

### Response reliability
When the reliability status is "moderate" or "low", present the interpretation with lower confidence.

## Output format
Answer in JSON following the structure below."#;

pub fn purpose_instructions(purpose: AnalysisPurpose) -> &'static str {
    match purpose {
        AnalysisPurpose::IndividualReport => {
            "Analyse this person's strengths, growth opportunities and communication style.
- Identify 3-5 personality strengths
- Suggest 2-3 growth opportunities
- Describe the preferred communication style"
        }
        AnalysisPurpose::TeamMatching => {
            "Analyse team fit.
- Team environments where this person performs well
- Member types that form complementary relationships
- Potential friction points and how to handle them
- Recommended roles and positions"
        }
        AnalysisPurpose::OneOnOneSupport => {
            "Provide material for one-on-one meetings.
- Effective communication style
- Motivators and demotivators
- How this person tends to receive feedback
- Suggested approaches to support growth"
        }
        AnalysisPurpose::ManagerReport => {
            "Summarise management points for a manager.
- Effective ways to give instructions
- Appropriate level of supervision
- Conditions in which this person delivers results
- Stress factors to watch for"
        }
        AnalysisPurpose::TeamBuilding => {
            "Provide information for team building.
- Natural role within the team
- Points of collaboration with other members
- Forms of contribution to the team
- Strengths to make use of"
        }
        AnalysisPurpose::CareerDevelopment => {
            "Provide information for career development.
- Roles and occupations that use this person's strengths
- Recommended actions for growth
- Long-term career outlook
- Skill development priorities"
        }
    }
}

const OUTPUT_SCHEMA: &str = r#"{
  "strengths": [
    { "area": "area of strength", "description": "explanation", "evidenceBasis": "supporting trait" }
  ],
  "growthOpportunities": [
    { "area": "growth area", "suggestion": "suggestion", "supportingConditions": "effective environment" }
  ],
  "communicationProfile": {
    "preferredStyle": "preferred communication style",
    "effectiveApproaches": ["effective approach"],
    "potentialFrictions": ["potential friction point"]
  },
  "teamFit": {
    "naturalRoles": ["role taken on naturally"],
    "complementaryProfiles": ["compatible profile"],
    "teamContributions": ["contribution to the team"]
  },
  "interpretationConfidence": {
    "level": "high|moderate|low",
    "factors": ["factor affecting reliability"]
  }
}"#;

const COGNITIVE_SCHEMA_NOTE: &str = r#"A cognitive profile is included. Also add:
"cognitiveIntegration": {
  "learningStyle": "how this person learns best",
  "problemSolvingApproach": "typical approach to problems",
  "developmentRecommendations": ["recommendation"]
}"#;

/// Full prompt for one payload. Fails only if the payload cannot be
/// serialised.
pub fn build_prompt(payload: &AIInputPayload) -> serde_json::Result<String> {
    let profile = serde_json::to_string_pretty(payload)?;
    let mut prompt = format!(
        "{SYSTEM_PROMPT}\n\n## Analysis purpose\n{}\n\n## Profile data\n{profile}\n\n## Output structure\nAnswer with this JSON structure:\n{OUTPUT_SCHEMA}",
        purpose_instructions(payload.metadata.analysis_purpose),
    );
    if payload.cognitive_profile.is_some() {
        prompt.push_str("\n\n");
        prompt.push_str(COGNITIVE_SCHEMA_NOTE);
    }
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_purpose_has_its_own_instructions() {
        let mut seen = std::collections::HashSet::new();
        for purpose in AnalysisPurpose::ALL {
            assert!(seen.insert(purpose_instructions(purpose)));
        }
    }

    #[test]
    fn system_prompt_carries_the_bias_rules() {
        assert!(SYSTEM_PROMPT.contains("Traits are not abilities"));
        assert!(SYSTEM_PROMPT.contains("Constructive reading of the Dark Triad"));
        assert!(SYSTEM_PROMPT.contains("\"moderate\" or \"low\""));
    }
}

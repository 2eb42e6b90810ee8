use shared_types::{PersonalityDomain, TendencyLevel};

/// Plain-language reading of one domain at one tendency level.
pub fn tendency_description(domain: PersonalityDomain, level: TendencyLevel) -> &'static str {
    use PersonalityDomain::*;
    use TendencyLevel::*;

    match (domain, level) {
        (Ex, VeryCharacteristic) => "Draws a great deal of energy from social situations",
        (Ex, Characteristic) => "Tends to enjoy interacting with people",
        (Ex, Moderate) => "Shows sociability when the situation calls for it",
        (Ex, LessCharacteristic) => "Tends to value time alone as well",
        (Ex, NotCharacteristic) => "Tends to recharge best in quiet surroundings",

        (Co, VeryCharacteristic) => "Places very strong emphasis on planning and discipline",
        (Co, Characteristic) => "Tends to move things forward steadily",
        (Co, Moderate) => "Adapts flexibly to the situation",
        (Co, LessCharacteristic) => "Tends to value flexibility",
        (Co, NotCharacteristic) => "Tends to prefer spontaneous, improvised approaches",

        (Ag, VeryCharacteristic) => "Places very strong emphasis on harmony with others",
        (Ag, Characteristic) => "Tends to care about the atmosphere of the team",
        (Ag, Moderate) => "Balances cooperation and assertion depending on the situation",
        (Ag, LessCharacteristic) => "Tends to state opinions frankly",
        (Ag, NotCharacteristic) => "Tends to value independent judgement",

        (Ne, VeryCharacteristic) => "Emotionally very steady and resilient under stress",
        (Ne, Characteristic) => "Tends to keep emotions under control",
        (Ne, Moderate) => "Shows the usual ups and downs of mood",
        (Ne, LessCharacteristic) => "Tends to respond sensitively to changes in the environment",
        (Ne, NotCharacteristic) => "Tends to notice subtle shifts in feeling",

        (Op, VeryCharacteristic) => "Actively seeks out new ideas and experiences",
        (Op, Characteristic) => "Tends to enjoy change and innovation",
        (Op, Moderate) => "Balances novelty and stability",
        (Op, LessCharacteristic) => "Tends to prefer proven methods",
        (Op, NotCharacteristic) => "Tends to value established practices",

        (Ma, VeryCharacteristic) => "Very strong strategic thinking and negotiation skills",
        (Ma, Characteristic) => "Able to adapt flexibly to reach a goal",
        (Ma, Moderate) => "Chooses interpersonal tactics to suit the situation",
        (Ma, LessCharacteristic) => "Prefers frank and direct communication",
        (Ma, NotCharacteristic) => "Tends to put sincerity and transparency first",

        (Na, VeryCharacteristic) => "High self-regard and a strong drive to lead",
        (Na, Characteristic) => "Tends to act with confidence",
        (Na, Moderate) => "Holds a balanced view of own abilities",
        (Na, LessCharacteristic) => "Tends to value modesty",
        (Na, NotCharacteristic) => "Tends to stay in the background and let others shine",

        (Ps, VeryCharacteristic) => "Very strongly inclined to judge calmly without being swayed by emotion",
        (Ps, Characteristic) => "Tends to stay composed under pressure",
        (Ps, Moderate) => "Balances emotion and reason depending on the situation",
        (Ps, LessCharacteristic) => "Tends to stay close to how others feel",
        (Ps, NotCharacteristic) => "Highly empathetic and sensitive to the feelings of others",

        (Em, VeryCharacteristic) => "Very strongly inclined to understand and share the feelings of others",
        (Em, Characteristic) => "Tends to sense how others are feeling",
        (Em, Moderate) => "Shows empathy when the situation calls for it",
        (Em, LessCharacteristic) => "Tends to value an objective point of view",
        (Em, NotCharacteristic) => "Tends to prefer logical, analytical approaches",

        (Wr, VeryCharacteristic) => "Very high sense of responsibility and preparation at work",
        (Wr, Characteristic) => "Tends to work in a planned way",
        (Wr, Moderate) => "Approaches work in a typical way",
        (Wr, LessCharacteristic) => "Tends to prefer a flexible working style",
        (Wr, NotCharacteristic) => "Tends to prefer a high degree of freedom at work",

        (Li, VeryCharacteristic) => "Responses are highly consistent",
        (Li, Characteristic) => "Responses show reasonable consistency",
        (Li, Moderate) => "Responses follow a typical pattern",
        (Li, LessCharacteristic) => "Responses show some contradictions",
        (Li, NotCharacteristic) => "Response reliability needs attention",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_combination_has_text() {
        for domain in PersonalityDomain::ALL {
            for level in TendencyLevel::ALL {
                assert!(!tendency_description(domain, level).is_empty());
            }
        }
    }
}

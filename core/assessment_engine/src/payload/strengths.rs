use shared_types::{PersonalityDomain, TendencyLevel};

use PersonalityDomain::*;
use TendencyLevel::*;

/// Context-dependent strengths associated with a trait at a given level.
pub fn trait_strengths(domain: PersonalityDomain, level: TendencyLevel) -> &'static [&'static str] {
    match (domain, level) {
        (Ex, VeryCharacteristic) => &["Energising the team", "Smooth communication even with strangers", "Presentation skills"],
        (Ex, Characteristic) => &["Active contribution", "Networking", "Contributing to the team"],
        (Ex, Moderate) => &["Flexibility to suit the situation", "Balanced relationships"],
        (Ex, LessCharacteristic) => &["Listening", "Deep thinking", "Calm judgement"],
        (Ex, NotCharacteristic) => &["Focus", "Independent work", "Careful decision-making"],

        (Co, VeryCharacteristic) => &["Planning", "Meeting deadlines", "Quality control"],
        (Co, Characteristic) => &["Steady execution", "Sense of responsibility", "Orderliness"],
        (Co, Moderate) => &["Balance of flexibility and planning", "Adaptability"],
        (Co, LessCharacteristic) => &["Responding on the fly", "Creative solutions"],
        (Co, NotCharacteristic) => &["Improvisation", "Flexible approaches", "Adapting to change"],

        (Ag, VeryCharacteristic) => &["Teamwork", "Mediating relationships", "Empathy"],
        (Ag, Characteristic) => &["Cooperative attitude", "Consideration for others", "Maintaining harmony"],
        (Ag, Moderate) => &["Balanced assertiveness", "Reading the situation"],
        (Ag, LessCharacteristic) => &["Candid feedback", "Self-assertion", "Independent judgement"],
        (Ag, NotCharacteristic) => &["Critical thinking", "Objective evaluation", "Hard decisions"],

        (Ne, VeryCharacteristic) => &["Stress tolerance", "Calm judgement", "Stable performance"],
        (Ne, Characteristic) => &["Emotional control", "Composed responses"],
        (Ne, Moderate) => &["Measured emotional expression", "Balanced reactions"],
        (Ne, LessCharacteristic) => &["Sensitivity", "Attention to detail in caring for others", "Awareness of the environment"],
        (Ne, NotCharacteristic) => &["Empathy", "Emotional understanding", "Delicate handling"],

        (Op, VeryCharacteristic) => &["Innovation", "New business development", "Creative problem solving"],
        (Op, Characteristic) => &["Receptiveness to new ideas", "Eagerness to learn"],
        (Op, Moderate) => &["Balanced approach", "Judgement suited to the situation"],
        (Op, LessCharacteristic) => &["Focus on proven results", "Stable operations", "Reliability"],
        (Op, NotCharacteristic) => &["Deepening expertise", "Applying established methods", "Preference for stability"],

        (Ma, VeryCharacteristic) => &["Strategic thinking", "Negotiation", "Exercising influence"],
        (Ma, Characteristic) => &["Situation analysis", "Flexible responses", "Getting things done"],
        (Ma, Moderate) => &["Balanced relationships"],
        (Ma, LessCharacteristic) => &["Frankness", "Transparency", "Sincere communication"],
        (Ma, NotCharacteristic) => &["Honesty", "Building trust", "Openness"],

        (Na, VeryCharacteristic) => &["Leadership", "Self-confidence", "Drive to achieve goals"],
        (Na, Characteristic) => &["Self-assertion", "Competitiveness", "Results orientation"],
        (Na, Moderate) => &["Realistic self-assessment", "Balanced stance"],
        (Na, LessCharacteristic) => &["Humility", "Team play", "Respect for others"],
        (Na, NotCharacteristic) => &["Modest stance", "Supporting role", "Cooperativeness"],

        (Ps, VeryCharacteristic) => &["Calm judgement", "Pressure tolerance", "Decisions not swayed by emotion"],
        (Ps, Characteristic) => &["Objective analysis", "Logical thinking"],
        (Ps, Moderate) => &["Balanced judgement"],
        (Ps, LessCharacteristic) => &["Empathy", "Emotional support", "Building relationships"],
        (Ps, NotCharacteristic) => &["Deep empathy", "Emotional connection", "Compassion"],

        (Em, VeryCharacteristic) => &["Empathy", "Emotional support", "Caring for the team"],
        (Em, Characteristic) => &["Understanding others", "Listening", "Building relationships"],
        (Em, Moderate) => &["Balanced relationships"],
        (Em, LessCharacteristic) => &["Objective judgement", "Decisions not swayed by emotion"],
        (Em, NotCharacteristic) => &["Logical analysis", "Objective evaluation", "Calm judgement"],

        (Wr, VeryCharacteristic) => &["Sense of responsibility", "Preparedness", "Planned execution"],
        (Wr, Characteristic) => &["Steady work", "Dependability"],
        (Wr, Moderate) => &["Standard approach to work"],
        (Wr, LessCharacteristic) => &["Flexible working style", "Adaptability"],
        (Wr, NotCharacteristic) => &["Free thinking", "Original approaches"],

        (Li, VeryCharacteristic) => &["Consistency", "Dependability"],
        (Li, Characteristic) => &["Stable answers"],
        (Li, Moderate) => &["Typical pattern"],
        (Li, LessCharacteristic) => &["Needs attention"],
        (Li, NotCharacteristic) => &["Needs careful interpretation"],
    }
}

/// One adjustment hint for the two extreme levels, none otherwise.
pub fn trait_considerations(domain: PersonalityDomain, level: TendencyLevel) -> Vec<String> {
    let strength = match level {
        VeryCharacteristic => "strong",
        NotCharacteristic => "subdued",
        _ => return Vec::new(),
    };
    vec![format!(
        "{} tendency is {}, so adjusting to the situation is effective",
        domain.display_name(),
        strength
    )]
}

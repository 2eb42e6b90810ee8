//! The 120-item personality questionnaire.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use shared_types::{DomainCategory, Keying, PersonalityDomain, Question};

use Keying::{Minus, Plus};
use PersonalityDomain::*;

type QuestionRow = (&'static str, PersonalityDomain, Keying, u32, &'static str);

#[rustfmt::skip]
const QUESTION_TABLE: [QuestionRow; 120] = [
    ("EX-1", Ex, Plus, 1, "A difficult challenge actually motivates me."),
    ("EX-2", Ex, Plus, 2, "I can talk easily even with people I have just met."),
    ("EX-3", Ex, Plus, 3, "I have no hesitation about stating my opinion in front of others."),
    ("EX-4", Ex, Plus, 4, "I feel more energised in a lively place than in a quiet one."),
    ("EX-5", Ex, Plus, 5, "I am good at getting the people around me involved in moving things forward."),
    ("EX-6", Ex, Minus, 6, "Talking with people I barely know makes me nervous."),
    ("EX-7", Ex, Plus, 7, "I am fairly good at expressing my ideas."),
    ("EX-8", Ex, Minus, 8, "I feel pressure when others pay attention to me."),
    ("EX-9", Ex, Plus, 9, "I often enjoy conversations within the team."),
    ("EX-10", Ex, Plus, 10, "I tend to speak up actively in meetings."),

    ("CO-1", Co, Plus, 11, "I am good at moving things forward according to a plan."),
    ("CO-2", Co, Plus, 12, "I pay particular attention to meeting deadlines."),
    ("CO-3", Co, Plus, 13, "I see tedious work through without giving up halfway."),
    ("CO-4", Co, Minus, 14, "Unplanned events leave me confused."),
    ("CO-5", Co, Minus, 15, "In my work I put speed ahead of care."),
    ("CO-6", Co, Plus, 16, "Once I set a goal, I follow it through to the end."),
    ("CO-7", Co, Plus, 17, "I make sure to keep even small promises."),
    ("CO-8", Co, Minus, 18, "I sometimes put off the things I need to do."),
    ("CO-9", Co, Plus, 19, "I feel at ease when things are tidy and organised."),
    ("CO-10", Co, Plus, 20, "I check the sequence of steps before starting a task."),
    ("CO-11", Co, Plus, 111, "Acting according to a plan puts me at ease."),
    ("CO-12", Co, Minus, 112, "I often act on a whim."),

    ("AG-1", Ag, Plus, 21, "I try to think from the other person's point of view."),
    ("AG-2", Ag, Minus, 22, "I sometimes make up my mind before hearing what others think."),
    ("AG-3", Ag, Plus, 23, "When someone fails, I would rather help than blame them."),
    ("AG-4", Ag, Plus, 24, "I sometimes hold back my opinion to avoid conflict."),
    ("AG-5", Ag, Plus, 25, "I cannot ignore someone who is in trouble."),
    ("AG-6", Ag, Plus, 26, "I can calmly accept opinions that differ from mine."),
    ("AG-7", Ag, Minus, 27, "I sometimes put getting my own way first."),
    ("AG-8", Ag, Plus, 28, "I sometimes tire myself out by reading the room too much."),
    ("AG-9", Ag, Plus, 29, "I make a point of improving the atmosphere in the team."),
    ("AG-10", Ag, Plus, 30, "I can be genuinely happy about other people's success."),
    ("AG-11", Ag, Plus, 117, "I prefer working together over being the centre of attention."),
    ("AG-12", Ag, Plus, 118, "I am better at supporting people than leading them."),

    ("NE-1", Ne, Plus, 31, "I can stay calm under pressure."),
    ("NE-2", Ne, Minus, 32, "I keep dwelling on being told off."),
    ("NE-3", Ne, Plus, 33, "I can move on quickly after making a mistake."),
    ("NE-4", Ne, Minus, 34, "When I feel anxious, it becomes hard to concentrate."),
    ("NE-5", Ne, Plus, 35, "I usually deal with people in a calm frame of mind."),
    ("NE-6", Ne, Minus, 36, "I think my emotions have large ups and downs."),
    ("NE-7", Ne, Plus, 37, "I can handle small troubles without getting flustered."),
    ("NE-8", Ne, Minus, 38, "I sometimes feel that my mood changes easily."),
    ("NE-9", Ne, Plus, 39, "I am good at calming myself down when I am nervous."),
    ("NE-10", Ne, Plus, 40, "I try to sort out my feelings before I speak."),
    ("NE-11", Ne, Plus, 115, "I tend to think positively even after a failure."),
    ("NE-12", Ne, Minus, 116, "When I fail, it stays with me for a long time."),

    ("OP-1", Op, Plus, 41, "I like trying new ways of thinking and doing things."),
    ("OP-2", Op, Minus, 42, "I hold on strongly to the way things have always been done."),
    ("OP-3", Op, Plus, 43, "Hearing opinions different from mine stimulates me."),
    ("OP-4", Op, Plus, 44, "I adapt quickly to new environments."),
    ("OP-5", Op, Plus, 45, "I tend to prefer work with a lot of change."),
    ("OP-6", Op, Minus, 46, "Changing a familiar method makes me uneasy."),
    ("OP-7", Op, Plus, 47, "I want to learn about a wide range of fields."),
    ("OP-8", Op, Plus, 48, "I sometimes listen to people from other industries to broaden my thinking."),
    ("OP-9", Op, Plus, 49, "Coming up with new ideas is fun."),
    ("OP-10", Op, Plus, 50, "I would rather take on new challenges than repeat the same thing."),
    ("OP-11", Op, Plus, 119, "I like learning new things."),
    ("OP-12", Op, Minus, 120, "I look for stability rather than change."),

    ("MA-1", Ma, Plus, 51, "I adjust how I act based on the other person's personality."),
    ("MA-2", Ma, Plus, 52, "Some manoeuvring is necessary to achieve my goals."),
    ("MA-3", Ma, Plus, 53, "I sometimes put results ahead of other people's feelings."),
    ("MA-4", Ma, Minus, 54, "Taking advantage of other people's weaknesses is wrong."),
    ("MA-5", Ma, Plus, 55, "I am good at persuading people."),
    ("MA-6", Ma, Minus, 56, "I find it hard to read what others are thinking."),
    ("MA-7", Ma, Plus, 57, "One should manoeuvre flexibly to reach a goal."),
    ("MA-8", Ma, Plus, 58, "Being too honest can put you at a disadvantage."),
    ("MA-9", Ma, Plus, 59, "I find it rewarding to get people moving."),
    ("MA-10", Ma, Plus, 60, "I try to anticipate what others think before I act."),

    ("NA-1", Na, Plus, 61, "Being recognised gives me great joy."),
    ("NA-2", Na, Plus, 62, "I often believe my opinion is the right one."),
    ("NA-3", Na, Plus, 63, "I like situations where I am the centre of attention."),
    ("NA-4", Na, Plus, 64, "Seeing people better than me spurs me on."),
    ("NA-5", Na, Plus, 65, "I am sometimes tempted to exaggerate my achievements."),
    ("NA-6", Na, Plus, 66, "I can lose motivation when others do not acknowledge me."),
    ("NA-7", Na, Plus, 67, "Things run more efficiently when I take the lead."),
    ("NA-8", Na, Minus, 68, "I do not care much about how others rate me."),
    ("NA-9", Na, Plus, 69, "Competition is where I perform best."),
    ("NA-10", Na, Plus, 70, "I am pleased when people rely on me."),

    ("PS-1", Ps, Plus, 71, "I find dealing with emotional people difficult."),
    ("PS-2", Ps, Plus, 72, "I am not much affected when someone is feeling down."),
    ("PS-3", Ps, Plus, 73, "I am fairly good at controlling my emotions."),
    ("PS-4", Ps, Minus, 74, "I am often swept along by other people's emotions."),
    ("PS-5", Ps, Plus, 75, "I can judge calmly even in difficult situations."),
    ("PS-6", Ps, Plus, 76, "I avoid showing strong emotions."),
    ("PS-7", Ps, Plus, 77, "Empathising too much with others wears me out."),
    ("PS-8", Ps, Plus, 78, "I think things through with logic rather than emotion."),
    ("PS-9", Ps, Plus, 79, "I can decide without being swayed by the reactions around me."),
    ("PS-10", Ps, Plus, 80, "Emotional reactions do not unsettle me."),

    ("EM-1", Em, Plus, 81, "I readily notice changes in people's expressions."),
    ("EM-2", Em, Plus, 82, "When someone is down, I sense how they feel and reach out."),
    ("EM-3", Em, Plus, 83, "When others are happy, I feel happy too."),
    ("EM-4", Em, Minus, 84, "I am easily influenced by the emotions around me."),
    ("EM-5", Em, Plus, 85, "I make an effort to hear people out to the end."),
    ("EM-6", Em, Minus, 86, "Emotional remarks sometimes leave me at a loss."),
    ("EM-7", Em, Plus, 87, "I consciously try to understand other people's positions."),
    ("EM-8", Em, Plus, 88, "I sometimes notice small changes in people."),
    ("EM-9", Em, Plus, 89, "I find joy in doing things for others."),
    ("EM-10", Em, Plus, 90, "I try to speak kindly."),
    ("EM-11", Em, Plus, 113, "I am good at reading other people's emotions."),
    ("EM-12", Em, Minus, 114, "I rarely notice changes in other people's emotions."),

    ("WR-1", Wr, Plus, 91, "I prepare thoroughly for my work."),
    ("WR-2", Wr, Plus, 92, "I plan backwards from the deadline to meet it."),
    ("WR-3", Wr, Plus, 93, "I think I have a strong sense of responsibility."),
    ("WR-4", Wr, Plus, 94, "I move work forward while consulting my manager and colleagues."),
    ("WR-5", Wr, Plus, 95, "I keep working persistently to the end even in difficult situations."),
    ("WR-6", Wr, Minus, 96, "I find it hard to set priorities when I am busy."),
    ("WR-7", Wr, Plus, 97, "Having a goal brings out my best."),
    ("WR-8", Wr, Minus, 98, "I find it hard to turn down work that others ask of me."),
    ("WR-9", Wr, Plus, 99, "I act with a clear understanding of my role."),
    ("WR-10", Wr, Plus, 100, "I feel positive when taking on a new task."),

    ("LI-1", Li, Minus, 101, "I have never told a lie."),
    ("LI-2", Li, Minus, 102, "I think I am someone who has never failed."),
    ("LI-3", Li, Minus, 103, "I have never been angry, no matter what."),
    ("LI-4", Li, Plus, 104, "I always want to be sincere."),
    ("LI-5", Li, Plus, 105, "I try to be honest even about small things."),
    ("LI-6", Li, Plus, 106, "I set aside time to reflect on my actions."),
    ("LI-7", Li, Plus, 107, "I think what I say and what I do are consistent."),
    ("LI-8", Li, Plus, 108, "When asked the same question twice, I make sure my answer does not change."),
    ("LI-9", Li, Plus, 109, "I never force myself to look better than I am."),
    ("LI-10", Li, Plus, 110, "I value being honest."),
];

static QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    QUESTION_TABLE
        .iter()
        .map(|&(id, domain, keyed, order, text)| Question {
            id: id.to_string(),
            text: text.to_string(),
            domain,
            category: domain.category(),
            keyed,
            order,
        })
        .collect()
});

/// All questions, grouped by domain.
pub fn all_questions() -> &'static [Question] {
    &QUESTIONS
}

/// All questions sorted by their display order.
pub fn questions_in_display_order() -> Vec<&'static Question> {
    let mut ordered: Vec<&Question> = QUESTIONS.iter().collect();
    ordered.sort_by_key(|q| q.order);
    ordered
}

pub fn questions_by_domain(domain: PersonalityDomain) -> Vec<&'static Question> {
    QUESTIONS.iter().filter(|q| q.domain == domain).collect()
}

pub fn questions_by_category(category: DomainCategory) -> Vec<&'static Question> {
    QUESTIONS.iter().filter(|q| q.category == category).collect()
}

/// Shuffled copy of `questions` (Fisher-Yates), to reduce order effects.
pub fn shuffle_questions<R>(questions: &[Question], rng: &mut R) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    let mut shuffled = questions.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    pub total: usize,
    pub by_domain: BTreeMap<PersonalityDomain, usize>,
    pub by_category: BTreeMap<DomainCategory, usize>,
}

pub fn question_summary() -> QuestionSummary {
    let mut by_domain = BTreeMap::new();
    let mut by_category = BTreeMap::new();
    for q in QUESTIONS.iter() {
        *by_domain.entry(q.domain).or_insert(0) += 1;
        *by_category.entry(q.category).or_insert(0) += 1;
    }
    QuestionSummary {
        total: QUESTIONS.len(),
        by_domain,
        by_category,
    }
}

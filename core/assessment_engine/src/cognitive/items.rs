//! The fixed 16-item reasoning battery: four item families of four items,
//! ordered by difficulty within each family.

use once_cell::sync::Lazy;

use shared_types::{CognitiveItem, ItemType};

struct ItemDef {
    id: &'static str,
    item_type: ItemType,
    stimulus: &'static str,
    options: [&'static str; 4],
    correct: &'static str,
    difficulty: f64,
    time_limit_secs: u32,
}

const ITEM_DEFS: [ItemDef; 16] = [
    ItemDef {
        id: "MR-1",
        item_type: ItemType::MatrixReasoning,
        stimulus: "3x3 matrix; shapes run circle, square, triangle along each row and grow small, medium, large down each column.",
        options: ["A: large triangle", "B: small circle", "C: medium square", "D: large circle"],
        correct: "A",
        difficulty: 0.3,
        time_limit_secs: 60,
    },
    ItemDef {
        id: "MR-2",
        item_type: ItemType::MatrixReasoning,
        stimulus: "3x3 matrix; the number of shapes goes 1, 2, 3 and the shade goes white, grey, black.",
        options: ["A: three black circles", "B: one white circle", "C: two grey circles", "D: three black squares"],
        correct: "A",
        difficulty: 0.4,
        time_limit_secs: 60,
    },
    ItemDef {
        id: "MR-3",
        item_type: ItemType::MatrixReasoning,
        stimulus: "3x3 matrix; each arrow turns 90 degrees clockwise while its inner lines go 1, 2, 3.",
        options: [
            "A: right arrow, three lines",
            "B: down arrow, two lines",
            "C: left arrow, one line",
            "D: up arrow, three lines",
        ],
        correct: "A",
        difficulty: 0.5,
        time_limit_secs: 75,
    },
    ItemDef {
        id: "MR-4",
        item_type: ItemType::MatrixReasoning,
        stimulus: "3x3 matrix; the third cell of each row overlays the first two cells exclusively.",
        options: [
            "A: circle over triangle",
            "B: square only",
            "C: triangle over square",
            "D: circle only",
        ],
        correct: "C",
        difficulty: 0.6,
        time_limit_secs: 90,
    },
    ItemDef {
        id: "LN-1",
        item_type: ItemType::LetterNumberSeries,
        stimulus: "A 1, B 2, C 3, D 4, ?",
        options: ["A: E 5", "B: D 5", "C: E 4", "D: F 5"],
        correct: "A",
        difficulty: 0.2,
        time_limit_secs: 45,
    },
    ItemDef {
        id: "LN-2",
        item_type: ItemType::LetterNumberSeries,
        stimulus: "2, 4, 8, 16, ?",
        options: ["A: 24", "B: 32", "C: 18", "D: 20"],
        correct: "B",
        difficulty: 0.3,
        time_limit_secs: 45,
    },
    ItemDef {
        id: "LN-3",
        item_type: ItemType::LetterNumberSeries,
        stimulus: "A Z, B Y, C X, D ?",
        options: ["A: W", "B: E", "C: V", "D: D"],
        correct: "A",
        difficulty: 0.4,
        time_limit_secs: 60,
    },
    ItemDef {
        id: "LN-4",
        item_type: ItemType::LetterNumberSeries,
        stimulus: "1, 1, 2, 3, 5, 8, ?",
        options: ["A: 10", "B: 11", "C: 12", "D: 13"],
        correct: "D",
        difficulty: 0.5,
        time_limit_secs: 60,
    },
    ItemDef {
        id: "VR-1",
        item_type: ItemType::VerbalReasoning,
        stimulus: "All dogs are animals. Rex is a dog. Which conclusion follows?",
        options: [
            "A: Rex is an animal",
            "B: All animals are dogs",
            "C: Rex is not a cat",
            "D: Every animal is Rex",
        ],
        correct: "A",
        difficulty: 0.2,
        time_limit_secs: 45,
    },
    ItemDef {
        id: "VR-2",
        item_type: ItemType::VerbalReasoning,
        stimulus: "A is taller than B. C is shorter than B. What is certain?",
        options: [
            "A: A is taller than C",
            "B: C is taller than A",
            "C: B is taller than C",
            "D: A is the tallest of the three",
        ],
        correct: "C",
        difficulty: 0.4,
        time_limit_secs: 60,
    },
    ItemDef {
        id: "VR-3",
        item_type: ItemType::VerbalReasoning,
        stimulus: "Everyone who attended the meeting read the report. Sam did not read the report. What is certain?",
        options: [
            "A: Sam did not attend the meeting",
            "B: Sam attended the meeting",
            "C: Everyone who read the report attended",
            "D: Sam plans to read the report",
        ],
        correct: "A",
        difficulty: 0.5,
        time_limit_secs: 75,
    },
    ItemDef {
        id: "VR-4",
        item_type: ItemType::VerbalReasoning,
        stimulus: "Anyone holding a red ball holds no blue ball. Taro holds a blue ball. Anyone without a blue ball holds a green ball. What is certain?",
        options: [
            "A: Taro holds a green ball",
            "B: Taro does not hold a red ball",
            "C: Taro holds all three colours",
            "D: Anyone with a red ball holds a green ball",
        ],
        correct: "B",
        difficulty: 0.6,
        time_limit_secs: 90,
    },
    ItemDef {
        id: "RT-1",
        item_type: ItemType::Rotation3d,
        stimulus: "L-shaped block. Which option is the same shape rotated?",
        options: ["A: rotated 90 degrees right", "B: mirror image", "C: rotated 180 degrees", "D: rotated 90 degrees left"],
        correct: "A",
        difficulty: 0.3,
        time_limit_secs: 60,
    },
    ItemDef {
        id: "RT-2",
        item_type: ItemType::Rotation3d,
        stimulus: "T-shaped block rotated about several axes. Which option is the same shape?",
        options: ["A: 90 degrees about X", "B: mirror image", "C: 90 degrees about Y", "D: 180 degrees about Z"],
        correct: "D",
        difficulty: 0.4,
        time_limit_secs: 75,
    },
    ItemDef {
        id: "RT-3",
        item_type: ItemType::Rotation3d,
        stimulus: "Staircase block. Which option is the same shape rotated?",
        options: ["A: compound rotation A", "B: compound rotation B", "C: mirror image A", "D: mirror image B"],
        correct: "B",
        difficulty: 0.5,
        time_limit_secs: 75,
    },
    ItemDef {
        id: "RT-4",
        item_type: ItemType::Rotation3d,
        stimulus: "Asymmetric compound block. Which option is the same shape rotated?",
        options: ["A: compound rotation A", "B: compound rotation B", "C: compound rotation C", "D: mirror image"],
        correct: "C",
        difficulty: 0.6,
        time_limit_secs: 90,
    },
];

static ITEM_BANK: Lazy<Vec<CognitiveItem>> = Lazy::new(|| {
    ITEM_DEFS
        .iter()
        .map(|def| CognitiveItem {
            id: def.id.to_string(),
            item_type: def.item_type,
            stimulus: def.stimulus.to_string(),
            options: def.options.iter().map(|o| o.to_string()).collect(),
            correct_answer: def.correct.to_string(),
            difficulty: def.difficulty,
            time_limit_secs: def.time_limit_secs,
        })
        .collect()
});

pub fn item_bank() -> &'static [CognitiveItem] {
    &ITEM_BANK
}

pub fn items_by_type(item_type: ItemType) -> Vec<&'static CognitiveItem> {
    ITEM_BANK.iter().filter(|item| item.item_type == item_type).collect()
}

pub fn find_item(id: &str) -> Option<&'static CognitiveItem> {
    ITEM_BANK.iter().find(|item| item.id == id)
}

/// Sum of per-item time limits.
pub fn total_time_limit_secs() -> u32 {
    ITEM_BANK.iter().map(|item| item.time_limit_secs).sum()
}

/// A timeout (`None`) is always incorrect. Accepts the bare option letter or
/// the full option label ("B" or "B: 32").
pub fn check_answer(item: &CognitiveItem, selected: Option<&str>) -> bool {
    let Some(selected) = selected else {
        return false;
    };
    let letter = selected.split(':').next().unwrap_or_default().trim();
    letter.eq_ignore_ascii_case(&item.correct_answer)
}

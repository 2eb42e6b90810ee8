//! Seedable stimulus sequences for the trial-stream tasks.
//!
//! Every generator takes the random source from the caller, so a seeded
//! `StdRng` reproduces a sequence exactly.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use shared_types::StroopCondition;

/// Letters shown in the n-back stream.
pub const N_BACK_ALPHABET: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
pub const N_BACK_TARGET_RATE: f64 = 0.3;
pub const STROOP_CONGRUENT_RATE: f64 = 0.5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NBackConfig {
    pub n_level: usize,
    pub trial_count: usize,
    pub practice_trials: usize,
    pub stimulus_duration_ms: u32,
    pub isi_ms: u32,
}

impl Default for NBackConfig {
    fn default() -> Self {
        Self {
            n_level: 2,
            trial_count: 30,
            practice_trials: 10,
            stimulus_duration_ms: 1500,
            isi_ms: 500,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StroopConfig {
    pub trial_count: usize,
    pub practice_trials: usize,
    pub stimulus_duration_ms: u32,
    pub isi_ms: u32,
}

impl Default for StroopConfig {
    fn default() -> Self {
        Self {
            trial_count: 40,
            practice_trials: 8,
            stimulus_duration_ms: 2000,
            isi_ms: 300,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleRtConfig {
    pub trial_count: usize,
    pub practice_trials: usize,
    pub min_delay_ms: u32,
    pub max_delay_ms: u32,
    pub max_response_time_ms: u32,
}

impl Default for SimpleRtConfig {
    fn default() -> Self {
        Self {
            trial_count: 20,
            practice_trials: 5,
            min_delay_ms: 1000,
            max_delay_ms: 3000,
            max_response_time_ms: 1000,
        }
    }
}

/// Configuration of the whole trial-stream battery.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskConfigs {
    pub n_back: NBackConfig,
    pub stroop: StroopConfig,
    pub simple_rt: SimpleRtConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NBackStimulus {
    pub position: usize,
    pub stimulus: char,
    pub is_target: bool,
}

/// Generate `count` n-back stimuli. From position `n` on, a stimulus repeats
/// the one `n` back with [`N_BACK_TARGET_RATE`]; otherwise it is drawn from
/// the letters that differ from it, so no unplanned targets occur.
pub fn generate_n_back<R>(rng: &mut R, n: usize, count: usize) -> Vec<NBackStimulus>
where
    R: Rng + ?Sized,
{
    let mut trials: Vec<NBackStimulus> = Vec::with_capacity(count);

    for position in 0..count {
        let back = position
            .checked_sub(n)
            .filter(|_| n > 0)
            .map(|i| trials[i].stimulus);

        let (stimulus, is_target) = match back {
            Some(letter) if rng.gen_bool(N_BACK_TARGET_RATE) => (letter, true),
            _ => {
                let available: Vec<char> = N_BACK_ALPHABET
                    .iter()
                    .copied()
                    .filter(|c| Some(*c) != back)
                    .collect();
                let letter = available.choose(rng).copied().unwrap_or(N_BACK_ALPHABET[0]);
                (letter, false)
            }
        };

        trials.push(NBackStimulus {
            position,
            stimulus,
            is_target,
        });
    }
    trials
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StroopColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl StroopColor {
    pub const ALL: [StroopColor; 4] = [
        StroopColor::Red,
        StroopColor::Blue,
        StroopColor::Green,
        StroopColor::Yellow,
    ];

    /// Response key for this ink colour.
    pub fn key(&self) -> char {
        match self {
            StroopColor::Red => 'f',
            StroopColor::Blue => 'j',
            StroopColor::Green => 'k',
            StroopColor::Yellow => 'd',
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StroopStimulus {
    pub position: usize,
    pub word: StroopColor,
    pub ink: StroopColor,
    pub condition: StroopCondition,
    pub correct_response: char,
}

/// Generate `count` Stroop stimuli; the correct response is always the key
/// of the ink colour.
pub fn generate_stroop<R>(rng: &mut R, count: usize) -> Vec<StroopStimulus>
where
    R: Rng + ?Sized,
{
    (0..count)
        .map(|position| {
            let congruent = rng.gen_bool(STROOP_CONGRUENT_RATE);
            let word = StroopColor::ALL[rng.gen_range(0..StroopColor::ALL.len())];
            let ink = if congruent {
                word
            } else {
                let others: Vec<StroopColor> =
                    StroopColor::ALL.into_iter().filter(|c| *c != word).collect();
                others.choose(rng).copied().unwrap_or(word)
            };

            StroopStimulus {
                position,
                word,
                ink,
                condition: if congruent {
                    StroopCondition::Congruent
                } else {
                    StroopCondition::Incongruent
                },
                correct_response: ink.key(),
            }
        })
        .collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleRtStimulus {
    pub position: usize,
    pub delay_ms: u32,
}

/// Pre-stimulus delays drawn uniformly from `[min_delay_ms, max_delay_ms)`.
/// A degenerate range yields `min_delay_ms` for every trial.
pub fn generate_simple_rt<R>(
    rng: &mut R,
    count: usize,
    min_delay_ms: u32,
    max_delay_ms: u32,
) -> Vec<SimpleRtStimulus>
where
    R: Rng + ?Sized,
{
    (0..count)
        .map(|position| {
            let delay_ms = if min_delay_ms >= max_delay_ms {
                min_delay_ms
            } else {
                rng.gen_range(min_delay_ms..max_delay_ms)
            };
            SimpleRtStimulus { position, delay_ms }
        })
        .collect()
}

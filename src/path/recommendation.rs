use serde::Serialize;
use crate::curriculum::{Difficulty, Topic};

/// Remediation of a weak topic.
pub const PRIORITY_WEAK: u8 = 3;
/// Unlocked topic without watched material.
pub const PRIORITY_UNEXPLORED: u8 = 2;
/// Unlocked topic whose material was already watched.
pub const PRIORITY_NEXT: u8 = 1;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Video,
    Practice,
    Quiz,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SuggestedAction {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub label: &'static str,
}

fn default_actions() -> Vec<SuggestedAction> {
    vec![
        SuggestedAction { kind: ActionKind::Video, label: "Watch Tutorial" },
        SuggestedAction { kind: ActionKind::Practice, label: "Practice Exercises" },
        SuggestedAction { kind: ActionKind::Quiz, label: "Take Quiz" },
    ]
}

/// Why a topic was recommended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reason {
    /// Worst weak attempt in the subject, with its score.
    NeedsImprovement(f64),
    NotYetExplored,
    NextInCurriculum,
}

impl Reason {
    pub fn priority(self) -> u8 {
        match self {
            Reason::NeedsImprovement(_) => PRIORITY_WEAK,
            Reason::NotYetExplored => PRIORITY_UNEXPLORED,
            Reason::NextInCurriculum => PRIORITY_NEXT,
        }
    }

    pub fn text(self) -> String {
        match self {
            Reason::NeedsImprovement(score) => format!("Needs improvement ({}%)", score),
            Reason::NotYetExplored => "Not yet explored".to_string(),
            Reason::NextInCurriculum => "Next in curriculum".to_string(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub topic_id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub difficulty_label: &'static str,
    pub reason: String,
    pub priority: u8,
    /// Score of the matching attempt, 0 when the topic was never attempted.
    pub score: f64,
    pub actions: Vec<SuggestedAction>,
}

impl Recommendation {
    pub fn new(topic: &Topic, reason: Reason, score: f64) -> Self {
        Recommendation {
            topic_id: topic.id.clone(),
            title: topic.title.clone(),
            difficulty: topic.difficulty,
            difficulty_label: topic.difficulty.label(),
            reason: reason.text(),
            priority: reason.priority(),
            score,
            actions: default_actions(),
        }
    }
}

mod data;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use serde::{Deserialize, Serialize};
use lazy_static::lazy_static;
use crate::error::{CatalogError, LearnError};

/// Difficulty tier of a topic, serialized as its tier number (1..=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    pub fn tier(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = CatalogError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            _ => Err(CatalogError::InvalidDifficulty { tier }),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.tier()
    }
}

/// One unit of curriculum content. Attempts and watched records join to it
/// by `title`, not by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub subject: String,
    pub grade_level: u32,
    pub title: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl Topic {
    /// Composite `subject_title` key used by the completed-topic set.
    pub fn completion_key(&self) -> String {
        completion_key(&self.subject, &self.title)
    }
}

pub fn completion_key(subject: &str, title: &str) -> String {
    format!("{}_{}", subject, title)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectTopics {
    pub subject: String,
    pub topics: Vec<Topic>,
}

impl SubjectTopics {
    pub fn find_by_title(&self, title: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.title == title)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeCatalog {
    pub level: u32,
    /// Subjects in declaration order.
    pub subjects: Vec<SubjectTopics>,
}

impl GradeCatalog {
    pub fn total_topics(&self) -> usize {
        self.subjects.iter().map(|s| s.topics.len()).sum()
    }

    pub fn find_topic(&self, id: &str) -> Option<&Topic> {
        self.subjects
            .iter()
            .flat_map(|s| s.topics.iter())
            .find(|t| t.id == id)
    }
}

/// Read-only taxonomy keyed by grade, then subject.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    grades: BTreeMap<u32, GradeCatalog>,
}

lazy_static! {
    static ref BUILTIN_CATALOG: Catalog = data::builtin_catalog();
}

impl Catalog {
    /// The curriculum compiled into the crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    /// Group a flat topic list by grade and subject, keeping the order in
    /// which subjects and topics first appear, then validate the result.
    pub fn from_topics(topics: Vec<Topic>) -> Result<Catalog, CatalogError> {
        let catalog = Catalog::assemble(topics);
        catalog.validate()?;
        Ok(catalog)
    }

    pub(crate) fn assemble(topics: Vec<Topic>) -> Catalog {
        let mut grades: BTreeMap<u32, GradeCatalog> = BTreeMap::new();
        for topic in topics {
            let grade = grades.entry(topic.grade_level).or_insert_with(|| GradeCatalog {
                level: topic.grade_level,
                subjects: Vec::new(),
            });
            match grade.subjects.iter_mut().find(|s| s.subject == topic.subject) {
                Some(subject) => subject.topics.push(topic),
                None => grade.subjects.push(SubjectTopics {
                    subject: topic.subject.clone(),
                    topics: vec![topic],
                }),
            }
        }
        Catalog { grades }
    }

    /// Check unique ids and that every prerequisite names a topic of the
    /// same grade.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for grade in self.grades.values() {
            if grade.subjects.is_empty() {
                return Err(CatalogError::EmptyGrade { grade: grade.level });
            }

            let mut ids = HashSet::new();
            for topic in grade.subjects.iter().flat_map(|s| s.topics.iter()) {
                if !ids.insert(topic.id.as_str()) {
                    return Err(CatalogError::DuplicateTopic {
                        grade: grade.level,
                        id: topic.id.clone(),
                    });
                }
            }

            for topic in grade.subjects.iter().flat_map(|s| s.topics.iter()) {
                if let Some(missing) = topic.prerequisites.iter().find(|p| !ids.contains(p.as_str())) {
                    return Err(CatalogError::UnknownPrerequisite {
                        grade: grade.level,
                        topic: topic.id.clone(),
                        prerequisite: missing.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn grade(&self, level: u32) -> Option<&GradeCatalog> {
        self.grades.get(&level)
    }

    pub fn grade_levels(&self) -> Vec<u32> {
        self.grades.keys().copied().collect()
    }
}

/// Load a catalog from a JSON array of topics.
pub async fn load_catalog(path: &Path) -> Result<Catalog, LearnError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LearnError::new(
            format!("Failed to read catalog: {}", e),
            "io"
        ).with_context(format!("path: {:?}", path)))?;

    let topics: Vec<Topic> = serde_json::from_str(&content)
        .map_err(|e| LearnError::new(
            format!("Failed to parse catalog: {}", e),
            "json_parse"
        ).with_context(format!("path: {:?}", path)))?;

    let catalog = Catalog::from_topics(topics)
        .map_err(|e| LearnError::from(e).with_context(format!("path: {:?}", path)))?;

    tracing::info!(
        path = ?path,
        grades = ?catalog.grade_levels(),
        "Loaded curriculum catalog"
    );
    Ok(catalog)
}

//! Built-in curriculum for classes 6 to 8.

use super::{Catalog, Difficulty, Topic};
use Difficulty::{Easy, Hard, Medium};

type TopicRow = (&'static str, &'static str, Difficulty, &'static [&'static str]);
type SubjectRows = (&'static str, &'static [TopicRow]);

const CLASS_6: &[SubjectRows] = &[
    ("Math", &[
        ("m6_1", "Whole Numbers", Easy, &[]),
        ("m6_2", "Integers", Medium, &["m6_1"]),
        ("m6_3", "Fractions", Medium, &["m6_1"]),
        ("m6_4", "Decimals", Hard, &["m6_3"]),
        ("m6_5", "Algebra Basics", Hard, &["m6_2"]),
    ]),
    ("Science", &[
        ("s6_1", "Food and Nutrition", Easy, &[]),
        ("s6_2", "Materials", Easy, &[]),
        ("s6_3", "Living Organisms", Medium, &["s6_1"]),
        ("s6_4", "Motion and Measurement", Medium, &[]),
        ("s6_5", "Light and Shadows", Hard, &["s6_4"]),
    ]),
    ("English", &[
        ("e6_1", "Grammar Fundamentals", Easy, &[]),
        ("e6_2", "Sentence Structure", Medium, &["e6_1"]),
        ("e6_3", "Reading Comprehension", Medium, &[]),
        ("e6_4", "Writing Skills", Hard, &["e6_2"]),
        ("e6_5", "Poetry Analysis", Hard, &["e6_3"]),
    ]),
];

const CLASS_7: &[SubjectRows] = &[
    ("Math", &[
        ("m7_1", "Rational Numbers", Easy, &[]),
        ("m7_2", "Linear Equations", Medium, &["m7_1"]),
        ("m7_3", "Geometry Basics", Medium, &[]),
        ("m7_4", "Perimeter and Area", Hard, &["m7_3"]),
        ("m7_5", "Data Handling", Hard, &[]),
    ]),
    ("Science", &[
        ("s7_1", "Nutrition in Plants", Easy, &[]),
        ("s7_2", "Heat and Temperature", Medium, &[]),
        ("s7_3", "Acids and Bases", Medium, &[]),
        ("s7_4", "Weather and Climate", Hard, &["s7_2"]),
        ("s7_5", "Electric Current", Hard, &[]),
    ]),
    ("English", &[
        ("e7_1", "Advanced Grammar", Easy, &[]),
        ("e7_2", "Essay Writing", Medium, &["e7_1"]),
        ("e7_3", "Literature Analysis", Medium, &[]),
        ("e7_4", "Persuasive Writing", Hard, &["e7_2"]),
        ("e7_5", "Critical Reading", Hard, &["e7_3"]),
    ]),
];

const CLASS_8: &[SubjectRows] = &[
    ("Math", &[
        ("m8_1", "Exponents and Powers", Easy, &[]),
        ("m8_2", "Algebraic Expressions", Medium, &["m8_1"]),
        ("m8_3", "Quadrilaterals", Medium, &[]),
        ("m8_4", "Mensuration", Hard, &["m8_3"]),
        ("m8_5", "Probability", Hard, &[]),
    ]),
    ("Science", &[
        ("s8_1", "Crop Production", Easy, &[]),
        ("s8_2", "Force and Pressure", Medium, &[]),
        ("s8_3", "Chemical Reactions", Medium, &[]),
        ("s8_4", "Sound", Hard, &["s8_2"]),
        ("s8_5", "Cell Structure", Hard, &[]),
    ]),
    ("English", &[
        ("e8_1", "Complex Grammar", Easy, &[]),
        ("e8_2", "Formal Writing", Medium, &["e8_1"]),
        ("e8_3", "Drama and Theatre", Medium, &[]),
        ("e8_4", "Debate Skills", Hard, &["e8_2"]),
        ("e8_5", "Advanced Literature", Hard, &["e8_3"]),
    ]),
];

const CLASSES: &[(u32, &[SubjectRows])] = &[(6, CLASS_6), (7, CLASS_7), (8, CLASS_8)];

fn rows_to_topics() -> Vec<Topic> {
    let mut topics = Vec::new();
    for (grade, subjects) in CLASSES {
        for (subject, rows) in subjects.iter() {
            for (id, title, difficulty, prereqs) in rows.iter() {
                topics.push(Topic {
                    id: id.to_string(),
                    subject: subject.to_string(),
                    grade_level: *grade,
                    title: title.to_string(),
                    difficulty: *difficulty,
                    prerequisites: prereqs.iter().map(|p| p.to_string()).collect(),
                });
            }
        }
    }
    topics
}

/// Assemble the built-in catalog. The table above is checked by
/// `Catalog::validate` at startup and in tests.
pub(crate) fn builtin_catalog() -> Catalog {
    Catalog::assemble(rows_to_topics())
}

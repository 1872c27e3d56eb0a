#[cfg(test)]
mod tests {
    use crate::curriculum::{Catalog, Difficulty};
    use crate::path::recommendation::{Reason, Recommendation};
    use crate::path::round_half_up;

    #[test]
    fn test_reason_text_and_priority() {
        assert_eq!(Reason::NeedsImprovement(45.0).text(), "Needs improvement (45%)");
        assert_eq!(Reason::NeedsImprovement(45.5).text(), "Needs improvement (45.5%)");
        assert_eq!(Reason::NeedsImprovement(45.0).priority(), 3);
        assert_eq!(Reason::NotYetExplored.text(), "Not yet explored");
        assert_eq!(Reason::NotYetExplored.priority(), 2);
        assert_eq!(Reason::NextInCurriculum.text(), "Next in curriculum");
        assert_eq!(Reason::NextInCurriculum.priority(), 1);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(62.5), 63.0);
        assert_eq!(round_half_up(62.49), 62.0);
        assert_eq!(round_half_up(26.666), 27.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn test_recommendation_from_topic() {
        let catalog = Catalog::builtin();
        let topic = catalog.grade(6).unwrap().subjects[0].find_by_title("Decimals").unwrap();
        let rec = Recommendation::new(topic, Reason::NotYetExplored, 0.0);
        assert_eq!(rec.topic_id, "m6_4");
        assert_eq!(rec.difficulty, Difficulty::Hard);
        assert_eq!(rec.difficulty_label, "Hard");
        let labels: Vec<&str> = rec.actions.iter().map(|a| a.label).collect();
        assert_eq!(labels, vec!["Watch Tutorial", "Practice Exercises", "Take Quiz"]);

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["difficulty"], 3);
        assert_eq!(json["topicId"], "m6_4");
        assert_eq!(json["actions"][0]["type"], "video");
    }
}

#[cfg(test)]
mod tests {
    use crate::ordered::OrderedMap;

    #[test]
    fn test_keeps_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("Science".to_string(), 1);
        map.insert("Math".to_string(), 2);
        map.insert("English".to_string(), 3);
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["Science", "Math", "English"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut map = OrderedMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        map.insert("a".to_string(), 10);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&10));
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"a":10,"b":2}"#);
    }

    #[test]
    fn test_empty_serializes_as_object() {
        let map: OrderedMap<f64> = OrderedMap::new();
        assert!(map.is_empty());
        assert_eq!(serde_json::to_string(&map).unwrap(), "{}");
    }
}

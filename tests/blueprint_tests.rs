#[cfg(test)]
mod tests {
    use backforge::app::blueprint::{
        Endpoint, Field, FieldType, HttpMethod, IdAllocator, Model, RecordStore,
    };
    use pretty_assertions::assert_eq;

    fn sample_model(id: u64, name: &str) -> Model {
        Model::new(id, name, vec![Field::new("email", FieldType::String)])
    }

    #[test]
    fn test_store_starts_empty() {
        let store: RecordStore<Model> = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = RecordStore::new();
        store.add(sample_model(1, "User"));
        store.add(sample_model(2, "Post"));
        store.add(sample_model(3, "Comment"));

        let names: Vec<&str> = store.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["User", "Post", "Comment"]);
    }

    #[test]
    fn test_get_finds_by_id() {
        let mut store = RecordStore::new();
        store.add(sample_model(1, "User"));
        store.add(sample_model(2, "Post"));

        assert_eq!(store.get(2).map(|m| m.name.as_str()), Some("Post"));
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_replace_swaps_in_place() {
        let mut store = RecordStore::new();
        store.add(sample_model(1, "User"));
        store.add(sample_model(2, "Post"));

        store.replace(1, sample_model(1, "Account"));

        assert_eq!(store.len(), 2);
        // The replaced record keeps its position
        assert_eq!(store.as_slice()[0].name, "Account");
        assert_eq!(store.as_slice()[1].name, "Post");
    }

    #[test]
    fn test_replace_unknown_id_is_a_silent_noop() {
        let mut store = RecordStore::new();
        store.add(sample_model(1, "User"));

        store.replace(42, sample_model(42, "Ghost"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.as_slice()[0].name, "User");
        assert!(store.get(42).is_none());
    }

    #[test]
    fn test_remove_drops_only_the_matching_record() {
        let mut store = RecordStore::new();
        store.add(sample_model(1, "User"));
        store.add(sample_model(2, "Post"));
        store.add(sample_model(3, "Comment"));

        store.remove(2);

        let names: Vec<&str> = store.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["User", "Comment"]);
    }

    #[test]
    fn test_remove_unknown_id_is_a_silent_noop() {
        let mut store = RecordStore::new();
        store.add(sample_model(1, "User"));

        store.remove(42);

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_holds_endpoints_too() {
        let mut store = RecordStore::new();
        store.add(Endpoint::new(1, "/users", HttpMethod::Get, "List all users"));
        store.add(Endpoint::new(2, "/users", HttpMethod::Post, "Create a user"));

        store.remove(1);

        assert_eq!(store.len(), 1);
        assert_eq!(store.as_slice()[0].method, HttpMethod::Post);
    }

    #[test]
    fn test_allocator_never_repeats() {
        let mut ids = IdAllocator::new();

        let mut seen = Vec::new();
        for _ in 0..100 {
            let id = ids.allocate();
            assert!(!seen.contains(&id));
            seen.push(id);
        }
    }

    #[test]
    fn test_allocator_starts_above_zero() {
        let mut ids = IdAllocator::new();
        assert!(ids.allocate() > 0);
    }

    #[test]
    fn test_field_type_names_match_prompt_vocabulary() {
        assert_eq!(FieldType::String.as_str(), "string");
        assert_eq!(FieldType::Number.as_str(), "number");
        assert_eq!(FieldType::Boolean.as_str(), "boolean");
        assert_eq!(FieldType::ALL.len(), 3);
        assert_eq!(FieldType::default(), FieldType::String);
    }

    #[test]
    fn test_http_method_names_are_upper_case() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
        assert_eq!(HttpMethod::ALL.len(), 4);
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
    }

    #[test]
    fn test_model_serializes_field_type_under_type_key() {
        let model = sample_model(1, "User");
        let json = serde_json::to_string(&model).unwrap();

        assert!(json.contains(r#""type":"string""#));
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }
}

//! ID mapping produced by the upstream paper-selection stage.

mod id_map;

pub use id_map::IdMapping;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_none_is_empty() {
        assert!(IdMapping::load(None).is_empty());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("arxiv_mapping.json");

        assert!(IdMapping::load(Some(&path)).is_empty());
    }

    #[test]
    fn test_load_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("arxiv_mapping.json");
        std::fs::write(&path, r#"{"paper_0": "2310.12345", "Some_Title": "2401.00001"}"#).unwrap();

        let mapping = IdMapping::load(Some(&path));

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("paper_0"), Some("2310.12345"));
    }

    #[test]
    fn test_load_unparsable_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("arxiv_mapping.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(IdMapping::load(Some(&path)).is_empty());
    }

    #[test]
    fn test_title_key_replaces_spaces_and_truncates() {
        assert_eq!(IdMapping::title_key("Attention Is All"), "Attention_Is_All");

        let long = "a ".repeat(40);
        let key = IdMapping::title_key(&long);
        assert_eq!(key.chars().count(), 50);
        assert!(key.starts_with("a_a_"));
    }

    #[test]
    fn test_title_key_truncates_by_characters() {
        let title = "论".repeat(60);
        assert_eq!(IdMapping::title_key(&title), "论".repeat(50));
    }

    #[test]
    fn test_resolve_prefers_title_key() {
        let mapping: IdMapping = [("My_Paper", "1111.1111"), ("paper_3", "3333.3333")]
            .into_iter()
            .collect();

        assert_eq!(mapping.resolve(Some("My Paper"), 3), Some("1111.1111"));
        assert_eq!(mapping.resolve(Some("Other"), 3), Some("3333.3333"));
        assert_eq!(mapping.resolve(None, 3), Some("3333.3333"));
        assert_eq!(mapping.resolve(Some("Other"), 4), None);
    }
}

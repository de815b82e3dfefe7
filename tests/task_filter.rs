#[cfg(test)]
mod tests {
    use tali::libs::task::{filter_by_priority, Task};

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new(1, "Low", "", "", 1, ""),
            Task::new(1, "High one", "", "", 3, ""),
            Task::new(1, "Medium", "", "", 2, ""),
            Task::new(1, "High two", "", "", 3, ""),
        ]
    }

    #[test]
    fn test_filter_keeps_exact_matches_in_order() {
        let filtered = filter_by_priority(sample_tasks(), 3);

        let titles: Vec<&str> = filtered.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["High one", "High two"]);
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        assert!(filter_by_priority(sample_tasks(), 9).is_empty());
    }

    #[test]
    fn test_filter_is_exact_not_threshold() {
        // Priority 2 must not pull in the 3s
        let filtered = filter_by_priority(sample_tasks(), 2);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Medium");
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_by_priority(Vec::new(), 1).is_empty());
    }
}

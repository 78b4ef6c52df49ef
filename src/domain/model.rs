use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A task record that passed every schema rule. `name` keeps its original
/// (untrimmed) text and `value` keeps its original JSON number form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: i64,
    pub name: String,
    pub value: Number,
}

/// Output record: a validated task plus derived metadata. Field order here
/// is the serialized field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    pub id: i64,
    pub name: String,
    pub value: Number,
    pub processed: bool,
    pub name_length: usize,
}

impl ProcessedRecord {
    pub fn from_task(task: &TaskRecord) -> Self {
        Self {
            id: task.id,
            name: task.name.clone(),
            value: task.value.clone(),
            processed: true,
            name_length: task.name.chars().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_task_sets_metadata() {
        let task = TaskRecord {
            id: 1,
            name: "Alpha".to_string(),
            value: Number::from(10),
        };
        let processed = ProcessedRecord::from_task(&task);
        assert!(processed.processed);
        assert_eq!(processed.name_length, 5);
        assert_eq!(processed.id, 1);
        assert_eq!(processed.value, Number::from(10));
    }

    #[test]
    fn test_name_length_counts_chars_not_bytes() {
        let task = TaskRecord {
            id: 7,
            name: "héllo".to_string(),
            value: Number::from(1),
        };
        let processed = ProcessedRecord::from_task(&task);
        assert_eq!(processed.name_length, 5);
        assert!(task.name.len() > 5); // utf-8 bytes
    }

    #[test]
    fn test_name_length_uses_untrimmed_name() {
        let task = TaskRecord {
            id: 2,
            name: "  padded  ".to_string(),
            value: Number::from(0),
        };
        let processed = ProcessedRecord::from_task(&task);
        assert_eq!(processed.name_length, 10);
        assert_eq!(processed.name, "  padded  ");
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
///
/// `options` is in display order. `answer` is expected to match exactly one
/// option, but upstream data is not trusted to uphold that.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub answer: String,
}

impl Question {
    /// Position of the correct answer among `options`, if it is present.
    #[must_use]
    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option == &self.answer)
    }

    /// Whether `option` is one of the offered options.
    #[must_use]
    pub fn offers(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }

    /// Letter label shown next to the option at `index` (`A`, `B`, ...).
    #[must_use]
    pub fn option_label(index: usize) -> char {
        u8::try_from(index)
            .ok()
            .filter(|i| *i < 26)
            .map_or('?', |i| char::from(b'A' + i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer: &str) -> Question {
        Question {
            question: "Which animal purrs?".to_string(),
            options: vec!["Cat".to_string(), "Dog".to_string(), "Fish".to_string()],
            answer: answer.to_string(),
        }
    }

    #[test]
    fn answer_index_finds_exact_match() {
        assert_eq!(question("Dog").answer_index(), Some(1));
    }

    #[test]
    fn answer_index_is_none_for_defective_data() {
        assert_eq!(question("cat").answer_index(), None);
        assert_eq!(question("Bird").answer_index(), None);
    }

    #[test]
    fn option_labels() {
        assert_eq!(Question::option_label(0), 'A');
        assert_eq!(Question::option_label(3), 'D');
        assert_eq!(Question::option_label(40), '?');
    }

    #[test]
    fn missing_options_deserialize_as_empty() {
        let q: Question =
            serde_json::from_str(r#"{"question": "Q?", "answer": "x"}"#).unwrap();
        assert!(q.options.is_empty());
        assert!(!q.offers("x"));
    }
}

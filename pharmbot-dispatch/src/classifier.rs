//! Free-text classifier: picks one of two canned replies by whether the text ends with `?`.

use std::sync::Arc;

use pharmbot_core::OutboundReply;

use crate::catalog::{Intent, ReplyCatalog};

#[derive(Debug, Clone)]
pub struct FreeTextClassifier {
    catalog: Arc<ReplyCatalog>,
}

impl FreeTextClassifier {
    pub fn new(catalog: Arc<ReplyCatalog>) -> Self {
        Self { catalog }
    }

    /// Only the final code point is inspected. Empty text gets the negative echo.
    pub fn intent_for(raw_text: &str) -> Intent {
        match raw_text.chars().next_back() {
            Some('?') => Intent::AffirmativeEcho,
            _ => Intent::NegativeEcho,
        }
    }

    pub fn classify(&self, raw_text: &str) -> OutboundReply {
        self.catalog.lookup(Self::intent_for(raw_text)).to_reply()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AFFIRMATIVE_ECHO_TEXT, NEGATIVE_ECHO_TEXT};
    use pharmbot_core::KeyboardAction;

    fn classifier() -> FreeTextClassifier {
        FreeTextClassifier::new(Arc::new(ReplyCatalog::new()))
    }

    #[test]
    fn test_question_gets_affirmative_echo() {
        let reply = classifier().classify("Can I come in?");
        assert_eq!(reply.text, AFFIRMATIVE_ECHO_TEXT);
        assert_eq!(reply.keyboard, KeyboardAction::None);
    }

    #[test]
    fn test_statement_gets_negative_echo() {
        let reply = classifier().classify("I will come in");
        assert_eq!(reply.text, NEGATIVE_ECHO_TEXT);
        assert_eq!(reply.keyboard, KeyboardAction::None);
    }

    #[test]
    fn test_empty_text_gets_negative_echo() {
        let classifier = classifier();
        assert_eq!(classifier.classify("").text, NEGATIVE_ECHO_TEXT);
        assert_eq!(classifier.classify(""), classifier.classify(""));
    }

    #[test]
    fn test_only_last_code_point_counts() {
        assert_eq!(FreeTextClassifier::intent_for("?"), Intent::AffirmativeEcho);
        assert_eq!(FreeTextClassifier::intent_for("Why? "), Intent::NegativeEcho);
        assert_eq!(FreeTextClassifier::intent_for("Qayerda?!"), Intent::NegativeEcho);
        assert_eq!(FreeTextClassifier::intent_for("Где аптека?"), Intent::AffirmativeEcho);
        // Full-width question mark is a different code point.
        assert_eq!(FreeTextClassifier::intent_for("吗？"), Intent::NegativeEcho);
    }
}

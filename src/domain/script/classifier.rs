//! Intent classification: keyword scoring with a fuzzy fallback.

use tracing::debug;

use super::intent::Intent;
use super::similarity::partial_ratio;

/// Classifies a client utterance into an objection category.
///
/// Implementations must be total: every input, including the empty string,
/// yields a member of [`Intent::all`].
pub trait IntentClassifier: Send + Sync {
    fn classify(&self, utterance: &str) -> Intent;
}

/// Keyword-table classifier (default implementation).
///
/// Phase 1 counts keyword substrings per category and takes the strict
/// maximum, earlier categories winning ties. Phase 2 runs only when nothing
/// matched: the category owning the keyword with the highest partial-ratio
/// score wins, and [`Intent::DEFAULT`] is returned when every score is zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordIntentClassifier;

impl KeywordIntentClassifier {
    fn keyword_hits(text: &str) -> Option<(Intent, usize)> {
        let mut best: Option<(Intent, usize)> = None;
        for intent in Intent::objections() {
            let hits = intent
                .keywords()
                .iter()
                .filter(|kw| text.contains(*kw))
                .count();
            if hits > best.map_or(0, |(_, h)| h) {
                best = Some((*intent, hits));
            }
        }
        best
    }

    fn fuzzy_best(text: &str) -> Option<(Intent, f64)> {
        let mut best: Option<(Intent, f64)> = None;
        for intent in Intent::objections() {
            for keyword in intent.keywords() {
                let score = partial_ratio(text, keyword);
                if score > best.map_or(0.0, |(_, s)| s) {
                    best = Some((*intent, score));
                }
            }
        }
        best
    }
}

impl IntentClassifier for KeywordIntentClassifier {
    fn classify(&self, utterance: &str) -> Intent {
        let text = utterance.to_lowercase();

        if let Some((intent, hits)) = Self::keyword_hits(&text) {
            debug!(%intent, hits, "Intent matched by keywords");
            return intent;
        }

        match Self::fuzzy_best(&text) {
            Some((intent, score)) => {
                debug!(%intent, score, "Intent matched by fuzzy fallback");
                intent
            }
            None => {
                debug!("No keyword signal, using default intent");
                Intent::DEFAULT
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classify(text: &str) -> Intent {
        KeywordIntentClassifier.classify(text)
    }

    #[test]
    fn empty_input_returns_default() {
        assert_eq!(classify(""), Intent::General);
    }

    #[test]
    fn keyword_match_picks_category() {
        assert_eq!(classify("Дорого, до 15 млн, студия, сегодня"), Intent::Expensive);
        assert_eq!(classify("ипотеку не одобрили"), Intent::NoMortgage);
        assert_eq!(classify("скиньте на почту"), Intent::SendWhatsapp);
        assert_eq!(classify("я сам смотрю на циан"), Intent::SelfSearch);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("ДОРОГО"), Intent::Expensive);
        assert_eq!(classify("WhatsApp"), Intent::SendWhatsapp);
    }

    #[test]
    fn highest_count_wins() {
        // busy_later: "перезвон" + "позже" = 2, think_later: "подумаю" = 1
        assert_eq!(classify("подумаю, перезвоните позже"), Intent::BusyLater);
    }

    #[test]
    fn tie_goes_to_earlier_category() {
        // busy_later ("занят") and expensive ("дорого") both score 1
        assert_eq!(classify("занят, и вообще дорого"), Intent::BusyLater);
    }

    #[test]
    fn overlapping_keywords_count_for_both_categories() {
        // "через месяц" also contains busy_later's "через": 1 vs 1, earlier wins
        assert_eq!(classify("через месяц"), Intent::BusyLater);
        // "подумаю" tips the balance to think_later
        assert_eq!(classify("подумаю, позже решу, через месяц"), Intent::ThinkLater);
    }

    #[test]
    fn fuzzy_fallback_handles_typos() {
        assert_eq!(classify("присмотриваюсь"), Intent::JustBrowsing);
        assert_eq!(classify("вотсап"), Intent::SendWhatsapp);
    }

    #[test]
    fn text_without_shared_characters_returns_default() {
        assert_eq!(classify("123456"), Intent::General);
    }

    proptest! {
        #[test]
        fn classify_is_total(text in ".{0,80}") {
            let intent = classify(&text);
            prop_assert!(Intent::all().contains(&intent));
        }

        #[test]
        fn classify_is_deterministic(text in "[а-яa-z ,.]{0,60}") {
            prop_assert_eq!(classify(&text), classify(&text));
        }
    }
}

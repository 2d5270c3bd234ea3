// Copyright 2025 the haze-sentiment project authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Disaster keyword detection
//! Flags tweets discussing forest fires or haze by scanning for a fixed
//! Indonesian/English vocabulary. Detection is plain substring containment on
//! the lowercased text; it carries no model and is independent from the
//! sentiment pipeline, which lets the two outputs be rendered side by side for
//! the same tweet.
//!
//! ```
//! use haze_sentiment::pipelines::keywords::KeywordDetector;
//!
//! let detector = KeywordDetector::default();
//! assert!(detector.is_match("Titik api terpantau di Sumatera"));
//! assert!(!detector.is_match("I love sunny weather today"));
//! ```

/// Fixed forest-fire and haze vocabulary, in the order matches are reported.
/// Keywords overlap on purpose (`kebakaran` is a prefix of `kebakaran hutan`);
/// overlapping matches are all reported by `detect`.
pub const DISASTER_KEYWORDS: [&str; 25] = [
    "kebakaran hutan",
    "kebakaran",
    "hutan terbakar",
    "api hutan",
    "forest fire",
    "wildfire",
    "bushfire",
    "forest burning",
    "kabut asap",
    "asap",
    "smoke",
    "smog",
    "polusi udara",
    "haze",
    "kabut",
    "asap tebal",
    "udara berasap",
    "karhutla",
    "karhut",
    "hotspot",
    "titik api",
    "pembakaran",
    "membakar",
    "terbakar",
    "kobaran api",
];

/// # Detector for disaster-domain keywords in free text
/// Holds a fixed, lowercase keyword list built once and shared by all calls.
pub struct KeywordDetector {
    keywords: Vec<String>,
}

impl Default for KeywordDetector {
    /// Detector over the built-in forest-fire and haze vocabulary.
    fn default() -> Self {
        KeywordDetector::new(DISASTER_KEYWORDS.iter())
    }
}

impl KeywordDetector {
    /// Build a detector over a custom keyword list. Keywords are lowercased on
    /// construction; matching is case-insensitive on the text side as well.
    pub fn new<I, S>(keywords: I) -> KeywordDetector
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        KeywordDetector {
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The keyword list scanned by this detector, in scan order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Report every keyword occurring in the text, in list order. The text is
    /// lowercased once; an empty text yields an empty result.
    ///
    /// # Example
    ///
    /// ```
    /// use haze_sentiment::pipelines::keywords::KeywordDetector;
    ///
    /// let detector = KeywordDetector::default();
    /// let matches = detector.detect("Kabut asap makin parah di Riau");
    /// assert_eq!(matches, ["kabut asap", "asap", "kabut"]);
    /// ```
    pub fn detect(&self, text: &str) -> Vec<&str> {
        let text = text.to_lowercase();
        self.keywords
            .iter()
            .filter(|keyword| text.contains(keyword.as_str()))
            .map(|keyword| keyword.as_str())
            .collect()
    }

    /// Report only the first keyword (in list order) occurring in the text.
    /// Used where a single tag per tweet is wanted, such as the dataset
    /// exploration view.
    pub fn detect_first(&self, text: &str) -> Option<&str> {
        let text = text.to_lowercase();
        self.keywords
            .iter()
            .find(|keyword| text.contains(keyword.as_str()))
            .map(|keyword| keyword.as_str())
    }

    /// Whether the text contains any keyword of the list.
    pub fn is_match(&self, text: &str) -> bool {
        self.detect_first(text).is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn detects_indonesian_haze_keywords() {
        let detector = KeywordDetector::default();
        let matches = detector.detect("Kabut asap makin parah di Riau");
        assert!(matches.contains(&"kabut asap"));
        assert!(matches.contains(&"asap"));
    }

    #[test]
    fn unrelated_text_yields_no_matches() {
        let detector = KeywordDetector::default();
        assert!(detector.detect("I love sunny weather today").is_empty());
        assert!(!detector.is_match("I love sunny weather today"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let detector = KeywordDetector::default();
        assert_eq!(detector.detect("WILDFIRE in California"), ["wildfire"]);
    }

    #[test]
    fn empty_text_yields_no_matches() {
        let detector = KeywordDetector::default();
        assert!(detector.detect("").is_empty());
        assert_eq!(detector.detect_first(""), None);
    }

    #[test]
    fn overlapping_keywords_all_match() {
        let detector = KeywordDetector::default();
        let matches = detector.detect("kebakaran hutan meluas");
        assert!(matches.contains(&"kebakaran hutan"));
        assert!(matches.contains(&"kebakaran"));
    }

    #[test]
    fn first_match_follows_list_order() {
        let detector = KeywordDetector::default();
        assert_eq!(
            detector.detect_first("hutan terbakar karena kebakaran"),
            Some("kebakaran")
        );
    }

    #[test]
    fn vocabulary_matches_the_disaster_term_list() {
        assert_eq!(DISASTER_KEYWORDS.len(), 25);
        let detector = KeywordDetector::default();
        assert_eq!(detector.keywords().len(), 25);
        // the list is stored lowercase and in scan order
        assert_eq!(detector.keywords()[0], "kebakaran hutan");
        assert_eq!(detector.keywords()[24], "kobaran api");
        for keyword in detector.keywords() {
            assert_eq!(keyword, &keyword.to_lowercase());
        }
    }

    #[test]
    fn custom_keyword_lists_are_lowercased() {
        let detector = KeywordDetector::new(["Banjir", "LONGSOR"]);
        assert_eq!(detector.detect("banjir dan longsor"), ["banjir", "longsor"]);
    }
}

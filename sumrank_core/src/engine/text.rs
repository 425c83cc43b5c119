use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// English stopwords (the NLTK list), dropped before scoring so that
/// function words do not inflate sentence similarity.
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Splits text into sentences with Unicode sentence segmentation.
/// Whitespace is collapsed first: UAX#29 treats a line feed as a sentence
/// break, which would shred hard-wrapped paragraphs.
pub fn sentences(text: &str) -> Vec<String> {
    let whitespace = Regex::new(r"\s+").unwrap();
    let flattened = whitespace.replace_all(text.trim(), " ");

    flattened
        .unicode_sentences()
        .map(|sentence| sentence.trim().to_string())
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Lowercases a sentence, tokenizes it into words (punctuation falls out
/// of word segmentation) and drops stopwords.
pub fn preprocess(sentence: &str) -> String {
    let lowered = sentence.to_lowercase();

    lowered
        .unicode_words()
        .filter(|word| !STOPWORDS.contains(word))
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_splits_on_boundaries() {
        let text = "The quick brown fox jumps. It lands on the lazy dog! Does the dog mind?";
        let result = sentences(text);
        assert_eq!(
            result,
            vec![
                "The quick brown fox jumps.",
                "It lands on the lazy dog!",
                "Does the dog mind?"
            ]
        );
    }

    #[test]
    fn test_sentences_collapses_internal_whitespace() {
        let text = "A sentence\nsplit over\n  two lines.";
        let result = sentences(text);
        assert_eq!(result, vec!["A sentence split over two lines."]);
    }

    #[test]
    fn test_sentences_empty_input() {
        assert!(sentences("").is_empty());
        assert!(sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_preprocess_drops_stopwords_and_punctuation() {
        let result = preprocess("The cat, which was very small, sat on the mat.");
        assert_eq!(result, "cat small sat mat");
    }

    #[test]
    fn test_preprocess_keeps_contractions_whole() {
        // "don't" is a single segmented word and a stopword.
        let result = preprocess("Don't panic about the towel.");
        assert_eq!(result, "panic towel");
    }

    #[test]
    fn test_preprocess_all_stopwords_yields_empty() {
        assert_eq!(preprocess("It is what it is."), "");
    }
}

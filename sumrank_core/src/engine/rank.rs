use unicode_segmentation::UnicodeSegmentation;

/// Damping factor for the PageRank power iteration.
pub const DAMPING: f64 = 0.85;

const MAX_ITERATIONS: usize = 100;
const TOLERANCE: f64 = 1e-6;

/// Bag-of-words cosine similarity between two preprocessed sentences.
/// Either side having no words scores 0.0.
pub fn sentence_similarity(first: &str, second: &str) -> f64 {
    let words_first: Vec<&str> = first.unicode_words().collect();
    let words_second: Vec<&str> = second.unicode_words().collect();

    if words_first.is_empty() || words_second.is_empty() {
        return 0.0;
    }

    let mut vocabulary: Vec<&str> = words_first
        .iter()
        .chain(words_second.iter())
        .copied()
        .collect();
    vocabulary.sort_unstable();
    vocabulary.dedup();

    let mut vector_first = vec![0.0_f64; vocabulary.len()];
    let mut vector_second = vec![0.0_f64; vocabulary.len()];

    for word in &words_first {
        if let Ok(index) = vocabulary.binary_search(word) {
            vector_first[index] += 1.0;
        }
    }
    for word in &words_second {
        if let Ok(index) = vocabulary.binary_search(word) {
            vector_second[index] += 1.0;
        }
    }

    let dot: f64 = vector_first
        .iter()
        .zip(&vector_second)
        .map(|(a, b)| a * b)
        .sum();
    let norm_first: f64 = vector_first.iter().map(|a| a * a).sum::<f64>().sqrt();
    let norm_second: f64 = vector_second.iter().map(|b| b * b).sum::<f64>().sqrt();

    dot / (norm_first * norm_second)
}

/// Pairwise similarity matrix over preprocessed sentences, diagonal left at 0
/// so a sentence never votes for itself.
pub fn similarity_matrix(sentences: &[String]) -> Vec<Vec<f64>> {
    let count = sentences.len();
    let mut matrix = vec![vec![0.0_f64; count]; count];

    for i in 0..count {
        for j in 0..count {
            if i == j {
                continue;
            }
            matrix[i][j] = sentence_similarity(&sentences[i], &sentences[j]);
        }
    }

    matrix
}

/// Weighted PageRank by power iteration over the similarity matrix.
/// Rows with zero total weight are dangling nodes; their mass is spread
/// uniformly. Stops when the L1 error drops below n * 1e-6 or after 100
/// iterations.
pub fn page_rank(weights: &[Vec<f64>], damping: f64) -> Vec<f64> {
    let count = weights.len();
    if count == 0 {
        return Vec::new();
    }

    let n = count as f64;
    let out_weight: Vec<f64> = weights.iter().map(|row| row.iter().sum()).collect();
    let mut scores = vec![1.0 / n; count];

    for _ in 0..MAX_ITERATIONS {
        let dangling_mass: f64 = scores
            .iter()
            .zip(&out_weight)
            .filter(|(_, &weight)| weight == 0.0)
            .map(|(score, _)| *score)
            .sum();

        let base = (1.0 - damping) / n + damping * dangling_mass / n;
        let mut next = vec![base; count];

        for i in 0..count {
            if out_weight[i] == 0.0 {
                continue;
            }
            let share = damping * scores[i] / out_weight[i];
            for j in 0..count {
                if weights[i][j] > 0.0 {
                    next[j] += share * weights[i][j];
                }
            }
        }

        let error: f64 = next
            .iter()
            .zip(&scores)
            .map(|(a, b)| (a - b).abs())
            .sum();
        scores = next;

        if error < n * TOLERANCE {
            break;
        }
    }

    scores
}

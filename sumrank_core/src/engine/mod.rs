pub mod rank;
pub mod text;

/// Extractive summarization: score sentences against each other with
/// weighted PageRank over a bag-of-words similarity graph, then keep the
/// top fraction. Returned sentences are the originals, ordered by score.
pub fn summarize_text(input: &str, fraction: f64) -> Vec<String> {
    let original_sentences = text::sentences(input);
    if original_sentences.is_empty() {
        return Vec::new();
    }

    let formatted_sentences: Vec<String> = original_sentences
        .iter()
        .map(|sentence| text::preprocess(sentence))
        .collect();

    let matrix = rank::similarity_matrix(&formatted_sentences);
    let scores = rank::page_rank(&matrix, rank::DAMPING);

    let mut ranked: Vec<(f64, &String)> = scores
        .iter()
        .copied()
        .zip(original_sentences.iter())
        .collect();
    // Score descending, sentence text as the tie-breaker.
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| b.1.cmp(a.1)));

    let keep = sentence_budget(original_sentences.len(), fraction);

    ranked
        .into_iter()
        .take(keep)
        .map(|(_, sentence)| sentence.clone())
        .collect()
}

/// floor(count * fraction), clamped to [1, count].
fn sentence_budget(count: usize, fraction: f64) -> usize {
    let target = (count as f64 * fraction).floor();
    if target >= 1.0 {
        (target as usize).min(count)
    } else {
        1
    }
}

/// Tags shown on a card before the rest collapse into `+N`.
pub(crate) const MAX_VISIBLE_TAGS: usize = 4;

/// Cuts `s` to at most `max` characters, ending in an ellipsis when cut.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }

    let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}

pub(crate) fn tagify<'a>(tags: impl IntoIterator<Item = &'a String>, max: usize) -> String {
    let tags: Vec<&String> = tags.into_iter().collect();
    let mut shown: Vec<String> = tags
        .iter()
        .take(max)
        .map(|tag| {
            let collapsed = tag.split_whitespace().collect::<Vec<_>>().join("_");
            format!("#{}", collapsed)
        })
        .collect();

    if tags.len() > max {
        shown.push(format!("+{}", tags.len() - max));
    }

    shown.join(" ")
}

pub(crate) fn badge(s: &str) -> String {
    format!("[{}]", s.to_uppercase())
}

/// Relevance as a percentage, `None` for missing or zero scores.
pub(crate) fn score_percent(score: Option<f64>) -> Option<String> {
    score
        .filter(|score| *score != 0.0)
        .map(|score| format!("{:.1}%", score * 100.0))
}

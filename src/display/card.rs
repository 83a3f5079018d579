use crate::models::NormalizedResult;
use crate::session::ViewMode;
use crate::transformers::{MAX_VISIBLE_TAGS, badge, score_percent, tagify, truncate};

const INDENT: &str = "   ";

/// Renders one result card. `index` is the 0-based position across all pages.
pub fn format(
    result: &NormalizedResult,
    index: usize,
    expanded: bool,
    description_length: usize,
    view: ViewMode,
) -> String {
    match view {
        ViewMode::Grid => compact(result, index, description_length),
        ViewMode::List => full(result, index, expanded, description_length),
    }
}

fn heading(result: &NormalizedResult, index: usize) -> String {
    let mut line = format!("{}. {}", index + 1, badge(&result.kind));
    if let Some(score) = score_percent(result.score) {
        line.push(' ');
        line.push_str(&t!("card.match", score = score));
    }
    line
}

fn compact(result: &NormalizedResult, index: usize, description_length: usize) -> String {
    let mut ret = format!("{} {}", heading(result, index), result.title);

    if !result.description.is_empty() {
        ret.push('\n');
        ret.push_str(INDENT);
        ret.push_str(&truncate(&result.description, description_length));
    }

    if !result.tags.is_empty() {
        ret.push('\n');
        ret.push_str(INDENT);
        ret.push_str(&tagify(&result.tags, MAX_VISIBLE_TAGS));
    }

    ret
}

fn full(
    result: &NormalizedResult,
    index: usize,
    expanded: bool,
    description_length: usize,
) -> String {
    let mut lines = vec![heading(result, index), format!("{INDENT}{}", result.title)];

    if !result.description.is_empty() {
        let too_long = result.description.chars().count() > description_length;
        if expanded || !too_long {
            lines.push(format!("{INDENT}{}", result.description));
        } else {
            lines.push(format!(
                "{INDENT}{}",
                truncate(&result.description, description_length)
            ));
        }

        if too_long {
            let hint = if expanded {
                t!("card.show_less")
            } else {
                t!("card.show_more")
            };
            lines.push(format!("{INDENT}({})", hint));
        }
    }

    if !result.tags.is_empty() {
        lines.push(format!("{INDENT}{}", tagify(&result.tags, MAX_VISIBLE_TAGS)));
    }

    if let Some(thumbnail) = &result.thumbnail {
        lines.push(format!("{INDENT}{}", thumbnail));
    }

    if !result.detail_url.is_empty() {
        lines.push(format!("{INDENT}{}: {}", t!("card.details"), result.detail_url));
    }

    if let Some(map_url) = &result.map_url {
        lines.push(format!("{INDENT}{}: {}", t!("card.open_map"), map_url));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> NormalizedResult {
        NormalizedResult {
            id: "a1".to_string(),
            title: "Bike lanes".to_string(),
            description: "Cycling network of the municipality, updated every night from the road register".to_string(),
            kind: "Feature Layer".to_string(),
            tags: vec!["mobility".to_string(), "bikes".to_string()],
            thumbnail: None,
            score: Some(0.831),
            detail_url: "https://example.com/item".to_string(),
            map_url: Some("https://example.com/map".to_string()),
        }
    }

    #[test]
    fn test_list_card_collapsed() {
        let card = format(&result(), 2, false, 50, ViewMode::List);
        let lines: Vec<&str> = card.lines().collect();
        assert!(lines[0].starts_with("3. [FEATURE LAYER] 83.1%"));
        assert_eq!(lines[1], "   Bike lanes");
        assert!(lines[2].ends_with('…'));
        assert!(lines[2].chars().count() <= 50 + INDENT.len());
        assert!(card.contains("#mobility #bikes"));
        assert!(card.contains("https://example.com/item"));
        assert!(card.contains("https://example.com/map"));
    }

    #[test]
    fn test_list_card_expanded_shows_whole_description() {
        let card = format(&result(), 0, true, 50, ViewMode::List);
        assert!(card.contains("updated every night from the road register"));
    }

    #[test]
    fn test_grid_card_is_compact() {
        let card = format(&result(), 0, true, 50, ViewMode::Grid);
        assert!(card.starts_with("1. [FEATURE LAYER]"));
        assert!(card.contains("Bike lanes"));
        assert!(!card.contains("https://example.com/map"));
        assert_eq!(card.lines().count(), 3);
    }

    #[test]
    fn test_card_without_score_or_links() {
        let bare = NormalizedResult::default();
        let card = format(&bare, 0, false, 100, ViewMode::List);
        assert_eq!(card, "1. [LAYER]\n   Untitled");
    }
}

use crate::config;
use crate::display::{card, pagination};
use crate::session::SearchSession;

/// Full front end: header, cards and pagination for the session's current page.
pub fn format(session: &SearchSession, display: &config::Display) -> String {
    if session.is_loading() {
        return t!("search.loading").to_string();
    }

    if let Some(error) = session.error() {
        return format!("✖ {}", error);
    }

    let page = session.page();
    let Some(query) = session.query() else {
        return String::new();
    };

    if page.total_count == 0 {
        return format!(
            "{}\n{}",
            t!("results.empty.title"),
            t!("results.empty.message")
        );
    }

    let mut ret = String::new();
    ret.push_str(&t!(
        "results.header",
        first = page.first_index.to_string(),
        last = page.last_index.to_string(),
        total = page.total_count.to_string(),
        query = query
    ));
    ret.push_str(" · ");
    ret.push_str(&t!("results.sort", sort = session.sort_by().to_string()));
    ret.push_str("\n\n");

    let offset = page.first_index.saturating_sub(1);
    let cards: Vec<String> = page
        .items
        .iter()
        .enumerate()
        .map(|(n, result)| {
            let index = offset + n;
            card::format(
                result,
                index,
                session.is_expanded(index),
                display.description_length,
                session.view_mode(),
            )
        })
        .collect();
    ret.push_str(&cards.join("\n\n"));

    if page.total_pages > 1 {
        ret.push_str("\n\n");
        ret.push_str(&pagination::format(page.current_page, page.total_pages));
    }

    ret
}

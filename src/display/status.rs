use crate::session::SearchSession;

/// One line status for the lite front end.
pub fn format(session: &SearchSession) -> String {
    if let Some(error) = session.error() {
        format!("✖ {}", error)
    } else if session.is_loading() {
        t!("search.loading").to_string()
    } else if !session.results().is_empty() {
        t!("results.count", count = session.results().len().to_string()).to_string()
    } else {
        String::new()
    }
}

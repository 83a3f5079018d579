use crate::pipeline::{PageLink, page_window};

pub fn format(current: usize, total_pages: usize) -> String {
    let mut parts: Vec<String> = Vec::new();

    if current > 1 {
        parts.push("◀".to_string());
    }

    parts.extend(page_window(current, total_pages).into_iter().map(|link| match link {
        PageLink::Page(page) if page == current => format!("[{}]", page),
        PageLink::Page(page) => page.to_string(),
        PageLink::Gap => "…".to_string(),
    }));

    if current < total_pages {
        parts.push("▶".to_string());
    }

    parts.join(" ")
}

pub(crate) mod text;

pub(crate) use text::{MAX_VISIBLE_TAGS, badge, score_percent, tagify, truncate};

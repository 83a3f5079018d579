pub mod card;
pub mod pagination;
pub mod results;
pub mod status;

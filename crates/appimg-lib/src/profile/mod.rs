mod page;
mod resolver;

pub use page::{extract_app_ids, fetch_app_ids, fetch_games_page};
pub use resolver::{ProfileError, ProfileResolver, ProfileUrl};

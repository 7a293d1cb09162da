use scraper::Html;

use crate::parse::classify::is_location_start;
use crate::parse::token::{is_layout_whitespace, tokens, Token};

/// Looks up the display name of canteen `mensa_id` in the page's location
/// `<select>`. The first matching `option` wins; an empty string means the
/// page does not list the canteen.
pub fn extract_canteen_name(document: &Html, mensa_id: &str) -> String {
    let mut location_is_next = false;

    for token in tokens(document) {
        if let Some(option) = token.start_tag_named("option") {
            location_is_next = is_location_start(option, mensa_id);
            continue;
        }
        match token {
            Token::Text(text) if location_is_next && !is_layout_whitespace(text) => {
                return text.to_owned();
            }
            _ => {}
        }
    }

    log::debug!("No location option with value {mensa_id:?} found");
    String::new()
}

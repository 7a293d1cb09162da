use scraper::Html;

use super::price::price_amount;
use crate::parse::classify::Expectation;
use crate::parse::token::{is_layout_whitespace, tokens, Token};

/// The formatted menu, built up one text token at a time.
#[derive(Debug, Default)]
struct MenuWriter {
    menu_data: String,
    new_list_item: bool,
}

impl MenuWriter {
    fn section(&mut self, text: &str) {
        self.new_list_item = true;
        self.menu_data.push_str("\n**");
        self.menu_data.push_str(text);
        self.menu_data.push_str("**\n");
    }

    fn dish(&mut self, text: &str) {
        if self.new_list_item {
            self.menu_data.push_str("* ");
            self.new_list_item = false;
        }
        self.menu_data.push_str(text);
        self.menu_data.push_str(", ");
    }

    fn price(&mut self, text: &str) {
        self.new_list_item = true;
        self.menu_data.push_str("**");
        self.menu_data.push_str(price_amount(text));
        self.menu_data.push_str("€ **\n");
    }

    fn finish(self) -> String {
        self.menu_data
    }
}

/// Turns a menu page into the markdown message body.
///
/// Every `div` start tag decides what its following text is: a section
/// title, a dish name or a price. Sections become bold headlines, the dishes
/// up to the next price share one bullet line, and the price closes that
/// line. Returns an empty string if the page has no menu.
pub fn extract_menu(document: &Html) -> String {
    let mut writer = MenuWriter::default();
    let mut expectation = Expectation::None;

    for token in tokens(document) {
        match token {
            Token::StartTag(tag) if tag.name() == "div" => {
                expectation = Expectation::from_tag(tag);
            }
            Token::Text(text) if !is_layout_whitespace(text) => match expectation.take() {
                Expectation::Section => writer.section(text),
                Expectation::Dish => writer.dish(text),
                Expectation::Price => writer.price(text),
                Expectation::None => {}
            },
            _ => {}
        }
    }

    let menu = writer.finish();
    log::trace!("Extracted menu with {} bytes", menu.len());
    menu
}

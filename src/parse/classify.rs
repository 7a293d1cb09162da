use scraper::node::Element;

// class names used by the Studentenwerk menu page
const SECTION_CLASS: &str = "menu_title";
const DISH_CLASSES: [&str; 2] = ["menu_name1", "menu_name2"];
const PRICE_CLASS: &str = "menu_price";

/// `<div class="menu_title">`, followed by a section name like "Pizza".
pub fn is_section_start(tag: &Element) -> bool {
    tag.attr("class") == Some(SECTION_CLASS)
}

/// `<div class="menu_name1">` or `menu_name2`, followed by a dish name.
pub fn is_dish_start(tag: &Element) -> bool {
    tag.attr("class")
        .is_some_and(|class| DISH_CLASSES.contains(&class))
}

/// `<div class="menu_price">`, followed by prices like "1,50 € / 2,80 €".
pub fn is_price_start(tag: &Element) -> bool {
    tag.attr("class") == Some(PRICE_CLASS)
}

/// An `option` of the location select whose text names canteen `mensa_id`.
pub fn is_location_start(tag: &Element, mensa_id: &str) -> bool {
    tag.attr("value") == Some(mensa_id)
}

/// What the next text token of a menu page stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expectation {
    #[default]
    None,
    Section,
    Dish,
    Price,
}

impl Expectation {
    pub fn from_tag(tag: &Element) -> Self {
        if is_section_start(tag) {
            Self::Section
        } else if is_dish_start(tag) {
            Self::Dish
        } else if is_price_start(tag) {
            Self::Price
        } else {
            Self::None
        }
    }

    /// Hands out the current expectation and resets it.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

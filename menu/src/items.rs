use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

/// The fixed set of menu sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Kebab,
    Burger,
    Zapiekanka,
    Fries,
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown category tag: {0}")]
pub struct UnknownCategory(String);

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Kebab,
        Category::Burger,
        Category::Zapiekanka,
        Category::Fries,
    ];

    /// Stable lowercase tag, used as the expansion-set key.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Kebab => "kebab",
            Category::Burger => "burger",
            Category::Zapiekanka => "zapiekanka",
            Category::Fries => "fries",
        }
    }

    /// Section heading shown to customers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Kebab => "Kebaby",
            Category::Burger => "Burgery",
            Category::Zapiekanka => "Zapiekanki",
            Category::Fries => "Frytki",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.tag() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One orderable item. Immutable after startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in major units (złoty).
    pub price: Decimal,
    pub category: Category,
    /// Display asset URL. Load failures are a presentation concern.
    pub image: String,
}

fn entry(
    id: &str,
    name: &str,
    description: &str,
    price: Decimal,
    category: Category,
    image: &str,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        image: image.to_string(),
    }
}

const KEBAB_IMAGE: &str =
    "https://images.unsplash.com/photo-1529006557810-274b9b2fc783?w=300&h=200&fit=crop";
const BURGER_IMAGE: &str =
    "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=300&h=200&fit=crop";
const ZAPIEKANKA_IMAGE: &str =
    "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=300&h=200&fit=crop";
const FRIES_IMAGE: &str =
    "https://images.unsplash.com/photo-1573080496219-bb080dd4f877?w=300&h=200&fit=crop";

/// The storefront's menu table.
pub fn sample_menu() -> Vec<MenuItem> {
    vec![
        entry(
            "1",
            "Kebab Klasyczny",
            "Świeże mięso, warzywa, sos czosnkowy",
            dec!(18.00),
            Category::Kebab,
            KEBAB_IMAGE,
        ),
        entry(
            "2",
            "Kebab Ostry",
            "Mięso, warzywa, sos ostry, papryczka jalapeño",
            dec!(20.00),
            Category::Kebab,
            KEBAB_IMAGE,
        ),
        entry(
            "3",
            "Burger Klasyczny",
            "Wołowina, ser, sałata, pomidor, cebula",
            dec!(22.00),
            Category::Burger,
            BURGER_IMAGE,
        ),
        entry(
            "4",
            "Burger BBQ",
            "Wołowina, ser, bekon, sos BBQ, cebula karmelizowana",
            dec!(26.00),
            Category::Burger,
            BURGER_IMAGE,
        ),
        entry(
            "5",
            "Zapiekanka Klasyczna",
            "Pieczarki, ser, ketchup, majonez",
            dec!(12.00),
            Category::Zapiekanka,
            ZAPIEKANKA_IMAGE,
        ),
        entry(
            "6",
            "Zapiekanka z Kiełbasą",
            "Kiełbasa, pieczarki, ser, ketchup",
            dec!(15.00),
            Category::Zapiekanka,
            ZAPIEKANKA_IMAGE,
        ),
        entry(
            "7",
            "Frytki Małe",
            "Chrupiące frytki z solą",
            dec!(8.00),
            Category::Fries,
            FRIES_IMAGE,
        ),
        entry(
            "8",
            "Frytki Duże",
            "Duża porcja chrupiących frytek",
            dec!(12.00),
            Category::Fries,
            FRIES_IMAGE,
        ),
    ]
}

/// Items belonging to one menu section, in table order.
pub fn items_in(menu: &[MenuItem], category: Category) -> Vec<&MenuItem> {
    menu.iter().filter(|item| item.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tag_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.tag().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert_eq!(
            "pizza".parse::<Category>(),
            Err(UnknownCategory("pizza".to_string()))
        );
    }

    #[test]
    fn test_menu_ids_unique() {
        let menu = sample_menu();
        for item in &menu {
            assert_eq!(menu.iter().filter(|other| other.id == item.id).count(), 1);
        }
    }

    #[test]
    fn test_every_category_has_items() {
        let menu = sample_menu();
        for category in Category::ALL {
            assert_eq!(items_in(&menu, category).len(), 2);
        }
    }
}

//! Read-only mock restaurant catalog used to suggest pickup destinations.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Chicken,
    Pizza,
    Korean,
    Snacks,
    Cafe,
    Japanese,
    Western,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Chicken,
        Category::Pizza,
        Category::Korean,
        Category::Snacks,
        Category::Cafe,
        Category::Japanese,
        Category::Western,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Chicken => "chicken",
            Self::Pizza => "pizza",
            Self::Korean => "korean",
            Self::Snacks => "snacks",
            Self::Cafe => "cafe",
            Self::Japanese => "japanese",
            Self::Western => "western",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Chicken => "Chicken",
            Self::Pizza => "Pizza",
            Self::Korean => "Korean",
            Self::Snacks => "Street Snacks",
            Self::Cafe => "Cafe & Dessert",
            Self::Japanese => "Japanese",
            Self::Western => "Western",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key.trim()))
    }
}

pub struct MenuItem {
    pub name: &'static str,
    pub price: u32,
}

pub struct Restaurant {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub rating: f32,
    pub delivery_time: &'static str,
    pub min_order: u32,
    pub menu: &'static [MenuItem],
}

pub const RESTAURANTS: &[Restaurant] = &[
    Restaurant {
        id: "r1",
        name: "Golden Olive Chicken",
        category: Category::Chicken,
        rating: 4.8,
        delivery_time: "40-50 min",
        min_order: 15000,
        menu: &[
            MenuItem { name: "Golden Olive Chicken", price: 20000 },
            MenuItem { name: "Spicy Glazed Chicken", price: 21000 },
        ],
    },
    Restaurant {
        id: "r2",
        name: "Domino's Pizza",
        category: Category::Pizza,
        rating: 4.7,
        delivery_time: "30-40 min",
        min_order: 20000,
        menu: &[
            MenuItem { name: "Potato Pizza", price: 25000 },
            MenuItem { name: "Pepperoni Pizza", price: 23000 },
        ],
    },
    Restaurant {
        id: "r3",
        name: "Yupdduk Tteokbokki",
        category: Category::Snacks,
        rating: 4.9,
        delivery_time: "30-45 min",
        min_order: 14000,
        menu: &[
            MenuItem { name: "Yupgi Tteokbokki", price: 14000 },
            MenuItem { name: "Assorted Fritters", price: 4000 },
        ],
    },
    Restaurant {
        id: "r4",
        name: "Mega Coffee",
        category: Category::Cafe,
        rating: 4.6,
        delivery_time: "20-30 min",
        min_order: 8000,
        menu: &[
            MenuItem { name: "Americano", price: 2000 },
            MenuItem { name: "Cafe Latte", price: 3500 },
        ],
    },
    Restaurant {
        id: "r5",
        name: "McDonald's",
        category: Category::Western,
        rating: 4.5,
        delivery_time: "25-35 min",
        min_order: 10000,
        menu: &[
            MenuItem { name: "Big Mac Set", price: 8900 },
            MenuItem { name: "McSpicy Shanghai Set", price: 8900 },
        ],
    },
    Restaurant {
        id: "r6",
        name: "Bonjuk",
        category: Category::Korean,
        rating: 4.7,
        delivery_time: "30-40 min",
        min_order: 12000,
        menu: &[
            MenuItem { name: "Abalone Porridge", price: 15000 },
            MenuItem { name: "Beef Vegetable Porridge", price: 11000 },
        ],
    },
    Restaurant {
        id: "r7",
        name: "Sushi Ya",
        category: Category::Japanese,
        rating: 4.8,
        delivery_time: "40-50 min",
        min_order: 20000,
        menu: &[
            MenuItem { name: "Chef's Sushi Set", price: 22000 },
            MenuItem { name: "Salmon Don", price: 16000 },
        ],
    },
];

/// Restaurants in catalog order, optionally limited to one category.
pub fn list_restaurants(category: Option<Category>) -> Vec<&'static Restaurant> {
    RESTAURANTS
        .iter()
        .filter(|r| category.is_none_or(|c| r.category == c))
        .collect()
}

pub fn find_restaurant(name: &str) -> Option<&'static Restaurant> {
    let name = name.trim();
    RESTAURANTS
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(name))
}

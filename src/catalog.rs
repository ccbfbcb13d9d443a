//! Shop and Category Vocabularies
//!
//! Fixed option lists offered by the form and filter selects.

/// A shop an item can be bought at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shop {
    Migros,
    Carrefour,
    Bim,
    Sok,
    A101,
}

impl Shop {
    pub const ALL: [Shop; 5] = [Shop::Migros, Shop::Carrefour, Shop::Bim, Shop::Sok, Shop::A101];

    pub fn id(&self) -> u32 {
        match self {
            Shop::Migros => 0,
            Shop::Carrefour => 1,
            Shop::Bim => 2,
            Shop::Sok => 3,
            Shop::A101 => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shop::Migros => "Migros",
            Shop::Carrefour => "Carrefour",
            Shop::Bim => "BİM",
            Shop::Sok => "ŞOK",
            Shop::A101 => "A-101",
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// `(id, label)` pairs for a select
    pub fn options() -> Vec<(u32, &'static str)> {
        Self::ALL.iter().map(|s| (s.id(), s.name())).collect()
    }
}

/// Aisle-style grouping for an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Elektirik,
    Sarkuteri,
    Bakliyat,
    Firin,
    Meyve,
    Sebze,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Elektirik,
        Category::Sarkuteri,
        Category::Bakliyat,
        Category::Firin,
        Category::Meyve,
        Category::Sebze,
    ];

    pub fn id(&self) -> u32 {
        match self {
            Category::Elektirik => 0,
            Category::Sarkuteri => 1,
            Category::Bakliyat => 2,
            Category::Firin => 3,
            Category::Meyve => 4,
            Category::Sebze => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Elektirik => "Elektirik",
            Category::Sarkuteri => "Şarküteri",
            Category::Bakliyat => "Bakliyat",
            Category::Firin => "Fırın",
            Category::Meyve => "Meyve",
            Category::Sebze => "Sebze",
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn options() -> Vec<(u32, &'static str)> {
        Self::ALL.iter().map(|c| (c.id(), c.name())).collect()
    }
}

/// Parse the `value` of a catalog `<select>`; the empty placeholder option maps to `None`
pub fn parse_option_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable_and_unique() {
        let shop_ids: Vec<u32> = Shop::ALL.iter().map(Shop::id).collect();
        assert_eq!(shop_ids, vec![0, 1, 2, 3, 4]);
        let category_ids: Vec<u32> = Category::ALL.iter().map(Category::id).collect();
        assert_eq!(category_ids, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_from_id_round_trips_labels() {
        assert_eq!(Shop::from_id(2).map(|s| s.name()), Some("BİM"));
        assert_eq!(Category::from_id(1).map(|c| c.name()), Some("Şarküteri"));
        assert_eq!(Shop::from_id(9), None);
    }

    #[test]
    fn test_placeholder_option_is_unset() {
        assert_eq!(parse_option_id(""), None);
        assert_eq!(parse_option_id("3"), Some(3));
    }
}

//! Client-Side Product Filtering
//!
//! The product table keeps one cached array and recomputes a derived view on
//! every keystroke or selection change. O(n) per pass, fine for the row counts
//! this dashboard sees; display slices to [`MAX_TABLE_ROWS`].

use super::global::Product;

/// Rows shown in the product table, regardless of how many matched
pub const MAX_TABLE_ROWS: usize = 50;

/// ABC curve selector state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CurveFilter {
    #[default]
    All,
    A,
    B,
    C,
}

impl CurveFilter {
    /// Parse the `<select>` value ("todas" | "A" | "B" | "C")
    pub fn from_value(value: &str) -> Self {
        match value {
            "A" | "a" => Self::A,
            "B" | "b" => Self::B,
            "C" | "c" => Self::C,
            _ => Self::All,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::A => product.curve == "A",
            Self::B => product.curve == "B",
            Self::C => product.curve == "C",
        }
    }

    /// Query value for the live feed endpoint
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::All => "todas",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

/// Sort order for the derived view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    StockAsc,
    StockDesc,
    PriceDesc,
}

impl SortKey {
    pub fn from_value(value: &str) -> Self {
        match value {
            "stock_asc" => Self::StockAsc,
            "stock_desc" => Self::StockDesc,
            "price_desc" => Self::PriceDesc,
            _ => Self::Name,
        }
    }
}

/// Combined filter state for the product table
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductFilter {
    pub curve: CurveFilter,
    pub search: String,
    pub sort: SortKey,
}

impl ProductFilter {
    /// Recompute the derived view: curve AND search must both match.
    /// Search is case-insensitive over sku and name.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let needle = self.search.trim().to_lowercase();

        let mut view: Vec<Product> = products
            .iter()
            .filter(|p| self.curve.matches(p))
            .filter(|p| {
                needle.is_empty()
                    || p.sku.to_lowercase().contains(&needle)
                    || p.name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        match self.sort {
            SortKey::Name => view.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::StockAsc => view.sort_by_key(|p| p.stock),
            SortKey::StockDesc => view.sort_by_key(|p| std::cmp::Reverse(p.stock)),
            SortKey::PriceDesc => {
                view.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(std::cmp::Ordering::Equal))
            }
        }

        view
    }

    /// Filter expression sent to the live feed endpoint (`?filtros=`)
    pub fn live_query(&self) -> String {
        let mut query = format!("curva={}", self.curve.as_query());
        let search = self.search.trim();
        if !search.is_empty() {
            query.push_str(";busca=");
            query.push_str(search);
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sku: &str, name: &str, stock: i64, price: f64, curve: &str) -> Product {
        Product {
            sku: sku.to_string(),
            name: name.to_string(),
            stock,
            price,
            curve: curve.to_string(),
            location: String::new(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("SKU001", "Xadrez Magnético", 3, 89.9, "A"),
            product("SKU002", "Mouse Gamer RGB", 12, 149.9, "A"),
            product("SKU003", "Xícara Térmica", 40, 29.9, "B"),
            product("X-404", "Cabo USB-C", 100, 9.9, "C"),
        ]
    }

    #[test]
    fn curve_and_search_are_conjunctive() {
        let filter = ProductFilter {
            curve: CurveFilter::A,
            search: "x".to_string(),
            ..Default::default()
        };

        let view = filter.apply(&sample());
        // "Xícara" is curve B and "X-404" is curve C: both excluded
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].sku, "SKU001");
    }

    #[test]
    fn search_matches_sku_or_name_case_insensitive() {
        let filter = ProductFilter {
            search: "usb".to_string(),
            ..Default::default()
        };
        let view = filter.apply(&sample());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].sku, "X-404");
    }

    #[test]
    fn empty_filter_returns_everything_sorted_by_name() {
        let view = ProductFilter::default().apply(&sample());
        assert_eq!(view.len(), 4);
        assert_eq!(view[0].name, "Cabo USB-C");
    }

    #[test]
    fn sort_orders() {
        let products = sample();

        let by_stock = ProductFilter {
            sort: SortKey::StockAsc,
            ..Default::default()
        }
        .apply(&products);
        assert_eq!(by_stock[0].stock, 3);

        let by_price = ProductFilter {
            sort: SortKey::PriceDesc,
            ..Default::default()
        }
        .apply(&products);
        assert_eq!(by_price[0].price, 149.9);
    }

    #[test]
    fn no_match_yields_empty_view() {
        let filter = ProductFilter {
            search: "inexistente".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn live_query_includes_only_active_parts() {
        let base = ProductFilter::default();
        assert_eq!(base.live_query(), "curva=todas");

        let narrowed = ProductFilter {
            curve: CurveFilter::A,
            search: " mouse ".to_string(),
            ..Default::default()
        };
        assert_eq!(narrowed.live_query(), "curva=A;busca=mouse");
    }

    #[test]
    fn select_value_parsing() {
        assert_eq!(CurveFilter::from_value("todas"), CurveFilter::All);
        assert_eq!(CurveFilter::from_value("A"), CurveFilter::A);
        assert_eq!(CurveFilter::from_value("b"), CurveFilter::B);
        assert_eq!(SortKey::from_value("price_desc"), SortKey::PriceDesc);
        assert_eq!(SortKey::from_value("anything"), SortKey::Name);
    }
}

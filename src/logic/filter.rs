//! Predicate evaluator: one pure boolean rule per product.

use crate::state::FilterState;
use crate::state::types::{Availability, CategoryToken, LOW_STOCK_MAX, Product};

/// What: Decide whether a product passes the full constraint set.
///
/// Inputs:
/// - `product`: Candidate product.
/// - `filters`: Active constraint set.
///
/// Output:
/// - `true` when every constraint passes; short-circuit AND in the order
///   search, price, rating, categories, discount, availability.
///
/// Details:
/// - Pure and side-effect free, so results are stable for memoization.
/// - Category tokens are OR-combined among themselves (any token suffices),
///   then ANDed with the rest.
#[must_use]
pub fn matches(product: &Product, filters: &FilterState) -> bool {
    search_matches(&product.title, &filters.search)
        && product.price >= filters.min_price
        && product.price <= filters.max_price
        && product.rating >= f64::from(filters.min_rating)
        && categories_match(product, &filters.categories)
        && product.discount >= filters.discount_floor
        && availability_matches(product.stock, filters.availability)
}

/// Case-insensitive substring match; an empty query passes everything.
fn search_matches(title: &str, query: &str) -> bool {
    let q = query.trim();
    q.is_empty() || title.to_lowercase().contains(&q.to_lowercase())
}

/// Any-token match across the active category tokens; empty set passes.
fn categories_match(product: &Product, tokens: &[CategoryToken]) -> bool {
    tokens.is_empty() || tokens.iter().any(|t| token_matches(product, t))
}

/// Kind-specific matching rule for a single category token.
fn token_matches(product: &Product, token: &CategoryToken) -> bool {
    match token {
        CategoryToken::Id(id) => product.category.id == *id,
        CategoryToken::Slug(slug) => product.category.slug.eq_ignore_ascii_case(slug),
        CategoryToken::MainGroup(group) => product
            .category
            .main_group
            .as_deref()
            .is_some_and(|g| g.eq_ignore_ascii_case(group)),
    }
}

/// Stock rule per availability mode; low stock is `0 < stock <= 5`.
const fn availability_matches(stock: u32, availability: Availability) -> bool {
    match availability {
        Availability::All => true,
        Availability::InStock => stock > 0,
        Availability::LowStock => stock > 0 && stock <= LOW_STOCK_MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::CategoryRef;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                title: "5 Mukhi Rudraksha".into(),
                price: 100.0,
                discount: 10,
                stock: 5,
                rating: 4.2,
                category: CategoryRef {
                    id: 1,
                    title: "Rudraksha".into(),
                    slug: "rudraksha".into(),
                    main_group: Some("beads".into()),
                },
                ..Default::default()
            },
            Product {
                id: 2,
                title: "Tulsi Mala".into(),
                price: 5000.0,
                discount: 0,
                stock: 0,
                rating: 3.0,
                category: CategoryRef {
                    id: 2,
                    title: "Mala".into(),
                    slug: "mala".into(),
                    main_group: None,
                },
                ..Default::default()
            },
        ]
    }

    fn filtered(filters: &FilterState) -> Vec<u64> {
        catalog().iter().filter(|p| matches(p, filters)).map(|p| p.id).collect()
    }

    #[test]
    /// What: The unconstrained default passes everything; a price cap narrows.
    ///
    /// - Input: Defaults, then max price 200
    /// - Output: Both products first; only id 1 under the cap
    fn price_range_is_inclusive() {
        let mut f = FilterState::default();
        assert_eq!(filtered(&f), vec![1, 2]);
        f.set_price_range(0.0, 200.0);
        assert_eq!(filtered(&f), vec![1]);
        // Inclusive at the boundary
        f.set_price_range(100.0, 100.0);
        assert_eq!(filtered(&f), vec![1]);
    }

    #[test]
    /// What: Search is a case-insensitive substring on the title.
    ///
    /// - Input: Query "mukhi" in mixed case
    /// - Output: Only the rudraksha product matches; empty query passes all
    fn search_case_insensitive_substring() {
        let mut f = FilterState::default();
        f.search = "MuKhI".into();
        assert_eq!(filtered(&f), vec![1]);
        f.search = "   ".into();
        assert_eq!(filtered(&f), vec![1, 2]);
    }

    #[test]
    /// What: Rating floor of 0 is unconstrained; 4 excludes lower averages.
    ///
    /// - Input: min_rating 0, then 4
    /// - Output: All first, then only the 4.2-rated product
    fn rating_floor() {
        let mut f = FilterState::default();
        f.min_rating = 0;
        assert_eq!(filtered(&f), vec![1, 2]);
        f.min_rating = 4;
        assert_eq!(filtered(&f), vec![1]);
    }

    #[test]
    /// What: Category tokens OR among themselves and AND with other filters.
    ///
    /// - Input: Slug token "mala" alone, then both slugs, then slug + search
    /// - Output: Single match, both, then the intersection
    fn category_or_semantics() {
        let mut f = FilterState::default();
        f.toggle_category_token(CategoryToken::Slug("mala".into()));
        assert_eq!(filtered(&f), vec![2]);
        f.toggle_category_token(CategoryToken::Slug("rudraksha".into()));
        assert_eq!(filtered(&f), vec![1, 2]);
        f.search = "mukhi".into();
        assert_eq!(filtered(&f), vec![1]);
    }

    #[test]
    /// What: Main-group tokens only match products carrying that group.
    ///
    /// - Input: MainGroup "beads" (mixed case), then an id token
    /// - Output: Products without a group never match a group token
    fn main_group_and_id_tokens() {
        let mut f = FilterState::default();
        f.toggle_category_token(CategoryToken::MainGroup("BEADS".into()));
        assert_eq!(filtered(&f), vec![1]);
        let mut g = FilterState::default();
        g.toggle_category_token(CategoryToken::Id(2));
        assert_eq!(filtered(&g), vec![2]);
    }

    #[test]
    /// What: Discount floor excludes products below the threshold.
    ///
    /// - Input: discount_floor 5 against discounts 10 and 0
    /// - Output: Only id 1 remains
    fn discount_floor_scenario() {
        let mut f = FilterState::default();
        f.discount_floor = 5;
        assert_eq!(filtered(&f), vec![1]);
    }

    #[test]
    /// What: Availability modes gate on the stock count.
    ///
    /// - Input: in-stock, then low-stock against stocks 5 and 0
    /// - Output: id 2 (stock 0) excluded by both; stock 5 counts as low
    fn availability_scenarios() {
        let mut f = FilterState::default();
        f.availability = Availability::InStock;
        assert_eq!(filtered(&f), vec![1]);
        f.availability = Availability::LowStock;
        assert_eq!(filtered(&f), vec![1]);
    }
}

//! Catalog query/sort service.
//!
//! A pure function of (catalog snapshot, text filter, sort field, direction):
//! filter first, then sort. No hidden state and no I/O: the repository hands
//! this module a snapshot and the router hands it the request parameters.

use std::cmp::Ordering;

use crate::models::Shirt;

/// Field the listing is ordered by.
///
/// Unknown field names fall back to [`SortField::TeamName`], a documented
/// default rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    TeamName,
    Price,
    EnvironmentalImpact,
}

impl SortField {
    /// Parse a query-string value, falling back to the default field.
    #[must_use]
    pub fn parse(param: Option<&str>) -> Self {
        match param {
            Some("price") => Self::Price,
            Some("environmental_impact" | "impact") => Self::EnvironmentalImpact,
            _ => Self::TeamName,
        }
    }

    /// The query-string value for this field.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::TeamName => "team_name",
            Self::Price => "price",
            Self::EnvironmentalImpact => "environmental_impact",
        }
    }
}

/// Listing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a query-string value, falling back to ascending.
    #[must_use]
    pub fn parse(param: Option<&str>) -> Self {
        match param {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// The query-string value for this order.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A parsed listing request.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Case-insensitive substring filter on the team name.
    pub text: Option<String>,
    pub field: SortField,
    pub order: SortOrder,
}

/// Filter and sort a catalog snapshot.
///
/// The ordering is total (shirt id breaks ties), so for team name and price
/// the descending listing is exactly the reverse of the ascending one.
/// Shirts without an environmental-impact score sort last in both
/// directions.
#[must_use]
pub fn select(catalog: &[Shirt], query: &CatalogQuery) -> Vec<Shirt> {
    let mut shirts: Vec<Shirt> = catalog
        .iter()
        .filter(|shirt| matches_text(shirt, query.text.as_deref()))
        .cloned()
        .collect();
    shirts.sort_by(|a, b| compare(a, b, query.field, query.order));
    shirts
}

fn matches_text(shirt: &Shirt, text: Option<&str>) -> bool {
    match text {
        None => true,
        Some(t) => {
            t.is_empty()
                || shirt
                    .team_name
                    .to_lowercase()
                    .contains(&t.to_lowercase())
        }
    }
}

fn compare(a: &Shirt, b: &Shirt, field: SortField, order: SortOrder) -> Ordering {
    match field {
        SortField::TeamName => directed(
            a.team_name
                .to_lowercase()
                .cmp(&b.team_name.to_lowercase())
                .then(id_order(a, b)),
            order,
        ),
        SortField::Price => directed(a.price.cmp(&b.price).then(id_order(a, b)), order),
        SortField::EnvironmentalImpact => match (a.environmental_impact, b.environmental_impact) {
            (Some(x), Some(y)) => directed(x.cmp(&y).then(id_order(a, b)), order),
            // Missing scores sort last regardless of direction.
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => id_order(a, b),
        },
    }
}

fn id_order(a: &Shirt, b: &Shirt) -> Ordering {
    a.id.as_i32().cmp(&b.id.as_i32())
}

const fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use kitlocker_core::{Price, ShirtId, UserId};
    use rust_decimal::Decimal;

    use super::*;

    fn shirt(id: i32, team: &str, pence: i64, impact_tenths: Option<i64>) -> Shirt {
        Shirt {
            id: ShirtId::new(id),
            team_name: team.to_string(),
            shirt_image: "default.jpg".to_string(),
            price: Price::from_pence(pence),
            description: format!("{team} shirt"),
            environmental_impact: impact_tenths.map(|t| Decimal::new(t, 1)),
            extended_description: None,
            owner_id: UserId::new(1),
        }
    }

    fn catalog() -> Vec<Shirt> {
        vec![
            shirt(1, "Everton", 2999, Some(65)),
            shirt(2, "AC Milan", 2999, Some(45)),
            shirt(3, "England National Team", 2999, Some(85)),
            shirt(4, "Netherlands National Team", 2999, None),
            shirt(5, "Manchester United", 2999, Some(95)),
            shirt(6, "Celtic", 2499, None),
        ]
    }

    fn ids(shirts: &[Shirt]) -> Vec<i32> {
        shirts.iter().map(|s| s.id.as_i32()).collect()
    }

    fn query(text: Option<&str>, field: SortField, order: SortOrder) -> CatalogQuery {
        CatalogQuery {
            text: text.map(str::to_string),
            field,
            order,
        }
    }

    #[test]
    fn test_default_is_team_name_ascending() {
        let result = select(&catalog(), &CatalogQuery::default());
        assert_eq!(ids(&result), vec![2, 6, 3, 1, 5, 4]);
    }

    #[test]
    fn test_team_name_desc_is_reverse_of_asc() {
        let cat = catalog();
        let mut asc = select(&cat, &query(None, SortField::TeamName, SortOrder::Asc));
        let desc = select(&cat, &query(None, SortField::TeamName, SortOrder::Desc));
        asc.reverse();
        assert_eq!(ids(&asc), ids(&desc));
    }

    #[test]
    fn test_price_desc_is_reverse_of_asc_with_duplicate_prices() {
        // Five shirts share a price, so the tiebreaker must make the
        // ordering total for reversal to hold exactly.
        let cat = catalog();
        let mut asc = select(&cat, &query(None, SortField::Price, SortOrder::Asc));
        let desc = select(&cat, &query(None, SortField::Price, SortOrder::Desc));
        asc.reverse();
        assert_eq!(ids(&asc), ids(&desc));
    }

    #[test]
    fn test_price_ascending_puts_cheapest_first() {
        let result = select(&catalog(), &query(None, SortField::Price, SortOrder::Asc));
        assert_eq!(ids(&result), vec![6, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_environmental_impact_missing_scores_sort_last_ascending() {
        let result = select(
            &catalog(),
            &query(None, SortField::EnvironmentalImpact, SortOrder::Asc),
        );
        assert_eq!(ids(&result), vec![2, 1, 3, 5, 4, 6]);
    }

    #[test]
    fn test_environmental_impact_missing_scores_sort_last_descending() {
        let result = select(
            &catalog(),
            &query(None, SortField::EnvironmentalImpact, SortOrder::Desc),
        );
        assert_eq!(ids(&result), vec![5, 3, 1, 2, 4, 6]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let result = select(&catalog(), &query(Some("national"), SortField::TeamName, SortOrder::Asc));
        assert_eq!(ids(&result), vec![3, 4]);

        let result = select(&catalog(), &query(Some("EVER"), SortField::TeamName, SortOrder::Asc));
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_filter_without_match_is_empty() {
        let result = select(&catalog(), &query(Some("Juventus"), SortField::TeamName, SortOrder::Asc));
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_composes_with_sort() {
        let result = select(&catalog(), &query(Some("e"), SortField::Price, SortOrder::Desc));
        // Everton, England, Netherlands, Manchester United, Celtic contain "e";
        // AC Milan does not.
        assert_eq!(ids(&result), vec![5, 4, 3, 1, 6]);
    }

    #[test]
    fn test_unknown_sort_field_falls_back_to_team_name() {
        assert_eq!(SortField::parse(Some("bogus")), SortField::TeamName);
        assert_eq!(SortField::parse(None), SortField::TeamName);

        let fallback = CatalogQuery {
            text: None,
            field: SortField::parse(Some("bogus")),
            order: SortOrder::parse(None),
        };
        let result = select(&catalog(), &fallback);
        assert_eq!(ids(&result), ids(&select(&catalog(), &CatalogQuery::default())));
    }

    #[test]
    fn test_unknown_sort_order_falls_back_to_ascending() {
        assert_eq!(SortOrder::parse(Some("sideways")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("desc")), SortOrder::Desc);
    }
}

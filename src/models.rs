use crate::schema::{cashiers, categories, order_products, orders, products};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(
    Queryable, Selectable, Identifiable, Insertable, Serialize, Deserialize, Clone, Debug, PartialEq,
)]
#[diesel(table_name = cashiers)]
#[serde(rename_all = "camelCase")]
pub struct Cashier {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl Cashier {
    /// First and last name separated by a single space. Never stored.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(
    Queryable, Selectable, Identifiable, Insertable, Serialize, Deserialize, Clone, Debug, PartialEq,
)]
#[diesel(table_name = categories)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub category_name: String,
}

#[derive(
    Queryable,
    Selectable,
    Identifiable,
    Associations,
    Insertable,
    Serialize,
    Deserialize,
    Clone,
    Debug,
    PartialEq,
)]
#[diesel(belongs_to(Category))]
#[diesel(table_name = products)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub price: Decimal,
    pub brand: String,
    pub category_id: i32,
}

#[derive(
    Queryable,
    Selectable,
    Identifiable,
    Associations,
    Insertable,
    Serialize,
    Deserialize,
    Clone,
    Debug,
    PartialEq,
)]
#[diesel(belongs_to(Cashier))]
#[diesel(table_name = orders)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub cashier_id: i32,
    pub paid_on_date: Option<NaiveDateTime>,
}

#[derive(
    Queryable,
    Selectable,
    Identifiable,
    Associations,
    Insertable,
    Serialize,
    Deserialize,
    Clone,
    Debug,
    PartialEq,
)]
#[diesel(belongs_to(Order))]
#[diesel(belongs_to(Product))]
#[diesel(table_name = order_products)]
#[serde(rename_all = "camelCase")]
pub struct OrderProduct {
    pub id: i32,
    pub product_id: i32,
    pub order_id: i32,
    pub quantity: i32,
}

/// Price of one line item: `quantity * price`.
pub fn line_total(quantity: i32, price: Decimal) -> Decimal {
    Decimal::from(quantity) * price
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn full_name_joins_with_single_space() {
        let cashier = Cashier {
            id: 1,
            first_name: "Will".to_string(),
            last_name: "Johnson".to_string(),
        };
        assert_eq!(cashier.full_name(), "Will Johnson");
    }

    #[test]
    fn full_name_keeps_empty_parts() {
        let cashier = Cashier {
            id: 7,
            first_name: String::new(),
            last_name: "West".to_string(),
        };
        assert_eq!(cashier.full_name(), " West");
    }

    #[test]
    fn line_total_multiplies_exactly() {
        let price = Decimal::from_str("2.99").unwrap();
        assert_eq!(line_total(7, price), Decimal::from_str("20.93").unwrap());
        assert_eq!(line_total(0, price), Decimal::ZERO);
    }

    #[test]
    fn product_price_reads_json_number() {
        let product: Product = serde_json::from_str(
            r#"{"id":1,"productName":"Doritos","price":2.99,"brand":"Frito-Lay","categoryId":1}"#,
        )
        .unwrap();
        assert_eq!(product.price, Decimal::from_str("2.99").unwrap());
    }
}

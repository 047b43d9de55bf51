use chrono::NaiveDateTime;
use corner_store_api::schema::{cashiers, order_products, orders, products};
use diesel::{AsChangeset, Insertable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Insertable, Serialize, Deserialize, Clone)]
#[diesel(table_name=cashiers)]
#[serde(rename_all = "camelCase")]
pub struct NewCashier {
    pub first_name: String,
    pub last_name: String,
}

/// Body of both product creation and product update.
#[derive(Insertable, AsChangeset, Serialize, Deserialize, Clone)]
#[diesel(table_name=products)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub product_name: String,
    pub price: Decimal,
    pub brand: String,
    pub category_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name=orders)]
pub struct NewOrderRow {
    pub cashier_id: i32,
    pub paid_on_date: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name=order_products)]
pub struct NewOrderProductRow {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderProduct {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub cashier_id: i32,
    pub paid_on_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub order_products: Vec<NewOrderProduct>,
}

impl NewOrder {
    pub fn order_row(&self) -> NewOrderRow {
        NewOrderRow {
            cashier_id: self.cashier_id,
            paid_on_date: self.paid_on_date,
        }
    }

    pub fn line_rows(&self, order_id: i32) -> Vec<NewOrderProductRow> {
        self.order_products
            .iter()
            .map(|line| NewOrderProductRow {
                order_id,
                product_id: line.product_id,
                quantity: line.quantity,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_order_reads_nested_line_items() {
        let order: NewOrder = serde_json::from_str(
            r#"{
                "cashierId": 3,
                "paidOnDate": "2024-01-16T08:00:00",
                "orderProducts": [
                    { "productId": 7, "quantity": 2 },
                    { "productId": 2, "quantity": 1 }
                ]
            }"#,
        )
        .unwrap();

        let rows = order.line_rows(12);
        assert_eq!(order.order_row().cashier_id, 3);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.order_id == 12));
        assert_eq!(rows[0].product_id, 7);
        assert_eq!(rows[1].quantity, 1);
    }

    #[test]
    fn new_order_without_line_items() {
        let order: NewOrder = serde_json::from_str(r#"{"cashierId": 1, "paidOnDate": null}"#).unwrap();
        assert!(order.paid_on_date.is_none());
        assert!(order.line_rows(1).is_empty());
    }
}

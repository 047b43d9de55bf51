//! Starting rows for a fresh store: four cashiers, four categories, ten
//! products and four paid orders. The rows keep fixed ids so the orders can
//! refer to them.

use crate::models::{Cashier, Category, Order, OrderProduct, Product};
use crate::schema::{cashiers, categories, order_products, orders, products};
use diesel::prelude::*;
use diesel::PgConnection;

const CASHIERS_JSON: &str = include_str!("cashiers.json");
const CATEGORIES_JSON: &str = include_str!("categories.json");
const PRODUCTS_JSON: &str = include_str!("products.json");
const ORDERS_JSON: &str = include_str!("orders.json");
const ORDER_PRODUCTS_JSON: &str = include_str!("order_products.json");

/// Tables whose identity sequence must move past the seeded ids.
const SEEDED_TABLES: [&str; 5] = [
    "cashiers",
    "categories",
    "products",
    "orders",
    "order_products",
];

#[derive(Debug, Clone)]
pub struct SeedData {
    pub cashiers: Vec<Cashier>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_products: Vec<OrderProduct>,
}

impl SeedData {
    pub fn load() -> serde_json::Result<Self> {
        Ok(SeedData {
            cashiers: serde_json::from_str(CASHIERS_JSON)?,
            categories: serde_json::from_str(CATEGORIES_JSON)?,
            products: serde_json::from_str(PRODUCTS_JSON)?,
            orders: serde_json::from_str(ORDERS_JSON)?,
            order_products: serde_json::from_str(ORDER_PRODUCTS_JSON)?,
        })
    }

    /// Inserts every row in one transaction, parents first.
    pub fn insert(&self, conn: &mut PgConnection) -> QueryResult<()> {
        conn.transaction(|conn| {
            diesel::insert_into(cashiers::table)
                .values(&self.cashiers)
                .execute(conn)?;
            diesel::insert_into(categories::table)
                .values(&self.categories)
                .execute(conn)?;
            diesel::insert_into(products::table)
                .values(&self.products)
                .execute(conn)?;
            diesel::insert_into(orders::table)
                .values(&self.orders)
                .execute(conn)?;
            diesel::insert_into(order_products::table)
                .values(&self.order_products)
                .execute(conn)?;

            for table in SEEDED_TABLES {
                diesel::sql_query(format!(
                    "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
                     (SELECT COALESCE(MAX(id), 1) FROM {table}))"
                ))
                .execute(conn)?;
            }
            tracing::info!(
                cashiers = self.cashiers.len(),
                products = self.products.len(),
                orders = self.orders.len(),
                "seed data inserted"
            );
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_files_parse() {
        let seed = SeedData::load().unwrap();
        assert_eq!(seed.cashiers.len(), 4);
        assert_eq!(seed.categories.len(), 4);
        assert_eq!(seed.products.len(), 10);
        assert_eq!(seed.orders.len(), 4);
        assert_eq!(seed.order_products.len(), 7);
    }

    #[test]
    fn seed_foreign_keys_resolve() {
        let seed = SeedData::load().unwrap();
        for product in &seed.products {
            assert!(seed.categories.iter().any(|c| c.id == product.category_id));
        }
        for order in &seed.orders {
            assert!(seed.cashiers.iter().any(|c| c.id == order.cashier_id));
        }
        for line in &seed.order_products {
            assert!(seed.orders.iter().any(|o| o.id == line.order_id));
            assert!(seed.products.iter().any(|p| p.id == line.product_id));
        }
    }
}

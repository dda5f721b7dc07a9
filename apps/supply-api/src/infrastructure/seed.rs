//! Static seed data and the store aggregate.
//!
//! Every collection is populated once from these seed lists, at process or
//! test-suite start. Identifiers are unique within each list by convention;
//! nothing validates that.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::domain::entities::{
    Branch, Delivery, Headquarters, Order, OrderDetail, OrderDetailDelivery, Product, Supplier,
};
use crate::domain::identifiers::{
    BranchId, DeliveryId, HeadquartersId, OrderDetailDeliveryId, OrderDetailId, OrderId, ProductId,
    SupplierId,
};
use crate::domain::store::EntityStore;

/// The eight entity stores, constructed explicitly and shared by handle.
///
/// There is no cross-store coordination: each store is independent, and no
/// referential integrity is enforced between them.
#[derive(Clone)]
pub struct Stores {
    /// Headquarters store.
    pub headquarters: Arc<EntityStore<Headquarters>>,
    /// Branch store.
    pub branches: Arc<EntityStore<Branch>>,
    /// Supplier store.
    pub suppliers: Arc<EntityStore<Supplier>>,
    /// Product store.
    pub products: Arc<EntityStore<Product>>,
    /// Order store.
    pub orders: Arc<EntityStore<Order>>,
    /// Order detail store.
    pub order_details: Arc<EntityStore<OrderDetail>>,
    /// Delivery store.
    pub deliveries: Arc<EntityStore<Delivery>>,
    /// Order-detail/delivery junction store.
    pub order_detail_deliveries: Arc<EntityStore<OrderDetailDelivery>>,
}

impl Stores {
    /// Create all stores populated from the static seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            headquarters: Arc::new(EntityStore::new(seed_headquarters())),
            branches: Arc::new(EntityStore::new(seed_branches())),
            suppliers: Arc::new(EntityStore::new(seed_suppliers())),
            products: Arc::new(EntityStore::new(seed_products())),
            orders: Arc::new(EntityStore::new(seed_orders())),
            order_details: Arc::new(EntityStore::new(seed_order_details())),
            deliveries: Arc::new(EntityStore::new(seed_deliveries())),
            order_detail_deliveries: Arc::new(EntityStore::new(seed_order_detail_deliveries())),
        }
    }

    /// Restore every store to its seed contents.
    ///
    /// Used to isolate tests; discards all intermediate mutations.
    pub fn reset_all(&self) {
        self.headquarters.reset();
        self.branches.reset();
        self.suppliers.reset();
        self.products.reset();
        self.orders.reset();
        self.order_details.reset();
        self.deliveries.reset();
        self.order_detail_deliveries.reset();
    }
}

#[allow(clippy::expect_used)]
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

/// Seed headquarters records.
#[must_use]
pub fn seed_headquarters() -> Vec<Headquarters> {
    vec![Headquarters {
        headquarters_id: HeadquartersId::new(1),
        name: "Head Office".to_string(),
        description: "Central operations and purchasing".to_string(),
        address: "1 Market Street, Springfield".to_string(),
        contact_person: "Dana Reyes".to_string(),
        email: "dana.reyes@example.com".to_string(),
        phone: "555-0100".to_string(),
    }]
}

/// Seed branch records.
#[must_use]
pub fn seed_branches() -> Vec<Branch> {
    vec![
        Branch {
            branch_id: BranchId::new(1),
            headquarters_id: HeadquartersId::new(1),
            name: "Downtown Branch".to_string(),
            description: "City-centre retail branch".to_string(),
            address: "45 Main Street, Springfield".to_string(),
            contact_person: "Sam Ortiz".to_string(),
            email: "sam.ortiz@example.com".to_string(),
            phone: "555-0101".to_string(),
        },
        Branch {
            branch_id: BranchId::new(2),
            headquarters_id: HeadquartersId::new(1),
            name: "Harbor Branch".to_string(),
            description: "Waterfront warehouse outlet".to_string(),
            address: "12 Pier Road, Springfield".to_string(),
            contact_person: "Lee Nakamura".to_string(),
            email: "lee.nakamura@example.com".to_string(),
            phone: "555-0102".to_string(),
        },
        Branch {
            branch_id: BranchId::new(3),
            headquarters_id: HeadquartersId::new(1),
            name: "Airport Branch".to_string(),
            description: "Logistics hub near the cargo terminal".to_string(),
            address: "3 Runway Avenue, Springfield".to_string(),
            contact_person: "Priya Shah".to_string(),
            email: "priya.shah@example.com".to_string(),
            phone: "555-0103".to_string(),
        },
    ]
}

/// Seed supplier records.
#[must_use]
pub fn seed_suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            supplier_id: SupplierId::new(1),
            name: "Cascade Packaging Co.".to_string(),
            description: "Cartons, tape, and packing materials".to_string(),
            contact_person: "Morgan Blake".to_string(),
            email: "sales@cascadepack.example.com".to_string(),
            phone: "555-0200".to_string(),
        },
        Supplier {
            supplier_id: SupplierId::new(2),
            name: "Ironwood Tools Ltd.".to_string(),
            description: "Hand tools and workshop hardware".to_string(),
            contact_person: "Avery Chen".to_string(),
            email: "orders@ironwoodtools.example.com".to_string(),
            phone: "555-0201".to_string(),
        },
        Supplier {
            supplier_id: SupplierId::new(3),
            name: "Northfield Office Supply".to_string(),
            description: "Stationery and office consumables".to_string(),
            contact_person: "Jordan Ellis".to_string(),
            email: "support@northfield.example.com".to_string(),
            phone: "555-0202".to_string(),
        },
    ]
}

/// Seed product records.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            product_id: ProductId::new(1),
            supplier_id: SupplierId::new(1),
            name: "Shipping Carton, Medium".to_string(),
            description: "Double-wall corrugated carton, 45x30x30 cm".to_string(),
            price: dec!(2.40),
            sku: "PACK-001".to_string(),
            unit: "each".to_string(),
        },
        Product {
            product_id: ProductId::new(2),
            supplier_id: SupplierId::new(1),
            name: "Packing Tape".to_string(),
            description: "50 mm acrylic tape, 66 m roll".to_string(),
            price: dec!(1.85),
            sku: "PACK-014".to_string(),
            unit: "roll".to_string(),
        },
        Product {
            product_id: ProductId::new(3),
            supplier_id: SupplierId::new(2),
            name: "Claw Hammer".to_string(),
            description: "450 g steel claw hammer, fibreglass handle".to_string(),
            price: dec!(14.99),
            sku: "TOOL-102".to_string(),
            unit: "each".to_string(),
        },
        Product {
            product_id: ProductId::new(4),
            supplier_id: SupplierId::new(2),
            name: "Screwdriver Set".to_string(),
            description: "12-piece slotted and Phillips set".to_string(),
            price: dec!(22.50),
            sku: "TOOL-117".to_string(),
            unit: "set".to_string(),
        },
        Product {
            product_id: ProductId::new(5),
            supplier_id: SupplierId::new(3),
            name: "Copier Paper A4".to_string(),
            description: "80 gsm white, 500 sheets".to_string(),
            price: dec!(4.10),
            sku: "OFFC-201".to_string(),
            unit: "ream".to_string(),
        },
        Product {
            product_id: ProductId::new(6),
            supplier_id: SupplierId::new(3),
            name: "Whiteboard Markers".to_string(),
            description: "Assorted colours, pack of 8".to_string(),
            price: dec!(6.75),
            sku: "OFFC-230".to_string(),
            unit: "pack".to_string(),
        },
    ]
}

/// Seed order records.
#[must_use]
pub fn seed_orders() -> Vec<Order> {
    vec![
        Order {
            order_id: OrderId::new(1),
            branch_id: BranchId::new(1),
            order_date: date(2025, 3, 3),
            name: "Spring restock".to_string(),
            description: "Quarterly replenishment for the downtown branch".to_string(),
            status: "shipped".to_string(),
        },
        Order {
            order_id: OrderId::new(2),
            branch_id: BranchId::new(2),
            order_date: date(2025, 3, 10),
            name: "Warehouse fit-out".to_string(),
            description: "Tools and packing materials for the new racking".to_string(),
            status: "pending".to_string(),
        },
        Order {
            order_id: OrderId::new(3),
            branch_id: BranchId::new(3),
            order_date: date(2025, 3, 18),
            name: "Office consumables".to_string(),
            description: "Monthly stationery order".to_string(),
            status: "pending".to_string(),
        },
    ]
}

/// Seed order detail records.
#[must_use]
pub fn seed_order_details() -> Vec<OrderDetail> {
    vec![
        OrderDetail {
            order_detail_id: OrderDetailId::new(1),
            order_id: OrderId::new(1),
            product_id: ProductId::new(1),
            quantity: 200,
            notes: "Stack on two pallets".to_string(),
        },
        OrderDetail {
            order_detail_id: OrderDetailId::new(2),
            order_id: OrderId::new(1),
            product_id: ProductId::new(2),
            quantity: 48,
            notes: String::new(),
        },
        OrderDetail {
            order_detail_id: OrderDetailId::new(3),
            order_id: OrderId::new(2),
            product_id: ProductId::new(3),
            quantity: 12,
            notes: String::new(),
        },
        OrderDetail {
            order_detail_id: OrderDetailId::new(4),
            order_id: OrderId::new(2),
            product_id: ProductId::new(4),
            quantity: 6,
            notes: "One set per workstation".to_string(),
        },
        OrderDetail {
            order_detail_id: OrderDetailId::new(5),
            order_id: OrderId::new(3),
            product_id: ProductId::new(5),
            quantity: 30,
            notes: String::new(),
        },
    ]
}

/// Seed delivery records.
#[must_use]
pub fn seed_deliveries() -> Vec<Delivery> {
    vec![
        Delivery {
            delivery_id: DeliveryId::new(1),
            supplier_id: SupplierId::new(1),
            delivery_date: date(2025, 3, 7),
            name: "Packaging run, week 10".to_string(),
            description: "Cartons and tape for order 1".to_string(),
            status: "delivered".to_string(),
        },
        Delivery {
            delivery_id: DeliveryId::new(2),
            supplier_id: SupplierId::new(2),
            delivery_date: date(2025, 3, 21),
            name: "Tool shipment".to_string(),
            description: "Hammers and screwdriver sets".to_string(),
            status: "in transit".to_string(),
        },
        Delivery {
            delivery_id: DeliveryId::new(3),
            supplier_id: SupplierId::new(3),
            delivery_date: date(2025, 3, 25),
            name: "Stationery drop".to_string(),
            description: "Paper for the airport branch".to_string(),
            status: "scheduled".to_string(),
        },
    ]
}

/// Seed order-detail/delivery junction records.
#[must_use]
pub fn seed_order_detail_deliveries() -> Vec<OrderDetailDelivery> {
    vec![
        OrderDetailDelivery {
            order_detail_delivery_id: OrderDetailDeliveryId::new(1),
            order_detail_id: OrderDetailId::new(1),
            delivery_id: DeliveryId::new(1),
            quantity: 200,
            notes: String::new(),
        },
        OrderDetailDelivery {
            order_detail_delivery_id: OrderDetailDeliveryId::new(2),
            order_detail_id: OrderDetailId::new(2),
            delivery_id: DeliveryId::new(1),
            quantity: 48,
            notes: String::new(),
        },
        OrderDetailDelivery {
            order_detail_delivery_id: OrderDetailDeliveryId::new(3),
            order_detail_id: OrderDetailId::new(3),
            delivery_id: DeliveryId::new(2),
            quantity: 12,
            notes: "Partial; remainder follows next run".to_string(),
        },
        OrderDetailDelivery {
            order_detail_delivery_id: OrderDetailDeliveryId::new(4),
            order_detail_id: OrderDetailId::new(5),
            delivery_id: DeliveryId::new(3),
            quantity: 30,
            notes: String::new(),
        },
    ]
}

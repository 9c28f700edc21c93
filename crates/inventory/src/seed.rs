//! Fixed fallback inventory used when nothing valid has been persisted yet.

use chrono::NaiveDate;

use stockroom_core::ItemId;

use crate::item::{Category, Item, Price};

struct SeedRow {
    name: &'static str,
    category: Category,
    quantity: u64,
    price_cents: u64,
    supplier_email: &'static str,
    date_in: (i32, u32, u32),
}

const SEED: [SeedRow; 15] = [
    SeedRow { name: "Auriculares Bluetooth", category: Category::Electronics, quantity: 12, price_cents: 49900, supplier_email: "ventas@ejemplo.com", date_in: (2025, 11, 1) },
    SeedRow { name: "Camiseta de algodón", category: Category::Clothing, quantity: 35, price_cents: 19999, supplier_email: "proveedor@moda.com", date_in: (2025, 10, 20) },
    SeedRow { name: "Mouse inalámbrico", category: Category::Electronics, quantity: 20, price_cents: 28950, supplier_email: "tech@distribuidor.com", date_in: (2025, 10, 15) },
    SeedRow { name: "Teclado mecánico RGB", category: Category::Electronics, quantity: 8, price_cents: 139900, supplier_email: "contacto@hardwaremx.com", date_in: (2025, 10, 10) },
    SeedRow { name: "Pants deportivos", category: Category::Clothing, quantity: 18, price_cents: 35000, supplier_email: "ventas@ropaactiva.com", date_in: (2025, 9, 30) },
    SeedRow { name: "Botella térmica 750ml", category: Category::Home, quantity: 42, price_cents: 15900, supplier_email: "", date_in: (2025, 9, 25) },
    SeedRow { name: "Silla ergonómica", category: Category::Office, quantity: 5, price_cents: 189999, supplier_email: "oficinas@comfort.com", date_in: (2025, 9, 18) },
    SeedRow { name: "Cargador USB-C 30W", category: Category::Electronics, quantity: 30, price_cents: 24900, supplier_email: "power@techsupplier.com", date_in: (2025, 9, 10) },
    SeedRow { name: "Zapatillas running", category: Category::Clothing, quantity: 16, price_cents: 89900, supplier_email: "ventas@deportivostore.com", date_in: (2025, 9, 5) },
    SeedRow { name: "Velas aromáticas", category: Category::Home, quantity: 25, price_cents: 12990, supplier_email: "", date_in: (2025, 8, 30) },
    SeedRow { name: "Cuaderno profesional 100 hojas", category: Category::Office, quantity: 40, price_cents: 5950, supplier_email: "papeleria@mx.com", date_in: (2025, 8, 25) },
    SeedRow { name: "Sudadera con capucha", category: Category::Clothing, quantity: 22, price_cents: 49900, supplier_email: "proveedor@moda.com", date_in: (2025, 8, 15) },
    SeedRow { name: "Lámpara LED escritorio", category: Category::Home, quantity: 10, price_cents: 32900, supplier_email: "iluminacion@hogar.com", date_in: (2025, 8, 10) },
    SeedRow { name: "Paquete de plumas negras (12 pzas)", category: Category::Office, quantity: 60, price_cents: 8900, supplier_email: "", date_in: (2025, 7, 28) },
    SeedRow { name: "Power Bank 10,000 mAh", category: Category::Electronics, quantity: 14, price_cents: 69900, supplier_email: "ventas@techplus.com", date_in: (2025, 7, 20) },
];

/// The seed inventory, ids `1..=15` in intake-date order (newest first).
pub fn seed_items() -> Vec<Item> {
    SEED.iter()
        .zip(1u64..)
        .map(|(row, id)| {
            let (y, m, d) = row.date_in;
            Item {
                id: ItemId::new(id),
                name: row.name.to_string(),
                category: row.category,
                quantity: row.quantity,
                price: Price::from_cents(row.price_cents),
                supplier_email: row.supplier_email.to_string(),
                date_in: NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid calendar dates"),
            }
        })
        .collect()
}

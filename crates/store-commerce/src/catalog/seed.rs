//! The storefront's seed catalog.

use crate::catalog::{Category, Product};
use crate::money::Money;

/// Build the sixteen seed products in listing order.
pub(crate) fn seed_products() -> Vec<Product> {
    use Category::{Female, Male, Other};

    vec![
        // Male
        Product::new("m1", "Футболка Классика", Money::rub(5000), Male)
            .with_sizes(["S", "M", "L", "XL"])
            .with_colors(["Черный", "Белый"]),
        Product::new("m2", "Футболка Премиум", Money::rub(5000), Male)
            .with_sizes(["S", "M", "L", "XL"])
            .with_colors(["Черный"]),
        Product::new("m3", "Футболка Дизайн", Money::rub(5000), Male)
            .with_sizes(["M", "L", "XL"])
            .with_colors(["Белый"]),
        Product::new("m4", "Часы BASTET Empire Times", Money::rub(5000), Male)
            .with_image("https://cdn.poehali.dev/files/Screenshot_20260102-211916.png")
            .with_colors(["Черный"]),
        Product::new("m5", "Худи с капюшоном", Money::rub(15_000), Male)
            .exclusive()
            .with_sizes(["M", "L", "XL"])
            .with_colors(["Черный"]),
        Product::new("m6", "Футболка Лимитед", Money::rub(5000), Male)
            .exclusive()
            .with_limited(50)
            .with_sizes(["S", "M", "L", "XL"])
            .with_colors(["Черный", "Белый"]),
        Product::new("m7", "Джинсы Классик", Money::rub(100_000), Male)
            .with_sizes(["30", "32", "34", "36"])
            .with_colors(["Синий"]),
        Product::new("m8", "Полотенце с логотипом", Money::rub(2000), Male)
            .with_colors(["Белый"]),
        // Female
        Product::new("w1", "Худи Ёлочка", Money::rub(15_000), Female)
            .exclusive()
            .with_image(
                "https://cdn.poehali.dev/projects/7738232e-9147-4f64-ba2b-4ee1f1b8edb7/files/e1ef76f1-bb53-4d88-ac4f-362d068bd960.jpg",
            )
            .with_sizes(["XS", "S", "M", "L"])
            .with_colors(["Черный"]),
        Product::new("w2", "Платье Эксклюзив", Money::rub(100_000), Female)
            .exclusive()
            .with_image("https://cdn.poehali.dev/files/Screenshot_20260103-133333.png")
            .with_sizes(["XS", "S", "M"])
            .with_colors(["Черный", "Белый"]),
        Product::new("w3", "Часы Премиум", Money::rub(100_000), Female)
            .exclusive()
            .with_colors(["Серебро", "Золото"]),
        // Other
        Product::new("o1", "Шоппер", Money::rub(2500), Other).with_colors(["Черный", "Белый"]),
        Product::new("o2", "Брелок Стандарт", Money::rub(500), Other).with_colors(["Черный"]),
        Product::new("o3", "Брелок Баста", Money::rub(5000), Other)
            .exclusive()
            .with_colors(["Золото"]),
        Product::new("set1", "Набор Стандарт", Money::rub(20_000), Other).with_colors(["Микс"]),
        Product::new("set2", "Набор Премиум", Money::rub(50_000), Other)
            .exclusive()
            .with_colors(["Микс"]),
    ]
}

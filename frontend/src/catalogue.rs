pub const CURRENCY_SYMBOL: &str = "₦";

#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub price: String,
    pub image_path: String,
}

struct Curated {
    title: &'static str,
    naira: u64,
    image: &'static str,
}

const CURATED: [Curated; 4] = [
    Curated { title: "Heritage Coat", naira: 85_000, image: "/don-richie/coat-1.jpg" },
    Curated { title: "Silk Sash Dress", naira: 55_000, image: "/don-richie/dress-1.jpg" },
    Curated { title: "Midnight Tux", naira: 110_000, image: "/don-richie/tux-1.jpg" },
    Curated { title: "Weekend Shirt", naira: 22_000, image: "/don-richie/shirt-1.jpg" },
];

/// `85000` -> `₦85,000`
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", CURRENCY_SYMBOL, grouped)
}

/// Builds the display list. The first four entries are hand-picked pieces;
/// everything after is a generic collection item priced at
/// `(price_offset + n) * 1000`.
pub fn generate(count: usize, price_offset: u64, image_template: &str) -> Vec<Product> {
    (1..=count)
        .map(|n| match CURATED.get(n - 1) {
            Some(curated) => Product {
                id: format!("p-{}", n),
                title: curated.title.to_string(),
                price: format_price(curated.naira),
                image_path: curated.image.to_string(),
            },
            None => Product {
                id: format!("p-{}", n),
                title: format!("Collection Item {}", n),
                price: format_price(price_offset.saturating_add(n as u64).saturating_mul(1000)),
                image_path: image_template.replace("{n}", &n.to_string()),
            },
        })
        .collect()
}

/// Alternating vertical offset so the grid reads as staggered.
pub fn layout_offset_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "card-raised"
    } else {
        "card-lowered"
    }
}

pub fn badge_label(index: usize) -> &'static str {
    if index == 0 {
        "Popular"
    } else {
        "New"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const TEMPLATE: &str = "/don-richie/look-{n}.jpg";

    #[test]
    fn formats_prices_with_thousands_separators() {
        assert_eq!(format_price(0), "₦0");
        assert_eq!(format_price(999), "₦999");
        assert_eq!(format_price(22_000), "₦22,000");
        assert_eq!(format_price(110_000), "₦110,000");
        assert_eq!(format_price(1_250_000), "₦1,250,000");
    }

    #[test]
    fn curated_pieces_come_first() {
        let products = generate(4, 15, TEMPLATE);
        assert_eq!(products.len(), 4);
        assert_eq!(products[0].title, "Heritage Coat");
        assert_eq!(products[0].price, "₦85,000");
        assert_eq!(products[0].image_path, "/don-richie/coat-1.jpg");
        assert_eq!(products[2].price, "₦110,000");
        assert_eq!(products[3].id, "p-4");
    }

    #[test]
    fn full_catalogue_has_sequential_ids_and_linear_prices() {
        let offset = 18;
        let products = generate(20, offset, TEMPLATE);
        assert_eq!(products.len(), 20);

        for (i, product) in products.iter().enumerate() {
            let n = i as u64 + 1;
            assert_eq!(product.id, format!("p-{}", n));
            if n >= 5 {
                assert_eq!(product.title, format!("Collection Item {}", n));
                assert_eq!(product.price, format_price((offset + n) * 1000));
                assert_eq!(product.image_path, format!("/don-richie/look-{}.jpg", n));
            }
        }
        assert_eq!(products[4].price, "₦23,000");
        assert_eq!(products[19].price, "₦38,000");

        let unique: HashSet<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn prices_saturate_instead_of_overflowing() {
        let products = generate(6, u64::MAX - 2, TEMPLATE);
        assert_eq!(products[4].price, format_price(u64::MAX));
        assert_eq!(products[5].price, "₦18,446,744,073,709,551,615");
    }

    #[test]
    fn small_counts_truncate_curated_list() {
        assert!(generate(0, 15, TEMPLATE).is_empty());
        let two = generate(2, 15, TEMPLATE);
        assert_eq!(two.len(), 2);
        assert_eq!(two[1].title, "Silk Sash Dress");
    }

    #[test]
    fn layout_alternates_by_parity() {
        assert_eq!(layout_offset_class(0), "card-raised");
        assert_eq!(layout_offset_class(1), "card-lowered");
        assert_eq!(layout_offset_class(6), "card-raised");
        assert_eq!(badge_label(0), "Popular");
        assert_eq!(badge_label(3), "New");
    }
}

//! Canonical Elegance product dataset.

use crate::catalog::{Category, Product};
use crate::price::Price;

const BRAND: &str = "Elegance";

pub(crate) fn products() -> Vec<Product> {
    vec![
        Product::new("1", "Midnight Elegance", Price::new(6500), Category::Evening)
            .with_original_price(Price::new(8500))
            .with_image("/assets/perfume-1.jpg")
            .with_rating(4.8, 234)
            .with_scent("A captivating blend of jasmine, vanilla, and sandalwood")
            .with_description(
                "Indulge in the mysterious allure of Midnight Elegance, a sophisticated fragrance \
                 that embodies the essence of twilight romance. This enchanting perfume opens with \
                 fresh bergamot before revealing a heart of intoxicating jasmine and warm vanilla.",
            )
            .with_features([
                "Long-lasting 8-12 hours",
                "50ml Eau de Parfum",
                "Luxurious glass bottle",
                "Perfect for evening wear",
            ])
            .with_brand(BRAND),
        Product::new("2", "Golden Aurora", Price::new(7200), Category::Luxury)
            .with_image("/assets/perfume-2.jpg")
            .with_rating(4.9, 189)
            .with_scent("Warm amber and rose petals with hints of bergamot")
            .with_description(
                "Experience the radiant beauty of dawn with Golden Aurora, a luminous fragrance \
                 that captures the first golden rays of sunlight. This exquisite blend combines \
                 precious amber with delicate rose petals, creating an aura of timeless elegance.",
            )
            .with_features([
                "Premium ingredients",
                "All-day longevity",
                "Handcrafted bottle",
                "Suitable for all occasions",
            ])
            .with_brand(BRAND),
        Product::new("3", "Urban Noir", Price::new(5500), Category::Casual)
            .with_original_price(Price::new(7000))
            .with_image("/assets/perfume-3.jpg")
            .with_rating(4.7, 156)
            .with_scent("Modern cedar and black pepper with fresh citrus notes")
            .with_description(
                "Embrace the dynamic energy of city life with Urban Noir, a contemporary fragrance \
                 designed for the modern individual. This bold composition features aromatic cedar \
                 and spicy black pepper, balanced with invigorating citrus accents.",
            )
            .with_features([
                "Modern urban scent",
                "6-8 hours wear time",
                "Sleek packaging",
                "Perfect for daily wear",
            ])
            .with_brand(BRAND),
        Product::new("4", "Silk Whisper", Price::new(8000), Category::Luxury)
            .with_image("/assets/perfume-1.jpg")
            .with_rating(4.9, 298)
            .with_scent("Delicate white florals with powdery musk undertones")
            .with_description(
                "Discover the gentle sophistication of Silk Whisper, an ethereal fragrance that \
                 embodies pure femininity. This delicate composition features pristine white \
                 florals enhanced by soft, powdery musk that creates an irresistible aura of grace.",
            )
            .with_features([
                "Delicate floral bouquet",
                "10+ hours longevity",
                "Elegant crystal bottle",
                "Ideal for special occasions",
            ])
            .with_brand(BRAND),
        Product::new("5", "Royal Oud", Price::new(12000), Category::Premium)
            .with_image("/assets/perfume-2.jpg")
            .with_rating(5.0, 67)
            .with_scent("Rare oud wood blended with saffron and precious spices")
            .with_description(
                "Immerse yourself in the opulent world of Royal Oud, a majestic fragrance featuring \
                 the finest oud wood sourced from ancient trees. Enhanced with precious saffron and \
                 exotic spices, this is the epitome of luxury and sophistication.",
            )
            .with_features([
                "Rare oud ingredients",
                "Exceptional 12+ hour longevity",
                "Limited edition bottle",
                "Ultra-premium fragrance",
            ])
            .with_brand(BRAND),
        Product::new("6", "Fresh Breeze", Price::new(4800), Category::Casual)
            .with_image("/assets/perfume-3.jpg")
            .with_rating(4.6, 421)
            .with_scent("Crisp ocean air with mint and light floral touches")
            .with_description(
                "Revitalize your senses with Fresh Breeze, an invigorating fragrance that captures \
                 the essence of a seaside morning. This refreshing blend combines crisp ocean air \
                 with cooling mint and delicate floral notes for an energizing experience.",
            )
            .with_features([
                "Refreshing aquatic scent",
                "4-6 hours freshness",
                "Travel-friendly size",
                "Perfect for warm weather",
            ])
            .with_brand(BRAND),
    ]
}

//! The static records the page renders: services, tiers, posts, gallery
//! shots, the search index. Nothing here is ever mutated.

use chrono::NaiveDate;
use shared_types::{
    BlogPost, BookingService, CartItem, GalleryImage, MemberBenefit, MembershipTier, MenuCategory,
    MenuGroup, MenuItem, Orientation, SearchKind, SearchResult,
};

/// Section ids and menu labels, in page order.
pub fn menu_sections() -> &'static [(&'static str, &'static str)] {
    &[
        ("home", "Home"),
        ("services", "Services"),
        ("about", "About"),
        ("gallery", "Gallery"),
        ("blog", "Blog"),
        ("contact", "Contact"),
    ]
}

pub fn hero_backgrounds() -> &'static [&'static str] {
    &[
        "https://images.unsplash.com/photo-1560066984-138dadb4c035?auto=format&fit=crop&q=80",
        "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?auto=format&fit=crop&q=80",
        "https://images.unsplash.com/photo-1527799820374-dcf8d9d4a388?auto=format&fit=crop&q=80",
    ]
}

pub fn booking_services() -> Vec<BookingService> {
    fn service(id: &str, name: &str, duration: &str, price: f64) -> BookingService {
        BookingService {
            id: id.to_string(),
            name: name.to_string(),
            duration: duration.to_string(),
            price,
        }
    }

    vec![
        service("haircut", "Luxury Haircut", "1h", 2999.0),
        service("facial", "Premium Facial", "1.5h", 3999.0),
        service("massage", "Relaxation Massage", "1h", 4999.0),
        service("bridal", "Bridal Package", "4h", 24999.0),
    ]
}

pub fn time_slots() -> &'static [&'static str] {
    &[
        "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "01:00 PM", "02:00 PM", "03:00 PM",
        "04:00 PM", "05:00 PM", "06:00 PM", "07:00 PM",
    ]
}

/// The cart the page opens with.
pub fn seed_cart() -> Vec<CartItem> {
    vec![
        CartItem {
            id: "hair-treatment".to_string(),
            name: "Hair Treatment Package".to_string(),
            price: 2999.0,
            quantity: 1,
            image: None,
            category: Some("Hair Services".to_string()),
        },
        CartItem {
            id: "facial-package".to_string(),
            name: "Facial Package".to_string(),
            price: 1999.0,
            quantity: 1,
            image: None,
            category: Some("Skin & Beauty".to_string()),
        },
    ]
}

pub fn service_menu() -> Vec<MenuCategory> {
    fn item(name: &str, price: f64, duration: &str) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            price,
            duration: duration.to_string(),
        }
    }

    fn group(name: &str, items: Vec<MenuItem>) -> MenuGroup {
        MenuGroup {
            name: name.to_string(),
            items,
        }
    }

    fn category(name: &str, accent: &str, groups: Vec<MenuGroup>) -> MenuCategory {
        MenuCategory {
            name: name.to_string(),
            accent: accent.to_string(),
            groups,
        }
    }

    vec![
        category(
            "Hair Services",
            "#224C3B",
            vec![
                group(
                    "Haircuts",
                    vec![
                        item("Little Miss Princess", 800.0, "30 mins"),
                        item("Creative Cut", 2200.0, "45 mins"),
                        item("Cut and Finish", 1500.0, "60 mins"),
                        item("Fringes", 700.0, "15 mins"),
                    ],
                ),
                group(
                    "Hair Wash & Styling",
                    vec![
                        item("Loreal Hair Wash", 600.0, "30 mins"),
                        item("Kerastase Hair Wash", 900.0, "45 mins"),
                        item("Wash & Blow Dry (Loreal)", 800.0, "45 mins"),
                        item("Wash & Blow Dry (Kerastase)", 1200.0, "60 mins"),
                    ],
                ),
                group(
                    "Hair Treatments",
                    vec![
                        item("Olaplex Treatment", 3000.0, "90 mins"),
                        item("Keratin Treatment", 9000.0, "2-3 hours"),
                        item("Smoothening", 4500.0, "2 hours"),
                        item("Hair Botox", 10000.0, "2 hours"),
                    ],
                ),
                group(
                    "Color Services",
                    vec![
                        item("Root Touch Up", 2200.0, "60 mins"),
                        item("Global Color", 4000.0, "90 mins"),
                        item("Partial Highlights", 3000.0, "75 mins"),
                        item("Global Highlights", 5000.0, "120 mins"),
                    ],
                ),
            ],
        ),
        category(
            "Skin & Beauty",
            "#E8B49E",
            vec![
                group(
                    "Cleanup Services",
                    vec![
                        item("Simple Rejuvenating", 800.0, "30 mins"),
                        item("Hydrating Cleanup", 900.0, "45 mins"),
                        item("Insta Glow Cleanup", 1800.0, "60 mins"),
                    ],
                ),
                group(
                    "Facial Treatments",
                    vec![
                        item("Hydra Facial", 1900.0, "60 mins"),
                        item("Skin Lightening Facial", 2000.0, "75 mins"),
                        item("Regenerating Facial", 2500.0, "90 mins"),
                        item("Age Revival Facial", 3000.0, "90 mins"),
                        item("Bridal Brightening Facial", 6500.0, "120 mins"),
                    ],
                ),
                group(
                    "Body Treatments",
                    vec![
                        item("Classic Body Polishing", 6000.0, "60 mins"),
                        item("Signature Body Polishing", 8000.0, "90 mins"),
                        item("Classic Scrub & Steam", 3000.0, "45 mins"),
                    ],
                ),
                group(
                    "Massage Services",
                    vec![
                        item("Head Massage", 1700.0, "30 mins"),
                        item("Neck & Shoulder Massage", 800.0, "30 mins"),
                        item("Body Massage", 3000.0, "60 mins"),
                    ],
                ),
            ],
        ),
        category(
            "Bridal & Special Packages",
            "#B76E79",
            vec![
                group(
                    "Bridal Packages",
                    vec![
                        item("Bride Package", 15000.0, "4-5 hours"),
                        item("Wedding Set Go Package", 25000.0, "6-7 hours"),
                        item("Can Knot Wait Package", 30000.0, "Full Day"),
                    ],
                ),
                group(
                    "Maternity Packages",
                    vec![
                        item("Mom-to-Be Glow Package", 3000.0, "90 mins"),
                        item("Mom to be Serenity Package", 6000.0, "2 hours"),
                        item("Baby Moon Bliss Package", 9000.0, "2.5 hours"),
                    ],
                ),
                group(
                    "New Mama Packages",
                    vec![
                        item("Rejuvenation Package", 8000.0, "2 hours"),
                        item("Post-baby Bliss Package", 12000.0, "3 hours"),
                        item("Mom Glow Package", 5000.0, "1.5 hours"),
                    ],
                ),
            ],
        ),
        category(
            "Additional Services",
            "#4A5568",
            vec![
                group(
                    "Makeup Services",
                    vec![
                        item("Trail Makeup", 3000.0, "60 mins"),
                        item("Party Makeup", 6000.0, "90 mins"),
                        item("Royal Bash Makeup", 25000.0, "3 hours"),
                        item("Kids Makeover", 3000.0, "45 mins"),
                    ],
                ),
                group(
                    "Grooming Services",
                    vec![
                        item("Eyebrow Threading", 90.0, "15 mins"),
                        item("Upper Lip Threading", 70.0, "10 mins"),
                        item("Full Face Waxing", 2400.0, "45 mins"),
                        item("Full Body Waxing", 5500.0, "90 mins"),
                    ],
                ),
                group(
                    "Specialty Services",
                    vec![
                        item("Eyelash Extensions", 5000.0, "90 mins"),
                        item("Russian Lashes", 7000.0, "120 mins"),
                        item("Saree Draping", 1000.0, "30 mins"),
                    ],
                ),
            ],
        ),
    ]
}

pub fn membership_tiers() -> Vec<MembershipTier> {
    fn tier(name: &str, price: f64, duration: &str, popular: bool, features: &[&str]) -> MembershipTier {
        MembershipTier {
            name: name.to_string(),
            price,
            duration: duration.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            popular,
        }
    }

    vec![
        tier(
            "Silver",
            4999.0,
            "3 months",
            false,
            &[
                "10% off on all services",
                "Priority booking",
                "Complimentary hair spa",
                "Birthday special offers",
            ],
        ),
        tier(
            "Gold",
            9999.0,
            "6 months",
            true,
            &[
                "20% off on all services",
                "VIP priority booking",
                "Monthly hair spa",
                "Quarterly facial",
                "Birthday month free service",
            ],
        ),
        tier(
            "Platinum",
            19999.0,
            "12 months",
            false,
            &[
                "30% off on all services",
                "Exclusive VIP booking",
                "Unlimited hair spa",
                "Monthly facial",
                "Quarterly makeover",
                "Birthday month luxury package",
            ],
        ),
    ]
}

pub fn member_benefits() -> Vec<MemberBenefit> {
    fn benefit(title: &str, description: &str) -> MemberBenefit {
        MemberBenefit {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    vec![
        benefit("Exclusive Rewards", "Earn points on every visit"),
        benefit("Premium Access", "Priority booking & services"),
        benefit("Extended Hours", "Special timing for members"),
    ]
}

pub fn blog_categories() -> &'static [&'static str] {
    &["All", "Hair Care", "Skincare", "Makeup", "Bridal", "Wellness"]
}

pub fn blog_posts() -> Vec<BlogPost> {
    struct Post<'a> {
        id: &'a str,
        title: &'a str,
        excerpt: &'a str,
        content: &'a str,
        image: &'a str,
        category: &'a str,
        date: (i32, u32, u32),
        read_time: &'a str,
        likes: u32,
        comments: u32,
        tags: &'a [&'a str],
    }

    let posts = [
        Post {
            id: "1",
            title: "Top 10 Hair Care Tips for Summer",
            excerpt: "Protect your hair from the summer heat with these expert tips...",
            content: "Full detailed article content about summer hair care...",
            image: "https://images.unsplash.com/photo-1562322140-8baeececf3df?auto=format&fit=crop&q=80",
            category: "Hair Care",
            date: (2024, 3, 15),
            read_time: "5 min read",
            likes: 245,
            comments: 18,
            tags: &["summer", "hair", "care"],
        },
        Post {
            id: "2",
            title: "The Ultimate Bridal Beauty Timeline",
            excerpt: "Plan your perfect bridal look with our month-by-month guide...",
            content: "Comprehensive guide to bridal beauty preparation...",
            image: "https://images.unsplash.com/photo-1560066984-138dadb4c035?auto=format&fit=crop&q=80",
            category: "Bridal",
            date: (2024, 3, 12),
            read_time: "8 min read",
            likes: 189,
            comments: 24,
            tags: &["wedding", "beauty", "preparation"],
        },
        Post {
            id: "3",
            title: "Natural Skincare Secrets Revealed",
            excerpt: "Discover ancient beauty secrets for radiant skin...",
            content: "In-depth exploration of natural skincare techniques...",
            image: "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?auto=format&fit=crop&q=80",
            category: "Skincare",
            date: (2024, 3, 10),
            read_time: "6 min read",
            likes: 312,
            comments: 29,
            tags: &["skincare", "natural", "beauty"],
        },
    ];

    posts
        .into_iter()
        .filter_map(|post| {
            let (year, month, day) = post.date;
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            Some(BlogPost {
                id: post.id.to_string(),
                title: post.title.to_string(),
                excerpt: post.excerpt.to_string(),
                content: post.content.to_string(),
                image: post.image.to_string(),
                category: post.category.to_string(),
                date,
                read_time: post.read_time.to_string(),
                likes: post.likes,
                comments: post.comments,
                tags: post.tags.iter().map(|t| t.to_string()).collect(),
            })
        })
        .collect()
}

pub fn gallery_images() -> Vec<GalleryImage> {
    fn shot(url: &str, client: Option<&str>, orientation: Orientation) -> GalleryImage {
        GalleryImage {
            url: url.to_string(),
            client: client.map(|c| c.to_string()),
            orientation,
        }
    }

    vec![
        shot(
            "https://images.unsplash.com/photo-1562322140-8baeececf3df?auto=format&fit=crop&q=80",
            None,
            Orientation::Portrait,
        ),
        shot(
            "https://images.unsplash.com/photo-1560066984-138dadb4c035?auto=format&fit=crop&q=80",
            Some("Sarah Parker"),
            Orientation::Portrait,
        ),
        shot(
            "https://images.unsplash.com/photo-1522337660859-02fbefca4702?auto=format&fit=crop&q=80",
            Some("Lisa Anderson"),
            Orientation::Landscape,
        ),
        shot(
            "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?auto=format&fit=crop&q=80",
            Some("Lisa Anderson"),
            Orientation::Portrait,
        ),
        shot(
            "https://images.unsplash.com/photo-1519699047748-de8e457a634e?auto=format&fit=crop&q=80",
            Some("Maya Kapoor"),
            Orientation::Landscape,
        ),
        shot(
            "https://images.unsplash.com/photo-1527799820374-dcf8d9d4a388?auto=format&fit=crop&q=80",
            Some("Priya Sharma"),
            Orientation::Landscape,
        ),
        shot(
            "https://images.unsplash.com/photo-1595476108010-b4d1f102b1b1?auto=format&fit=crop&q=80",
            Some("Ananya Rao"),
            Orientation::Landscape,
        ),
        shot(
            "https://images.unsplash.com/photo-1580618672591-eb180b1a973f?auto=format&fit=crop&q=80",
            Some("Nisha Patel"),
            Orientation::Portrait,
        ),
        shot(
            "https://images.unsplash.com/photo-1457972729786-0411a3b2b626?auto=format&fit=crop&q=80",
            Some("Sarah Parker"),
            Orientation::Portrait,
        ),
    ]
}

/// The in-memory index behind the mocked search overlay.
pub fn search_index() -> Vec<SearchResult> {
    fn entry(
        id: &str,
        kind: SearchKind,
        title: &str,
        description: &str,
        price: Option<f64>,
        image: &str,
    ) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            description: description.to_string(),
            price,
            image: Some(image.to_string()),
        }
    }

    vec![
        entry(
            "1",
            SearchKind::Service,
            "Luxury Hair Treatment",
            "Premium hair care service with organic products",
            Some(2999.0),
            "https://images.unsplash.com/photo-1560066984-138dadb4c035?auto=format&fit=crop&q=80",
        ),
        entry(
            "2",
            SearchKind::Product,
            "Organic Hair Oil",
            "Natural hair oil for healthy growth",
            Some(999.0),
            "https://images.unsplash.com/photo-1527799820374-dcf8d9d4a388?auto=format&fit=crop&q=80",
        ),
        entry(
            "3",
            SearchKind::Blog,
            "Top 10 Hair Care Tips",
            "Expert advice for maintaining healthy hair",
            None,
            "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?auto=format&fit=crop&q=80",
        ),
    ]
}

pub fn contact_cards() -> &'static [(&'static str, &'static str)] {
    &[
        ("Visit Us", "123 Luxury Lane, Beverly Hills, CA 90210"),
        ("Call Us", "+1 (555) 123-4567"),
        ("Email Us", "hello@hadaza.com"),
        ("Opening Hours", "Mon-Sat: 9AM-8PM"),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn booking_service_ids_are_unique() {
        let services = booking_services();
        let ids: HashSet<&str> = services.iter().map(|s| s.id.as_str()).collect();

        assert_eq!(ids.len(), services.len());
    }

    #[test]
    fn every_blog_post_survives_date_parsing() {
        let posts = blog_posts();

        assert_eq!(posts.len(), 3);
        let ids: HashSet<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn blog_categories_cover_every_post() {
        let categories = blog_categories();

        for post in blog_posts() {
            assert!(
                categories.contains(&post.category.as_str()),
                "post {} has unlisted category {}",
                post.id,
                post.category
            );
        }
    }

    #[test]
    fn seed_cart_has_the_two_packages() {
        let seed = seed_cart();

        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].price, 2999.0);
        assert_eq!(seed[1].price, 1999.0);
        assert!(seed.iter().all(|item| item.quantity == 1));
    }

    #[test]
    fn menu_prices_are_positive() {
        for category in service_menu() {
            for group in category.groups {
                for item in group.items {
                    assert!(item.price > 0.0, "{} has no price", item.name);
                }
            }
        }
    }

    #[test]
    fn eleven_time_slots() {
        assert_eq!(time_slots().len(), 11);
    }
}

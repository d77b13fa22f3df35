//! # Page Content
//!
//! Everything the page displays that never changes at runtime: panel copy,
//! breed list, candidate names, and image locators. Compiled in.

pub const TITLE: &str = "All About Cats";
pub const SUBTITLE: &str = "Discover the fascinating world of our feline friends";

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80";

pub const CHARACTERISTICS_TITLE: &str = "Characteristics of Cats";
pub const CHARACTERISTICS_DESCRIPTION: &str = "What makes cats unique?";
pub const CHARACTERISTICS: &[&str] = &[
    "Independent nature",
    "Excellent hunters with sharp claws and teeth",
    "Flexible bodies and quick reflexes",
    "Keen senses, especially hearing and night vision",
    "Communicate through vocalizations, body language, and scent",
];

pub const BREEDS_TITLE: &str = "Popular Cat Breeds";
pub const BREEDS_DESCRIPTION: &str = "Some well-known cat breeds around the world";
pub const BREEDS: &[&str] = &[
    "Siamese",
    "Persian",
    "Maine Coon",
    "Bengal",
    "British Shorthair",
];

pub const CAT_NAMES: &[&str] = &[
    "Whiskers",
    "Luna",
    "Oliver",
    "Mittens",
    "Simba",
    "Cleo",
    "Milo",
    "Nala",
    "Leo",
    "Shadow",
    "Bella",
    "Tiger",
    "Willow",
    "Pumpkin",
    "Jasper",
    "Smokey",
    "Pepper",
    "Ginger",
    "Felix",
    "Mochi",
];

/// A gallery entry: where the image lives and a short caption for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub url: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        url: "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba",
        alt: "Cat staring into the camera",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1573865526739-10659fec78a5",
        alt: "Grey cat lounging",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1495360010541-f48722b34f7d",
        alt: "Ginger cat on a blanket",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1518791841217-8f162f1e1131",
        alt: "Tabby cat close-up",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1526336024174-e58f5cdd8e13",
        alt: "Cat peeking over a ledge",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1533738363-b7f9aef128ce",
        alt: "Cat wearing sunglasses",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1543852786-1cf6624b9987",
        alt: "Kitten in the grass",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1592194996308-7b43878e84a6",
        alt: "Sleepy cat curled up",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cat_names_have_no_duplicates() {
        let unique: HashSet<_> = CAT_NAMES.iter().collect();
        assert_eq!(unique.len(), CAT_NAMES.len());
        assert_eq!(CAT_NAMES.len(), 20);
    }

    #[test]
    fn test_gallery_locators_are_distinct_urls() {
        let unique: HashSet<_> = GALLERY.iter().map(|img| img.url).collect();
        assert_eq!(unique.len(), GALLERY.len());
        assert!(GALLERY.iter().all(|img| img.url.starts_with("https://")));
    }
}

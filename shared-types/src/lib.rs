use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BookingService {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    pub duration: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MenuGroup {
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MenuCategory {
    pub name: String,
    pub accent: String,
    pub groups: Vec<MenuGroup>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MembershipTier {
    pub name: String,
    pub price: f64,
    pub duration: String,
    pub features: Vec<String>,
    pub popular: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MemberBenefit {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub category: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub likes: u32,
    pub comments: u32,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GalleryImage {
    pub url: String,
    pub client: Option<String>,
    pub orientation: Orientation,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Service,
    Product,
    Blog,
}

impl SearchKind {
    pub fn label(&self) -> &'static str {
        match self {
            SearchKind::Service => "Service",
            SearchKind::Product => "Product",
            SearchKind::Blog => "Blog",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchResult {
    pub id: String,
    pub kind: SearchKind,
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub image: Option<String>,
}

use std::collections::HashSet;

use shared_types::BlogPost;

pub const POSTS_PER_PAGE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Latest,
    Popular,
}

/// What the visitor is currently asking the blog grid to show.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogFilter {
    pub category: String,
    pub query: String,
    pub sort: SortMode,
    pub page: usize,
    pub page_size: usize,
}

impl Default for BlogFilter {
    fn default() -> Self {
        BlogFilter {
            category: "All".to_string(),
            query: String::new(),
            sort: SortMode::default(),
            page: 1,
            page_size: POSTS_PER_PAGE,
        }
    }
}

fn matches(post: &BlogPost, category: &str, query: &str) -> bool {
    let in_category = category == "All" || post.category == category;
    if !in_category {
        return false;
    }
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    post.title.to_lowercase().contains(&query)
        || post
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query))
}

/// Filter and sort the catalog. Sorting by likes always uses the base
/// catalog value, never the viewer's toggles.
pub fn filtered_posts<'a>(posts: &'a [BlogPost], filter: &BlogFilter) -> Vec<&'a BlogPost> {
    let mut result: Vec<&BlogPost> = posts
        .iter()
        .filter(|post| matches(post, &filter.category, &filter.query))
        .collect();

    match filter.sort {
        SortMode::Latest => result.sort_by(|a, b| b.date.cmp(&a.date)),
        SortMode::Popular => result.sort_by(|a, b| b.likes.cmp(&a.likes)),
    }

    result
}

pub fn page_count(post_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    post_count.div_ceil(page_size)
}

/// A requested page outside the valid range clamps to the nearest valid
/// page instead of rendering an empty grid.
pub fn clamp_page(page: usize, pages: usize) -> usize {
    page.clamp(1, pages.max(1))
}

/// The page of posts to render for the given filter.
pub fn visible_posts<'a>(posts: &'a [BlogPost], filter: &BlogFilter) -> Vec<&'a BlogPost> {
    let filtered = filtered_posts(posts, filter);
    let pages = page_count(filtered.len(), filter.page_size);
    let page = clamp_page(filter.page, pages);

    filtered
        .into_iter()
        .skip((page - 1) * filter.page_size)
        .take(filter.page_size)
        .collect()
}

/// Per-viewer like/save flags layered over the read-only catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerOverlay {
    liked: HashSet<String>,
    saved: HashSet<String>,
}

impl ViewerOverlay {
    pub fn toggle_like(&mut self, post_id: &str) {
        if !self.liked.remove(post_id) {
            self.liked.insert(post_id.to_string());
        }
    }

    pub fn toggle_save(&mut self, post_id: &str) {
        if !self.saved.remove(post_id) {
            self.saved.insert(post_id.to_string());
        }
    }

    pub fn is_liked(&self, post_id: &str) -> bool {
        self.liked.contains(post_id)
    }

    pub fn is_saved(&self, post_id: &str) -> bool {
        self.saved.contains(post_id)
    }

    /// Likes shown to this viewer: the catalog count plus their own toggle.
    pub fn display_likes(&self, post: &BlogPost) -> u32 {
        post.likes + u32::from(self.is_liked(&post.id))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn post(id: &str, title: &str, category: &str, date: (i32, u32, u32), likes: u32, tags: &[&str]) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: title.to_string(),
            excerpt: String::new(),
            content: String::new(),
            image: String::new(),
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            read_time: "5 min read".to_string(),
            likes,
            comments: 0,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn catalog() -> Vec<BlogPost> {
        vec![
            post("1", "Top 10 Hair Care Tips for Summer", "Hair Care", (2024, 3, 15), 245, &["summer", "hair", "care"]),
            post("2", "The Ultimate Bridal Beauty Timeline", "Bridal", (2024, 3, 12), 189, &["wedding", "beauty", "preparation"]),
            post("3", "Natural Skincare Secrets Revealed", "Skincare", (2024, 3, 10), 312, &["skincare", "natural", "beauty"]),
        ]
    }

    fn ids(posts: &[&BlogPost]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn category_filter_keeps_only_that_category() {
        let posts = catalog();
        let filter = BlogFilter {
            category: "Hair Care".to_string(),
            ..BlogFilter::default()
        };

        for sort in [SortMode::Latest, SortMode::Popular] {
            let visible = visible_posts(&posts, &BlogFilter { sort, ..filter.clone() });
            assert_eq!(ids(&visible), vec!["1"]);
        }
    }

    #[test]
    fn query_matches_title_and_tags_case_insensitively() {
        let posts = catalog();

        let by_title = filtered_posts(
            &posts,
            &BlogFilter {
                query: "BRIDAL".to_string(),
                ..BlogFilter::default()
            },
        );
        let by_tag = filtered_posts(
            &posts,
            &BlogFilter {
                query: "beauty".to_string(),
                ..BlogFilter::default()
            },
        );

        assert_eq!(ids(&by_title), vec!["2"]);
        assert_eq!(ids(&by_tag), vec!["2", "3"]);
    }

    #[test]
    fn category_and_query_commute() {
        let posts = catalog();

        let category_only = BlogFilter {
            category: "Skincare".to_string(),
            ..BlogFilter::default()
        };
        let query_only = BlogFilter {
            query: "natural".to_string(),
            ..BlogFilter::default()
        };
        let both = BlogFilter {
            category: "Skincare".to_string(),
            query: "natural".to_string(),
            ..BlogFilter::default()
        };

        // Narrowing by category first, then query, lands on the same set as
        // the combined filter in one pass.
        let narrowed: Vec<BlogPost> = filtered_posts(&posts, &category_only)
            .into_iter()
            .cloned()
            .collect();
        let narrowed_again = filtered_posts(&narrowed, &query_only);
        let combined = filtered_posts(&posts, &both);

        assert_eq!(ids(&narrowed_again), ids(&combined));
    }

    #[test]
    fn filtering_is_idempotent() {
        let posts = catalog();
        let filter = BlogFilter {
            query: "beauty".to_string(),
            ..BlogFilter::default()
        };

        let once: Vec<BlogPost> = filtered_posts(&posts, &filter).into_iter().cloned().collect();
        let twice = filtered_posts(&once, &filter);

        assert_eq!(ids(&twice), once.iter().map(|p| p.id.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn latest_sorts_descending_by_date() {
        let posts = catalog();

        let sorted = filtered_posts(&posts, &BlogFilter::default());

        assert_eq!(ids(&sorted), vec!["1", "2", "3"]);
    }

    #[test]
    fn popular_sorts_descending_by_base_likes() {
        let posts = catalog();
        let filter = BlogFilter {
            sort: SortMode::Popular,
            ..BlogFilter::default()
        };

        let sorted = filtered_posts(&posts, &filter);
        let likes: Vec<u32> = sorted.iter().map(|p| p.likes).collect();

        assert!(likes.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(ids(&sorted), vec!["3", "1", "2"]);
    }

    #[test]
    fn viewer_likes_do_not_affect_sort_order() {
        let posts = catalog();
        let filter = BlogFilter {
            sort: SortMode::Popular,
            ..BlogFilter::default()
        };
        let mut overlay = ViewerOverlay::default();

        let before = ids(&filtered_posts(&posts, &filter));
        // Liking the least popular post would reorder if toggles leaked
        // into the sort key.
        overlay.toggle_like("2");
        let after = ids(&filtered_posts(&posts, &filter));

        assert_eq!(before, after);
        assert_eq!(overlay.display_likes(&posts[1]), 190);
        assert_eq!(posts[1].likes, 189);
    }

    #[test]
    fn toggles_flip_membership() {
        let mut overlay = ViewerOverlay::default();

        overlay.toggle_like("1");
        overlay.toggle_save("1");
        assert!(overlay.is_liked("1"));
        assert!(overlay.is_saved("1"));

        overlay.toggle_like("1");
        overlay.toggle_save("1");
        assert!(!overlay.is_liked("1"));
        assert!(!overlay.is_saved("1"));
    }

    #[test]
    fn pagination_slices_by_page() {
        let posts = catalog();
        let filter = BlogFilter {
            page_size: 2,
            ..BlogFilter::default()
        };

        let first = visible_posts(&posts, &filter);
        let second = visible_posts(&posts, &BlogFilter { page: 2, ..filter.clone() });

        assert_eq!(ids(&first), vec!["1", "2"]);
        assert_eq!(ids(&second), vec!["3"]);
    }

    #[test]
    fn out_of_range_page_clamps_to_last_page() {
        let posts = catalog();
        let filter = BlogFilter {
            page: 9,
            page_size: 2,
            ..BlogFilter::default()
        };

        let visible = visible_posts(&posts, &filter);

        assert_eq!(ids(&visible), vec!["3"]);
    }

    #[test]
    fn empty_result_clamps_to_page_one() {
        let posts = catalog();
        let filter = BlogFilter {
            category: "Makeup".to_string(),
            page: 4,
            ..BlogFilter::default()
        };

        assert!(visible_posts(&posts, &filter).is_empty());
        assert_eq!(page_count(0, POSTS_PER_PAGE), 0);
        assert_eq!(clamp_page(4, 0), 1);
    }
}

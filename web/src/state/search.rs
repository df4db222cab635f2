use shared_types::SearchResult;

/// Queries shorter than this show the "start typing" hint instead of
/// running a search.
pub const MIN_QUERY_LEN: usize = 2;

pub fn should_search(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

/// Case-insensitive match over title and description of the hard-coded
/// index. The half-second "network" delay lives in the overlay component,
/// not here.
pub fn search<'a>(index: &'a [SearchResult], query: &str) -> Vec<&'a SearchResult> {
    let query = query.to_lowercase();
    index
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&query)
                || entry.description.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use shared_types::SearchKind;

    use super::*;

    fn entry(id: &str, kind: SearchKind, title: &str, description: &str) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            description: description.to_string(),
            price: None,
            image: None,
        }
    }

    fn index() -> Vec<SearchResult> {
        vec![
            entry(
                "1",
                SearchKind::Service,
                "Luxury Hair Treatment",
                "Premium hair care service with organic products",
            ),
            entry(
                "2",
                SearchKind::Product,
                "Organic Hair Oil",
                "Natural hair oil for healthy growth",
            ),
            entry(
                "3",
                SearchKind::Blog,
                "Top 10 Hair Care Tips",
                "Expert advice for maintaining healthy hair",
            ),
        ]
    }

    #[test]
    fn matches_titles_case_insensitively() {
        let index = index();

        let results = search(&index, "LUXURY");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }

    #[test]
    fn matches_descriptions_too() {
        let index = index();

        let results = search(&index, "healthy");

        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn no_match_returns_empty() {
        let index = index();

        assert!(search(&index, "massage chair").is_empty());
    }

    #[test]
    fn short_queries_are_gated() {
        assert!(!should_search(""));
        assert!(!should_search("h"));
        assert!(should_search("ha"));
    }
}

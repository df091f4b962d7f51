use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::Criteria;
use crate::store::ContentProvider;

#[derive(Debug, Clone, Default)]
pub struct NewsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    pub featured_only: bool,
}

pub fn run<P: ContentProvider>(provider: &P, query: NewsQuery) -> Result<CmdResult> {
    let items = if query.featured_only {
        provider.featured_news()?
    } else {
        provider.news()?
    };

    let mut criteria = Criteria::new();
    if let Some(term) = &query.search {
        criteria = criteria.with_query(term);
    }
    criteria = criteria
        .with_selection("category", query.category.as_deref())
        .with_selection("source", query.source.as_deref());

    Ok(CmdResult::default().with_news(criteria.apply(items)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryProvider;

    #[test]
    fn lists_all_news_without_facets() {
        let provider = MemoryProvider::seeded();
        let result = run(&provider, NewsQuery::default()).unwrap();
        assert_eq!(result.news.len(), 3);
    }

    #[test]
    fn category_facet_is_exact() {
        let provider = MemoryProvider::seeded();
        let result = run(
            &provider,
            NewsQuery {
                category: Some("Examination News".into()),
                ..NewsQuery::default()
            },
        )
        .unwrap();
        assert_eq!(result.news.len(), 1);
        assert!(result.news[0].title.contains("WASSCE"));
    }

    #[test]
    fn search_scans_title_and_body() {
        let provider = MemoryProvider::seeded();
        let result = run(
            &provider,
            NewsQuery {
                search: Some("literacy".into()),
                ..NewsQuery::default()
            },
        )
        .unwrap();
        assert_eq!(result.news.len(), 1);
        assert_eq!(result.news[0].id, 1);
    }

    #[test]
    fn featured_only_uses_featured_feed() {
        let provider = MemoryProvider::seeded();
        let result = run(
            &provider,
            NewsQuery {
                featured_only: true,
                ..NewsQuery::default()
            },
        )
        .unwrap();
        assert_eq!(result.news.len(), 2);
        assert!(result.news.iter().all(|n| n.is_featured));
    }

    #[test]
    fn source_and_search_combine() {
        let provider = MemoryProvider::seeded();
        let result = run(
            &provider,
            NewsQuery {
                search: Some("training".into()),
                source: Some("National Teaching Council".into()),
                ..NewsQuery::default()
            },
        )
        .unwrap();
        assert_eq!(result.news.len(), 1);
        assert_eq!(result.news[0].id, 2);
    }
}

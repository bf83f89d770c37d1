use crate::models::{EvidenceItem, Page};

/// Case-insensitive containment, comparing lowercase forms / 忽略大小写的包含判断
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Whether an item would be kept for the query / 条目是否命中
///
/// Title match or any page match.
pub fn matches_query(item: &EvidenceItem, query: &str) -> bool {
    let q = query.to_lowercase();
    contains_ci(&item.title, &q) || item.pages.iter().any(|p| contains_ci(&p.page_text, &q))
}

/// Filter the corpus by query / 按查询过滤语料
///
/// Keeps corpus order. Each kept item carries only its matching pages, which
/// may be none when the title alone matched. The empty query matches
/// everything, so it returns the corpus with every page.
pub fn filter_corpus(corpus: &[EvidenceItem], query: &str) -> Vec<EvidenceItem> {
    let q = query.to_lowercase();

    corpus
        .iter()
        .filter_map(|item| {
            let pages: Vec<Page> = item
                .pages
                .iter()
                .filter(|p| contains_ci(&p.page_text, &q))
                .cloned()
                .collect();

            if contains_ci(&item.title, &q) || !pages.is_empty() {
                Some(EvidenceItem {
                    title: item.title.clone(),
                    link: item.link.clone(),
                    pages,
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: i64, text: &str) -> Page {
        Page {
            page_number: n,
            page_text: text.to_string(),
        }
    }

    fn item(title: &str, link: &str, pages: Vec<Page>) -> EvidenceItem {
        EvidenceItem {
            title: title.to_string(),
            link: link.to_string(),
            pages,
        }
    }

    fn sample_corpus() -> Vec<EvidenceItem> {
        vec![
            item("Witness A", "/a", vec![page(1, "hello world")]),
            item("Other", "/b", vec![page(1, "nothing here")]),
            item(
                "Horizon Report",
                "/c",
                vec![page(1, "Balancing errors"), page(2, "HELLO again"), page(3, "end")],
            ),
            item("Hello Statement", "/d", vec![page(1, "unrelated")]),
        ]
    }

    #[test]
    fn test_witness_scenario() {
        let corpus = vec![
            item("Witness A", "/a", vec![page(1, "hello world")]),
            item("Other", "/b", vec![page(1, "nothing here")]),
        ];
        let results = filter_corpus(&corpus, "hello");
        assert_eq!(results, vec![item("Witness A", "/a", vec![page(1, "hello world")])]);
    }

    #[test]
    fn test_every_result_satisfies_predicate() {
        let corpus = sample_corpus();
        for q in ["hello", "HELLO", "o", "end", "zzz", " ", "report"] {
            for result in filter_corpus(&corpus, q) {
                let original = corpus.iter().find(|i| i.link == result.link).unwrap();
                assert!(matches_query(original, q), "query {:?} kept {:?}", q, result.title);
                let q_lower = q.to_lowercase();
                assert!(result
                    .pages
                    .iter()
                    .all(|p| p.page_text.to_lowercase().contains(&q_lower)));
            }
        }
    }

    #[test]
    fn test_order_preserved() {
        let corpus = sample_corpus();
        let links: Vec<String> = filter_corpus(&corpus, "hello")
            .into_iter()
            .map(|i| i.link)
            .collect();
        assert_eq!(links, vec!["/a", "/c", "/d"]);
    }

    #[test]
    fn test_page_subfilter_and_title_only_match() {
        let corpus = sample_corpus();
        let results = filter_corpus(&corpus, "hello");

        let report = results.iter().find(|i| i.link == "/c").unwrap();
        assert_eq!(report.pages, vec![page(2, "HELLO again")]);

        let statement = results.iter().find(|i| i.link == "/d").unwrap();
        assert!(statement.pages.is_empty());
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let corpus = sample_corpus();
        assert_eq!(filter_corpus(&corpus, ""), corpus);
    }

    #[test]
    fn test_corpus_untouched() {
        let corpus = sample_corpus();
        let before = corpus.clone();
        let _ = filter_corpus(&corpus, "again");
        assert_eq!(corpus, before);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_corpus(&sample_corpus(), "missing term").is_empty());
    }
}

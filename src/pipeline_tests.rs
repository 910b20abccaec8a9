//! End-to-end scenario tests for the document clustering pipeline.

#[cfg(test)]
mod tests {
    use crate::cluster::Linkage;
    use crate::document::Document;
    use crate::pipeline::Clusterer;

    fn doc(id: &str, text: &str) -> Document {
        Document::new(id, text)
    }

    fn hosted(id: &str, text: &str, url: &str) -> Document {
        Document {
            url: Some(url.to_string()),
            ..Document::new(id, text)
        }
    }

    #[test]
    fn test_two_disjoint_pairs_complete_linkage() {
        // Two near-identical pairs with disjoint vocabularies. Both pairs sit at
        // distance 0 and must merge before anything crosses vocabularies.
        let docs = vec![
            doc("0", "aa aa"),
            doc("1", "aa aa"),
            doc("2", "bb bb"),
            doc("3", "bb bb"),
        ];
        let grouping = Clusterer::new(2)
            .with_linkage(Linkage::Complete)
            .cluster(&docs)
            .unwrap();

        let levels = grouping.dendrogram.levels();
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[1].merge.unwrap().distance, 0.0);
        assert_eq!(levels[2].merge.unwrap().distance, 0.0);
        assert_eq!(
            grouping.dendrogram.final_level().clusters,
            vec![vec![0, 1], vec![2, 3]]
        );
    }

    #[test]
    fn test_single_document_corpus() {
        let grouping = Clusterer::new(1).cluster(&[doc("only", "hello world")]).unwrap();
        let levels = grouping.dendrogram.levels();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].clusters, vec![vec![0]]);
        assert!(levels[0].merge.is_none());
        assert_eq!(grouping.partition(), vec![vec!["only"]]);
    }

    #[test]
    fn test_num_clusters_at_least_corpus_size() {
        let docs = vec![doc("0", "aa"), doc("1", "bb"), doc("2", "cc")];
        let grouping = Clusterer::new(5).cluster(&docs).unwrap();
        assert_eq!(grouping.dendrogram.levels().len(), 1);
        assert_eq!(grouping.dendrogram.final_level().clusters.len(), 3);
    }

    #[test]
    fn test_every_level_partitions_the_corpus() {
        let docs = vec![
            doc("0", "rust borrow checker lifetimes"),
            doc("1", "rust cargo build tooling"),
            doc("2", "sourdough bread starter hydration"),
            doc("3", "pizza dough fermentation"),
            doc("4", "orbit transfer delta budget"),
        ];
        let grouping = Clusterer::new(1).cluster(&docs).unwrap();
        for level in grouping.dendrogram.levels() {
            let mut members: Vec<usize> = level.clusters.iter().flatten().copied().collect();
            members.sort_unstable();
            assert_eq!(members, vec![0, 1, 2, 3, 4]);
        }
        // Cluster count drops by exactly one per level.
        let counts: Vec<usize> = grouping
            .dendrogram
            .levels()
            .iter()
            .map(|l| l.clusters.len())
            .collect();
        assert_eq!(counts, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_runs_are_deterministic() {
        let docs: Vec<Document> = (0..8)
            .map(|i| doc(&format!("{i}"), &format!("term{} shared corpus words", i / 2)))
            .collect();
        let a = Clusterer::new(2).cluster(&docs).unwrap();
        let b = Clusterer::new(2).cluster(&docs).unwrap();
        assert_eq!(a.dendrogram, b.dendrogram);
        assert_eq!(a.partition(), b.partition());
    }

    #[test]
    fn test_merge_distances_nondecreasing_for_named_linkages() {
        let docs = vec![
            doc("0", "alpha beta gamma"),
            doc("1", "alpha beta delta"),
            doc("2", "epsilon zeta eta"),
            doc("3", "epsilon zeta theta"),
            doc("4", "iota kappa lambda"),
        ];
        for linkage in [Linkage::Single, Linkage::Complete] {
            let grouping = Clusterer::new(1).with_linkage(linkage).cluster(&docs).unwrap();
            let distances: Vec<f64> = grouping
                .dendrogram
                .levels()
                .iter()
                .filter_map(|l| l.merge.map(|m| m.distance))
                .collect();
            for pair in distances.windows(2) {
                assert!(pair[0] <= pair[1], "{linkage:?}: {distances:?}");
            }
        }
    }

    #[test]
    fn test_host_boost_groups_same_site_documents() {
        // Identical text everywhere: without the boost the tie-break decides,
        // with it the site affinity does.
        let docs = vec![
            hosted("0", "daily news update", "https://alpha.dev/a"),
            hosted("1", "daily news update", "https://beta.dev/b"),
            hosted("2", "daily news update", "https://alpha.dev/c"),
            hosted("3", "daily news update", "https://beta.dev/d"),
        ];
        let grouping = Clusterer::new(2).cluster(&docs).unwrap();
        assert_eq!(
            grouping.dendrogram.final_level().clusters,
            vec![vec![0, 2], vec![1, 3]]
        );

        let unboosted = Clusterer::new(2).with_host_boost(false).cluster(&docs).unwrap();
        // All four documents are indistinguishable: first scanned pair merges.
        assert_eq!(
            unboosted.dendrogram.levels()[1].clusters,
            vec![vec![0, 1], vec![2], vec![3]]
        );
    }

    #[test]
    fn test_chosen_partition_covers_every_id_once() {
        let docs = vec![
            doc("w", "one two three"),
            doc("x", "one two four"),
            doc("y", "five six seven"),
            doc("z", "five six eight"),
        ];
        let grouping = Clusterer::new(2).cluster(&docs).unwrap();
        let mut ids: Vec<String> = grouping.partition().into_iter().flatten().collect();
        ids.sort();
        assert_eq!(ids, vec!["w", "x", "y", "z"]);
    }
}

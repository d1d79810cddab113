//! Index trust: lookups may over-approximate, results may not.

use sift_tests::prelude::*;

mod superset_index {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lying_index_is_corrected_by_filtering() {
        // GIVEN an index that returns every row for every lookup
        let graph = LyingIndexGraph::new(color_rows());
        let mut query = GraphQuery::new(&graph);
        query.has("color", "red");

        // WHEN
        let result = names(query.vertices());

        // THEN the seed condition is re-checked on each candidate
        assert!(query.plan(ElementKind::Vertex).is_index_lookup());
        assert_eq!(result, vec!["A", "C"]);
    }

    #[test]
    fn test_lying_index_multi_value_repeats_matches() {
        let graph = LyingIndexGraph::new(color_rows());

        let result = names(GraphQuery::new(&graph).has_any("color", ["red", "green"]).vertices());

        // Each lookup returns all rows, so every match appears once per operand.
        assert_eq!(result, vec!["A", "C", "D", "A", "C", "D"]);
    }

    #[test]
    fn test_lying_index_on_edges() {
        let graph = LyingIndexGraph::new(color_rows());

        let result = names(
            GraphQuery::new(&graph)
                .has("color", "blue")
                .has_cmp("size", Compare::GreaterThanEqual, 2i64)
                .edges(),
        );

        assert_eq!(result, vec!["B"]);
    }
}

mod seeding {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_eligible_condition_seeds() {
        // GIVEN color and size both indexed
        let mut graph = color_graph(true);
        graph.create_key_index("size", ElementKind::Vertex).unwrap();

        // WHEN size is the first equality
        let mut query = GraphQuery::new(&graph);
        query
            .has_cmp("color", Compare::NotEqual, "blue")
            .has("size", 3i64)
            .has("color", "red");

        // THEN
        assert_eq!(
            query.plan(ElementKind::Vertex),
            ScanPlan::IndexLookup {
                key: "size".to_string(),
                values: vec![Value::from(3i64)],
            }
        );
        assert_eq!(names(query.vertices()), vec!["C"]);
    }

    #[test]
    fn test_null_equality_never_seeds() {
        let graph = color_graph(true);
        let mut query = GraphQuery::new(&graph);
        query.has_no_key("color");

        assert_eq!(query.plan(ElementKind::Vertex), ScanPlan::FullScan);
        assert!(names(query.vertices()).is_empty());
    }

    #[test]
    fn test_dropped_index_falls_back_to_scan() {
        let mut graph = color_graph(true);
        graph.drop_key_index("color", ElementKind::Vertex).unwrap();
        let mut query = GraphQuery::new(&graph);
        query.has("color", "red");

        assert_eq!(query.plan(ElementKind::Vertex), ScanPlan::FullScan);
        assert_eq!(names(query.vertices()), vec!["A", "C"]);
    }

    #[test]
    fn test_int_and_float_sizes_are_distinct() {
        // GIVEN sizes indexed and one float size
        let mut graph = color_graph(false);
        graph.add_vertex(props! { "name" => "E", "size" => 3.0f64 });
        graph.create_key_index("size", ElementKind::Vertex).unwrap();

        // WHEN looking up an int
        let indexed = names(GraphQuery::new(&graph).has("size", 3i64).vertices());
        let scanned = names(
            GraphQuery::with_config(&graph, QueryConfig::scan_only())
                .has("size", 3i64)
                .vertices(),
        );

        // THEN both paths agree that 3 and 3.0 are different values
        assert_eq!(indexed, vec!["C"]);
        assert_eq!(indexed, scanned);
    }
}

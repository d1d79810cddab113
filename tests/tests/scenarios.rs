//! End-to-end query scenarios against the memory graph.

use sift_tests::prelude::*;

mod color_scan {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_has_red() {
        let graph = color_graph(false);

        assert_eq!(names(GraphQuery::new(&graph).has("color", "red").vertices()), vec!["A", "C"]);
    }

    #[test]
    fn test_has_red_second_page() {
        let graph = color_graph(false);

        let page = names(
            GraphQuery::new(&graph)
                .has("color", "red")
                .limit_range(1, 1)
                .vertices(),
        );

        assert_eq!(page, vec!["C"]);
    }

    #[test]
    fn test_has_not_red() {
        let graph = color_graph(false);

        assert_eq!(
            names(GraphQuery::new(&graph).has_not("color", "red").vertices()),
            vec!["B", "D"]
        );
    }

    #[test]
    fn test_no_conditions_returns_everything() {
        let graph = color_graph(false);

        assert_eq!(
            names(GraphQuery::new(&graph).vertices()),
            vec!["A", "B", "C", "D"]
        );
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let graph = color_graph(false);

        let mut iter = GraphQuery::new(&graph).has("color", "red").limit_range(5, 10).vertices();

        assert!(!iter.has_next().unwrap());
    }
}

mod color_indexed {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_has_red_uses_index() {
        // GIVEN color indexed
        let graph = color_graph(true);
        let mut query = GraphQuery::new(&graph);
        query.has("color", "red");

        // WHEN / THEN
        assert!(query.plan(ElementKind::Vertex).is_index_lookup());
        assert_eq!(names(query.vertices()), vec!["A", "C"]);
    }

    #[test]
    fn test_multi_value_lookup_keeps_operand_order() {
        let graph = color_graph(true);

        let result = names(GraphQuery::new(&graph).has_any("color", ["green", "blue"]).vertices());

        assert_eq!(result, vec!["D", "B"]);
    }

    #[test]
    fn test_duplicate_operands_surface_twice() {
        // GIVEN the same operand listed twice on an indexed key
        let graph = color_graph(true);

        // WHEN
        let result = names(GraphQuery::new(&graph).has_any("color", ["blue", "blue"]).vertices());

        // THEN each lookup contributes its matches
        assert_eq!(result, vec!["B", "B"]);
    }

    #[test]
    fn test_index_tracks_updates() {
        // GIVEN B repainted red after indexing
        let mut graph = color_graph(true);
        let b = GraphQuery::new(&graph)
            .has("name", "B")
            .vertices()
            .next()
            .unwrap()
            .unwrap()
            .id;
        graph.set_vertex_property(b, "color", Value::from("red")).unwrap();

        // WHEN
        let result = names(GraphQuery::new(&graph).has("color", "red").vertices());

        // THEN
        assert_eq!(result, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_pagination_over_lookups() {
        let graph = color_graph(true);

        let result = names(
            GraphQuery::new(&graph)
                .has_any("color", ["red", "green"])
                .limit_range(1, 2)
                .vertices(),
        );

        assert_eq!(result, vec!["C", "D"]);
    }
}

mod edges {
    use super::*;
    use pretty_assertions::assert_eq;

    fn social_graph() -> MemoryGraph {
        let mut graph = MemoryGraph::new();
        let ada = graph.add_vertex(props! { "name" => "ada" });
        let bob = graph.add_vertex(props! { "name" => "bob" });
        let cy = graph.add_vertex(props! { "name" => "cy" });
        graph
            .add_edge(ada, bob, "knows", props! { "name" => "ab", "since" => 2001i64 })
            .unwrap();
        graph
            .add_edge(bob, cy, "knows", props! { "name" => "bc", "since" => 2015i64 })
            .unwrap();
        graph
            .add_edge(ada, cy, "follows", props! { "name" => "ac" })
            .unwrap();
        graph
    }

    #[test]
    fn test_edges_by_interval() {
        let graph = social_graph();

        let result = names(
            GraphQuery::new(&graph)
                .has_key("since")
                .interval("since", 2000i64, 2010i64)
                .edges(),
        );

        assert_eq!(result, vec!["ab"]);
    }

    #[test]
    fn test_edges_indexed_lookup() {
        // GIVEN since indexed on edges
        let mut graph = social_graph();
        graph.create_key_index("since", ElementKind::Edge).unwrap();
        let mut query = GraphQuery::new(&graph);
        query.has("since", 2015i64);

        // WHEN / THEN
        assert!(query.plan(ElementKind::Edge).is_index_lookup());
        assert_eq!(query.plan(ElementKind::Vertex), ScanPlan::FullScan);
        assert_eq!(names(query.edges()), vec!["bc"]);
    }

    #[test]
    fn test_edges_without_property() {
        let graph = social_graph();

        assert_eq!(names(GraphQuery::new(&graph).has_no_key("since").edges()), vec!["ac"]);
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_equality_fails_on_first_pull() {
        // GIVEN an equality with no operands on an indexed key
        let graph = color_graph(true);
        let mut query = GraphQuery::new(&graph);
        query.has_any("color", Vec::<Value>::new());

        // WHEN
        let mut iter = query.vertices();

        // THEN the planner scans AND evaluation reports the bad condition
        assert_eq!(query.plan(ElementKind::Vertex), ScanPlan::FullScan);
        assert_eq!(
            iter.next_element().unwrap_err(),
            QueryError::invalid_operand_count("color", Compare::Equal, 0)
        );
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_mixed_type_ordering_fails() {
        let graph = color_graph(false);

        let result: Result<Vec<_>, _> = GraphQuery::new(&graph)
            .has_cmp("color", Compare::LessThan, 5i64)
            .vertices()
            .collect();

        assert!(matches!(
            result,
            Err(QueryError::Incomparable { actual: "string", .. })
        ));
    }

    #[test]
    fn test_error_skipped_by_earlier_condition() {
        // GIVEN a green vertex E with a string size
        let mut graph = color_graph(false);
        graph.add_vertex(props! { "name" => "E", "color" => "green", "size" => "huge" });

        // WHEN the color condition rejects E before size is compared
        let result = names(
            GraphQuery::new(&graph)
                .has("color", "red")
                .has_cmp("size", Compare::GreaterThan, 0i64)
                .vertices(),
        );

        // THEN
        assert_eq!(result, vec!["A", "C"]);
    }
}

//! Unit tests for rr-spatial.
//!
//! All tests use hand-placed coordinates so distances can be checked by eye.

#[cfg(test)]
mod helpers {
    use rr_core::Coordinate;

    use crate::NodeIndex;

    /// Five nodes (lon, lat):
    ///
    /// ```text
    ///   0:(0,0)   1:(4,0)   2:(2,3)   3:(0,6)   4:(6,6)
    /// ```
    pub fn five_nodes() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(4.0, 0.0),
            Coordinate::new(2.0, 3.0),
            Coordinate::new(0.0, 6.0),
            Coordinate::new(6.0, 6.0),
        ]
    }

    pub fn five_node_index() -> NodeIndex {
        NodeIndex::build(&five_nodes()).unwrap()
    }

    pub fn close(a: rr_core::Coordinate, lon: f64, lat: f64) -> bool {
        (a.lon - lon).abs() < 1e-9 && (a.lat - lat).abs() < 1e-9
    }
}

// ── Index ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use rr_core::{Coordinate, NormalizedId};

    use crate::{NodeIndex, SpatialError};

    #[test]
    fn empty_coordinate_table_is_fatal() {
        assert_eq!(NodeIndex::build(&[]).err(), Some(SpatialError::EmptyIndex));
    }

    #[test]
    fn all_non_finite_is_empty() {
        let coords = [Coordinate::new(f64::NAN, 0.0), Coordinate::new(0.0, f64::INFINITY)];
        assert_eq!(NodeIndex::build(&coords).err(), Some(SpatialError::EmptyIndex));
    }

    #[test]
    fn nearest_is_node_two() {
        let idx = super::helpers::five_node_index();
        assert_eq!(idx.len(), 5);
        // (2.2, 2.6) is ~0.45 from node 2 and > 2.6 from everything else.
        assert_eq!(idx.nearest(Coordinate::new(2.2, 2.6)), Some(NormalizedId(2)));
    }

    #[test]
    fn exact_position_and_corners() {
        let idx = super::helpers::five_node_index();
        assert_eq!(idx.nearest(Coordinate::new(0.0, 0.0)), Some(NormalizedId(0)));
        assert_eq!(idx.nearest(Coordinate::new(100.0, 100.0)), Some(NormalizedId(4)));
        assert_eq!(idx.nearest(Coordinate::new(-50.0, 7.0)), Some(NormalizedId(3)));
    }

    #[test]
    fn tie_goes_to_lowest_id() {
        // (2, 0) is exactly 2.0 from node 0 and node 1.
        let idx = super::helpers::five_node_index();
        assert_eq!(idx.nearest(Coordinate::new(2.0, 0.0)), Some(NormalizedId(0)));

        // Coincident nodes: the later duplicate never wins.
        let coords = [
            Coordinate::new(9.0, 9.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(1.0, 1.0),
        ];
        let idx = NodeIndex::build(&coords).unwrap();
        assert_eq!(idx.nearest(Coordinate::new(1.1, 1.0)), Some(NormalizedId(1)));
    }

    #[test]
    fn tie_independent_of_insertion_order() {
        // Node 0 lies east, node 1 west; points on the axis between them tie.
        let coords = [
            Coordinate::new(3.0, 0.0),
            Coordinate::new(-3.0, 0.0),
        ];
        let idx = NodeIndex::build(&coords).unwrap();
        assert_eq!(idx.nearest(Coordinate::new(0.0, 0.0)), Some(NormalizedId(0)));
        assert_eq!(idx.nearest(Coordinate::new(0.0, 5.0)), Some(NormalizedId(0)));
    }

    #[test]
    fn non_finite_query_returns_none() {
        let idx = super::helpers::five_node_index();
        assert_eq!(idx.nearest(Coordinate::new(f64::NAN, 1.0)), None);
        assert_eq!(idx.nearest(Coordinate::new(1.0, f64::NEG_INFINITY)), None);
    }

    #[test]
    fn node_ids_past_u32_rejected() {
        let past = u32::MAX as usize + 1;
        assert_eq!(crate::index::node_id(3, 4), Ok(NormalizedId(3)));
        assert_eq!(crate::index::node_id(past, past + 1), Err(SpatialError::TooManyNodes(past + 1)));
    }

    #[test]
    fn non_finite_nodes_are_not_indexed() {
        let coords = [
            Coordinate::new(f64::NAN, f64::NAN),
            Coordinate::new(5.0, 5.0),
        ];
        let idx = NodeIndex::build(&coords).unwrap();
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.skipped(), 1);
        assert_eq!(idx.nearest(Coordinate::new(0.0, 0.0)), Some(NormalizedId(1)));
    }

    #[test]
    fn batch_matches_single_queries_in_order() {
        let idx = super::helpers::five_node_index();
        let queries: Vec<Coordinate> = (0..200)
            .map(|i| Coordinate::new((i % 17) as f64 * 0.4 - 0.5, (i % 23) as f64 * 0.3 - 0.5))
            .chain([Coordinate::new(f64::NAN, 0.0)])
            .collect();
        let batch = idx.nearest_batch(&queries);
        assert_eq!(batch.len(), queries.len());
        for (q, got) in queries.iter().zip(&batch) {
            assert_eq!(*got, idx.nearest(*q));
        }
        assert_eq!(batch.last(), Some(&None));
    }

    #[test]
    fn matches_linear_scan() {
        let nodes = super::helpers::five_nodes();
        let idx = NodeIndex::build(&nodes).unwrap();
        for i in 0..50 {
            let q = Coordinate::new(i as f64 * 0.13, 6.0 - i as f64 * 0.11);
            let brute = nodes
                .iter()
                .enumerate()
                .min_by(|(ia, a), (ib, b)| {
                    a.planar_distance_2(q)
                        .total_cmp(&b.planar_distance_2(q))
                        .then(ia.cmp(ib))
                })
                .map(|(i, _)| NormalizedId(i as u32));
            assert_eq!(idx.nearest(q), brute, "query {q}");
        }
    }
}

// ── Canonical names ───────────────────────────────────────────────────────────

#[cfg(test)]
mod canonical {
    use crate::canonical_name;

    #[test]
    fn substitution_table() {
        assert_eq!(canonical_name("City Hall"), "City_Hall");
        assert_eq!(canonical_name("City-Hall"), "City_Hall");
        assert_eq!(canonical_name("Saddar/Empress Market"), "Saddar_Empress_Market");
        assert_eq!(canonical_name("St. Patrick's Cathedral"), "St_Patricks_Cathedral");
        assert_eq!(canonical_name("Jinnah\u{2019}s Tomb"), "Jinnahs_Tomb");
    }

    #[test]
    fn all_whitespace_replaced() {
        let c = canonical_name("a\tb\nc\u{00A0}d  e");
        assert_eq!(c, "a_b_c_d__e");
        assert!(!c.chars().any(char::is_whitespace));
    }

    #[test]
    fn other_characters_pass_through() {
        assert_eq!(canonical_name("Café_(Ø)#1"), "Café_(Ø)#1");
        assert_eq!(canonical_name("مزار قائد"), "مزار_قائد");
    }

    #[test]
    fn can_become_empty() {
        assert_eq!(canonical_name("..."), "");
        assert_eq!(canonical_name("'"), "");
    }
}

// ── Representative points ─────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use rr_core::FeatureGeometry;

    use super::helpers::close;
    use crate::{representative_point, GeometryDefect};

    fn square(x0: f64, y0: f64, side: f64) -> Vec<[f64; 2]> {
        vec![[x0, y0], [x0 + side, y0], [x0 + side, y0 + side], [x0, y0 + side], [x0, y0]]
    }

    #[test]
    fn point_is_itself() {
        let p = representative_point(&FeatureGeometry::Point([67.03, 24.86])).unwrap();
        assert_eq!((p.lon, p.lat), (67.03, 24.86));
    }

    #[test]
    fn line_uses_length_weighted_centroid() {
        // Long leg 0→4 on x, short leg 4→(4,1): centroid pulled toward the long leg.
        let g = FeatureGeometry::LineString(vec![[0.0, 0.0], [4.0, 0.0], [4.0, 1.0]]);
        let p = representative_point(&g).unwrap();
        // Σ(len·mid)/Σlen = (4·(2,0) + 1·(4,0.5)) / 5
        assert!(close(p, 2.4, 0.1), "got {p}");
    }

    #[test]
    fn polygon_area_centroid() {
        let p = representative_point(&FeatureGeometry::Polygon(vec![square(0.0, 0.0, 2.0)])).unwrap();
        assert!(close(p, 1.0, 1.0), "got {p}");
    }

    #[test]
    fn open_ring_is_closed() {
        let mut ring = square(0.0, 0.0, 2.0);
        ring.pop();
        let p = representative_point(&FeatureGeometry::Polygon(vec![ring])).unwrap();
        assert!(close(p, 1.0, 1.0), "got {p}");
    }

    #[test]
    fn polygon_hole_shifts_centroid() {
        let outer = square(0.0, 0.0, 4.0);
        let hole = square(2.0, 0.0, 2.0);
        let p = representative_point(&FeatureGeometry::Polygon(vec![outer, hole])).unwrap();
        // Remaining L-shape: 16·(2,2) − 4·(3,1) over 12 = (5/3, 7/3).
        assert!(close(p, 5.0 / 3.0, 7.0 / 3.0), "got {p}");
    }

    #[test]
    fn multipolygon_area_weighted() {
        let g = FeatureGeometry::MultiPolygon(vec![
            vec![square(0.0, 0.0, 1.0)],
            vec![square(2.0, 0.0, 1.0)],
        ]);
        let p = representative_point(&g).unwrap();
        assert!(close(p, 1.5, 0.5), "got {p}");
    }

    #[test]
    fn degenerate_polygon_falls_back_to_line() {
        let g = FeatureGeometry::Polygon(vec![vec![[0.0, 0.0], [2.0, 0.0], [0.0, 0.0]]]);
        let p = representative_point(&g).unwrap();
        assert!(close(p, 1.0, 0.0), "got {p}");
    }

    #[test]
    fn non_finite_vertices_are_malformed() {
        let nan = f64::NAN;
        let inf = f64::INFINITY;
        let cases = [
            FeatureGeometry::Point([nan, 0.0]),
            FeatureGeometry::LineString(vec![[0.0, 0.0], [inf, 0.0]]),
            FeatureGeometry::Polygon(vec![vec![[0.0, 0.0], [1.0, nan], [1.0, 1.0], [0.0, 0.0]]]),
            FeatureGeometry::Polygon(vec![square(0.0, 0.0, 4.0), vec![[1.0, 1.0], [inf, 1.0], [1.0, 2.0]]]),
            FeatureGeometry::MultiPolygon(vec![
                vec![square(0.0, 0.0, 1.0)],
                vec![vec![[2.0, 0.0], [3.0, 0.0], [3.0, inf], [2.0, 0.0]]],
            ]),
        ];
        for g in &cases {
            assert_eq!(representative_point(g), Err(GeometryDefect::NonFinite), "{g:?}");
        }
    }

    #[test]
    fn overflowing_centroid_is_malformed() {
        let g = FeatureGeometry::LineString(vec![[f64::MAX, 0.0], [-f64::MAX, 0.0], [f64::MAX, 0.0]]);
        assert!(representative_point(&g).is_err());
    }

    #[test]
    fn empty_shapes_are_malformed() {
        assert_eq!(
            representative_point(&FeatureGeometry::LineString(vec![])),
            Err(GeometryDefect::Empty)
        );
        assert_eq!(
            representative_point(&FeatureGeometry::Polygon(vec![])),
            Err(GeometryDefect::Empty)
        );
        assert_eq!(
            representative_point(&FeatureGeometry::Polygon(vec![vec![]])),
            Err(GeometryDefect::Empty)
        );
        assert_eq!(
            representative_point(&FeatureGeometry::MultiPolygon(vec![])),
            Err(GeometryDefect::Empty)
        );
    }
}

// ── Landmark resolution ───────────────────────────────────────────────────────

#[cfg(test)]
mod landmarks {
    use rr_core::{Coordinate, FeatureGeometry, FeatureId, NormalizedId, RawFeature};

    use crate::{resolve_landmarks, GeometryDefect, Landmark, NodeIndex, SpatialError};

    #[test]
    fn scenario_test_spot() {
        let idx = NodeIndex::build(&[
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(10.0, 10.0),
        ])
        .unwrap();
        let set = resolve_landmarks(&idx, &[RawFeature::point(Some("Test Spot"), 0.1, 0.1)]).unwrap();
        assert_eq!(
            set.landmarks,
            vec![Landmark { name: "Test_Spot".into(), node: NormalizedId(0), feature: FeatureId(0) }]
        );
    }

    #[test]
    fn first_occurrence_wins() {
        let idx = super::helpers::five_node_index();
        let features = [
            RawFeature::point(Some("City Hall"), 0.1, 0.0),  // → node 0
            RawFeature::point(Some("City-Hall"), 6.0, 6.1),  // → node 4, same canonical name
            RawFeature::point(Some("Museum"), 2.0, 3.0),     // → node 2
        ];
        let set = resolve_landmarks(&idx, &features).unwrap();
        let lines: Vec<(&str, u32)> =
            set.landmarks.iter().map(|l| (l.name.as_str(), l.node.0)).collect();
        assert_eq!(lines, vec![("City_Hall", 0), ("Museum", 2)]);
        assert_eq!(set.report.duplicates, 1);
    }

    #[test]
    fn unnamed_features_never_queried() {
        let idx = super::helpers::five_node_index();
        let features = [
            RawFeature::point(None, 0.0, 0.0),
            RawFeature::point(Some(""), 0.0, 0.0),
            RawFeature::point(Some("   "), 0.0, 0.0),
            RawFeature::point(Some("..."), 0.0, 0.0),
            RawFeature::point(Some("Kept"), 4.0, 0.0),
        ];
        let set = resolve_landmarks(&idx, &features).unwrap();
        assert_eq!(set.report.unnamed, 4);
        assert_eq!(set.landmarks.len(), 1);
        assert_eq!(set.landmarks[0].feature, FeatureId(4));
        assert_eq!(set.landmarks[0].node, NormalizedId(1));
    }

    #[test]
    fn malformed_geometry_skipped() {
        let idx = super::helpers::five_node_index();
        let mut broken = RawFeature::point(Some("Broken"), 0.0, 0.0);
        broken.geometry = FeatureGeometry::Polygon(vec![]);
        let features = [broken, RawFeature::point(Some("Fine"), 6.0, 6.0)];

        let set = resolve_landmarks(&idx, &features).unwrap();
        assert_eq!(set.landmarks.len(), 1);
        assert_eq!(
            set.report.malformed,
            vec![SpatialError::MalformedGeometry {
                feature: FeatureId(0),
                kind:    "Polygon",
                defect:  GeometryDefect::Empty,
            }]
        );
    }

    #[test]
    fn non_finite_point_is_malformed_and_name_left_free() {
        let idx = super::helpers::five_node_index();
        let features = [
            RawFeature::point(Some("Gate"), f64::NAN, 0.0),
            RawFeature::point(Some("Gate"), 0.0, 6.0),
        ];
        let set = resolve_landmarks(&idx, &features).unwrap();
        assert_eq!(
            set.report.malformed,
            vec![SpatialError::MalformedGeometry {
                feature: FeatureId(0),
                kind:    "Point",
                defect:  GeometryDefect::NonFinite,
            }]
        );
        assert_eq!(set.report.dropped_queries, 0);
        assert_eq!(set.report.duplicates, 0);
        assert_eq!(set.landmarks.len(), 1);
        assert_eq!(set.landmarks[0].node, NormalizedId(3));
        assert_eq!(set.landmarks[0].feature, FeatureId(1));
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_name() {
        let idx = super::helpers::five_node_index();
        let features = [
            RawFeature::point(Some(" Test Spot"), 0.0, 0.0),
            RawFeature::point(Some("Test Spot "), 4.0, 0.0),
            RawFeature::point(Some("Test Spot"), 2.0, 3.0),
        ];
        let set = resolve_landmarks(&idx, &features).unwrap();
        let lines: Vec<(&str, u32)> =
            set.landmarks.iter().map(|l| (l.name.as_str(), l.node.0)).collect();
        assert_eq!(lines, vec![("_Test_Spot", 0), ("Test_Spot_", 1), ("Test_Spot", 2)]);
        assert_eq!(set.report.duplicates, 0);
    }

    #[test]
    fn feature_ids_past_u32_rejected() {
        let past = u32::MAX as usize + 1;
        assert_eq!(crate::landmarks::feature_id(7, 8), Ok(FeatureId(7)));
        assert_eq!(crate::landmarks::feature_id(past, past + 1), Err(SpatialError::TooManyFeatures(past + 1)));
    }

    #[test]
    fn polygon_feature_resolves_from_centroid() {
        let idx = super::helpers::five_node_index();
        let mut park = RawFeature::point(Some("Park"), 0.0, 0.0);
        // Square centred on (2, 3): every vertex is closer to another node,
        // the centroid is exactly node 2.
        park.geometry = FeatureGeometry::Polygon(vec![vec![
            [0.5, 1.5], [3.5, 1.5], [3.5, 4.5], [0.5, 4.5], [0.5, 1.5],
        ]]);
        let set = resolve_landmarks(&idx, &[park]).unwrap();
        assert_eq!(set.landmarks[0].node, NormalizedId(2));
    }

    #[test]
    fn names_contain_no_whitespace() {
        let idx = super::helpers::five_node_index();
        let features: Vec<RawFeature> = ["A B", "C\tD", "E - F", "G/H I"]
            .iter()
            .map(|&n| RawFeature::point(Some(n), 1.0, 1.0))
            .collect();
        let set = resolve_landmarks(&idx, &features).unwrap();
        assert_eq!(set.landmarks.len(), 4);
        for l in &set.landmarks {
            assert!(!l.name.chars().any(char::is_whitespace), "{:?}", l.name);
        }
    }
}

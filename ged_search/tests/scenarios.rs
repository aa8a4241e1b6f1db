use std::sync::OnceLock;
use std::time::Duration;

use ged_search::{
    AllowAll, EditOperation, GedError, GedSearch, Graph, Mapping, SameKindOrPlaceholder,
    SearchConfig, Vertex, VertexId, diff, pad_to_equal_size,
};
use rstest::rstest;

fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Builds a graph from `(kind, name)` vertices and `(one, two, label)` edges.
fn build(vertices: &[(&str, &str)], edges: &[(usize, usize, &str)]) -> Graph {
    let mut g = Graph::new();
    let ids: Vec<VertexId> = vertices
        .iter()
        .map(|(kind, name)| g.add_vertex(Vertex::new(*kind).with_property("name", *name)))
        .collect();
    for &(one, two, label) in edges {
        g.add_edge(ids[one], ids[two], label).unwrap();
    }
    g
}

fn schema() -> Graph {
    build(
        &[
            ("Object", "Query"),
            ("Field", "user"),
            ("Object", "User"),
            ("Field", "id"),
            ("Scalar", "ID"),
        ],
        &[
            (0, 1, "field"),
            (1, 2, "type"),
            (2, 3, "field"),
            (3, 4, "type"),
        ],
    )
}

#[rstest]
#[case::identity(schema(), schema(), 0)]
#[case::single_relabel(
    build(&[("X", "A")], &[]),
    build(&[("Y", "B")], &[]),
    1
)]
#[case::missing_edge(
    build(&[("Object", "A"), ("Object", "B")], &[(0, 1, "L")]),
    build(&[("Object", "A"), ("Object", "B")], &[]),
    1
)]
#[case::edge_relabel(
    build(&[("Object", "A"), ("Object", "B")], &[(0, 1, "L")]),
    build(&[("Object", "A"), ("Object", "B")], &[(0, 1, "M")]),
    1
)]
#[case::reversed_edge(
    build(&[("Object", "A"), ("Object", "B")], &[(0, 1, "L")]),
    build(&[("Object", "A"), ("Object", "B")], &[(1, 0, "L")]),
    2
)]
#[case::shuffled_copy(
    schema(),
    build(
        &[
            ("Scalar", "ID"),
            ("Field", "id"),
            ("Object", "User"),
            ("Field", "user"),
            ("Object", "Query"),
        ],
        &[(4, 3, "field"), (3, 2, "type"), (2, 1, "field"), (1, 0, "type")],
    ),
    0
)]
fn test_search_cost(#[case] source: Graph, #[case] target: Graph, #[case] expected: u32) {
    init_test_logger();

    let result = diff(&source, &target, &AllowAll).unwrap();
    assert_eq!(result.cost, expected);
    assert_eq!(result.operations.len(), expected as usize);
    assert!(result.exhaustive);
    assert_eq!(result.mapping.len(), source.vertex_count());
}

#[test]
fn test_single_vertex_relabel_is_a_change() {
    init_test_logger();

    let source = build(&[("X", "A")], &[]);
    let target = build(&[("Y", "B")], &[]);
    let result = diff(&source, &target, &AllowAll).unwrap();
    assert_eq!(
        result.operations,
        vec![EditOperation::ChangeVertex {
            source: VertexId::new(0),
            target: VertexId::new(0),
        }]
    );
}

#[test]
fn test_missing_edge_is_a_deletion() {
    init_test_logger();

    let source = build(&[("Object", "A"), ("Object", "B")], &[(0, 1, "L")]);
    let target = build(&[("Object", "A"), ("Object", "B")], &[]);
    let result = diff(&source, &target, &AllowAll).unwrap();
    assert!(
        result
            .operations
            .iter()
            .any(|op| matches!(op, EditOperation::DeleteEdge { .. }))
    );
    assert_eq!(
        result.operations[0].describe(&source, &target),
        "Delete edge Object {name=A} -[L]-> Object {name=B}"
    );
}

#[test]
fn test_extra_vertex_is_deleted_against_placeholder() {
    init_test_logger();

    let mut source = build(&[("Object", "Query"), ("Scalar", "ID")], &[(0, 1, "field")]);
    let mut target = build(&[("Object", "Query")], &[]);
    assert_eq!(pad_to_equal_size(&mut source, &mut target), 1);

    let oracle = SameKindOrPlaceholder::new(&source, &target);
    let result = diff(&source, &target, &oracle).unwrap();

    let scalar = VertexId::new(1);
    let placeholder = VertexId::new(1);
    assert!(result.operations.contains(&EditOperation::DeleteVertex {
        source: scalar,
        target: placeholder,
    }));
    assert_eq!(result.mapping.target_for(scalar), Some(placeholder));
    // the vertex and its edge
    assert_eq!(result.cost, 2);
}

#[test]
fn test_new_vertex_is_inserted_against_placeholder() {
    init_test_logger();

    let mut source = build(&[("Object", "Query")], &[]);
    let mut target = build(&[("Object", "Query"), ("Enum", "Role")], &[]);
    pad_to_equal_size(&mut source, &mut target);

    let oracle = SameKindOrPlaceholder::new(&source, &target);
    let result = diff(&source, &target, &oracle).unwrap();
    assert_eq!(result.cost, 1);
    assert!(matches!(
        result.operations[..],
        [EditOperation::InsertVertex { .. }]
    ));
}

#[test]
fn test_oracle_keeps_kinds_apart() {
    init_test_logger();

    // Cheapest unconstrained mapping relabels the Scalar into an Enum; with
    // kinds kept apart it has to go through placeholders instead.
    let mut source = build(&[("Scalar", "Date")], &[]);
    let mut target = build(&[("Enum", "Date")], &[]);
    source.add_vertex(Vertex::placeholder());
    target.add_vertex(Vertex::placeholder());

    assert_eq!(diff(&source, &target, &AllowAll).unwrap().cost, 1);

    let oracle = SameKindOrPlaceholder::new(&source, &target);
    let result = diff(&source, &target, &oracle).unwrap();
    assert_eq!(result.cost, 2);
    assert_ne!(result.mapping.target_for(VertexId::new(0)), Some(VertexId::new(0)));
}

#[test]
fn test_start_mapping_is_respected() {
    init_test_logger();

    let source = schema();
    let target = schema();
    let forced = Mapping::from_pairs([(VertexId::new(0), VertexId::new(2))]).unwrap();
    let result = GedSearch::new(&source, &target, &AllowAll)
        .start_mapping(forced)
        .run()
        .unwrap();

    assert_eq!(result.mapping.source_at(0), Some(VertexId::new(0)));
    assert_eq!(result.mapping.target_for(VertexId::new(0)), Some(VertexId::new(2)));
    assert!(result.cost > 0);
}

#[test]
fn test_generous_time_limit_is_exhaustive() {
    init_test_logger();

    let config = SearchConfig::builder()
        .time_limit(Duration::from_secs(60))
        .progress_interval(1)
        .build();
    let result = GedSearch::new(&schema(), &schema(), &AllowAll)
        .config(config)
        .run()
        .unwrap();
    assert_eq!(result.cost, 0);
    assert!(result.exhaustive);
    assert!(result.stats.popped > 0);
    assert!(result.stats.pushed >= result.stats.popped);
}

#[test]
fn test_size_mismatch_is_reported() {
    init_test_logger();

    let source = schema();
    let target = build(&[("Object", "Query")], &[]);
    let err = diff(&source, &target, &AllowAll).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Vertex count mismatch: source has 5, target has 1"
    );
    assert!(matches!(err, GedError::SizeMismatch { .. }));
}

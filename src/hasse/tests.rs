use crate::graph::{Color, RBGraph, SignedCharacter};
use crate::hasse::HasseDiagram;
use crate::test_utils::{graph_from_matrix, init_logger};

#[test]
fn species_with_equal_character_sets_collapse() {
    init_logger();
    let gm = graph_from_matrix("2 2\n1 1\n1 1\n");
    let hasse = HasseDiagram::build(&gm);

    assert_eq!(hasse.num_vertices(), 1);
    assert_eq!(hasse.num_edges(), 0);
    assert_eq!(hasse.vertex(0).species, vec!["s1", "s2"]);
    assert_eq!(hasse.vertex(0).characters, vec!["c1", "c2"]);
}

#[test]
fn chain_poset_is_transitively_reduced() {
    init_logger();
    // C(s1) = {c1}, C(s2) = {c1, c2}, C(s3) = {c1, c2, c3}.
    let gm = graph_from_matrix("3 3\n1 0 0\n1 1 0\n1 1 1\n");
    let hasse = HasseDiagram::build(&gm);

    assert_eq!(hasse.num_vertices(), 3);
    assert_eq!(hasse.num_edges(), 2);
    assert_eq!(
        hasse.edge(0, 1).unwrap().labels,
        vec![SignedCharacter::gain("c2")]
    );
    assert_eq!(
        hasse.edge(1, 2).unwrap().labels,
        vec![SignedCharacter::gain("c3")]
    );
    assert!(
        hasse.edge(0, 2).is_none(),
        "the transitive edge must be removed"
    );
}

#[test]
fn diamond_poset_keeps_only_cover_edges() {
    // C(s1) = {c1}, C(s2) = {c1, c2}, C(s3) = {c1, c3},
    // C(s4) = {c1, c2, c3}.
    let gm = graph_from_matrix("4 3\n1 0 0\n1 1 0\n1 0 1\n1 1 1\n");
    let hasse = HasseDiagram::build(&gm);

    assert_eq!(hasse.num_vertices(), 4);
    assert_eq!(hasse.num_edges(), 4);
    assert!(hasse.edge(0, 1).is_some());
    assert!(hasse.edge(0, 2).is_some());
    assert!(hasse.edge(1, 3).is_some());
    assert!(hasse.edge(2, 3).is_some());
    assert!(hasse.edge(0, 3).is_none());
}

#[test]
fn edge_labels_are_the_gained_characters_in_order() {
    // C(s1) = {c2}, C(s2) = {c1, c2, c3}: a single cover edge gaining two
    // characters at once.
    let gm = graph_from_matrix("2 3\n0 1 0\n1 1 1\n");
    let hasse = HasseDiagram::build(&gm);

    assert_eq!(hasse.num_edges(), 1);
    assert_eq!(
        hasse.edge(0, 1).unwrap().labels,
        vec![SignedCharacter::gain("c1"), SignedCharacter::gain("c3")]
    );
}

#[test]
fn hasse_edges_respect_strict_inclusion() {
    let gm = graph_from_matrix("3 4\n1 1 0 0\n0 1 1 0\n1 1 1 1\n");
    let hasse = HasseDiagram::build(&gm);

    for v in 0..hasse.num_vertices() {
        for edge in hasse.out_edges(v) {
            let small = &hasse.vertex(edge.source).characters;
            let large = &hasse.vertex(edge.target).characters;
            assert!(small.len() < large.len());
            assert!(small.iter().all(|c| large.contains(c)));
            let expected: Vec<SignedCharacter> = large
                .iter()
                .filter(|&c| !small.contains(c))
                .map(SignedCharacter::gain)
                .collect();
            assert_eq!(edge.labels, expected);
        }
    }
}

#[test]
fn sources_are_the_minima() {
    let gm = graph_from_matrix("3 4\n1 1 0 0\n0 1 1 0\n0 0 1 1\n");
    let hasse = HasseDiagram::build(&gm);

    for &source in &hasse.sources() {
        assert_eq!(hasse.in_degree(source), 0);
    }
    assert_eq!(hasse.sources().len(), 2);
}

#[test]
fn reduce_prunes_vertices_with_active_species() {
    init_logger();
    // The diagram is built from the black part; s1 is active in the current
    // graph through the red edge of c3.
    let mut g = RBGraph::new();
    let s1 = g.add_species("s1");
    let s2 = g.add_species("s2");
    let c1 = g.add_character("c1");
    let c2 = g.add_character("c2");
    let c3 = g.add_character("c3");
    g.add_edge(s1, c1, Color::Black).unwrap();
    g.add_edge(s2, c2, Color::Black).unwrap();
    g.add_edge(s1, c3, Color::Red).unwrap();
    g.add_edge(s2, c3, Color::Red).unwrap();

    let gm = graph_from_matrix("2 2\n1 0\n0 1\n");
    let mut hasse = HasseDiagram::build(&gm);
    assert_eq!(hasse.num_vertices(), 2);

    hasse.reduce(&g);
    assert!(hasse.is_empty(), "both species carry red edges");
}

#[test]
fn reduce_keeps_inactive_species() {
    let mut g = RBGraph::new();
    let s1 = g.add_species("s1");
    let s2 = g.add_species("s2");
    let c1 = g.add_character("c1");
    let c2 = g.add_character("c2");
    let c3 = g.add_character("c3");
    g.add_edge(s1, c1, Color::Black).unwrap();
    g.add_edge(s2, c2, Color::Black).unwrap();
    g.add_edge(s1, c3, Color::Red).unwrap();

    let gm = graph_from_matrix("2 2\n1 0\n0 1\n");
    let mut hasse = HasseDiagram::build(&gm);
    hasse.reduce(&g);

    assert_eq!(hasse.num_vertices(), 1);
    assert_eq!(hasse.vertex(0).species, vec!["s2"]);
}

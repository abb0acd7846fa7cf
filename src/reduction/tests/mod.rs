
use crate::graph::{Color, RBGraph};

/// A graph whose reduced Hasse diagram offers two safe sources, the first of
/// which is a trap.
///
/// Realizing the first source (`c4+`) drops s1 and leaves c1 universal; the
/// forced `c1+` then strands c4, c5 and c6 as three single-species conflicts
/// bridged only by c2 and c3, a state with no universal character, no free
/// species and an empty reduced diagram. The one-step safety probe cannot
/// see past the forced move, so only backtracking reaches the second source
/// (`c1+`), which reduces the graph completely.
fn trap_source_fixture() -> RBGraph {
    let mut g = RBGraph::new();
    let s1 = g.add_species("s1");
    let s2 = g.add_species("s2");
    let s3 = g.add_species("s3");
    let s4 = g.add_species("s4");
    let c1 = g.add_character("c1");
    let c2 = g.add_character("c2");
    let c3 = g.add_character("c3");
    let c4 = g.add_character("c4");
    let c5 = g.add_character("c5");
    let c6 = g.add_character("c6");
    g.add_edge(s2, c1, Color::Black).unwrap();
    g.add_edge(s3, c1, Color::Black).unwrap();
    g.add_edge(s4, c1, Color::Black).unwrap();
    g.add_edge(s2, c2, Color::Black).unwrap();
    g.add_edge(s3, c2, Color::Black).unwrap();
    g.add_edge(s3, c3, Color::Black).unwrap();
    g.add_edge(s4, c3, Color::Black).unwrap();
    g.add_edge(s1, c4, Color::Black).unwrap();
    g.add_edge(s3, c4, Color::Black).unwrap();
    g.add_edge(s4, c4, Color::Black).unwrap();
    g.add_edge(s3, c5, Color::Red).unwrap();
    g.add_edge(s4, c6, Color::Red).unwrap();
    g
}

/// A graph with no universal character, no free species and no safe source:
/// two pending characters crossed over two species. Every species carries a
/// red edge, so the reduced Hasse diagram is always empty.
fn no_reduction_fixture() -> RBGraph {
    let mut g = RBGraph::new();
    let s1 = g.add_species("s1");
    let s2 = g.add_species("s2");
    let c1 = g.add_character("c1");
    let c2 = g.add_character("c2");
    g.add_edge(s1, c1, Color::Black).unwrap();
    g.add_edge(s2, c1, Color::Red).unwrap();
    g.add_edge(s2, c2, Color::Black).unwrap();
    g.add_edge(s1, c2, Color::Red).unwrap();
    g
}

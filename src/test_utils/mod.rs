use crate::graph::{Color, RBGraph};

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Parses a red-black graph from inline matrix text.
pub fn graph_from_matrix(text: &str) -> RBGraph {
    crate::matrix::parse_matrix(text.as_bytes()).expect("fixture matrix must parse")
}

/// The universal-character fixture: species s3..s5 and characters c1..c8,
/// with c4 already realized (red edges to all three species).
///
/// Expected predicate results:
/// - `is_universal(c2)` holds (black edges to every species),
/// - `is_universal(c4)` fails (active),
/// - `is_universal(c5)` fails (missing species),
/// - `is_universal(s3)` fails (not a character).
pub fn universal_fixture() -> RBGraph {
    let mut g = RBGraph::new();
    let s3 = g.add_species("s3");
    let s4 = g.add_species("s4");
    let s5 = g.add_species("s5");
    let c1 = g.add_character("c1");
    let c2 = g.add_character("c2");
    let c3 = g.add_character("c3");
    let c4 = g.add_character("c4");
    let c5 = g.add_character("c5");
    let _c6 = g.add_character("c6");
    let c7 = g.add_character("c7");
    let _c8 = g.add_character("c8");

    g.add_edge(s3, c2, Color::Black).unwrap();
    g.add_edge(s3, c3, Color::Black).unwrap();
    g.add_edge(s3, c4, Color::Red).unwrap();
    g.add_edge(s4, c1, Color::Black).unwrap();
    g.add_edge(s4, c2, Color::Black).unwrap();
    g.add_edge(s4, c4, Color::Red).unwrap();
    g.add_edge(s5, c1, Color::Black).unwrap();
    g.add_edge(s5, c2, Color::Black).unwrap();
    g.add_edge(s5, c3, Color::Black).unwrap();
    g.add_edge(s5, c4, Color::Red).unwrap();
    g.add_edge(s5, c5, Color::Black).unwrap();
    g.add_edge(s5, c7, Color::Black).unwrap();

    g
}

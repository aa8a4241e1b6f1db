use tracing::debug;

use super::{Graph, Vertex};

/// Appends isolated placeholders to the smaller graph until both have the
/// same vertex count. Returns the number of placeholders added.
///
/// This is the naive form of padding: every real vertex may end up paired
/// with any placeholder. Callers with domain knowledge should pad themselves
/// and supply a stricter [`FeasibilityOracle`](crate::FeasibilityOracle).
pub fn pad_to_equal_size(source: &mut Graph, target: &mut Graph) -> usize {
    let (source_len, target_len) = (source.vertex_count(), target.vertex_count());
    let (smaller, missing) = match source_len.cmp(&target_len) {
        std::cmp::Ordering::Less => (source, target_len - source_len),
        std::cmp::Ordering::Greater => (target, source_len - target_len),
        std::cmp::Ordering::Equal => return 0,
    };
    for _ in 0..missing {
        smaller.add_vertex(Vertex::placeholder());
    }
    debug!("padded graph with {} isolated vertices", missing);
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_the_smaller_side() {
        let mut source = Graph::new();
        source.add_vertex(Vertex::new("A"));
        let mut target = Graph::new();
        target.add_vertex(Vertex::new("A"));
        target.add_vertex(Vertex::new("B"));
        target.add_vertex(Vertex::new("C"));

        assert_eq!(pad_to_equal_size(&mut source, &mut target), 2);
        assert_eq!(source.vertex_count(), 3);
        assert_eq!(source.placeholder_count(), 2);
        assert_eq!(target.placeholder_count(), 0);
        assert_eq!(pad_to_equal_size(&mut source, &mut target), 0);
    }
}

use crate::model::NodeId;
use crate::Graph;

/// Nearest live node whose centre lies within `radius` of `(x, y)`.
/// Ties keep the earlier-inserted node.
pub fn node_at_impl(g: &Graph, x: f32, y: f32, radius: f32) -> Option<NodeId> {
    if !x.is_finite() || !y.is_finite() || radius.is_nan() || radius < 0.0 {
        return None;
    }
    let r2 = radius * radius;
    let mut best: Option<(NodeId, f32)> = None;
    for n in g.nodes() {
        let dx = n.x - x;
        let dy = n.y - y;
        let d2 = dx * dx + dy * dy;
        if d2 <= r2 && best.map_or(true, |(_, bd)| d2 < bd) {
            best = Some((n.id, d2));
        }
    }
    best.map(|(id, _)| id)
}

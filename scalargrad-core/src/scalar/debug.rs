// src/scalar/debug.rs
use crate::scalar::Scalar;
use std::fmt;

/// Default operand depth rendered by the `Debug` implementation.
const DEFAULT_DEBUG_DEPTH: usize = 3;

impl Scalar {
    /// Renders this node and — recursively, up to `max_depth` levels — its
    /// operands as a human-readable string. Values print with 4 significant
    /// digits; once the depth limit is reached, operands are replaced by an
    /// ellipsis so the output stays finite for large graphs.
    ///
    /// Shared operands are rendered once per occurrence; this is a display
    /// of the expression tree, not a deduplicated view of the DAG (renderers
    /// that need deduplication should key on [`Scalar::node_id`]).
    pub fn display_graph(&self, max_depth: usize) -> String {
        let mut out = String::new();
        self.write_graph(&mut out, max_depth)
            .expect("writing to a String cannot fail");
        out
    }

    fn write_graph(&self, f: &mut impl fmt::Write, depth: usize) -> fmt::Result {
        let data = self.borrow_data();
        match &data.origin {
            None => write!(f, "Scalar({:.4})", data.value),
            Some(origin) => {
                write!(f, "Scalar({:.4}, op={}", data.value, origin.op.symbol())?;
                if depth == 0 {
                    write!(f, ", operands=...")?;
                } else {
                    write!(f, ", operands=(")?;
                    origin.operands[0].write_graph(f, depth - 1)?;
                    write!(f, ", ")?;
                    origin.operands[1].write_graph(f, depth - 1)?;
                    write!(f, ")")?;
                }
                write!(f, ")")
            }
        }
    }
}

// Manual implementation of the Debug trait: same view as `display_graph`,
// at a fixed default depth.
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_graph(f, DEFAULT_DEBUG_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use crate::Scalar;

    #[test]
    fn test_display_leaf() {
        let a = Scalar::new(3.0);
        assert_eq!(a.display_graph(5), "Scalar(3.0000)");
    }

    #[test]
    fn test_display_operation() {
        let a = Scalar::new(2.0);
        let b = Scalar::new(3.0);
        let c = &a * &b;
        assert_eq!(
            c.display_graph(1),
            "Scalar(6.0000, op=*, operands=(Scalar(2.0000), Scalar(3.0000)))"
        );
    }

    #[test]
    fn test_display_truncates_at_depth_limit() {
        let a = Scalar::new(2.0);
        let b = Scalar::new(3.0);
        let c = &a * &b;
        let d = &c + 1.0;
        assert_eq!(
            d.display_graph(1),
            "Scalar(7.0000, op=+, operands=(Scalar(6.0000, op=*, operands=...), Scalar(1.0000)))"
        );
    }

    #[test]
    fn test_debug_matches_display_graph() {
        let a = Scalar::new(2.0);
        let y = &a + 1.0;
        assert_eq!(format!("{:?}", y), y.display_graph(3));
    }
}

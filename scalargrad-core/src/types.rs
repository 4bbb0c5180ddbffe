/// The primitive operations a non-leaf node can be produced by.
///
/// This is a closed set: subtraction desugars to ADD of a negation and
/// division to MUL of an inverse before the graph is built, so neither tag
/// exists here and the backward-rule table stays minimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Binary addition.
    Add,
    /// Binary multiplication.
    Mul,
    /// Exponentiation (`base ** exponent`).
    Pow,
}

impl Op {
    /// Printable symbol for this operation, used by the debug view and by
    /// external graph renderers.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Mul => "*",
            Op::Pow => "**",
        }
    }
}

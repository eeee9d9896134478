use std::fmt;

/// Operators that can appear at an internal node of a formula.
///
/// Variant order is significant: binary operators come first, unary operators
/// start at `Factorial`. Leaves carry no operator at all (`Node::operator`
/// returns `None` for them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Pow, // ^
    Factorial, // !
    Sqrt,      // sqrt
    Neg,       // -- (unary minus)
}

impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
        Operator::Factorial,
        Operator::Sqrt,
        Operator::Neg,
    ];

    pub fn is_unary(self) -> bool {
        self >= Operator::Factorial
    }

    pub fn is_binary(self) -> bool {
        self <= Operator::Pow
    }

    /// Number of operands the operator takes.
    pub fn arity(self) -> usize {
        if self.is_unary() {
            1
        } else {
            2
        }
    }

    /// Canonical token, shared by the parser and the serializer.
    ///
    /// Unary minus is spelled `--` so that it never collides with binary `-`
    /// in prefix notation.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
            Operator::Factorial => "!",
            Operator::Sqrt => "sqrt",
            Operator::Neg => "--",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

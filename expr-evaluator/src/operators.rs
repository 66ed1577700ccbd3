use crate::tokenizer::Op;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Static description of a single operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDescriptor {
    pub symbol: &'static str,
    pub prec: i32,
    pub assoc: Associativity,
    /// Number of operands popped by the evaluator.
    pub arity: usize,
}

/// Precedence, associativity and arity of every supported operator.
///
/// Built once and shared read-only by the converter and the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorTable {
    pub(crate) plus: OperatorDescriptor,
    pub(crate) minus: OperatorDescriptor,
    pub(crate) mult: OperatorDescriptor,
    pub(crate) div: OperatorDescriptor,
    pub(crate) pow: OperatorDescriptor,
    pub(crate) neg: OperatorDescriptor,
}

impl OperatorTable {
    pub const STANDARD: OperatorTable = OperatorTable {
        plus: OperatorDescriptor {
            symbol: "+",
            prec: 2,
            assoc: Associativity::Left,
            arity: 2,
        },
        minus: OperatorDescriptor {
            symbol: "-",
            prec: 2,
            assoc: Associativity::Left,
            arity: 2,
        },
        mult: OperatorDescriptor {
            symbol: "*",
            prec: 3,
            assoc: Associativity::Left,
            arity: 2,
        },
        div: OperatorDescriptor {
            symbol: "/",
            prec: 3,
            assoc: Associativity::Left,
            arity: 2,
        },
        pow: OperatorDescriptor {
            symbol: "^",
            prec: 4,
            assoc: Associativity::Right,
            arity: 2,
        },
        // Binds tighter than `^`: `-2 ^ 2` is `(-2) ^ 2`.
        neg: OperatorDescriptor {
            symbol: "u-",
            prec: 5,
            assoc: Associativity::Right,
            arity: 1,
        },
    };

    pub fn standard() -> Self {
        Self::STANDARD
    }

    pub fn get(&self, op: Op) -> &OperatorDescriptor {
        match op {
            Op::Plus => &self.plus,
            Op::Minus => &self.minus,
            Op::Mult => &self.mult,
            Op::Div => &self.div,
            Op::Pow => &self.pow,
            Op::Neg => &self.neg,
        }
    }

    /// Returns `true` when `top` must be popped before `incoming` is pushed.
    pub fn pops_before(&self, top: Op, incoming: Op) -> bool {
        let top = self.get(top);
        let incoming = self.get(incoming);

        match incoming.assoc {
            Associativity::Left => top.prec >= incoming.prec,
            Associativity::Right => top.prec > incoming.prec,
        }
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        let table = OperatorTable::standard();
        assert!(table.get(Op::Plus).prec == table.get(Op::Minus).prec);
        assert!(table.get(Op::Mult).prec > table.get(Op::Plus).prec);
        assert!(table.get(Op::Pow).prec > table.get(Op::Div).prec);
        assert!(table.get(Op::Neg).prec > table.get(Op::Pow).prec);
    }

    #[test]
    fn test_associativity() {
        let table = OperatorTable::standard();
        // Left-associative operators yield to an equal-precedence top.
        assert!(table.pops_before(Op::Minus, Op::Plus));
        assert!(table.pops_before(Op::Div, Op::Mult));
        // Right-associative ones do not.
        assert!(!table.pops_before(Op::Pow, Op::Pow));
        assert!(!table.pops_before(Op::Neg, Op::Neg));
        assert!(table.pops_before(Op::Neg, Op::Pow));
    }

    #[test]
    fn test_arity() {
        let table = OperatorTable::default();
        assert_eq!(table.get(Op::Neg).arity, 1);
        assert_eq!(table.get(Op::Pow).arity, 2);
        assert_eq!(table.get(Op::Neg).symbol, "u-");
    }
}

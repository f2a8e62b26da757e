use std::fmt::{self, Display, Write};

use crate::reprs::ast::Type;

impl Type {
    fn write_display(&self, w: &mut impl Write) -> fmt::Result {
        match self {
            Type::Unit => w.write_str("()"),
            Type::Int => w.write_str("int"),
            Type::Fun { domains, range } => {
                w.write_char('(')?;
                let mut iter = domains.iter();
                if let Some(first) = iter.next() {
                    first.write_display(w)?;
                    for ty in iter {
                        w.write_str(", ")?;
                        ty.write_display(w)?;
                    }
                }
                w.write_str(") -> ")?;
                range.write_display(w)
            }
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_display(f)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    /// Every type with at most `depth` nested function arrows and at most
    /// two domains per arrow.
    fn all_types(depth: usize) -> Vec<Type> {
        let mut types = vec![Type::Unit, Type::Int];
        for _ in 0..depth {
            let smaller = types.clone();
            let mut next = smaller.clone();
            for arity in 0..=2 {
                for domains in (0..arity).map(|_| smaller.iter()).multi_cartesian_product() {
                    for range in &smaller {
                        next.push(Type::fun(domains.iter().copied().cloned(), range.clone()));
                    }
                }
            }
            types = next.into_iter().unique().collect();
        }
        types
    }

    #[test]
    fn equality_laws() {
        let types = all_types(1);
        for a in &types {
            assert_eq!(a, &a.clone());
            for b in &types {
                assert_eq!(a == b, b == a);
                for c in &types {
                    if a == b && b == c {
                        assert_eq!(a, c);
                    }
                }
            }
        }
    }

    #[test]
    fn fun_equality_requires_arity() {
        let unary = Type::fun([Type::Int], Type::Int);
        let binary = Type::fun([Type::Int, Type::Int], Type::Int);
        let nullary = Type::fun([], Type::Int);

        assert_ne!(unary, binary);
        assert_ne!(unary, nullary);
        assert_ne!(nullary, Type::Int);
        assert_ne!(Type::Unit, Type::Int);
        assert_eq!(unary, Type::fun([Type::Int], Type::Int));
        assert_ne!(unary, Type::fun([Type::Unit], Type::Int));
        assert_ne!(unary, Type::fun([Type::Int], Type::Unit));
    }

    #[test]
    fn nested_fun_equality() {
        let higher = |inner| Type::fun([Type::fun([inner], Type::Int)], Type::Unit);
        assert_eq!(higher(Type::Int), higher(Type::Int));
        assert_ne!(higher(Type::Int), higher(Type::Unit));
    }

    #[test]
    fn display() {
        assert_eq!(Type::Unit.to_string(), "()");
        assert_eq!(Type::fun([], Type::Int).to_string(), "() -> int");
        assert_eq!(
            Type::fun(
                [Type::Int, Type::fun([Type::Unit], Type::Int)],
                Type::fun([Type::Int], Type::Int),
            )
            .to_string(),
            "(int, (()) -> int) -> (int) -> int"
        );
    }
}

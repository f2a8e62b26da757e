use crate::reprs::common::Id;

/// A term of the calculus.
///
/// Trees are built directly by the host; there is no concrete syntax.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    Unit,
    Int(i64),
    Ident(Id),

    /// Multi-argument abstraction. Parameter names need not be distinct, a
    /// later parameter shadows an earlier one of the same name.
    Lambda {
        params: Vec<(Id, Type)>,
        body: Box<Expr>,
    },
    App {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },

    /// Binary operation on integers, `op` names an entry of the
    /// [`Binops`][crate::stdlib::Binops] registry.
    Binop {
        op: Id,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

/// Equality is structural: two `Fun` types are equal iff they have the same
/// arity, pointwise equal domains and equal ranges.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Unit,
    Int,
    Fun {
        domains: Vec<Type>,
        range: Box<Type>,
    },
}

impl Expr {
    pub fn unit() -> Self {
        Self::Unit
    }

    pub fn int(value: i64) -> Self {
        Self::Int(value)
    }

    pub fn ident(name: impl Into<Id>) -> Self {
        Self::Ident(name.into())
    }

    pub fn lambda<I, N>(params: I, body: Expr) -> Self
    where
        I: IntoIterator<Item = (N, Type)>,
        N: Into<Id>,
    {
        Self::Lambda {
            params: params
                .into_iter()
                .map(|(name, ty)| (name.into(), ty))
                .collect(),
            body: Box::new(body),
        }
    }

    pub fn app(callee: Expr, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::App {
            callee: Box::new(callee),
            args: args.into_iter().collect(),
        }
    }

    pub fn binop(op: impl Into<Id>, lhs: Expr, rhs: Expr) -> Self {
        Self::Binop {
            op: op.into(),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Whether the term is in value form: unit, an integer literal or a lambda.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Unit | Self::Int(_) | Self::Lambda { .. })
    }
}

impl Type {
    pub fn fun(domains: impl IntoIterator<Item = Type>, range: Type) -> Self {
        Self::Fun {
            domains: domains.into_iter().collect(),
            range: Box::new(range),
        }
    }
}

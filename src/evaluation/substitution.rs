use hashbrown::HashSet;
use log::trace;

use crate::reprs::{
    ast::{Expr, Type},
    common::Id,
};

impl Expr {
    /// Replaces every free occurrence of `x` with `v`, leaving `self` as is.
    ///
    /// Binders that would capture a free variable of `v` are renamed first.
    #[must_use]
    pub fn substitute(&self, x: &Id, v: &Expr) -> Expr {
        match self {
            Expr::Unit | Expr::Int(_) => self.clone(),
            Expr::Ident(y) => {
                if y == x {
                    v.clone()
                } else {
                    self.clone()
                }
            }
            Expr::Binop { op, lhs, rhs } => Expr::Binop {
                op: op.clone(),
                lhs: Box::new(lhs.substitute(x, v)),
                rhs: Box::new(rhs.substitute(x, v)),
            },
            Expr::App { callee, args } => Expr::App {
                callee: Box::new(callee.substitute(x, v)),
                args: args.iter().map(|arg| arg.substitute(x, v)).collect(),
            },
            Expr::Lambda { params, body } => {
                if params.iter().any(|(name, _)| name == x) || !body.occurs_free(x) {
                    return self.clone();
                }
                let (params, body) = rename_captured(params, body, &v.free_vars());
                Expr::Lambda {
                    params,
                    body: Box::new(body.substitute(x, v)),
                }
            }
        }
    }

    pub fn free_vars(&self) -> HashSet<Id> {
        fn inner<'e>(expr: &'e Expr, bound: &mut Vec<&'e Id>, free: &mut HashSet<Id>) {
            match expr {
                Expr::Unit | Expr::Int(_) => {}
                Expr::Ident(name) => {
                    if !bound.contains(&name) {
                        free.insert(name.clone());
                    }
                }
                Expr::Binop { lhs, rhs, .. } => {
                    inner(lhs, bound, free);
                    inner(rhs, bound, free);
                }
                Expr::App { callee, args } => {
                    inner(callee, bound, free);
                    for arg in args {
                        inner(arg, bound, free);
                    }
                }
                Expr::Lambda { params, body } => {
                    let depth = bound.len();
                    bound.extend(params.iter().map(|(name, _)| name));
                    inner(body, bound, free);
                    bound.truncate(depth);
                }
            }
        }

        let mut free = HashSet::new();
        inner(self, &mut Vec::new(), &mut free);
        free
    }

    pub fn occurs_free(&self, x: &Id) -> bool {
        match self {
            Expr::Unit | Expr::Int(_) => false,
            Expr::Ident(y) => y == x,
            Expr::Binop { lhs, rhs, .. } => lhs.occurs_free(x) || rhs.occurs_free(x),
            Expr::App { callee, args } => {
                callee.occurs_free(x) || args.iter().any(|arg| arg.occurs_free(x))
            }
            Expr::Lambda { params, body } => {
                !params.iter().any(|(name, _)| name == x) && body.occurs_free(x)
            }
        }
    }
}

/// Renames the parameters that appear in `captured`, together with their
/// occurrences in `body`.
///
/// All parameters sharing a name get the same fresh name so that shadowing
/// between them is kept.
fn rename_captured(
    params: &[(Id, Type)],
    body: &Expr,
    captured: &HashSet<Id>,
) -> (Vec<(Id, Type)>, Expr) {
    let mut params = params.to_vec();
    let mut body = body.clone();
    if captured.is_empty() {
        return (params, body);
    }

    let mut avoid = body.free_vars();
    avoid.extend(captured.iter().cloned());
    avoid.extend(params.iter().map(|(name, _)| name.clone()));

    for i in 0..params.len() {
        let old = params[i].0.clone();
        // already renamed along with an earlier duplicate
        if !captured.contains(&old) {
            continue;
        }

        let mut fresh = old.primed();
        while avoid.contains(&fresh) {
            fresh = fresh.primed();
        }
        trace!("renaming captured parameter `{old}` to `{fresh}`");

        body = body.substitute(&old, &Expr::Ident(fresh.clone()));
        for (name, _) in &mut params[i..] {
            if *name == old {
                *name = fresh.clone();
            }
        }
        avoid.insert(fresh);
    }
    (params, body)
}

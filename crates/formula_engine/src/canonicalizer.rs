//! Rewrites formulas into a canonical form.
//!
//! Two formulas that canonicalize to structurally equal trees are treated as
//! the same formula. The rule set is fixed and local: only the guard of the
//! even-power rule evaluates anything, and only the exponent.
//!
//! Nodes are never mutated. Subtrees that no rule touches are shared between
//! the input and the output, and "nothing changed" is detected by pointer
//! identity (`Rc::ptr_eq`).
//!
//! Every rewrite canonicalizes the pieces it rebuilds, so long right-leaning
//! chains are rebuilt once per re-association and the cost grows faster than
//! the tree. Within one call, the canonical form of every subtree visited is
//! remembered by the subtree's address, so a subtree (or a fixed point) that
//! comes up again is not traversed again. A subtree shared by several
//! parents is rewritten, and its steps recorded, once per call.
//!
//! Recursion depth follows tree depth; trees from the parser are bounded by
//! its depth limit.

use crate::options::CanonicalizeOptions;
use crate::rule::{Rewrite, Rule};
use crate::rules::{
    DoubleNegationRule, EvenPowerOfNegationRule, PAIRWISE_RULES, REASSOCIATE_RULES,
};
use crate::step::Step;
use formula_ast::{Node, Rational, Value};
use rustc_hash::FxHashMap;
use std::rc::Rc;
use tracing::trace;

pub struct Canonicalizer<V = Rational> {
    options: CanonicalizeOptions,
    steps: Vec<Step<V>>,
    /// Canonical forms found during the current call, keyed by the address
    /// of the subtree they were computed for. The stored input keeps the
    /// address from being reused.
    memo: FxHashMap<*const Node<V>, (Rc<Node<V>>, Rc<Node<V>>)>,
}

impl<V: Value> Default for Canonicalizer<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Value> Canonicalizer<V> {
    pub fn new() -> Self {
        Self::with_options(CanonicalizeOptions::default())
    }

    pub fn with_options(options: CanonicalizeOptions) -> Self {
        Canonicalizer {
            options,
            steps: Vec::new(),
            memo: FxHashMap::default(),
        }
    }

    pub fn options(&self) -> &CanonicalizeOptions {
        &self.options
    }

    /// Rewrites `node` until no rule applies anywhere in it.
    ///
    /// The result is a fixed point: canonicalizing it again returns it
    /// unchanged. Never fails.
    pub fn canonicalize(&mut self, node: &Rc<Node<V>>) -> Rc<Node<V>> {
        let result = self.canonicalize_subtree(node);
        self.memo.clear();
        result
    }

    /// Canonical form of a subtree, for rules rebuilding part of a node.
    /// Shares the memo of the call in progress.
    pub fn canonicalize_subtree(&mut self, node: &Rc<Node<V>>) -> Rc<Node<V>> {
        if let Some((_, known)) = self.memo.get(&Rc::as_ptr(node)) {
            return Rc::clone(known);
        }

        let mut current = Rc::clone(node);
        loop {
            let rewritten = self.rewrite(&current);
            if Rc::ptr_eq(&rewritten, &current) {
                break;
            }
            current = rewritten;
        }
        self.memo
            .insert(Rc::as_ptr(node), (Rc::clone(node), Rc::clone(&current)));
        self.memo
            .insert(Rc::as_ptr(&current), (Rc::clone(&current), Rc::clone(&current)));
        current
    }

    /// Steps recorded so far, in the order the rewrites completed. Empty
    /// unless `record_steps` is set.
    pub fn steps(&self) -> &[Step<V>] {
        &self.steps
    }

    pub fn take_steps(&mut self) -> Vec<Step<V>> {
        std::mem::take(&mut self.steps)
    }

    // One pass over the rule set at the root; falls back to the children when
    // nothing matches. Returns `node` itself when nothing changed.
    fn rewrite(&mut self, node: &Rc<Node<V>>) -> Rc<Node<V>> {
        if let Some(rewrite) = DoubleNegationRule.apply(self, node) {
            return self.commit(DoubleNegationRule.name(), node, rewrite);
        }
        if let Some(rewrite) = EvenPowerOfNegationRule.apply(self, node) {
            return self.commit(EvenPowerOfNegationRule.name(), node, rewrite);
        }
        if EvenPowerOfNegationRule::guards(node) {
            return Rc::clone(node);
        }

        let mut current = Rc::clone(node);
        for rule in &PAIRWISE_RULES {
            if let Some(rewrite) = rule.apply(self, &current) {
                current = self.commit(rule.name(), &current, rewrite);
            }
        }
        for rule in &REASSOCIATE_RULES {
            if let Some(rewrite) = rule.apply(self, &current) {
                current = self.commit(rule.name(), &current, rewrite);
            }
        }
        if !Rc::ptr_eq(&current, node) {
            return current;
        }

        self.rewrite_children(node)
    }

    fn rewrite_children(&mut self, node: &Rc<Node<V>>) -> Rc<Node<V>> {
        match node.as_ref() {
            Node::Leaf(_) => Rc::clone(node),
            Node::Unary(op, operand) => {
                let new_operand = self.canonicalize_subtree(operand);
                if Rc::ptr_eq(&new_operand, operand) {
                    Rc::clone(node)
                } else {
                    Rc::new(Node::Unary(*op, new_operand))
                }
            }
            Node::Binary(op, lhs, rhs) => {
                let new_lhs = self.canonicalize_subtree(lhs);
                let new_rhs = self.canonicalize_subtree(rhs);
                if Rc::ptr_eq(&new_lhs, lhs) && Rc::ptr_eq(&new_rhs, rhs) {
                    Rc::clone(node)
                } else {
                    Rc::new(Node::Binary(*op, new_lhs, new_rhs))
                }
            }
        }
    }

    fn commit(
        &mut self,
        rule_name: &'static str,
        before: &Rc<Node<V>>,
        rewrite: Rewrite<V>,
    ) -> Rc<Node<V>> {
        trace!(
            target: "canonicalize",
            rule = rule_name,
            before = %before,
            after = %rewrite.new_node,
            "rule applied"
        );
        if self.options.record_steps {
            self.steps.push(Step {
                rule_name,
                description: rewrite.description,
                before: Rc::clone(before),
                after: Rc::clone(&rewrite.new_node),
            });
        }
        rewrite.new_node
    }
}

/// Canonical form of `node` under the fixed rule set, without step recording.
pub fn canonicalize<V: Value>(node: &Rc<Node<V>>) -> Rc<Node<V>> {
    Canonicalizer::new().canonicalize(node)
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Depth-first walking of the suite tree.
//!
//! Nodes are visited in document order: a suite, then its own specs, then
//! its nested suites. The walk is iterative so deeply nested trees cannot
//! overflow the stack.

use crate::results::{Spec, Suite, TestAttempt};

/// A node visited during the walk.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A suite at the given nesting depth (top-level suites are depth 0).
    Suite { suite: &'a Suite, depth: usize },
    /// A spec, one level deeper than its suite.
    Spec { spec: &'a Spec, depth: usize },
}

/// Pre-order iterator over a suite forest.
pub struct SuiteWalker<'a> {
    stack: Vec<Node<'a>>,
}

impl<'a> SuiteWalker<'a> {
    /// Walk the given top-level suites.
    pub fn new(suites: &'a [Suite]) -> Self {
        let stack = suites
            .iter()
            .rev()
            .map(|suite| Node::Suite { suite, depth: 0 })
            .collect();
        Self { stack }
    }
}

impl<'a> Iterator for SuiteWalker<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        if let Node::Suite { suite, depth } = node {
            // Pushed in reverse so specs pop before nested suites.
            for nested in suite.suites.iter().rev() {
                self.stack.push(Node::Suite {
                    suite: nested,
                    depth: depth + 1,
                });
            }
            for spec in suite.specs.iter().rev() {
                self.stack.push(Node::Spec {
                    spec,
                    depth: depth + 1,
                });
            }
        }

        Some(node)
    }
}

/// Every spec in the forest, each exactly once.
pub fn specs(suites: &[Suite]) -> impl Iterator<Item = &Spec> {
    SuiteWalker::new(suites).filter_map(|node| match node {
        Node::Spec { spec, .. } => Some(spec),
        Node::Suite { .. } => None,
    })
}

/// Every (spec, attempt) pair in the forest.
pub fn tests(suites: &[Suite]) -> impl Iterator<Item = (&Spec, &TestAttempt)> {
    specs(suites).flat_map(|spec| spec.tests.iter().map(move |attempt| (spec, attempt)))
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;

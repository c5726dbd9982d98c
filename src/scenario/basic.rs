use crate::graph::node::NodeId;
use crate::scenario::reader::InputError;
use crate::scenario::scenario::{CaseSource, EdgeSpec, Query, TestCase};
use std::collections::VecDeque;

/// Small fixed cases used when no input is given to `trace`.
pub struct BasicCases {
    cases: VecDeque<TestCase>,
}

fn edge(from: u32, to: u32, weight: i32) -> EdgeSpec {
    EdgeSpec {
        from: NodeId(from),
        to: NodeId(to),
        weight,
    }
}

fn query(source: u32, destination: u32) -> Query {
    Query {
        source: NodeId(source),
        destination: NodeId(destination),
    }
}

impl BasicCases {
    pub fn build() -> Self {
        let cases = vec![
            // direct edge improved by a two-hop detour
            TestCase::new(3, vec![edge(1, 2, 1), edge(2, 3, 1), edge(1, 3, 5)], query(1, 3)),
            // no edges at all
            TestCase::new(2, vec![], query(1, 2)),
            // node 4 is expanded at a stale cost first, then again once improved
            TestCase::new(
                6,
                vec![
                    edge(1, 4, 9),
                    edge(1, 2, 1),
                    edge(1, 3, 4),
                    edge(2, 3, 1),
                    edge(3, 4, 1),
                    edge(4, 5, 2),
                    edge(5, 6, 2),
                    edge(2, 6, 20),
                ],
                query(1, 6),
            ),
        ];
        Self {
            cases: cases.into(),
        }
    }
}

impl CaseSource for BasicCases {
    fn next_case(&mut self) -> Result<Option<TestCase>, InputError> {
        Ok(self.cases.pop_front())
    }
}

use crate::graph::edge::Weight;
use crate::graph::node::NodeId;
use crate::scenario::reader::InputError;
use crate::scenario::scenario::{CaseSource, EdgeSpec, Query, TestCase};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded stream of random test cases with non-negative weights.
pub struct RandomCases {
    rng: StdRng,
    remaining: usize,
    node_count: u32,
    edge_count: usize,
    max_weight: Weight,
}

impl RandomCases {
    pub fn build(seed: u64, cases: usize, node_count: u32, edge_count: usize, max_weight: Weight) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            remaining: cases,
            node_count: node_count.max(1),
            edge_count,
            max_weight: max_weight.max(0),
        }
    }

    fn random_node(&mut self) -> NodeId {
        NodeId(self.rng.gen_range(1..=self.node_count))
    }

    fn generate(&mut self) -> TestCase {
        // a spine of edges first so most queries have an answer
        let mut order = (1..=self.node_count).map(NodeId).collect::<Vec<NodeId>>();
        order.shuffle(&mut self.rng);

        let mut edges = Vec::with_capacity(self.edge_count);
        for pair in order.windows(2).take(self.edge_count / 2) {
            let weight = self.rng.gen_range(0..=self.max_weight);
            edges.push(EdgeSpec {
                from: pair[0],
                to: pair[1],
                weight,
            });
        }
        while edges.len() < self.edge_count {
            let from = self.random_node();
            let to = self.random_node();
            let weight = self.rng.gen_range(0..=self.max_weight);
            edges.push(EdgeSpec { from, to, weight });
        }

        let query = Query {
            source: self.random_node(),
            destination: self.random_node(),
        };
        TestCase::new(self.node_count, edges, query)
    }
}

impl CaseSource for RandomCases {
    fn next_case(&mut self) -> Result<Option<TestCase>, InputError> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        Ok(Some(self.generate()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::graph::WeightPolicy;
    use crate::scenario::reader::CaseReader;

    fn collect(source: &mut dyn CaseSource) -> Vec<TestCase> {
        let mut cases = Vec::new();
        while let Some(case) = source.next_case().unwrap() {
            cases.push(case);
        }
        cases
    }

    #[test]
    fn test_same_seed_same_cases() {
        let first = collect(&mut RandomCases::build(7, 4, 12, 30, 9));
        let second = collect(&mut RandomCases::build(7, 4, 12, 30, 9));
        assert_eq!(4, first.len());
        assert_eq!(first, second);
    }

    #[test]
    fn test_cases_stay_within_bounds() {
        for case in collect(&mut RandomCases::build(3, 10, 8, 20, 5)) {
            assert_eq!(20, case.edges().len());
            assert!(case.edges().iter().all(|e| (0..=5).contains(&e.weight)));
            assert!(case.build_graph(WeightPolicy::RejectNegative).is_ok());
            let q = case.query();
            assert!((1..=8).contains(&q.source.0));
            assert!((1..=8).contains(&q.destination.0));
        }
    }

    #[test]
    fn test_generated_text_reads_back() {
        let cases = collect(&mut RandomCases::build(11, 3, 6, 9, 20));
        let text = cases.iter().map(|c| c.to_string()).collect::<String>() + "0 0\n";
        let read = collect(&mut CaseReader::new(text.as_bytes()));
        assert_eq!(cases, read);
    }
}

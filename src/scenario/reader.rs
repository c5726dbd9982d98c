use crate::graph::edge::Weight;
use crate::graph::node::NodeId;
use crate::scenario::scenario::{CaseSource, EdgeSpec, Query, TestCase};
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] io::Error),
    #[error("line {line}: expected {expected}, found end of input")]
    UnexpectedEof { line: usize, expected: &'static str },
    #[error("line {line}: `{token}` is not an integer")]
    InvalidInteger { line: usize, token: String },
    #[error("line {line}: {expected} needs {needed} fields, found {found}")]
    MissingFields {
        line: usize,
        expected: &'static str,
        needed: usize,
        found: usize,
    },
    #[error("line {line}: {value} is not a valid node id")]
    InvalidNodeId { line: usize, value: i64 },
    #[error("line {line}: {value} is not a valid count")]
    InvalidCount { line: usize, value: i64 },
    #[error("line {line}: weight {value} is outside the 32-bit range")]
    WeightOutOfRange { line: usize, value: i64 },
}

/// Reads `n m`, `m` edge lines and a query line per case, until `0 0`.
pub struct CaseReader<R> {
    input: R,
    line: usize,
    buf: String,
    done: bool,
}

impl<R: BufRead> CaseReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: 0,
            buf: String::new(),
            done: false,
        }
    }

    /// Next non-blank line split into integers, or `None` at end of input.
    fn record(&mut self, expected: &'static str, needed: usize) -> Result<Option<Vec<i64>>, InputError> {
        loop {
            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            if !self.buf.trim().is_empty() {
                break;
            }
        }

        let line = self.line;
        let fields = self
            .buf
            .split_whitespace()
            .take(needed)
            .map(|token| {
                token.parse::<i64>().map_err(|_| InputError::InvalidInteger {
                    line,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<i64>, InputError>>()?;
        if fields.len() < needed {
            return Err(InputError::MissingFields {
                line,
                expected,
                needed,
                found: fields.len(),
            });
        }
        Ok(Some(fields))
    }

    fn required(&mut self, expected: &'static str, needed: usize) -> Result<Vec<i64>, InputError> {
        self.record(expected, needed)?
            .ok_or(InputError::UnexpectedEof {
                line: self.line + 1,
                expected,
            })
    }

    fn node_id(&self, value: i64) -> Result<NodeId, InputError> {
        u32::try_from(value)
            .map(NodeId)
            .map_err(|_| InputError::InvalidNodeId {
                line: self.line,
                value,
            })
    }

    fn weight(&self, value: i64) -> Result<Weight, InputError> {
        Weight::try_from(value).map_err(|_| InputError::WeightOutOfRange {
            line: self.line,
            value,
        })
    }

    fn count(&self, value: i64) -> Result<u32, InputError> {
        u32::try_from(value).map_err(|_| InputError::InvalidCount {
            line: self.line,
            value,
        })
    }
}

impl<R: BufRead> CaseSource for CaseReader<R> {
    fn next_case(&mut self) -> Result<Option<TestCase>, InputError> {
        if self.done {
            return Ok(None);
        }
        let Some(header) = self.record("node and edge counts", 2)? else {
            warn!(line = self.line, "input ended without the 0 0 sentinel");
            self.done = true;
            return Ok(None);
        };
        let node_count = self.count(header[0])?;
        let edge_count = self.count(header[1])?;
        if node_count == 0 && edge_count == 0 {
            self.done = true;
            return Ok(None);
        }

        let mut edges = Vec::new();
        for _ in 0..edge_count {
            let fields = self.required("an edge `from to weight`", 3)?;
            edges.push(EdgeSpec {
                from: self.node_id(fields[0])?,
                to: self.node_id(fields[1])?,
                weight: self.weight(fields[2])?,
            });
        }

        let fields = self.required("a query `source destination`", 2)?;
        let query = Query {
            source: self.node_id(fields[0])?,
            destination: self.node_id(fields[1])?,
        };
        Ok(Some(TestCase::new(node_count, edges, query)))
    }
}

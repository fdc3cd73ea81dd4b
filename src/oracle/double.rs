use std::collections::VecDeque;

use rug::Integer;

use super::{OracleError, Randomizer};

/// Replays pre-loaded sample batches in insertion order.
///
/// Each call consumes one whole batch regardless of the requested bounds or count.
#[derive(Debug, Default, Clone)]
pub struct OracleDouble {
    uniform: VecDeque<Vec<i64>>,
    gaussian: VecDeque<Vec<i64>>,
}

impl OracleDouble {
    pub fn new(uniform: Vec<Vec<i64>>, gaussian: Vec<Vec<i64>>) -> Self {
        Self {
            uniform: uniform.into(),
            gaussian: gaussian.into(),
        }
    }

    pub fn remaining(&self) -> (usize, usize) {
        (self.uniform.len(), self.gaussian.len())
    }
}

fn next_batch(queue: &mut VecDeque<Vec<i64>>) -> Result<Vec<Integer>, OracleError> {
    queue
        .pop_front()
        .map(|batch| batch.into_iter().map(Integer::from).collect())
        .ok_or(OracleError::OutOfSamples)
}

impl Randomizer for OracleDouble {
    fn rand_int(
        &mut self,
        _lower: i64,
        _upper: i64,
        _count: usize,
    ) -> Result<Vec<Integer>, OracleError> {
        next_batch(&mut self.uniform)
    }

    fn norm_dist(&mut self, _count: usize) -> Result<Vec<Integer>, OracleError> {
        next_batch(&mut self.gaussian)
    }
}

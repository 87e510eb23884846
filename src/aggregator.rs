use std::{collections::HashMap, hash::Hash};

use dashmap::DashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One raw `(key, value)` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation<K> {
    pub key: K,
    pub value: f64,
}

impl<K> Observation<K> {
    pub fn new(key: K, value: f64) -> Self {
        Observation { key, value }
    }
}

impl<K> From<(K, f64)> for Observation<K> {
    fn from((key, value): (K, f64)) -> Self {
        Observation { key, value }
    }
}

/// Partitions observations into per-key value lists, keeping encounter order
/// within each key.
pub fn group<K, I>(observations: I) -> HashMap<K, Vec<f64>>
where
    K: Eq + Hash,
    I: IntoIterator,
    I::Item: Into<Observation<K>>,
{
    let mut groups: HashMap<K, Vec<f64>> = HashMap::new();
    for obs in observations {
        let Observation { key, value } = obs.into();
        groups.entry(key).or_default().push(value);
    }
    groups
}

/// Map/shuffle/reduce form of [`group`]: records are emitted on the rayon
/// pool into a sharded map, then the shards are drained into a plain map.
/// Value order within a key is unspecified.
pub fn group_parallel<K>(observations: Vec<Observation<K>>) -> HashMap<K, Vec<f64>>
where
    K: Eq + Hash + Send + Sync,
{
    let shuffled: DashMap<K, Vec<f64>> = DashMap::new();
    observations.into_par_iter().for_each(|obs| {
        shuffled.entry(obs.key).or_default().push(obs.value);
    });
    shuffled.into_iter().collect()
}

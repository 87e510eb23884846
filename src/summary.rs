use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};

/// Box-plot parameters of one key.
///
/// Serializes with the column names `key, Q1, Q2, Q3, IQR, Qmax, Qmin,
/// outliers`; `outliers` is a plain array of numbers, ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary<K> {
    pub key: K,
    #[serde(rename = "Q1")]
    pub q1: f64,
    #[serde(rename = "Q2")]
    pub q2: f64,
    #[serde(rename = "Q3")]
    pub q3: f64,
    #[serde(rename = "IQR")]
    pub iqr: f64,
    /// Largest value strictly inside the fences.
    #[serde(rename = "Qmax")]
    pub qmax: f64,
    /// Smallest value strictly inside the fences.
    #[serde(rename = "Qmin")]
    pub qmin: f64,
    pub outliers: Vec<f64>,
    pub count: usize,
    pub lower_fence: f64,
    pub upper_fence: f64,
}

impl<K> BoxSummary<K> {
    /// Number of values used for the whiskers.
    pub fn retained_count(&self) -> usize {
        self.count.saturating_sub(self.outliers.len())
    }

    pub fn has_outliers(&self) -> bool {
        !self.outliers.is_empty()
    }
}

/// One [`BoxSummary`] per distinct key, ordered by key.
///
/// (De)serializes as a plain array of rows; rows are re-sorted on the way in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable<K> {
    rows: Vec<BoxSummary<K>>,
}

impl<K> Default for ResultTable<K> {
    fn default() -> Self {
        ResultTable { rows: Vec::new() }
    }
}

impl<K: Ord> ResultTable<K> {
    pub fn from_rows(mut rows: Vec<BoxSummary<K>>) -> Self {
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        ResultTable { rows }
    }

    pub fn get(&self, key: &K) -> Option<&BoxSummary<K>> {
        self.rows
            .binary_search_by(|row| row.key.cmp(key))
            .ok()
            .map(|i| &self.rows[i])
    }
}

impl<K> ResultTable<K> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BoxSummary<K>> {
        self.rows.iter()
    }

}

impl<K: Serialize> ResultTable<K> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<K: DeserializeOwned + Ord> ResultTable<K> {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl<K: Serialize> Serialize for ResultTable<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl<'de, K: Deserialize<'de> + Ord> Deserialize<'de> for ResultTable<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<BoxSummary<K>>::deserialize(deserializer).map(ResultTable::from_rows)
    }
}

impl<K> IntoIterator for ResultTable<K> {
    type Item = BoxSummary<K>;
    type IntoIter = std::vec::IntoIter<BoxSummary<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a ResultTable<K> {
    type Item = &'a BoxSummary<K>;
    type IntoIter = std::slice::Iter<'a, BoxSummary<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

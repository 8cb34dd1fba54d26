use crate::hashmap::HashMap;
use crate::key::Key;
use crate::value::{Sequence, Value, ValueType};

#[derive(thiserror::Error, Debug)]
pub enum FrequencyError {
    /// The message text is part of the observable contract, callers assert
    /// on it verbatim.
    #[error("Input must be an array")]
    NotAnArray { actual: ValueType },
}

impl FrequencyError {
    #[must_use]
    pub fn actual_type(&self) -> ValueType {
        match self {
            Self::NotAnArray { actual } => *actual,
        }
    }
}

/// Mapping from canonical key to occurrence count. Counts are always
/// positive; iteration follows the insertion order of each key's first
/// occurrence so output stays deterministic.
#[derive(Debug, Clone, Default)]
pub struct FrequencyMap {
    counts: HashMap<Key, usize>,
    order: Vec<Key>,
}

impl FrequencyMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: Key) {
        match self.counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.clone(), 1);
                self.order.push(key);
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<usize> {
        self.counts.get(key).copied()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts, which equals the length of the counted input.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, usize)> {
        self.order
            .iter()
            .map(|key| (key, self.counts.get(key).copied().unwrap_or(0)))
    }
}

impl<'a> IntoIterator for &'a FrequencyMap {
    type Item = (&'a Key, usize);
    type IntoIter = Box<dyn Iterator<Item = (&'a Key, usize)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Structural equality: same keys mapped to the same counts. Insertion order
/// is deliberately ignored, it is not significant to correctness.
impl PartialEq for FrequencyMap {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl Eq for FrequencyMap {}

/// Counts occurrences of each distinct element of `input`.
///
/// The input must be a list; any other value fails with
/// [`FrequencyError::NotAnArray`]. Elements are grouped by their canonical
/// key (see [`Key`]) in a single linear pass, so the sum of the returned
/// counts equals the length of the input. The input is never mutated and the
/// call succeeds for every list regardless of element types or length; an
/// empty list yields an empty map.
pub fn frequency_table(input: &Value) -> Result<FrequencyMap, FrequencyError> {
    let Value::Sequence(Sequence::List(items)) = input else {
        return Err(FrequencyError::NotAnArray {
            actual: input.value_type(),
        });
    };

    let mut table = FrequencyMap::new();
    for item in items.iter() {
        table.increment(item.canonical_key());
    }
    Ok(table)
}

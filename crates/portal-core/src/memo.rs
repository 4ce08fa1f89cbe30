/// Caches the last value computed for a dependency key.
///
/// `get_or_compute` only runs the closure when the key differs from the one
/// the cached value was built from.
#[derive(Clone, Debug)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    computations: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            computations: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        let fresh = matches!(&self.entry, Some((k, _)) if *k == key);
        let (_, value) = match self.entry.take() {
            Some(entry) if fresh => self.entry.insert(entry),
            _ => {
                self.computations += 1;
                let value = compute(&key);
                self.entry.insert((key, value))
            }
        };
        value
    }

    #[inline]
    pub fn computations(&self) -> u64 {
        self.computations
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

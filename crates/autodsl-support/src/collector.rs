use std::iter;

/// Accumulates collection elements into a concrete container `C`.
///
/// The container only needs `Extend`; the finished collection is converted
/// into whatever type the constructor parameter declares.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collector<C> {
  items: C,
}

impl<C> Collector<C> {
  pub fn push<T>(&mut self, item: T)
  where
    C: Extend<T>,
  {
    self.items.extend(iter::once(item));
  }

  #[must_use]
  pub const fn items(&self) -> &C {
    &self.items
  }

  pub fn into_collection<T>(self) -> T
  where
    C: IntoIterator,
    T: FromIterator<C::Item>,
  {
    self.items.into_iter().collect()
  }
}

#[cfg(test)]
mod tests {
  use std::collections::{BTreeSet, HashSet};

  use indexmap::IndexSet;

  use super::*;

  #[test]
  fn test_list_keeps_order_and_duplicates() {
    let mut collector: Collector<Vec<&str>> = Collector::default();
    collector.push("a");
    collector.push("b");
    collector.push("a");
    let list: Vec<&str> = collector.into_collection();
    assert_eq!(list, vec!["a", "b", "a"]);
  }

  #[test]
  fn test_index_set_dedupes_in_first_insertion_order() {
    let mut collector: Collector<IndexSet<&str>> = Collector::default();
    for item in ["b", "a", "b", "c", "a"] {
      collector.push(item);
    }
    let items: Vec<&str> = collector.into_collection();
    assert_eq!(items, vec!["b", "a", "c"]);
  }

  #[test]
  fn test_converts_into_declared_collection_type() {
    let mut collector: Collector<IndexSet<u32>> = Collector::default();
    collector.push(3);
    collector.push(1);
    let hashed: HashSet<u32> = collector.clone().into_collection();
    let sorted: BTreeSet<u32> = collector.into_collection();
    assert_eq!(hashed.len(), 2);
    assert_eq!(sorted.into_iter().collect::<Vec<_>>(), vec![1, 3]);
  }
}

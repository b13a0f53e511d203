/// Keys of a map in ascending order.
///
/// Accepts anything that iterates as `(&K, V)`: `&HashMap`, `&BTreeMap`,
/// or their `iter()`.
pub fn sorted_keys<'a, K, V, I>(map: I) -> Vec<K>
where
    I: IntoIterator<Item = (&'a K, V)>,
    K: Ord + Clone + 'a,
{
    let mut keys = map.into_iter().map(|(k, _)| k.clone()).collect::<Vec<K>>();
    keys.sort();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn hashmap_keys_come_out_sorted() {
        let ref map = [((2, 1), 'a'), ((0, 5), 'b'), ((2, 0), 'c')]
            .into_iter()
            .collect::<HashMap<_, _>>();
        assert_eq!(sorted_keys(map), vec![(0, 5), (2, 0), (2, 1)]);
    }
}

use crate::C;

/// Named per-point values, kept in insertion order.
///
/// Order matters: it decides which attribute is the implicit default
/// and the column order of exported files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, Vec<C>)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `values` under `name`, returning the previous values
    /// if `name` was already present. Replacing keeps the original
    /// position.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<C>) -> Option<Vec<C>> {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, values)),
            None => {
                self.entries.push((name, values));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[C]> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, values)| values.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the first inserted attribute.
    pub fn first(&self) -> Option<(&str, &[C])> {
        self.iter().next()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[C])> + '_ {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Returns the number of attributes (not values).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `self` and `other` hold the same attribute
    /// names, regardless of order.
    pub fn same_names(&self, other: &Attributes) -> bool {
        self.len() == other.len() && self.names().all(|name| other.contains(name))
    }

    /// Returns a copy holding only the values at `indices`.
    pub(crate) fn take(&self, indices: &[usize]) -> Attributes {
        self.entries
            .iter()
            .map(|(name, values)| {
                let taken = indices.iter().map(|&idx| values[idx]).collect();
                (name.clone(), taken)
            })
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<C>)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (S, Vec<C>)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, values) in iter {
            attributes.insert(name, values);
        }
        attributes
    }
}

impl IntoIterator for Attributes {
    type Item = (String, Vec<C>);
    type IntoIter = std::vec::IntoIter<(String, Vec<C>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Attributes;

    #[test]
    fn test_insertion_order() {
        let attributes: Attributes = [
            ("friction", vec![0.3]),
            ("elevation", vec![4.9]),
            ("depth", vec![1.0]),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            attributes.names().collect::<Vec<_>>(),
            ["friction", "elevation", "depth"]
        );
        assert_eq!(attributes.first(), Some(("friction", &[0.3][..])));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut attributes = Attributes::new();
        assert_eq!(attributes.insert("a", vec![1.0]), None);
        assert_eq!(attributes.insert("b", vec![2.0]), None);
        assert_eq!(attributes.insert("a", vec![3.0]), Some(vec![1.0]));
        assert_eq!(attributes.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(attributes.get("a"), Some(&[3.0][..]));
        assert_eq!(attributes.get("c"), None);
    }

    #[test]
    fn test_same_names() {
        let lhs: Attributes = [("elevation", vec![1.0]), ("friction", vec![0.3])]
            .into_iter()
            .collect();
        let rhs: Attributes = [("friction", vec![0.3]), ("elevation", vec![1.0])]
            .into_iter()
            .collect();
        let fewer: Attributes = [("elevation", vec![1.0])].into_iter().collect();
        assert!(lhs.same_names(&rhs));
        assert!(!lhs.same_names(&fewer));
        assert!(!fewer.same_names(&lhs));
        assert!(Attributes::new().same_names(&Attributes::new()));
    }

    #[test]
    fn test_take() {
        let attributes: Attributes = [("elevation", vec![1.0, 2.0, 3.0, 4.0])]
            .into_iter()
            .collect();
        let taken = attributes.take(&[3, 1]);
        assert_eq!(taken.get("elevation"), Some(&[4.0, 2.0][..]));
    }
}

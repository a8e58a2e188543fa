//! Set operations over slices, preserving the order in which elements first appear

/// Every element of `a` or `b`, without duplicates
pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut union: Vec<T> = Vec::with_capacity(a.len() + b.len());
    for x in a.iter().chain(b) {
        if !union.contains(x) {
            union.push(x.clone());
        }
    }
    union
}

/// The elements of `a` that are also in `b`
pub fn intersection<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    a.iter().filter(|x| b.contains(x)).cloned().collect()
}

/// The elements of `set` that are not in `subset`
///
/// `subset` does not need to be a subset of `set`.
pub fn complement<T>(set: &[T], subset: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    set.iter().filter(|x| !subset.contains(x)).cloned().collect()
}

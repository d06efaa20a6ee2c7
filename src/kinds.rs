use itertools::Itertools;

use crate::value::ValueKind;

/// Collapses a sequence of kinds to its distinct members, keeping each at its first occurrence.
pub fn distinct_kinds<I>(kinds: I) -> Vec<ValueKind>
where
    I: IntoIterator<Item = ValueKind>,
{
    kinds.into_iter().unique().collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_occurrence_order() {
        let kinds = vec![
            ValueKind::Str,
            ValueKind::Int,
            ValueKind::Str,
            ValueKind::Bool,
            ValueKind::Int,
        ];
        assert_eq!(
            distinct_kinds(kinds),
            vec![ValueKind::Str, ValueKind::Int, ValueKind::Bool]
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(distinct_kinds(vec![]), vec![]);
    }
}

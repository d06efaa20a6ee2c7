/// Builds a [`SymbolTable`](crate::SymbolTable) from identifiers in scope, naming each value
/// after the identifier it was read from.
///
/// ```
/// use symtbl::{symtbl, Value};
///
/// const WIDTH: u32 = 80;
/// let title = "report";
///
/// let table = symtbl!(WIDTH, title).unwrap();
/// assert_eq!(table.get("WIDTH"), Some(&Value::UInt(80)));
/// assert_eq!(table.get("title"), Some(&Value::from("report")));
/// ```
///
/// The names are stringified as a single blob and paired with the values by position, which
/// is why the plain form returns a [`Result`](crate::Result). The `name = value` form pairs
/// each name with an arbitrary expression directly and cannot fail.
#[macro_export]
macro_rules! symtbl {
    ($($name:ident = $value:expr),+ $(,)?) => {
        $crate::SymbolTable::from_pairs(vec![
            $((stringify!($name), $crate::Value::from($value))),+
        ])
    };
    ($($name:ident),+ $(,)?) => {
        $crate::SymbolTable::new(
            stringify!($($name),+),
            vec![$($crate::Value::from($name)),+],
        )
    };
}

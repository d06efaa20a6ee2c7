//! Small symbol tables pairing literal names with the values captured alongside them.
//!
//! The [`symtbl!`] macro stringifies a list of identifiers and captures their values into a
//! [`SymbolTable`], which can then be walked as `(name, value)` pairs in source order.

use std::io;

#[macro_use]
mod macros;

pub mod error;
pub mod kinds;
pub mod names;
pub mod table;
pub mod value;


pub use error::{Result, SymbolError};
pub use names::{NameCursor, Names};
pub use table::{Iter, SymbolTable, SymbolTableBuilder};
pub use value::{Value, ValueKind};

/// Writes one `<name><value>` line per symbol, in table order.
pub fn write_table<W: io::Write>(table: &SymbolTable<'_>, mut out: W) -> io::Result<()> {
    for (name, value) in table {
        writeln!(out, "{}{}", name, value)?;
    }
    out.flush()
}

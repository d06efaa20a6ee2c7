use std::error::Error;
use std::io;

use symtbl::{symtbl, write_table};

const A: i32 = 1;
const B: i32 = 2;
const C: i32 = 3;

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::try_init().ok();

    let table = symtbl!(A, B, C)?;
    let stdout = io::stdout();
    write_table(&table, stdout.lock())?;
    Ok(())
}

use std::io::{self, Write};

use rand::Rng;

use crate::generator::RowGenerator;

/// Writes `rows` newline-terminated rows to `out`.
pub fn write_rows<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rng: &mut R,
    generator: &mut RowGenerator,
    rows: usize,
) -> io::Result<()> {
    for _ in 0..rows {
        writeln!(out, "{}", generator.next_row(rng))?;
    }
    out.flush()
}

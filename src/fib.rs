use std::io::Write;

/// Returns the first `n` Fibonacci terms, starting at 0.
///
/// For `n <= 0` the sequence is empty; the caller decides how to
/// report that to the user. Arithmetic is 64-bit signed; behavior
/// once the terms exceed `i64::MAX` is unspecified.
pub fn sequence(n: i64) -> Vec<i64> {
    let mut terms = Vec::new();
    if n <= 0 {
        return terms;
    }

    // `a` holds the i-th term at the start of iteration i.
    let mut a: i64 = 0;
    let mut b: i64 = 1;
    for _ in 0..n {
        terms.push(a);
        let next = a + b;
        a = b;
        b = next;
    }
    terms
}

/// Writes the terms space-separated, each followed by a single space,
/// then ends the line.
pub fn write_sequence<W: Write>(out: &mut W, terms: &[i64]) -> std::io::Result<()> {
    for term in terms {
        write!(out, "{} ", term)?;
    }
    writeln!(out)
}

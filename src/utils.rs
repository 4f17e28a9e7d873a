/// Returns `a + b`, wrapping on overflow.
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Adds two operands.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2.0, 3.5), 5.5);
        assert_eq!(add(-1.0, 1.0), 0.0);
        assert_eq!(add(0.1, 0.2), 0.30000000000000004);
    }

    #[test]
    fn test_add_overflows_to_infinity() {
        assert_eq!(add(1e308, 1e308), f64::INFINITY);
        assert_eq!(add(-1e308, -1e308), f64::NEG_INFINITY);
    }
}

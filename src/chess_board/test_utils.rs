use super::ChessField;

#[cfg(test)]
pub fn field(algebraic: &str) -> ChessField {
    ChessField::from_algebraic(algebraic).unwrap()
}

#[cfg(test)]
pub fn assert_fields<I: Iterator<Item = ChessField>>(generated: I, mut expected: Vec<&str>) {
    let mut generated_converted: Vec<_> = generated.map(|f| f.as_algebraic()).collect();
    generated_converted.sort();
    expected.sort();

    assert_eq!(generated_converted, expected);
}

/// Converts 0-based row and column indexes to an Excel-style cell reference (e.g. "B3").
pub fn index_to_reference(row: usize, col: usize) -> String {
    let mut reference = String::new();
    let mut col = col + 1;
    while col > 0 {
        col -= 1;
        reference.insert(0, (b'A' + (col % 26) as u8) as char);
        col /= 26;
    }
    reference.push_str(&(row + 1).to_string());
    reference
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_of_first_cells() {
        assert_eq!(index_to_reference(0, 0), "A1");
        assert_eq!(index_to_reference(2, 1), "B3");
        assert_eq!(index_to_reference(9, 25), "Z10");
    }

    #[test]
    fn reference_of_multi_letter_columns() {
        assert_eq!(index_to_reference(0, 26), "AA1");
        assert_eq!(index_to_reference(0, 51), "AZ1");
        assert_eq!(index_to_reference(0, 52), "BA1");
        assert_eq!(index_to_reference(0, 701), "ZZ1");
        assert_eq!(index_to_reference(0, 702), "AAA1");
    }
}

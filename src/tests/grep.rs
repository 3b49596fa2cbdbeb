use regex::Regex;

use crate::grep::grep_lines;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_numbers_are_one_based() {
        let content = "alpha\nbeta\ngamma\n";
        let pattern = Regex::new("beta").unwrap();
        assert_eq!(grep_lines(content, &pattern), vec![2]);
    }

    #[test]
    fn test_all_matching_lines_are_returned_in_order() {
        let content = "public:\nint x;\npublic:\nint y;\n";
        let pattern = Regex::new(r"public\s*:").unwrap();
        assert_eq!(grep_lines(content, &pattern), vec![1, 3]);
    }

    #[test]
    fn test_pattern_tolerates_embedded_whitespace() {
        let content = "class C {\n  public  :\n};\n";
        let pattern = Regex::new(r"public\s*:").unwrap();
        assert_eq!(grep_lines(content, &pattern), vec![2]);
    }

    #[test]
    fn test_no_matches_yield_empty_result() {
        let content = "private:\nint x;\n";
        let pattern = Regex::new(r"public\s*:").unwrap();
        assert!(grep_lines(content, &pattern).is_empty());
    }
}

//! Valid Palindrome: alphanumeric characters only, case-insensitive.

/// Filter into a buffer, compare with its reverse.
pub fn is_palindrome_filtered(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Converge from both ends, skipping non-alphanumerics in place. O(1) space.
pub fn is_palindrome(s: &str) -> bool {
    let bytes = s.as_bytes();
    let (mut l, mut r) = (0usize, bytes.len());
    loop {
        while l < r && !bytes[l].is_ascii_alphanumeric() {
            l += 1;
        }
        while l < r && !bytes[r - 1].is_ascii_alphanumeric() {
            r -= 1;
        }
        if l + 1 >= r {
            return true;
        }
        if bytes[l].to_ascii_lowercase() != bytes[r - 1].to_ascii_lowercase() {
            return false;
        }
        l += 1;
        r -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_cases() {
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(!is_palindrome("race a car"));
        assert!(is_palindrome_filtered("A man, a plan, a canal: Panama"));
        assert!(!is_palindrome_filtered("race a car"));
    }

    #[test]
    fn punctuation_only_is_a_palindrome() {
        assert!(is_palindrome(" "));
        assert!(is_palindrome(".,!"));
        assert!(is_palindrome_filtered(".,!"));
    }

    #[test]
    fn case_folding() {
        assert!(is_palindrome("Noon"));
        assert!(is_palindrome_filtered("0P0"));
        assert!(!is_palindrome("0P"));
    }
}

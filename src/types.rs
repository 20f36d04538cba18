use crate::errors::Result;

/// Return a 'minimal' representation of the given number
pub fn fstr(x: f32) -> String {
    if x == (x as i32) as f32 {
        return (x as i32).to_string();
    }
    let result = format!("{x:.3}");
    if result.contains('.') {
        result.trim_end_matches('0').trim_end_matches('.').into()
    } else {
        result
    }
}

/// Parse a string to an f32
pub fn strp(s: &str) -> Result<f32> {
    s.trim().parse().map_err(Into::into)
}

/// Returns iterator over whitespace-or-comma separated values
pub fn attr_split(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split_whitespace()
        .flat_map(|v| v.split(','))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fstr() {
        assert_eq!(fstr(1.0), "1");
        assert_eq!(fstr(-100.0), "-100");
        assert_eq!(fstr(1.2345678), "1.235");
        assert_eq!(fstr(-1.2345678), "-1.235");
        assert_eq!(fstr(91.0004), "91");
        assert_eq!(fstr(0.125), "0.125");
    }

    #[test]
    fn test_strp() {
        assert_eq!(strp("1").ok(), Some(1.));
        assert_eq!(strp("-100").ok(), Some(-100.));
        assert_eq!(strp(" 2.5 ").ok(), Some(2.5));
        assert_eq!(strp("-0.00123").ok(), Some(-0.00123));
        assert!(strp("1.2.3").is_err());
        assert!(strp("a").is_err());
    }

    #[test]
    fn test_attr_split() {
        let parts: Vec<_> = attr_split("1, 2 3,4").collect();
        assert_eq!(parts, vec!["1", "2", "3", "4"]);
    }
}

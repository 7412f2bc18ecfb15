#[macro_export]
macro_rules! unwrap_or {
    ($e: expr, $t: expr) => {
        match $e {
            Some(x) => x,
            None => $t,
        }
    };
}

#[macro_export]
macro_rules! unwrap_orr {
    ($e: expr, $t: expr) => {
        match $e {
            Ok(x) => x,
            Err(_) => $t,
        }
    };
}

#[cfg(test)]
mod tests {
    fn first_even(v: &[u32]) -> u32 {
        let x = unwrap_or!(v.iter().find(|&&x| x % 2 == 0), return 0);
        *x
    }

    fn parse_or_zero(s: &str) -> u32 {
        unwrap_orr!(s.parse::<u32>(), return 0)
    }

    #[test]
    fn test_unwrap_or() {
        assert_eq!(first_even(&[1, 3, 4]), 4);
        assert_eq!(first_even(&[1, 3]), 0);
    }

    #[test]
    fn test_unwrap_orr() {
        assert_eq!(parse_or_zero("12"), 12);
        assert_eq!(parse_or_zero("x"), 0);
    }
}

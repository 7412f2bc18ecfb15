use std::error::Error;
use std::fmt::{Display, Formatter};

/// Several independent errors reported together, one per line
#[derive(Debug)]
pub struct MultiError<T>(pub Vec<T>);

impl<T> MultiError<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, e: T) {
        self.0.push(e);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(v)` if nothing was pushed
    pub fn into_result<V>(self, v: V) -> Result<V, Self> {
        if self.0.is_empty() {
            Ok(v)
        } else {
            Err(self)
        }
    }
}

impl<T> Default for MultiError<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for MultiError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for e in &self.0 {
            writeln!(f, "{}", e)?;
        }
        Ok(())
    }
}

impl<T: Error> Error for MultiError<T> {}

#[cfg(test)]
mod tests {
    use super::MultiError;

    #[test]
    fn test_display_one_per_line() {
        let mut m = MultiError::new();
        m.push("first");
        m.push("second");
        assert_eq!(m.to_string(), "first\nsecond\n");
    }

    #[test]
    fn test_into_result() {
        let m: MultiError<String> = MultiError::new();
        assert_eq!(m.into_result(3).unwrap(), 3);

        let mut m = MultiError::new();
        m.push("bad".to_string());
        assert_eq!(m.into_result(3).unwrap_err().0, vec!["bad".to_string()]);
    }
}

/// Lines printed by one demo, in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Appends one line made of the `Display` forms of the arguments separated
/// by single spaces.
#[macro_export]
macro_rules! say {
    ($out:expr, $($arg:expr),+ $(,)?) => {
        $out.line([$(($arg).to_string()),+].join(" "))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_say_joins_with_spaces() {
        let mut out = Transcript::new();
        say!(out, "The value:", 42, "Present?", false);
        say!(out, 1.5);
        assert_eq!(out.lines(), ["The value: 42 Present? false", "1.5"]);
    }
}

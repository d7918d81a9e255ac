//! Console sink implementation

use super::traits::Sink;

/// A sink that writes to the console (stdout/stderr)
///
/// Tokens are joined with a single space, the way a JavaScript console
/// prints multiple arguments. `log` and `info` go to stdout; `error`,
/// `warn` and `debug` go to stderr.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    prefix: Option<String>,
}

impl ConsoleSink {
    /// Create a new console sink without prefix
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Create a console sink that prepends `prefix` to every line
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn render(&self, tokens: &[String]) -> String {
        let body = tokens.join(" ");
        match &self.prefix {
            Some(prefix) => format!("{} {}", prefix, body),
            None => body,
        }
    }
}

impl Sink for ConsoleSink {
    fn log(&self, tokens: &[String]) {
        println!("{}", self.render(tokens));
    }

    fn error(&self, tokens: &[String]) {
        eprintln!("{}", self.render(tokens));
    }

    fn warn(&self, tokens: &[String]) {
        eprintln!("{}", self.render(tokens));
    }

    fn info(&self, tokens: &[String]) {
        println!("{}", self.render(tokens));
    }

    fn debug(&self, tokens: &[String]) {
        eprintln!("{}", self.render(tokens));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_console_sink_render() {
        let sink = ConsoleSink::new();
        assert_eq!(sink.render(&tokens(&["<w>", "(app)", "hello"])), "<w> (app) hello");

        let prefixed = ConsoleSink::with_prefix("[MyApp]");
        assert_eq!(prefixed.render(&tokens(&["hello"])), "[MyApp] hello");
        assert_eq!(prefixed.render(&[]), "[MyApp] ");
    }

    #[test]
    fn test_console_sink_writes() {
        // This test just verifies the sink doesn't panic
        let sink = ConsoleSink::new();
        let line = tokens(&["message"]);
        sink.log(&line);
        sink.error(&line);
        sink.warn(&line);
        sink.info(&line);
        sink.debug(&line);
    }
}

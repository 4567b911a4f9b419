//! Shared helpers for the integration tests.

use css_lexer::{LexOutput, TokenKind, TokenizerOptions};

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test: only the first call installs anything, and
/// nothing is installed when `RUST_LOG` is unset.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        // Another test thread may have installed it already.
        tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer().with_target(true))
            .with(EnvFilter::from_default_env())
            .try_init()
            .ok();
    }
}

/// Tokenize with comments emitted, so lexemes cover the whole input.
pub fn tokenize_all(source: &str) -> LexOutput {
    init_tracing();
    css_lexer::tokenize_with(source, &TokenizerOptions::default().emit_comments(true))
}

pub fn kinds(output: &LexOutput) -> Vec<TokenKind> {
    output.tokens.iter().map(|t| t.kind.clone()).collect()
}

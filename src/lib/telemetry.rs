//! Tracing setup for the browser. Events are formatted by `tracing-subscriber`
//! and written to the devtools console, filtered by the configured level.
//! Callers must never record passwords or access tokens as fields.

use tracing_subscriber::EnvFilter;

/// Fallback directive when the configured level does not parse.
const DEFAULT_DIRECTIVE: &str = "info";

/// Builds the event filter from a level or directive string such as
/// `debug` or `marketsafe_web=trace`.
pub fn filter(level: &str) -> EnvFilter {
    let level = level.trim();
    if level.is_empty() {
        return EnvFilter::new(DEFAULT_DIRECTIVE);
    }
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber; later calls are ignored.
#[cfg(target_arch = "wasm32")]
pub fn init(level: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(console::ConsoleWriter::default)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    /// Buffers one formatted event and forwards it to `console.log` on drop.
    #[derive(Default)]
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buffer.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buffer);
            web_sys::console::log_1(&line.trim_end().into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::filter;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn filter_accepts_levels_and_directives() {
        assert_eq!(filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(
            filter("marketsafe_web=trace").max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn filter_falls_back_on_blank_or_invalid_input() {
        assert_eq!(filter("   ").max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            filter("marketsafe_web=loud").max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}

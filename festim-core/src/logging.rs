use once_cell::sync::OnceCell;

static LOGGER_INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initializes `env_logger` for the process. Idempotent and thread-safe.
///
/// The logging level is controlled by the `RUST_LOG` environment variable
/// (e.g. `RUST_LOG=festim_trace=debug`). Failure to install the logger
/// (because another logger is already installed) is reported on stderr but
/// is otherwise harmless.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        match env_logger::builder().is_test(false).try_init() {
            Ok(_) => log::info!("festim logger initialized."),
            Err(e) => eprintln!("Failed to initialize logger: {}. Logging might not work as expected.", e),
        };
    });
}

/// Like [`init_logging`] but captures output per test.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging();
        init_logging();
        assert!(LOGGER_INITIALIZED.get().is_some());
    }
}

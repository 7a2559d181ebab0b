use crate::domain::model::Rejection;
use crate::domain::ports::ConfigProvider;

/// Request-level gate, run before any sanitization or scoring. A rejection
/// means zero per-line work was started.
///
/// Checks in order: verification signal, line count, byte size. Lines are
/// counted by `str::lines`, so interior empty lines count and a single
/// trailing newline does not add an empty line.
pub fn check_submission<C: ConfigProvider>(
    raw: &str,
    verification_passed: bool,
    config: &C,
) -> Result<(), Rejection> {
    if !verification_passed {
        return Err(Rejection::VerificationFailed);
    }

    let line_count = raw.lines().count();
    if line_count > config.max_lines() {
        return Err(Rejection::TooManyLines {
            actual: line_count,
            max: config.max_lines(),
        });
    }

    if raw.len() > config.max_bytes() {
        return Err(Rejection::TooLarge {
            actual: raw.len(),
            max: config.max_bytes(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestConfig {
        max_lines: usize,
        max_bytes: usize,
    }

    impl ConfigProvider for TestConfig {
        fn max_lines(&self) -> usize {
            self.max_lines
        }

        fn max_bytes(&self) -> usize {
            self.max_bytes
        }

        fn concurrent_lines(&self) -> usize {
            1
        }
    }

    fn config() -> TestConfig {
        TestConfig {
            max_lines: 50,
            max_bytes: 125_000,
        }
    }

    #[test]
    fn test_accepts_within_limits() {
        assert_eq!(check_submission("hello\nworld", true, &config()), Ok(()));
    }

    #[test]
    fn test_verification_failure_wins_regardless_of_size() {
        let huge = "x\n".repeat(1000);
        assert_eq!(
            check_submission(&huge, false, &config()),
            Err(Rejection::VerificationFailed)
        );
    }

    #[test]
    fn test_rejects_too_many_lines_with_measured_count() {
        let input = vec!["line"; 60].join("\n");
        assert_eq!(
            check_submission(&input, true, &config()),
            Err(Rejection::TooManyLines { actual: 60, max: 50 })
        );
    }

    #[test]
    fn test_exactly_max_lines_is_accepted() {
        let input = vec!["line"; 50].join("\n");
        assert_eq!(check_submission(&input, true, &config()), Ok(()));
    }

    #[test]
    fn test_rejects_oversized_input_with_measured_bytes() {
        let input = "x".repeat(125_001);
        assert_eq!(
            check_submission(&input, true, &config()),
            Err(Rejection::TooLarge {
                actual: 125_001,
                max: 125_000
            })
        );
    }

    #[test]
    fn test_exactly_max_bytes_is_accepted() {
        let config = TestConfig {
            max_lines: 50,
            max_bytes: 10,
        };
        assert_eq!(check_submission("xxxxxxxxxx", true, &config), Ok(()));
    }

    #[test]
    fn test_line_count_checked_before_byte_size() {
        let config = TestConfig {
            max_lines: 2,
            max_bytes: 4,
        };
        // over on both: the line-count rejection is reported
        assert_eq!(
            check_submission("a\nb\nc", true, &config),
            Err(Rejection::TooManyLines { actual: 3, max: 2 })
        );
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        let config = TestConfig {
            max_lines: 2,
            max_bytes: 125_000,
        };
        assert_eq!(check_submission("a\nb\n", true, &config), Ok(()));
    }
}

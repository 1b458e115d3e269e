//! Tests for per-option validators.

use std::fs;
use std::io::Write;

use tempfile::{NamedTempFile, tempdir};

use super::*;
use crate::config::error::Reason;

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

mod local_dir {
    use super::*;

    #[test]
    fn accepts_existing_directory() {
        let dir = tempdir().unwrap();

        let path = local_root_dir(path_str(dir.path())).unwrap();

        assert_eq!(path, dir.path());
    }

    #[test]
    fn rejects_missing_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = local_root_dir(path_str(&missing)).unwrap_err();

        assert_eq!(err.reason(), Reason::InvalidCliParameter);
        assert!(err.to_string().contains("does not exist"));
        assert!(err.to_string().contains(path_str(&missing)));
    }

    #[cfg(unix)]
    #[test]
    fn rejects_unreadable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        if fs::read_dir(&locked).is_ok() {
            // Running with privileges that bypass permission bits.
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = local_root_dir(path_str(&locked));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert_eq!(err.reason(), Reason::InvalidCliParameter);
        assert!(err.to_string().contains("is not readable"));
    }

    #[test]
    fn rejects_regular_file() {
        let file = NamedTempFile::new().unwrap();

        let err = local_root_dir(path_str(file.path())).unwrap_err();

        assert_eq!(err.reason(), Reason::InvalidCliParameter);
        assert!(err.to_string().contains("is not a directory"));
    }
}

mod numbers {
    use super::*;

    #[test]
    fn max_file_size_in_bytes() {
        assert_eq!(max_file_size("-m", "5").unwrap(), 5 * 1024 * 1024);
        assert_eq!(max_file_size("-m", "+1").unwrap(), 1024 * 1024);
    }

    #[test]
    fn max_file_size_not_an_integer_names_option() {
        let err = max_file_size("--max-file-size", "ten").unwrap_err();

        assert_eq!(err.reason(), Reason::InvalidCliParameter);
        assert!(err.to_string().contains("'--max-file-size'"));
        assert!(!err.to_string().contains("ten"));
    }

    #[test]
    fn max_file_size_rejects_zero_and_negative() {
        assert!(max_file_size("-m", "0").is_err());
        assert!(max_file_size("-m", "-3").is_err());
    }

    #[test]
    fn max_file_size_rejects_overflow() {
        let err = max_file_size("-m", &i64::MAX.to_string()).unwrap_err();
        assert_eq!(err.reason(), Reason::InvalidCliParameter);
    }

    #[test]
    fn http_chunk_size_is_floored_to_256() {
        let expected = (7 * 1024 * 1024 / 256) * 256;
        assert_eq!(http_chunk_size("--http-chunk-size", "7").unwrap(), expected);
        assert_eq!(http_chunk_size("--http-chunk-size", "1").unwrap() % 256, 0);
    }

    #[test]
    fn http_chunk_size_rejects_non_positive() {
        assert!(http_chunk_size("--http-chunk-size", "0").is_err());
        assert!(http_chunk_size("--http-chunk-size", "-1").is_err());
        assert!(http_chunk_size("--http-chunk-size", "1.5").is_err());
    }

    #[test]
    fn attempts_allow_zero() {
        let option = "--network-number-of-retries";
        assert_eq!(network_number_of_attempts(option, "0").unwrap(), 0);
        assert_eq!(network_number_of_attempts(option, "7").unwrap(), 7);
    }

    #[test]
    fn attempts_reject_negative_and_garbage() {
        let option = "--network-number-of-retries";
        assert!(network_number_of_attempts(option, "-1").is_err());
        assert!(network_number_of_attempts(option, "").is_err());
        assert!(network_number_of_attempts(option, "99999999999").is_err());
    }

    #[test]
    fn sleep_is_stored_in_milliseconds() {
        let option = "--network-sleep-between-retries";
        assert_eq!(network_sleep_between_attempts(option, "3").unwrap(), 3000);
    }

    #[test]
    fn sleep_rejects_non_positive() {
        let option = "--network-sleep-between-retries";
        assert!(network_sleep_between_attempts(option, "0").is_err());
        assert!(network_sleep_between_attempts(option, "-5").is_err());
        assert!(network_sleep_between_attempts(option, "x").is_err());
    }
}

mod log {
    use super::*;

    #[test]
    fn creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sync.log");

        let result = log_file("--log-file", path_str(&path)).unwrap();

        assert_eq!(result, path);
        assert!(path.is_file());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn keeps_existing_content() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "previous run").unwrap();

        log_file("--log-file", path_str(file.path())).unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "previous run");
    }

    #[test]
    fn rejects_directory() {
        let dir = tempdir().unwrap();

        let err = log_file("--log-file", path_str(dir.path())).unwrap_err();

        assert_eq!(err.reason(), Reason::InvalidCliParameter);
    }

    #[cfg(unix)]
    #[test]
    fn read_only_file_is_io_failure() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("readonly.log");
        fs::write(&path, "").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

        if OpenOptions::new().append(true).open(&path).is_ok() {
            // Running with privileges that bypass permission bits.
            return;
        }

        let err = log_file("--log-file", path_str(&path)).unwrap_err();

        assert_eq!(err.reason(), Reason::IoFailure);
        assert!(err.to_string().contains("is not writable"));
        assert!(matches!(err, CliError::Io { source: None, .. }));
    }

    #[test]
    fn creation_failure_is_io_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("sync.log");

        let err = log_file("--log-file", path_str(&path)).unwrap_err();

        assert_eq!(err.reason(), Reason::IoFailure);
        assert!(matches!(err, CliError::Io { source: Some(_), .. }));
    }
}

mod ignore {
    use super::*;

    #[test]
    fn loads_lines_verbatim() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "*.tmp\n\n  build/ \r\n.git").unwrap();

        let lines = ignore_file(path_str(file.path())).unwrap();

        assert_eq!(lines, ["*.tmp", "", "  build/ ", ".git"]);
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "a\rb\r").unwrap();

        let lines = ignore_file(path_str(file.path())).unwrap();

        assert_eq!(lines, ["a", "b"]);
    }

    #[test]
    fn mixed_terminators() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "one\r\ntwo\rthree\n\nfour").unwrap();

        let lines = ignore_file(path_str(file.path())).unwrap();

        assert_eq!(lines, ["one", "two", "three", "", "four"]);
    }

    #[test]
    fn empty_file_has_no_patterns() {
        let file = NamedTempFile::new().unwrap();

        assert!(ignore_file(path_str(file.path())).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_invalid_parameter() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("ignore.txt");

        let err = ignore_file(path_str(&missing)).unwrap_err();

        assert_eq!(err.reason(), Reason::InvalidCliParameter);
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn undecodable_file_is_invalid_parameter() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let err = ignore_file(path_str(file.path())).unwrap_err();

        assert_eq!(err.reason(), Reason::InvalidCliParameter);
    }
}

mod remote_dir {
    use super::*;

    #[test]
    fn converts_backslashes_and_strips_leading_slash() {
        assert_eq!(normalize_remote_root_dir("\\foo\\bar"), "foo/bar");
        assert_eq!(normalize_remote_root_dir("/foo/bar"), "foo/bar");
    }

    #[test]
    fn trims_whitespace_first() {
        assert_eq!(normalize_remote_root_dir("  /backup  "), "backup");
    }

    #[test]
    fn trims_control_characters() {
        assert_eq!(normalize_remote_root_dir("\u{1}/foo"), "foo");
        assert_eq!(normalize_remote_root_dir("\t/foo\u{0}\n"), "foo");
    }

    #[test]
    fn keeps_inner_control_characters() {
        assert_eq!(normalize_remote_root_dir("/a\u{1}b"), "a\u{1}b");
    }

    #[test]
    fn strips_only_one_slash() {
        assert_eq!(normalize_remote_root_dir("//foo"), "/foo");
    }

    #[test]
    fn is_idempotent_on_normalized_values() {
        for value in ["\\foo\\bar", "/a/b/", " docs ", "plain", ""] {
            let once = normalize_remote_root_dir(value);
            assert_eq!(normalize_remote_root_dir(&once), once);
        }
    }
}

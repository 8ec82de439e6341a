//! Terminal multiplexer detection
//!
//! A multiplexer such as tmux can switch the pane a program draws into
//! between terminal windows without the compositor's focus following along
//! with the program, so window lookups must re-read the focused window.

/// Environment variable tmux sets inside every pane
const TMUX_ENV: &str = "TMUX";

/// Whether the current process runs inside tmux
pub fn tmux_in_use() -> bool {
    std::env::var_os(TMUX_ENV).is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_tmux_env<R>(value: Option<&str>, f: impl FnOnce() -> R) -> R {
        let _guard = ENV_MUTEX.lock().unwrap();
        let original = env::var_os(TMUX_ENV);

        match value {
            Some(v) => env::set_var(TMUX_ENV, v),
            None => env::remove_var(TMUX_ENV),
        }
        let result = f();

        match original {
            Some(v) => env::set_var(TMUX_ENV, v),
            None => env::remove_var(TMUX_ENV),
        }
        result
    }

    #[test]
    fn test_tmux_detected() {
        let detected = with_tmux_env(Some("/tmp/tmux-1000/default,1234,0"), tmux_in_use);
        assert!(detected);
    }

    #[test]
    fn test_tmux_not_set() {
        assert!(!with_tmux_env(None, tmux_in_use));
    }

    #[test]
    fn test_tmux_empty_is_ignored() {
        assert!(!with_tmux_env(Some(""), tmux_in_use));
    }
}

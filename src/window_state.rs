//! Window geometry and app settings persisted across sessions.
//!
//! Simple whitespace-separated text files in the platform config directory.
//! Navigation state is deliberately not persisted; only the window frame and
//! the viewer's own settings (theme, zoom) survive a restart.

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy)]
pub struct WindowState {
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub maximized: bool,
}

/// Viewer settings that survive restarts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppSettings {
    pub dark_mode: bool,
    pub zoom: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            zoom: 1.0,
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    // Cross-platform config dir without extra deps
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            let mut p = PathBuf::from(appdata);
            p.push("FolioView");
            return Some(p);
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            let mut p = PathBuf::from(home);
            p.push("Library/Application Support/FolioView");
            return Some(p);
        }
    }

    // Linux / others: XDG or ~/.config
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let mut p = PathBuf::from(xdg);
        p.push("folioview");
        return Some(p);
    }
    if let Ok(home) = std::env::var("HOME") {
        let mut p = PathBuf::from(home);
        p.push(".config/folioview");
        return Some(p);
    }
    None
}

fn read_config_file(name: &str) -> Option<String> {
    let mut path = config_dir()?;
    path.push(name);
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();
    f.read_to_string(&mut s).ok()?;
    Some(s)
}

fn write_config_file(name: &str, contents: &str) -> std::io::Result<()> {
    if let Some(mut dir) = config_dir() {
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        dir.push(name);
        let mut f = fs::File::create(&dir)?;
        f.write_all(contents.as_bytes())?;
    }
    Ok(())
}

pub fn load_window_state() -> Option<WindowState> {
    let s = read_config_file("window_state.txt")?;
    // expected format: "x y w h max"
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() < 5 {
        return None;
    }
    let x = parts[0].parse::<f32>().ok()?;
    let y = parts[1].parse::<f32>().ok()?;
    let w = parts[2].parse::<f32>().ok()?;
    let h = parts[3].parse::<f32>().ok()?;
    let max = matches!(parts[4], "1" | "true" | "True");
    Some(WindowState {
        pos: [x, y],
        size: [w, h],
        maximized: max,
    })
}

pub fn save_window_state(state: &WindowState) -> std::io::Result<()> {
    write_config_file(
        "window_state.txt",
        &format!(
            "{} {} {} {} {}\n",
            state.pos[0], state.pos[1], state.size[0], state.size[1], state.maximized as u8
        ),
    )
}

pub fn sanitize_window_state(ws: WindowState) -> Option<WindowState> {
    // Basic sanity: finite values
    if !ws.pos[0].is_finite()
        || !ws.pos[1].is_finite()
        || !ws.size[0].is_finite()
        || !ws.size[1].is_finite()
    {
        return None;
    }

    // Clamp to reasonable ranges
    let min_w = 600.0f32;
    let min_h = 400.0f32;
    let max_w = 10000.0f32;
    let max_h = 10000.0f32;
    let max_pos = 20000.0f32;

    let w = ws.size[0].clamp(min_w, max_w);
    let h = ws.size[1].clamp(min_h, max_h);
    let x = ws.pos[0].clamp(0.0, max_pos);
    let y = ws.pos[1].clamp(0.0, max_pos);

    Some(WindowState {
        pos: [x, y],
        size: [w, h],
        maximized: ws.maximized,
    })
}

pub fn load_app_settings() -> Option<AppSettings> {
    let s = read_config_file("settings.txt")?;
    // expected format: "dark zoom"
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }
    let dark_mode = matches!(parts[0], "1" | "true" | "True");
    let zoom = parts[1].parse::<f32>().ok()?;
    if !zoom.is_finite() {
        return None;
    }
    Some(AppSettings { dark_mode, zoom })
}

pub fn save_app_settings(settings: &AppSettings) -> std::io::Result<()> {
    write_config_file(
        "settings.txt",
        &format!("{} {}\n", settings.dark_mode as u8, settings.zoom),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .expect("env lock")
    }

    struct EnvGuard {
        key: &'static str,
        original: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let original = std::env::var(key).ok();
            std::env::set_var(key, value);
            Self { key, original }
        }

        fn unset(key: &'static str) -> Self {
            let original = std::env::var(key).ok();
            std::env::remove_var(key);
            Self { key, original }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(value) = &self.original {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    /// Point every config-dir source at a temp dir for the test's duration.
    fn config_env(temp: &TempDir) -> (EnvGuard, EnvGuard, EnvGuard) {
        let dir = temp.path().to_string_lossy().to_string();
        (
            EnvGuard::set("APPDATA", &dir),
            EnvGuard::set("XDG_CONFIG_HOME", &dir),
            EnvGuard::set("HOME", &dir),
        )
    }

    #[test]
    fn test_sanitize_window_state_clamps_and_rejects_invalid() {
        let invalid = WindowState {
            pos: [f32::NAN, 10.0],
            size: [800.0, 600.0],
            maximized: false,
        };
        assert!(sanitize_window_state(invalid).is_none());

        let input = WindowState {
            pos: [-50.0, 25000.0],
            size: [100.0, 200.0],
            maximized: true,
        };
        let sanitized = sanitize_window_state(input).expect("expected sanitized state");
        assert_eq!(sanitized.pos[0], 0.0);
        assert_eq!(sanitized.pos[1], 20000.0);
        assert_eq!(sanitized.size[0], 600.0);
        assert_eq!(sanitized.size[1], 400.0);
        assert!(sanitized.maximized);
    }

    #[test]
    fn test_save_and_load_window_state() {
        let _lock = env_lock();
        let temp = TempDir::new().expect("temp dir");
        let _guards = config_env(&temp);

        let state = WindowState {
            pos: [120.0, 80.0],
            size: [1024.0, 768.0],
            maximized: false,
        };
        save_window_state(&state).expect("save");

        let loaded = load_window_state().expect("load");
        assert_eq!(loaded.pos, state.pos);
        assert_eq!(loaded.size, state.size);
        assert_eq!(loaded.maximized, state.maximized);
    }

    #[test]
    fn test_load_window_state_rejects_short_file() {
        let _lock = env_lock();
        let temp = TempDir::new().expect("temp dir");
        let _guards = config_env(&temp);

        let dir = config_dir().expect("config dir");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("window_state.txt"), "10 20 30").expect("write bad data");

        assert!(load_window_state().is_none());
    }

    #[test]
    fn test_load_window_state_rejects_invalid_numbers() {
        let _lock = env_lock();
        let temp = TempDir::new().expect("temp dir");
        let _guards = config_env(&temp);

        let dir = config_dir().expect("config dir");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("window_state.txt"), "x y 10 20 true").expect("write bad data");

        assert!(load_window_state().is_none());
    }

    #[test]
    fn test_load_window_state_parses_maximized_true() {
        let _lock = env_lock();
        let temp = TempDir::new().expect("temp dir");
        let _guards = config_env(&temp);

        let dir = config_dir().expect("config dir");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("window_state.txt"), "10 20 800 600 true").expect("write data");

        let loaded = load_window_state().expect("load");
        assert!(loaded.maximized);
    }

    #[test]
    fn test_load_window_state_returns_none_when_missing() {
        let _lock = env_lock();
        let temp = TempDir::new().expect("temp dir");
        let _guards = config_env(&temp);

        assert!(load_window_state().is_none());
    }

    #[test]
    fn test_save_and_load_app_settings() {
        let _lock = env_lock();
        let temp = TempDir::new().expect("temp dir");
        let _guards = config_env(&temp);

        let settings = AppSettings {
            dark_mode: true,
            zoom: 1.3,
        };
        save_app_settings(&settings).expect("save");
        assert_eq!(load_app_settings(), Some(settings));
    }

    #[test]
    fn test_load_app_settings_rejects_garbage() {
        let _lock = env_lock();
        let temp = TempDir::new().expect("temp dir");
        let _guards = config_env(&temp);

        let dir = config_dir().expect("config dir");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("settings.txt"), "1 potato").expect("write bad data");
        assert!(load_app_settings().is_none());

        fs::write(dir.join("settings.txt"), "1").expect("write short data");
        assert!(load_app_settings().is_none());
    }

    #[test]
    fn test_config_dir_falls_back_to_xdg() {
        let _lock = env_lock();
        let temp = TempDir::new().expect("temp dir");
        let _guard_appdata = EnvGuard::unset("APPDATA");
        let _guard_home = EnvGuard::unset("HOME");
        let _guard_xdg = EnvGuard::set("XDG_CONFIG_HOME", temp.path().to_string_lossy().as_ref());

        let dir = config_dir().expect("config dir");
        assert!(dir.starts_with(temp.path()));
    }

    #[test]
    fn test_config_dir_none_without_env() {
        let _lock = env_lock();
        let _guard_appdata = EnvGuard::unset("APPDATA");
        let _guard_xdg = EnvGuard::unset("XDG_CONFIG_HOME");
        let _guard_home = EnvGuard::unset("HOME");

        assert!(config_dir().is_none());
        let state = WindowState {
            pos: [1.0, 2.0],
            size: [800.0, 600.0],
            maximized: false,
        };
        // Nowhere to write: saving is a no-op, loading finds nothing
        save_window_state(&state).expect("save ok");
        assert!(load_window_state().is_none());
    }
}

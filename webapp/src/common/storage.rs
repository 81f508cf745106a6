use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

use portfolio_core::theme::Theme;

const THEME_KEY: &str = "theme";

fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    let key = format!("portfolio_{}", key);

    // Storage being unavailable is not an error the page surfaces; the
    // value simply lives in memory for this visit.
    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("portfolio_{}", key);

    LocalStorage::get(key.clone())
        .map_err(|err| anyhow::Error::msg(format!("local storage read failed for {key}: {err}")))
}

pub fn store_theme(theme: Theme) {
    set_local_storage(THEME_KEY, theme);
}

/// None on a first visit or when storage is unavailable; both fall back to
/// the OS preference upstream.
pub fn load_theme() -> Option<Theme> {
    get_local_storage(THEME_KEY).ok()
}

//! Theme Handling
//!
//! Neon (default) or dark, applied as a body class and persisted to
//! `localStorage`.

const STORAGE_KEY: &str = "tierboard_neon";

/// Read the stored theme preference. Defaults to neon.
pub fn read_preference() -> bool {
    let Some(win) = web_sys::window() else { return true };
    if let Ok(Some(storage)) = win.local_storage() {
        if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
            return val == "true";
        }
    }
    true
}

/// Swap the body class between `neon` and `dark`.
pub fn apply(neon: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let classes = body.class_list();
    if neon {
        let _ = classes.add_1("neon");
        let _ = classes.remove_1("dark");
    } else {
        let _ = classes.remove_1("neon");
        let _ = classes.add_1("dark");
    }
}

/// Apply and persist a new theme choice.
pub fn set(neon: bool) {
    apply(neon);
    if let Some(win) = web_sys::window() {
        if let Ok(Some(storage)) = win.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, if neon { "true" } else { "false" });
        }
    }
}

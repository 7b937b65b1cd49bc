//! Share-to-clipboard handling
//!
//! Builds the share message for a build card and places it on the system
//! clipboard. On Linux the native clipboard tools are tried first because
//! arboard drops clipboard contents immediately on Wayland; arboard is the
//! portable fallback. The outcome is always reported with a toast and
//! never escalated past it.

use tracing::{info, warn};

use romlog_core::share;

use crate::tui::app::App;
use crate::tui::components::Toast;

impl App {
    /// Share the card whose title row is at or just below the viewport top
    pub fn share_card_in_view(&mut self) {
        match self.layout.share_hit_near(self.scroll_offset) {
            Some(hit) => self.share_card(hit.device, hit.rom),
            None => self.show_toast(Toast::error("Nothing to share")),
        }
    }

    /// Copy a card's share message to the clipboard and report the outcome
    pub fn share_card(&mut self, device_idx: usize, rom_idx: usize) {
        let Some(device) = self.changelog.devices.get(device_idx) else {
            return;
        };
        let Some(rom) = device.roms.get(rom_idx) else {
            return;
        };

        let rom_id = rom.id.clone();
        let author = share::clean_author(rom.author.as_deref().unwrap_or(""));
        let text = share::share_text(&rom.name, &device.name, &author);
        let message = match &self.changelog.site.base_url {
            Some(base) => share::share_message(&text, &share::share_url(base, &rom_id)),
            None => text,
        };

        if copy_to_clipboard(&message) {
            info!(rom = %rom_id, "share message copied to clipboard");
            self.show_toast(Toast::success("Share message copied to clipboard"));
        } else {
            warn!(rom = %rom_id, "failed to copy share message");
            self.show_toast(Toast::error("Failed to copy to clipboard"));
        }
    }
}

/// Put text on the system clipboard, returns true on success
fn copy_to_clipboard(text: &str) -> bool {
    // On Linux, prefer native clipboard tools (wl-copy handles clipboard
    // persistence on Wayland where arboard cannot)
    #[cfg(target_os = "linux")]
    {
        let is_wayland = std::env::var("XDG_SESSION_TYPE")
            .map(|s| s == "wayland")
            .unwrap_or(false)
            || std::env::var("WAYLAND_DISPLAY").is_ok();

        let candidates: &[(&str, &[&str])] = if is_wayland {
            &[("wl-copy", &[])]
        } else {
            &[
                ("xclip", &["-selection", "clipboard"]),
                ("xsel", &["--clipboard", "--input"]),
            ]
        };

        for (tool, args) in candidates {
            if pipe_to_tool(tool, args, text) {
                return true;
            }
        }
    }

    // Fallback to arboard for non-Linux or if native tools fail
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        if clipboard.set_text(text).is_ok() {
            return true;
        }
    }

    false
}

/// Spawn a clipboard tool and feed it the text without waiting
#[cfg(target_os = "linux")]
fn pipe_to_tool(tool: &str, args: &[&str], text: &str) -> bool {
    use std::io::Write;

    let Ok(mut child) = std::process::Command::new(tool)
        .args(args)
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
    else {
        return false;
    };

    let Some(mut stdin) = child.stdin.take() else {
        return false;
    };
    let _ = stdin.write_all(text.as_bytes());
    // Closing stdin signals EOF to the tool
    drop(stdin);
    // Reap the child off-thread to avoid zombies
    std::thread::spawn(move || {
        let _ = child.wait();
    });
    true
}

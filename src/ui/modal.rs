//! Shared modal dialog lifecycle
//!
//! Both dialogs follow the same shape: build the widget tree, present the
//! window modal and transient for its parent, pump a nested main context
//! until a terminal action records a response (or the window is closed),
//! then finalise the result and return to the blocked caller.
//!
//! The insert/delete helpers compute the prospective full field value for
//! GTK's `insert-text` / `delete-text` signals, so keystroke validation
//! stays a pure `(current, proposed) -> accept` decision.

use gtk4::prelude::*;
use gtk4::{gdk, EventControllerKey, Window};
use std::cell::Cell;
use std::rc::Rc;

/// Builds the bare dialog window both dialogs start from
///
/// Modal, transient for the parent, non-resizable. A `size` of `None`
/// lets GTK size the window to its contents.
pub(crate) fn dialog_window(
    parent: &Window,
    title: Option<&str>,
    size: Option<(i32, i32)>,
) -> Window {
    let mut builder = Window::builder()
        .modal(true)
        .transient_for(parent)
        .resizable(false);
    if let Some(title) = title {
        builder = builder.title(title);
    }
    if let Some((width, height)) = size {
        builder = builder.default_width(width).default_height(height);
    }
    builder.build()
}

/// Pumps the default main context until a response is recorded
///
/// This is the suspension point of the modal lifecycle: the caller blocks
/// here while the dialog window stays responsive. The loop also exits if
/// the window is closed without any response (dismissal).
pub(crate) fn run_until_closed<T: Copy>(window: &Window, response: &Rc<Cell<Option<T>>>) {
    let main_context = glib::MainContext::default();
    while response.get().is_none() && window.is_visible() {
        main_context.iteration(true);
    }
}

/// Maps the Escape key to closing the dialog window
///
/// Closing without a recorded response is the cancel/dismiss path; the
/// dialog's own `close-request` handling decides what that means.
pub(crate) fn install_escape_close(window: &Window) {
    let key_controller = EventControllerKey::new();
    let window_for_keys = window.clone();
    key_controller.connect_key_pressed(move |_controller, key, _code, _modifier| {
        if key == gdk::Key::Escape {
            window_for_keys.close();
            glib::Propagation::Stop
        } else {
            glib::Propagation::Proceed
        }
    });
    window.add_controller(key_controller);
}

/// The field value that would result from inserting `inserted` at the
/// given character offset
///
/// GTK reports editable positions in characters, not bytes.
pub(crate) fn apply_insert(current: &str, inserted: &str, position: i32) -> String {
    let length = current.chars().count();
    let position = usize::try_from(position).unwrap_or(0).min(length);
    let mut proposed: String = current.chars().take(position).collect();
    proposed.push_str(inserted);
    proposed.extend(current.chars().skip(position));
    proposed
}

/// The field value that would result from deleting characters in
/// `[start, end)`
///
/// A negative `end` means "to the end of the text", matching the
/// `delete-text` signal convention.
pub(crate) fn apply_delete(current: &str, start: i32, end: i32) -> String {
    let length = current.chars().count();
    let start = usize::try_from(start).unwrap_or(0).min(length);
    let end = if end < 0 {
        length
    } else {
        usize::try_from(end).unwrap_or(length).min(length)
    };
    if start >= end {
        return current.to_string();
    }
    current
        .chars()
        .take(start)
        .chain(current.chars().skip(end))
        .collect()
}

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Entry, Label, Orientation, Window};
use std::cell::Cell;
use std::rc::Rc;

use crate::core::types::{DialogOptions, ValidationMode};
use crate::core::validate::accepts;
use crate::core::DialogError;
use crate::ui::modal;

/// Dialog asking the user for a single line of text
///
/// Shows a label above an entry field pre-populated with an initial
/// value, plus OK and Cancel buttons. With an integer or float
/// [`ValidationMode`] every edit is filtered before it commits: a
/// keystroke that would make the field unparsable is undone, leaving the
/// previous content untouched. The empty field is always allowed so the
/// user can clear and retype.
pub struct PromptDialog {
    window: Window,
    entry: Entry,
    response: Rc<Cell<Option<PromptResponse>>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PromptResponse {
    Confirm,
    Cancel,
}

/// Maps the recorded response to the dialog outcome
///
/// Only a confirmed dialog produces a value; cancellation and dismissal
/// (no response at all) both yield `None` without touching anything.
pub(crate) fn outcome(response: Option<PromptResponse>, text: &str) -> Option<String> {
    match response {
        Some(PromptResponse::Confirm) => Some(text.to_string()),
        Some(PromptResponse::Cancel) | None => None,
    }
}

impl PromptDialog {
    /// Creates a new prompt dialog
    ///
    /// `options.default_button` selects which button holds default
    /// activation: 1 for OK, 2 for Cancel. Any other index is a caller
    /// contract violation and fails immediately.
    pub fn new(
        parent: &Window,
        text: &str,
        initial: &str,
        mode: ValidationMode,
        options: &DialogOptions,
    ) -> Result<Self, DialogError> {
        if !(1..=2).contains(&options.default_button) {
            return Err(DialogError::DefaultOutOfRange(options.default_button));
        }

        let window = modal::dialog_window(parent, options.title.as_deref(), options.size);

        let content = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(8)
            .margin_start(12)
            .margin_end(12)
            .margin_top(12)
            .margin_bottom(12)
            .build();

        let label = Label::builder()
            .label(text)
            .halign(gtk4::Align::Start)
            .justify(gtk4::Justification::Left)
            .wrap(true)
            .build();
        content.append(&label);

        let entry = Entry::builder().text(initial).hexpand(true).build();
        content.append(&entry);

        if mode != ValidationMode::None {
            Self::install_validation(&entry, mode);
        }

        // Button row: OK on the left, Cancel on the right
        let button_box = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(12)
            .halign(gtk4::Align::End)
            .margin_top(8)
            .build();

        let ok_button = Button::builder()
            .label("OK")
            .width_request(options.button_width)
            .build();
        ok_button.add_css_class("suggested-action");

        let cancel_button = Button::builder()
            .label("Cancel")
            .width_request(options.button_width)
            .build();

        button_box.append(&ok_button);
        button_box.append(&cancel_button);
        content.append(&button_box);

        window.set_child(Some(&content));

        let response: Rc<Cell<Option<PromptResponse>>> = Rc::new(Cell::new(None));

        // Connect OK button (commit path)
        {
            let response = response.clone();
            let window = window.clone();
            ok_button.connect_clicked(move |_| {
                if response.get().is_none() {
                    response.set(Some(PromptResponse::Confirm));
                }
                window.close();
            });
        }

        // Connect Cancel button
        {
            let response = response.clone();
            let window = window.clone();
            cancel_button.connect_clicked(move |_| {
                if response.get().is_none() {
                    response.set(Some(PromptResponse::Cancel));
                }
                window.close();
            });
        }

        // Enter inside the entry takes the same commit path as OK
        {
            let response = response.clone();
            let window = window.clone();
            entry.connect_activate(move |_| {
                if response.get().is_none() {
                    response.set(Some(PromptResponse::Confirm));
                }
                window.close();
            });
        }

        // Window close (X button) and Escape count as Cancel
        {
            let response = response.clone();
            window.connect_close_request(move |_| {
                if response.get().is_none() {
                    response.set(Some(PromptResponse::Cancel));
                }
                glib::Propagation::Proceed
            });
        }
        modal::install_escape_close(&window);

        // Default activation (Enter outside the entry)
        let default_widget = if options.default_button == 2 {
            &cancel_button
        } else {
            &ok_button
        };
        window.set_default_widget(Some(default_widget));

        Ok(Self {
            window,
            entry,
            response,
        })
    }

    /// Filters edits on the entry's editable delegate
    ///
    /// Both signals are intercepted before the edit commits: the
    /// prospective full value is computed and the emission stopped when
    /// the validator rejects it, so valid content is never clobbered.
    fn install_validation(entry: &Entry, mode: ValidationMode) {
        let Some(delegate) = entry.delegate() else {
            return;
        };

        delegate.connect_insert_text(move |editable, inserted, position| {
            let proposed = modal::apply_insert(&editable.text(), inserted, *position);
            if !accepts(mode, &proposed) {
                editable.stop_signal_emission_by_name("insert-text");
            }
        });

        delegate.connect_delete_text(move |editable, start, end| {
            let proposed = modal::apply_delete(&editable.text(), start, end);
            if !accepts(mode, &proposed) {
                editable.stop_signal_emission_by_name("delete-text");
            }
        });
    }

    /// Shows the dialog and blocks until the user closes it
    ///
    /// Returns `Some(text)` when confirmed via OK or Enter, `None` when
    /// cancelled (Cancel button, Escape or window close). The result is
    /// finalised exactly once; the window is gone by the time this
    /// returns.
    pub fn show_and_wait(self) -> Option<String> {
        self.response.set(None);
        self.window.present();
        self.entry.grab_focus();

        modal::run_until_closed(&self.window, &self.response);

        let result = outcome(self.response.get(), &self.entry.text());
        self.window.close();
        result
    }
}

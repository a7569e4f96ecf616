use gtk4::gdk_pixbuf::{InterpType, Pixbuf};
use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Image, Label, Orientation, Window};
use std::cell::Cell;
use std::io::Cursor;
use std::rc::Rc;

use crate::core::types::{ButtonLabels, DialogOptions, MessageButton};
use crate::core::DialogError;
use crate::ui::modal;

/// Decorative mark shown beside the message text, shipped with the crate
const LOGO_BYTES: &[u8] = include_bytes!("../../../assets/dialog-logo.png");
const LOGO_SIZE: i32 = 50;

/// Dialog showing a message beside a decorative image, with 1-3 buttons
///
/// Each button closes the dialog and records its 1-based index as the
/// outcome. Dismissing the window (Escape or the close control) records
/// no outcome at all.
pub struct MessageDialog {
    window: Window,
    default_button: Option<Button>,
    response: Rc<Cell<Option<MessageButton>>>,
}

impl MessageDialog {
    /// Creates a new message dialog
    ///
    /// Fails if the embedded image cannot be decoded, or if
    /// `options.default_button` names a button that is not present in
    /// `labels`. In either case no dialog is shown.
    pub fn new(
        parent: &Window,
        text: &str,
        labels: &ButtonLabels,
        options: &DialogOptions,
    ) -> Result<Self, DialogError> {
        labels.validate_default(options.default_button)?;
        let logo = Self::load_logo()?;

        let window = modal::dialog_window(parent, options.title.as_deref(), options.size);

        let content = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(8)
            .margin_start(12)
            .margin_end(12)
            .margin_top(12)
            .margin_bottom(12)
            .build();

        // Image and message text side by side
        let body = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(12)
            .build();

        let image = Image::new();
        image.set_from_pixbuf(Some(&logo));
        image.set_pixel_size(LOGO_SIZE);
        image.set_valign(gtk4::Align::Start);
        body.append(&image);

        let label = Label::builder()
            .label(text)
            .halign(gtk4::Align::Start)
            .justify(gtk4::Justification::Left)
            .wrap(true)
            .hexpand(true)
            .build();
        body.append(&label);
        content.append(&body);

        let response: Rc<Cell<Option<MessageButton>>> = Rc::new(Cell::new(None));

        // Buttons render left to right in declaration order
        let button_box = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(12)
            .halign(gtk4::Align::End)
            .margin_top(8)
            .build();

        let mut default_button = None;
        for (index, label) in labels.iter() {
            let button = Button::builder()
                .label(label)
                .width_request(options.button_width)
                .build();
            if index == 1 {
                button.add_css_class("suggested-action");
            }

            let response = response.clone();
            let window_for_click = window.clone();
            button.connect_clicked(move |_| {
                if response.get().is_none() {
                    response.set(MessageButton::from_index(index));
                }
                window_for_click.close();
            });

            if index == options.default_button {
                default_button = Some(button.clone());
            }
            button_box.append(&button);
        }
        content.append(&button_box);

        window.set_child(Some(&content));
        window.set_default_widget(default_button.as_ref());
        modal::install_escape_close(&window);

        Ok(Self {
            window,
            default_button,
            response,
        })
    }

    /// Decodes and scales the embedded logo to its fixed display size
    fn load_logo() -> Result<Pixbuf, DialogError> {
        let pixbuf = Pixbuf::from_read(Cursor::new(LOGO_BYTES))
            .map_err(|e| DialogError::ImageDecode(e.to_string()))?;
        pixbuf
            .scale_simple(LOGO_SIZE, LOGO_SIZE, InterpType::Bilinear)
            .ok_or_else(|| DialogError::ImageDecode("scaling failed".to_string()))
    }

    /// Shows the dialog and blocks until the user closes it
    ///
    /// Returns the pressed button, or `None` if the window was dismissed
    /// via Escape or the window close control. The outcome is recorded
    /// exactly once by the first terminal action.
    pub fn show_and_wait(self) -> Option<MessageButton> {
        self.response.set(None);
        self.window.present();
        if let Some(button) = &self.default_button {
            button.grab_focus();
        }

        modal::run_until_closed(&self.window, &self.response);

        let outcome = self.response.get();
        self.window.close();
        outcome
    }
}

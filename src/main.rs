//! CLI entry point for modal-dialog-kit
//!
//! Demo harness for the dialog widgets: shows a prompt or message
//! dialog against a hidden parent window and prints the outcome.
//! Not part of the reusable library surface.

use clap::{Parser, Subcommand};
use colored::*;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow};
use modal_dialog_kit::{
    ButtonLabels, DialogOptions, MessageDialog, PromptDialog, ValidationMode,
};

#[derive(Parser)]
#[command(name = "modal-dialog-kit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for a line of text, optionally validated as a number
    Prompt {
        /// Label shown above the entry field
        #[arg(short, long, default_value = "Please enter your name:")]
        text: String,

        /// Window title
        #[arg(long, default_value = "Input Box")]
        title: String,

        /// Initial content of the entry field
        #[arg(long, default_value = "")]
        initial: String,

        /// Validation mode: none, int or float
        #[arg(long, default_value = "none")]
        validate: String,

        /// Button holding default activation (1=OK, 2=Cancel)
        #[arg(long, default_value_t = 1)]
        default_button: u8,
    },

    /// Show a message with up to three buttons
    Message {
        /// Message text (may contain newlines)
        #[arg(short, long)]
        text: String,

        /// Window title
        #[arg(long, default_value = "Message")]
        title: String,

        /// Label of the first button
        #[arg(long, default_value = "Ok")]
        button1: String,

        /// Label of the second button (omit to suppress)
        #[arg(long)]
        button2: Option<String>,

        /// Label of the third button (omit to suppress)
        #[arg(long)]
        button3: Option<String>,

        /// Button holding default activation (1-3)
        #[arg(long, default_value_t = 1)]
        default_button: u8,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Prompt {
            text,
            title,
            initial,
            validate,
            default_button,
        } => {
            let mode = parse_mode(&validate)?;
            run_prompt(text, title, initial, mode, default_button);
        }
        Commands::Message {
            text,
            title,
            button1,
            button2,
            button3,
            default_button,
        } => {
            let labels = ButtonLabels::from_optional(button1, button2, button3);
            run_message(text, title, labels, default_button);
        }
    }

    Ok(())
}

/// Parses the --validate argument
fn parse_mode(value: &str) -> anyhow::Result<ValidationMode> {
    match value {
        "none" => Ok(ValidationMode::None),
        "int" | "integer" => Ok(ValidationMode::Integer),
        "float" => Ok(ValidationMode::Float),
        other => anyhow::bail!("Unknown validation mode: {} (use none, int or float)", other),
    }
}

/// Shows a prompt dialog and prints the entered text
fn run_prompt(
    text: String,
    title: String,
    initial: String,
    mode: ValidationMode,
    default_button: u8,
) {
    let app = Application::builder()
        .application_id("com.tidynest.modal-dialog-kit")
        .build();

    app.connect_activate(move |app| {
        // Hidden parent window, never presented
        let parent = ApplicationWindow::builder().application(app).build();

        let mut options = DialogOptions::titled(title.clone());
        options.default_button = default_button;

        let dialog = match PromptDialog::new(
            parent.upcast_ref::<gtk4::Window>(),
            &text,
            &initial,
            mode,
            &options,
        ) {
            Ok(dialog) => dialog,
            Err(e) => {
                eprintln!("{} {}", "✗".red().bold(), e);
                std::process::exit(1);
            }
        };

        match dialog.show_and_wait() {
            Some(value) => println!("{} Entered: {}", "✓".green(), value.bold()),
            None => println!("{} Cancelled", "✗".yellow()),
        }

        parent.close();
    });

    app.run_with_args::<&str>(&[]);
}

/// Shows a message dialog and prints which button closed it
fn run_message(text: String, title: String, labels: ButtonLabels, default_button: u8) {
    let app = Application::builder()
        .application_id("com.tidynest.modal-dialog-kit")
        .build();

    app.connect_activate(move |app| {
        let parent = ApplicationWindow::builder().application(app).build();

        let mut options = DialogOptions::titled(title.clone());
        options.default_button = default_button;

        let dialog = match MessageDialog::new(
            parent.upcast_ref::<gtk4::Window>(),
            &text,
            &labels,
            &options,
        ) {
            Ok(dialog) => dialog,
            Err(e) => {
                eprintln!("{} {}", "✗".red().bold(), e);
                std::process::exit(1);
            }
        };

        match dialog.show_and_wait() {
            Some(button) => println!("{} Closed by {}", "✓".green(), button.to_string().cyan()),
            None => println!("{} Dismissed", "✗".yellow()),
        }

        parent.close();
    });

    app.run_with_args::<&str>(&[]);
}

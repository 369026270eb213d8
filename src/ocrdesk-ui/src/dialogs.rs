//! Modal message dialog wrapper

/// Severity icon shown by the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogIcon {
    Info,
    Warning,
    Error,
}

/// Button set offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButtons {
    Ok,
    OkCancel,
    YesNo,
    YesNoCancel,
}

/// The button the user chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Ok,
    Cancel,
    Yes,
    No,
}

/// Present a modal message dialog and block until a button is chosen.
///
/// `body` carries additional detail and is appended below `text` when
/// non-empty. Pure presentation, no business logic.
pub fn confirm(
    title: &str,
    text: &str,
    body: &str,
    icon: DialogIcon,
    buttons: DialogButtons,
) -> DialogChoice {
    let description = if body.is_empty() {
        text.to_string()
    } else {
        format!("{}\n\n{}", text, body)
    };
    let result = rfd::MessageDialog::new()
        .set_title(title)
        .set_description(description)
        .set_level(level(icon))
        .set_buttons(button_set(buttons))
        .show();
    choice(result)
}

fn level(icon: DialogIcon) -> rfd::MessageLevel {
    match icon {
        DialogIcon::Info => rfd::MessageLevel::Info,
        DialogIcon::Warning => rfd::MessageLevel::Warning,
        DialogIcon::Error => rfd::MessageLevel::Error,
    }
}

fn button_set(buttons: DialogButtons) -> rfd::MessageButtons {
    match buttons {
        DialogButtons::Ok => rfd::MessageButtons::Ok,
        DialogButtons::OkCancel => rfd::MessageButtons::OkCancel,
        DialogButtons::YesNo => rfd::MessageButtons::YesNo,
        DialogButtons::YesNoCancel => rfd::MessageButtons::YesNoCancel,
    }
}

fn choice(result: rfd::MessageDialogResult) -> DialogChoice {
    match result {
        rfd::MessageDialogResult::Ok => DialogChoice::Ok,
        rfd::MessageDialogResult::Cancel => DialogChoice::Cancel,
        rfd::MessageDialogResult::Yes => DialogChoice::Yes,
        rfd::MessageDialogResult::No => DialogChoice::No,
        // Custom button labels are not used by this front-end.
        rfd::MessageDialogResult::Custom(_) => DialogChoice::Cancel,
    }
}

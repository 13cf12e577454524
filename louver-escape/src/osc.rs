use log::debug;

use crate::actor::Actor;

/// Operating system command selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OperatingSystemCommand {
    SetWindowTitleAndIconName,
    SetIconName,
    SetWindowTitle,
    Clipboard,
    Unhandled,
}

impl From<&[u8]> for OperatingSystemCommand {
    fn from(command: &[u8]) -> Self {
        match command {
            b"0" => Self::SetWindowTitleAndIconName,
            b"1" => Self::SetIconName,
            b"2" => Self::SetWindowTitle,
            b"52" => Self::Clipboard,
            _ => Self::Unhandled,
        }
    }
}

pub(crate) fn perform<A: Actor>(
    actor: &mut A,
    params: &[&[u8]],
    _bell_terminated: bool,
) {
    if params.is_empty() || params[0].is_empty() {
        return unexpected(params);
    }

    match OperatingSystemCommand::from(params[0]) {
        OperatingSystemCommand::SetWindowTitleAndIconName => {
            match title_payload(params) {
                Some(title) => {
                    actor.set_icon_name(Some(title.clone()));
                    actor.set_window_title(Some(title));
                },
                None => unexpected(params),
            }
        },
        OperatingSystemCommand::SetIconName => match title_payload(params) {
            Some(name) => actor.set_icon_name(Some(name)),
            None => unexpected(params),
        },
        OperatingSystemCommand::SetWindowTitle => match title_payload(params) {
            Some(title) => actor.set_window_title(Some(title)),
            None => unexpected(params),
        },
        // Clipboard access stays unwired until an embedder needs it.
        OperatingSystemCommand::Clipboard => {
            debug!("[osc] discarding clipboard payload")
        },
        OperatingSystemCommand::Unhandled => unexpected(params),
    }
}

/// Reassemble the payload after the command selector.
///
/// The parser split the raw string on every `;`, so separators inside the
/// payload are restored to keep it byte-for-byte intact.
fn title_payload(params: &[&[u8]]) -> Option<String> {
    if params.len() < 2 {
        return None;
    }

    let payload = params[1..].join(&b';');
    Some(String::from_utf8_lossy(&payload).into_owned())
}

fn unexpected(params: &[&[u8]]) {
    let params: Vec<_> = params
        .iter()
        .map(|param| String::from_utf8_lossy(param))
        .collect();
    debug!("[unexpected osc] params: {params:?}");
}

use crate::daemon::Request;
use crate::hotkey::{format_hotkey, Hotkey, Modifiers};
use core_foundation::runloop::{kCFRunLoopCommonModes, CFRunLoop, CFRunLoopSource};
use core_graphics::event::{
    CGEventFlags, CGEventTap, CGEventTapLocation, CGEventTapOptions, CGEventTapPlacement,
    CGEventType, CallbackResult, EventField,
};
use shoji_ipc::Command;
use std::collections::HashMap;
use std::sync::mpsc;

/// Session event tap that turns bound chords into requests.
pub struct HotkeyTap {
    _tap: CGEventTap<'static>,
    _source: CFRunLoopSource,
}

impl HotkeyTap {
    /// Installs the tap on the current run loop.
    pub fn start(
        bindings: &[(Hotkey, Command)],
        request_tx: mpsc::Sender<Request>,
    ) -> Result<Self, String> {
        let bindings: HashMap<Hotkey, Command> = bindings.iter().cloned().collect();
        for (hotkey, command) in &bindings {
            tracing::debug!("Binding {} to {:?}", format_hotkey(hotkey), command);
        }
        let count = bindings.len();

        let tap = CGEventTap::new(
            CGEventTapLocation::Session,
            CGEventTapPlacement::HeadInsertEventTap,
            CGEventTapOptions::Default,
            vec![CGEventType::KeyDown],
            move |_proxy, _event_type, event| {
                let key_code =
                    event.get_integer_value_field(EventField::KEYBOARD_EVENT_KEYCODE) as u16;
                let is_repeat =
                    event.get_integer_value_field(EventField::KEYBOARD_EVENT_AUTOREPEAT) != 0;
                let flags = event.get_flags();

                let hotkey = Hotkey {
                    key_code,
                    modifiers: Modifiers {
                        cmd: flags.contains(CGEventFlags::CGEventFlagCommand),
                        alt: flags.contains(CGEventFlags::CGEventFlagAlternate),
                        ctrl: flags.contains(CGEventFlags::CGEventFlagControl),
                        shift: flags.contains(CGEventFlags::CGEventFlagShift),
                    },
                };

                let Some(command) = bindings.get(&hotkey) else {
                    return CallbackResult::Keep;
                };

                if is_repeat && !command.is_repeatable() {
                    return CallbackResult::Drop;
                }

                tracing::debug!("Hotkey matched: {} -> {:?}", format_hotkey(&hotkey), command);
                if request_tx.send(Request::new(command.clone())).is_err() {
                    tracing::error!("Failed to send command from hotkey");
                }
                CallbackResult::Drop
            },
        )
        .map_err(|_| {
            "Failed to create event tap. Make sure Accessibility permission is granted."
                .to_string()
        })?;

        tap.enable();

        let source = tap
            .mach_port()
            .create_runloop_source(0)
            .map_err(|_| "Failed to create run loop source".to_string())?;

        CFRunLoop::get_current().add_source(&source, unsafe { kCFRunLoopCommonModes });
        tracing::info!("Hotkey tap started with {} bindings", count);

        Ok(Self {
            _tap: tap,
            _source: source,
        })
    }
}

//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit keyboard events into engine `InputEvent`s.
//
// Architecture:
//   winit KeyEvent → InputProcessor → InputEvent → InputBuffer
//
// Modifier state is cached from `ModifiersChanged` and stamped onto every
// key event. OS auto-repeat and keys the engine has no code for are
// dropped here so the core only ever sees real press/release edges.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, Modifiers};

//=== InputProcessor ======================================================

pub(crate) struct InputProcessor {
    current_modifiers: Modifiers,
}

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
        }
    }

    //--- Modifier State ---------------------------------------------------

    pub(crate) fn update_modifiers(&mut self, state: ModifiersState) {
        self.current_modifiers = Modifiers::from(state);
    }

    pub(crate) fn current_modifiers(&self) -> Modifiers {
        self.current_modifiers
    }

    //--- Event Processing -------------------------------------------------

    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        self.process_key(key_event.physical_key, key_event.state, key_event.repeat)
    }

    /// Returns `None` for auto-repeats and unmapped keys.
    pub(crate) fn process_key(
        &self,
        physical_key: PhysicalKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputEvent> {
        if repeat {
            return None;
        }

        let key = match physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            PhysicalKey::Unidentified(_) => return None,
        };
        if key == KeyCode::Unidentified {
            return None;
        }

        let modifiers = self.current_modifiers;
        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        })
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Maps digits, letters, arrows and a handful of editing keys. Everything
/// else becomes `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode as W;
        match code {
            W::Digit0 => Self::Digit0, W::Digit1 => Self::Digit1,
            W::Digit2 => Self::Digit2, W::Digit3 => Self::Digit3,
            W::Digit4 => Self::Digit4, W::Digit5 => Self::Digit5,
            W::Digit6 => Self::Digit6, W::Digit7 => Self::Digit7,
            W::Digit8 => Self::Digit8, W::Digit9 => Self::Digit9,

            W::KeyA => Self::KeyA, W::KeyB => Self::KeyB, W::KeyC => Self::KeyC,
            W::KeyD => Self::KeyD, W::KeyE => Self::KeyE, W::KeyF => Self::KeyF,
            W::KeyG => Self::KeyG, W::KeyH => Self::KeyH, W::KeyI => Self::KeyI,
            W::KeyJ => Self::KeyJ, W::KeyK => Self::KeyK, W::KeyL => Self::KeyL,
            W::KeyM => Self::KeyM, W::KeyN => Self::KeyN, W::KeyO => Self::KeyO,
            W::KeyP => Self::KeyP, W::KeyQ => Self::KeyQ, W::KeyR => Self::KeyR,
            W::KeyS => Self::KeyS, W::KeyT => Self::KeyT, W::KeyU => Self::KeyU,
            W::KeyV => Self::KeyV, W::KeyW => Self::KeyW, W::KeyX => Self::KeyX,
            W::KeyY => Self::KeyY, W::KeyZ => Self::KeyZ,

            W::ArrowUp => Self::ArrowUp,
            W::ArrowDown => Self::ArrowDown,
            W::ArrowLeft => Self::ArrowLeft,
            W::ArrowRight => Self::ArrowRight,

            W::Space => Self::Space,
            W::Enter => Self::Enter,
            W::Escape => Self::Escape,
            W::Tab => Self::Tab,
            W::Backspace => Self::Backspace,
            W::Delete => Self::Delete,

            _ => Self::Unidentified,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    fn modifiers(shift: bool, ctrl: bool, alt: bool) -> ModifiersState {
        let mut state = ModifiersState::empty();
        state.set(ModifiersState::SHIFT, shift);
        state.set(ModifiersState::CONTROL, ctrl);
        state.set(ModifiersState::ALT, alt);
        state
    }

    fn press(processor: &InputProcessor, code: WinitKeyCode) -> Option<InputEvent> {
        processor.process_key(PhysicalKey::Code(code), ElementState::Pressed, false)
    }

    //=====================================================================
    // Key Events
    //=====================================================================

    #[test]
    fn pressed_arrow_becomes_key_down() {
        let processor = InputProcessor::new();

        assert_eq!(
            press(&processor, WinitKeyCode::ArrowLeft),
            Some(InputEvent::KeyDown { key: KeyCode::ArrowLeft, modifiers: Modifiers::NONE })
        );
    }

    #[test]
    fn released_key_becomes_key_up() {
        let processor = InputProcessor::new();

        let event = processor.process_key(
            PhysicalKey::Code(WinitKeyCode::KeyD),
            ElementState::Released,
            false,
        );

        assert_eq!(
            event,
            Some(InputEvent::KeyUp { key: KeyCode::KeyD, modifiers: Modifiers::NONE })
        );
    }

    #[test]
    fn auto_repeat_is_dropped() {
        let processor = InputProcessor::new();

        let event = processor.process_key(
            PhysicalKey::Code(WinitKeyCode::ArrowUp),
            ElementState::Pressed,
            true,
        );

        assert_eq!(event, None, "Held keys must not re-emit KeyDown");
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        let processor = InputProcessor::new();

        assert_eq!(press(&processor, WinitKeyCode::F13), None);
        assert_eq!(
            processor.process_key(
                PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
                ElementState::Pressed,
                false,
            ),
            None
        );
    }

    //=====================================================================
    // Modifier Tracking
    //=====================================================================

    #[test]
    fn starts_with_no_modifiers() {
        assert_eq!(InputProcessor::new().current_modifiers(), Modifiers::NONE);
    }

    #[test]
    fn modifiers_are_stamped_on_key_events() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(modifiers(true, false, true));

        match press(&processor, WinitKeyCode::Space) {
            Some(InputEvent::KeyDown { key, modifiers }) => {
                assert_eq!(key, KeyCode::Space);
                assert!(modifiers.shift && modifiers.alt && !modifiers.ctrl);
            }
            other => panic!("Expected KeyDown, got {:?}", other),
        }
    }

    #[test]
    fn modifiers_persist_until_changed() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(modifiers(false, true, false));

        let _ = press(&processor, WinitKeyCode::KeyA);
        assert!(processor.current_modifiers().ctrl);

        processor.update_modifiers(ModifiersState::empty());
        assert_eq!(processor.current_modifiers(), Modifiers::NONE);
    }

    //=====================================================================
    // Key Code Conversion
    //=====================================================================

    #[test]
    fn movement_keys_convert() {
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowUp), KeyCode::ArrowUp);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyW), KeyCode::KeyW);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::KeyA);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyS), KeyCode::KeyS);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyD), KeyCode::KeyD);
    }

    #[test]
    fn control_keys_convert() {
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Space);
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(WinitKeyCode::Digit7), KeyCode::Digit7);
    }
}

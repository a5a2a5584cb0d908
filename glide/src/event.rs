/// High-level events with element targeting.
///
/// Targets are `None` when produced by [`translate`]; hosts resolve them
/// against the element tree with [`crate::hit::hit_test`] before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse click event
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Mouse scroll event
    Scroll {
        target: Option<String>,
        x: u16,
        y: u16,
        delta_x: i16,
        delta_y: i16,
    },
    /// Mouse move event (for hover tracking)
    MouseMove { x: u16, y: u16 },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Translate a raw crossterm event into a high-level event.
///
/// Key releases/repeats and unmapped keys are dropped. Mouse wheel ticks
/// become unit scroll deltas.
pub fn translate(raw: &crossterm::event::Event) -> Option<Event> {
    use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

    match raw {
        CtEvent::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            Some(Event::Key {
                target: None,
                key: Key::try_from(key.code).ok()?,
                modifiers: key.modifiers.into(),
            })
        }
        CtEvent::Mouse(mouse) => {
            let (x, y) = (mouse.column, mouse.row);
            match mouse.kind {
                MouseEventKind::Down(button) => Some(Event::Click {
                    target: None,
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::ScrollUp => Some(scroll_event(x, y, 0, -1)),
                MouseEventKind::ScrollDown => Some(scroll_event(x, y, 0, 1)),
                MouseEventKind::ScrollLeft => Some(scroll_event(x, y, -1, 0)),
                MouseEventKind::ScrollRight => Some(scroll_event(x, y, 1, 0)),
                MouseEventKind::Moved => Some(Event::MouseMove { x, y }),
                _ => None,
            }
        }
        CtEvent::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn scroll_event(x: u16, y: u16, delta_x: i16, delta_y: i16) -> Event {
    Event::Scroll {
        target: None,
        x,
        y,
        delta_x,
        delta_y,
    }
}

// Conversion from crossterm types
impl TryFrom<crossterm::event::KeyCode> for Key {
    type Error = ();

    fn try_from(code: crossterm::event::KeyCode) -> Result<Self, Self::Error> {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Ok(Key::Char(c)),
            KeyCode::Enter => Ok(Key::Enter),
            KeyCode::Esc => Ok(Key::Escape),
            KeyCode::Tab => Ok(Key::Tab),
            KeyCode::Up => Ok(Key::Up),
            KeyCode::Down => Ok(Key::Down),
            KeyCode::Left => Ok(Key::Left),
            KeyCode::Right => Ok(Key::Right),
            _ => Err(()),
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

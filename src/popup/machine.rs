//! Popup interaction state machine
//!
//! Every keyboard, pointer and window event the popup sees goes through
//! `transition`, which is pure: it looks at the current phase and returns the
//! next phase plus a list of effects for the controller to carry out. Nothing
//! here knows about terminals or widgets.

/// Visibility and highlight of the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupPhase {
    #[default]
    Hidden,
    /// Visible with no highlighted row
    Open,
    /// Visible with the given row highlighted
    Highlighted(usize),
}

impl PopupPhase {
    pub fn is_visible(self) -> bool {
        !matches!(self, PopupPhase::Hidden)
    }

    pub fn highlighted(self) -> Option<usize> {
        match self {
            PopupPhase::Highlighted(row) => Some(row),
            _ => None,
        }
    }
}

/// Keys the popup distinguishes; everything else is `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Enter,
    Escape,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEvent {
    Key(NavKey),
    /// Pointer moved over the popup; `None` when over the frame rather than a row
    Hover(Option<usize>),
    /// Primary button pressed on a row
    Click(usize),
    /// Pointer left the popup area
    PointerLeft,
    /// Button pressed anywhere outside the popup
    PressOutside,
    FocusLost,
    /// Host window moved or resized
    HostGeometryChanged,
}

/// Side effects requested by a transition, applied in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Set (or clear) the list's highlighted row
    Highlight(Option<usize>),
    /// Write the row's value into the field without committing it
    Preview(usize),
    /// Put the original text back into the field
    RevertText,
    FocusField,
    AcceptHighlighted,
    Hide,
    /// Re-anchor the popup below the field
    Reposition,
}

/// What happened to the event after the popup saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Handled by the controller; nobody else should see it
    Consumed,
    /// Handled as list navigation by the popup itself
    PassThrough,
    /// The caller must deliver the key to the text field
    ForwardToField,
    /// The popup is not interested (e.g. it is hidden)
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub phase: PopupPhase,
    pub effects: Vec<Effect>,
    pub disposition: Disposition,
}

impl Transition {
    fn new(phase: PopupPhase, effects: Vec<Effect>, disposition: Disposition) -> Self {
        Self {
            phase,
            effects,
            disposition,
        }
    }

    fn unchanged(phase: PopupPhase, disposition: Disposition) -> Self {
        Self::new(phase, Vec::new(), disposition)
    }
}

/// Inputs to a transition besides the event itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupContext {
    pub phase: PopupPhase,
    pub hover_armed: bool,
    pub row_count: usize,
}

pub fn transition(ctx: PopupContext, event: PopupEvent) -> Transition {
    match event {
        PopupEvent::HostGeometryChanged => {
            Transition::new(ctx.phase, vec![Effect::Reposition], Disposition::Ignored)
        }
        _ if !ctx.phase.is_visible() => Transition::unchanged(ctx.phase, Disposition::Ignored),
        PopupEvent::Key(key) => on_key(ctx, key),
        PopupEvent::Hover(row) => on_hover(ctx, row),
        PopupEvent::Click(row) if row < ctx.row_count => {
            let mut effects = select(ctx.phase, row);
            effects.push(Effect::AcceptHighlighted);
            Transition::new(PopupPhase::Hidden, effects, Disposition::Consumed)
        }
        PopupEvent::Click(_) => Transition::unchanged(ctx.phase, Disposition::Consumed),
        PopupEvent::PointerLeft => Transition::new(
            PopupPhase::Open,
            vec![Effect::Highlight(None), Effect::RevertText],
            Disposition::Consumed,
        ),
        PopupEvent::PressOutside | PopupEvent::FocusLost => {
            Transition::new(PopupPhase::Hidden, vec![Effect::Hide], Disposition::Consumed)
        }
    }
}

fn on_key(ctx: PopupContext, key: NavKey) -> Transition {
    match key {
        NavKey::Enter => match ctx.phase {
            PopupPhase::Highlighted(_) => Transition::new(
                PopupPhase::Hidden,
                vec![Effect::AcceptHighlighted],
                Disposition::Consumed,
            ),
            _ => Transition::new(PopupPhase::Hidden, vec![Effect::Hide], Disposition::ForwardToField),
        },
        NavKey::Escape => Transition::new(PopupPhase::Hidden, vec![Effect::Hide], Disposition::Consumed),
        NavKey::Up if ctx.phase == PopupPhase::Highlighted(0) => Transition::new(
            PopupPhase::Open,
            vec![Effect::Highlight(None), Effect::RevertText, Effect::FocusField],
            Disposition::Consumed,
        ),
        NavKey::Up | NavKey::Down | NavKey::Home | NavKey::End | NavKey::PageUp | NavKey::PageDown => {
            match navigate(ctx.phase.highlighted(), ctx.row_count, key) {
                Some(row) => Transition::new(
                    PopupPhase::Highlighted(row),
                    select(ctx.phase, row),
                    Disposition::PassThrough,
                ),
                None => Transition::unchanged(ctx.phase, Disposition::PassThrough),
            }
        }
        NavKey::Other => Transition::unchanged(ctx.phase, Disposition::ForwardToField),
    }
}

fn on_hover(ctx: PopupContext, row: Option<usize>) -> Transition {
    if !ctx.hover_armed {
        return Transition::unchanged(ctx.phase, Disposition::Consumed);
    }

    match row {
        Some(row) if row < ctx.row_count => Transition::new(
            PopupPhase::Highlighted(row),
            select(ctx.phase, row),
            Disposition::Consumed,
        ),
        _ => Transition::unchanged(ctx.phase, Disposition::Consumed),
    }
}

/// Highlight and preview `row`, unless it is already the highlighted one
fn select(phase: PopupPhase, row: usize) -> Vec<Effect> {
    if phase == PopupPhase::Highlighted(row) {
        Vec::new()
    } else {
        vec![Effect::Highlight(Some(row)), Effect::Preview(row)]
    }
}

/// List navigation: the row a navigation key moves the highlight to
///
/// The popup always shows every row, so a page is the whole list. Returns
/// None when there are no rows.
pub fn navigate(current: Option<usize>, row_count: usize, key: NavKey) -> Option<usize> {
    if row_count == 0 {
        return None;
    }
    let last = row_count - 1;

    let next = match (key, current) {
        (NavKey::Down, None) => 0,
        (NavKey::Down, Some(row)) => (row + 1).min(last),
        (NavKey::Up, None) => last,
        (NavKey::Up, Some(row)) => row.saturating_sub(1),
        (NavKey::Home | NavKey::PageUp, _) => 0,
        (NavKey::End | NavKey::PageDown, _) => last,
        (_, current) => return current,
    };

    Some(next)
}

#[cfg(test)]
#[path = "machine_tests.rs"]
mod machine_tests;

//! Tests for the popup state machine

use super::*;
use proptest::prelude::*;

fn ctx(phase: PopupPhase) -> PopupContext {
    PopupContext {
        phase,
        hover_armed: true,
        row_count: 3,
    }
}

mod hidden_tests {
    use super::*;

    #[test]
    fn test_keys_ignored_while_hidden() {
        let t = transition(ctx(PopupPhase::Hidden), PopupEvent::Key(NavKey::Enter));
        assert_eq!(t.phase, PopupPhase::Hidden);
        assert!(t.effects.is_empty());
        assert_eq!(t.disposition, Disposition::Ignored);
    }

    #[test]
    fn test_geometry_change_repositions_even_when_hidden() {
        let t = transition(ctx(PopupPhase::Hidden), PopupEvent::HostGeometryChanged);
        assert_eq!(t.effects, vec![Effect::Reposition]);
        assert_eq!(t.phase, PopupPhase::Hidden);
    }

    #[test]
    fn test_geometry_change_keeps_highlight() {
        let t = transition(ctx(PopupPhase::Highlighted(2)), PopupEvent::HostGeometryChanged);
        assert_eq!(t.phase, PopupPhase::Highlighted(2));
        assert_eq!(t.effects, vec![Effect::Reposition]);
    }
}

mod key_tests {
    use super::*;

    #[test]
    fn test_enter_with_highlight_accepts() {
        let t = transition(ctx(PopupPhase::Highlighted(1)), PopupEvent::Key(NavKey::Enter));
        assert_eq!(t.effects, vec![Effect::AcceptHighlighted]);
        assert_eq!(t.disposition, Disposition::Consumed);
        assert_eq!(t.phase, PopupPhase::Hidden);
    }

    #[test]
    fn test_enter_without_highlight_forwards_and_hides() {
        let t = transition(ctx(PopupPhase::Open), PopupEvent::Key(NavKey::Enter));
        assert_eq!(t.effects, vec![Effect::Hide]);
        assert_eq!(t.disposition, Disposition::ForwardToField);
        assert_eq!(t.phase, PopupPhase::Hidden);
    }

    #[test]
    fn test_escape_hides() {
        let t = transition(ctx(PopupPhase::Highlighted(0)), PopupEvent::Key(NavKey::Escape));
        assert_eq!(t.effects, vec![Effect::Hide]);
        assert_eq!(t.disposition, Disposition::Consumed);
    }

    #[test]
    fn test_up_on_first_row_returns_to_field() {
        let t = transition(ctx(PopupPhase::Highlighted(0)), PopupEvent::Key(NavKey::Up));
        assert_eq!(
            t.effects,
            vec![Effect::Highlight(None), Effect::RevertText, Effect::FocusField]
        );
        assert_eq!(t.phase, PopupPhase::Open);
        assert_eq!(t.disposition, Disposition::Consumed);
    }

    #[test]
    fn test_up_on_later_row_navigates() {
        let t = transition(ctx(PopupPhase::Highlighted(2)), PopupEvent::Key(NavKey::Up));
        assert_eq!(t.phase, PopupPhase::Highlighted(1));
        assert_eq!(t.effects, vec![Effect::Highlight(Some(1)), Effect::Preview(1)]);
        assert_eq!(t.disposition, Disposition::PassThrough);
    }

    #[test]
    fn test_down_from_open_highlights_first_row() {
        let t = transition(ctx(PopupPhase::Open), PopupEvent::Key(NavKey::Down));
        assert_eq!(t.phase, PopupPhase::Highlighted(0));
        assert_eq!(t.effects, vec![Effect::Highlight(Some(0)), Effect::Preview(0)]);
        assert_eq!(t.disposition, Disposition::PassThrough);
    }

    #[test]
    fn test_down_on_last_row_stays() {
        let t = transition(ctx(PopupPhase::Highlighted(2)), PopupEvent::Key(NavKey::Down));
        assert_eq!(t.phase, PopupPhase::Highlighted(2));
        assert!(t.effects.is_empty());
        assert_eq!(t.disposition, Disposition::PassThrough);
    }

    #[test]
    fn test_other_key_forwards_to_field() {
        let t = transition(ctx(PopupPhase::Highlighted(1)), PopupEvent::Key(NavKey::Other));
        assert_eq!(t.phase, PopupPhase::Highlighted(1));
        assert!(t.effects.is_empty());
        assert_eq!(t.disposition, Disposition::ForwardToField);
    }
}

mod pointer_tests {
    use super::*;

    #[test]
    fn test_hover_selects_when_armed() {
        let t = transition(ctx(PopupPhase::Open), PopupEvent::Hover(Some(1)));
        assert_eq!(t.phase, PopupPhase::Highlighted(1));
        assert_eq!(t.effects, vec![Effect::Highlight(Some(1)), Effect::Preview(1)]);
    }

    #[test]
    fn test_hover_ignored_until_armed() {
        let mut context = ctx(PopupPhase::Open);
        context.hover_armed = false;
        let t = transition(context, PopupEvent::Hover(Some(1)));
        assert_eq!(t.phase, PopupPhase::Open);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_hover_over_frame_changes_nothing() {
        let t = transition(ctx(PopupPhase::Highlighted(1)), PopupEvent::Hover(None));
        assert_eq!(t.phase, PopupPhase::Highlighted(1));
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_hover_same_row_does_not_preview_again() {
        let t = transition(ctx(PopupPhase::Highlighted(1)), PopupEvent::Hover(Some(1)));
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_click_highlights_and_accepts() {
        let t = transition(ctx(PopupPhase::Open), PopupEvent::Click(2));
        assert_eq!(
            t.effects,
            vec![
                Effect::Highlight(Some(2)),
                Effect::Preview(2),
                Effect::AcceptHighlighted
            ]
        );
        assert_eq!(t.phase, PopupPhase::Hidden);
    }

    #[test]
    fn test_click_out_of_range_does_nothing() {
        let t = transition(ctx(PopupPhase::Open), PopupEvent::Click(7));
        assert!(t.effects.is_empty());
        assert_eq!(t.phase, PopupPhase::Open);
    }

    #[test]
    fn test_pointer_left_clears_and_reverts_but_stays_open() {
        let t = transition(ctx(PopupPhase::Highlighted(1)), PopupEvent::PointerLeft);
        assert_eq!(t.effects, vec![Effect::Highlight(None), Effect::RevertText]);
        assert_eq!(t.phase, PopupPhase::Open);
    }

    #[test]
    fn test_press_outside_and_focus_lost_hide() {
        for event in [PopupEvent::PressOutside, PopupEvent::FocusLost] {
            let t = transition(ctx(PopupPhase::Highlighted(0)), event);
            assert_eq!(t.effects, vec![Effect::Hide]);
            assert_eq!(t.phase, PopupPhase::Hidden);
        }
    }
}

mod navigate_tests {
    use super::*;

    #[test]
    fn test_navigate_empty_list() {
        assert_eq!(navigate(None, 0, NavKey::Down), None);
    }

    #[test]
    fn test_navigate_up_from_none_goes_to_last() {
        assert_eq!(navigate(None, 4, NavKey::Up), Some(3));
    }

    #[test]
    fn test_navigate_home_end_and_pages() {
        assert_eq!(navigate(Some(2), 4, NavKey::Home), Some(0));
        assert_eq!(navigate(Some(2), 4, NavKey::PageUp), Some(0));
        assert_eq!(navigate(Some(0), 4, NavKey::End), Some(3));
        assert_eq!(navigate(None, 4, NavKey::PageDown), Some(3));
    }

    #[test]
    fn test_navigate_non_navigation_key_keeps_current() {
        assert_eq!(navigate(Some(1), 4, NavKey::Other), Some(1));
        assert_eq!(navigate(None, 4, NavKey::Enter), None);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Navigation always lands on an existing row
    #[test]
    fn prop_navigation_stays_in_bounds(
        rows in 1usize..20,
        start in prop::option::of(0usize..20),
        key in prop::sample::select(vec![
            NavKey::Up, NavKey::Down, NavKey::Home, NavKey::End, NavKey::PageUp, NavKey::PageDown
        ]),
    ) {
        let start = start.filter(|row| *row < rows);
        let next = navigate(start, rows, key);
        prop_assert!(matches!(next, Some(row) if row < rows));
    }

    // A hidden popup only ever reacts to geometry changes
    #[test]
    fn prop_hidden_popup_ignores_input(row in 0usize..5, armed in prop::bool::ANY) {
        let context = PopupContext { phase: PopupPhase::Hidden, hover_armed: armed, row_count: 5 };
        for event in [
            PopupEvent::Hover(Some(row)),
            PopupEvent::Click(row),
            PopupEvent::PointerLeft,
            PopupEvent::PressOutside,
            PopupEvent::FocusLost,
            PopupEvent::Key(NavKey::Down),
        ] {
            let t = transition(context, event);
            prop_assert_eq!(t.disposition, Disposition::Ignored);
            prop_assert!(t.effects.is_empty());
        }
    }
}

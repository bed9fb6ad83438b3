use crate::view_state::{Panel, ViewState};

fn assert_exactly_one_active(state: &ViewState) {
    assert_ne!(state.is_books_active(), state.is_authors_active());
}

#[test]
fn starts_on_books() {
    let state = ViewState::new();
    assert!(state.is_books_active());
    assert!(!state.is_authors_active());
    assert_eq!(state.active(), Panel::Books);
    assert_eq!(ViewState::default(), state);
}

#[test]
fn exactly_one_panel_after_any_sequence() {
    // every sequence of up to 8 show_books/show_authors calls
    for len in 0..=8u32 {
        for bits in 0..(1u32 << len) {
            let mut state = ViewState::new();
            assert_exactly_one_active(&state);
            let mut expected = Panel::Books;
            for i in 0..len {
                if bits & (1 << i) == 0 {
                    state.show_books();
                    expected = Panel::Books;
                } else {
                    state.show_authors();
                    expected = Panel::Authors;
                }
                assert_exactly_one_active(&state);
            }
            assert_eq!(state.active(), expected);
        }
    }
}

#[test]
fn authors_then_books_ends_on_books() {
    let mut state = ViewState::new();
    state.show_authors();
    assert!(state.is_authors_active());
    state.show_books();
    assert!(state.is_books_active());
}

#[test]
fn initialize_resets_to_books() {
    let mut state = ViewState::new();
    state.show_authors();
    state.initialize();
    assert_eq!(state.active(), Panel::Books);
}

#[test]
fn status_flags_follow_active_panel() {
    let mut state = ViewState::new();
    assert_eq!(state.status_books(), " active");
    assert_eq!(state.status_authors(), "");

    state.show_authors();
    assert_eq!(state.status_books(), "");
    assert_eq!(state.status_authors(), " active");
    assert_eq!(state.status(Panel::Authors), " active");

    // idempotent
    state.show_authors();
    assert_eq!(state.status_authors(), " active");
}

#[test]
fn toggle_switches_panels() {
    let mut state = ViewState::new();
    state.toggle();
    assert_eq!(state.active(), Panel::Authors);
    state.toggle();
    assert_eq!(state.active(), Panel::Books);
}

#[test]
fn panel_tab_order() {
    assert_eq!(Panel::ALL, [Panel::Books, Panel::Authors]);
    for (i, panel) in Panel::ALL.iter().enumerate() {
        assert_eq!(panel.index(), i);
        assert_eq!(panel.other().other(), *panel);
    }
    assert_eq!(Panel::Books.title(), "Books");
    assert_eq!(Panel::Authors.title(), "Authors");
}

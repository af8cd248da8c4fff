//! State transitions: (App, Action) → Transition.
//!
//! Testable without a terminal. Activation mutates the button in place;
//! the redraw it needs is requested by the counter's observer, so the
//! transition itself is `Continue`.

use super::state::{Action, App, Effect, Transition};

/// Apply an action to the model and describe what the host must do next.
pub fn update(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::Activate => {
            if let Some(button) = app.button.as_mut() {
                button.activate();
            }
            Transition::Continue
        }
        Action::ToggleMount => match app.button.take() {
            // Dropping the button is the unmount.
            Some(_) => Transition::Redraw,
            None => Transition::Effect(Effect::Mount),
        },
        Action::Quit => Transition::Quit,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::Button;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn count(app: &App) -> Option<u64> {
        app.button.as_ref().map(Button::count)
    }

    #[test]
    fn activate_increments_mounted_button() {
        let mut app = App::mounted();
        assert_eq!(update(&mut app, &Action::Activate), Transition::Continue);
        assert_eq!(count(&app), Some(1));
    }

    #[test]
    fn n_activations_count_n() {
        let mut app = App::mounted();
        for _ in 0..5 {
            update(&mut app, &Action::Activate);
        }
        assert_eq!(count(&app), Some(5));
        assert_eq!(
            app.button.as_ref().map(Button::label).as_deref(),
            Some("esto es un boton 5")
        );
    }

    #[test]
    fn activate_notifies_button_observer() {
        let redraws = Rc::new(RefCell::new(0));
        let mut app = App::mounted();
        let r = Rc::clone(&redraws);
        app.button
            .as_mut()
            .unwrap()
            .on_change(move |_| *r.borrow_mut() += 1);

        update(&mut app, &Action::Activate);
        update(&mut app, &Action::Activate);

        assert_eq!(*redraws.borrow(), 2);
    }

    #[test]
    fn activate_while_unmounted_is_noop() {
        let mut app = App::unmounted();
        assert_eq!(update(&mut app, &Action::Activate), Transition::Continue);
        assert!(!app.is_mounted());
    }

    #[test]
    fn toggle_mount_unmounts_and_requests_redraw() {
        let mut app = App::mounted();
        assert_eq!(update(&mut app, &Action::ToggleMount), Transition::Redraw);
        assert!(!app.is_mounted());
    }

    #[test]
    fn toggle_mount_while_unmounted_requests_mount_effect() {
        let mut app = App::unmounted();
        assert_eq!(
            update(&mut app, &Action::ToggleMount),
            Transition::Effect(Effect::Mount)
        );
    }

    #[test]
    fn unmount_then_remount_resets_count() {
        let mut app = App::mounted();
        for _ in 0..3 {
            update(&mut app, &Action::Activate);
        }
        update(&mut app, &Action::ToggleMount);
        // The effects layer performs the mount.
        if update(&mut app, &Action::ToggleMount) == Transition::Effect(Effect::Mount) {
            app.button = Some(Button::mount());
        }
        assert_eq!(count(&app), Some(0));
    }

    #[test]
    fn quit_returns_quit() {
        let mut app = App::mounted();
        assert_eq!(update(&mut app, &Action::Quit), Transition::Quit);
    }

    #[test]
    fn quit_does_not_touch_count() {
        let mut app = App::mounted();
        update(&mut app, &Action::Activate);
        update(&mut app, &Action::Quit);
        assert_eq!(count(&app), Some(1));
    }
}

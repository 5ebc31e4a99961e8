use dioxus::prelude::*;

/// Somewhere a page state lives: a component signal in the app, a plain
/// mutable reference in tests.
pub trait Store<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T: 'static> Store<T> for Signal<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut state = self.write();
        f(&mut *state)
    }
}

impl<T> Store<T> for &mut T {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut **self)
    }
}

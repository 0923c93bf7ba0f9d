use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

/// A single-threaded value holder that notifies subscribers synchronously
/// on every `set`.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T> PartialEq for Observable<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    pub fn set(&self, value: T) {
        // Listeners are cloned out so they may subscribe, unsubscribe or set
        // again without tripping the RefCell.
        let listeners: Vec<Listener<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(&value);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };
        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Derive a value that is recomputed whenever this one changes.
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(&T) -> U + 'static) -> Derived<U> {
        let initial = {
            let inner = self.inner.borrow();
            f(&inner.value)
        };
        let value = Observable::new(initial);
        let sink = value.clone();
        let upstream = self.subscribe(move |v| sink.set(f(v)));
        Derived {
            value,
            _upstream: upstream,
        }
    }
}

/// Keeps a listener registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Output of [`Observable::map`]. Holds its upstream subscription, so the
/// derived value stops updating once this is dropped.
pub struct Derived<U> {
    value: Observable<U>,
    _upstream: Subscription,
}

impl<U: Clone + 'static> Derived<U> {
    pub fn get(&self) -> U {
        self.value.get()
    }

    pub fn subscribe(&self, listener: impl Fn(&U) + 'static) -> Subscription {
        self.value.subscribe(listener)
    }
}

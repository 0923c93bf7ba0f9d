//! Pointer-driven tilt for the hero visuals.
//!
//! Pointer positions are normalized against the container so that its center
//! maps to `(0, 0)` and its edges to `±1`. Positions outside the container are
//! not clamped. Consumers scale the normalized values into degrees or pixels.

use crate::error::BrowserError;
use crate::motion::MotionPreference;
use crate::observable::{Derived, Observable};

/// Degrees of rotation at the container edge.
pub const TILT_DEGREES: f64 = 6.0;
/// Pixels of vertical drift for the background blob at the container edge.
pub const FLOAT_PIXELS: f64 = 8.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

/// One pointer move, in viewport coordinates, with the container bounds
/// measured at the time of the event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
    pub rect: ContainerRect,
}

fn normalize_axis(position: f64, start: f64, extent: f64) -> f64 {
    if !(extent > 0.0) {
        return 0.0;
    }
    let half = extent / 2.0;
    (position - start - half) / half
}

pub fn normalize(sample: &PointerSample) -> PointerState {
    PointerState {
        x: normalize_axis(sample.client_x, sample.rect.left, sample.rect.width),
        y: normalize_axis(sample.client_y, sample.rect.top, sample.rect.height),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltTransform {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl From<PointerState> for TiltTransform {
    fn from(pointer: PointerState) -> Self {
        TiltTransform {
            rotate_x_deg: pointer.y * TILT_DEGREES,
            rotate_y_deg: pointer.x * -TILT_DEGREES,
        }
    }
}

impl TiltTransform {
    pub fn css(&self) -> String {
        format!(
            "transform: perspective(1200px) rotateX({:.2}deg) rotateY({:.2}deg);",
            self.rotate_x_deg, self.rotate_y_deg
        )
    }

    /// Only the horizontal swing, used by the image frame.
    pub fn yaw_css(&self) -> String {
        format!(
            "transform: perspective(1200px) rotateY({:.2}deg);",
            self.rotate_y_deg
        )
    }
}

pub fn float_offset(pointer: PointerState) -> f64 {
    pointer.y * FLOAT_PIXELS
}

/// Something that can deliver pointer moves. The returned listener detaches
/// itself when dropped.
pub trait PointerSurface {
    type Listener;

    fn listen(
        &self,
        on_move: Box<dyn FnMut(PointerSample)>,
    ) -> Result<Self::Listener, BrowserError>;
}

#[derive(Clone)]
pub struct ParallaxController {
    pointer: Observable<PointerState>,
}

impl Default for ParallaxController {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallaxController {
    pub fn new() -> Self {
        Self {
            pointer: Observable::new(PointerState::default()),
        }
    }

    #[cfg(test)]
    pub fn pointer(&self) -> &Observable<PointerState> {
        &self.pointer
    }

    /// Starts tracking pointer moves on `surface`. Returns `Ok(None)` without
    /// touching the surface when the user prefers reduced motion.
    pub fn attach<S: PointerSurface>(
        &self,
        surface: &S,
        motion: MotionPreference,
    ) -> Result<Option<S::Listener>, BrowserError> {
        if motion.is_reduced() {
            log::info!("Reduced motion requested, parallax disabled");
            return Ok(None);
        }
        let pointer = self.pointer.clone();
        let listener = surface.listen(Box::new(move |sample| {
            pointer.set(normalize(&sample));
        }))?;
        Ok(Some(listener))
    }

    pub fn tilt(&self) -> Derived<TiltTransform> {
        self.pointer.map(|p| TiltTransform::from(*p))
    }

    pub fn float_y(&self) -> Derived<f64> {
        self.pointer.map(|p| float_offset(*p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const RECT: ContainerRect = ContainerRect {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 200.0,
    };

    fn sample(x: f64, y: f64) -> PointerSample {
        PointerSample {
            client_x: x,
            client_y: y,
            rect: RECT,
        }
    }

    type Handlers = Rc<RefCell<Vec<(u64, Box<dyn FnMut(PointerSample)>)>>>;

    #[derive(Default)]
    struct FakeSurface {
        handlers: Handlers,
        next_id: Cell<u64>,
    }

    struct FakeListener {
        id: u64,
        handlers: Handlers,
    }

    impl Drop for FakeListener {
        fn drop(&mut self) {
            self.handlers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }

    impl PointerSurface for FakeSurface {
        type Listener = FakeListener;

        fn listen(
            &self,
            on_move: Box<dyn FnMut(PointerSample)>,
        ) -> Result<FakeListener, BrowserError> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.handlers.borrow_mut().push((id, on_move));
            Ok(FakeListener {
                id,
                handlers: self.handlers.clone(),
            })
        }
    }

    impl FakeSurface {
        fn active(&self) -> usize {
            self.handlers.borrow().len()
        }

        fn move_to(&self, x: f64, y: f64) {
            for (_, handler) in self.handlers.borrow_mut().iter_mut() {
                handler(sample(x, y));
            }
        }
    }

    #[test]
    fn center_maps_to_origin() {
        let p = normalize(&sample(300.0, 150.0));
        assert_eq!(p, PointerState { x: 0.0, y: 0.0 });
    }

    #[test]
    fn edges_map_to_unit_bounds_exactly() {
        assert_eq!(normalize(&sample(100.0, 150.0)).x, -1.0);
        assert_eq!(normalize(&sample(500.0, 150.0)).x, 1.0);
        assert_eq!(normalize(&sample(300.0, 50.0)).y, -1.0);
        assert_eq!(normalize(&sample(300.0, 250.0)).y, 1.0);
    }

    #[test]
    fn interior_points_stay_within_unit_square() {
        for i in 1..40 {
            for j in 1..20 {
                let x = RECT.left + RECT.width * i as f64 / 40.0;
                let y = RECT.top + RECT.height * j as f64 / 20.0;
                let p = normalize(&sample(x, y));
                assert!((-1.0..=1.0).contains(&p.x), "x out of range at {x}");
                assert!((-1.0..=1.0).contains(&p.y), "y out of range at {y}");
            }
        }
    }

    #[test]
    fn outside_points_are_not_clamped() {
        let p = normalize(&sample(900.0, 0.0));
        assert_eq!(p.x, 3.0);
        assert_eq!(p.y, -1.5);
    }

    #[test]
    fn empty_container_yields_zero() {
        let p = normalize(&PointerSample {
            client_x: 40.0,
            client_y: 40.0,
            rect: ContainerRect::default(),
        });
        assert_eq!(p, PointerState::default());
    }

    #[test]
    fn transforms_scale_pointer_linearly() {
        let pointer = PointerState { x: 0.5, y: -0.5 };
        let tilt = TiltTransform::from(pointer);
        assert_eq!(tilt.rotate_x_deg, -3.0);
        assert_eq!(tilt.rotate_y_deg, -3.0);
        assert_eq!(float_offset(pointer), -4.0);
        assert_eq!(
            tilt.css(),
            "transform: perspective(1200px) rotateX(-3.00deg) rotateY(-3.00deg);"
        );
    }

    #[test]
    fn pointer_moves_update_derived_transforms() {
        let surface = FakeSurface::default();
        let controller = ParallaxController::new();
        let tilt = controller.tilt();
        let _listener = controller
            .attach(&surface, MotionPreference::Full)
            .unwrap()
            .expect("listener attached");

        surface.move_to(500.0, 250.0);

        assert_eq!(controller.pointer().get(), PointerState { x: 1.0, y: 1.0 });
        assert_eq!(tilt.get().rotate_x_deg, 6.0);
        assert_eq!(tilt.get().rotate_y_deg, -6.0);
        assert_eq!(controller.float_y().get(), 8.0);
    }

    #[test]
    fn reduced_motion_never_attaches() {
        let surface = FakeSurface::default();
        let controller = ParallaxController::new();
        let tilt = controller.tilt();

        let listener = controller
            .attach(&surface, MotionPreference::Reduced)
            .unwrap();
        assert!(listener.is_none());
        assert_eq!(surface.active(), 0);

        surface.move_to(500.0, 250.0);
        surface.move_to(120.0, 60.0);
        assert_eq!(tilt.get(), TiltTransform::default());
        assert_eq!(controller.pointer().get(), PointerState::default());
    }

    #[test]
    fn detach_on_unmount_is_symmetric() {
        let surface = FakeSurface::default();
        let controller = ParallaxController::new();
        let updates = Rc::new(Cell::new(0));
        let counter = updates.clone();
        let tilt = controller.tilt();
        let _sub = tilt.subscribe(move |_| counter.set(counter.get() + 1));

        let listener = controller
            .attach(&surface, MotionPreference::Full)
            .unwrap();
        assert_eq!(surface.active(), 1);
        surface.move_to(400.0, 100.0);
        assert_eq!(updates.get(), 1);
        let before = tilt.get();

        drop(listener);
        assert_eq!(surface.active(), 0);

        surface.move_to(110.0, 240.0);
        assert_eq!(updates.get(), 1);
        assert_eq!(tilt.get(), before);
    }
}

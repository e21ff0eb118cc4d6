//! Frame-driven tweens.
//!
//! An [`Animatable`] owns a state cell and rewrites it once per frame while a
//! tween is running. The first frame after `animate_to` anchors the start time,
//! so a tween of `duration_millis` lands exactly on its target that many
//! milliseconds of frame time later.

use std::cell::RefCell;
use std::rc::Rc;

use glide_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Easing curves applied to a tween's linear progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    LinearEasing,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material standard curve.
    FastOutSlowInEasing,
    LinearOutSlowInEasing,
    FastOutLinearEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

/// Evaluates a unit cubic bezier (anchored at (0,0) and (1,1)) at x = `fraction`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton first; curves with flat spots fall through to bisection.
    let mut t = fraction;
    for _ in 0..8 {
        let error = sample(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            return sample(ay, by, cy, t);
        }
        let derivative = slope(ax, bx, cx, t);
        if derivative.abs() < 1e-6 {
            break;
        }
        t = (t - error / derivative).clamp(0.0, 1.0);
    }

    let (mut low, mut high) = (0.0f32, 1.0f32);
    t = fraction;
    for _ in 0..20 {
        let error = sample(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            break;
        }
        if error > 0.0 {
            high = t;
        } else {
            low = t;
        }
        t = 0.5 * (low + high);
    }
    sample(ay, by, cy, t)
}

/// How a tween runs: its duration and easing, after an optional delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Eased progress in [0, 1] after `elapsed_nanos` of frame time, or `None`
    /// while still inside the delay.
    pub fn progress_at(&self, elapsed_nanos: u64) -> Option<f32> {
        let delay_nanos = self.delay_millis.saturating_mul(1_000_000);
        if elapsed_nanos < delay_nanos {
            return None;
        }
        let duration_nanos = self.duration_millis.saturating_mul(1_000_000).max(1);
        let linear = ((elapsed_nanos - delay_nanos) as f64 / duration_nanos as f64).min(1.0);
        Some(self.easing.transform(linear as f32))
    }

    pub fn total_nanos(&self) -> u64 {
        self.delay_millis
            .saturating_add(self.duration_millis)
            .saturating_mul(1_000_000)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Value holder that tweens towards a target on the runtime's frame clock.
pub struct Animatable<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + 'static> {
    state: MutableState<T>,
    runtime: RuntimeHandle,
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            state: MutableState::with_runtime(initial.clone(), runtime.clone()),
            runtime,
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::default(),
            start_time_nanos: None,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Start a tween from the current value to `target`, replacing any running one.
    pub fn animate_to(&self, target: T, spec: AnimationSpec) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.start = inner.state.get();
            inner.target = target;
            inner.spec = spec;
            inner.start_time_nanos = None;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jump to `target` and stop any running tween.
    pub fn snap_to(&self, target: T) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.start = target.clone();
        inner.target = target.clone();
        inner.start_time_nanos = None;
        inner.state.set_value(target);
    }

    pub fn value(&self) -> T {
        self.inner.borrow().state.get()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn spec(&self) -> AnimationSpec {
        self.inner.borrow().spec
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    pub fn state(&self) -> State<T> {
        self.inner.borrow().state.as_state()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        if registration.is_active() {
            this.borrow_mut().registration = Some(registration);
        } else {
            log::debug!("runtime gone, tween will not run");
        }
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let schedule_next = {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            match inner.spec.progress_at(elapsed_nanos) {
                None => true,
                Some(_) if elapsed_nanos >= inner.spec.total_nanos() => {
                    let target = inner.target.clone();
                    inner.start = target.clone();
                    inner.start_time_nanos = None;
                    inner.state.set_value(target);
                    false
                }
                Some(progress) => {
                    let value = inner.start.lerp(&inner.target, progress);
                    inner.state.set_value(value);
                    true
                }
            }
        };

        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;

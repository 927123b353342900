//! Choosing between several readings of the same text.

use std::fmt::{Debug, Formatter};

use coordconv_types::CoordinateType;

use crate::parse::Candidate;

/// Arguments of an ambiguity event, given to an [`AmbiguityListener`].
#[derive(Debug)]
pub struct AmbiguousEventArgs<'a> {
    candidates: &'a [Candidate],
    selected: Option<usize>,
    handled: bool,
}

impl<'a> AmbiguousEventArgs<'a> {
    /// Readings of the text, latitude first.
    pub fn candidates(&self) -> &'a [Candidate] {
        self.candidates
    }

    /// Selects the candidate with the given index and marks the event handled.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
        self.handled = true;
    }

    /// Index selected by the listener.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns true if the listener made a decision.
    pub fn handled(&self) -> bool {
        self.handled
    }
}

/// Listener that lets the application decide between ambiguous readings, e.g. by asking the user.
///
/// The listener is called synchronously. If it does not [select](AmbiguousEventArgs::select) a
/// candidate, the default choice is used.
pub trait AmbiguityListener: Send + Sync {
    /// Handle the event.
    fn on_ambiguous(&self, args: &mut AmbiguousEventArgs<'_>);
}

impl<T> AmbiguityListener for T
where
    T: for<'a, 'b> Fn(&'a mut AmbiguousEventArgs<'b>) + Send + Sync,
{
    fn on_ambiguous(&self, args: &mut AmbiguousEventArgs<'_>) {
        self(args)
    }
}

/// The chosen reading.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Resolution {
    /// Chosen candidate.
    pub candidate: Candidate,
    /// Returns true if a listener made the choice. If false, the default policy did and the caller
    /// may want to ask the user itself.
    pub handled: bool,
}

/// Picks one of several readings of a text.
///
/// Without a listener (or if prompting is disabled, or the listener does not decide) the first
/// candidate of the preferred coordinate type is chosen, falling back to the first candidate.
pub struct AmbiguityResolver {
    preferred: CoordinateType,
    prompt: bool,
    listener: Option<Box<dyn AmbiguityListener>>,
}

impl Debug for AmbiguityResolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmbiguityResolver")
            .field("preferred", &self.preferred)
            .field("prompt", &self.prompt)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl AmbiguityResolver {
    /// Creates a resolver without listener that prefers the given type.
    pub fn new(preferred: CoordinateType) -> Self {
        Self {
            preferred,
            prompt: true,
            listener: None,
        }
    }

    /// Attaches the listener.
    pub fn with_listener(mut self, listener: impl AmbiguityListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Enables or disables consulting the listener.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Preferred coordinate type of the default policy.
    pub fn preferred(&self) -> CoordinateType {
        self.preferred
    }

    /// Picks one of the candidates. Returns `None` only if there are no candidates.
    ///
    /// The listener is consulted only when the candidates read the text in different axis orders
    /// and those readings give different positions. Any other set of candidates, such as the MGRS
    /// and USNG readings of one grid reference or the two equal readings of `0 0`, is settled by
    /// the default policy.
    pub fn resolve(&self, candidates: &[Candidate]) -> Option<Resolution> {
        match candidates {
            [] => return None,
            [candidate] => {
                return Some(Resolution {
                    candidate: *candidate,
                    handled: false,
                })
            }
            _ => {}
        }

        if has_axis_order_choice(candidates) {
            if let Some(resolution) = self.ask_listener(candidates) {
                return Some(resolution);
            }
        }

        let candidate = candidates
            .iter()
            .find(|candidate| candidate.coordinate_type() == self.preferred)
            .or_else(|| candidates.first())?;

        log::debug!(
            "Resolved {} candidates to {:?} by default",
            candidates.len(),
            candidate
        );

        Some(Resolution {
            candidate: *candidate,
            handled: false,
        })
    }

    fn ask_listener(&self, candidates: &[Candidate]) -> Option<Resolution> {
        if !self.prompt {
            return None;
        }

        let listener = self.listener.as_ref()?;
        let mut args = AmbiguousEventArgs {
            candidates,
            selected: None,
            handled: false,
        };
        listener.on_ambiguous(&mut args);

        if !args.handled {
            return None;
        }

        match args.selected.and_then(|index| candidates.get(index)) {
            Some(candidate) => Some(Resolution {
                candidate: *candidate,
                handled: true,
            }),
            None => {
                log::warn!(
                    "Ambiguity listener selected invalid candidate {:?} of {}",
                    args.selected,
                    candidates.len()
                );
                None
            }
        }
    }
}

fn has_axis_order_choice(candidates: &[Candidate]) -> bool {
    let mut ordered = candidates
        .iter()
        .filter(|candidate| candidate.axis_order.is_some());
    let Some(first) = ordered.next() else {
        return false;
    };

    ordered.any(|candidate| {
        candidate.axis_order != first.axis_order && candidate.value != first.value
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use coordconv_types::{CoordinateDd, CoordinateValue};

    use super::*;
    use crate::parse::{detect, AxisOrder};

    fn dd(lat: f64, lon: f64) -> CoordinateValue {
        CoordinateDd::new(lat, lon).unwrap().into()
    }

    #[test]
    fn empty() {
        assert_eq!(AmbiguityResolver::new(CoordinateType::Dd).resolve(&[]), None);
    }

    #[test]
    fn single_candidate_skips_listener() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let resolver = AmbiguityResolver::new(CoordinateType::Dd).with_listener(
            move |args: &mut AmbiguousEventArgs| {
                counter.fetch_add(1, Ordering::SeqCst);
                args.select(0);
            },
        );

        let candidate = Candidate::new(dd(1.0, 2.0));
        let resolution = resolver.resolve(&[candidate]).unwrap();
        assert_eq!(resolution.candidate, candidate);
        assert!(!resolution.handled);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn default_policy_is_latitude_first() {
        let candidates = detect("45.0 10.0");
        let resolver = AmbiguityResolver::new(CoordinateType::Dd);

        let resolution = resolver.resolve(&candidates).unwrap();
        assert_eq!(resolution.candidate.value, dd(45.0, 10.0));
        assert_eq!(resolution.candidate.axis_order, Some(AxisOrder::LatitudeFirst));
        assert!(!resolution.handled);

        assert_eq!(resolver.resolve(&candidates), Some(resolution));
    }

    #[test]
    fn default_policy_prefers_type() {
        let candidates = detect("19TDE1463928236");

        let resolution = AmbiguityResolver::new(CoordinateType::Usng)
            .resolve(&candidates)
            .unwrap();
        assert_eq!(resolution.candidate.coordinate_type(), CoordinateType::Usng);

        let resolution = AmbiguityResolver::new(CoordinateType::Default)
            .resolve(&candidates)
            .unwrap();
        assert_eq!(resolution.candidate.coordinate_type(), CoordinateType::Mgrs);
    }

    #[test]
    fn listener_skipped_without_axis_order_choice() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let resolver = AmbiguityResolver::new(CoordinateType::Usng).with_listener(
            move |args: &mut AmbiguousEventArgs| {
                counter.fetch_add(1, Ordering::SeqCst);
                args.select(0);
            },
        );

        let grid = detect("19TDE1463928236");
        assert_eq!(grid.len(), 2);
        let resolution = resolver.resolve(&grid).unwrap();
        assert_eq!(resolution.candidate.coordinate_type(), CoordinateType::Usng);
        assert!(!resolution.handled);

        let zero = detect("0 0");
        assert_eq!(zero.len(), 2);
        let resolution = resolver.resolve(&zero).unwrap();
        assert_eq!(resolution.candidate.value, dd(0.0, 0.0));
        assert!(!resolution.handled);

        assert_eq!(calls.load(Ordering::SeqCst), 0);

        resolver.resolve(&detect("45.0 10.0")).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn listener_selects() {
        let resolver = AmbiguityResolver::new(CoordinateType::Dd).with_listener(
            |args: &mut AmbiguousEventArgs| {
                assert_eq!(args.candidates().len(), 2);
                args.select(1);
            },
        );

        let resolution = resolver.resolve(&detect("45.0 10.0")).unwrap();
        assert_eq!(resolution.candidate.value, dd(10.0, 45.0));
        assert!(resolution.handled);
    }

    #[test]
    fn unhandled_listener_falls_back() {
        let resolver = AmbiguityResolver::new(CoordinateType::Dd)
            .with_listener(|_: &mut AmbiguousEventArgs| {});

        let resolution = resolver.resolve(&detect("45.0 10.0")).unwrap();
        assert_eq!(resolution.candidate.value, dd(45.0, 10.0));
        assert!(!resolution.handled);
    }

    #[test]
    fn invalid_selection_falls_back() {
        let resolver = AmbiguityResolver::new(CoordinateType::Dd)
            .with_listener(|args: &mut AmbiguousEventArgs| args.select(7));

        let resolution = resolver.resolve(&detect("45.0 10.0")).unwrap();
        assert_eq!(resolution.candidate.value, dd(45.0, 10.0));
        assert!(!resolution.handled);
    }

    #[test]
    fn prompt_disabled() {
        let resolver = AmbiguityResolver::new(CoordinateType::Dd)
            .with_listener(|args: &mut AmbiguousEventArgs| args.select(1))
            .with_prompt(false);

        let resolution = resolver.resolve(&detect("45.0 10.0")).unwrap();
        assert_eq!(resolution.candidate.value, dd(45.0, 10.0));
        assert!(!resolution.handled);
    }
}

use crate::dom::SectionDom;
use crate::registry::Registry;
use crate::tween::{Easing, Tween};

/// A computed same-document navigation target.
///
/// `coordinate` is the vertical scroll position that places the hash target
/// at its correct horizontal position inside its group. Hosts apply it with
/// [`HashScroller`] when `animate` is set, or jump immediately otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTarget {
    pub coordinate: f64,
    pub animate: bool,
}

/// Resolves a clicked in-page anchor link.
///
/// Returns `Some` when the fragment's target lies inside a group's scroll
/// wrapper — the host must then suppress the default jump and scroll to the
/// computed coordinate instead. `None` means the link is none of our
/// business.
pub fn on_link_click<D: SectionDom>(
    dom: &D,
    registry: &Registry<D>,
    href: &str,
) -> Option<ScrollTarget> {
    let fragment = href.rsplit_once('#').map(|(_, f)| f).unwrap_or(href);
    let coordinate = registry.scroll_target_for_hash(dom, fragment)?;
    htrace!(fragment, coordinate, "hash link intercepted");
    Some(ScrollTarget {
        coordinate,
        animate: true,
    })
}

/// Resolves a hash already present in the page URL on initial load.
///
/// The computed scroll is applied without animation, and the environment's
/// automatic scroll-position restoration is turned off so it cannot fight the
/// repositioning.
pub fn on_initial_hash<D: SectionDom>(
    dom: &mut D,
    registry: &Registry<D>,
    hash: &str,
) -> Option<ScrollTarget> {
    let coordinate = registry.scroll_target_for_hash(dom, hash)?;
    dom.disable_scroll_restoration();
    Some(ScrollTarget {
        coordinate,
        animate: false,
    })
}

/// Drives the smooth scroll for intercepted hash links.
///
/// The host ticks it once per frame and applies the returned coordinate as
/// the real scroll position (which in turn feeds the registry's scroll
/// handling).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HashScroller {
    tween: Option<Tween>,
}

impl HashScroller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// A user scroll cancels any in-flight hash animation.
    pub fn cancel(&mut self) {
        self.tween = None;
    }

    /// Starts toward `target` from the current scroll position. Non-animated
    /// targets clear any tween and return the destination for an immediate
    /// jump.
    pub fn start(
        &mut self,
        from: f64,
        target: ScrollTarget,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> f64 {
        if target.animate {
            self.tween = Some(Tween::new(from, target.coordinate, now_ms, duration_ms, easing));
        } else {
            self.tween = None;
        }
        target.coordinate
    }

    /// Advances the animation; returns the coordinate to scroll to, or `None`
    /// once idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let tween = self.tween?;
        let coordinate = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(coordinate)
    }
}

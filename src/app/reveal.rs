use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{latch, THRESHOLD};

/// Watches `target` and reports whether it has been scrolled into view yet.
///
/// The returned signal starts `false` and flips to `true` the first time at
/// least [`THRESHOLD`] of the element intersects the viewport. It never goes
/// back to `false`. On the server nothing is observed and the signal stays
/// `false`, so sections render in their hidden state and animate in after
/// hydration.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let (revealed, set_revealed) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let intersecting = entries.iter().any(|e| e.is_intersecting());
            let was = revealed.get_untracked();
            let now = latch(was, intersecting);
            if now != was {
                log::debug!("section revealed");
                set_revealed(now);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![THRESHOLD]),
    );

    revealed.into()
}

use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::ProoferEntry;
use wasm_bindgen::JsCast;

use leptos_leaflet::leaflet;

const AVATAR_FALLBACK: &str = "https://randomuser.me/api/portraits/men/32.jpg";

const ICON_SIZE: (f64, f64) = (70.0, 70.0);
const ICON_SIZE_HOVERED: (f64, f64) = (84.0, 84.0);

/// Avatar provider URL keyed on the X username, with a placeholder portrait
/// when the provider has nothing for it.
pub fn avatar_url(username: &str) -> String {
    format!(
        "https://unavatar.io/x/{}?fallback={}",
        urlencoding::encode(username),
        urlencoding::encode(AVATAR_FALLBACK)
    )
}

pub fn profile_url(username: &str) -> String {
    format!("https://twitter.com/{}", urlencoding::encode(username))
}

/// One draggable avatar pin. Hover grows the icon (presentational only);
/// releasing a drag reports the new position through `on_move`.
#[component]
pub fn ProoferMarker<F>(entry: ProoferEntry, idx: usize, on_move: F) -> impl IntoView
where
    F: Fn(usize, f64, f64) + 'static + Copy + Send + Sync,
{
    let hovered = RwSignal::new(false);
    let avatar = avatar_url(&entry.username);
    let profile = profile_url(&entry.username);

    let icon_size = Signal::derive(move || {
        Some(if hovered.get() { ICON_SIZE_HOVERED } else { ICON_SIZE })
    });
    // Anchor at the bottom center of the icon
    let icon_anchor = Signal::derive(move || {
        let (w, h) = if hovered.get() { ICON_SIZE_HOVERED } else { ICON_SIZE };
        Some((w / 2.0, h))
    });

    let mouse_events = MouseEvents::new()
        .on_mouse_over(move |_| hovered.set(true))
        .on_mouse_out(move |_| hovered.set(false));

    let drag_events = DragEvents::new().on_drag_end(move |ev| {
        let marker: leaflet::Marker = ev.target().unchecked_into();
        let at = marker.get_lat_lng();
        on_move(idx, at.lat(), at.lng());
    });

    view! {
        <Marker
            position=Position::new(entry.lat, entry.long)
            draggable=true
            icon_url=Some(avatar.clone())
            icon_size=icon_size
            icon_anchor=icon_anchor
            mouse_events=mouse_events
            drag_events=drag_events
        >
            <Popup>
                <div class="proofer-popup">
                    <img class="proofer-popup-avatar" src=avatar alt=entry.username.clone()/>
                    <h3 class="proofer-popup-name">{format!("@{}", entry.username)}</h3>
                    <div class="proofer-popup-coords">
                        {format!("{:.4}, {:.4}", entry.lat, entry.long)}
                    </div>
                    <p class="proofer-popup-message">{format!("\u{201c}{}\u{201d}", entry.message)}</p>
                    <a class="proofer-popup-follow" href=profile target="_blank" rel="noopener noreferrer">
                        "Follow on X"
                    </a>
                </div>
            </Popup>
        </Marker>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_url_is_keyed_on_the_username() {
        let url = avatar_url("alice");
        assert!(url.starts_with("https://unavatar.io/x/alice?fallback="));
    }

    #[test]
    fn avatar_url_escapes_awkward_usernames() {
        let url = avatar_url("with space/slash");
        assert!(url.contains("with%20space%2Fslash"));
    }
}

use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::{connecting_segments, ProoferEntry};

use crate::{components::loading::LoadingView, views::map::proofer_marker::ProoferMarker};

#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;

/// Default view roughly centered on the Indonesian archipelago.
const MAP_CENTER: (f64, f64) = (-2.5, 118.0);
const MAP_ZOOM: f64 = 4.0;

/// World map with one draggable avatar marker per entry and a polyline for
/// every pair of entries. Drag-end positions are reported through
/// `on_marker_move`, keyed by the entry's index in `entries`.
#[component]
pub fn SpotMap<F>(entries: Memo<Vec<ProoferEntry>>, on_marker_move: F) -> impl IntoView
where
    F: Fn(usize, f64, f64) + 'static + Copy + Send + Sync,
{
    // Delay map rendering until after hydration
    let map_ready = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let window = web_sys::window().expect("no global `window` exists");
        let _ = window.request_animation_frame(
            wasm_bindgen::closure::Closure::once_into_js(move || {
                map_ready.set(true);
            })
            .as_ref()
            .unchecked_ref(),
        );
    });

    view! {
        <div class="spot-map-container">
            {move || {
                if map_ready.get() {
                    view! {
                        <MapContainer
                            class="spot-map"
                            center=Position::new(MAP_CENTER.0, MAP_CENTER.1)
                            zoom=MAP_ZOOM
                            set_view=true
                        >
                            <TileLayer
                                url="https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png"
                                attribution="&copy; <a href=\"https://carto.com/\">CARTO</a>"
                            />

                            {move || {
                                let entries = entries.get();
                                let segments = connecting_segments(&entries);
                                view! {
                                    {segments.into_iter().map(|segment| {
                                        view! {
                                            <Polyline
                                                positions=positions(&[
                                                    (segment.start.lat, segment.start.long),
                                                    (segment.end.lat, segment.end.long),
                                                ])
                                                color="#FE11C5"
                                                weight=2.0
                                                opacity=0.6
                                            />
                                        }
                                    }).collect_view()}

                                    {entries.into_iter().enumerate().map(|(idx, entry)| {
                                        view! {
                                            <ProoferMarker entry=entry idx=idx on_move=on_marker_move/>
                                        }
                                    }).collect_view()}
                                }
                            }}
                        </MapContainer>
                    }.into_any()
                } else {
                    view! {
                        <div class="spot-map-loading">
                            <LoadingView message=Some("Initializing map...".to_string()) />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

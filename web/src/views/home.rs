use leptos::{prelude::*, task::spawn_local};
use shared_types::{unique_location_count, ProoferEntry};

use crate::{
    components::{city_input::CityInput, error::ErrorView},
    server::{fetch_entries, move_entry, submit_entry},
    views::map::spot_map::SpotMap,
};

fn scroll_to_map() {
    if let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("map-section"))
    {
        section.scroll_into_view();
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    // Transient cache of the store's rows, resynced by full refetch after
    // every submit and patched in place after a confirmed marker drag.
    let markers = RwSignal::new(Vec::<ProoferEntry>::new());
    let loading = RwSignal::new(false);
    let form_error = RwSignal::new(Option::<String>::None);
    let search_query = RwSignal::new(String::new());

    let refresh = move || async move {
        // A failed fetch leaves the cache at its prior value
        if let Ok(entries) = fetch_entries().await {
            markers.set(entries);
        }
    };

    Effect::new(move |_| {
        spawn_local(async move {
            loading.set(true);
            refresh().await;
            loading.set(false);
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (submitted_username, submitted_city, submitted_message) =
            (username.get(), city.get(), message.get());
        spawn_local(async move {
            loading.set(true);
            form_error.set(None);
            match submit_entry(submitted_username, submitted_city, submitted_message).await {
                Ok(()) => {
                    refresh().await;
                    username.set(String::new());
                    city.set(String::new());
                    message.set(String::new());
                    scroll_to_map();
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };

    let filtered = Memo::new(move |_| {
        let query = search_query.get();
        markers
            .get()
            .into_iter()
            .filter(|entry| entry.matches_query(&query))
            .collect::<Vec<_>>()
    });

    // idx refers to the filtered list the map renders; resolve the username
    // there, then patch only that entry once the store confirms the move.
    let on_marker_move = move |idx: usize, lat: f64, long: f64| {
        let Some(moved) = filtered.get_untracked().get(idx).cloned() else {
            return;
        };
        spawn_local(async move {
            if move_entry(moved.username.clone(), lat, long).await.is_ok() {
                markers.update(|all| {
                    if let Some(entry) = all.iter_mut().find(|e| e.username == moved.username) {
                        entry.lat = lat;
                        entry.long = long;
                    }
                });
            }
        });
    };

    view! {
        <div class="home-page">
            <header class="hero">
                <div class="hero-text">
                    <h1>"Proofer Spot Map"</h1>
                    <p class="hero-tagline">
                        "Connect with fellow proofers around the world. Share your location, "
                        "your story, and build a global community."
                    </p>
                    <div class="hero-badges">
                        <span class="hero-badge">{move || markers.get().len()} " Proofers"</span>
                        <span class="hero-badge">"Global Network"</span>
                        <span class="hero-badge">"Real-time Updates"</span>
                    </div>
                </div>

                <div class="join-card">
                    <h2>"Join the Community"</h2>
                    <p>"Add your location and connect with proofers worldwide"</p>

                    <form class="join-form" on:submit=on_submit>
                        <label class="join-label">"X (Twitter) Username"</label>
                        <input
                            type="text"
                            class="join-input"
                            placeholder="Enter your X username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            required
                        />

                        <label class="join-label">"Your City"</label>
                        <CityInput city=city />

                        <label class="join-label">"Share Your Story"</label>
                        <textarea
                            class="join-textarea"
                            placeholder="Share a quote or fun fact about your city"
                            rows=4
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                            required
                        ></textarea>

                        {move || form_error.get().map(|error| view! {
                            <ErrorView message=Some(error) />
                        })}

                        <button class="join-submit" type="submit" disabled=move || loading.get()>
                            {move || if loading.get() { "Adding to Map..." } else { "Add Me to the Map" }}
                        </button>
                    </form>
                </div>
            </header>

            <main class="home-main">
                <section class="search-section">
                    <h2>"Find Proofers"</h2>
                    <div class="search-box">
                        <input
                            type="text"
                            class="search-input"
                            placeholder="Search by username or message..."
                            prop:value=move || search_query.get()
                            on:input=move |ev| search_query.set(event_target_value(&ev))
                        />
                        {move || if search_query.get().is_empty() {
                            view! { <></> }.into_any()
                        } else {
                            view! {
                                <button
                                    class="search-clear"
                                    aria-label="Clear search"
                                    on:click=move |_| search_query.set(String::new())
                                >
                                    "\u{2715}"
                                </button>
                            }.into_any()
                        }}
                    </div>
                </section>

                <section id="map-section" class="map-section">
                    <h2>"Global Proofer Network"</h2>
                    <p class="map-hint">"Drag markers to update your location in real-time"</p>
                    <SpotMap entries=filtered on_marker_move=on_marker_move />
                </section>

                <section class="stats-card">
                    <h3>"Community Stats"</h3>
                    <div class="stats-grid">
                        <div class="stat-item">
                            <div class="stat-number">{move || markers.get().len()}</div>
                            <div class="stat-label">"Active Proofers"</div>
                        </div>
                        <div class="stat-item">
                            <div class="stat-number">
                                {move || unique_location_count(&markers.get())}
                            </div>
                            <div class="stat-label">"Unique Locations"</div>
                        </div>
                    </div>
                </section>

                <section class="how-it-works">
                    <h3>"How It Works"</h3>
                    <ol>
                        <li>
                            <strong>"Enter your details."</strong>
                            " Fill in your X username, pick your city from the suggestions, and share a short message."
                        </li>
                        <li>
                            <strong>"Add to map."</strong>
                            " Your pin appears on the global network, connected to every other proofer."
                        </li>
                        <li>
                            <strong>"Explore and connect."</strong>
                            " Browse the map, open markers to read stories, and follow people you find."
                        </li>
                    </ol>
                </section>
            </main>
        </div>
    }
}
